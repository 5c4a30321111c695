//! Spiral tuning constants and the crate error type.
//!
//! Every number in the spiral path is configuration. Only the clamp
//! invariants (scale and opacity floors, non-negative z-index) are part of
//! the engine's contract; the defaults below reproduce the showroom look.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced outside the per-frame path.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// A configuration value is out of its accepted range.
    #[error("config error: {0}")]
    Config(String),

    /// Configuration JSON could not be parsed.
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GalleryResult<T> = Result<T, GalleryError>;

/// Tunable constants of the spiral camera path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Spiral turns per unit of progress.
    pub angular_speed: f32,
    /// Radius of the first item's orbit.
    pub base_radius: f32,
    /// Extra radius gained by the last item.
    pub radius_growth: f32,
    /// Vertical offset between the first and last item.
    pub vertical_spacing: f32,
    /// How far the whole spiral rises per unit of spiral progress.
    pub vertical_travel: f32,
    /// Depth at which an item reaches `min_scale`.
    pub scale_falloff_distance: f32,
    /// Scale floor for items far from the viewer.
    pub min_scale: f32,
    /// Opacity floor.
    pub min_opacity: f32,
    /// Maximum forward/backward tilt in degrees.
    pub max_tilt_deg: f32,
    /// Extra Y rotation (degrees) per unit of spiral progress.
    pub spin_deg: f32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            angular_speed: 2.0,
            base_radius: 300.0,
            radius_growth: 200.0,
            vertical_spacing: 100.0,
            vertical_travel: 800.0,
            scale_falloff_distance: 800.0,
            min_scale: 0.3,
            min_opacity: 0.2,
            max_tilt_deg: 15.0,
            spin_deg: 90.0,
        }
    }
}

impl SpiralConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> GalleryResult<()> {
        let fields = [
            ("angular_speed", self.angular_speed),
            ("base_radius", self.base_radius),
            ("radius_growth", self.radius_growth),
            ("vertical_spacing", self.vertical_spacing),
            ("vertical_travel", self.vertical_travel),
            ("scale_falloff_distance", self.scale_falloff_distance),
            ("min_scale", self.min_scale),
            ("min_opacity", self.min_opacity),
            ("max_tilt_deg", self.max_tilt_deg),
            ("spin_deg", self.spin_deg),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GalleryError::Config(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= 1.0) {
            return Err(GalleryError::Config(format!(
                "min_scale must be in (0, 1], got {}",
                self.min_scale
            )));
        }
        if !(self.min_opacity > 0.0 && self.min_opacity <= 1.0) {
            return Err(GalleryError::Config(format!(
                "min_opacity must be in (0, 1], got {}",
                self.min_opacity
            )));
        }
        if self.scale_falloff_distance <= 0.0 {
            return Err(GalleryError::Config(format!(
                "scale_falloff_distance must be > 0, got {}",
                self.scale_falloff_distance
            )));
        }
        if self.base_radius < 0.0 {
            return Err(GalleryError::Config(format!(
                "base_radius must be >= 0, got {}",
                self.base_radius
            )));
        }
        Ok(())
    }

    /// Load from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> GalleryResult<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SpiralConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_falloff() {
        let cfg = SpiralConfig {
            scale_falloff_distance: 0.0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(GalleryError::Config(_))));
    }

    #[test]
    fn rejects_nan() {
        let cfg = SpiralConfig {
            angular_speed: f32::NAN,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("angular_speed"));
    }

    #[test]
    fn rejects_floor_above_one() {
        let cfg = SpiralConfig {
            min_opacity: 1.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn json_partial_override() {
        let cfg = SpiralConfig::from_json(r#"{ "base_radius": 420.0 }"#).unwrap();
        assert_eq!(cfg.base_radius, 420.0);
        assert_eq!(cfg.angular_speed, 2.0);
    }

    #[test]
    fn json_parse_error() {
        let err = SpiralConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GalleryError::Json(_)));
    }

    #[test]
    fn json_invalid_values() {
        let err = SpiralConfig::from_json(r#"{ "min_scale": 0.0 }"#).unwrap_err();
        assert!(matches!(err, GalleryError::Config(_)));
    }
}
