//! Spiral camera path.
//!
//! Maps `(index, total, progress)` to a 3D placement. Items sit on a
//! widening helix: each item's base angle comes from its position in the
//! sequence (two full turns from first to last), and scrolling winds the
//! whole helix around the viewer while lifting it upward.
//!
//! The mapping is closed-form and stateless, so one frame costs O(n) with
//! no allocation beyond the output vector.

use std::f32::consts::{PI, TAU};

use crate::config::SpiralConfig;
use crate::render::TransformDescriptor;

/// Base angular spread of the sequence: two full turns.
const SEQUENCE_TURNS: f32 = 2.0;

/// Pure spiral transform evaluator.
#[derive(Debug, Clone, Default)]
pub struct SpiralTransformEngine {
    cfg: SpiralConfig,
}

impl SpiralTransformEngine {
    pub fn new(cfg: SpiralConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &SpiralConfig {
        &self.cfg
    }

    /// Placement of item `index` out of `total` at scroll `progress`.
    ///
    /// `progress` is clamped to `[0, 1]`, infinities included (NaN reads as 0). An index past the
    /// end clamps to the last item. `total == 0` has no valid item and yields
    /// the identity placement.
    pub fn transform(&self, index: usize, total: usize, progress: f32) -> TransformDescriptor {
        if total == 0 {
            return TransformDescriptor::identity(0);
        }
        let index = if index >= total {
            log::debug!("spiral: index {} out of range for {} items, clamping", index, total);
            total - 1
        } else {
            index
        };
        self.place(normalized_index(index, total), clamp_progress(progress))
    }

    /// Placements for a whole gallery from one progress snapshot.
    pub fn transform_all(&self, total: usize, progress: f32) -> Vec<TransformDescriptor> {
        let p = clamp_progress(progress);
        (0..total)
            .map(|i| self.place(normalized_index(i, total), p))
            .collect()
    }

    /// Helix angle (radians) for an item; exposed for the render sink's
    /// lighting and for continuity checks.
    pub fn angle(&self, index: usize, total: usize, progress: f32) -> f32 {
        if total == 0 {
            return 0.0;
        }
        let n = normalized_index(index.min(total - 1), total);
        let sp = clamp_progress(progress) * self.cfg.angular_speed;
        helix_angle(n, sp)
    }

    fn place(&self, n: f32, progress: f32) -> TransformDescriptor {
        let c = &self.cfg;
        let sp = progress * c.angular_speed;

        let radius = n.mul_add(c.radius_growth, c.base_radius);
        let angle = helix_angle(n, sp);
        let (sin_a, cos_a) = angle.sin_cos();

        let x = cos_a * radius;
        let z = sin_a * radius;
        let y = n.mul_add(c.vertical_spacing, -sp * c.vertical_travel);

        // f32::max drops NaN, so a degenerate falloff still lands on the floor.
        let scale = (1.0 - z.abs() / c.scale_falloff_distance)
            .max(c.min_scale)
            .min(1.0);
        let opacity = scale.max(c.min_opacity).min(1.0);

        let rotate_y = sp.mul_add(c.spin_deg, angle.to_degrees());
        let rotate_x = (sp * PI + n * PI).sin() * c.max_tilt_deg;

        TransformDescriptor {
            translate_x: x,
            translate_y: y,
            translate_z: z,
            rotate_x,
            rotate_y,
            scale,
            opacity,
            z_index: (scale * 100.0).round().max(0.0) as u32,
        }
    }
}

/// Position in the sequence mapped to `[0, 1]`; a lone item sits at 0.
#[inline]
pub fn normalized_index(index: usize, total: usize) -> f32 {
    if total > 1 {
        index as f32 / (total - 1) as f32
    } else {
        0.0
    }
}

#[inline]
fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

#[inline]
fn helix_angle(n: f32, spiral_progress: f32) -> f32 {
    n.mul_add(SEQUENCE_TURNS * TAU, spiral_progress * TAU)
}
