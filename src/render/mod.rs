pub mod spiral;
pub mod reduced_motion;

#[cfg(feature = "gpu-instances")]
pub mod gpu;

/// Per-item 3D placement handed to the render sink.
///
/// Derived on every evaluation and never stored by the engine. Translations
/// are in render units (pixels for a CSS sink), rotations in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformDescriptor {
    pub translate_x: f32,
    pub translate_y: f32,
    pub translate_z: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    /// In `[min_scale, 1]`
    pub scale: f32,
    /// In `[min_opacity, 1]`
    pub opacity: f32,
    pub z_index: u32,
}

impl TransformDescriptor {
    /// Flat, fully opaque placement at the origin.
    pub fn identity(z_index: u32) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            translate_z: 0.0,
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            z_index,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.translate_z == 0.0
            && self.rotate_x == 0.0
            && self.rotate_y == 0.0
            && self.scale == 1.0
            && self.opacity == 1.0
    }

    /// True when no field is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        [
            self.translate_x,
            self.translate_y,
            self.translate_z,
            self.rotate_x,
            self.rotate_y,
            self.scale,
            self.opacity,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// CSS `transform` value for a DOM render sink.
    pub fn to_css_transform(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, {:.2}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.3})",
            self.translate_x,
            self.translate_y,
            self.translate_z,
            self.rotate_x,
            self.rotate_y,
            self.scale,
        )
    }
}

/// Indices of `descriptors` ordered back to front (ascending z-index).
///
/// Ties keep sequence order.
pub fn draw_order(descriptors: &[TransformDescriptor]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..descriptors.len()).collect();
    order.sort_by_key(|&i| descriptors[i].z_index);
    order
}
