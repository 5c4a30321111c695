//! GPU instance records for a scene-graph render sink.
//!
//! One `GpuInstance` per gallery card, laid out for direct upload into an
//! instance vertex buffer.

use bytemuck::{Pod, Zeroable};

use crate::render::TransformDescriptor;

/// Packed per-card instance data (48 bytes, 16-byte aligned rows).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuInstance {
    /// xyz translation, w = uniform scale
    pub translate_scale: [f32; 4],
    /// x = rotateX (rad), y = rotateY (rad), z = opacity, w = draw depth
    pub rotation_opacity: [f32; 4],
    /// x = item index, yzw reserved
    pub meta: [u32; 4],
}

impl GpuInstance {
    pub fn from_descriptor(index: usize, d: &TransformDescriptor) -> Self {
        Self {
            translate_scale: [d.translate_x, d.translate_y, d.translate_z, d.scale],
            rotation_opacity: [
                d.rotate_x.to_radians(),
                d.rotate_y.to_radians(),
                d.opacity,
                d.z_index as f32 * 0.01,
            ],
            meta: [index as u32, 0, 0, 0],
        }
    }
}

/// Pack a frame's descriptors for upload.
pub fn pack_instances(descriptors: &[TransformDescriptor]) -> Vec<GpuInstance> {
    descriptors
        .iter()
        .enumerate()
        .map(|(i, d)| GpuInstance::from_descriptor(i, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_size() {
        assert_eq!(std::mem::size_of::<GpuInstance>(), 48);
    }

    #[test]
    fn pack_and_cast() {
        let ds = [TransformDescriptor::identity(2), TransformDescriptor::identity(1)];
        let inst = pack_instances(&ds);
        let bytes: &[u8] = bytemuck::cast_slice(&inst);
        assert_eq!(bytes.len(), 96);
        assert_eq!(inst[1].meta[0], 1);
        assert_eq!(inst[0].translate_scale[3], 1.0);
        assert!((inst[0].rotation_opacity[3] - 0.02).abs() < 1e-6);
    }
}
