//! Static layout for viewers who asked for minimal motion.

use crate::config::SpiralConfig;
use crate::render::spiral::SpiralTransformEngine;
use crate::render::TransformDescriptor;

/// Chooses between the spiral engine and a flat, motionless layout.
///
/// The preference is read once per render pass; inside a pass every item
/// goes down the same branch.
#[derive(Debug, Clone, Default)]
pub struct ReducedMotionAdapter {
    reduced_motion: bool,
    engine: SpiralTransformEngine,
}

impl ReducedMotionAdapter {
    pub fn new(cfg: SpiralConfig, reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            engine: SpiralTransformEngine::new(cfg),
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if reduced != self.reduced_motion {
            log::debug!("reduced motion: {}", reduced);
        }
        self.reduced_motion = reduced;
    }

    pub fn engine(&self) -> &SpiralTransformEngine {
        &self.engine
    }

    pub fn set_config(&mut self, cfg: SpiralConfig) {
        self.engine = SpiralTransformEngine::new(cfg);
    }

    /// Descriptors for `total` items at `progress`.
    pub fn layout(&self, total: usize, progress: f32) -> Vec<TransformDescriptor> {
        if self.reduced_motion {
            static_layout(total)
        } else {
            self.engine.transform_all(total, progress)
        }
    }
}

/// Identity placements stacked in reading order: the first item on top.
pub fn static_layout(total: usize) -> Vec<TransformDescriptor> {
    (0..total)
        .map(|i| TransformDescriptor::identity((total - i) as u32))
        .collect()
}
