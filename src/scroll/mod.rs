//! Scroll input: frame scheduling and the progress sampler.

pub mod scheduler;
pub mod sampler;

pub use sampler::{compute_progress, RegionGeometry, ScrollProgressSampler};
pub use scheduler::{FrameQueue, FrameScheduler, FrameToken};
