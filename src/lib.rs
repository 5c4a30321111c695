pub mod config;
pub mod gallery;
pub mod lightbox;
pub mod render;
pub mod scroll;

pub use config::{GalleryError, GalleryResult, SpiralConfig};
pub use gallery::{GalleryItem, SpiralGallery};
pub use lightbox::{LightboxKey, LightboxNavigator, LightboxState};
pub use render::reduced_motion::ReducedMotionAdapter;
pub use render::spiral::SpiralTransformEngine;
pub use render::TransformDescriptor;
pub use scroll::{FrameQueue, FrameScheduler, FrameToken, RegionGeometry, ScrollProgressSampler};
