//! Spiral gallery controller.
//!
//! Wires one gallery instance together:
//!
//!   scroll/resize events → `ScrollProgressSampler` → progress (once per frame)
//!                        → `ReducedMotionAdapter` → descriptors → render sink
//!
//!   clicks / keys        → `LightboxNavigator`    → overlay state
//!
//! Every descriptor of a pass is computed from the same progress snapshot.
//! The item list is fixed at construction; a category filter narrows the
//! visible sequence that both the spiral and the lightbox walk.

use crate::config::{GalleryResult, SpiralConfig};
use crate::lightbox::LightboxNavigator;
use crate::render::reduced_motion::ReducedMotionAdapter;
use crate::render::{draw_order, TransformDescriptor};
use crate::scroll::{FrameScheduler, FrameToken, RegionGeometry, ScrollProgressSampler};

/// One picture in the gallery. Sequence order is meaningful: it sets the
/// item's place on the spiral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: String,
    pub image_ref: String,
    pub alt_text: String,
    pub category: String,
    pub caption: Option<String>,
}

impl GalleryItem {
    pub fn new(
        id: impl Into<String>,
        image_ref: impl Into<String>,
        alt_text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            image_ref: image_ref.into(),
            alt_text: alt_text.into(),
            category: category.into(),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// A scroll-driven spiral gallery with its lightbox.
pub struct SpiralGallery<S: FrameScheduler> {
    items: Vec<GalleryItem>,
    category: Option<String>,
    /// Items passing the category filter, in sequence order
    visible: Vec<GalleryItem>,
    sampler: ScrollProgressSampler<S>,
    adapter: ReducedMotionAdapter,
    descriptors: Vec<TransformDescriptor>,
    lightbox: LightboxNavigator,
    /// Layout passes run so far
    passes: u64,
}

impl<S: FrameScheduler> SpiralGallery<S> {
    pub fn new(items: Vec<GalleryItem>, scheduler: S) -> Self {
        let lightbox = LightboxNavigator::new(&items);
        let mut gallery = Self {
            visible: items.clone(),
            items,
            category: None,
            sampler: ScrollProgressSampler::new(scheduler),
            adapter: ReducedMotionAdapter::default(),
            descriptors: Vec::new(),
            lightbox,
            passes: 0,
        };
        gallery.relayout();
        gallery
    }

    /// Same as `new` with a custom spiral configuration.
    pub fn with_config(
        items: Vec<GalleryItem>,
        scheduler: S,
        cfg: SpiralConfig,
    ) -> GalleryResult<Self> {
        cfg.validate()?;
        let mut gallery = Self::new(items, scheduler);
        gallery.adapter.set_config(cfg);
        gallery.relayout();
        Ok(gallery)
    }

    // ── lifecycle ───────────────────────────────────────────────────────────

    pub fn mount(&mut self) {
        self.sampler.attach();
    }

    pub fn unmount(&mut self) {
        self.sampler.detach();
    }

    // ── input ───────────────────────────────────────────────────────────────

    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.sampler.on_scroll(scroll_y);
    }

    pub fn on_resize(&mut self, geometry: RegionGeometry) {
        self.sampler.on_resize(geometry);
    }

    /// Frame tick. Runs one layout pass if `token` was the sampler's pending
    /// request; returns whether the descriptors changed.
    pub fn frame(&mut self, token: FrameToken) -> bool {
        match self.sampler.on_frame(token) {
            Some(_) => {
                self.relayout();
                true
            }
            None => false,
        }
    }

    /// Host accessibility preference. Applied immediately, not per frame.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if reduced == self.adapter.reduced_motion() {
            return;
        }
        self.adapter.set_reduced_motion(reduced);
        self.relayout();
    }

    pub fn reduced_motion(&self) -> bool {
        self.adapter.reduced_motion()
    }

    /// Swap spiral constants. An invalid configuration is rejected and the
    /// current one kept.
    pub fn set_config(&mut self, cfg: SpiralConfig) -> GalleryResult<()> {
        if let Err(e) = cfg.validate() {
            log::warn!("gallery: keeping previous spiral config: {}", e);
            return Err(e);
        }
        self.adapter.set_config(cfg);
        self.relayout();
        Ok(())
    }

    pub fn config(&self) -> &SpiralConfig {
        self.adapter.engine().config()
    }

    /// Narrow the gallery to one category, or show everything with `None`.
    pub fn set_category(&mut self, category: Option<&str>) {
        let category = category.map(str::to_string);
        if category == self.category {
            return;
        }
        self.visible = match &category {
            Some(c) => self
                .items
                .iter()
                .filter(|it| &it.category == c)
                .cloned()
                .collect(),
            None => self.items.clone(),
        };
        log::debug!(
            "gallery: category {:?} shows {} of {} items",
            category,
            self.visible.len(),
            self.items.len()
        );
        self.category = category;
        self.lightbox.set_items(&self.visible);
        self.relayout();
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for it in &self.items {
            if !out.contains(&it.category.as_str()) {
                out.push(&it.category);
            }
        }
        out
    }

    // ── output ──────────────────────────────────────────────────────────────

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn visible_items(&self) -> &[GalleryItem] {
        &self.visible
    }

    /// Descriptors for `visible_items()`, index-aligned.
    pub fn descriptors(&self) -> &[TransformDescriptor] {
        &self.descriptors
    }

    /// Visible items with their placement, back to front.
    pub fn placements(&self) -> Vec<(&GalleryItem, &TransformDescriptor)> {
        draw_order(&self.descriptors)
            .into_iter()
            .map(|i| (&self.visible[i], &self.descriptors[i]))
            .collect()
    }

    pub fn progress(&self) -> f32 {
        self.sampler.progress()
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn sampler(&self) -> &ScrollProgressSampler<S> {
        &self.sampler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        self.sampler.scheduler_mut()
    }

    pub fn lightbox(&self) -> &LightboxNavigator {
        &self.lightbox
    }

    pub fn lightbox_mut(&mut self) -> &mut LightboxNavigator {
        &mut self.lightbox
    }

    /// The item the lightbox is showing, if open.
    pub fn lightbox_item(&self) -> Option<&GalleryItem> {
        self.lightbox.current_item(&self.visible)
    }

    fn relayout(&mut self) {
        let progress = self.sampler.progress();
        self.descriptors = self.adapter.layout(self.visible.len(), progress);
        self.passes += 1;
        log::debug!(
            "gallery: pass {} at progress {:.3} ({} items, reduced motion {})",
            self.passes,
            progress,
            self.visible.len(),
            self.adapter.reduced_motion()
        );
    }
}
