//! Scroll Progress Sampler
//!
//! Turns raw scroll/resize events into one normalized progress value per
//! frame for a gallery's scroll region:
//! - Scroll events only move the cached scroll offset
//! - Resize events replace the cached region geometry
//! - Either kind requests at most one frame callback; bursts coalesce
//! - The frame callback measures once and publishes the new progress
//!
//! The sampler is the only writer of its progress value.

use super::scheduler::{FrameScheduler, FrameToken};

/// Measured layout of the gallery's scroll region, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionGeometry {
    /// Offset of the region's top edge from the top of the document
    pub top: f32,
    /// Full height of the region, including the extra scroll room
    pub height: f32,
    /// Height of the visible viewport
    pub viewport_height: f32,
}

impl RegionGeometry {
    /// Distance the viewer can scroll while the region stays pinned.
    pub fn scroll_room(&self) -> f32 {
        self.height - self.viewport_height
    }
}

/// `clamp((scroll_y - top) / (height - viewport_height), 0, 1)`.
///
/// Zero when there is no geometry yet or no scroll room.
pub fn compute_progress(geometry: Option<&RegionGeometry>, scroll_y: f32) -> f32 {
    let Some(g) = geometry else {
        return 0.0;
    };
    let room = g.scroll_room();
    if room.is_nan() || room <= 0.0 {
        return 0.0;
    }
    let p = (scroll_y - g.top) / room;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Frame-throttled scroll progress for one gallery instance.
#[derive(Debug)]
pub struct ScrollProgressSampler<S: FrameScheduler> {
    scheduler: S,
    geometry: Option<RegionGeometry>,
    scroll_y: f32,
    progress: f32,
    pending: Option<FrameToken>,
    attached: bool,
    /// Raw events accepted since creation
    events: u64,
    /// Frame callbacks that actually recomputed progress
    recomputes: u64,
}

impl<S: FrameScheduler> ScrollProgressSampler<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            geometry: None,
            scroll_y: 0.0,
            progress: 0.0,
            pending: None,
            attached: false,
            events: 0,
            recomputes: 0,
        }
    }

    /// Start listening. Schedules an initial measurement.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        log::debug!("sampler: attached");
        self.request_recompute();
    }

    /// Stop listening and cancel any frame callback that has not fired.
    pub fn detach(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
            log::debug!("sampler: cancelled pending frame {:?}", token);
        }
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Scroll event with the document's current vertical offset.
    pub fn on_scroll(&mut self, scroll_y: f32) {
        if !self.attached {
            return;
        }
        self.scroll_y = scroll_y;
        self.events += 1;
        self.request_recompute();
    }

    /// Resize event with freshly measured region geometry.
    pub fn on_resize(&mut self, geometry: RegionGeometry) {
        if !self.attached {
            return;
        }
        self.geometry = Some(geometry);
        self.events += 1;
        self.request_recompute();
    }

    /// Frame tick for `token`. Returns the new progress if this token was
    /// the sampler's pending request, `None` for stale or foreign tokens.
    pub fn on_frame(&mut self, token: FrameToken) -> Option<f32> {
        if self.pending != Some(token) {
            return None;
        }
        self.pending = None;
        self.progress = compute_progress(self.geometry.as_ref(), self.scroll_y);
        self.recomputes += 1;
        Some(self.progress)
    }

    /// Last published progress; 0 before the first measurement.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn geometry(&self) -> Option<&RegionGeometry> {
        self.geometry.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn events(&self) -> u64 {
        self.events
    }

    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn request_recompute(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
    }
}

impl<S: FrameScheduler> Drop for ScrollProgressSampler<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::scheduler::FrameQueue;

    fn geom() -> RegionGeometry {
        RegionGeometry {
            top: 1000.0,
            height: 3000.0,
            viewport_height: 1000.0,
        }
    }

    fn run_frame(s: &mut ScrollProgressSampler<FrameQueue>) -> Vec<f32> {
        let tokens = s.scheduler_mut().drain();
        tokens.into_iter().filter_map(|t| s.on_frame(t)).collect()
    }

    #[test]
    fn progress_formula() {
        let g = geom();
        assert_eq!(compute_progress(Some(&g), 1000.0), 0.0);
        assert_eq!(compute_progress(Some(&g), 2000.0), 0.5);
        assert_eq!(compute_progress(Some(&g), 3000.0), 1.0);
        assert_eq!(compute_progress(Some(&g), 500.0), 0.0);
        assert_eq!(compute_progress(Some(&g), 9000.0), 1.0);
    }

    #[test]
    fn infinite_offsets_clamp_to_ends() {
        let g = geom();
        assert_eq!(compute_progress(Some(&g), f32::INFINITY), 1.0);
        assert_eq!(compute_progress(Some(&g), f32::NEG_INFINITY), 0.0);
        assert_eq!(compute_progress(Some(&g), f32::NAN), 0.0);
    }

    #[test]
    fn no_scroll_room_is_zero() {
        let g = RegionGeometry {
            top: 0.0,
            height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(compute_progress(Some(&g), 400.0), 0.0);
        let flush = RegionGeometry { height: 800.0, ..g };
        assert_eq!(compute_progress(Some(&flush), 400.0), 0.0);
    }

    #[test]
    fn unmeasured_is_zero() {
        assert_eq!(compute_progress(None, 1234.0), 0.0);
        let mut s = ScrollProgressSampler::new(FrameQueue::new());
        assert_eq!(s.progress(), 0.0);
        s.attach();
        s.on_scroll(5000.0);
        assert_eq!(run_frame(&mut s), vec![0.0]);
    }

    #[test]
    fn burst_coalesces_to_one_recompute() {
        let mut s = ScrollProgressSampler::new(FrameQueue::new());
        s.attach();
        s.on_resize(geom());
        for i in 0..100 {
            s.on_scroll(1000.0 + i as f32 * 10.0);
        }
        assert_eq!(s.scheduler().pending(), 1);
        let published = run_frame(&mut s);
        assert_eq!(published.len(), 1);
        assert_eq!(s.recomputes(), 1);
        assert_eq!(s.events(), 101);
        // last event wins
        assert!((s.progress() - 0.495).abs() < 1e-6);
    }

    #[test]
    fn reschedules_after_frame() {
        let mut s = ScrollProgressSampler::new(FrameQueue::new());
        s.attach();
        s.on_resize(geom());
        run_frame(&mut s);
        assert!(!s.has_pending());
        s.on_scroll(2000.0);
        assert!(s.has_pending());
        assert_eq!(run_frame(&mut s), vec![0.5]);
        assert_eq!(s.recomputes(), 2);
    }

    #[test]
    fn detach_cancels_pending() {
        let mut s = ScrollProgressSampler::new(FrameQueue::new());
        s.attach();
        s.on_resize(geom());
        s.on_scroll(2500.0);
        // host pulled the frame but tears the view down before delivering it
        let stale = s.scheduler_mut().drain();
        s.detach();
        assert!(!s.has_pending());
        for t in stale {
            assert_eq!(s.on_frame(t), None);
        }
        assert_eq!(s.recomputes(), 0);
    }

    #[test]
    fn detach_removes_from_queue() {
        let mut s = ScrollProgressSampler::new(FrameQueue::new());
        s.attach();
        assert_eq!(s.scheduler().pending(), 1);
        s.detach();
        assert_eq!(s.scheduler().pending(), 0);
    }

    #[test]
    fn ignores_events_when_detached() {
        let mut s = ScrollProgressSampler::new(FrameQueue::new());
        s.on_scroll(2000.0);
        s.on_resize(geom());
        assert!(!s.has_pending());
        assert!(s.geometry().is_none());
        assert_eq!(s.events(), 0);
    }

    #[test]
    fn foreign_token_ignored() {
        let mut s = ScrollProgressSampler::new(FrameQueue::new());
        s.attach();
        assert_eq!(s.on_frame(FrameToken(12345)), None);
        assert!(s.has_pending());
    }
}
