//! Frame scheduling primitive.
//!
//! The host owns the render loop. Components ask it for "one callback on the
//! next frame" and get a token back; the host later delivers that token on
//! its frame tick, or the component cancels it first.

use std::collections::VecDeque;

/// Handle to a requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Host-provided "request animation frame".
pub trait FrameScheduler {
    /// Request a callback on the next frame.
    fn request_frame(&mut self) -> FrameToken;
    /// Withdraw a request that has not fired yet. Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Queue-backed scheduler: requests accumulate until the host drains them
/// at the start of its frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: VecDeque<FrameToken>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every token due on this frame, in request order.
    pub fn drain(&mut self) -> Vec<FrameToken> {
        self.pending.drain(..).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id);
        self.next_id += 1;
        self.pending.push_back(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.retain(|t| *t != token);
    }
}
