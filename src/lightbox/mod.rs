//! Lightbox Navigation
//!
//! Full-screen single-item viewer state:
//! - Select: open on a clicked item
//! - Next / Prev: step through the sequence, wrapping at both ends
//! - Close: back to the gallery
//!
//! Unknown ids and empty sequences never fail; they leave the state alone.

use crate::gallery::GalleryItem;

/// Viewer state as seen by the overlay UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    /// Showing the item with this id
    Open(String),
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open(_))
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            LightboxState::Open(id) => Some(id),
            LightboxState::Closed => None,
        }
    }
}

/// Keys the overlay forwards to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    Left,
    Right,
}

/// Lightbox state machine over an ordered id sequence.
#[derive(Debug, Clone, Default)]
pub struct LightboxNavigator {
    ids: Vec<String>,
    state: LightboxState,
}

impl LightboxNavigator {
    pub fn new(items: &[GalleryItem]) -> Self {
        Self {
            ids: items.iter().map(|it| it.id.clone()).collect(),
            state: LightboxState::Closed,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Open on `id`. Ids not in the sequence are ignored.
    pub fn select(&mut self, id: &str) {
        if self.ids.iter().any(|known| known == id) {
            self.state = LightboxState::Open(id.to_string());
        } else {
            log::debug!("lightbox: ignoring select of unknown id {:?}", id);
        }
    }

    /// Step forward, wrapping past the last item. No-op while closed.
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Step backward, wrapping before the first item. No-op while closed.
    pub fn prev(&mut self) {
        self.step(-1);
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// Keyboard handling for the open overlay.
    pub fn handle_key(&mut self, key: LightboxKey) {
        if !self.is_open() {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::Left => self.prev(),
            LightboxKey::Right => self.next(),
        }
    }

    /// Index of the open item in the sequence.
    pub fn current_index(&self) -> Option<usize> {
        let id = self.state.selected_id()?;
        self.ids.iter().position(|known| known == id)
    }

    /// `(1-based position, total)` for an "n / total" counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current_index().map(|i| (i + 1, self.ids.len()))
    }

    /// The open item, looked up in `items`.
    pub fn current_item<'a>(&self, items: &'a [GalleryItem]) -> Option<&'a GalleryItem> {
        let id = self.state.selected_id()?;
        items.iter().find(|it| it.id == id)
    }

    /// Replace the sequence. An open item that is no longer present closes
    /// the lightbox.
    pub fn set_items(&mut self, items: &[GalleryItem]) {
        self.ids = items.iter().map(|it| it.id.clone()).collect();
        if self.is_open() && self.current_index().is_none() {
            log::debug!("lightbox: open item left the sequence, closing");
            self.close();
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn step(&mut self, delta: isize) {
        let len = self.ids.len();
        if len == 0 {
            return;
        }
        let Some(cur) = self.current_index() else {
            return;
        };
        let next = (cur as isize + delta).rem_euclid(len as isize) as usize;
        self.state = LightboxState::Open(self.ids[next].clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[&str]) -> Vec<GalleryItem> {
        ids.iter()
            .map(|id| GalleryItem::new(*id, format!("/img/{id}.jpg"), *id, "exterior"))
            .collect()
    }

    fn open(id: &str) -> LightboxState {
        LightboxState::Open(id.to_string())
    }

    #[test]
    fn wraps_both_ways() {
        let mut nav = LightboxNavigator::new(&items(&["A", "B", "C"]));
        nav.select("C");
        nav.next();
        assert_eq!(nav.state(), &open("A"));
        nav.prev();
        assert_eq!(nav.state(), &open("C"));
    }

    #[test]
    fn select_missing_stays_closed() {
        let mut nav = LightboxNavigator::new(&items(&["A", "B"]));
        nav.select("missing-id");
        assert_eq!(nav.state(), &LightboxState::Closed);
    }

    #[test]
    fn select_missing_while_open_keeps_item() {
        let mut nav = LightboxNavigator::new(&items(&["A", "B"]));
        nav.select("B");
        nav.select("missing-id");
        assert_eq!(nav.state(), &open("B"));
    }

    #[test]
    fn next_prev_closed_noop() {
        let mut nav = LightboxNavigator::new(&items(&["A", "B"]));
        nav.next();
        nav.prev();
        assert_eq!(nav.state(), &LightboxState::Closed);
    }

    #[test]
    fn empty_sequence_noop() {
        let mut nav = LightboxNavigator::new(&[]);
        assert!(nav.is_empty());
        nav.select("A");
        nav.next();
        nav.prev();
        nav.close();
        assert_eq!(nav.state(), &LightboxState::Closed);
    }

    #[test]
    fn close_returns_to_closed() {
        let mut nav = LightboxNavigator::new(&items(&["A"]));
        nav.select("A");
        assert!(nav.is_open());
        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn single_item_wraps_to_itself() {
        let mut nav = LightboxNavigator::new(&items(&["A"]));
        nav.select("A");
        nav.next();
        assert_eq!(nav.state(), &open("A"));
        nav.prev();
        assert_eq!(nav.state(), &open("A"));
    }

    #[test]
    fn keys_drive_navigation() {
        let mut nav = LightboxNavigator::new(&items(&["A", "B", "C"]));
        nav.handle_key(LightboxKey::Right);
        assert!(!nav.is_open());
        nav.select("A");
        nav.handle_key(LightboxKey::Left);
        assert_eq!(nav.state(), &open("C"));
        nav.handle_key(LightboxKey::Right);
        nav.handle_key(LightboxKey::Right);
        assert_eq!(nav.state(), &open("B"));
        nav.handle_key(LightboxKey::Escape);
        assert!(!nav.is_open());
    }

    #[test]
    fn position_counter() {
        let list = items(&["A", "B", "C"]);
        let mut nav = LightboxNavigator::new(&list);
        assert_eq!(nav.position(), None);
        nav.select("B");
        assert_eq!(nav.position(), Some((2, 3)));
        assert_eq!(nav.current_item(&list).map(|it| it.id.as_str()), Some("B"));
    }

    #[test]
    fn set_items_closes_when_open_item_removed() {
        let mut nav = LightboxNavigator::new(&items(&["A", "B", "C"]));
        nav.select("B");
        nav.set_items(&items(&["A", "B"]));
        assert_eq!(nav.state(), &open("B"));
        nav.set_items(&items(&["A", "C"]));
        assert_eq!(nav.state(), &LightboxState::Closed);
    }
}
