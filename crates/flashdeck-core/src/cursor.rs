//! Wrapping cursor over a derived list.
//!
//! The cursor is stored independently of the list it points into, so the
//! list may shrink underneath it. Two paths keep it honest: [`Cursor::reconcile`]
//! runs after every recomputation of the list, and [`Cursor::render_position`]
//! clamps on every read so a stale value is never used as an index.

/// Position of the active item within a filtered list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    /// Create a cursor at the first item.
    pub fn new() -> Self {
        Self { position: 0 }
    }

    /// Raw stored position. May exceed the list bounds until reconciled.
    pub fn get(&self) -> usize {
        self.position
    }

    /// Jump to an explicit position.
    pub fn set(&mut self, position: usize) {
        self.position = position;
    }

    /// Move to the next item, wrapping from the last back to the first.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.position = (self.position + 1) % len;
    }

    /// Move to the previous item, wrapping from the first to the last.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.position = (self.position + len - 1) % len;
    }

    /// Clamp the stored position after the list length changed.
    pub fn reconcile(&mut self, len: usize) {
        if len == 0 {
            self.position = 0;
        } else if self.position >= len {
            self.position = len - 1;
        }
    }

    /// Position safe to index with, whether or not `reconcile` has run yet.
    pub fn render_position(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.position.min(len - 1)
        }
    }
}
