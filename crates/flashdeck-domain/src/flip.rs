use crate::card::CardId;

/// Front/back state that belongs to one card identity.
///
/// Reads for any other identity report front-facing, so the state can never
/// leak onto a different card that happens to land at the same position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipState {
    owner: Option<CardId>,
    flipped: bool,
}

impl FlipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the state if the active card changed.
    pub fn sync(&mut self, active: Option<&CardId>) {
        if self.owner.as_ref() != active {
            self.owner = active.cloned();
            self.flipped = false;
        }
    }

    pub fn toggle(&mut self, active: &CardId) {
        self.sync(Some(active));
        self.flipped = !self.flipped;
    }

    pub fn is_flipped(&self, active: &CardId) -> bool {
        self.flipped && self.owner.as_ref() == Some(active)
    }
}
