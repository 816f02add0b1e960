use flashdeck_core::{DeckError, DeckResult, Editable};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::card::{Card, CardId};
use crate::editable::CardDraft;

/// Ordered, authoritative list of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    cards: Vec<Card>,
}

impl Collection {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == *id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Append a new card under a freshly generated identity.
    pub fn insert(&mut self, draft: CardDraft) -> CardId {
        let id = self.fresh_id();
        self.cards.push(draft.into_card(id.clone()));
        id
    }

    /// Append several cards in order.
    pub fn append_all(&mut self, drafts: Vec<CardDraft>) -> Vec<CardId> {
        self.cards.reserve(drafts.len());
        drafts.into_iter().map(|draft| self.insert(draft)).collect()
    }

    /// Replace the fields of the card with `id`. The identity never changes.
    pub fn update(&mut self, id: &CardId, draft: CardDraft) -> DeckResult<()> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| DeckError::NotFound(format!("card {}", id)))?;
        draft.apply_to(card);
        Ok(())
    }

    /// Remove the card with `id`, returning it if it was present.
    pub fn delete(&mut self, id: &CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id == *id)?;
        Some(self.cards.remove(pos))
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    fn fresh_id(&self) -> CardId {
        loop {
            let id = CardId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
