use super::{Command, CommandContext};
use crate::card::{Card, CardId};
use crate::editable::CardDraft;
use flashdeck_core::DeckResult;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Create a new card at the end of the collection
pub struct CreateCard {
    pub draft: CardDraft,
}

impl Command for CreateCard {
    fn execute(&self, context: &mut CommandContext) -> DeckResult<()> {
        let id = context.cards.insert(self.draft.clone());
        context.created.push(id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create card: '{}'", self.draft.front)
    }
}

/// Append a batch of cards (import or generation)
pub struct AppendCards {
    pub drafts: Vec<CardDraft>,
}

impl Command for AppendCards {
    fn execute(&self, context: &mut CommandContext) -> DeckResult<()> {
        let ids = context.cards.append_all(self.drafts.clone());
        context.created.extend(ids);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Append {} cards", self.drafts.len())
    }
}

/// Replace a card's fields, keeping its identity
pub struct UpdateCard {
    pub card_id: CardId,
    pub draft: CardDraft,
}

impl Command for UpdateCard {
    fn execute(&self, context: &mut CommandContext) -> DeckResult<()> {
        context.cards.update(&self.card_id, self.draft.clone())
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

/// Remove a card by identity. Missing cards are ignored.
pub struct DeleteCard {
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, context: &mut CommandContext) -> DeckResult<()> {
        context.cards.delete(&self.card_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

/// Replace the whole collection
pub struct ReplaceCards {
    pub cards: Vec<Card>,
}

impl Command for ReplaceCards {
    fn execute(&self, context: &mut CommandContext) -> DeckResult<()> {
        context.cards.replace_all(self.cards.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Replace collection with {} cards", self.cards.len())
    }
}

/// Randomly permute the whole collection
pub struct ShuffleCards {
    /// Fixed seed for a reproducible order; entropy otherwise
    pub seed: Option<u64>,
}

impl Command for ShuffleCards {
    fn execute(&self, context: &mut CommandContext) -> DeckResult<()> {
        match self.seed {
            Some(seed) => context.cards.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => context.cards.shuffle(&mut rand::rng()),
        }
        Ok(())
    }

    fn description(&self) -> String {
        "Shuffle cards".to_string()
    }
}
