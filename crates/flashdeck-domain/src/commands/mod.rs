use flashdeck_core::DeckResult;

use crate::card::CardId;
use crate::collection::Collection;

pub mod card_commands;

pub use card_commands::*;

/// Trait for domain commands that mutate the collection
/// Commands represent intent and can be executed, logged, and replayed
pub trait Command: Send + Sync {
    /// Execute this command, mutating the collection
    fn execute(&self, context: &mut CommandContext) -> DeckResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub cards: &'a mut Collection,
    /// Identities of cards created while executing
    pub created: &'a mut Vec<CardId>,
}
