pub mod card;
pub mod collection;
pub mod commands;
pub mod deck;
pub mod dispatch;
pub mod editable;
pub mod filter;
pub mod flip;
pub mod gesture;
pub mod import;
pub mod samples;
pub mod settings;
pub mod tag;

pub use card::{Card, CardId};
pub use collection::Collection;
pub use deck::{Deck, DeckOutcome, DeckStatus, Effect, PendingChanges};
pub use editable::{CardDraft, EditorCommit, EditorRequest, DEFAULT_CARD_COLOR, PRESET_COLORS};
pub use filter::{compute_view, CardFilter};
pub use flip::FlipState;
pub use gesture::{Action, Feedback, GestureClassifier, GestureConfig, GesturePhase, PointerEvent};
pub use import::{CardGenerator, CardImporter, GeneratedCard, ImportedRow};
pub use samples::sample_cards;
pub use settings::AppSettings;
pub use tag::{available_tags, TagFilter};
