pub mod deck_store;
pub mod import;
pub mod serialization;
pub mod store;
pub mod traits;

pub use deck_store::DeckStore;
pub use import::JsonRowsImporter;
pub use serialization::JsonSerializer;
pub use store::*;
pub use traits::*;
