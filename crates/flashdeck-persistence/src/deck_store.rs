//! Card and settings documents in the data directory.
//!
//! Reads that fail fall back to built-in defaults and writes that fail are
//! dropped with a warning. Neither ever reaches the in-memory deck.

use flashdeck_core::{AppConfig, Clock, DeckResult};
use flashdeck_domain::{AppSettings, Card, Deck, GestureConfig, PendingChanges};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::serialization::JsonSerializer;
use crate::store::JsonFileStore;
use crate::traits::{PersistenceMetadata, PersistenceStore, Serializer, StoreSnapshot};

pub const CARDS_FILE: &str = "cards.json";
pub const SETTINGS_FILE: &str = "settings.json";

pub struct DeckStore {
    data_dir: PathBuf,
    cards: JsonFileStore,
    settings: JsonFileStore,
}

impl DeckStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref().to_path_buf();
        Self {
            cards: JsonFileStore::new(data_dir.join(CARDS_FILE)),
            settings: JsonFileStore::new(data_dir.join(SETTINGS_FILE)),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// `None` when nothing has been stored yet.
    pub async fn load_cards(&self) -> DeckResult<Option<Vec<Card>>> {
        load_document(&self.cards).await
    }

    pub async fn load_settings(&self) -> DeckResult<Option<AppSettings>> {
        load_document(&self.settings).await
    }

    pub async fn save_cards(&self, cards: &[Card]) -> DeckResult<()> {
        save_document(&self.cards, cards).await
    }

    pub async fn save_settings(&self, settings: &AppSettings) -> DeckResult<()> {
        save_document(&self.settings, settings).await
    }

    /// Build a deck from stored documents, substituting defaults for anything
    /// missing or unreadable.
    pub async fn open<C: Clock>(&self, clock: C, config: &AppConfig) -> Deck<C> {
        let cards = self.load_cards().await.unwrap_or_else(|err| {
            tracing::warn!("Could not read cards, using the sample deck: {}", err);
            None
        });
        let settings = self.load_settings().await.unwrap_or_else(|err| {
            tracing::warn!("Could not read settings, using defaults: {}", err);
            None
        });
        Deck::restore(cards, settings, clock, GestureConfig::from(config))
    }

    /// Write whatever the deck marked dirty. Returns what was actually written.
    pub async fn persist<C: Clock>(&self, deck: &mut Deck<C>) -> PendingChanges {
        let changes = deck.take_changes();
        let mut written = PendingChanges::default();

        if changes.cards {
            match self.save_cards(deck.cards()).await {
                Ok(()) => written.cards = true,
                Err(err) => tracing::warn!("Dropping card save: {}", err),
            }
        }
        if changes.settings {
            match self.save_settings(deck.settings()).await {
                Ok(()) => written.settings = true,
                Err(err) => tracing::warn!("Dropping settings save: {}", err),
            }
        }
        written
    }
}

async fn load_document<T>(store: &JsonFileStore) -> DeckResult<Option<T>>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    if !store.exists().await {
        tracing::debug!("{} not found", store.path().display());
        return Ok(None);
    }
    let (snapshot, _) = store.load().await?;
    let value = JsonSerializer.deserialize(&snapshot.data)?;
    Ok(Some(value))
}

async fn save_document<T>(store: &JsonFileStore, value: &T) -> DeckResult<()>
where
    T: Serialize + Sync + ?Sized,
{
    let snapshot = StoreSnapshot {
        data: JsonSerializer::to_bytes(value)?,
        metadata: PersistenceMetadata::new(store.instance_id()),
    };
    store.save(snapshot).await?;
    Ok(())
}
