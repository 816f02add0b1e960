use async_trait::async_trait;
use chrono::{DateTime, Utc};
use flashdeck_core::DeckResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Current version of the on-disk envelope.
pub const FORMAT_VERSION: u32 = 1;

/// Metadata for persistence operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the instance that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Point-in-time snapshot of one persisted document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Raw JSON bytes of the document body
    pub data: Vec<u8>,
    /// Metadata about this snapshot
    pub metadata: PersistenceMetadata,
}

/// Trait for abstract storage operations
/// Implementations handle different backend storage (file, database, etc.)
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Save a snapshot to the store
    async fn save(&self, snapshot: StoreSnapshot) -> DeckResult<PersistenceMetadata>;

    /// Load the current snapshot from the store
    async fn load(&self) -> DeckResult<(StoreSnapshot, PersistenceMetadata)>;

    /// Check if the store file exists
    async fn exists(&self) -> bool;

    /// Get the path to the store file
    fn path(&self) -> &Path;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> DeckResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> DeckResult<T>;
}
