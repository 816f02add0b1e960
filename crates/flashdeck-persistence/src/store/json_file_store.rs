use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceMetadata, PersistenceStore, StoreSnapshot, FORMAT_VERSION};
use flashdeck_core::{DeckError, DeckResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file-based persistence store
/// Implements the PersistenceStore trait for JSON file operations
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// On-disk wrapper around a document body
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: serde_json::Value,
}

impl JsonFileStore {
    /// Create a new JSON file store
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    /// Create a new JSON file store with a specific instance ID
    pub fn with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id,
        }
    }

    /// Get the instance ID for this store
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// Files written before the envelope existed hold the bare document.
    fn unwrap_document(&self, value: serde_json::Value) -> DeckResult<JsonEnvelope> {
        let is_envelope = value
            .as_object()
            .map(|obj| obj.contains_key("version") && obj.contains_key("data"))
            .unwrap_or(false);

        if !is_envelope {
            tracing::info!(
                "No envelope found at {}, reading as a bare document",
                self.path.display()
            );
            return Ok(JsonEnvelope {
                version: FORMAT_VERSION,
                metadata: PersistenceMetadata::new(self.instance_id),
                data: value,
            });
        }

        let envelope: JsonEnvelope =
            serde_json::from_value(value).map_err(|e| DeckError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(DeckError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(envelope)
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, mut snapshot: StoreSnapshot) -> DeckResult<PersistenceMetadata> {
        snapshot.metadata.instance_id = self.instance_id;
        snapshot.metadata.saved_at = chrono::Utc::now();

        let data_value: serde_json::Value = serde_json::from_slice(&snapshot.data)
            .map_err(|e| DeckError::Serialization(e.to_string()))?;
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: snapshot.metadata.clone(),
            data: data_value,
        };

        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| DeckError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );

        Ok(snapshot.metadata)
    }

    async fn load(&self) -> DeckResult<(StoreSnapshot, PersistenceMetadata)> {
        let file_bytes = AtomicWriter::read_all(&self.path).await?;

        let value: serde_json::Value = serde_json::from_slice(&file_bytes)
            .map_err(|e| DeckError::Serialization(e.to_string()))?;
        let envelope = self.unwrap_document(value)?;

        let data = serde_json::to_vec(&envelope.data)
            .map_err(|e| DeckError::Serialization(e.to_string()))?;
        let snapshot = StoreSnapshot {
            data,
            metadata: envelope.metadata.clone(),
        };

        tracing::info!(
            "Loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );

        Ok((snapshot, envelope.metadata))
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
