use crate::traits::Serializer;
use flashdeck_core::{DeckError, DeckResult};

/// JSON serializer for domain models
pub struct JsonSerializer;

impl JsonSerializer {
    /// Pretty JSON for any serializable value, slices included.
    pub fn to_bytes<T: serde::Serialize + ?Sized>(data: &T) -> DeckResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| DeckError::Serialization(e.to_string()))
    }
}

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> DeckResult<Vec<u8>> {
        Self::to_bytes(data)
    }

    fn deserialize(&self, bytes: &[u8]) -> DeckResult<T> {
        let data =
            serde_json::from_slice(bytes).map_err(|e| DeckError::Serialization(e.to_string()))?;
        Ok(data)
    }
}
