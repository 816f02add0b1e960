use flashdeck_core::DeckResult;
use std::path::Path;
use tokio::fs;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating the parent directory if needed
    pub async fn write_atomic(path: &Path, data: &[u8]) -> DeckResult<()> {
        // Temp file lives next to the target so the rename stays on one filesystem
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp_file.into_temp_path();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub async fn read_all(path: &Path) -> DeckResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
