use async_trait::async_trait;
use flashdeck_core::{DeckError, DeckResult};
use flashdeck_domain::{CardImporter, ImportedRow};
use serde_json::Value;
use std::path::Path;

/// Reads a row export: a JSON array of rows, each row an array of cells.
///
/// The first two cells are the front and back. Shorter rows are skipped,
/// cells that are not strings are stringified.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRowsImporter;

impl JsonRowsImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_rows(bytes: &[u8]) -> DeckResult<Vec<ImportedRow>> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| DeckError::Import(format!("not a row export: {}", e)))?;
        let rows = match value {
            Value::Array(rows) => rows,
            _ => {
                return Err(DeckError::Import(
                    "expected an array of rows".to_string(),
                ))
            }
        };

        let mut imported = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let cells = match row {
                Value::Array(cells) => cells,
                other => {
                    return Err(DeckError::Import(format!(
                        "row {} is not an array of cells: {}",
                        index, other
                    )))
                }
            };
            if cells.len() < 2 {
                tracing::debug!("skipping row {} with {} cells", index, cells.len());
                continue;
            }
            imported.push(ImportedRow::new(cell_text(&cells[0]), cell_text(&cells[1])));
        }
        Ok(imported)
    }
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl CardImporter for JsonRowsImporter {
    async fn import(&self, source: &Path) -> DeckResult<Vec<ImportedRow>> {
        let bytes = tokio::fs::read(source).await.map_err(|e| {
            DeckError::Import(format!("cannot read {}: {}", source.display(), e))
        })?;
        let rows = Self::parse_rows(&bytes)?;
        tracing::info!("Read {} rows from {}", rows.len(), source.display());
        Ok(rows)
    }
}
