use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
