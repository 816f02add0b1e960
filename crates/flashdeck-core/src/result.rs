use crate::error::DeckError;

pub type DeckResult<T> = Result<T, DeckError>;
