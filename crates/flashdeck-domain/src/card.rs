use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::tag::DEFAULT_TAG;

/// Opaque card identity. Stable for the lifetime of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub front: String,
    pub back: String,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

impl Card {
    pub fn new(
        id: impl Into<CardId>,
        front: impl Into<String>,
        back: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
            tag: normalize_tag(tag.into()),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Blank tags collapse to the default tag so every card has a label.
pub fn normalize_tag(tag: String) -> String {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        DEFAULT_TAG.to_string()
    } else if trimmed.len() == tag.len() {
        tag
    } else {
        trimmed.to_string()
    }
}
