use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::card::Card;

/// Label of the sentinel filter that matches every card.
pub const ALL_TAGS_LABEL: &str = "All";
/// Tag given to cards created without one.
pub const DEFAULT_TAG: &str = "Custom";
/// Tag given to cards appended by a row import.
pub const IMPORTED_TAG: &str = "Imported";
/// Tag given to generated cards that did not come with their own.
pub const GENERATED_TAG: &str = "generated";

/// Active tag selection for the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parse a user-facing label; the sentinel label selects every card.
    pub fn parse(label: &str) -> Self {
        if label == ALL_TAGS_LABEL {
            Self::All
        } else {
            Self::Tag(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_TAGS_LABEL,
            Self::Tag(tag) => tag,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sentinel first, then each distinct non-empty tag in order of first appearance.
///
/// A tag spelled like the sentinel is folded into it.
pub fn available_tags(cards: &[Card]) -> Vec<TagFilter> {
    let mut seen = HashSet::new();
    let mut tags = vec![TagFilter::All];
    for card in cards {
        if card.tag.is_empty() || card.tag == ALL_TAGS_LABEL {
            continue;
        }
        if seen.insert(card.tag.as_str()) {
            tags.push(TagFilter::Tag(card.tag.clone()));
        }
    }
    tags
}
