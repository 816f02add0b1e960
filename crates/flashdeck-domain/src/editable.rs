use flashdeck_core::{DeckError, DeckResult, Editable};
use serde::{Deserialize, Serialize};

use crate::card::{normalize_tag, Card, CardId};

pub const DEFAULT_CARD_COLOR: &str = "#ffffff";

pub const PRESET_COLORS: [&str; 7] = [
    "#ffffff", "#fef3c7", "#dcfce7", "#dbeafe", "#fce7f3", "#f3f4f6", "#1f2937",
];

/// Card fields without an identity, as produced by the editor or an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    pub front: String,
    pub back: String,
    pub tag: String,
    pub color: Option<String>,
}

impl CardDraft {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            tag: String::new(),
            color: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Reject drafts missing either face and fill in the default tag.
    pub fn validate(mut self) -> DeckResult<Self> {
        if self.front.trim().is_empty() {
            return Err(DeckError::Validation("card front is empty".to_string()));
        }
        if self.back.trim().is_empty() {
            return Err(DeckError::Validation("card back is empty".to_string()));
        }
        self.tag = normalize_tag(self.tag);
        Ok(self)
    }

    pub fn into_card(self, id: CardId) -> Card {
        Card {
            id,
            front: self.front,
            back: self.back,
            tag: normalize_tag(self.tag),
            color: self.color,
        }
    }
}

impl Editable<Card> for CardDraft {
    fn from_entity(card: &Card) -> Self {
        Self {
            front: card.front.clone(),
            back: card.back.clone(),
            tag: card.tag.clone(),
            color: Some(
                card.color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CARD_COLOR.to_string()),
            ),
        }
    }

    fn apply_to(self, card: &mut Card) {
        card.front = self.front;
        card.back = self.back;
        card.tag = normalize_tag(self.tag);
        card.color = self.color;
    }
}

/// What the edit/create form is opened with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorRequest {
    /// Card being edited, or `None` when creating.
    pub editing: Option<Card>,
    /// Existing tags offered as suggestions. Never includes the sentinel.
    pub available_tags: Vec<String>,
    pub default_tag: String,
}

impl EditorRequest {
    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Field values the form starts with.
    pub fn initial_draft(&self) -> CardDraft {
        match &self.editing {
            Some(card) => CardDraft::from_entity(card),
            None => CardDraft::new("", "")
                .with_tag(self.default_tag.clone())
                .with_color(DEFAULT_CARD_COLOR),
        }
    }
}

/// A saved editor form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommit {
    pub target: Option<CardId>,
    pub draft: CardDraft,
}

impl EditorCommit {
    pub fn create(draft: CardDraft) -> Self {
        Self {
            target: None,
            draft,
        }
    }

    pub fn update(id: CardId, draft: CardDraft) -> Self {
        Self {
            target: Some(id),
            draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::DEFAULT_TAG;

    #[test]
    fn test_validate_rejects_empty_front() {
        let err = CardDraft::new("", "back").validate().unwrap_err();
        assert!(matches!(err, DeckError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_blank_back() {
        let err = CardDraft::new("front", "  \n").validate().unwrap_err();
        assert!(matches!(err, DeckError::Validation(_)));
    }

    #[test]
    fn test_validate_fills_default_tag() {
        let draft = CardDraft::new("front", "back").validate().unwrap();
        assert_eq!(draft.tag, DEFAULT_TAG);
    }

    #[test]
    fn test_from_entity_defaults_color() {
        let card = Card::new("1", "front", "back", "verbs");
        let draft = CardDraft::from_entity(&card);
        assert_eq!(draft.color.as_deref(), Some(DEFAULT_CARD_COLOR));
        assert_eq!(draft.tag, "verbs");
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut card = Card::new("1", "front", "back", "verbs");
        CardDraft::new("new front", "new back")
            .with_tag("nouns")
            .apply_to(&mut card);
        assert_eq!(card.id.as_str(), "1");
        assert_eq!(card.front, "new front");
        assert_eq!(card.tag, "nouns");
    }

    #[test]
    fn test_create_request_starts_blank_with_suggested_tag() {
        let request = EditorRequest {
            editing: None,
            available_tags: vec!["verbs".to_string()],
            default_tag: "verbs".to_string(),
        };
        let draft = request.initial_draft();
        assert!(!request.is_edit());
        assert!(draft.front.is_empty());
        assert_eq!(draft.tag, "verbs");
        assert_eq!(draft.color.as_deref(), Some(DEFAULT_CARD_COLOR));
    }
}
