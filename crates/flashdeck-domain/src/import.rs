//! Bulk card sources: row imports and topic-based generation.
//!
//! Sources run asynchronously and either deliver every card or fail. Nothing
//! reaches the collection until the whole batch is in hand.

use async_trait::async_trait;
use flashdeck_core::{Clock, DeckResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::deck::Deck;
use crate::editable::CardDraft;
use crate::tag::{GENERATED_TAG, IMPORTED_TAG};

/// One `(front, back)` pair read from a spreadsheet-like source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedRow {
    pub front: String,
    pub back: String,
}

impl ImportedRow {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// One card proposed by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCard {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub tag: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardImporter: Send + Sync {
    /// Read every row from `source`.
    async fn import(&self, source: &Path) -> DeckResult<Vec<ImportedRow>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardGenerator: Send + Sync {
    /// Produce cards about a free-text topic.
    async fn generate(&self, topic: &str) -> DeckResult<Vec<GeneratedCard>>;
}

/// Rows with a blank face are dropped; the rest are tagged as imported.
pub fn drafts_from_rows(rows: Vec<ImportedRow>) -> Vec<CardDraft> {
    rows.into_iter()
        .filter_map(|row| {
            let front = row.front.trim();
            let back = row.back.trim();
            if front.is_empty() || back.is_empty() {
                return None;
            }
            Some(CardDraft::new(front, back).with_tag(IMPORTED_TAG))
        })
        .collect()
}

pub fn drafts_from_generated(cards: Vec<GeneratedCard>) -> Vec<CardDraft> {
    cards
        .into_iter()
        .filter(|card| !card.front.trim().is_empty() && !card.back.trim().is_empty())
        .map(|card| {
            let tag = card
                .tag
                .filter(|tag| !tag.trim().is_empty())
                .unwrap_or_else(|| GENERATED_TAG.to_string());
            CardDraft::new(card.front, card.back).with_tag(tag)
        })
        .collect()
}

/// Import rows from `source` and append them. Returns how many cards were added.
pub async fn import_into<C: Clock>(
    deck: &mut Deck<C>,
    importer: &dyn CardImporter,
    source: &Path,
) -> DeckResult<usize> {
    let rows = importer.import(source).await.map_err(|err| {
        tracing::warn!("import from {} failed: {}", source.display(), err);
        err
    })?;
    let drafts = drafts_from_rows(rows);
    let added = deck.append_drafts(drafts)?.len();
    tracing::info!("imported {} cards from {}", added, source.display());
    Ok(added)
}

/// Generate cards for `topic` and append them. Returns how many cards were added.
pub async fn generate_into<C: Clock>(
    deck: &mut Deck<C>,
    generator: &dyn CardGenerator,
    topic: &str,
) -> DeckResult<usize> {
    let cards = generator.generate(topic).await.map_err(|err| {
        tracing::warn!("generation for '{}' failed: {}", topic, err);
        err
    })?;
    let added = deck.append_drafts(drafts_from_generated(cards))?.len();
    tracing::info!("generated {} cards for '{}'", added, topic);
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureConfig;
    use crate::settings::AppSettings;
    use crate::Card;
    use flashdeck_core::{DeckError, ManualClock};

    fn deck() -> Deck<ManualClock> {
        Deck::with_clock(
            vec![Card::new("A", "a", "1", "t")],
            AppSettings::default(),
            ManualClock::new(),
            GestureConfig::default(),
        )
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let drafts = drafts_from_rows(vec![
            ImportedRow::new(" hola ", "hello"),
            ImportedRow::new("", "orphan"),
            ImportedRow::new("solo", "   "),
        ]);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].front, "hola");
        assert_eq!(drafts[0].tag, IMPORTED_TAG);
    }

    #[test]
    fn test_generated_tag_fallback() {
        let drafts = drafts_from_generated(vec![
            GeneratedCard {
                front: "a".to_string(),
                back: "b".to_string(),
                tag: Some("physics".to_string()),
            },
            GeneratedCard {
                front: "c".to_string(),
                back: "d".to_string(),
                tag: None,
            },
        ]);
        assert_eq!(drafts[0].tag, "physics");
        assert_eq!(drafts[1].tag, GENERATED_TAG);
    }

    #[tokio::test]
    async fn test_import_appends_all_rows() {
        let mut importer = MockCardImporter::new();
        importer.expect_import().times(1).returning(|_| {
            Ok(vec![
                ImportedRow::new("uno", "one"),
                ImportedRow::new("dos", "two"),
            ])
        });

        let mut deck = deck();
        let added = import_into(&mut deck, &importer, Path::new("rows.json"))
            .await
            .unwrap();

        assert_eq!(added, 2);
        assert_eq!(deck.cards().len(), 3);
        assert_eq!(deck.cards()[1].front, "uno");
        assert_eq!(deck.cards()[2].tag, IMPORTED_TAG);
        assert!(deck.pending_changes().cards);
    }

    #[tokio::test]
    async fn test_failed_import_leaves_collection_untouched() {
        let mut importer = MockCardImporter::new();
        importer
            .expect_import()
            .returning(|_| Err(DeckError::Import("not a row export".to_string())));

        let mut deck = deck();
        let result = import_into(&mut deck, &importer, Path::new("broken.bin")).await;

        assert!(matches!(result, Err(DeckError::Import(_))));
        assert_eq!(deck.cards().len(), 1);
        assert!(deck.pending_changes().is_empty());
    }

    #[tokio::test]
    async fn test_generate_appends_with_tags() {
        let mut generator = MockCardGenerator::new();
        generator
            .expect_generate()
            .withf(|topic| topic.eq_ignore_ascii_case("photosynthesis"))
            .returning(|_| {
                Ok(vec![GeneratedCard {
                    front: "Chlorophyll".to_string(),
                    back: "Green pigment".to_string(),
                    tag: None,
                }])
            });

        let mut deck = deck();
        let added = generate_into(&mut deck, &generator, "photosynthesis")
            .await
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(deck.cards()[1].tag, GENERATED_TAG);
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_collection_untouched() {
        let mut generator = MockCardGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(DeckError::Generation("quota exceeded".to_string())));

        let mut deck = deck();
        assert!(generate_into(&mut deck, &generator, "anything").await.is_err());
        assert_eq!(deck.cards().len(), 1);
    }
}
