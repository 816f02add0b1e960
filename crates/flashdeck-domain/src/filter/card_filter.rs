//! Card filtering implementations.

use crate::tag::TagFilter;
use crate::Card;

/// Trait for filtering cards by various criteria.
pub trait CardFilter {
    /// Returns true if the card matches the filter criteria.
    fn matches(&self, card: &Card) -> bool;
}

impl CardFilter for TagFilter {
    fn matches(&self, card: &Card) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => card.tag == *tag,
        }
    }
}

/// Derive the filtered view of `cards`, preserving collection order.
///
/// The result borrows from the collection and is meant to be recomputed
/// after every mutation rather than kept around.
pub fn compute_view<'a>(cards: &'a [Card], filter: &dyn CardFilter) -> Vec<&'a Card> {
    cards.iter().filter(|card| filter.matches(card)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Vec<Card> {
        vec![
            Card::new("1", "a", "A", "verbs"),
            Card::new("2", "b", "B", "nouns"),
            Card::new("3", "c", "C", "verbs"),
        ]
    }

    fn ids(view: &[&Card]) -> Vec<String> {
        view.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_all_matches_everything() {
        let cards = deck();
        let view = compute_view(&cards, &TagFilter::All);
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_tag_filter_preserves_order() {
        let cards = deck();
        let view = compute_view(&cards, &TagFilter::Tag("verbs".to_string()));
        assert_eq!(ids(&view), vec!["1", "3"]);
    }

    #[test]
    fn test_tag_match_is_exact() {
        let cards = deck();
        let view = compute_view(&cards, &TagFilter::Tag("Verbs".to_string()));
        assert!(view.is_empty());
    }

    #[test]
    fn test_unknown_tag_yields_empty_view() {
        let cards = deck();
        let view = compute_view(&cards, &TagFilter::Tag("idioms".to_string()));
        assert!(view.is_empty());
    }
}
