use flashdeck_core::Clock;

use crate::deck::{Deck, Effect};
use crate::gesture::Action;

impl<C: Clock> Deck<C> {
    /// Apply a terminal gesture action to the deck.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        tracing::debug!(?action, position = self.render_position(), "dispatching action");
        match action {
            Action::Advance => {
                self.next();
                Vec::new()
            }
            Action::Retreat => {
                self.prev();
                Vec::new()
            }
            Action::Flip => {
                self.toggle_flip();
                Vec::new()
            }
            Action::Delete => {
                self.delete_active();
                Vec::new()
            }
            Action::Edit => self
                .editor_for_active()
                .map(Effect::OpenEditor)
                .into_iter()
                .collect(),
            Action::Cancel => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureConfig;
    use crate::settings::AppSettings;
    use crate::Card;
    use flashdeck_core::ManualClock;

    fn deck() -> Deck<ManualClock> {
        Deck::with_clock(
            vec![
                Card::new("A", "a", "1", "t"),
                Card::new("B", "b", "2", "t"),
            ],
            AppSettings::default(),
            ManualClock::new(),
            GestureConfig::default(),
        )
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut deck = deck();
        deck.dispatch(Action::Advance);
        assert_eq!(deck.render_position(), 1);
        deck.dispatch(Action::Retreat);
        assert_eq!(deck.render_position(), 0);
    }

    #[test]
    fn test_flip_does_not_touch_collection() {
        let mut deck = deck();
        deck.dispatch(Action::Flip);
        assert!(deck.is_flipped());
        assert!(deck.pending_changes().is_empty());
        assert_eq!(deck.render_position(), 0);
    }

    #[test]
    fn test_edit_opens_editor_without_mutation() {
        let mut deck = deck();
        let effects = deck.dispatch(Action::Edit);
        match effects.as_slice() {
            [Effect::OpenEditor(request)] => {
                assert_eq!(request.editing.as_ref().unwrap().id.as_str(), "A");
            }
            other => panic!("unexpected effects: {:?}", other),
        }
        assert!(deck.pending_changes().is_empty());
    }

    #[test]
    fn test_delete_marks_cards_dirty() {
        let mut deck = deck();
        deck.dispatch(Action::Delete);
        assert_eq!(deck.cards().len(), 1);
        assert!(deck.pending_changes().cards);
    }

    #[test]
    fn test_cancel_is_inert() {
        let mut deck = deck();
        assert!(deck.dispatch(Action::Cancel).is_empty());
        assert_eq!(deck.render_position(), 0);
        assert!(deck.pending_changes().is_empty());
    }
}
