//! The study session: collection, tag filter, cursor and gesture engine.
//!
//! The collection is the only authoritative state. The filtered view is
//! recomputed on demand and the cursor is reconciled after every change, and
//! clamped again on every read.

use flashdeck_core::{Clock, Cursor, DeckError, DeckResult, MonotonicClock};
use serde::Serialize;
use std::time::Duration;

use crate::card::{Card, CardId};
use crate::collection::Collection;
use crate::commands::{
    AppendCards, Command, CommandContext, CreateCard, DeleteCard, ReplaceCards, ShuffleCards,
    UpdateCard,
};
use crate::editable::{CardDraft, EditorCommit, EditorRequest};
use crate::filter::compute_view;
use crate::flip::FlipState;
use crate::gesture::{
    Action, Feedback, GestureClassifier, GestureConfig, GesturePhase, PointerEvent, HAPTIC_PULSE,
};
use crate::samples::sample_cards;
use crate::settings::AppSettings;
use crate::tag::{available_tags, TagFilter};

/// What changed since the last time persistence looked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingChanges {
    pub cards: bool,
    pub settings: bool,
}

impl PendingChanges {
    pub fn is_empty(&self) -> bool {
        !self.cards && !self.settings
    }
}

/// Side effects the host is asked to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Haptic(Duration),
    OpenEditor(EditorRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckOutcome {
    pub action: Option<Action>,
    pub effects: Vec<Effect>,
}

/// Position indicator, present only while the view has cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckStatus {
    /// One-based position of the active card.
    pub position: usize,
    pub total: usize,
    pub filter: String,
    pub showing_all: bool,
}

pub struct Deck<C: Clock = MonotonicClock> {
    collection: Collection,
    filter: TagFilter,
    cursor: Cursor,
    flip: FlipState,
    gesture: GestureClassifier<C>,
    settings: AppSettings,
    last_added_tag: Option<String>,
    changes: PendingChanges,
}

impl Deck<MonotonicClock> {
    pub fn new(cards: Vec<Card>, settings: AppSettings) -> Self {
        Self::with_clock(cards, settings, MonotonicClock::new(), GestureConfig::default())
    }
}

impl<C: Clock> Deck<C> {
    pub fn with_clock(
        cards: Vec<Card>,
        settings: AppSettings,
        clock: C,
        config: GestureConfig,
    ) -> Self {
        let mut deck = Self {
            collection: Collection::new(cards),
            filter: TagFilter::All,
            cursor: Cursor::new(),
            flip: FlipState::new(),
            gesture: GestureClassifier::new(clock, config),
            settings: settings.clamped(),
            last_added_tag: None,
            changes: PendingChanges::default(),
        };
        deck.refresh();
        deck
    }

    /// Build from whatever storage produced, substituting built-in defaults.
    pub fn restore(
        cards: Option<Vec<Card>>,
        settings: Option<AppSettings>,
        clock: C,
        config: GestureConfig,
    ) -> Self {
        Self::with_clock(
            cards.unwrap_or_else(sample_cards),
            settings.unwrap_or_default(),
            clock,
            config,
        )
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn cards(&self) -> &[Card] {
        self.collection.cards()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn filter(&self) -> &TagFilter {
        &self.filter
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn view(&self) -> Vec<&Card> {
        compute_view(self.collection.cards(), &self.filter)
    }

    pub fn view_len(&self) -> usize {
        self.view().len()
    }

    pub fn available_tags(&self) -> Vec<TagFilter> {
        available_tags(self.collection.cards())
    }

    pub fn render_position(&self) -> usize {
        self.cursor.render_position(self.view_len())
    }

    pub fn active_card(&self) -> Option<&Card> {
        let view = self.view();
        let position = self.cursor.render_position(view.len());
        view.get(position).copied()
    }

    /// Card stacked under the active one, wrapping at the end.
    pub fn preview_card(&self) -> Option<&Card> {
        let view = self.view();
        if view.len() < 2 {
            return None;
        }
        let position = self.cursor.render_position(view.len());
        view.get((position + 1) % view.len()).copied()
    }

    /// Whether the active card shows its back.
    pub fn is_flipped(&self) -> bool {
        self.active_card()
            .is_some_and(|card| self.flip.is_flipped(&card.id))
    }

    pub fn status(&self) -> Option<DeckStatus> {
        let total = self.view_len();
        if total == 0 {
            return None;
        }
        Some(DeckStatus {
            position: self.cursor.render_position(total) + 1,
            total,
            filter: self.filter.label().to_string(),
            showing_all: self.filter.is_all(),
        })
    }

    /// Switch the tag filter. Browsing always restarts at the first match.
    pub fn select_tag(&mut self, filter: TagFilter) {
        tracing::debug!(filter = %filter, "selecting tag");
        self.filter = filter;
        self.cursor.set(0);
        self.refresh();
    }

    pub fn next(&mut self) {
        let len = self.view_len();
        self.cursor.next(len);
        self.refresh();
    }

    pub fn prev(&mut self) {
        let len = self.view_len();
        self.cursor.prev(len);
        self.refresh();
    }

    pub fn toggle_flip(&mut self) {
        if let Some(id) = self.active_card().map(|card| card.id.clone()) {
            self.flip.toggle(&id);
        }
    }

    /// Delete the active card.
    ///
    /// Deleting the last card of the view steps back one position; deleting
    /// anywhere else keeps the cursor, which then lands on the following card.
    pub fn delete_active(&mut self) -> Option<Card> {
        let len = self.view_len();
        let position = self.render_position();
        let card = self.active_card()?.clone();

        if let Err(err) = self.execute(&DeleteCard {
            card_id: card.id.clone(),
        }) {
            tracing::warn!("failed to delete card {}: {}", card.id, err);
            return None;
        }

        if position == len - 1 {
            self.cursor.set(position.saturating_sub(1));
        }
        self.refresh();
        Some(card)
    }

    /// Delete any card by identity. Absent cards are a no-op.
    pub fn delete_card(&mut self, id: &CardId) -> DeckResult<Option<Card>> {
        let card = self.collection.get(id).cloned();
        if card.is_some() {
            self.execute(&DeleteCard {
                card_id: id.clone(),
            })?;
        }
        Ok(card)
    }

    /// Randomly reorder the whole collection and restart at the first card.
    pub fn shuffle(&mut self, seed: Option<u64>) -> DeckResult<()> {
        self.execute(&ShuffleCards { seed })?;
        self.cursor.set(0);
        self.refresh();
        Ok(())
    }

    pub fn replace_all(&mut self, cards: Vec<Card>) -> DeckResult<()> {
        self.execute(&ReplaceCards { cards })?;
        Ok(())
    }

    /// Append a batch of new cards in one step.
    pub fn append_drafts(&mut self, drafts: Vec<CardDraft>) -> DeckResult<Vec<CardId>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }
        self.execute(&AppendCards { drafts })
    }

    pub fn editor_for_create(&self) -> EditorRequest {
        self.editor_request(None)
    }

    pub fn editor_for_active(&self) -> Option<EditorRequest> {
        let card = self.active_card()?.clone();
        Some(self.editor_request(Some(card)))
    }

    pub fn editor_for(&self, id: &CardId) -> Option<EditorRequest> {
        let card = self.collection.get(id)?.clone();
        Some(self.editor_request(Some(card)))
    }

    fn editor_request(&self, editing: Option<Card>) -> EditorRequest {
        let available_tags = self
            .available_tags()
            .into_iter()
            .filter_map(|tag| match tag {
                TagFilter::Tag(tag) => Some(tag),
                TagFilter::All => None,
            })
            .collect();
        EditorRequest {
            editing,
            available_tags,
            default_tag: self.last_added_tag.clone().unwrap_or_default(),
        }
    }

    /// Apply a saved editor form: update when it targets a card, insert otherwise.
    pub fn commit_editor(&mut self, commit: EditorCommit) -> DeckResult<CardId> {
        let draft = commit.draft.validate()?;
        match commit.target {
            Some(card_id) => {
                self.execute(&UpdateCard {
                    card_id: card_id.clone(),
                    draft,
                })?;
                Ok(card_id)
            }
            None => {
                let tag = draft.tag.clone();
                let created = self.execute(&CreateCard { draft })?;
                self.last_added_tag = Some(tag);
                created
                    .into_iter()
                    .next()
                    .ok_or_else(|| DeckError::Internal("card was not created".to_string()))
            }
        }
    }

    pub fn update_settings(&mut self, settings: AppSettings) {
        let settings = settings.clamped();
        if settings != self.settings {
            self.settings = settings;
            self.changes.settings = true;
        }
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    pub fn feedback(&self) -> Feedback {
        self.gesture.feedback()
    }

    pub fn long_press_deadline(&self) -> Option<Duration> {
        self.gesture.long_press_deadline()
    }

    pub fn clock(&self) -> &C {
        self.gesture.clock()
    }

    /// Feed a pointer event for the active card and apply whatever it resolves to.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> DeckOutcome {
        if matches!(event, PointerEvent::Down) && self.active_card().is_none() {
            return DeckOutcome::default();
        }
        let action = self.gesture.handle(event);
        self.resolve(action)
    }

    /// Poll the long-press timer.
    pub fn tick(&mut self) -> DeckOutcome {
        let action = self.gesture.tick();
        self.resolve(action)
    }

    fn resolve(&mut self, action: Option<Action>) -> DeckOutcome {
        let Some(action) = action else {
            return DeckOutcome::default();
        };
        let mut effects = Vec::new();
        if action == Action::Edit {
            effects.push(Effect::Haptic(HAPTIC_PULSE));
        }
        effects.extend(self.dispatch(action));
        DeckOutcome {
            action: Some(action),
            effects,
        }
    }

    pub fn pending_changes(&self) -> PendingChanges {
        self.changes
    }

    /// Hand the pending changes to persistence and clear them.
    pub fn take_changes(&mut self) -> PendingChanges {
        std::mem::take(&mut self.changes)
    }

    /// Run a collection command, then reconcile derived state.
    pub fn execute(&mut self, command: &dyn Command) -> DeckResult<Vec<CardId>> {
        let mut created = Vec::new();
        let mut ctx = CommandContext {
            cards: &mut self.collection,
            created: &mut created,
        };
        command.execute(&mut ctx)?;
        tracing::debug!("{}", command.description());
        self.changes.cards = true;
        self.refresh();
        Ok(created)
    }

    fn refresh(&mut self) {
        let view = compute_view(self.collection.cards(), &self.filter);
        self.cursor.reconcile(view.len());
        let active = view.get(self.cursor.get()).map(|card| card.id.clone());
        self.flip.sync(active.as_ref());
    }
}
