use flashdeck_core::{AppConfig, Clock};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::feedback::Feedback;
use super::timer::LongPressTimer;
use super::Action;

/// Raw pointer input for the active card. Moves carry deltas since the last event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down,
    Move { dx: f32, dy: f32 },
    Up,
    #[serde(alias = "leave")]
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Offset a release must exceed to commit a swipe.
    pub swipe_threshold: f32,
    pub long_press: Duration,
    pub drag_engage_distance: f32,
    pub feedback_activation: f32,
    pub feedback_full: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for GestureConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold,
            long_press: Duration::from_millis(config.long_press_ms),
            drag_engage_distance: config.drag_engage_distance,
            feedback_activation: config.feedback_activation,
            feedback_full: config.feedback_full,
        }
    }
}

/// Observable phase of the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GesturePhase {
    Idle,
    Pressed,
    Dragging,
    LongPressFired,
}

#[derive(Debug, Clone)]
enum GestureState {
    Idle,
    Pressed { timer: LongPressTimer },
    Dragging,
    LongPressFired,
}

/// Resolve a released drag offset into an action.
///
/// Vertical wins only when strictly dominant; ties go to the horizontal axis.
pub fn classify(offset_x: f32, offset_y: f32, threshold: f32) -> Action {
    if offset_y.abs() > offset_x.abs() {
        if offset_y < -threshold {
            Action::Delete
        } else if offset_y > threshold {
            Action::Flip
        } else {
            Action::Cancel
        }
    } else if offset_x < -threshold {
        Action::Advance
    } else if offset_x > threshold {
        Action::Retreat
    } else {
        Action::Cancel
    }
}

/// Turns one pointer stream into one terminal [`Action`].
pub struct GestureClassifier<C: Clock> {
    clock: C,
    config: GestureConfig,
    state: GestureState,
    offset: (f32, f32),
}

impl<C: Clock> GestureClassifier<C> {
    pub fn new(clock: C, config: GestureConfig) -> Self {
        Self {
            clock,
            config,
            state: GestureState::Idle,
            offset: (0.0, 0.0),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn phase(&self) -> GesturePhase {
        match self.state {
            GestureState::Idle => GesturePhase::Idle,
            GestureState::Pressed { .. } => GesturePhase::Pressed,
            GestureState::Dragging => GesturePhase::Dragging,
            GestureState::LongPressFired => GesturePhase::LongPressFired,
        }
    }

    pub fn is_long_press_armed(&self) -> bool {
        matches!(&self.state, GestureState::Pressed { timer } if timer.is_armed())
    }

    /// When the armed long-press timer is due, if one is armed.
    pub fn long_press_deadline(&self) -> Option<Duration> {
        match &self.state {
            GestureState::Pressed { timer } if timer.is_armed() => Some(timer.deadline()),
            _ => None,
        }
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// Feed one pointer event. Returns the terminal action if the gesture resolved.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Action> {
        match event {
            PointerEvent::Down => self.pointer_down(),
            PointerEvent::Move { dx, dy } => self.pointer_move(dx, dy),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Cancel => self.pointer_cancel(),
        }
    }

    /// Start a gesture and arm the long-press timer. Ignored mid-gesture.
    pub fn pointer_down(&mut self) -> Option<Action> {
        if !matches!(self.state, GestureState::Idle) {
            tracing::debug!("pointer down ignored, gesture already in progress");
            return None;
        }
        let timer = LongPressTimer::arm(self.clock.now(), self.config.long_press);
        self.state = GestureState::Pressed { timer };
        self.offset = (0.0, 0.0);
        None
    }

    pub fn pointer_move(&mut self, dx: f32, dy: f32) -> Option<Action> {
        if let Some(action) = self.tick() {
            return Some(action);
        }
        match &mut self.state {
            GestureState::Pressed { timer } => {
                self.offset.0 += dx;
                self.offset.1 += dy;
                if self.offset.0.hypot(self.offset.1) > self.config.drag_engage_distance {
                    timer.cancel();
                    self.state = GestureState::Dragging;
                }
            }
            GestureState::Dragging => {
                self.offset.0 += dx;
                self.offset.1 += dy;
            }
            GestureState::Idle | GestureState::LongPressFired => {}
        }
        None
    }

    /// End the gesture. A release that fires an overdue long-press yields `Edit`.
    pub fn pointer_up(&mut self) -> Option<Action> {
        let fired = self.tick();
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        let (offset_x, offset_y) = std::mem::take(&mut self.offset);

        let action = match state {
            GestureState::Pressed { mut timer } => {
                timer.cancel();
                Some(Action::Cancel)
            }
            GestureState::Dragging => Some(classify(
                offset_x,
                offset_y,
                self.config.swipe_threshold,
            )),
            GestureState::LongPressFired => fired,
            GestureState::Idle => Some(Action::Cancel),
        };
        tracing::debug!(?action, offset_x, offset_y, "gesture released");
        action
    }

    /// Abort the gesture from any phase without side effects.
    ///
    /// A long-press already past its deadline still fires `Edit` first.
    pub fn pointer_cancel(&mut self) -> Option<Action> {
        if let Some(action) = self.tick() {
            self.state = GestureState::Idle;
            self.offset = (0.0, 0.0);
            return Some(action);
        }
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        self.offset = (0.0, 0.0);
        match state {
            GestureState::Idle => None,
            GestureState::Pressed { mut timer } => {
                timer.cancel();
                Some(Action::Cancel)
            }
            GestureState::Dragging | GestureState::LongPressFired => Some(Action::Cancel),
        }
    }

    /// Poll the long-press timer against the clock.
    pub fn tick(&mut self) -> Option<Action> {
        let now = self.clock.now();
        if let GestureState::Pressed { timer } = &mut self.state {
            if timer.poll(now) {
                self.state = GestureState::LongPressFired;
                tracing::debug!("long press fired");
                return Some(Action::Edit);
            }
        }
        None
    }

    /// Live affordances for the current drag. Idle outside of a drag.
    pub fn feedback(&self) -> Feedback {
        match self.state {
            GestureState::Dragging => Feedback::from_offset(
                self.offset.0,
                self.offset.1,
                self.config.feedback_activation,
                self.config.feedback_full,
            ),
            _ => Feedback::default(),
        }
    }
}
