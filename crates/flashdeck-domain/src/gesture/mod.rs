//! Swipe gesture recognition.
//!
//! A single pointer stream over the active card resolves to exactly one
//! [`Action`]. Long-press and drag race each other from the moment the
//! pointer goes down; whichever happens first owns the gesture.

pub mod classifier;
pub mod feedback;
pub mod timer;

pub use classifier::{classify, GestureClassifier, GestureConfig, GesturePhase, PointerEvent};
pub use feedback::Feedback;
pub use timer::LongPressTimer;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Length of the vibration emitted when a long-press fires.
pub const HAPTIC_PULSE: Duration = Duration::from_millis(50);

/// Terminal outcome of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Advance,
    Retreat,
    Flip,
    Delete,
    Edit,
    Cancel,
}
