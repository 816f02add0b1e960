//! Card filtering functionality.
//!
//! Provides the filter trait and the derived, order-preserving view it produces.

pub mod card_filter;

pub use card_filter::{compute_view, CardFilter};
