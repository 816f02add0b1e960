pub mod clock;
pub mod config;
pub mod cursor;
pub mod error;
pub mod result;
pub mod traits;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::AppConfig;
pub use cursor::Cursor;
pub use error::DeckError;
pub use result::DeckResult;
pub use traits::Editable;
