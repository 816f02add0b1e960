pub mod cards;
pub mod import;
pub mod replay;
pub mod settings;
