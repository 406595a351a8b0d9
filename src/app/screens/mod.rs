//! TUI screen components
//!
//! Contains individual screen implementations for the three stages.

pub mod play;
pub mod results;
pub mod select;

pub use play::PlayScreen;
pub use results::{ResultAction, ResultsScreen};
pub use select::SelectScreen;
