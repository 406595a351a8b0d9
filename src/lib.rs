//! FLAGQUIZ - Flag Guessing Quiz
//!
//! A terminal application for practicing world flags: pick a practice set,
//! guess each flag in shuffled order, review the misses at the end.

use std::fmt;
use std::time::Duration;

// Public re-exports
pub mod app;
pub mod catalog;
pub mod config;
pub mod game;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum QuizError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Practice set persistence error
    StoreError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Game state error (bad transition, empty selection)
    GameError(String),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::IoError(err) => write!(f, "I/O error: {}", err),
            QuizError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            QuizError::StoreError(msg) => write!(f, "Practice store error: {}", msg),
            QuizError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            QuizError::GameError(msg) => write!(f, "Game error: {}", msg),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(err: std::io::Error) -> Self {
        QuizError::IoError(err)
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::StoreError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for QuizError {
    fn from(err: toml::ser::Error) -> Self {
        QuizError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for flagquiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

// Common constants
pub const APP_NAME: &str = "flagquiz";
pub const CONFIG_FILE: &str = "flagquiz.toml";
pub const PRACTICE_FILE: &str = "practice.json";
/// How long correct/incorrect feedback stays on screen before the next flag.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);
