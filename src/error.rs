//! Error type shared by loading, validation and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("question {id}: {reason}")]
    InvalidQuestion { id: u32, reason: String },

    #[error("duplicate question id {0}")]
    DuplicateQuestion(u32),

    /// Name outside the closed archetype set (CLI `--target`).
    #[error("unknown archetype: {0}")]
    UnknownArchetype(String),
}

impl QuizError {
    pub(crate) fn invalid(id: u32, reason: impl Into<String>) -> Self {
        QuizError::InvalidQuestion {
            id,
            reason: reason.into(),
        }
    }
}
