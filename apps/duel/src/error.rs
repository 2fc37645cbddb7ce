use thiserror::Error;

use crate::ai::AiError;
use crate::errors::domain::DomainError;
use crate::recognizer::RecognizerError;

/// Application-level error returned by the session boundary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Card recognition failed: {0}")]
    Recognizer(#[from] RecognizerError),
    #[error("Opponent error: {0}")]
    Opponent(#[from] AiError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("No game in progress; start a new game first")]
    NoGame,
    #[error("Session aborted: {detail}")]
    SessionAborted { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn aborted(detail: impl Into<String>) -> Self {
        Self::SessionAborted {
            detail: detail.into(),
        }
    }

    /// Whether play can continue after this error (after re-prompting).
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Domain(err) => !err.is_fatal(),
            AppError::Recognizer(_) | AppError::Io(_) | AppError::NoGame => true,
            AppError::Opponent(_) | AppError::Config { .. } | AppError::SessionAborted { .. } => {
                false
            }
        }
    }
}
