#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod errors;
pub mod recognizer;
pub mod services;


// Re-exports for public API
pub use ai::{create_opponent, AiError, OpponentAgent, OpponentKind};
pub use config::{Config, ModelEndpoint};
pub use domain::{CardValue, GameState, Hand, Phase};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use recognizer::{create_recognizer, CardImage, CardRecognizer, RecognizerKind};
pub use services::{GameSession, RoundReport, SessionSettings};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
