//! Card recognizers - turn a photographed card into a card value.
//!
//! - `VisionRecognizer`: asks a hosted vision model
//! - `ManualRecognizer`: reads the blob as a typed label (offline play, tests)

mod image;
mod manual;
mod vision;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use thiserror::Error;

pub use image::CardImage;
pub use manual::ManualRecognizer;
pub use vision::{recognition_prompt, VisionRecognizer};

use crate::config::Config;
use crate::domain::CardValue;

/// Errors from card recognition. All of them are recoverable: the caller
/// asks for the card again.
#[derive(Debug, Error)]
pub enum RecognizerError {
    /// The answer was not one of the twelve values.
    #[error("could not recognize a card value from {0:?}")]
    Unrecognized(String),
    /// The model endpoint failed or answered with an unexpected shape.
    #[error("recognizer transport error: {0}")]
    Transport(String),
}

/// Trait for anything that can read a card value off an image.
#[async_trait]
pub trait CardRecognizer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn recognize(&self, image: &CardImage) -> Result<CardValue, RecognizerError>;
}

/// Which recognizer implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizerKind {
    Vision,
    Manual,
}

impl FromStr for RecognizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vision" => Ok(RecognizerKind::Vision),
            "manual" => Ok(RecognizerKind::Manual),
            other => Err(format!("unknown recognizer kind: {other}")),
        }
    }
}

impl fmt::Display for RecognizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognizerKind::Vision => f.write_str("vision"),
            RecognizerKind::Manual => f.write_str("manual"),
        }
    }
}

/// Create a recognizer of `kind` from process configuration.
pub fn create_recognizer(
    kind: RecognizerKind,
    config: &Config,
) -> Result<Box<dyn CardRecognizer>, RecognizerError> {
    match kind {
        RecognizerKind::Vision => Ok(Box::new(VisionRecognizer::new(
            config.vlm.clone(),
            config.recognizer_timeout,
        )?)),
        RecognizerKind::Manual => Ok(Box::new(ManualRecognizer)),
    }
}
