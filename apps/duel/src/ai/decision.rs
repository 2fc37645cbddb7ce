//! Extraction of the structured decision from free-form model output.
//!
//! Reasoning models emit a lot of text before the answer, so the decision is
//! taken from the last `{...}` fragment. Single quotes are normalized to
//! double quotes before decoding.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::CardValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("no JSON object in response")]
    NoObject,
    #[error("invalid JSON {fragment:?}: {reason}")]
    InvalidJson { fragment: String, reason: String },
    #[error("JSON object has no \"card\" field")]
    MissingCard,
    #[error("{0:?} is not a card value")]
    NotACard(String),
}

#[derive(Debug, Deserialize)]
struct DecisionPayload {
    card: Option<JsonValue>,
}

/// Locate the last `{ ... }` span in `text` and normalize its quotes.
pub fn last_object_fragment(text: &str) -> Option<String> {
    let start = text.rfind('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(text[start..=end].replace('\'', "\""))
}

/// Pull the chosen card out of the accumulated response text.
///
/// The result is not checked against the agent hand here; that is the
/// state machine's job.
pub fn extract_decision(text: &str) -> Result<CardValue, DecisionError> {
    let fragment = last_object_fragment(text).ok_or(DecisionError::NoObject)?;

    let payload: DecisionPayload =
        serde_json::from_str(&fragment).map_err(|e| DecisionError::InvalidJson {
            fragment: fragment.clone(),
            reason: e.to_string(),
        })?;

    let raw = match payload.card {
        Some(JsonValue::String(s)) => s,
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(other) => return Err(DecisionError::NotACard(other.to_string())),
        None => return Err(DecisionError::MissingCard),
    };

    raw.parse::<CardValue>()
        .map_err(|_| DecisionError::NotACard(raw))
}
