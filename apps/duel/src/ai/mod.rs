//! Opponent agents - choose the non-human side's card each round.
//!
//! This module provides:
//! - `OpponentAgent` trait and `AiError`
//! - `LlmOpponent`: streams a decision from a hosted language model
//! - `RandomOpponent`: uniform random play (seedable for tests)
//! - decision extraction and event-stream decoding helpers

pub mod decision;
mod llm;
mod random;
pub mod sse;
mod trait_def;

use std::fmt;
use std::str::FromStr;

pub use decision::{extract_decision, DecisionError};
pub use llm::{build_prompt, LlmOpponent, StreamObserver, TracingObserver};
pub use random::RandomOpponent;
pub use trait_def::{AiError, OpponentAgent};

use crate::config::Config;

/// Which opponent implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    Random,
    Llm,
}

impl FromStr for OpponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(OpponentKind::Random),
            "llm" => Ok(OpponentKind::Llm),
            other => Err(format!("unknown opponent kind: {other}")),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::Random => f.write_str("random"),
            OpponentKind::Llm => f.write_str("llm"),
        }
    }
}

/// Create an opponent of `kind` from process configuration.
pub fn create_opponent(
    kind: OpponentKind,
    config: &Config,
) -> Result<Box<dyn OpponentAgent>, AiError> {
    match kind {
        OpponentKind::Random => Ok(Box::new(RandomOpponent::new(config.seed))),
        OpponentKind::Llm => Ok(Box::new(LlmOpponent::new(config.llm.clone())?)),
    }
}
