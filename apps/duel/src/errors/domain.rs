//! Domain-level error type used by the game state machine.
//!
//! This error type knows nothing about models or I/O. Callers convert it
//! into `crate::error::AppError` through the provided `From` impl.

use thiserror::Error;

use crate::domain::CardValue;

/// Central domain error type.
///
/// `DuplicateDeal`, `AgentCardMissing` and `HandDesync` signal a bug in this crate and abort the
/// session; everything else is recoverable and leaves state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A deal produced overlapping or repeated values.
    #[error("duplicate cards dealt: {0}")]
    DuplicateDeal(String),
    /// The staged agent card vanished from the agent hand before resolution.
    #[error("staged agent card {0} is missing from the agent hand")]
    AgentCardMissing(CardValue),
    /// Hands differ in length after a resolved round.
    #[error("hand sizes diverged: human holds {human}, agent holds {agent}")]
    HandDesync { human: usize, agent: usize },
    /// The recognized card is not in the human hand.
    #[error("card {0} not found in your hand")]
    CardNotInHand(CardValue),
    /// A label that is not one of the twelve card values.
    #[error("unrecognized card label: {0:?}")]
    UnrecognizedCard(String),
    /// Operation called in the wrong point of the round.
    #[error("out of order: {0}")]
    OutOfOrder(&'static str),
    /// The game already finished; a new deal is required.
    #[error("game is finished")]
    GameFinished,
}

impl DomainError {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DomainError::DuplicateDeal(_)
                | DomainError::AgentCardMissing(_)
                | DomainError::HandDesync { .. }
        )
    }
}
