//! Opponent agent trait definition.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AgentProposal, CardValue};

/// Errors that can occur while the opponent decides.
#[derive(Debug, Error)]
pub enum AiError {
    /// No decision within the deadline
    #[error("AI decision timeout")]
    Timeout,
    /// Model endpoint unreachable or returned an error status
    #[error("AI transport error: {0}")]
    Transport(String),
    /// Response contained no usable decision
    #[error("AI malformed output: {0}")]
    Malformed(String),
    /// Anything else inside the agent
    #[error("AI internal error: {0}")]
    Internal(String),
}

impl From<AiError> for AgentProposal {
    fn from(err: AiError) -> Self {
        match err {
            AiError::Timeout => AgentProposal::TimedOut,
            AiError::Malformed(detail) => AgentProposal::Malformed(detail),
            other => AgentProposal::Failed(other.to_string()),
        }
    }
}

/// Trait for the non-human side of the duel.
///
/// Implementations see the card the human just played and their own
/// remaining hand. The returned value is validated by the game state
/// machine; an agent may return a card it does not hold and the round
/// still proceeds with a random card from the hand.
#[async_trait]
pub trait OpponentAgent: Send + Sync {
    /// Stable display name.
    fn name(&self) -> &'static str;

    /// Choose a response to `human_played` from `agent_hand`.
    async fn decide(
        &self,
        human_played: CardValue,
        agent_hand: &[CardValue],
    ) -> Result<CardValue, AiError>;
}
