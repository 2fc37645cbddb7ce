//! Round sequencing: stage the human play, stage the agent play, resolve.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

use crate::domain::rounds::{self, RoundOutcome};
use crate::domain::scoring::GameOutcome;
use crate::domain::state::{require_in_progress, GameState, Phase, PlayRecord, Score};
use crate::domain::CardValue;
use crate::errors::domain::DomainError;

/// What the opponent agent produced for this round, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentProposal {
    /// A well-formed card value (may still be missing from the hand).
    Card(CardValue),
    /// Output had no usable decision.
    Malformed(String),
    /// No decision before the deadline.
    TimedOut,
    /// The agent call itself failed.
    Failed(String),
}

/// Why the agent's card was picked at random.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    NotInHand(CardValue),
    Malformed(String),
    TimedOut,
    AgentFailed(String),
}

/// The agent card accepted for the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum AgentPlay {
    Chosen { card: CardValue },
    Fallback { card: CardValue, reason: FallbackReason },
}

impl AgentPlay {
    pub fn card(&self) -> CardValue {
        match self {
            AgentPlay::Chosen { card } | AgentPlay::Fallback { card, .. } => *card,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AgentPlay::Fallback { .. })
    }

    /// User-facing warning for a fallback play.
    pub fn notice(&self) -> Option<String> {
        let AgentPlay::Fallback { card, reason } = self else {
            return None;
        };
        let why = match reason {
            FallbackReason::NotInHand(tried) => format!("AI tried to play invalid card {tried}"),
            FallbackReason::Malformed(detail) => format!("Failed to parse AI response ({detail})"),
            FallbackReason::TimedOut => "AI did not answer in time".to_string(),
            FallbackReason::AgentFailed(detail) => format!("AI call failed ({detail})"),
        };
        Some(format!("{why}; played {card} at random instead"))
    }
}

/// Summary of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// 1-based round number that was just resolved.
    pub round_no: usize,
    pub record: PlayRecord,
    pub outcome: RoundOutcome,
    /// Score after this round.
    pub score: Score,
    /// Set when this round finished the game.
    pub game_outcome: Option<GameOutcome>,
}

/// Stage the recognized human card for the current round.
///
/// The card stays in the hand until [`resolve_round`]. Re-staging replaces
/// the previous choice as long as the agent has not answered yet.
pub fn submit_human_play(state: &mut GameState, card: CardValue) -> Result<(), DomainError> {
    require_in_progress(state)?;

    if state.staged_agent.is_some() {
        return Err(DomainError::OutOfOrder(
            "agent play already staged; resolve the round first",
        ));
    }

    if !state.human_hand.contains(card) {
        return Err(DomainError::CardNotInHand(card));
    }

    state.staged_human = Some(card);
    Ok(())
}

/// Validate the agent's proposal against its hand and stage it.
///
/// Anything other than a card the agent actually holds is replaced by a
/// uniformly random card from the agent hand.
pub fn submit_agent_play<R: Rng + ?Sized>(
    state: &mut GameState,
    proposal: AgentProposal,
    rng: &mut R,
) -> Result<AgentPlay, DomainError> {
    require_in_progress(state)?;

    if state.staged_human.is_none() {
        return Err(DomainError::OutOfOrder("human play must be submitted first"));
    }
    if state.staged_agent.is_some() {
        return Err(DomainError::OutOfOrder("agent play already staged"));
    }

    let reason = match proposal {
        AgentProposal::Card(card) if state.agent_hand.contains(card) => {
            state.staged_agent = Some(card);
            return Ok(AgentPlay::Chosen { card });
        }
        AgentProposal::Card(card) => FallbackReason::NotInHand(card),
        AgentProposal::Malformed(detail) => FallbackReason::Malformed(detail),
        AgentProposal::TimedOut => FallbackReason::TimedOut,
        AgentProposal::Failed(detail) => FallbackReason::AgentFailed(detail),
    };

    let card = state
        .agent_hand
        .as_slice()
        .choose(rng)
        .copied()
        .ok_or(DomainError::HandDesync {
            human: state.human_hand.len(),
            agent: 0,
        })?;

    state.staged_agent = Some(card);
    Ok(AgentPlay::Fallback { card, reason })
}

/// Resolve the staged plays, then check whether the game is over.
pub fn resolve_round(state: &mut GameState) -> Result<RoundResult, DomainError> {
    require_in_progress(state)?;

    let (Some(human), Some(agent)) = (state.staged_human, state.staged_agent) else {
        return Err(DomainError::OutOfOrder(
            "both plays must be staged before resolving",
        ));
    };

    let outcome = rounds::resolve(human, agent, state)?;
    state.staged_human = None;
    state.staged_agent = None;

    let (human_left, agent_left) = (state.human_hand.len(), state.agent_hand.len());
    if human_left != agent_left {
        return Err(DomainError::HandDesync {
            human: human_left,
            agent: agent_left,
        });
    }

    let game_outcome = if human_left == 0 {
        state.phase = Phase::Finished;
        Some(GameOutcome::from_score(state.score))
    } else {
        None
    };

    Ok(RoundResult {
        round_no: state.history.len(),
        record: PlayRecord { human, agent },
        outcome,
        score: state.score,
        game_outcome,
    })
}
