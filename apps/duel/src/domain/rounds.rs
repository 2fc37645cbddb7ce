//! Round resolution: move both cards to the table and score them.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::state::{GameState, PlayRecord};
use crate::domain::CardValue;
use crate::errors::domain::DomainError;

/// Who took a single round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    HumanWins,
    AgentWins,
    Tie,
}

/// Compare two played values under the fixed card order.
pub fn compare_cards(human: CardValue, agent: CardValue) -> RoundOutcome {
    match human.cmp(&agent) {
        Ordering::Greater => RoundOutcome::HumanWins,
        Ordering::Less => RoundOutcome::AgentWins,
        Ordering::Equal => RoundOutcome::Tie,
    }
}

/// Remove `human` and `agent` from their hands, credit the higher card and
/// append the pairing to the history.
///
/// Both cards are checked before either hand is touched, so a failed call
/// leaves `state` exactly as it was. Staging, the phase and the terminal
/// check belong to [`crate::domain::play::resolve_round`], the only caller;
/// this step is not reachable from outside the crate.
///
/// ```compile_fail
/// use duel::domain::rounds::resolve;
/// ```
pub(crate) fn resolve(
    human: CardValue,
    agent: CardValue,
    state: &mut GameState,
) -> Result<RoundOutcome, DomainError> {
    if !state.human_hand.contains(human) {
        return Err(DomainError::CardNotInHand(human));
    }
    if !state.agent_hand.contains(agent) {
        // Staging only accepts held cards; a miss here is a broken invariant.
        return Err(DomainError::AgentCardMissing(agent));
    }

    // Both present; the takes cannot miss.
    state.human_hand.take(human);
    state.agent_hand.take(agent);

    let outcome = compare_cards(human, agent);
    match outcome {
        RoundOutcome::HumanWins => state.score.human += 1,
        RoundOutcome::AgentWins => state.score.agent += 1,
        RoundOutcome::Tie => {}
    }
    state.history.push(PlayRecord { human, agent });

    Ok(outcome)
}
