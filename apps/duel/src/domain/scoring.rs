//! Final game result from the score.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::state::Score;

/// Result of a finished game, derived only from the final score.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    HumanWinsGame,
    AgentWinsGame,
    TieGame,
}

impl GameOutcome {
    pub fn from_score(score: Score) -> Self {
        match score.human.cmp(&score.agent) {
            Ordering::Greater => GameOutcome::HumanWinsGame,
            Ordering::Less => GameOutcome::AgentWinsGame,
            Ordering::Equal => GameOutcome::TieGame,
        }
    }
}
