//! Game state for one match: hands, history, score and the staged plays of
//! the round in flight.
//!
//! Fields are crate-visible so the round functions in `play` and `rounds`
//! can mutate them; everything outside the crate reads through getters.

use serde::Serialize;

use crate::domain::dealing::{check_deal, Deck};
use crate::domain::scoring::GameOutcome;
use crate::domain::{CardValue, Hand};
use crate::errors::domain::DomainError;

/// Game progression.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Cards remain in both hands.
    InProgress,
    /// Both hands are empty; the outcome is fixed.
    Finished,
}

/// One resolved round: the two cards that met on the table.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct PlayRecord {
    pub human: CardValue,
    pub agent: CardValue,
}

/// Rounds won by each side.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct Score {
    pub human: u8,
    pub agent: u8,
}

/// Everything one game session knows, passed explicitly between calls.
///
/// Hands only shrink, history only grows, and once `phase` is `Finished`
/// no operation mutates the state again.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub(crate) phase: Phase,
    pub(crate) human_hand: Hand,
    pub(crate) agent_hand: Hand,
    pub(crate) history: Vec<PlayRecord>,
    pub(crate) score: Score,
    /// Human play accepted for the round in flight, still in the hand.
    pub(crate) staged_human: Option<CardValue>,
    /// Agent play accepted for the round in flight, still in the hand.
    pub(crate) staged_agent: Option<CardValue>,
}

impl GameState {
    /// Start a game from two dealt hands, re-checking the deal invariant.
    pub fn new(human_hand: Hand, agent_hand: Hand) -> Result<Self, DomainError> {
        check_deal(&human_hand, &agent_hand)?;
        Ok(Self {
            phase: Phase::InProgress,
            human_hand,
            agent_hand,
            history: Vec::new(),
            score: Score::default(),
            staged_human: None,
            staged_agent: None,
        })
    }

    /// Deal a fresh game from `deck`.
    pub fn deal(deck: &mut Deck) -> Result<Self, DomainError> {
        let (human, agent) = deck.deal()?;
        Self::new(human, agent)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn human_hand(&self) -> &Hand {
        &self.human_hand
    }

    pub fn agent_hand(&self) -> &Hand {
        &self.agent_hand
    }

    pub fn history(&self) -> &[PlayRecord] {
        &self.history
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn staged_human(&self) -> Option<CardValue> {
        self.staged_human
    }

    pub fn staged_agent(&self) -> Option<CardValue> {
        self.staged_agent
    }

    /// 1-based number of the round currently being played.
    pub fn round_no(&self) -> usize {
        self.history.len() + 1
    }

    /// Final result; `None` while the game is in progress.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            Phase::Finished => Some(GameOutcome::from_score(self.score)),
            Phase::InProgress => None,
        }
    }
}

pub(crate) fn require_in_progress(state: &GameState) -> Result<(), DomainError> {
    match state.phase {
        Phase::InProgress => Ok(()),
        Phase::Finished => Err(DomainError::GameFinished),
    }
}
