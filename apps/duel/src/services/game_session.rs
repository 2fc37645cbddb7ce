//! Game session: the boundary the CLI talks to.
//!
//! One session owns one `GameState` at a time plus the two collaborators.
//! Every round runs recognition, the opponent call and resolution in that
//! order; nothing is shared between sessions.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

use crate::ai::{AiError, OpponentAgent};
use crate::domain::{
    resolve_round, submit_agent_play, submit_human_play, AgentPlay, AgentProposal, CardValue,
    Deck, GameState, RoundResult,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::recognizer::{CardImage, CardRecognizer};

/// Per-session knobs.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Upper bound on one opponent decision, streaming included.
    pub agent_timeout: Duration,
    /// Seed for dealing and for the fallback choice.
    pub seed: Option<u64>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            agent_timeout: Duration::from_secs(120),
            seed: None,
        }
    }
}

/// What happened in one played round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub recognized: CardValue,
    pub agent_play: AgentPlay,
    pub result: RoundResult,
    /// Warnings for the player, e.g. a fallback notice.
    pub notices: Vec<String>,
}

pub struct GameSession {
    recognizer: Box<dyn CardRecognizer>,
    opponent: Box<dyn OpponentAgent>,
    settings: SessionSettings,
    deck: Deck,
    fallback_rng: StdRng,
    state: Option<GameState>,
    aborted: Option<String>,
}

impl GameSession {
    pub fn new(
        recognizer: Box<dyn CardRecognizer>,
        opponent: Box<dyn OpponentAgent>,
        settings: SessionSettings,
    ) -> Self {
        let (deck, fallback_rng) = match settings.seed {
            Some(seed) => (
                Deck::seeded(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (Deck::from_os_rng(), StdRng::from_os_rng()),
        };
        Self {
            recognizer,
            opponent,
            settings,
            deck,
            fallback_rng,
            state: None,
            aborted: None,
        }
    }

    /// Deal a new game, replacing any previous one.
    pub fn start_game(&mut self) -> Result<GameState, AppError> {
        self.ensure_usable()?;

        let state = match GameState::deal(&mut self.deck) {
            Ok(state) => state,
            Err(err) => return Err(self.fail(err)),
        };
        info!(
            human_hand = %state.human_hand(),
            agent_hand = %state.agent_hand(),
            opponent = self.opponent.name(),
            "New game dealt"
        );

        self.state = Some(state.clone());
        Ok(state)
    }

    /// Read-only snapshot of the current game.
    pub fn get_state(&self) -> Result<GameState, AppError> {
        self.state.clone().ok_or(AppError::NoGame)
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }

    /// Play one round from a photo of the human's card.
    ///
    /// Recoverable errors (unrecognized photo, card not in hand) leave the
    /// game untouched so the caller can ask again. Opponent failures never
    /// surface here; they turn into a random card and a notice.
    pub async fn play_round(&mut self, image: &CardImage) -> Result<RoundReport, AppError> {
        self.ensure_usable()?;
        match &self.state {
            None => return Err(AppError::NoGame),
            Some(state) if state.is_finished() => return Err(DomainError::GameFinished.into()),
            Some(_) => {}
        }

        let recognized = match self.recognizer.recognize(image).await {
            Ok(card) => card,
            Err(err) => {
                warn!(recognizer = self.recognizer.name(), error = %err, "Card not recognized");
                return Err(err.into());
            }
        };
        debug!(card = %recognized, "Card recognized");

        let Some(state) = self.state.as_mut() else {
            return Err(AppError::NoGame);
        };
        if let Err(err) = submit_human_play(state, recognized) {
            warn!(card = %recognized, error = %err, "Human play rejected");
            return Err(err.into());
        }

        let agent_hand = state.agent_hand().as_slice().to_vec();
        let proposal = request_proposal(
            self.opponent.as_ref(),
            recognized,
            &agent_hand,
            self.settings.agent_timeout,
        )
        .await;

        let agent_play = match submit_agent_play(state, proposal, &mut self.fallback_rng) {
            Ok(play) => play,
            Err(err) => return Err(self.fail(err)),
        };

        let mut notices = Vec::new();
        if let Some(notice) = agent_play.notice() {
            warn!(card = %agent_play.card(), notice = %notice, "Opponent fallback applied");
            notices.push(notice);
        }

        let result = match resolve_round(state) {
            Ok(result) => result,
            Err(err) => return Err(self.fail(err)),
        };

        info!(
            round = result.round_no,
            human = %result.record.human,
            agent = %result.record.agent,
            outcome = ?result.outcome,
            human_score = result.score.human,
            agent_score = result.score.agent,
            "Round resolved"
        );
        if let Some(outcome) = result.game_outcome {
            info!(outcome = ?outcome, "Game finished");
        }

        Ok(RoundReport {
            recognized,
            agent_play,
            result,
            notices,
        })
    }

    fn ensure_usable(&self) -> Result<(), AppError> {
        match &self.aborted {
            Some(detail) => Err(AppError::aborted(detail.clone())),
            None => Ok(()),
        }
    }

    /// Convert a domain error, aborting the session if it is fatal.
    fn fail(&mut self, err: DomainError) -> AppError {
        if !err.is_fatal() {
            return err.into();
        }
        error!(error = %err, "Invariant violated; aborting session");
        let detail = err.to_string();
        self.aborted = Some(detail.clone());
        AppError::aborted(detail)
    }
}

/// Ask the opponent for a card, bounded by `limit`.
///
/// Every failure mode maps onto a proposal; the state machine decides what
/// to do with it.
pub async fn request_proposal(
    opponent: &dyn OpponentAgent,
    human_played: CardValue,
    agent_hand: &[CardValue],
    limit: Duration,
) -> AgentProposal {
    match timeout(limit, opponent.decide(human_played, agent_hand)).await {
        Ok(Ok(card)) => AgentProposal::Card(card),
        Ok(Err(err)) => {
            debug!(opponent = opponent.name(), error = %err, "Opponent returned no usable card");
            AgentProposal::from(err)
        }
        Err(_) => {
            debug!(opponent = opponent.name(), ?limit, "Opponent timed out");
            AgentProposal::from(AiError::Timeout)
        }
    }
}
