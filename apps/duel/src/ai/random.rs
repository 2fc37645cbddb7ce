//! Random opponent - plays a uniformly random card from its hand.
//!
//! Useful offline, as a baseline against the language-model opponent, and in
//! tests that need a well-behaved agent.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::prelude::*;

use super::trait_def::{AiError, OpponentAgent};
use crate::domain::CardValue;

/// Opponent that picks uniformly at random.
///
/// `decide` takes `&self`, so the RNG sits behind a `Mutex`. A seed makes
/// the sequence of choices reproducible.
pub struct RandomOpponent {
    rng: Mutex<StdRng>,
}

impl RandomOpponent {
    pub const NAME: &'static str = "RandomOpponent";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

#[async_trait]
impl OpponentAgent for RandomOpponent {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn decide(
        &self,
        _human_played: CardValue,
        agent_hand: &[CardValue],
    ) -> Result<CardValue, AiError> {
        if agent_hand.is_empty() {
            return Err(AiError::Internal("No cards left to play".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        agent_hand
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}
