//! Card dealing: one shuffled pass over the twelve values, two 5-card hands.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::rules::HAND_SIZE;
use crate::domain::{CardValue, Hand};
use crate::errors::domain::DomainError;

/// Shuffling dealer backed by a seedable RNG.
pub struct Deck {
    rng: StdRng,
}

impl Deck {
    /// Deterministic deck; the same seed always yields the same sequence of deals.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Deck seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Shuffle all values, give the first five to the human and the next five
    /// to the agent. The last two values sit out this match.
    pub fn deal(&mut self) -> Result<(Hand, Hand), DomainError> {
        let mut deck = CardValue::ALL.to_vec();
        deck.shuffle(&mut self.rng);

        let human = Hand::new(deck[..HAND_SIZE].to_vec());
        let agent = Hand::new(deck[HAND_SIZE..2 * HAND_SIZE].to_vec());

        check_deal(&human, &agent)?;
        Ok((human, agent))
    }
}

/// Verify that two hands hold exactly `2 * HAND_SIZE` distinct values.
pub fn check_deal(human: &Hand, agent: &Hand) -> Result<(), DomainError> {
    if human.len() != HAND_SIZE || agent.len() != HAND_SIZE {
        return Err(DomainError::DuplicateDeal(format!(
            "expected {HAND_SIZE} cards per hand, got human={} agent={}",
            human.len(),
            agent.len()
        )));
    }

    let distinct: HashSet<CardValue> = human.iter().chain(agent.iter()).copied().collect();
    if distinct.len() != 2 * HAND_SIZE {
        return Err(DomainError::DuplicateDeal(format!(
            "human={human} agent={agent}"
        )));
    }
    Ok(())
}
