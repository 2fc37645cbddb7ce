//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod play;
pub mod rounds;
pub mod rules;
pub mod scoring;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_game_flow;
#[cfg(test)]
mod tests_props_rounds;
#[cfg(test)]
mod tests_rounds;

// Re-exports for ergonomics
pub use cards_parsing::{parse_card_label, try_parse_cards};
pub use cards_types::{CardValue, Hand};
pub use dealing::{check_deal, Deck};
pub use play::{
    resolve_round, submit_agent_play, submit_human_play, AgentPlay, AgentProposal,
    FallbackReason, RoundResult,
};
pub use rounds::{compare_cards, RoundOutcome};
pub use rules::HAND_SIZE;
pub use scoring::GameOutcome;
pub use state::{GameState, Phase, PlayRecord, Score};
