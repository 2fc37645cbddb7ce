use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::play::{
    resolve_round, submit_agent_play, submit_human_play, AgentProposal, RoundResult,
};
use crate::domain::rounds::RoundOutcome;
use crate::domain::scoring::GameOutcome;
use crate::domain::state::{GameState, Phase, Score};
use crate::domain::test_state_helpers::scenario_state;
use crate::domain::{CardValue, Deck};
use crate::errors::domain::DomainError;

fn play(state: &mut GameState, human: CardValue, agent: CardValue) -> RoundResult {
    let mut rng = StdRng::seed_from_u64(0);
    submit_human_play(state, human).unwrap();
    let agent_play = submit_agent_play(state, AgentProposal::Card(agent), &mut rng).unwrap();
    assert!(!agent_play.is_fallback());
    resolve_round(state).unwrap()
}

#[test]
fn five_round_scenario_ends_with_agent_win() {
    use CardValue::*;

    let mut state = scenario_state();
    assert_eq!(state.phase(), Phase::InProgress);

    let r1 = play(&mut state, Two, Three);
    assert_eq!(r1.round_no, 1);
    assert_eq!(r1.outcome, RoundOutcome::AgentWins);
    assert_eq!(r1.score, Score { human: 0, agent: 1 });

    let r2 = play(&mut state, King, Ace);
    assert_eq!(r2.outcome, RoundOutcome::AgentWins);
    assert_eq!(r2.score, Score { human: 0, agent: 2 });

    let r3 = play(&mut state, Five, Four);
    assert_eq!(r3.outcome, RoundOutcome::HumanWins);
    assert_eq!(r3.game_outcome, None);

    let r4 = play(&mut state, Nine, Jack);
    assert_eq!(r4.score, Score { human: 1, agent: 3 });
    assert_eq!(state.phase(), Phase::InProgress);

    let r5 = play(&mut state, Queen, Eight);
    assert_eq!(r5.round_no, 5);
    assert_eq!(r5.outcome, RoundOutcome::HumanWins);
    assert_eq!(r5.score, Score { human: 2, agent: 3 });
    assert_eq!(r5.game_outcome, Some(GameOutcome::AgentWinsGame));

    assert_eq!(state.phase(), Phase::Finished);
    assert!(state.human_hand().is_empty());
    assert!(state.agent_hand().is_empty());
    assert_eq!(state.history().len(), 5);
    assert_eq!(state.outcome(), Some(GameOutcome::AgentWinsGame));
}

#[test]
fn finished_game_rejects_further_play() {
    use CardValue::*;

    let mut state = scenario_state();
    for (h, a) in [(Two, Three), (King, Ace), (Five, Four), (Nine, Jack), (Queen, Eight)] {
        play(&mut state, h, a);
    }
    let snapshot = state.clone();

    assert_eq!(
        submit_human_play(&mut state, Two).unwrap_err(),
        DomainError::GameFinished
    );
    assert_eq!(
        submit_agent_play(&mut state, AgentProposal::TimedOut, &mut StdRng::seed_from_u64(1))
            .unwrap_err(),
        DomainError::GameFinished
    );
    assert_eq!(resolve_round(&mut state).unwrap_err(), DomainError::GameFinished);

    assert_eq!(state.phase(), Phase::Finished);
    assert_eq!(state.history(), snapshot.history());
    assert_eq!(state.score(), snapshot.score());
}

#[test]
fn outcome_follows_final_score() {
    let score = |human, agent| Score { human, agent };
    assert_eq!(GameOutcome::from_score(score(3, 2)), GameOutcome::HumanWinsGame);
    assert_eq!(GameOutcome::from_score(score(2, 3)), GameOutcome::AgentWinsGame);
    assert_eq!(GameOutcome::from_score(score(2, 2)), GameOutcome::TieGame);
}

#[test]
fn in_progress_game_has_no_outcome() {
    let state = scenario_state();
    assert_eq!(state.outcome(), None);
    assert_eq!(state.round_no(), 1);
}

#[test]
fn diverging_hands_are_fatal() {
    let mut state = scenario_state();
    state.agent_hand.take(CardValue::Eight);

    submit_human_play(&mut state, CardValue::Two).unwrap();
    submit_agent_play(
        &mut state,
        AgentProposal::Card(CardValue::Three),
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap();
    let err = resolve_round(&mut state).unwrap_err();

    assert_eq!(err, DomainError::HandDesync { human: 4, agent: 3 });
    assert!(err.is_fatal());
}

#[test]
fn dealt_game_starts_in_progress() {
    let state = GameState::deal(&mut Deck::seeded(2024)).unwrap();
    assert_eq!(state.phase(), Phase::InProgress);
    assert_eq!(state.score(), Score::default());
    assert!(state.history().is_empty());
    assert_eq!(state.human_hand().len(), 5);
    assert_eq!(state.agent_hand().len(), 5);
}

#[test]
fn snapshot_serializes_to_json() {
    let state = scenario_state();
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["phase"], "in_progress");
    assert_eq!(json["human_hand"], serde_json::json!(["2", "K", "5", "9", "Q"]));
    assert_eq!(json["score"]["agent"], 0);
}
