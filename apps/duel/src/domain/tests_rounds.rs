use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::play::{
    resolve_round, submit_agent_play, submit_human_play, AgentPlay, AgentProposal,
    FallbackReason,
};
use crate::domain::rounds::{compare_cards, resolve, RoundOutcome};
use crate::domain::state::{PlayRecord, Score};
use crate::domain::test_state_helpers::{hand, scenario_state};
use crate::domain::CardValue;
use crate::errors::domain::DomainError;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn higher_card_wins_round() {
    assert_eq!(
        compare_cards(CardValue::King, CardValue::Nine),
        RoundOutcome::HumanWins
    );
    assert_eq!(
        compare_cards(CardValue::Nine, CardValue::Jack),
        RoundOutcome::AgentWins
    );
    assert_eq!(
        compare_cards(CardValue::Ace, CardValue::Ace),
        RoundOutcome::Tie
    );
}

#[test]
fn resolve_moves_cards_and_scores() {
    let mut state = scenario_state();
    let outcome = resolve(CardValue::Two, CardValue::Three, &mut state).unwrap();

    assert_eq!(outcome, RoundOutcome::AgentWins);
    assert_eq!(state.score(), Score { human: 0, agent: 1 });
    assert_eq!(state.human_hand(), &hand(&["K", "5", "9", "Q"]));
    assert_eq!(state.agent_hand(), &hand(&["4", "A", "J", "8"]));
    assert_eq!(
        state.history(),
        &[PlayRecord {
            human: CardValue::Two,
            agent: CardValue::Three
        }]
    );
}

#[test]
fn resolve_validates_before_mutating() {
    let mut state = scenario_state();
    let before = state.clone();

    // Human holds the 2, agent does not hold the K.
    let err = resolve(CardValue::Two, CardValue::King, &mut state).unwrap_err();
    assert_eq!(err, DomainError::AgentCardMissing(CardValue::King));
    assert!(err.is_fatal());
    assert_eq!(state.human_hand(), before.human_hand());
    assert_eq!(state.agent_hand(), before.agent_hand());
    assert!(state.history().is_empty());

    let err = resolve(CardValue::Ace, CardValue::Three, &mut state).unwrap_err();
    assert_eq!(err, DomainError::CardNotInHand(CardValue::Ace));
    assert_eq!(state.score(), Score::default());
}

#[test]
fn human_card_not_in_hand_is_recoverable_and_leaves_state() {
    let mut state = scenario_state();
    let err = submit_human_play(&mut state, CardValue::Ace).unwrap_err();

    assert_eq!(err, DomainError::CardNotInHand(CardValue::Ace));
    assert!(!err.is_fatal());
    assert_eq!(state.staged_human(), None);
    assert_eq!(state.human_hand().len(), 5);
}

#[test]
fn staging_does_not_remove_cards() {
    let mut state = scenario_state();
    submit_human_play(&mut state, CardValue::King).unwrap();
    submit_agent_play(&mut state, AgentProposal::Card(CardValue::Ace), &mut rng()).unwrap();

    assert_eq!(state.human_hand().len(), 5);
    assert_eq!(state.agent_hand().len(), 5);
    assert_eq!(state.staged_human(), Some(CardValue::King));
    assert_eq!(state.staged_agent(), Some(CardValue::Ace));
}

#[test]
fn human_play_can_be_restaged_until_agent_answers() {
    let mut state = scenario_state();
    submit_human_play(&mut state, CardValue::King).unwrap();
    submit_human_play(&mut state, CardValue::Five).unwrap();
    assert_eq!(state.staged_human(), Some(CardValue::Five));

    submit_agent_play(&mut state, AgentProposal::Card(CardValue::Eight), &mut rng()).unwrap();
    let err = submit_human_play(&mut state, CardValue::Two).unwrap_err();
    assert!(matches!(err, DomainError::OutOfOrder(_)));
    assert_eq!(state.staged_human(), Some(CardValue::Five));
}

#[test]
fn agent_play_requires_human_play_first() {
    let mut state = scenario_state();
    let err = submit_agent_play(&mut state, AgentProposal::Card(CardValue::Ace), &mut rng())
        .unwrap_err();
    assert!(matches!(err, DomainError::OutOfOrder(_)));
    assert_eq!(state.staged_agent(), None);
}

#[test]
fn resolve_requires_both_plays() {
    let mut state = scenario_state();
    assert!(matches!(
        resolve_round(&mut state),
        Err(DomainError::OutOfOrder(_))
    ));

    submit_human_play(&mut state, CardValue::Two).unwrap();
    assert!(matches!(
        resolve_round(&mut state),
        Err(DomainError::OutOfOrder(_))
    ));
    assert_eq!(state.human_hand().len(), 5);
}

#[test]
fn valid_agent_choice_is_kept() {
    let mut state = scenario_state();
    submit_human_play(&mut state, CardValue::Two).unwrap();
    let play =
        submit_agent_play(&mut state, AgentProposal::Card(CardValue::Three), &mut rng()).unwrap();

    assert_eq!(
        play,
        AgentPlay::Chosen {
            card: CardValue::Three
        }
    );
    assert!(!play.is_fallback());
    assert_eq!(play.notice(), None);
}

#[test]
fn hallucinated_agent_card_falls_back_to_hand() {
    let mut state = scenario_state();
    submit_human_play(&mut state, CardValue::Two).unwrap();
    let play =
        submit_agent_play(&mut state, AgentProposal::Card(CardValue::King), &mut rng()).unwrap();

    let AgentPlay::Fallback { card, reason } = &play else {
        panic!("expected fallback, got {play:?}");
    };
    assert!(state.agent_hand().contains(*card));
    assert_eq!(reason, &FallbackReason::NotInHand(CardValue::King));
    let notice = play.notice().unwrap();
    assert!(notice.starts_with("AI tried to play invalid card K"), "{notice}");
}

#[test]
fn every_failed_proposal_falls_back() {
    let proposals = [
        (
            AgentProposal::Malformed("no JSON object".into()),
            FallbackReason::Malformed("no JSON object".into()),
        ),
        (AgentProposal::TimedOut, FallbackReason::TimedOut),
        (
            AgentProposal::Failed("connection refused".into()),
            FallbackReason::AgentFailed("connection refused".into()),
        ),
    ];

    for (proposal, expected) in proposals {
        let mut state = scenario_state();
        submit_human_play(&mut state, CardValue::Nine).unwrap();
        let play = submit_agent_play(&mut state, proposal, &mut rng()).unwrap();
        match play {
            AgentPlay::Fallback { card, reason } => {
                assert!(state.agent_hand().contains(card));
                assert_eq!(reason, expected);
            }
            other => panic!("expected fallback, got {other:?}"),
        }
        assert!(resolve_round(&mut state).is_ok());
    }
}

#[test]
fn fallback_is_seed_deterministic() {
    let pick = |seed: u64| {
        let mut state = scenario_state();
        submit_human_play(&mut state, CardValue::Nine).unwrap();
        submit_agent_play(
            &mut state,
            AgentProposal::TimedOut,
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap()
        .card()
    };
    assert_eq!(pick(99), pick(99));
}
