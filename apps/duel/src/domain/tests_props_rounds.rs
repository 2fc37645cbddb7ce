use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::play::{resolve_round, submit_agent_play, submit_human_play, AgentProposal};
use crate::domain::rounds::{compare_cards, RoundOutcome};
use crate::domain::scoring::GameOutcome;
use crate::domain::state::{GameState, Phase};
use crate::domain::{test_gens, test_prelude, HAND_SIZE};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any deal-derived game runs exactly five rounds, each round
    /// removes one card per side at resolution, and score moves only for the
    /// strictly higher card.
    #[test]
    fn prop_full_game_invariants(
        (human, agent) in test_gens::deal(),
        order in test_gens::play_order(),
        seed in any::<u64>(),
    ) {
        let mut state = GameState::new(human, agent).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);

        for (round, (hi, ai)) in order.into_iter().enumerate() {
            prop_assert_eq!(state.phase(), Phase::InProgress);
            let before = state.clone();

            let h = before.human_hand().as_slice()[hi % before.human_hand().len()];
            let a = before.agent_hand().as_slice()[ai % before.agent_hand().len()];

            submit_human_play(&mut state, h).unwrap();
            submit_agent_play(&mut state, AgentProposal::Card(a), &mut rng).unwrap();
            prop_assert_eq!(state.human_hand().len(), before.human_hand().len());
            prop_assert_eq!(state.agent_hand().len(), before.agent_hand().len());

            let result = resolve_round(&mut state).unwrap();
            prop_assert_eq!(result.round_no, round + 1);
            prop_assert_eq!(state.human_hand().len(), before.human_hand().len() - 1);
            prop_assert_eq!(state.agent_hand().len(), before.agent_hand().len() - 1);
            prop_assert!(!state.human_hand().contains(h));
            prop_assert!(!state.agent_hand().contains(a));

            let (prev, now) = (before.score(), state.score());
            match compare_cards(h, a) {
                RoundOutcome::HumanWins => {
                    prop_assert!(h > a);
                    prop_assert_eq!((now.human, now.agent), (prev.human + 1, prev.agent));
                }
                RoundOutcome::AgentWins => {
                    prop_assert!(a > h);
                    prop_assert_eq!((now.human, now.agent), (prev.human, prev.agent + 1));
                }
                RoundOutcome::Tie => prop_assert_eq!(now, prev),
            }
        }

        prop_assert_eq!(state.phase(), Phase::Finished);
        prop_assert_eq!(state.history().len(), HAND_SIZE);
        let score = state.score();
        prop_assert_eq!(usize::from(score.human + score.agent), HAND_SIZE);
        prop_assert_eq!(state.outcome(), Some(GameOutcome::from_score(score)));
    }

    /// Property: whatever the agent proposes, the staged card is in its hand.
    #[test]
    fn prop_agent_play_always_from_hand(
        (human, agent) in test_gens::deal(),
        proposed in test_gens::card_value(),
        seed in any::<u64>(),
    ) {
        let mut state = GameState::new(human, agent).unwrap();
        let first = state.human_hand().as_slice()[0];
        submit_human_play(&mut state, first).unwrap();

        let play = submit_agent_play(
            &mut state,
            AgentProposal::Card(proposed),
            &mut StdRng::seed_from_u64(seed),
        )
        .unwrap();

        prop_assert!(state.agent_hand().contains(play.card()));
        prop_assert_eq!(play.is_fallback(), !state.agent_hand().contains(proposed));
        prop_assert_eq!(state.staged_agent(), Some(play.card()));
    }

    /// Property: a card outside the human hand never changes the state.
    #[test]
    fn prop_foreign_human_card_is_rejected(
        (human, agent) in test_gens::deal(),
        card in test_gens::card_value(),
    ) {
        let mut state = GameState::new(human, agent).unwrap();
        let held = state.human_hand().contains(card);
        let result = submit_human_play(&mut state, card);

        prop_assert_eq!(result.is_ok(), held);
        prop_assert_eq!(state.human_hand().len(), HAND_SIZE);
        if !held {
            prop_assert_eq!(state.staged_human(), None);
        }
    }
}
