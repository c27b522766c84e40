//! Randomized invariants over whole games and single snaps.

use football_blitz::core::{
    FieldState, GameConfig, GameRng, GameState, Mode, OpponentRules, Side, GOAL_LINE, MAX_DOWN,
    OWN_GOAL_LINE,
};
use football_blitz::plays::{resolve, OutcomeCategory, PlayCall, Playbook};
use football_blitz::rules::{FootballRules, RulesEngine};
use football_blitz::session::GameSession;

use proptest::prelude::*;

fn assert_field_sane(field: &FieldState) {
    assert!((OWN_GOAL_LINE..=GOAL_LINE).contains(&field.ball_position()), "{field:?}");
    assert!((1..=MAX_DOWN).contains(&field.down()), "{field:?}");
    assert!(field.yards_to_first() >= 1, "{field:?}");
}

fn opponent_rules() -> impl Strategy<Value = OpponentRules> {
    prop_oneof![Just(OpponentRules::Unbounded), Just(OpponentRules::Symmetric)]
}

proptest! {
    #[test]
    fn ball_stays_on_the_field(
        seed in any::<u64>(),
        opponent in opponent_rules(),
        picks in prop::collection::vec(0usize..9, 1..80),
    ) {
        let config = GameConfig::default().with_seed(seed).with_opponent(opponent);
        let mut session = GameSession::new(config).unwrap();
        let mut last_scores = session.state().scores();

        for pick in picks {
            let legal = session.legal_plays();
            prop_assert!(!legal.is_empty());
            let call = legal[pick % legal.len()];

            let report = session.select_play(call).unwrap();
            assert_field_sane(&report.snapshot.field);

            for report in session.resolve_opponent_drive(500).unwrap() {
                assert_field_sane(&report.snapshot.field);
            }

            let scores = session.state().scores();
            prop_assert!(scores[Side::Player] >= last_scores[Side::Player]);
            prop_assert!(scores[Side::Opponent] >= last_scores[Side::Opponent]);
            last_scores = scores;
        }
    }

    #[test]
    fn outcome_magnitudes_stay_in_range(
        seed in any::<u64>(),
        play in 0usize..7,
        side in prop_oneof![Just(Side::Player), Just(Side::Opponent)],
    ) {
        let playbook = Playbook::standard().unwrap();
        let def = playbook.get(PlayCall::BASE[play]).unwrap();
        let mut rng = GameRng::new(seed);

        for _ in 0..50 {
            let outcome = resolve(def, side, &mut rng);
            match outcome.category {
                OutcomeCategory::Penalty => prop_assert!((-10..=-5).contains(&outcome.yards)),
                OutcomeCategory::Sack => prop_assert!((-12..=-5).contains(&outcome.yards)),
                OutcomeCategory::Turnover => prop_assert_eq!(outcome.yards, 0),
                OutcomeCategory::NormalGain => prop_assert!(def.yards.contains(outcome.yards)),
            }
        }
    }

    #[test]
    fn touchdown_iff_gain_reaches_goal(
        ball in 0i32..100,
        down in 1u8..=4,
        to_go in 1i32..=20,
        seed in any::<u64>(),
    ) {
        let rules = FootballRules::new(GameConfig::default()).unwrap();
        let mut state = GameState::new("Bills").with_field(FieldState::at(ball, down, to_go));
        let mut rng = GameRng::new(seed);

        let report = rules.apply_play(&mut state, PlayCall::Slant, &mut rng).unwrap();

        if let Some(outcome) = &report.outcome {
            let scored = outcome.category == OutcomeCategory::NormalGain
                && ball + outcome.yards >= GOAL_LINE;
            prop_assert_eq!(report.is_touchdown(), scored);
            prop_assert_eq!(state.mode() == Mode::ExtraPoint, scored);
        }
    }
}
