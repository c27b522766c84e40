//! Session-level tests: pacing, listeners, determinism and kick odds.

use std::time::Duration;

use football_blitz::core::{
    DrivePhase, FieldGoalModel, FieldState, GameConfig, GameRng, GameState, ScriptedRng, Side,
};
use football_blitz::plays::PlayCall;
use football_blitz::rules::{FootballRules, RulesEngine};
use football_blitz::session::{EventRecorder, GameSession};

/// Play a whole game on autopilot: Short Run on every down, kick every
/// extra point, let the opponent drive out.
fn autopilot<R: football_blitz::core::PlayRandom>(session: &mut GameSession<R>, snaps: usize) {
    for _ in 0..snaps {
        match session.phase() {
            DrivePhase::AwaitingPlayerPlay => {
                session.select_play(PlayCall::ShortRun).unwrap();
            }
            DrivePhase::ExtraPointPending => {
                session.select_play(PlayCall::KickExtraPoint).unwrap();
            }
            DrivePhase::AwaitingOpponentPlay => {
                session.resolve_opponent_drive(1_000).unwrap();
            }
            DrivePhase::Ended => break,
        }
    }
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig::default().with_seed(2024);
    let mut a = GameSession::new(config.clone()).unwrap();
    let mut b = GameSession::new(config).unwrap();

    autopilot(&mut a, 200);
    autopilot(&mut b, 200);

    assert_eq!(a.state(), b.state());
    assert_eq!(a.rng_state(), b.rng_state());
    assert!(a.state().plays_run() > 0);
}

#[test]
fn test_resume_from_rng_state() {
    let config = GameConfig::default().with_seed(99);
    let mut original = GameSession::new(config.clone()).unwrap();
    autopilot(&mut original, 20);

    let rng = GameRng::from_state(&original.rng_state());
    let mut resumed =
        GameSession::from_state(config, original.state().clone(), rng).unwrap();

    autopilot(&mut original, 20);
    autopilot(&mut resumed, 20);

    assert_eq!(original.state(), resumed.state());
}

#[test]
fn test_team_never_affects_outcomes() {
    let mut bears = GameSession::new(GameConfig::default().with_team("Bears")).unwrap();
    let mut jets = GameSession::new(GameConfig::default().with_team("Jets")).unwrap();

    autopilot(&mut bears, 50);
    autopilot(&mut jets, 50);

    assert_eq!(bears.state().scores(), jets.state().scores());
    assert_eq!(bears.state().event_log(), jets.state().event_log());
}

#[test]
fn test_distance_field_goal_odds() {
    let config = GameConfig::default().with_field_goal(FieldGoalModel::Distance);
    let rules = FootballRules::new(config).unwrap();
    let mut rng = GameRng::new(7);
    let trials: u32 = 10_000;

    let mut made: u32 = 0;
    for _ in 0..trials {
        // 20 yards out
        let mut state = GameState::new("Bills").with_field(FieldState::at(80, 1, 10));
        let report = rules.apply_play(&mut state, PlayCall::FieldGoal, &mut rng).unwrap();
        if report.kick.is_some_and(|k| k.good) {
            made += 1;
        }
    }

    let rate = f64::from(made) / f64::from(trials);
    assert!((rate - 0.95).abs() < 0.05, "made {rate}");
}

#[test]
fn test_opponent_drive_paced_by_timer() {
    // Player turns it over, opponent gains twice then turns it back
    let rng = ScriptedRng::new()
        .with_units([0.12, 0.99, 0.99, 0.12])
        .with_indices([1, 1, 0])
        .with_ints([10, 5]);
    let mut session =
        GameSession::from_state(GameConfig::default(), GameState::new("Titans"), rng).unwrap();

    session.select_play(PlayCall::ShortRun).unwrap();
    assert_eq!(session.phase(), DrivePhase::AwaitingOpponentPlay);

    // First opponent snap lands exactly at the delay
    let first = session.advance(Duration::from_millis(800)).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].ball_after, 40);
    assert!(session.is_animating());
    assert!(session.opponent_timer().is_none());

    // 10 yards at 50 yd/s, then another full delay
    assert!(session.advance(Duration::from_millis(200)).unwrap().is_empty());
    assert_eq!(session.opponent_timer(), Some(Duration::from_millis(800)));
    assert_eq!(session.displayed_ball_position(), 40.0);

    // Remaining snaps in one long frame
    let rest = session.advance(Duration::from_secs(5)).unwrap();
    assert_eq!(rest.len(), 2);
    assert_eq!(rest[0].ball_after, 35);
    assert_eq!(session.state().possession(), Side::Player);
    assert_eq!(*session.state().field(), FieldState::centerfield());
    assert!(session.opponent_timer().is_none());
}

#[test]
fn test_pacing_never_changes_outcomes() {
    let config = GameConfig::default().with_seed(5);
    let mut paced = GameSession::new(config.clone()).unwrap();
    let mut headless = GameSession::new(config).unwrap();

    for _ in 0..30 {
        if paced.phase() == DrivePhase::AwaitingPlayerPlay {
            paced.select_play(PlayCall::Slant).unwrap();
            headless.select_play(PlayCall::Slant).unwrap();
        } else if paced.phase() == DrivePhase::ExtraPointPending {
            paced.select_play(PlayCall::TwoPointTry).unwrap();
            headless.select_play(PlayCall::TwoPointTry).unwrap();
        }

        // Paced: small frames until the player has the ball again
        while paced.phase() == DrivePhase::AwaitingOpponentPlay {
            paced.advance(Duration::from_millis(16)).unwrap();
        }
        while headless.phase() == DrivePhase::AwaitingOpponentPlay {
            headless.resolve_opponent_drive(1_000).unwrap();
        }
    }

    assert_eq!(paced.state(), headless.state());
}

#[test]
fn test_listeners_hear_possession_changes() {
    let recorder = EventRecorder::shared();
    let rng = ScriptedRng::new().with_units([0.12]);
    let mut session =
        GameSession::from_state(GameConfig::default(), GameState::new("Ravens"), rng).unwrap();
    session.add_listener(recorder.clone());

    session.select_play(PlayCall::ShortRun).unwrap();

    let heard = recorder.borrow();
    assert_eq!(heard.possession_changes, vec![Side::Opponent]);
    assert_eq!(heard.drive_resets, 1);
    assert_eq!(heard.lines, vec!["Turnover! Opponent takes over."]);
    assert_eq!(heard.events.len(), 3);
}

#[test]
fn test_event_log_is_append_only() {
    let mut session = GameSession::new(GameConfig::default().with_seed(11)).unwrap();
    session.select_play(PlayCall::Hook).unwrap();
    let early = session.snapshot();

    autopilot(&mut session, 10);
    let late = session.snapshot();

    assert!(late.event_log.len() >= early.event_log.len());
    for (i, line) in early.event_log.iter().enumerate() {
        assert_eq!(late.event_log.get(i), Some(line));
    }
}

#[test]
fn test_snapshot_scoreboard() {
    let session = GameSession::new(GameConfig::default().with_team("Chiefs")).unwrap();
    let board = session.snapshot().to_string();

    assert!(board.starts_with("Coaching: Chiefs\n"));
    assert!(board.ends_with("Down: 1 & 10"));
}
