//! Single-owner game session.
//!
//! `GameSession` is the only API a presentation shell needs. It owns the
//! game state, the rules, the RNG and the pacing, and it serializes every
//! mutation through `&mut self`, so exactly one play resolves at a time.
//!
//! ## Flow
//!
//! 1. The shell calls [`GameSession::select_play`]; the play resolves
//!    synchronously and the ball animation starts.
//! 2. The shell calls [`GameSession::advance`] with elapsed time. When the
//!    animation finishes with the opponent on offense, the opponent timer is
//!    armed; each expiry resolves one opponent snap.
//! 3. [`GameSession::end`] cancels the timer and animation so nothing fires
//!    against a finished game.

use std::time::Duration;

use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::event::{GameEvent, PlayReport};
use crate::core::rng::{GameRng, GameRngState, PlayRandom};
use crate::core::side::Side;
use crate::core::state::{DrivePhase, GameSnapshot, GameState, LegalPlays, Mode};
use crate::plays::PlayCall;
use crate::rules::{FootballRules, RulesEngine};

use super::listener::GameListener;
use super::pacing::{Pacer, PacerTick};

/// A running game.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use football_blitz::core::{GameConfig, Side};
/// use football_blitz::plays::PlayCall;
/// use football_blitz::session::GameSession;
///
/// let mut session = GameSession::new(GameConfig::default().with_team("Bears")).unwrap();
/// let report = session.select_play(PlayCall::ShortRun).unwrap();
/// assert_eq!(report.side, Side::Player);
///
/// // Punting is only legal on 4th down
/// assert!(session.select_play(PlayCall::Punt).is_err());
///
/// // Let the opponent run if it has the ball
/// session.advance(Duration::from_secs(2)).unwrap();
/// ```
pub struct GameSession<R: PlayRandom = GameRng> {
    rules: FootballRules,
    state: GameState,
    rng: R,
    pacer: Pacer,
    listeners: Vec<Box<dyn GameListener>>,
    ended: bool,
}

impl GameSession<GameRng> {
    /// Start a game seeded from the config.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Current RNG position, for replays.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<R: PlayRandom> GameSession<R> {
    /// Start a game drawing from `rng`.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        let state = GameState::new(config.team.clone());
        Self::from_state(config, state, rng)
    }

    /// Resume from an arbitrary state.
    ///
    /// If the opponent has the ball the timer is armed right away. A pending
    /// conversion must belong to the player, since nobody else could take it.
    pub fn from_state(config: GameConfig, state: GameState, rng: R) -> Result<Self> {
        if state.mode() == Mode::ExtraPoint && state.possession() != Side::Player {
            return Err(GameError::config(
                "extra point pending with the opponent in possession",
            ));
        }

        let pacing = config.pacing;
        let rules = FootballRules::new(config)?;
        let pacer = Pacer::new(pacing, state.field().ball_position());

        let mut session = Self {
            rules,
            state,
            rng,
            pacer,
            listeners: Vec::new(),
            ended: false,
        };
        if session.opponent_to_move() {
            session.pacer.arm_opponent_timer();
        }

        log::info!("kickoff: coaching the {}", session.state.team());
        Ok(session)
    }

    /// Register a listener.
    pub fn add_listener(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Queries ===

    /// Authoritative game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The rules in force.
    #[must_use]
    pub fn rules(&self) -> &FootballRules {
        &self.rules
    }

    /// Current phase of the drive state machine.
    #[must_use]
    pub fn phase(&self) -> DrivePhase {
        if self.ended {
            DrivePhase::Ended
        } else {
            self.state.phase()
        }
    }

    /// Plays the player may call now.
    #[must_use]
    pub fn legal_plays(&self) -> LegalPlays {
        if self.ended {
            return LegalPlays::new();
        }
        self.rules.legal_plays(&self.state)
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = self.state.snapshot(self.legal_plays());
        snapshot.phase = self.phase();
        snapshot
    }

    /// Ball position to draw, interpolated while animating.
    #[must_use]
    pub fn displayed_ball_position(&self) -> f32 {
        self.pacer.displayed_position()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pacer.is_animating()
    }

    /// Time until the next opponent snap, if one is scheduled.
    #[must_use]
    pub fn opponent_timer(&self) -> Option<Duration> {
        self.pacer.opponent_timer()
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    // === Commands ===

    /// Call a play for the player.
    ///
    /// Illegal plays are rejected without touching the state or log.
    pub fn select_play(&mut self, call: PlayCall) -> Result<PlayReport> {
        if self.ended {
            return Err(GameError::SessionEnded);
        }

        let report = self.rules.apply_play(&mut self.state, call, &mut self.rng)?;
        self.pacer.animate(report.ball_before, report.ball_after);
        self.publish(&report);
        Ok(report)
    }

    /// Call a play by its display name, e.g. `"Deep Ball"`.
    pub fn select_play_named(&mut self, name: &str) -> Result<PlayReport> {
        if self.ended {
            return Err(GameError::SessionEnded);
        }
        let call: PlayCall = name.parse()?;
        self.select_play(call)
    }

    /// Let `elapsed` host time pass.
    ///
    /// Returns the opponent snaps resolved along the way, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Result<Vec<PlayReport>> {
        let mut reports = Vec::new();
        if self.ended {
            return Ok(reports);
        }

        let mut remaining = elapsed;
        loop {
            match self.pacer.advance(remaining) {
                PacerTick::AnimationFinished { left } => {
                    remaining = left;
                    if self.opponent_to_move() {
                        self.pacer.arm_opponent_timer();
                    }
                }
                PacerTick::OpponentDue { left } => {
                    remaining = left;
                    if let Some(report) = self.run_opponent_snap()? {
                        reports.push(report);
                    }
                }
                PacerTick::Waiting | PacerTick::Idle => break,
            }
        }

        Ok(reports)
    }

    /// Resolve opponent snaps immediately, skipping the pacing, until the
    /// player gets the ball back or `max_plays` snaps have run.
    pub fn resolve_opponent_drive(&mut self, max_plays: usize) -> Result<Vec<PlayReport>> {
        if self.ended {
            return Err(GameError::SessionEnded);
        }

        self.pacer.cancel(self.state.field().ball_position());
        let mut reports = Vec::new();

        while reports.len() < max_plays && self.opponent_to_move() {
            match self.run_opponent_snap()? {
                Some(report) => reports.push(report),
                None => break,
            }
        }

        self.pacer.cancel(self.state.field().ball_position());
        if self.opponent_to_move() {
            self.pacer.arm_opponent_timer();
        }
        Ok(reports)
    }

    /// End the session, cancelling the opponent timer and any animation.
    pub fn end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;
        self.pacer.cancel(self.state.field().ball_position());
        log::info!(
            "session ended {}-{} after {} plays",
            self.state.score(Side::Player),
            self.state.score(Side::Opponent),
            self.state.plays_run()
        );
    }

    /// Restart every field for a new game, keeping rules, RNG and listeners.
    pub fn new_game(&mut self, team: impl Into<String>) -> Result<()> {
        let team = team.into();
        if team.trim().is_empty() {
            return Err(GameError::config("team name is empty"));
        }

        self.state = GameState::new(team);
        self.pacer.cancel(self.state.field().ball_position());
        self.ended = false;
        log::info!("new game: coaching the {}", self.state.team());
        Ok(())
    }

    // === Internals ===

    fn opponent_to_move(&self) -> bool {
        !self.ended
            && self.state.possession() == Side::Opponent
            && self.state.mode() == Mode::Normal
    }

    fn run_opponent_snap(&mut self) -> Result<Option<PlayReport>> {
        let report = self.rules.play_opponent(&mut self.state, &mut self.rng)?;
        if let Some(report) = &report {
            self.pacer.animate(report.ball_before, report.ball_after);
            self.publish(report);
        }
        Ok(report)
    }

    /// Notify listeners about one report.
    fn publish(&mut self, report: &PlayReport) {
        for listener in &mut self.listeners {
            for line in &report.narratives {
                listener.on_narrative(line);
            }
            for event in &report.events {
                listener.on_event(event);
                match event {
                    GameEvent::PossessionChanged { to } => listener.on_possession_change(*to),
                    GameEvent::DriveReset { field } => listener.on_drive_reset(field),
                    _ => {}
                }
            }
        }
    }
}
