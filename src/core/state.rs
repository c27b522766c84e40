//! Game state and read-only snapshots.
//!
//! ## GameState
//!
//! The single authoritative record of a game:
//! - Team name (cosmetic)
//! - Scores per side
//! - Possession and play mode
//! - Field position and down-and-distance
//! - Append-only play-by-play log
//!
//! ## GameSnapshot
//!
//! What a presentation shell renders: the state plus the derived drive
//! phase and the currently legal plays.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::field::FieldState;
use super::side::{Side, SideMap};
use crate::plays::PlayCall;

/// Legal plays for the current situation. Never more than nine.
pub type LegalPlays = SmallVec<[PlayCall; 9]>;

/// Which kind of snap is next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Regular downs.
    #[default]
    Normal,
    /// Post-touchdown conversion decision.
    ExtraPoint,
}

/// Externally visible phase of the drive state machine.
///
/// Play resolution happens synchronously inside a single call, so the
/// resolving phases never show up here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrivePhase {
    AwaitingPlayerPlay,
    ExtraPointPending,
    AwaitingOpponentPlay,
    Ended,
}

/// Complete game state.
///
/// Uses an `im` vector for the event log so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    team: String,
    scores: SideMap<u32>,
    possession: Side,
    mode: Mode,
    field: FieldState,
    event_log: Vector<String>,
    plays_run: u32,
}

impl GameState {
    /// Opening state: Player ball at centerfield, 1st & 10, no score.
    #[must_use]
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            scores: SideMap::default(),
            possession: Side::Player,
            mode: Mode::Normal,
            field: FieldState::centerfield(),
            event_log: Vector::new(),
            plays_run: 0,
        }
    }

    /// Place the ball (builder pattern, for scenarios and replays).
    #[must_use]
    pub fn with_field(mut self, field: FieldState) -> Self {
        self.field = field;
        self
    }

    /// Hand the ball to `side` (builder pattern).
    #[must_use]
    pub fn with_possession(mut self, side: Side) -> Self {
        self.possession = side;
        self
    }

    /// Set the play mode (builder pattern).
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set both scores (builder pattern).
    #[must_use]
    pub fn with_scores(mut self, player: u32, opponent: u32) -> Self {
        self.scores = SideMap::new(player, opponent);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Score of one side.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    #[must_use]
    pub fn scores(&self) -> SideMap<u32> {
        self.scores
    }

    #[must_use]
    pub fn possession(&self) -> Side {
        self.possession
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn field(&self) -> &FieldState {
        &self.field
    }

    /// Play-by-play lines, oldest first.
    #[must_use]
    pub fn event_log(&self) -> &Vector<String> {
        &self.event_log
    }

    /// Number of snaps resolved so far, both sides.
    #[must_use]
    pub fn plays_run(&self) -> u32 {
        self.plays_run
    }

    /// Phase derived from mode and possession.
    #[must_use]
    pub fn phase(&self) -> DrivePhase {
        match (self.mode, self.possession) {
            (Mode::ExtraPoint, _) => DrivePhase::ExtraPointPending,
            (Mode::Normal, Side::Player) => DrivePhase::AwaitingPlayerPlay,
            (Mode::Normal, Side::Opponent) => DrivePhase::AwaitingOpponentPlay,
        }
    }

    /// Build a read-only snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self, legal_plays: LegalPlays) -> GameSnapshot {
        GameSnapshot {
            team: self.team.clone(),
            scores: self.scores,
            possession: self.possession,
            mode: self.mode,
            field: self.field,
            event_log: self.event_log.clone(),
            phase: self.phase(),
            legal_plays,
        }
    }

    // === Mutation (rules only) ===

    pub(crate) fn field_mut(&mut self) -> &mut FieldState {
        &mut self.field
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn add_score(&mut self, side: Side, points: u32) {
        self.scores[side] += points;
    }

    pub(crate) fn log(&mut self, line: impl Into<String>) {
        self.event_log.push_back(line.into());
    }

    pub(crate) fn count_play(&mut self) {
        self.plays_run += 1;
    }

    /// Give the ball to `side` and start a fresh drive at centerfield.
    pub(crate) fn change_possession(&mut self, side: Side) {
        self.possession = side;
        self.field = FieldState::centerfield();
    }
}

/// Read-only view of a game for the presentation shell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub team: String,
    pub scores: SideMap<u32>,
    pub possession: Side,
    pub mode: Mode,
    pub field: FieldState,
    pub event_log: Vector<String>,
    pub phase: DrivePhase,
    pub legal_plays: LegalPlays,
}

impl std::fmt::Display for GameSnapshot {
    /// Scoreboard block shown beside the field.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Coaching: {}", self.team)?;
        writeln!(f, "Possession: {}", self.possession)?;
        writeln!(f, "Player Score: {}", self.scores[Side::Player])?;
        writeln!(f, "Opponent Score: {}", self.scores[Side::Opponent])?;
        write!(f, "Down: {}", self.field)
    }
}
