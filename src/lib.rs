//! # football-blitz
//!
//! A single-player football possession game engine: the player calls plays,
//! a table-driven resolver draws each outcome, and an autoplayed opponent
//! answers between possessions.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never draws anything. Shells
//!    read `GameSnapshot`s and drive time with `GameSession::advance`.
//!
//! 2. **Deterministic**: All randomness flows through `PlayRandom`. The same
//!    seed and the same play calls replay the same game.
//!
//! 3. **Single Owner**: `GameSession` owns the state and serializes every
//!    mutation, so no two plays ever resolve at once.
//!
//! ## Architecture
//!
//! - **Play Resolver** (`plays`): probability bands per play, drawn in the
//!   fixed order penalty, sack, turnover, gain.
//!
//! - **Drive State Machine** (`rules`): downs, first downs, touchdowns,
//!   conversions, punts, field goals and possession changes.
//!
//! - **Pacing** (`session`): the opponent delay and ball animation are
//!   cosmetic and never change outcomes.
//!
//! ## Modules
//!
//! - `core`: Sides, field position, state, events, RNG, configuration
//! - `plays`: Play calls, probability tables, outcome resolution
//! - `rules`: RulesEngine trait and the football drive rules
//! - `session`: Game session, pacing and listeners
//! - `teams`: Selectable team names

pub mod core;
pub mod plays;
pub mod rules;
pub mod session;
pub mod teams;

// Re-export commonly used types
pub use crate::core::{
    DrivePhase, FieldGoalModel, FieldState, GameConfig, GameError, GameEvent, GameRng,
    GameRngState, GameSnapshot, GameState, Mode, OpponentRules, PacingConfig, PlayRandom,
    PlayReport, Result, ScriptedRng, Side, SideMap,
};

pub use crate::plays::{
    KickAttempt, OutcomeCategory, PlayCall, PlayDefinition, PlayOutcome, Playbook, YardRange,
};

pub use crate::rules::{FootballRules, RulesEngine};

pub use crate::session::{EventRecorder, GameListener, GameSession};

pub use crate::teams::{find_team, TEAM_NAMES};
