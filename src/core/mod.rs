//! Core engine types: sides, field, state, events, RNG, configuration.
//!
//! These are the building blocks shared by the Play Resolver (`plays`)
//! and the drive state machine (`rules`).

pub mod side;
pub mod field;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;
pub mod state;

pub use side::{Side, SideMap};
pub use field::{FieldState, CENTERFIELD, FIRST_DOWN_DISTANCE, GOAL_LINE, MAX_DOWN, OWN_GOAL_LINE};
pub use rng::{GameRng, GameRngState, PlayRandom, ScriptedRng};
pub use config::{FieldGoalModel, GameConfig, OpponentRules, PacingConfig};
pub use error::{GameError, Result};
pub use event::{EventList, GameEvent, PlayReport};
pub use state::{DrivePhase, GameSnapshot, GameState, LegalPlays, Mode};
