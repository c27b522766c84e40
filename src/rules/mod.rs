//! Drive/game state machine.
//!
//! `RulesEngine` is the seam between the session and the rules;
//! `FootballRules` implements the standard drive rules:
//! - Legal play sets per mode and down
//! - Transitions for every outcome and special play
//! - Opponent play selection
//!
//! The session calls into the engine but never interprets football
//! concepts directly.

pub mod engine;
pub mod football;

pub use engine::RulesEngine;
pub use football::{FootballRules, FIELD_GOAL_RANGE};
