//! Session layer: single-owner game loop, pacing and listeners.

pub mod game;
pub mod listener;
pub mod pacing;

pub use game::GameSession;
pub use listener::{EventRecorder, GameListener};
pub use pacing::{BallAnimation, Pacer, PacerTick};
