//! Engine error types.

use thiserror::Error;

/// Errors surfaced by the engine to its host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The selected play is not in the current legal set.
    ///
    /// The game state and event log are left untouched.
    #[error("illegal play: {play} ({reason})")]
    IllegalPlay { play: String, reason: String },

    /// A playbook entry or configuration value is malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The host ended the session.
    #[error("session has ended")]
    SessionEnded,
}

impl GameError {
    pub(crate) fn illegal(play: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::IllegalPlay {
            play: play.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Whether this is an illegal-play rejection.
    #[must_use]
    pub fn is_illegal_play(&self) -> bool {
        matches!(self, Self::IllegalPlay { .. })
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
