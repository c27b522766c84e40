//! Rules engine trait for the drive state machine.
//!
//! A rules engine decides:
//! - What plays are legal
//! - How a resolved play moves the game state
//! - What the scripted opponent runs when it has the ball

use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::event::PlayReport;
use crate::core::rng::PlayRandom;
use crate::core::state::{GameState, LegalPlays};
use crate::plays::PlayCall;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_plays`: Return empty when the player can't act
/// - `apply_play`: Reject anything outside `legal_plays` without touching state
/// - `play_opponent`: Return `Ok(None)` when the opponent doesn't have the ball
/// - All randomness comes from the `rng` argument so games replay exactly
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Plays the player may call in `state`.
    fn legal_plays(&self, state: &GameState) -> LegalPlays;

    /// Resolve a player play and apply the transition.
    fn apply_play(
        &self,
        state: &mut GameState,
        call: PlayCall,
        rng: &mut dyn PlayRandom,
    ) -> Result<PlayReport>;

    /// Pick and resolve one opponent snap.
    fn play_opponent(
        &self,
        state: &mut GameState,
        rng: &mut dyn PlayRandom,
    ) -> Result<Option<PlayReport>>;

    // === Convenience Methods ===

    /// Check whether the player may call `call` right now.
    fn is_legal(&self, state: &GameState, call: PlayCall) -> bool {
        self.legal_plays(state).contains(&call)
    }
}
