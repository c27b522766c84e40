//! Game events and per-play reports.
//!
//! Every resolved snap produces a `PlayReport`: the raw outcome, the ball
//! movement a shell animates, the structured events listeners react to,
//! the narrative lines appended to the log, and a post-play snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::field::FieldState;
use super::side::Side;
use super::state::GameSnapshot;
use crate::plays::{KickAttempt, OutcomeCategory, PlayCall, PlayOutcome};

/// Something that happened during a snap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A table-driven play was resolved.
    PlayResolved {
        side: Side,
        call: PlayCall,
        category: OutcomeCategory,
        yards: i32,
    },
    FirstDown { side: Side },
    Touchdown { side: Side },
    TurnoverOnDowns { side: Side },
    Punt { side: Side },
    /// Field goal, extra point or two-point attempt.
    Kick {
        side: Side,
        call: PlayCall,
        good: bool,
        points: u32,
    },
    PossessionChanged { to: Side },
    /// A new drive started from `field`.
    DriveReset { field: FieldState },
}

impl GameEvent {
    /// Whether this event moved points onto the scoreboard.
    #[must_use]
    pub fn is_score(&self) -> bool {
        match self {
            GameEvent::Touchdown { .. } => true,
            GameEvent::Kick { points, .. } => *points > 0,
            _ => false,
        }
    }
}

/// Events from one snap. Most snaps produce at most four.
pub type EventList = SmallVec<[GameEvent; 4]>;

/// Everything a shell needs after one snap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayReport {
    /// Side that ran the play.
    pub side: Side,
    pub call: PlayCall,
    /// Table outcome, for table-driven plays.
    pub outcome: Option<PlayOutcome>,
    /// Kick result, for field goals and conversions.
    pub kick: Option<KickAttempt>,
    /// Ball position before the snap, for animation.
    pub ball_before: i32,
    /// Authoritative ball position after the snap.
    pub ball_after: i32,
    pub events: EventList,
    /// Lines appended to the play-by-play log by this snap.
    pub narratives: Vec<String>,
    /// State after the snap.
    pub snapshot: GameSnapshot,
}

impl PlayReport {
    /// Whether possession changed hands during this snap.
    #[must_use]
    pub fn possession_changed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::PossessionChanged { .. }))
    }

    /// Whether a touchdown was scored on this snap.
    #[must_use]
    pub fn is_touchdown(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::Touchdown { .. }))
    }

    /// Outcome category of a table-driven play.
    #[must_use]
    pub fn category(&self) -> Option<OutcomeCategory> {
        self.outcome.as_ref().map(|o| o.category)
    }
}
