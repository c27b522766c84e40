//! Field position and down-and-distance.
//!
//! Ball position is stored on a fixed 0-100 scale: 0 is the Player's own
//! goal line, 100 is the Opponent's. Each side advances toward the other's
//! goal, so movement is always expressed as side-relative *progress*.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Player's own goal line.
pub const OWN_GOAL_LINE: i32 = 0;
/// Opponent's goal line.
pub const GOAL_LINE: i32 = 100;
/// Spot for every new drive.
pub const CENTERFIELD: i32 = 50;
/// Yards needed for a first down.
pub const FIRST_DOWN_DISTANCE: i32 = 10;
/// Last down before possession is surrendered.
pub const MAX_DOWN: u8 = 4;

/// Ball position plus down-and-distance for the current drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldState {
    ball_position: i32,
    down: u8,
    yards_to_first: i32,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::centerfield()
    }
}

impl FieldState {
    /// Fresh drive: ball at 50, 1st & 10.
    #[must_use]
    pub const fn centerfield() -> Self {
        Self {
            ball_position: CENTERFIELD,
            down: 1,
            yards_to_first: FIRST_DOWN_DISTANCE,
        }
    }

    /// Build an arbitrary field state, clamping every value into range.
    ///
    /// ```
    /// use football_blitz::core::FieldState;
    ///
    /// let field = FieldState::at(120, 9, 0);
    /// assert_eq!(field.ball_position(), 100);
    /// assert_eq!(field.down(), 4);
    /// assert_eq!(field.yards_to_first(), 1);
    /// ```
    #[must_use]
    pub fn at(ball_position: i32, down: u8, yards_to_first: i32) -> Self {
        Self {
            ball_position: ball_position.clamp(OWN_GOAL_LINE, GOAL_LINE),
            down: down.clamp(1, MAX_DOWN),
            yards_to_first: yards_to_first.max(1),
        }
    }

    /// Absolute ball position (0 = Player's goal, 100 = Opponent's goal).
    #[must_use]
    pub const fn ball_position(&self) -> i32 {
        self.ball_position
    }

    /// Current down (1-4).
    #[must_use]
    pub const fn down(&self) -> u8 {
        self.down
    }

    /// Yards still needed for a first down.
    #[must_use]
    pub const fn yards_to_first(&self) -> i32 {
        self.yards_to_first
    }

    /// Whether this is the last down.
    #[must_use]
    pub const fn is_final_down(&self) -> bool {
        self.down >= MAX_DOWN
    }

    /// Yards `side` has advanced from its own goal line.
    #[must_use]
    pub const fn progress(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.ball_position,
            Side::Opponent => GOAL_LINE - self.ball_position,
        }
    }

    /// Yards between `side` and the goal it attacks.
    #[must_use]
    pub const fn distance_to_goal(&self, side: Side) -> i32 {
        GOAL_LINE - self.progress(side)
    }

    /// Move the ball `yards` in `side`'s direction of attack, clamped to the
    /// field. Returns the yards actually moved.
    pub fn move_ball(&mut self, side: Side, yards: i32) -> i32 {
        let before = self.progress(side);
        let after = (before + yards).clamp(OWN_GOAL_LINE, GOAL_LINE);
        self.set_progress(side, after);
        after - before
    }

    /// Reset down-and-distance after a first down.
    pub fn first_down(&mut self) {
        self.down = 1;
        self.yards_to_first = FIRST_DOWN_DISTANCE;
    }

    /// Consume a down after gaining `gain` yards short of the line to gain.
    pub fn next_down(&mut self, gain: i32) {
        self.down = (self.down + 1).min(MAX_DOWN);
        self.yards_to_first = (self.yards_to_first - gain).max(1);
    }

    /// Push the line to gain back after lost yardage.
    pub fn add_distance(&mut self, yards_lost: i32) {
        self.yards_to_first += yards_lost.max(0);
    }

    fn set_progress(&mut self, side: Side, progress: i32) {
        self.ball_position = match side {
            Side::Player => progress,
            Side::Opponent => GOAL_LINE - progress,
        };
    }
}

impl std::fmt::Display for FieldState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} & {}", self.down, self.yards_to_first)
    }
}
