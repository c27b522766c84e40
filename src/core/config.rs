//! Game configuration.
//!
//! `GameConfig` collects everything a host chooses before kickoff: the
//! cosmetic team name, the RNG seed, which rule variants apply, and the
//! pacing of the opponent's autoplay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::field::{GOAL_LINE, OWN_GOAL_LINE};
use crate::plays::resolver::FLAT_FIELD_GOAL_PROBABILITY;

/// How a field goal attempt from normal play is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldGoalModel {
    /// Fixed success chance regardless of distance.
    Flat(f64),
    /// Distance buckets, the same curve used for extra points.
    Distance,
}

impl Default for FieldGoalModel {
    fn default() -> Self {
        FieldGoalModel::Flat(FLAT_FIELD_GOAL_PROBABILITY)
    }
}

/// Rules applied to the opponent's drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpponentRules {
    /// Unbounded yardage plays with no downs and no scoring, ended only by
    /// a turnover.
    #[default]
    Unbounded,
    /// Mirror of the player's rules: downs, first downs, touchdowns with an
    /// automatic extra-point kick, turnover on downs.
    Symmetric,
}

/// Timing of the opponent autoplay and ball animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Delay before each opponent snap.
    #[serde(with = "millis")]
    pub opponent_delay: Duration,

    /// Animated ball speed in yards per second.
    pub ball_speed: f32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            opponent_delay: Duration::from_millis(800),
            // 0.5 yards every 10ms
            ball_speed: 50.0,
        }
    }
}

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Team the player coaches. Display only.
    pub team: String,

    /// Random seed. Same seed and same play calls replay the same game.
    pub seed: u64,

    pub field_goal: FieldGoalModel,

    pub opponent: OpponentRules,

    pub pacing: PacingConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            team: crate::teams::TEAM_NAMES[0].to_string(),
            seed: 42,
            field_goal: FieldGoalModel::default(),
            opponent: OpponentRules::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl GameConfig {
    /// Create a new config with custom team.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom field goal model.
    pub fn with_field_goal(mut self, model: FieldGoalModel) -> Self {
        self.field_goal = model;
        self
    }

    /// Create a new config with custom opponent rules.
    pub fn with_opponent(mut self, rules: OpponentRules) -> Self {
        self.opponent = rules;
        self
    }

    /// Create a new config with custom pacing.
    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Check every value before a game starts.
    pub fn validate(&self) -> Result<()> {
        if self.team.trim().is_empty() {
            return Err(GameError::config("team name is empty"));
        }

        if let FieldGoalModel::Flat(p) = self.field_goal {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(GameError::config(format!("field goal probability {p} out of range")));
            }
        }

        if self.pacing.opponent_delay.is_zero() {
            return Err(GameError::config("opponent delay must be positive"));
        }

        let speed = self.pacing.ball_speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(GameError::config(format!("ball speed {speed} must be positive")));
        }

        // The longest slide, goal line to goal line, must fit in a Duration.
        let longest = f64::from(GOAL_LINE - OWN_GOAL_LINE) / f64::from(speed);
        if Duration::try_from_secs_f64(longest).is_err() {
            return Err(GameError::config(format!("ball speed {speed} is too slow")));
        }

        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis())
            .map_err(|_| S::Error::custom(format!("{value:?} does not fit in u64 milliseconds")))?;
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
