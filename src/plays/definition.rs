//! Play definitions - static probability tables.
//!
//! A `PlayDefinition` holds the immutable odds of one table-driven play:
//! the yardage range on a normal gain plus the chance of each bad outcome.
//! Whatever probability mass remains after penalty, sack and turnover is
//! the normal-gain mass.

use serde::{Deserialize, Serialize};

use super::call::PlayCall;
use crate::core::error::{GameError, Result};

/// Inclusive yardage range for a normal gain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YardRange {
    pub min: i32,
    pub max: i32,
}

impl YardRange {
    /// Create a new yardage range.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Whether `yards` falls inside the range.
    #[must_use]
    pub const fn contains(&self, yards: i32) -> bool {
        self.min <= yards && yards <= self.max
    }
}

/// Static play definition.
///
/// ## Example
///
/// ```
/// use football_blitz::plays::{PlayCall, PlayDefinition};
///
/// let slant = PlayDefinition::new(PlayCall::Slant, 5, 12)
///     .with_sack(0.10)
///     .with_turnover(0.10)
///     .with_penalty(0.10);
///
/// assert!(slant.validate().is_ok());
/// assert!((slant.gain_probability() - 0.70).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayDefinition {
    /// The play this entry describes.
    pub call: PlayCall,

    /// Yards gained on a normal gain.
    pub yards: YardRange,

    /// Chance of a sack.
    pub sack: f64,

    /// Chance of a turnover.
    pub turnover: f64,

    /// Chance of a penalty against the offense.
    pub penalty: f64,
}

impl PlayDefinition {
    /// Create a definition with no bad outcomes.
    #[must_use]
    pub fn new(call: PlayCall, min_yards: i32, max_yards: i32) -> Self {
        Self {
            call,
            yards: YardRange::new(min_yards, max_yards),
            sack: 0.0,
            turnover: 0.0,
            penalty: 0.0,
        }
    }

    /// Set the sack probability (builder pattern).
    #[must_use]
    pub fn with_sack(mut self, probability: f64) -> Self {
        self.sack = probability;
        self
    }

    /// Set the turnover probability (builder pattern).
    #[must_use]
    pub fn with_turnover(mut self, probability: f64) -> Self {
        self.turnover = probability;
        self
    }

    /// Set the penalty probability (builder pattern).
    #[must_use]
    pub fn with_penalty(mut self, probability: f64) -> Self {
        self.penalty = probability;
        self
    }

    /// Name of the play.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.call.name()
    }

    /// Probability mass left for a normal gain.
    #[must_use]
    pub fn gain_probability(&self) -> f64 {
        1.0 - (self.penalty + self.sack + self.turnover)
    }

    /// Check the table entry is usable.
    ///
    /// Special plays have no table entry, every probability must be finite
    /// and in `[0, 1]`, the bad outcomes together may not exceed 1, and the
    /// yardage range must not be inverted.
    pub fn validate(&self) -> Result<()> {
        if self.call.is_special() {
            return Err(GameError::config(format!(
                "{} is resolved by kicking rules and has no table entry",
                self.name()
            )));
        }

        for (label, p) in [
            ("sack", self.sack),
            ("turnover", self.turnover),
            ("penalty", self.penalty),
        ] {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(GameError::config(format!(
                    "{}: {label} probability {p} out of range",
                    self.name()
                )));
            }
        }

        let bad = self.penalty + self.sack + self.turnover;
        // Allow for float noise on tables that sum to exactly 1.
        if bad > 1.0 + 1e-9 {
            return Err(GameError::config(format!(
                "{}: bad-outcome probabilities sum to {bad}",
                self.name()
            )));
        }

        if self.yards.min > self.yards.max {
            return Err(GameError::config(format!(
                "{}: yardage range {}..={} is inverted",
                self.name(),
                self.yards.min,
                self.yards.max
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let def = PlayDefinition::new(PlayCall::DeepBall, 15, 40)
            .with_sack(0.15)
            .with_turnover(0.15)
            .with_penalty(0.10);

        assert_eq!(def.name(), "Deep Ball");
        assert_eq!(def.yards, YardRange::new(15, 40));
        assert!(def.yards.contains(15) && def.yards.contains(40));
        assert!(!def.yards.contains(41));
        assert!((def.gain_probability() - 0.60).abs() < 1e-9);
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        let def = PlayDefinition::new(PlayCall::Hook, 5, 15).with_sack(-0.1);
        assert!(matches!(def.validate(), Err(GameError::InvalidConfiguration(_))));

        let def = PlayDefinition::new(PlayCall::Hook, 5, 15).with_penalty(f64::NAN);
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_rejects_overfull_table() {
        let def = PlayDefinition::new(PlayCall::Hook, 5, 15)
            .with_sack(0.5)
            .with_turnover(0.4)
            .with_penalty(0.2);
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_accepts_table_summing_to_one() {
        let def = PlayDefinition::new(PlayCall::Hook, 5, 15)
            .with_sack(0.7)
            .with_turnover(0.2)
            .with_penalty(0.1);
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let def = PlayDefinition::new(PlayCall::Sweep, 10, 0);
        assert!(def.validate().is_err());
    }

    #[test]
    fn test_rejects_special_play_entry() {
        let def = PlayDefinition::new(PlayCall::Punt, 0, 0);
        assert!(def.validate().is_err());
    }
}
