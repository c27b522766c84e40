//! Play resolution: table-driven outcomes and kicking attempts.
//!
//! Every function here is pure apart from the random draws it takes from
//! the injected [`PlayRandom`], so a scripted source reproduces any play
//! exactly.
//!
//! ## Outcome draw
//!
//! One unit draw `r` picks the category by cumulative probability, in the
//! order penalty, sack, turnover, normal gain. A second integer draw picks
//! the yardage (none for a turnover).

use serde::{Deserialize, Serialize};

use super::call::PlayCall;
use super::definition::{PlayDefinition, YardRange};
use crate::core::rng::PlayRandom;
use crate::core::side::Side;

/// Yards lost on a penalty.
pub const PENALTY_YARDS: YardRange = YardRange::new(5, 10);
/// Yards lost on a sack.
pub const SACK_YARDS: YardRange = YardRange::new(5, 12);
/// Kick distance used for every extra point.
pub const EXTRA_POINT_DISTANCE: i32 = 33;
/// Success chance of a two-point conversion.
pub const TWO_POINT_PROBABILITY: f64 = 0.47;
/// Success chance of a field goal under the flat kicking model.
pub const FLAT_FIELD_GOAL_PROBABILITY: f64 = 0.70;

/// Outcome class of a table-driven play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeCategory {
    NormalGain,
    Penalty,
    Sack,
    Turnover,
}

/// Result of resolving a table-driven play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub category: OutcomeCategory,
    /// Signed yardage from the offense's point of view; losses are negative.
    pub yards: i32,
    pub narrative: String,
}

/// Resolve a table-driven play for `offense`.
///
/// ```
/// use football_blitz::core::{ScriptedRng, Side};
/// use football_blitz::plays::{resolve, OutcomeCategory, PlayCall, Playbook};
///
/// let playbook = Playbook::standard().unwrap();
/// let def = playbook.get(PlayCall::Slant).unwrap();
///
/// // 0.15 lands in the sack band (penalty 0.10, sack 0.10)
/// let mut rng = ScriptedRng::new().with_units([0.15]).with_ints([7]);
/// let outcome = resolve(def, Side::Player, &mut rng);
///
/// assert_eq!(outcome.category, OutcomeCategory::Sack);
/// assert_eq!(outcome.yards, -7);
/// assert_eq!(outcome.narrative, "Player sacked for 7 yards.");
/// ```
pub fn resolve<R: PlayRandom + ?Sized>(def: &PlayDefinition, offense: Side, rng: &mut R) -> PlayOutcome {
    let r = rng.next_unit();

    let penalty_band = def.penalty;
    let sack_band = penalty_band + def.sack;
    let turnover_band = sack_band + def.turnover;

    if r < penalty_band {
        let lost = rng.range_inclusive(PENALTY_YARDS.min, PENALTY_YARDS.max);
        PlayOutcome {
            category: OutcomeCategory::Penalty,
            yards: -lost,
            narrative: format!("{offense} penalized for {lost} yards."),
        }
    } else if r < sack_band {
        let lost = rng.range_inclusive(SACK_YARDS.min, SACK_YARDS.max);
        PlayOutcome {
            category: OutcomeCategory::Sack,
            yards: -lost,
            narrative: format!("{offense} sacked for {lost} yards."),
        }
    } else if r < turnover_band {
        PlayOutcome {
            category: OutcomeCategory::Turnover,
            yards: 0,
            narrative: format!("Turnover! {} takes over.", offense.other()),
        }
    } else {
        let gain = rng.range_inclusive(def.yards.min, def.yards.max);
        PlayOutcome {
            category: OutcomeCategory::NormalGain,
            yards: gain,
            narrative: format!("{offense} gains {gain} yards with {}.", def.name()),
        }
    }
}

/// Field goal success chance for a kick of `distance` yards.
#[must_use]
pub fn field_goal_probability(distance: i32) -> f64 {
    match distance {
        d if d <= 25 => 0.95,
        d if d <= 35 => 0.85,
        d if d <= 45 => 0.70,
        d if d <= 55 => 0.55,
        _ => 0.35,
    }
}

/// Result of a kick or conversion attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KickAttempt {
    pub call: PlayCall,
    pub probability: f64,
    pub good: bool,
    pub narrative: String,
}

impl KickAttempt {
    /// Points the attempt earns.
    #[must_use]
    pub fn points(&self) -> u32 {
        if !self.good {
            return 0;
        }
        match self.call {
            PlayCall::FieldGoal => 3,
            PlayCall::KickExtraPoint => 1,
            PlayCall::TwoPointTry => 2,
            _ => 0,
        }
    }
}

/// Attempt a field goal with the given success chance.
pub fn attempt_field_goal<R: PlayRandom + ?Sized>(probability: f64, rng: &mut R) -> KickAttempt {
    let good = rng.chance(probability);
    KickAttempt {
        call: PlayCall::FieldGoal,
        probability,
        good,
        narrative: if good { "Field goal good!" } else { "Field goal missed!" }.to_string(),
    }
}

/// Attempt an extra-point kick from the fixed distance.
pub fn attempt_extra_point<R: PlayRandom + ?Sized>(rng: &mut R) -> KickAttempt {
    let probability = field_goal_probability(EXTRA_POINT_DISTANCE);
    let good = rng.chance(probability);
    KickAttempt {
        call: PlayCall::KickExtraPoint,
        probability,
        good,
        narrative: if good { "Extra point good!" } else { "Extra point missed!" }.to_string(),
    }
}

/// Attempt a two-point conversion.
pub fn attempt_two_point<R: PlayRandom + ?Sized>(rng: &mut R) -> KickAttempt {
    let good = rng.chance(TWO_POINT_PROBABILITY);
    KickAttempt {
        call: PlayCall::TwoPointTry,
        probability: TWO_POINT_PROBABILITY,
        good,
        narrative: if good { "2pt conversion good!" } else { "2pt conversion failed!" }.to_string(),
    }
}

/// Narrative for a punt. Punts always succeed and take no draw.
#[must_use]
pub fn punt_narrative(side: Side) -> String {
    format!("{side} punts.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedRng};
    use crate::plays::playbook::Playbook;

    fn def(call: PlayCall) -> PlayDefinition {
        Playbook::standard().unwrap().get(call).cloned().unwrap()
    }

    #[test]
    fn test_category_bands() {
        // Deep Ball: penalty 0.10, sack 0.15, turnover 0.15
        let deep = def(PlayCall::DeepBall);
        let cases = [
            (0.00, OutcomeCategory::Penalty),
            (0.0999, OutcomeCategory::Penalty),
            (0.1001, OutcomeCategory::Sack),
            (0.2499, OutcomeCategory::Sack),
            (0.2501, OutcomeCategory::Turnover),
            (0.3999, OutcomeCategory::Turnover),
            (0.4001, OutcomeCategory::NormalGain),
            (0.9999, OutcomeCategory::NormalGain),
        ];

        for (r, expected) in cases {
            let mut rng = ScriptedRng::new().with_units([r]);
            let outcome = resolve(&deep, Side::Player, &mut rng);
            assert_eq!(outcome.category, expected, "r = {r}");
        }
    }

    #[test]
    fn test_zero_sack_band_skips_to_turnover() {
        // Short Run has no sack band: 0.10..0.15 is turnover
        let run = def(PlayCall::ShortRun);
        let mut rng = ScriptedRng::new().with_units([0.12]);
        let outcome = resolve(&run, Side::Player, &mut rng);
        assert_eq!(outcome.category, OutcomeCategory::Turnover);
        assert_eq!(outcome.yards, 0);
    }

    #[test]
    fn test_narratives() {
        let hook = def(PlayCall::Hook);

        let mut rng = ScriptedRng::new().with_units([0.05]).with_ints([8]);
        assert_eq!(resolve(&hook, Side::Opponent, &mut rng).narrative, "Opponent penalized for 8 yards.");

        let mut rng = ScriptedRng::new().with_units([0.25]);
        assert_eq!(resolve(&hook, Side::Player, &mut rng).narrative, "Turnover! Opponent takes over.");

        let mut rng = ScriptedRng::new().with_units([0.25]);
        assert_eq!(resolve(&hook, Side::Opponent, &mut rng).narrative, "Turnover! Player takes over.");

        let mut rng = ScriptedRng::new().with_units([0.5]).with_ints([11]);
        assert_eq!(resolve(&hook, Side::Player, &mut rng).narrative, "Player gains 11 yards with Hook.");
    }

    #[test]
    fn test_loss_magnitudes_with_real_rng() {
        let mut rng = GameRng::new(99);
        for call in PlayCall::BASE {
            let d = def(call);
            for _ in 0..500 {
                let outcome = resolve(&d, Side::Player, &mut rng);
                match outcome.category {
                    OutcomeCategory::Penalty => assert!((-10..=-5).contains(&outcome.yards)),
                    OutcomeCategory::Sack => assert!((-12..=-5).contains(&outcome.yards)),
                    OutcomeCategory::Turnover => assert_eq!(outcome.yards, 0),
                    OutcomeCategory::NormalGain => assert!(d.yards.contains(outcome.yards)),
                }
            }
        }
    }

    #[test]
    fn test_field_goal_buckets() {
        assert_eq!(field_goal_probability(20), 0.95);
        assert_eq!(field_goal_probability(25), 0.95);
        assert_eq!(field_goal_probability(26), 0.85);
        assert_eq!(field_goal_probability(33), 0.85);
        assert_eq!(field_goal_probability(45), 0.70);
        assert_eq!(field_goal_probability(55), 0.55);
        assert_eq!(field_goal_probability(56), 0.35);
    }

    #[test]
    fn test_kick_points() {
        let mut rng = ScriptedRng::new().with_units([0.0, 0.99, 0.0, 0.0]);

        let fg = attempt_field_goal(FLAT_FIELD_GOAL_PROBABILITY, &mut rng);
        assert!(fg.good);
        assert_eq!(fg.points(), 3);

        let xp = attempt_extra_point(&mut rng);
        assert!(!xp.good);
        assert_eq!(xp.points(), 0);
        assert_eq!(xp.probability, 0.85);
        assert_eq!(xp.narrative, "Extra point missed!");

        let two = attempt_two_point(&mut rng);
        assert_eq!(two.points(), 2);
        assert_eq!(two.narrative, "2pt conversion good!");

        let xp = attempt_extra_point(&mut rng);
        assert_eq!(xp.points(), 1);
    }

    #[test]
    fn test_two_point_boundary() {
        let mut rng = ScriptedRng::new().with_units([0.47]);
        assert!(!attempt_two_point(&mut rng).good);
    }

    #[test]
    fn test_punt_narrative() {
        assert_eq!(punt_narrative(Side::Player), "Player punts.");
    }
}
