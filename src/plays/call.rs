//! Play calls: the table-driven offensive plays plus the special plays.

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;

/// A play the offense can call.
///
/// The first seven variants are table-driven (see
/// [`Playbook`](super::Playbook)); the rest are kicking and conversion plays
/// resolved by dedicated rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayCall {
    ShortRun,
    Sweep,
    QbSneak,
    ScreenPass,
    Slant,
    Hook,
    DeepBall,
    Punt,
    FieldGoal,
    KickExtraPoint,
    TwoPointTry,
}

impl PlayCall {
    /// Table-driven plays, in menu order.
    pub const BASE: [PlayCall; 7] = [
        PlayCall::ShortRun,
        PlayCall::Sweep,
        PlayCall::QbSneak,
        PlayCall::ScreenPass,
        PlayCall::Slant,
        PlayCall::Hook,
        PlayCall::DeepBall,
    ];

    /// Every play call, in menu order.
    pub const ALL: [PlayCall; 11] = [
        PlayCall::ShortRun,
        PlayCall::Sweep,
        PlayCall::QbSneak,
        PlayCall::ScreenPass,
        PlayCall::Slant,
        PlayCall::Hook,
        PlayCall::DeepBall,
        PlayCall::Punt,
        PlayCall::FieldGoal,
        PlayCall::KickExtraPoint,
        PlayCall::TwoPointTry,
    ];

    /// Display name, as shown on the play buttons.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayCall::ShortRun => "Short Run",
            PlayCall::Sweep => "Sweep",
            PlayCall::QbSneak => "QB Sneak",
            PlayCall::ScreenPass => "Screen Pass",
            PlayCall::Slant => "Slant",
            PlayCall::Hook => "Hook",
            PlayCall::DeepBall => "Deep Ball",
            PlayCall::Punt => "Punt",
            PlayCall::FieldGoal => "Field Goal",
            PlayCall::KickExtraPoint => "Kick XP",
            PlayCall::TwoPointTry => "2-Point Try",
        }
    }

    /// Whether the play is resolved from the playbook table.
    #[must_use]
    pub const fn is_base(self) -> bool {
        !self.is_special()
    }

    /// Whether the play is a kick or conversion attempt.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(
            self,
            PlayCall::Punt | PlayCall::FieldGoal | PlayCall::KickExtraPoint | PlayCall::TwoPointTry
        )
    }

    /// Whether the play is a post-touchdown conversion attempt.
    #[must_use]
    pub const fn is_conversion(self) -> bool {
        matches!(self, PlayCall::KickExtraPoint | PlayCall::TwoPointTry)
    }
}

impl std::fmt::Display for PlayCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PlayCall {
    type Err = GameError;

    /// Parse a play by display name, ignoring case and surrounding space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PlayCall::ALL
            .into_iter()
            .find(|call| call.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::illegal(wanted, "unknown play"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_and_special_partition() {
        assert_eq!(PlayCall::ALL.iter().filter(|c| c.is_base()).count(), 7);
        assert_eq!(PlayCall::ALL.iter().filter(|c| c.is_special()).count(), 4);
        assert!(PlayCall::BASE.iter().all(|c| c.is_base()));
        assert!(PlayCall::KickExtraPoint.is_conversion());
        assert!(!PlayCall::FieldGoal.is_conversion());
    }

    #[test]
    fn test_parse_names() {
        for call in PlayCall::ALL {
            assert_eq!(call.name().parse::<PlayCall>(), Ok(call));
        }
        assert_eq!("  qb sneak ".parse::<PlayCall>(), Ok(PlayCall::QbSneak));
        assert_eq!("kick xp".parse::<PlayCall>(), Ok(PlayCall::KickExtraPoint));
    }

    #[test]
    fn test_parse_unknown_is_illegal() {
        let err = "Hail Mary".parse::<PlayCall>().unwrap_err();
        assert!(err.is_illegal_play());
    }
}
