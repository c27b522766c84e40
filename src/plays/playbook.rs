//! Playbook registry for definition lookup.
//!
//! The `Playbook` stores the probability table of every table-driven play.
//! It is validated once when built; lookups afterwards cannot fail for a
//! base play.

use rustc_hash::FxHashMap;

use super::call::PlayCall;
use super::definition::PlayDefinition;
use crate::core::error::{GameError, Result};

/// Registry of play definitions.
///
/// ## Example
///
/// ```
/// use football_blitz::plays::{PlayCall, Playbook};
///
/// let playbook = Playbook::standard().unwrap();
/// let sneak = playbook.get(PlayCall::QbSneak).unwrap();
/// assert_eq!((sneak.yards.min, sneak.yards.max), (1, 3));
/// ```
#[derive(Clone, Debug)]
pub struct Playbook {
    plays: FxHashMap<PlayCall, PlayDefinition>,
}

impl Playbook {
    /// Build a playbook from definitions.
    ///
    /// Fails if any entry is malformed, a play appears twice, or a base
    /// play is missing.
    pub fn from_definitions(definitions: impl IntoIterator<Item = PlayDefinition>) -> Result<Self> {
        let mut plays = FxHashMap::default();

        for def in definitions {
            def.validate()?;
            let call = def.call;
            if plays.insert(call, def).is_some() {
                return Err(GameError::config(format!("{call} defined twice")));
            }
        }

        if let Some(missing) = PlayCall::BASE.into_iter().find(|c| !plays.contains_key(c)) {
            return Err(GameError::config(format!("{missing} has no table entry")));
        }

        log::debug!("playbook validated with {} plays", plays.len());
        Ok(Self { plays })
    }

    /// The standard table, validated like any other.
    pub fn standard() -> Result<Self> {
        Self::from_definitions(standard_definitions())
    }

    /// Get a play definition.
    ///
    /// Returns `None` for special plays, which have no table entry.
    #[must_use]
    pub fn get(&self, call: PlayCall) -> Option<&PlayDefinition> {
        self.plays.get(&call)
    }

    /// Get the number of table-driven plays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Check if the playbook is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Iterate over definitions in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayDefinition> {
        PlayCall::BASE.iter().filter_map(|c| self.plays.get(c))
    }
}

/// The standard probability table.
#[must_use]
pub fn standard_definitions() -> Vec<PlayDefinition> {
    vec![
        PlayDefinition::new(PlayCall::ShortRun, 2, 5)
            .with_turnover(0.05)
            .with_penalty(0.10),
        PlayDefinition::new(PlayCall::Sweep, 0, 10)
            .with_turnover(0.05)
            .with_penalty(0.10),
        PlayDefinition::new(PlayCall::QbSneak, 1, 3)
            .with_sack(0.05)
            .with_turnover(0.05)
            .with_penalty(0.10),
        PlayDefinition::new(PlayCall::ScreenPass, 0, 8)
            .with_sack(0.05)
            .with_turnover(0.05)
            .with_penalty(0.10),
        PlayDefinition::new(PlayCall::Slant, 5, 12)
            .with_sack(0.10)
            .with_turnover(0.10)
            .with_penalty(0.10),
        PlayDefinition::new(PlayCall::Hook, 5, 15)
            .with_sack(0.10)
            .with_turnover(0.10)
            .with_penalty(0.10),
        PlayDefinition::new(PlayCall::DeepBall, 15, 40)
            .with_sack(0.15)
            .with_turnover(0.15)
            .with_penalty(0.10),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let playbook = Playbook::standard().unwrap();
        assert_eq!(playbook.len(), 7);
        for def in playbook.iter() {
            assert!(def.validate().is_ok(), "{} invalid", def.name());
        }
    }

    #[test]
    fn test_iter_follows_menu_order() {
        let playbook = Playbook::standard().unwrap();
        let order: Vec<_> = playbook.iter().map(|d| d.call).collect();
        assert_eq!(order, PlayCall::BASE.to_vec());
    }

    #[test]
    fn test_special_plays_have_no_entry() {
        let playbook = Playbook::standard().unwrap();
        assert!(playbook.get(PlayCall::Punt).is_none());
        assert!(playbook.get(PlayCall::FieldGoal).is_none());
    }

    #[test]
    fn test_missing_play_rejected() {
        let defs: Vec<_> = standard_definitions()
            .into_iter()
            .filter(|d| d.call != PlayCall::Hook)
            .collect();

        let err = Playbook::from_definitions(defs).unwrap_err();
        assert_eq!(err, GameError::InvalidConfiguration("Hook has no table entry".into()));
    }

    #[test]
    fn test_duplicate_play_rejected() {
        let mut defs = standard_definitions();
        defs.push(PlayDefinition::new(PlayCall::Sweep, 1, 2));
        assert!(Playbook::from_definitions(defs).is_err());
    }

    #[test]
    fn test_malformed_entry_rejected() {
        let mut defs = standard_definitions();
        defs[0] = PlayDefinition::new(PlayCall::ShortRun, 2, 5).with_turnover(2.0);
        assert!(matches!(
            Playbook::from_definitions(defs),
            Err(GameError::InvalidConfiguration(_))
        ));
    }
}
