//! Deterministic random number generation for play resolution.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Injectable**: The resolver and rules only see the [`PlayRandom`] trait
//! - **Serializable**: O(1) state capture and restore for replays
//! - **Scriptable**: [`ScriptedRng`] feeds exact draws for tests and replays
//!
//! ## Usage
//!
//! ```
//! use football_blitz::core::{GameRng, PlayRandom};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.next_unit();
//! assert!((0.0..1.0).contains(&roll));
//!
//! let yards = rng.range_inclusive(5, 12);
//! assert!((5..=12).contains(&yards));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the random draws a play needs.
///
/// Play resolution uses three kinds of draw: a unit value in `[0, 1)` for
/// the outcome category and kick success, an inclusive integer for yardage,
/// and an index for the opponent's play choice.
pub trait PlayRandom {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `min..=max`. Callers guarantee `min <= max`.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32;

    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Succeeds with the given probability, consuming one unit draw.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }
}

impl<R: PlayRandom + ?Sized> PlayRandom for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        (**self).range_inclusive(min, max)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// Seeded game RNG.
///
/// Uses ChaCha8 for speed while keeping a reproducible, serializable stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl PlayRandom for GameRng {
    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.inner.gen_range(min..=max)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state for replays.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many plays have been resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Random source that replays queued draws.
///
/// Each kind of draw has its own queue. Integer draws are clamped into the
/// requested range, so pushing `i32::MAX` always yields the range maximum.
/// Exhausted queues fall back to a fixed value: unit draws return
/// [`ScriptedRng::FALLBACK_UNIT`] (a normal gain for every standard play),
/// integer draws return the range minimum, index draws return `0`.
///
/// ```
/// use football_blitz::core::{PlayRandom, ScriptedRng};
///
/// let mut rng = ScriptedRng::new().with_units([0.05]).with_ints([99]);
/// assert_eq!(rng.next_unit(), 0.05);
/// assert_eq!(rng.range_inclusive(2, 5), 5);
/// assert_eq!(rng.range_inclusive(2, 5), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    units: VecDeque<f64>,
    ints: VecDeque<i32>,
    indices: VecDeque<usize>,
}

impl ScriptedRng {
    /// Unit value returned once the unit queue is empty.
    pub const FALLBACK_UNIT: f64 = 0.99;

    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue unit draws.
    #[must_use]
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Queue integer draws.
    #[must_use]
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Queue index draws.
    #[must_use]
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Append a unit draw.
    pub fn push_unit(&mut self, unit: f64) {
        self.units.push_back(unit);
    }

    /// Append an integer draw.
    pub fn push_int(&mut self, value: i32) {
        self.ints.push_back(value);
    }

    /// Append an index draw.
    pub fn push_index(&mut self, index: usize) {
        self.indices.push_back(index);
    }

    /// Whether every queued draw has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.units.is_empty() && self.ints.is_empty() && self.indices.is_empty()
    }
}

impl PlayRandom for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(Self::FALLBACK_UNIT)
    }

    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.ints.pop_front().map_or(min, |v| v.clamp(min, max))
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.indices
            .pop_front()
            .map_or(0, |i| i.min(len.saturating_sub(1)))
    }
}
