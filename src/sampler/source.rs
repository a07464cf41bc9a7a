//! Coordinate sources for the sampler.
//!
//! The sampler never touches global randomness: every draw goes through a
//! [`CoordinateSource`] handed in by the caller.

use crate::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Supplier of unit-interval coordinates.
pub trait CoordinateSource {
    /// Next coordinate, or `None` once the source is exhausted.
    fn next_unit(&mut self) -> Option<f64>;
}

/// Pseudo-random source backed by [`StdRng`].
///
/// Draws are i.i.d. uniform over `[0, 1)`. Not cryptographically secure.
///
/// # Example
///
/// ```rust
/// use monte_pi::sampler::{CoordinateSource, RandomSource};
///
/// let mut a = RandomSource::seeded(7);
/// let mut b = RandomSource::seeded(7);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Deterministic source for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl CoordinateSource for RandomSource {
    fn next_unit(&mut self) -> Option<f64> {
        Some(self.rng.gen::<f64>())
    }
}

/// Replays a fixed list of coordinates in order.
///
/// Used to reproduce a recorded run exactly, and to pin down boundary cases.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<f64>,
}

impl ScriptedSource {
    /// Replay raw coordinates in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any value is non-finite or outside `[0, 1]`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Result<Self> {
        let values: VecDeque<f64> = values.into_iter().collect();
        if let Some((index, bad)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(Error::InvalidInput(format!(
                "scripted coordinate #{index} = {bad} is outside [0, 1]"
            )));
        }
        Ok(Self { values })
    }

    /// Replay `(x, y)` points.
    ///
    /// The sampler draws every x before any y, so the points are laid out
    /// as `x0..xn` followed by `y0..yn`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if any coordinate is outside `[0, 1]`.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let xs = points.iter().map(|&(x, _)| x);
        let ys = points.iter().map(|&(_, y)| y);
        Self::new(xs.chain(ys))
    }

    /// Coordinates not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl CoordinateSource for ScriptedSource {
    fn next_unit(&mut self) -> Option<f64> {
        self.values.pop_front()
    }
}
