//! Injectable randomness for demo data
//!
//! Forecast synthesis and simulated index scores draw uniform values in
//! `[0, 1)` from a [`RandomSource`]. Production code uses the thread RNG,
//! the demo binary can seed a [`SeededRandom`] for reproducible output, and
//! tests replay a [`FixedSequence`].

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

pub trait RandomSource {
    /// Next uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// `floor(draw * span)`, below `span`; 0 when `span` is 0
    fn next_below(&mut self, span: u32) -> u32 {
        let scaled = (self.next_unit() * f64::from(span)).floor();
        (scaled as u32).min(span.saturating_sub(1))
    }
}

/// Thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic RNG seeded from a `u64`
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// The same draw forever
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
