//! Pluggable randomness for every randomized visual parameter.
//!
//! The web frontend draws from [`SeededRandom`] (entropy-seeded `StdRng`);
//! host tests inject [`SequenceRandom`] to get repeatable layouts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[min, max)`.
    #[inline]
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_unit() * (max - min)
    }

    /// `f32` convenience used by the glam-based pools.
    #[inline]
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        self.range(min as f64, max as f64) as f32
    }

    /// Index in `0..len`; `len` must be non-zero.
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Pick one entry of a non-empty slice.
    #[inline]
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }
}

pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    samples: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        let mut samples: Vec<f64> = samples.into();
        if samples.is_empty() {
            samples.push(0.0);
        }
        // Keep every sample inside [0, 1) so range() never overshoots.
        for s in &mut samples {
            *s = s.clamp(0.0, 1.0 - f64::EPSILON);
        }
        Self { samples, cursor: 0 }
    }

    /// A source that always yields the same sample.
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        let v = self.samples[self.cursor % self.samples.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v
    }
}
