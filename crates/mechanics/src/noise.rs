//! Throttle actuator noise sources
//!
//! The dynamics model adds one sample per call to the raw throttle command.
//! Sources are passed in explicitly so runs can be made reproducible.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper (exclusive) bound of the default throttle noise.
pub const THROTTLE_NOISE_MAX: f64 = 0.1;

pub trait ThrottleNoise {
    /// Draw the additive throttle error for one dynamics evaluation.
    fn sample(&mut self) -> f64;
}

impl<T: ThrottleNoise + ?Sized> ThrottleNoise for &mut T {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

impl<T: ThrottleNoise + ?Sized> ThrottleNoise for Box<T> {
    fn sample(&mut self) -> f64 {
        (**self).sample()
    }
}

/// Uniform noise in `[0, THROTTLE_NOISE_MAX)`, always biasing throttle upward.
#[derive(Debug, Clone)]
pub struct UniformThrottleNoise<R: Rng = StdRng> {
    rng: R,
    distribution: Uniform<f64>,
}

impl<R: Rng> UniformThrottleNoise<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            distribution: Uniform::new(0.0, THROTTLE_NOISE_MAX),
        }
    }
}

impl UniformThrottleNoise<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ThrottleNoise for UniformThrottleNoise<R> {
    fn sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}

/// Noise-free actuator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl ThrottleNoise for NoNoise {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

/// Constant offset, for pinning the noise draw in tests and predictions.
#[derive(Debug, Clone, Copy)]
pub struct FixedNoise(pub f64);

impl ThrottleNoise for FixedNoise {
    fn sample(&mut self) -> f64 {
        self.0
    }
}
