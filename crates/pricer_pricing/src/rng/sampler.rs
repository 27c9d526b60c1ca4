//! Uniform and normal sampling over a [`UniformGenerator`].

use pricer_models::analytical::norm_inv_cdf;

use super::{SubtractiveRng, UniformGenerator};

/// Draws uniform and normal variates from an owned generator.
///
/// Normals come from the inverse normal CDF applied to one uniform each, so
/// every normal draw consumes exactly one uniform from the stream.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::Sampler;
///
/// let mut sampler = Sampler::seeded(Some(1000));
/// let draws = sampler.normal(0.05, 0.1, 5);
/// assert!((draws[0] + 0.052978).abs() < 1e-6);
/// ```
#[derive(Clone, Debug)]
pub struct Sampler<G> {
    generator: G,
}

impl Sampler<SubtractiveRng> {
    /// Sampler over a [`SubtractiveRng`]; `None` seeds from entropy.
    pub fn seeded(seed: Option<i32>) -> Self {
        Self::new(SubtractiveRng::new(seed))
    }
}

impl<G: UniformGenerator> Sampler<G> {
    /// Wrap a generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Mutable access to the underlying generator.
    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Consume the sampler, returning its generator.
    pub fn into_inner(self) -> G {
        self.generator
    }

    /// One draw from N(`mean`, `std`²).
    #[inline]
    pub fn next_normal(&mut self, mean: f64, std: f64) -> f64 {
        mean + std * norm_inv_cdf(self.generator.next_uniform())
    }

    /// One standard normal draw.
    #[inline]
    pub fn next_standard_normal(&mut self) -> f64 {
        self.next_normal(0.0, 1.0)
    }

    /// `n` uniforms scaled onto `[lower, upper)`.
    pub fn uniform(&mut self, lower: f64, upper: f64, n: usize) -> Vec<f64> {
        let width = upper - lower;
        (0..n)
            .map(|_| self.generator.next_uniform() * width + lower)
            .collect()
    }

    /// `n` draws from N(`mean`, `std`²).
    pub fn normal(&mut self, mean: f64, std: f64, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_normal(mean, std)).collect()
    }

    /// `n` standard normal draws.
    pub fn standard_normal(&mut self, n: usize) -> Vec<f64> {
        self.normal(0.0, 1.0, n)
    }
}
