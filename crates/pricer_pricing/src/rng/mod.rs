//! # Random Number Generation Infrastructure
//!
//! Seeded uniform generators and the sampler that turns their output into
//! normal variates for path simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator accepts a seed, and a fixed seed
//!   yields the same sequence whether the generator is used directly or
//!   owned by a [`Sampler`] inside the stochastic engine
//! - **Explicit handles**: generators are plain values passed by the caller;
//!   there is no global or thread-local generator
//! - **Static dispatch**: consumers are generic over [`UniformGenerator`],
//!   so no `Box<dyn Trait>` sits in the simulation loop
//!
//! ## Module Structure
//!
//! - [`SubtractiveRng`]: Knuth's subtractive lagged-Fibonacci generator,
//!   used wherever a seeded sequence must match recorded fixtures
//! - [`PricerRng`]: `rand::StdRng` wrapper for the parallel Monte Carlo
//!   streams
//! - [`Sampler`]: uniform and inverse-CDF normal sampling over any
//!   [`UniformGenerator`]
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{Sampler, SubtractiveRng};
//!
//! let mut sampler = Sampler::new(SubtractiveRng::new(Some(1000)));
//! let draws = sampler.standard_normal(5);
//!
//! assert_eq!(draws.len(), 5);
//! assert!((draws[0] + 1.0297765).abs() < 1e-6);
//! ```

mod prng;
mod sampler;
mod subtractive;

pub use prng::PricerRng;
pub use sampler::Sampler;
pub use subtractive::SubtractiveRng;

/// Source of uniform variates in `[0, 1)`.
///
/// Implementors must be deterministic for a given seed.
pub trait UniformGenerator {
    /// Next uniform variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Fill `buffer` with successive uniform variates.
    #[inline]
    fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }
}

impl<G: UniformGenerator + ?Sized> UniformGenerator for &mut G {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
