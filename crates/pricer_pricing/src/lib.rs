//! # Pricer Pricing (Layer 3: Simulation)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing is the simulation layer of the pricer stack:
//! - Seeded uniform generators and an inverse-CDF normal sampler
//! - Arithmetic and geometric Brownian path generation
//! - Parallel Monte Carlo valuation of `pricer_models` options
//!
//! ## Reproducibility
//!
//! Every generator is an explicit value owned by its caller. A fixed seed
//! reproduces the same draws, the same paths and the same Monte Carlo
//! estimate, independent of the rayon thread count.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::Sampler;
//!
//! let mut sampler = Sampler::seeded(Some(1000));
//! let draws = sampler.standard_normal(5);
//! assert!((draws[3] + 3.064060).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random number generation infrastructure
pub mod rng;

// Path simulation and Monte Carlo valuation
pub mod mc;

// Re-export commonly used items for convenience
pub use mc::{MonteCarloConfig, MonteCarloPricer, PricingResult, StochasticEngine};
pub use rng::{PricerRng, Sampler, SubtractiveRng, UniformGenerator};
