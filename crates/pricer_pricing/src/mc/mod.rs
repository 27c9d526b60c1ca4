//! Path simulation and Monte Carlo option valuation.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (paths, seed, chunk size, steps per year)
//! └── per rayon chunk
//!     ├── PricerRng      (seeded seed + chunk index)
//!     └── StochasticEngine
//!         └── Sampler    (inverse-CDF normals)
//! ```
//!
//! [`StochasticEngine`] is also usable on its own, with any
//! [`UniformGenerator`](crate::rng::UniformGenerator), to generate dated
//! price paths for backtests.
//!
//! # Examples
//!
//! ## Simulating a path
//!
//! ```rust
//! use pricer_models::models::GbmParams;
//! use pricer_pricing::mc::StochasticEngine;
//!
//! let mut engine = StochasticEngine::seeded(Some(1234));
//! let path = engine.brownian_path(&GbmParams::new(0.1, 0.18), 1.0 / 12.0, 7);
//! assert!((path[6] - 0.278469).abs() < 1e-6);
//! ```
//!
//! ## Monte Carlo against the closed form
//!
//! ```rust
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{EquityOptionFactory, OptionType};
//! use pricer_models::models::GbmParams;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let as_of = Date::from_ymd(2020, 5, 1).unwrap();
//! let expiry = Date::from_ymd(2020, 6, 30).unwrap();
//! let put = EquityOptionFactory::create(OptionType::EuropeanPut, "IDX", expiry, 100.0, "USD").unwrap();
//!
//! let (spot, vol, rate, div) = (100.0, 0.2, 0.05, 0.01);
//! let t = put.time_to_expiry(as_of);
//! let closed_form = put.price_black_scholes(as_of, &MarketSnapshot::new(spot, vol, rate, div)).unwrap();
//!
//! let config = MonteCarloConfig::builder().num_paths(20_000).seed(42).build().unwrap();
//! let gbm = GbmParams::new(rate - div, vol).with_initial_value(spot);
//! let result = MonteCarloPricer::new(config)
//!     .unwrap()
//!     .option_value(&put, as_of, &gbm, (-rate * t).exp())
//!     .unwrap();
//!
//! assert!((result.price - closed_form).abs() < 5.0 * result.std_error);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use error::{ConfigError, SimulationError};
pub use paths::StochasticEngine;
pub use pricer::{MonteCarloPricer, PricingResult};
