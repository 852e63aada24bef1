//! # Random Number Generation
//!
//! Seedable pseudo-random number generation for the Monte Carlo estimator.
//!
//! - **Reproducibility**: a generator is fully determined by its seed
//! - **Ownership**: each simulation owns its generator; there is no global
//!   random state
//! - **Batch operations**: normals are written into caller-provided slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
