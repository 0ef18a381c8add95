//! Creer: Bayesian posterior computation in pure Rust.
//!
//! Creer computes posterior distributions along three comparable paths:
//! closed-form conjugate updates where a conjugate relationship exists, a
//! grid-based numeric posterior for non-conjugate prior/likelihood pairs,
//! and summaries of draws returned by an external black-box sampler. The
//! three paths share one summary surface so exact and approximate answers
//! can be cross-validated.
//!
//! # Quick Start
//!
//! ```
//! use creer::prelude::*;
//!
//! // Prior favoring a rate near 0.5, with the weight of 16 pseudo-trials
//! let mut model = BetaBinomial::new(9.0, 9.0).expect("valid shape parameters");
//!
//! // Observe 8 successes in 20 trials
//! model.update(8, 20).expect("successes within trials");
//!
//! // Posterior is Beta(17, 21)
//! assert!((model.posterior_mean() - 17.0 / 38.0).abs() < 1e-12);
//! let (lower, upper) = model.credible_interval(0.95).expect("valid confidence level");
//! assert!(lower < model.posterior_mean() && model.posterior_mean() < upper);
//! ```
//!
//! # Modules
//!
//! - [`conjugate`]: Normal-Normal and Beta-Binomial closed-form updates
//! - [`distribution`]: the Distribution value type (Normal, Beta, SkewNormal)
//! - [`grid`]: grid-based numeric posterior for non-conjugate pairs
//! - [`sampler`]: model-specification boundary to an external solver
//! - [`posterior`]: one interface over exact and grid posteriors
//! - [`synthetic`]: seeded synthetic observation generators
//! - [`special`]: log-gamma, incomplete beta, and normal quantile functions
//! - [`error`]: error types and the crate-wide [`Result`] alias

pub mod conjugate;
pub mod distribution;
pub mod error;
pub mod grid;
pub mod posterior;
pub mod prelude;
pub mod sampler;
pub mod special;
pub mod synthetic;

pub use error::{CreerError, Result};
