//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use creer::prelude::*;
//! ```

pub use crate::conjugate::{BetaBinomial, NormalNormal};
pub use crate::distribution::Distribution;
pub use crate::error::{CreerError, Result};
pub use crate::grid::{linspace, GridApproximation, GridPosterior};
pub use crate::posterior::PosteriorResult;
pub use crate::sampler::{
    DataBinding, Domain, Draws, ModelSpec, ParameterDecl, PosteriorSummary, Sampler,
    SamplerAdapter,
};
