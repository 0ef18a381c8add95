//! Unified view over exact and grid-approximated posteriors.
//!
//! Closed-form conjugate updates produce a [`Distribution`]; non-conjugate
//! problems produce a [`GridApproximation`]. [`PosteriorResult`] lets both
//! flow through the same point-estimate and interval interface so the two
//! paths can be cross-validated against each other.

use crate::distribution::Distribution;
use crate::error::Result;
use crate::grid::GridApproximation;
use crate::sampler::PosteriorSummary;

/// A computed posterior: exact closed-form parameters, or a normalized
/// grid approximation.
///
/// # Example
///
/// ```
/// use creer::conjugate::NormalNormal;
/// use creer::posterior::PosteriorResult;
///
/// let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
/// model.update(5.0, 2.0).expect("valid observation");
///
/// let result = PosteriorResult::Exact(model.posterior());
/// assert!((result.mean() - 7.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub enum PosteriorResult {
    /// Closed-form posterior from a conjugate update.
    Exact(Distribution),
    /// Discretized posterior from the grid engine.
    Grid(GridApproximation),
}

impl PosteriorResult {
    /// Posterior point estimate (mean).
    #[must_use]
    pub fn mean(&self) -> f64 {
        match self {
            Self::Exact(d) => d.mean(),
            Self::Grid(g) => g.mean(),
        }
    }

    /// Posterior variance.
    #[must_use]
    pub fn variance(&self) -> f64 {
        match self {
            Self::Exact(d) => d.variance(),
            Self::Grid(g) => g.variance(),
        }
    }

    /// Posterior standard deviation.
    #[must_use]
    pub fn sd(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Central (1-α) credible interval.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for confidence outside (0, 1), or
    /// `Other` for exact families without a closed-form quantile.
    pub fn credible_interval(&self, confidence: f64) -> Result<(f64, f64)> {
        match self {
            Self::Exact(d) => d.credible_interval(confidence),
            Self::Grid(g) => g.credible_interval(confidence),
        }
    }

    /// Summary record with the requested quantiles, shaped like the
    /// sampler adapter's output for side-by-side comparison.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PosteriorResult::credible_interval`], per
    /// quantile.
    pub fn summary(&self, probs: &[f64]) -> Result<PosteriorSummary> {
        let mut quantiles = Vec::with_capacity(probs.len());
        for &p in probs {
            let q = match self {
                Self::Exact(d) => d.quantile(p)?,
                Self::Grid(g) => g.quantile(p)?,
            };
            quantiles.push((p, q));
        }
        Ok(PosteriorSummary {
            mean: self.mean(),
            sd: self.sd(),
            quantiles,
        })
    }
}
