//! Grid-based numeric posterior for non-conjugate prior/likelihood pairs.
//!
//! When no conjugate relationship exists (e.g., a skew-normal prior), the
//! posterior is approximated on a caller-supplied grid by Bayes' rule
//! without the marginal-likelihood denominator:
//!
//! `Posterior ∝ Prior × Likelihood`
//!
//! with the denominator implicitly supplied by a final mass normalization.
//! The result is a normalized mass proxy for comparative and interval use,
//! not an exact continuous density. The engine never auto-expands the grid;
//! it rejects grids whose boundary mass suggests clipped support.

use crate::distribution::Distribution;
use crate::error::{CreerError, Result};

/// Default ceiling on normalized posterior mass at either grid boundary.
pub const DEFAULT_BOUNDARY_THRESHOLD: f64 = 0.01;

/// A discretized posterior: ordered grid points with normalized mass.
///
/// Invariants: points are strictly increasing, masses are non-negative and
/// sum to 1.
///
/// # Example
///
/// ```
/// use creer::grid::{linspace, GridPosterior};
///
/// let grid = linspace(-10.0, 25.0, 3501).expect("valid grid range");
/// let engine = GridPosterior::new();
/// let posterior = engine
///     .posterior(
///         |x| (-0.5 * ((x - 10.0) / 2.0_f64).powi(2)).exp(),
///         |x| (-0.5 * ((x - 5.0) / 2.0_f64).powi(2)).exp(),
///         &grid,
///     )
///     .expect("well-supported grid");
///
/// // Precision-weighted blend of the two means
/// assert!((posterior.mean() - 7.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridApproximation {
    points: Vec<f64>,
    mass: Vec<f64>,
}

impl GridApproximation {
    /// Grid points (strictly increasing).
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Normalized mass per grid point (sums to 1).
    #[must_use]
    pub fn mass(&self) -> &[f64] {
        &self.mass
    }

    /// Number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the grid is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mass-weighted mean.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.points
            .iter()
            .zip(self.mass.iter())
            .map(|(&x, &m)| x * m)
            .sum()
    }

    /// Mass-weighted variance.
    #[must_use]
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.points
            .iter()
            .zip(self.mass.iter())
            .map(|(&x, &m)| (x - mean) * (x - mean) * m)
            .sum()
    }

    /// Mass-weighted standard deviation.
    #[must_use]
    pub fn sd(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Grid point carrying the highest mass (MAP proxy).
    #[must_use]
    pub fn mode(&self) -> f64 {
        let mut best = 0;
        for (i, &m) in self.mass.iter().enumerate() {
            if m > self.mass[best] {
                best = i;
            }
        }
        self.points[best]
    }

    /// Quantile at probability `p`, interpolating the cumulative mass.
    ///
    /// Mass is treated as centered on its grid point (half before, half
    /// after), with linear interpolation between neighbors. Probabilities
    /// inside the first or last half-cell clamp to the boundary point.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `p` is outside (0, 1).
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(CreerError::invalid_parameter("p", p, "in (0, 1)"));
        }

        // Centered cumulative mass: cdf at point k counts all mass before
        // k plus half of k's own.
        let mut before = 0.0;
        let mut prev_cdf = 0.5 * self.mass[0];
        if p <= prev_cdf {
            return Ok(self.points[0]);
        }
        for k in 1..self.points.len() {
            before += self.mass[k - 1];
            let cdf = before + 0.5 * self.mass[k];
            if p <= cdf {
                let span = cdf - prev_cdf;
                let frac = if span > 0.0 { (p - prev_cdf) / span } else { 0.0 };
                return Ok(self.points[k - 1] + frac * (self.points[k] - self.points[k - 1]));
            }
            prev_cdf = cdf;
        }
        Ok(self.points[self.points.len() - 1])
    }

    /// Central (1-α) credible interval as `(lower, upper)` quantiles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `confidence` is outside (0, 1).
    pub fn credible_interval(&self, confidence: f64) -> Result<(f64, f64)> {
        if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
            return Err(CreerError::invalid_parameter(
                "confidence",
                confidence,
                "in (0, 1)",
            ));
        }
        let tail = (1.0 - confidence) / 2.0;
        Ok((self.quantile(tail)?, self.quantile(1.0 - tail)?))
    }
}

/// Grid posterior engine: combines pointwise-evaluable prior and
/// likelihood densities on a caller-supplied grid.
///
/// The caller owns range and resolution. A posterior whose boundary mass
/// exceeds the configured threshold fails with `InsufficientSupport`
/// rather than silently truncating real mass.
#[derive(Debug, Clone)]
pub struct GridPosterior {
    boundary_threshold: f64,
}

impl Default for GridPosterior {
    fn default() -> Self {
        Self::new()
    }
}

impl GridPosterior {
    /// Creates an engine with the default boundary-mass threshold (1%).
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundary_threshold: DEFAULT_BOUNDARY_THRESHOLD,
        }
    }

    /// Creates an engine with a custom boundary-mass threshold.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `threshold` is outside (0, 1).
    pub fn with_boundary_threshold(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 || threshold >= 1.0 {
            return Err(CreerError::invalid_parameter(
                "threshold",
                threshold,
                "in (0, 1)",
            ));
        }
        Ok(Self {
            boundary_threshold: threshold,
        })
    }

    /// Computes the grid posterior from pointwise density functions.
    ///
    /// Both functions are evaluated at every grid point, each evaluation
    /// is mass-normalized to sum 1, the pointwise product is formed, and
    /// the product is re-normalized. Any positive rescaling of either
    /// input yields the identical posterior.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter`: grid shorter than 2 points, not strictly
    ///   increasing, or a density evaluates negative or non-finite
    /// - `DegeneratePosterior`: prior, likelihood, or their product carry
    ///   zero total mass on the grid
    /// - `InsufficientSupport`: normalized posterior mass at either
    ///   boundary point exceeds the threshold
    pub fn posterior<P, L>(&self, prior: P, likelihood: L, grid: &[f64]) -> Result<GridApproximation>
    where
        P: Fn(f64) -> f64,
        L: Fn(f64) -> f64,
    {
        validate_grid(grid)?;

        let prior_mass = normalized_evaluation(&prior, grid, "prior")?;
        let like_mass = normalized_evaluation(&likelihood, grid, "likelihood")?;

        let mut product: Vec<f64> = prior_mass
            .iter()
            .zip(like_mass.iter())
            .map(|(&p, &l)| p * l)
            .collect();

        let total: f64 = product.iter().sum();
        if total <= 0.0 {
            return Err(CreerError::DegeneratePosterior {
                detail: "prior and likelihood mass disjoint on grid".to_string(),
            });
        }
        for m in &mut product {
            *m /= total;
        }

        let boundary_mass = product[0].max(product[product.len() - 1]);
        if boundary_mass > self.boundary_threshold {
            return Err(CreerError::InsufficientSupport {
                boundary_mass,
                threshold: self.boundary_threshold,
            });
        }

        Ok(GridApproximation {
            points: grid.to_vec(),
            mass: product,
        })
    }

    /// Convenience wrapper wiring [`Distribution::pdf`] for both sides.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`GridPosterior::posterior`].
    pub fn posterior_for(
        &self,
        prior: &Distribution,
        likelihood: &Distribution,
        grid: &[f64],
    ) -> Result<GridApproximation> {
        self.posterior(|x| prior.pdf(x), |x| likelihood.pdf(x), grid)
    }
}

/// Evenly spaced grid of `n` points spanning `[start, stop]`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `n` < 2, the endpoints are non-finite, or
/// `start >= stop`.
///
/// # Example
///
/// ```
/// use creer::grid::linspace;
///
/// let grid = linspace(0.0, 1.0, 5).expect("valid grid range");
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Vec<f64>> {
    if n < 2 {
        return Err(CreerError::invalid_parameter("n", n, ">= 2"));
    }
    if !start.is_finite() || !stop.is_finite() || start >= stop {
        return Err(CreerError::invalid_parameter(
            "range",
            format!("[{start}, {stop}]"),
            "finite with start < stop",
        ));
    }
    #[allow(clippy::cast_precision_loss)]
    let step = (stop - start) / (n - 1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    // Pin the endpoint against accumulated rounding
    points[n - 1] = stop;
    Ok(points)
}

fn validate_grid(grid: &[f64]) -> Result<()> {
    if grid.len() < 2 {
        return Err(CreerError::invalid_parameter(
            "grid",
            grid.len(),
            "at least 2 points",
        ));
    }
    for window in grid.windows(2) {
        if !window[0].is_finite() || !window[1].is_finite() || window[0] >= window[1] {
            return Err(CreerError::invalid_parameter(
                "grid",
                format!("({}, {})", window[0], window[1]),
                "finite, strictly increasing points",
            ));
        }
    }
    Ok(())
}

fn normalized_evaluation<F>(density: &F, grid: &[f64], label: &str) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    let mut values = Vec::with_capacity(grid.len());
    for &x in grid {
        let v = density(x);
        if !v.is_finite() || v < 0.0 {
            return Err(CreerError::invalid_parameter(
                label,
                format!("{label}({x}) = {v}"),
                "finite and >= 0",
            ));
        }
        values.push(v);
    }

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(CreerError::DegeneratePosterior {
            detail: format!("{label} has zero total mass on grid"),
        });
    }
    for v in &mut values {
        *v /= total;
    }
    Ok(values)
}
