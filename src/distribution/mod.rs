//! Distribution value types shared by the exact and grid posterior paths.
//!
//! A [`Distribution`] is immutable once constructed: the checked
//! constructors validate family constraints (positive scale parameters,
//! finite values) and return errors instead of producing NaN downstream.

use crate::error::{CreerError, Result};
use crate::special;

const SQRT_TWO_PI: f64 = 2.506_628_274_631_000_5;

/// A parametric distribution used as a prior, likelihood, or posterior.
///
/// # Example
///
/// ```
/// use creer::distribution::Distribution;
///
/// let d = Distribution::normal(0.0, 1.0).expect("valid parameters");
/// assert!((d.pdf(0.0) - 0.398_942_28).abs() < 1e-6);
/// assert_eq!(d.mean(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Normal (Gaussian) with mean and standard deviation.
    Normal { mean: f64, sd: f64 },
    /// Beta with shape parameters alpha and beta.
    Beta { alpha: f64, beta: f64 },
    /// Skew-normal with location ξ, scale ω, and shape (skewness) α.
    SkewNormal {
        location: f64,
        scale: f64,
        shape: f64,
    },
}

impl Distribution {
    /// Creates a Normal distribution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `sd` ≤ 0 or either argument is
    /// non-finite.
    pub fn normal(mean: f64, sd: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(CreerError::invalid_parameter("mean", mean, "finite"));
        }
        if !sd.is_finite() || sd <= 0.0 {
            return Err(CreerError::invalid_parameter("sd", sd, "finite and > 0"));
        }
        Ok(Self::Normal { mean, sd })
    }

    /// Creates a Beta distribution.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either shape parameter is ≤ 0 or
    /// non-finite.
    pub fn beta(alpha: f64, beta: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(CreerError::invalid_parameter(
                "alpha",
                alpha,
                "finite and > 0",
            ));
        }
        if !beta.is_finite() || beta <= 0.0 {
            return Err(CreerError::invalid_parameter(
                "beta",
                beta,
                "finite and > 0",
            ));
        }
        Ok(Self::Beta { alpha, beta })
    }

    /// Creates a skew-normal distribution.
    ///
    /// With `shape` = 0 this reduces to `Normal { mean: location, sd: scale }`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `scale` ≤ 0 or any argument is
    /// non-finite.
    pub fn skew_normal(location: f64, scale: f64, shape: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(CreerError::invalid_parameter("location", location, "finite"));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CreerError::invalid_parameter(
                "scale",
                scale,
                "finite and > 0",
            ));
        }
        if !shape.is_finite() {
            return Err(CreerError::invalid_parameter("shape", shape, "finite"));
        }
        Ok(Self::SkewNormal {
            location,
            scale,
            shape,
        })
    }

    /// Probability density at `x`.
    ///
    /// Beta density is 0 outside the open interval (0, 1).
    #[must_use]
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            Self::Normal { mean, sd } => {
                let z = (x - mean) / sd;
                (-0.5 * z * z).exp() / (sd * SQRT_TWO_PI)
            }
            Self::Beta { alpha, beta } => {
                if x <= 0.0 || x >= 1.0 {
                    return 0.0;
                }
                ((alpha - 1.0) * x.ln() + (beta - 1.0) * (1.0 - x).ln()
                    - special::ln_beta(alpha, beta))
                .exp()
            }
            Self::SkewNormal {
                location,
                scale,
                shape,
            } => {
                let z = (x - location) / scale;
                let phi = (-0.5 * z * z).exp() / SQRT_TWO_PI;
                2.0 / scale * phi * special::normal_cdf(shape * z)
            }
        }
    }

    /// Distribution mean.
    #[must_use]
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Normal { mean, .. } => mean,
            Self::Beta { alpha, beta } => alpha / (alpha + beta),
            Self::SkewNormal {
                location,
                scale,
                shape,
            } => {
                let delta = shape / (1.0 + shape * shape).sqrt();
                location + scale * delta * (2.0 / std::f64::consts::PI).sqrt()
            }
        }
    }

    /// Distribution variance.
    #[must_use]
    pub fn variance(&self) -> f64 {
        match *self {
            Self::Normal { sd, .. } => sd * sd,
            Self::Beta { alpha, beta } => {
                let sum = alpha + beta;
                alpha * beta / (sum * sum * (sum + 1.0))
            }
            Self::SkewNormal { scale, shape, .. } => {
                let delta = shape / (1.0 + shape * shape).sqrt();
                scale * scale * (1.0 - 2.0 * delta * delta / std::f64::consts::PI)
            }
        }
    }

    /// Distribution standard deviation.
    #[must_use]
    pub fn sd(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Quantile (inverse CDF) at probability `p`.
    ///
    /// Normal quantiles use the Acklam approximation; Beta quantiles invert
    /// the regularized incomplete beta function by bisection (CDF tolerance
    /// 1e-8). The skew-normal has no closed-form quantile; use a grid
    /// posterior for interval estimates on that family.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `p` is outside (0, 1), or `Other` for
    /// the skew-normal family.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        if !p.is_finite() || p <= 0.0 || p >= 1.0 {
            return Err(CreerError::invalid_parameter("p", p, "in (0, 1)"));
        }
        match *self {
            Self::Normal { mean, sd } => Ok(mean + sd * special::inverse_normal_cdf(p)),
            Self::Beta { alpha, beta } => {
                Ok(special::inverse_regularized_incomplete_beta(alpha, beta, p))
            }
            Self::SkewNormal { .. } => Err(CreerError::Other(
                "skew-normal quantile has no closed form; use a grid posterior".to_string(),
            )),
        }
    }

    /// Central (1-α) credible interval as `(lower, upper)` quantiles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `confidence` is outside (0, 1), or
    /// `Other` for the skew-normal family.
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
