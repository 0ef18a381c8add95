//! Conjugate prior distributions with closed-form posterior updates.
//!
//! Conjugate priors allow exact posterior computation via Bayes' theorem.
//! Each conjugate family implements:
//! - Prior specification (uniform, Jeffrey's, informative)
//! - Posterior update from data, usable sequentially
//! - Posterior statistics (mean, mode, variance, credible intervals)
//! - Posterior predictive distribution

use crate::distribution::Distribution;
use crate::error::{CreerError, Result};
use crate::special;

/// Normal-Normal conjugate model for a mean parameter with known
/// observation noise.
///
/// Models an unknown mean μ given aggregate observations with known
/// standard deviation.
///
/// **Prior**: Normal(μ₀, σ₀)
/// **Likelihood**: Normal(μ_L, σ_L) — one aggregate observation with known
/// variance
/// **Posterior**: Normal(μ_post, σ_post)
///
/// # Mathematical Foundation
///
/// The update is the precision-weighted-average rule:
/// - posterior variance: `var_post = 1 / (1/σ₀² + 1/σ_L²)`
/// - posterior mean: `mean_post = var_post × (μ₀/σ₀² + μ_L/σ_L²)`
///
/// Posterior precision is the sum of prior and likelihood precisions, so
/// the posterior mean is a blend of the two means with weights
/// proportional to inverse variance: the lower-σ source pulls harder.
///
/// # Example
///
/// ```
/// use creer::conjugate::NormalNormal;
///
/// // Prior belief: mean near 10 with sd 2
/// let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
///
/// // Observe an aggregate measurement of 5 with known sd 2
/// model.update(5.0, 2.0).expect("valid observation");
///
/// // Equal precision on both sides: posterior mean is halfway
/// assert!((model.posterior_mean() - 7.5).abs() < 1e-12);
/// assert!((model.posterior_variance() - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NormalNormal {
    /// Current mean (prior μ₀, then posterior after updates)
    mean: f64,
    /// Current standard deviation (prior σ₀, then posterior)
    sd: f64,
}

impl NormalNormal {
    /// Creates a Normal prior with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `sd` ≤ 0 or either argument is
    /// non-finite.
    ///
    /// # Example
    ///
    /// ```
    /// use creer::conjugate::NormalNormal;
    ///
    /// let prior = NormalNormal::new(0.0, 100.0).expect("valid prior parameters");
    /// assert_eq!(prior.posterior_mean(), 0.0);
    /// ```
    pub fn new(mean: f64, sd: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(CreerError::invalid_parameter("mean", mean, "finite"));
        }
        if !sd.is_finite() || sd <= 0.0 {
            return Err(CreerError::invalid_parameter("sd", sd, "finite and > 0"));
        }
        Ok(Self { mean, sd })
    }

    /// Updates the posterior with an aggregate observation (Bayesian
    /// update).
    ///
    /// The current state acts as the prior; after the call it holds the
    /// posterior, so repeated calls accumulate evidence.
    ///
    /// # Arguments
    ///
    /// * `obs_mean` - Observed mean μ_L
    /// * `obs_sd` - Known observation standard deviation σ_L
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `obs_sd` ≤ 0, either argument is
    /// non-finite, or the combined variance degenerates to a non-finite or
    /// non-positive value.
    ///
    /// # Example
    ///
    /// ```
    /// use creer::conjugate::NormalNormal;
    ///
    /// let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    /// model.update(5.0, 2.0).expect("valid observation");
    ///
    /// // Two updates accumulate precision
    /// model.update(5.0, 2.0).expect("valid observation");
    /// assert!(model.posterior_variance() < 2.0);
    /// ```
    pub fn update(&mut self, obs_mean: f64, obs_sd: f64) -> Result<()> {
        if !obs_mean.is_finite() {
            return Err(CreerError::invalid_parameter("obs_mean", obs_mean, "finite"));
        }
        if !obs_sd.is_finite() || obs_sd <= 0.0 {
            return Err(CreerError::invalid_parameter(
                "obs_sd",
                obs_sd,
                "finite and > 0",
            ));
        }

        let prior_precision = 1.0 / (self.sd * self.sd);
        let obs_precision = 1.0 / (obs_sd * obs_sd);
        let var_post = 1.0 / (prior_precision + obs_precision);
        if !var_post.is_finite() || var_post <= 0.0 {
            return Err(CreerError::invalid_parameter(
                "posterior variance",
                var_post,
                "finite and > 0",
            ));
        }

        let mean_post = var_post * (self.mean * prior_precision + obs_mean * obs_precision);
        if !mean_post.is_finite() {
            return Err(CreerError::invalid_parameter(
                "posterior mean",
                mean_post,
                "finite",
            ));
        }

        self.mean = mean_post;
        self.sd = var_post.sqrt();
        Ok(())
    }

    /// Computes the posterior mean E[μ|data].
    #[must_use]
    pub fn posterior_mean(&self) -> f64 {
        self.mean
    }

    /// Computes the posterior variance Var[μ|data].
    #[must_use]
    pub fn posterior_variance(&self) -> f64 {
        self.sd * self.sd
    }

    /// Computes the posterior standard deviation.
    #[must_use]
    pub fn posterior_sd(&self) -> f64 {
        self.sd
    }

    /// Returns the posterior as a [`Distribution`] value.
    ///
    /// # Example
    ///
    /// ```
    /// use creer::conjugate::NormalNormal;
    ///
    /// let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    /// model.update(5.0, 2.0).expect("valid observation");
    ///
    /// let posterior = model.posterior();
    /// assert!((posterior.mean() - 7.5).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn posterior(&self) -> Distribution {
        // State invariant: mean finite, sd > 0 by construction.
        Distribution::Normal {
            mean: self.mean,
            sd: self.sd,
        }
    }

    /// Posterior predictive distribution for the next aggregate
    /// observation with known noise `obs_sd`.
    ///
    /// Predictive variance adds the observation noise to the posterior
    /// uncertainty: N(μ_post, σ_post² + σ_L²).
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `obs_sd` ≤ 0 or non-finite.
    pub fn posterior_predictive(&self, obs_sd: f64) -> Result<Distribution> {
        if !obs_sd.is_finite() || obs_sd <= 0.0 {
            return Err(CreerError::invalid_parameter(
                "obs_sd",
                obs_sd,
                "finite and > 0",
            ));
        }
        let var = self.sd * self.sd + obs_sd * obs_sd;
        Distribution::normal(self.mean, var.sqrt())
    }

    /// Computes the (1-α) credible interval `mean ± z(α/2) × sd` using the
    /// standard normal quantile function.
    ///
    /// # Arguments
    ///
    /// * `confidence` - Confidence level (e.g., 0.95 for a 95% credible
    ///   interval)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `confidence` ∉ (0, 1).
    ///
    /// # Example
    ///
    /// ```
    /// use creer::conjugate::NormalNormal;
    ///
    /// let mut model = NormalNormal::new(10.0, 2.0).expect("valid prior parameters");
    /// model.update(5.0, 2.0).expect("valid observation");
    ///
    /// let (lower, upper) = model.credible_interval(0.95).expect("valid confidence level");
    /// assert!(lower < 7.5 && 7.5 < upper);
    /// ```
    pub fn credible_interval(&self, confidence: f64) -> Result<(f64, f64)> {
        if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
            return Err(CreerError::invalid_parameter(
                "confidence",
                confidence,
                "in (0, 1)",
            ));
        }
        let z = special::inverse_normal_cdf(1.0 - (1.0 - confidence) / 2.0);
        Ok((self.mean - z * self.sd, self.mean + z * self.sd))
    }
}

/// Beta-Binomial conjugate prior for Bernoulli/Binomial likelihood.
///
/// Models a probability parameter θ in the range `[0,1]` for binary
/// outcomes.
///
/// **Prior**: Beta(α, β)
/// **Likelihood**: Binomial(n, θ)
/// **Posterior**: Beta(α + successes, β + failures)
///
/// # Mathematical Foundation
///
/// Given n trials with h successes:
/// - Prior: p(θ) = Beta(α, β) ∝ θ^(α-1) × (1-θ)^(β-1)
/// - Likelihood: p(h|θ,n) ∝ θ^h × (1-θ)^(n-h)
/// - Posterior: p(θ|h,n) = Beta(α+h, β+n-h)
///
/// # Example
///
/// ```
/// use creer::conjugate::BetaBinomial;
///
/// // Prior favoring θ = 0.5 with the weight of 16 pseudo-trials
/// let mut model = BetaBinomial::new(9.0, 9.0).expect("valid shape parameters");
///
/// // Observe 8 successes in 20 trials
/// model.update(8, 20).expect("successes within trials");
///
/// // Posterior is Beta(17, 21)
/// assert!((model.alpha() - 17.0).abs() < 1e-12);
/// assert!((model.beta() - 21.0).abs() < 1e-12);
/// assert!((model.posterior_mean() - 17.0 / 38.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BetaBinomial {
    /// Shape parameter α
    alpha: f64,
    /// Shape parameter β
    beta: f64,
}

impl BetaBinomial {
    /// Creates a uniform prior Beta(1, 1).
    ///
    /// All probabilities θ in `[0,1]` are equally likely a priori.
    ///
    /// # Example
    ///
    /// ```
    /// use creer::conjugate::BetaBinomial;
    ///
    /// let prior = BetaBinomial::uniform();
    /// assert_eq!(prior.alpha(), 1.0);
    /// assert_eq!(prior.beta(), 1.0);
    /// ```
    #[must_use]
    pub fn uniform() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    /// Creates Jeffrey's prior Beta(0.5, 0.5).
    ///
    /// The non-informative prior that is invariant under
    /// reparameterization.
    #[must_use]
    pub fn jeffreys() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
        }
    }

    /// Creates an informative prior Beta(α, β) from prior belief.
    ///
    /// # Interpretation
    ///
    /// - α > β: success more likely than failure a priori
    /// - α + β: strength of prior belief (higher = stronger)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if α ≤ 0, β ≤ 0, or either is
    /// non-finite.
    ///
    /// # Example
    ///
    /// ```
    /// use creer::conjugate::BetaBinomial;
    ///
    /// // Belief in an 80% rate, with the weight of 100 pseudo-trials
    /// let prior = BetaBinomial::new(80.0, 20.0).expect("valid shape parameters");
    /// assert!((prior.posterior_mean() - 0.8).abs() < 1e-12);
    /// ```
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
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
        Ok(Self { alpha, beta })
    }

    /// Returns the current α parameter.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the current β parameter.
    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Updates the posterior with observed data (Bayesian update).
    ///
    /// The posterior becomes the prior for the next call, so batches of
    /// trials can be folded in sequentially.
    ///
    /// # Arguments
    ///
    /// * `successes` - Number of successful trials
    /// * `trials` - Total number of trials
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `successes > trials`.
    ///
    /// # Example
    ///
    /// ```
    /// use creer::conjugate::BetaBinomial;
    ///
    /// let mut model = BetaBinomial::uniform();
    /// model.update(7, 10).expect("successes within trials");
    ///
    /// // Posterior is Beta(1+7, 1+3) = Beta(8, 4)
    /// assert_eq!(model.alpha(), 8.0);
    /// assert_eq!(model.beta(), 4.0);
    /// ```
    pub fn update(&mut self, successes: u64, trials: u64) -> Result<()> {
        if successes > trials {
            return Err(CreerError::invalid_parameter(
                "successes",
                successes,
                &format!("<= trials ({trials})"),
            ));
        }
        let failures = trials - successes;
        #[allow(clippy::cast_precision_loss)]
        {
            self.alpha += successes as f64;
            self.beta += failures as f64;
        }
        Ok(())
    }

    /// Computes the posterior mean E[θ|data] = α/(α+β).
    #[must_use]
    pub fn posterior_mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Computes the posterior mode (MAP estimate) = (α-1)/(α+β-2).
    ///
    /// # Returns
    ///
    /// - `Some(mode)` if α > 1 and β > 1
    /// - `None` if the distribution is U-shaped or one-sided (no unique
    ///   interior mode)
    #[must_use]
    pub fn posterior_mode(&self) -> Option<f64> {
        if self.alpha > 1.0 && self.beta > 1.0 {
            Some((self.alpha - 1.0) / (self.alpha + self.beta - 2.0))
        } else {
            None
        }
    }

    /// Computes the posterior variance Var[θ|data] = αβ/[(α+β)²(α+β+1)].
    #[must_use]
    pub fn posterior_variance(&self) -> f64 {
        let sum = self.alpha + self.beta;
        (self.alpha * self.beta) / (sum * sum * (sum + 1.0))
    }

    /// Computes the posterior predictive probability of success in the
    /// next trial.
    ///
    /// For Beta-Binomial this integrates over the posterior and equals the
    /// posterior mean.
    #[must_use]
    pub fn posterior_predictive(&self) -> f64 {
        self.posterior_mean()
    }

    /// Returns the posterior as a [`Distribution`] value.
    #[must_use]
    pub fn posterior(&self) -> Distribution {
        // State invariant: alpha > 0, beta > 0 by construction.
        Distribution::Beta {
            alpha: self.alpha,
            beta: self.beta,
        }
    }

    /// Computes the (1-α) credible interval via the Beta quantile
    /// function.
    ///
    /// Quantiles invert the regularized incomplete beta function by
    /// bisection (absolute CDF tolerance 1e-8, max 100 iterations; see
    /// [`crate::special`]).
    ///
    /// # Arguments
    ///
    /// * `confidence` - Confidence level (e.g., 0.95 for a 95% credible
    ///   interval)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `confidence` ∉ (0, 1).
    ///
    /// # Example
    ///
    /// ```
    /// use creer::conjugate::BetaBinomial;
    ///
    /// let mut model = BetaBinomial::uniform();
    /// model.update(7, 10).expect("successes within trials");
    ///
    /// let (lower, upper) = model.credible_interval(0.95).expect("valid confidence level");
    /// let mean = model.posterior_mean();
    /// assert!(lower < mean && mean < upper);
    /// assert!(lower > 0.0 && upper < 1.0);
    /// ```
    pub fn credible_interval(&self, confidence: f64) -> Result<(f64, f64)> {
        if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
            return Err(CreerError::invalid_parameter(
                "confidence",
                confidence,
                "in (0, 1)",
            ));
        }
        let tail = (1.0 - confidence) / 2.0;
        let lower = special::inverse_regularized_incomplete_beta(self.alpha, self.beta, tail);
        let upper = special::inverse_regularized_incomplete_beta(self.alpha, self.beta, 1.0 - tail);
        Ok((lower, upper))
    }
}

#[cfg(test)]
mod tests;
