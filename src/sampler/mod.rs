//! Boundary to an external probabilistic-program sampler.
//!
//! The engine treats the sampler as a black-box numerical solver with a
//! model-specification-in, parameter-draws-out contract. A [`ModelSpec`]
//! carries data bindings, parameter declarations, and an opaque log-density
//! expression that is never parsed or executed here. The adapter's whole
//! obligation is structural: validate shapes before invocation, call the
//! solver exactly once (sampling is expensive and non-idempotent across
//! seeds), and summarize the returned draws per declared parameter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CreerError, Result};

/// A named data array bound into a model, with its declared shape.
///
/// `values` is the row-major flattening; the product of `shape` must equal
/// `values.len()`. An empty `shape` declares a scalar (one value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBinding {
    pub name: String,
    pub shape: Vec<usize>,
    pub values: Vec<f64>,
}

/// Domain constraint on a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Domain {
    /// Any real value.
    Unbounded,
    /// Non-negative reals (scales, rates).
    NonNegative,
    /// The open unit interval (probabilities).
    UnitInterval,
    /// A bounded interval.
    Bounded { lower: f64, upper: f64 },
}

/// A declared model parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    pub domain: Domain,
}

/// Declarative model specification handed to the external solver.
///
/// The `log_density` expression is opaque text linking data bindings and
/// parameter declarations; the engine validates structure only.
///
/// # Example
///
/// ```
/// use creer::sampler::{Domain, ModelSpec};
///
/// let spec = ModelSpec::new("target += normal_lpdf(y | mu, sigma)")
///     .bind_data("y", vec![4], vec![4.2, 5.8, 6.1, 4.5])
///     .declare_parameter("mu", Domain::Unbounded)
///     .declare_parameter("sigma", Domain::NonNegative);
///
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub data: Vec<DataBinding>,
    pub parameters: Vec<ParameterDecl>,
    pub log_density: String,
}

impl ModelSpec {
    /// Creates a specification with the given log-density expression and
    /// no bindings yet.
    #[must_use]
    pub fn new(log_density: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            parameters: Vec::new(),
            log_density: log_density.into(),
        }
    }

    /// Binds a named data array with its declared shape.
    #[must_use]
    pub fn bind_data(mut self, name: impl Into<String>, shape: Vec<usize>, values: Vec<f64>) -> Self {
        self.data.push(DataBinding {
            name: name.into(),
            shape,
            values,
        });
        self
    }

    /// Declares a model parameter with its domain constraint.
    #[must_use]
    pub fn declare_parameter(mut self, name: impl Into<String>, domain: Domain) -> Self {
        self.parameters.push(ParameterDecl {
            name: name.into(),
            domain,
        });
        self
    }

    /// Validates the specification's structure.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if a binding's declared shape does not match its
    ///   value count
    /// - `InvalidParameter` for duplicate binding or parameter names, or
    ///   non-finite bound values
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::BTreeSet::new();
        for binding in &self.data {
            if !seen.insert(binding.name.as_str()) {
                return Err(CreerError::invalid_parameter(
                    "data",
                    &binding.name,
                    "unique binding names",
                ));
            }
            let expected: usize = binding.shape.iter().product();
            if expected != binding.values.len() {
                return Err(CreerError::ShapeMismatch {
                    name: binding.name.clone(),
                    expected: expected.to_string(),
                    actual: binding.values.len().to_string(),
                });
            }
            if let Some(bad) = binding.values.iter().find(|v| !v.is_finite()) {
                return Err(CreerError::invalid_parameter(
                    &binding.name,
                    bad,
                    "finite values",
                ));
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        for param in &self.parameters {
            if !seen.insert(param.name.as_str()) {
                return Err(CreerError::invalid_parameter(
                    "parameters",
                    &param.name,
                    "unique parameter names",
                ));
            }
            if let Domain::Bounded { lower, upper } = param.domain {
                if !lower.is_finite() || !upper.is_finite() || lower >= upper {
                    return Err(CreerError::invalid_parameter(
                        &param.name,
                        format!("[{lower}, {upper}]"),
                        "finite bounds with lower < upper",
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Posterior draws per parameter name, as returned by a solver.
pub type Draws = BTreeMap<String, Vec<f64>>;

/// External probabilistic solver boundary.
///
/// Implementations run to completion synchronously; there is no partial
/// result, cancellation, or timeout at this layer. Solver diagnostics come
/// back as the error string and are surfaced to callers unmodified.
pub trait Sampler {
    /// Runs the solver against a validated specification and returns
    /// posterior draws for every declared parameter.
    fn sample(&mut self, spec: &ModelSpec) -> std::result::Result<Draws, String>;
}

/// Summary statistics for one parameter's posterior draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorSummary {
    /// Point estimate (mean of draws)
    pub mean: f64,
    /// Dispersion estimate (sample standard deviation of draws)
    pub sd: f64,
    /// Requested `(probability, value)` quantile pairs
    pub quantiles: Vec<(f64, f64)>,
}

/// Adapter that validates, invokes, and summarizes a [`Sampler`].
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use creer::sampler::{Domain, Draws, ModelSpec, Sampler, SamplerAdapter};
///
/// struct StubSolver;
///
/// impl Sampler for StubSolver {
///     fn sample(&mut self, _spec: &ModelSpec) -> Result<Draws, String> {
///         let mut draws = BTreeMap::new();
///         draws.insert("mu".to_string(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
///         Ok(draws)
///     }
/// }
///
/// let spec = ModelSpec::new("target += normal_lpdf(y | mu, 1)")
///     .bind_data("y", vec![2], vec![2.5, 3.5])
///     .declare_parameter("mu", Domain::Unbounded);
///
/// let summaries = SamplerAdapter::new()
///     .run(&mut StubSolver, &spec)
///     .expect("stub solver succeeds");
/// assert!((summaries["mu"].mean - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SamplerAdapter {
    quantile_probs: Vec<f64>,
}

impl Default for SamplerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplerAdapter {
    /// Creates an adapter reporting the 2.5%, 50%, and 97.5% quantiles.
    #[must_use]
    pub fn new() -> Self {
        Self {
            quantile_probs: vec![0.025, 0.5, 0.975],
        }
    }

    /// Creates an adapter reporting custom quantiles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `probs` is empty or any probability
    /// is outside (0, 1).
    pub fn with_quantiles(probs: Vec<f64>) -> Result<Self> {
        if probs.is_empty() {
            return Err(CreerError::invalid_parameter(
                "probs",
                "[]",
                "at least one probability",
            ));
        }
        if let Some(bad) = probs.iter().find(|p| !p.is_finite() || **p <= 0.0 || **p >= 1.0) {
            return Err(CreerError::invalid_parameter("probs", bad, "in (0, 1)"));
        }
        Ok(Self {
            quantile_probs: probs,
        })
    }

    /// Validates the spec, invokes the solver exactly once, and summarizes
    /// the draws for every declared parameter.
    ///
    /// The solver is never retried: a failed run surfaces immediately as
    /// `SamplerFailure` carrying the solver's diagnostic verbatim.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` / `InvalidParameter` from [`ModelSpec::validate`]
    /// - `SamplerFailure` if the solver errors, omits a declared
    ///   parameter, returns an undeclared one, returns no draws, or
    ///   returns non-finite draws
    pub fn run(
        &self,
        sampler: &mut dyn Sampler,
        spec: &ModelSpec,
    ) -> Result<BTreeMap<String, PosteriorSummary>> {
        spec.validate()?;

        let draws = sampler
            .sample(spec)
            .map_err(|message| CreerError::SamplerFailure { message })?;

        for name in draws.keys() {
            if !spec.parameters.iter().any(|p| &p.name == name) {
                return Err(CreerError::SamplerFailure {
                    message: format!("solver returned draws for undeclared parameter '{name}'"),
                });
            }
        }

        let mut summaries = BTreeMap::new();
        for param in &spec.parameters {
            let values = draws.get(&param.name).ok_or_else(|| CreerError::SamplerFailure {
                message: format!("solver returned no draws for parameter '{}'", param.name),
            })?;
            if values.is_empty() {
                return Err(CreerError::SamplerFailure {
                    message: format!("solver returned zero draws for parameter '{}'", param.name),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(CreerError::SamplerFailure {
                    message: format!(
                        "solver returned non-finite draws for parameter '{}'",
                        param.name
                    ),
                });
            }
            summaries.insert(
                param.name.clone(),
                summarize_draws(values, &self.quantile_probs),
            );
        }

        Ok(summaries)
    }
}

/// Summarizes a non-empty draw sequence: mean, sample standard deviation,
/// and R-7 interpolated quantiles (Hyndman & Fan 1996), the convention
/// used by R, `NumPy`, and Pandas.
#[must_use]
pub fn summarize_draws(values: &[f64], probs: &[f64]) -> PosteriorSummary {
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sd = if values.len() > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let quantiles = probs
        .iter()
        .map(|&p| (p, r7_quantile(&sorted, p)))
        .collect();

    PosteriorSummary {
        mean,
        sd,
        quantiles,
    }
}

fn r7_quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    #[allow(clippy::cast_precision_loss)]
    let h = (n - 1) as f64 * p;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - h.floor();
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}
