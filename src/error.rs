//! Error types for Creer operations.
//!
//! Provides rich error context for library consumers. Every failure mode is
//! a typed variant; numeric degeneracies (zero mass, clipped grids) never
//! propagate as silent NaN or Inf.

use std::fmt;

/// Main error type for Creer operations.
///
/// Covers malformed inputs to closed-form updates, degenerate or truncated
/// grid posteriors, inconsistent data bindings at the sampler boundary, and
/// external solver failures.
///
/// # Examples
///
/// ```
/// use creer::error::CreerError;
///
/// let err = CreerError::InvalidParameter {
///     param: "sd".to_string(),
///     value: "-1".to_string(),
///     constraint: "> 0".to_string(),
/// };
/// assert!(err.to_string().contains("Invalid parameter"));
/// ```
#[derive(Debug)]
pub enum CreerError {
    /// Malformed or out-of-domain input to a closed-form update.
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Prior and likelihood left zero total mass after combination.
    DegeneratePosterior {
        /// What went to zero
        detail: String,
    },

    /// Normalized posterior mass at a grid boundary exceeds the threshold,
    /// signaling the grid likely clipped real mass.
    InsufficientSupport {
        /// Mass observed at the offending boundary point
        boundary_mass: f64,
        /// Configured threshold
        threshold: f64,
    },

    /// Data bound to the sampler boundary has inconsistent dimensions.
    ShapeMismatch {
        /// Binding name
        name: String,
        /// Expected element count from the declared shape
        expected: String,
        /// Actual element count found
        actual: String,
    },

    /// External solver reported an error; the diagnostic message is passed
    /// through verbatim.
    SamplerFailure {
        /// Solver diagnostic, unmodified
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for CreerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreerError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter: {param} = {value}, expected {constraint}"
                )
            }
            CreerError::DegeneratePosterior { detail } => {
                write!(f, "Degenerate posterior: {detail}")
            }
            CreerError::InsufficientSupport {
                boundary_mass,
                threshold,
            } => {
                write!(
                    f,
                    "Insufficient grid support: boundary mass {boundary_mass} exceeds threshold {threshold}"
                )
            }
            CreerError::ShapeMismatch {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch for '{name}': expected {expected} values, got {actual}"
                )
            }
            CreerError::SamplerFailure { message } => {
                write!(f, "Sampler failure: {message}")
            }
            CreerError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CreerError {}

impl From<&str> for CreerError {
    fn from(msg: &str) -> Self {
        CreerError::Other(msg.to_string())
    }
}

impl From<String> for CreerError {
    fn from(msg: String) -> Self {
        CreerError::Other(msg)
    }
}

impl CreerError {
    /// Create an invalid-parameter error from a displayable value.
    #[must_use]
    pub fn invalid_parameter(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for CreerError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<CreerError> for &str {
    fn eq(&self, other: &CreerError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CreerError>;
