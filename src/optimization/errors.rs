use argmin::core::{ArgminError, Error};

use crate::knots::errors::KnotError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- FitOptions ----
    /// Relative simplex step needs to be positive and finite.
    InvalidSimplexStep {
        step: f64,
        reason: &'static str,
    },
    /// Absolute step for zero coordinates needs to be positive and finite.
    InvalidZeroStep {
        step: f64,
        reason: &'static str,
    },
    /// Standard-deviation tolerance needs to be positive and finite.
    InvalidSdTolerance {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },

    // ---- Initial guess ----
    /// Nothing to optimize.
    EmptyTheta,

    /// Initial guess must have finite values.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Theta hat is missing
    MissingThetaHat,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Model ----
    /// Flex-knot error raised while evaluating the log-likelihood.
    Model(KnotError),

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- FitOptions ----
            OptError::InvalidSimplexStep { step, reason } => {
                write!(f, "Invalid simplex step {step}: {reason}")
            }
            OptError::InvalidZeroStep { step, reason } => {
                write!(f, "Invalid zero-coordinate step {step}: {reason}")
            }
            OptError::InvalidSdTolerance { tol, reason } => {
                write!(f, "Invalid standard-deviation tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }

            // ---- Initial guess ----
            OptError::EmptyTheta => {
                write!(f, "Initial parameter vector is empty; nothing to optimize")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid theta input at index {index}: {value}, must be finite")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingThetaHat => {
                write!(f, "Missing estimated parameters (theta hat)")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Model ----
            OptError::Model(err) => write!(f, "Model error: {err}"),

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

/// Recover crate errors that crossed the argmin boundary before falling back
/// to argmin's own error kinds.
impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        let original_err = match original_err.downcast::<KnotError>() {
            Ok(knot_err) => return OptError::Model(knot_err),
            Err(err) => err,
        };
        match original_err.downcast::<ArgminError>() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<KnotError> for OptError {
    fn from(err: KnotError) -> Self {
        OptError::Model(err)
    }
}

/// Surface optimizer failures to Python as `ValueError`s.
#[cfg(feature = "python-bindings")]
impl From<OptError> for pyo3::PyErr {
    fn from(err: OptError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knots::errors::StructureError;

    #[test]
    // Purpose
    // -------
    // Errors that were boxed into argmin's error type come back unchanged.
    //
    // Given
    // -----
    // - An `OptError`, a `KnotError`, and an `ArgminError` converted into
    //   `argmin::core::Error`.
    //
    // Expect
    // ------
    // - The original `OptError`, `OptError::Model(..)`, and the matching
    //   wrapper variant.
    fn argmin_errors_round_trip_into_opt_error() {
        let boxed: Error = OptError::NonFiniteCost { value: f64::INFINITY }.into();
        assert_eq!(OptError::from(boxed), OptError::NonFiniteCost { value: f64::INFINITY });

        let knot = KnotError::Structure(StructureError::MissingCount);
        let boxed: Error = knot.clone().into();
        assert_eq!(OptError::from(boxed), OptError::Model(knot));

        let boxed: Error =
            ArgminError::InvalidParameter { text: "bad simplex".to_string() }.into();
        assert_eq!(
            OptError::from(boxed),
            OptError::InvalidParameter { text: "bad simplex".to_string() }
        );
    }
}
