//! optimization::errors — unified error surface for the optimization core.
//!
//! Every fallible public operation returns [`OptResult<T>`]. Backend
//! factorization failures are deliberately *not* represented here: they are
//! caught inside the Newton direction solver and converted into a degraded
//! outcome (see `newton::LinearSolveOutcome`).
use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Bounds ----
    /// Bounds row count matches neither the variable count nor the
    /// broadcast `1 × 2` form.
    InvalidBounds {
        rows: usize,
        n_vars: usize,
    },

    /// Lower bound exceeds upper bound for a given variable.
    BoundsOrder {
        index: usize,
        lower: f64,
        upper: f64,
    },

    /// Lower and upper bound arrays have different lengths.
    BoundsLengthMismatch {
        lower: usize,
        upper: usize,
    },

    /// Bound entries must not be NaN.
    NonFiniteBound {
        index: usize,
        value: f64,
    },

    // ---- Max change ----
    /// Neither a per-variable cap of matching length nor a positive scalar
    /// cap is configured.
    InvalidMaxChange {
        n_vars: usize,
        reason: &'static str,
    },

    /// Max-change entries must be finite and non-negative.
    InvalidMaxChangeEntry {
        index: usize,
        value: f64,
    },

    // ---- Solver selection ----
    /// Unknown box-constraint strategy name.
    UnrecognizedSolver {
        name: String,
    },

    /// Unknown linear backend name.
    UnrecognizedLinearSolver {
        name: String,
    },

    // ---- Configuration ----
    /// Configuration variant that is recognized but not supported.
    UnsupportedConfiguration {
        key: &'static str,
        reason: String,
    },

    /// Configuration value with the wrong type or an out-of-range value.
    InvalidConfiguration {
        key: &'static str,
        reason: String,
    },

    /// Characteristic length must be finite and strictly positive.
    InvalidCharacteristicLength {
        value: f64,
    },

    // ---- Iterate / gradient ----
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Iterate entries must be finite.
    InvalidThetaInput {
        index: usize,
        value: f64,
    },

    /// Direction buffer has the wrong length.
    DirectionDimMismatch {
        expected: usize,
        found: usize,
    },

    // ---- Objective ----
    /// Objective returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Hessian ----
    /// Hessian matrix dimensions do not match parameter dimensions.
    HessianDimMismatch {
        expected: usize,
        found: (usize, usize),
    },

    /// Hessian values need to be finite.
    InvalidHessian {
        row: usize,
        col: usize,
        value: f64,
    },

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
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Bounds ----
            OptError::InvalidBounds { rows, n_vars } => {
                write!(
                    f,
                    "Invalid bounds: matrix has {rows} rows, expected {n_vars} or a single broadcast row"
                )
            }
            OptError::BoundsOrder { index, lower, upper } => {
                write!(f, "Invalid bounds at index {index}: lower {lower} exceeds upper {upper}")
            }
            OptError::BoundsLengthMismatch { lower, upper } => {
                write!(f, "Bounds length mismatch: lower has {lower} entries, upper has {upper}")
            }
            OptError::NonFiniteBound { index, value } => {
                write!(f, "Invalid bound at index {index}: {value}, must not be NaN")
            }

            // ---- Max change ----
            OptError::InvalidMaxChange { n_vars, reason } => {
                write!(f, "Invalid max change for {n_vars} variables: {reason}")
            }
            OptError::InvalidMaxChangeEntry { index, value } => {
                write!(
                    f,
                    "Invalid max change at index {index}: {value}, must be finite and non-negative"
                )
            }

            // ---- Solver selection ----
            OptError::UnrecognizedSolver { name } => {
                write!(f, "Unrecognized solver type: {name}")
            }
            OptError::UnrecognizedLinearSolver { name } => {
                write!(f, "Unrecognized linear solver type: {name}")
            }

            // ---- Configuration ----
            OptError::UnsupportedConfiguration { key, reason } => {
                write!(f, "Unsupported configuration for '{key}': {reason}")
            }
            OptError::InvalidConfiguration { key, reason } => {
                write!(f, "Invalid configuration for '{key}': {reason}")
            }
            OptError::InvalidCharacteristicLength { value } => {
                write!(f, "Invalid characteristic length {value}: must be finite and > 0")
            }

            // ---- Iterate / gradient ----
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }
            OptError::InvalidThetaInput { index, value } => {
                write!(f, "Invalid iterate at index {index}: {value}, must be finite")
            }
            OptError::DirectionDimMismatch { expected, found } => {
                write!(f, "Direction dimension mismatch: expected {expected}, found {found}")
            }

            // ---- Objective ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Hessian ----
            OptError::HessianDimMismatch { expected, found } => {
                write!(
                    f,
                    "Hessian dimension mismatch: expected ({expected}, {expected}), found {found:?}"
                )
            }
            OptError::InvalidHessian { row, col, value } => {
                write!(f, "Invalid Hessian at ({row}, {col}): {value}, must be finite")
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
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

/// Recover an [`OptError`] from an `argmin` error.
///
/// Errors that originated in this crate and were boxed on the way into
/// `argmin` are unwrapped unchanged; native `argmin` errors are mapped onto
/// their wrapper variants.
impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}
