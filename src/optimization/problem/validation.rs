//! Validation helpers shared by the objective, bounds, and Newton layers.
//!
//! - **Iterate validation**: [`validate_theta`] enforces finite entries.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Hessian validation**: [`validate_hessian`] enforces `dim × dim`
//!   shape and finite entries.
//! - **Objective values**: [`validate_value`] checks objective outputs for
//!   finiteness.
//! - **Characteristic length**: [`validate_characteristic_length`].
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants.
use crate::optimization::{
    errors::{OptError, OptResult},
    problem::types::{Grad, Hessian, Theta},
};

/// Validate that every entry of an iterate is finite.
///
/// # Errors
/// [`OptError::InvalidThetaInput`] for the first NaN or infinite entry.
pub fn validate_theta(x: &Theta) -> OptResult<()> {
    match x.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(OptError::InvalidThetaInput { index, value: x[index] }),
        None => Ok(()),
    }
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate that a scalar objective value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

/// Validate the shape and entries of a Hessian matrix.
///
/// # Errors
/// - [`OptError::HessianDimMismatch`] if dimensions do not match `dim`.
/// - [`OptError::InvalidHessian`] if any entry is non-finite, with offending
///   row/col indices and value.
pub fn validate_hessian(hessian: &Hessian, dim: usize) -> OptResult<()> {
    if hessian.nrows() != dim || hessian.ncols() != dim {
        return Err(OptError::HessianDimMismatch {
            expected: dim,
            found: (hessian.nrows(), hessian.ncols()),
        });
    }
    for ((i, j), &value) in hessian.indexed_iter() {
        if !value.is_finite() {
            return Err(OptError::InvalidHessian { row: i, col: j, value });
        }
    }
    Ok(())
}

/// Validate the characteristic length used to scale tolerances.
///
/// # Errors
/// Returns [`OptError::InvalidCharacteristicLength`] unless the value is
/// finite and strictly positive.
pub fn validate_characteristic_length(value: f64) -> OptResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(OptError::InvalidCharacteristicLength { value });
    }
    Ok(())
}
