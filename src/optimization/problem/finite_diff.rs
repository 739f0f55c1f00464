//! problem::finite_diff — finite-difference Hessians with error capture.
//!
//! Purpose
//! -------
//! Approximate `∇²f(x)` from a fallible gradient map when an objective does
//! not provide an analytic Hessian. The `finitediff` routines need an
//! infallible closure, so gradient errors are captured in a cell, the
//! closure returns `NaN`, and the captured error is surfaced afterwards.
//!
//! Invariants & assumptions
//! ------------------------
//! - The returned matrix is `dim × dim` with finite entries and exactly
//!   symmetric.
//! - Central differences are attempted first; a forward-difference pass is
//!   used only when the central result fails validation.
//!
//! Testing notes
//! -------------
//! - Unit tests check a quadratic with a known Hessian, symmetrization, and
//!   propagation of gradient errors.
use crate::optimization::{
    errors::{OptError, OptResult},
    problem::{
        types::{Grad, Hessian, Theta},
        validation::validate_hessian,
    },
};
use finitediff::FiniteDiff;
use std::cell::RefCell;

/// compute_hessian — finite-difference Hessian with validation and symmetry.
///
/// Parameters
/// ----------
/// - `f`: `&F`
///   Gradient map `x ↦ ∇f(x)`. Errors raised by `f` abort the computation.
/// - `theta`: `&Theta`
///   Point at which the Hessian is approximated; its length defines `dim`.
///
/// Returns
/// -------
/// `OptResult<Hessian>`
///   - `Ok(h)`: finite, symmetrized `dim × dim` matrix.
///   - `Err(e)`: the first error raised by `f`, or the forward-difference
///     validation error when both schemes produce invalid matrices.
///
/// Notes
/// -----
/// - The central-difference validation error is discarded; only the
///   forward-difference result is surfaced.
pub fn compute_hessian<F: Fn(&Theta) -> OptResult<Grad>>(
    f: &F, theta: &Theta,
) -> OptResult<Hessian> {
    let dim = theta.len();
    let closure_err: RefCell<Option<OptError>> = RefCell::new(None);
    let grad_fn = |t: &Theta| -> Grad {
        match f(t) {
            Ok(g) => g,
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                Grad::from_elem(dim, f64::NAN)
            }
        }
    };

    let mut cent_hess = theta.central_hessian(&grad_fn);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    match validate_hessian(&cent_hess, dim) {
        Ok(()) => {
            symmetrize_hess(&mut cent_hess);
            Ok(cent_hess)
        }
        Err(_) => {
            let mut forward_hess = theta.forward_hessian(&grad_fn);
            if let Some(err) = closure_err.take() {
                return Err(err);
            }
            validate_hessian(&forward_hess, dim)?;
            symmetrize_hess(&mut forward_hess);
            Ok(forward_hess)
        }
    }
}

// ---- Helper methods ----

/// Replace each off-diagonal pair with its average; the diagonal is kept.
fn symmetrize_hess(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}
