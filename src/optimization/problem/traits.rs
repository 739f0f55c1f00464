//! Objective collaborator contract.
//!
//! The Newton direction solver only needs a dense second-order model at the
//! current iterate; the outer loop additionally evaluates the objective and
//! its gradient. Implementors provide `value` and `gradient`; `hessian`
//! falls back to finite differences of the gradient when not overridden.
use crate::optimization::{
    errors::OptResult,
    problem::{
        finite_diff::compute_hessian,
        types::{Cost, Grad, Hessian, Theta},
    },
};

/// Scalar objective `f(x)` to be minimized over a box.
///
/// Required:
/// - `value(&Theta) -> OptResult<Cost>`: evaluate `f(x)`.
/// - `gradient(&Theta) -> OptResult<Grad>`: evaluate `∇f(x)`.
///
/// Optional:
/// - `hessian(&Theta) -> OptResult<Hessian>`: dense `∇²f(x)`. The default
///   differentiates `gradient` numerically (central first, forward on
///   failure) and symmetrizes the result.
///
/// All methods must report invalid inputs as `OptError` values rather than
/// panicking.
pub trait Problem {
    fn value(&self, x: &Theta) -> OptResult<Cost>;
    fn gradient(&self, x: &Theta) -> OptResult<Grad>;

    fn hessian(&self, x: &Theta) -> OptResult<Hessian> {
        compute_hessian(&|t: &Theta| self.gradient(t), x)
    }
}
