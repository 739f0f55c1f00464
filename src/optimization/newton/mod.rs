//! optimization::newton — dense Newton search directions.
//!
//! Purpose
//! -------
//! Turn a Hessian and gradient into a search direction for an outer line
//! search, and keep working when the Hessian is singular or indefinite by
//! stepping down a descent-strategy ladder (Newton, regularized Newton,
//! gradient descent).
//!
//! Key behaviors
//! -------------
//! - [`options::NewtonParams`] reads the `"Newton"` parameter section.
//! - [`strategy::DescentLadder`] owns the current strategy and
//!   regularization weight.
//! - [`direction::NewtonDirectionSolver`] assembles the (regularized)
//!   Hessian, runs the linear backend, and reports a
//!   [`direction::LinearSolveOutcome`] instead of failing on numerical
//!   trouble.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; `tests/integration_box_newton.rs`
//!   drives the solver together with the box-constraint layer.
pub mod direction;
pub mod options;
pub mod strategy;

pub use self::{
    direction::{DirectionStatus, LinearSolveOutcome, NewtonDirectionSolver, NewtonTimings},
    options::NewtonParams,
    strategy::{DescentLadder, DescentStrategy},
};
