//! optimization::linear — linear-system backends for Newton steps.
//!
//! Purpose
//! -------
//! Solve `H · d = −g` for a dense Hessian `H`. The [`LinearSolver`] trait is
//! the seam the Newton direction solver is written against; concrete
//! backends live in [`dense`] and are selected by name through
//! [`create_linear_solver`].
//!
//! Key behaviors
//! -------------
//! - Backends never panic on bad matrices: singular or indefinite input is
//!   reported as a [`LinearSolverError`].
//! - Each backend reports a serializable [`LinearSolverInfo`] record after a
//!   solve, collected by the caller as diagnostics.
//!
//! Downstream usage
//! ----------------
//! - `newton::NewtonDirectionSolver` builds its backend from the `solver`
//!   key of the linear parameters, or accepts any boxed backend directly.
pub mod dense;
pub mod factory;
pub mod traits;

pub use self::{
    dense::{DenseCholesky, DenseLu},
    factory::{
        DEFAULT_LINEAR_SOLVER, LinearSolverKind, available_linear_solvers, create_linear_solver,
        linear_solver_kind_from_params,
    },
    traits::{LinearSolver, LinearSolverError, LinearSolverInfo, SolveStatus},
};
