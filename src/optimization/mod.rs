//! optimization — box constraints, Newton directions, and the shared error
//! surface.
//!
//! Purpose
//! -------
//! Provide the building blocks of a bound-constrained optimizer that an
//! outer iteration loop (line search, L-BFGS-B or MMA update) is written
//! against: feasible bounds with per-step caps, the projected-gradient
//! stationarity measure, and dense Newton search directions that degrade
//! gracefully when the Hessian cannot be factorized.
//!
//! Key behaviors
//! -------------
//! - `box_constraints`: resolve bounds and step caps from a JSON parameter
//!   tree, select a strategy by name, and answer bound / step-cap /
//!   projected-gradient queries.
//! - `newton`: assemble a (regularized) Hessian, solve for a direction via
//!   a pluggable `linear` backend, and step down the descent-strategy
//!   ladder on failure.
//! - `problem`: the objective trait, `argmin` adapter, finite-difference
//!   Hessian fallback, and input validation.
//! - `errors`: one error enum (`OptError`) and result alias
//!   (`OptResult<T>`) for every fallible public operation.
//! - `logging`: the injected logger handle every solver receives at
//!   construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every vector argument has length `N`, the number of optimization
//!   variables; mismatches are reported as `OptError`, never panics.
//! - Configuration problems abort construction; numerical failures of the
//!   linear backend do not, they degrade the descent strategy instead.
//!
//! Conventions
//! -----------
//! - Parameter trees are `serde_json::Value`s; each component reads only its
//!   own section (`box_constraints`, `Newton`, `L-BFGS-B`) and ignores
//!   unknown keys.
//! - The crate performs no file I/O and installs no global logger.
//!
//! Downstream usage
//! ----------------
//! - Import the curated surface with `use boxopt::optimization::prelude::*;`
//!   or depend on the submodules directly.
//!
//! Testing notes
//! -------------
//! - Unit tests live in each submodule; `tests/integration_box_newton.rs`
//!   exercises configuration, bounds, and Newton directions together.

pub mod box_constraints;
pub mod errors;
pub mod linear;
pub mod logging;
pub mod newton;
pub mod problem;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use boxopt::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::box_constraints::{
        BoundsModel, BoxConstrainedMethod, BoxConstraintSolver, BoxStrategy, MaxChange,
        available_solvers,
    };
    pub use super::errors::{OptError, OptResult};
    pub use super::linear::{LinearSolver, LinearSolverError, LinearSolverInfo, create_linear_solver};
    pub use super::logging::{Logger, RecordingLog};
    pub use super::newton::{
        DescentStrategy, DirectionStatus, LinearSolveOutcome, NewtonDirectionSolver,
    };
    pub use super::problem::{ArgminAdapter, Grad, Hessian, Problem, Theta};
}
