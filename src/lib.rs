//! boxopt — bound-constrained optimization core.
//!
//! Purpose
//! -------
//! Serve as the crate root. The numerical work lives in [`optimization`];
//! this file only re-exports the most common entry points.
//!
//! Key behaviors
//! -------------
//! - [`BoxConstraintSolver::create`] builds a box-constrained strategy
//!   (`"LBFGSB"` / `"L-BFGS-B"` or `"MMA"`) from JSON parameters.
//! - [`NewtonDirectionSolver`] computes Newton search directions with
//!   regularization and gradient-descent fallbacks.
//! - [`available_solvers`] lists the strategy names for discovery.
//!
//! Conventions
//! -----------
//! - Logging goes through an injected [`Logger`] backed by the `log` crate;
//!   [`Logger::default`] forwards to whatever `log` backend the host
//!   application installs.
//! - Errors are reported as [`OptError`].

pub mod optimization;

pub use crate::optimization::{
    box_constraints::{BoxConstraintSolver, BoxStrategy, available_solvers},
    errors::{OptError, OptResult},
    logging::Logger,
    newton::NewtonDirectionSolver,
};
