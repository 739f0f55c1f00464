//! box_constraints — bound-constrained optimizer base.
//!
//! Purpose
//! -------
//! Own the feasible region and the per-step cap, expose the projected
//! stationarity measure used to decide convergence, and select a concrete
//! strategy by name.
//!
//! Key behaviors
//! -------------
//! - [`bounds`]: the [`BoundsModel`] with broadcast semantics and
//!   trust-region style step limits.
//! - [`config`]: resolution of the `box_constraints` parameter section.
//! - [`traits`]: the [`BoxConstrainedMethod`] contract and shared core.
//! - [`strategies`]: L-BFGS-B and MMA shells.
//! - [`solver`]: [`BoxStrategy`] name mapping, [`available_solvers`], and
//!   the [`BoxConstraintSolver`] factory.
//!
//! Invariants & assumptions
//! ------------------------
//! - Bounds and caps are immutable after construction; all queries are
//!   pure functions of the iterate.
//! - Unknown strategy names and malformed configuration abort
//!   construction; unconfigured bounds only fail when queried.
//!
//! Testing notes
//! -------------
//! - Each submodule tests its own concern; cross-cutting scenarios live in
//!   `tests/integration_box_newton.rs`.
pub mod bounds;
pub mod config;
pub mod solver;
pub mod strategies;
pub mod traits;

pub use self::bounds::{BoundsModel, MaxChange};
pub use self::config::{BoundsSpec, BoxConstraintConfig};
pub use self::solver::{BoxConstraintSolver, BoxStrategy, available_solvers};
pub use self::traits::{BoxConstrainedMethod, BoxConstraintCore};
