//! problem::types — shared numeric aliases.
//!
//! Purpose
//! -------
//! Centralize the core numeric types used across the optimization core so
//! the rest of the code can stay agnostic to the concrete `ndarray`
//! containers and can evolve if the backing representation changes.
//!
//! Invariants & assumptions
//! ------------------------
//! - All iterates, gradients, and directions are `ndarray` vectors over
//!   `f64` with length equal to the number of optimization variables `N`.
//! - `Hessian` is a dense square `N × N` matrix; `BoundsArray` is `rows × 2`
//!   with `rows ∈ {0, 1, N}`.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases; there are no dedicated unit
//!   tests.
use ndarray::{Array1, Array2};

/// Current iterate `x`.
pub type Theta = Array1<f64>;

/// Gradient vector `∇f(x)`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Dense second-order model `∇²f(x)`; `N × N` for `N = Theta.len()`.
pub type Hessian = Array2<f64>;

/// Bounds table: column 0 holds lower bounds, column 1 upper bounds.
pub type BoundsArray = Array2<f64>;

/// Scalar objective value.
pub type Cost = f64;
