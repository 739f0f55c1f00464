//! problem — objective collaborator contract and its helpers.
//!
//! Purpose
//! -------
//! Define what the optimization core needs from an objective: a value, a
//! gradient, and a dense second-order model at the current iterate. The
//! module also carries the canonical numeric aliases, shared validation
//! helpers, a finite-difference Hessian fallback, and an `argmin` adapter.
//!
//! Key behaviors
//! -------------
//! - [`Problem`] is the single trait objectives implement.
//! - [`finite_diff::compute_hessian`] backs the default `Problem::hessian`.
//! - [`adapter::ArgminAdapter`] exposes any `Problem` to `argmin`.
//! - [`validation`] standardizes shape/finiteness checks as `OptError`s.
//!
//! Conventions
//! -----------
//! - Vectors and matrices use the aliases in [`types`].
//! - Errors bubble up as `OptResult<T>`; nothing here panics on bad input.
pub mod adapter;
pub mod finite_diff;
pub mod traits;
pub mod types;
pub mod validation;

pub use self::adapter::ArgminAdapter;
pub use self::traits::Problem;
pub use self::types::{BoundsArray, Cost, Grad, Hessian, Theta};
