//! Linear backend contract.
//!
//! The Newton direction solver calls, in order, `analyze_pattern`,
//! `factorize`, and `solve`, then reads `info` after a successful solve.
//! Any step may fail with a [`LinearSolverError`]; the caller decides how
//! to recover.
use crate::optimization::problem::types::Hessian;
use ndarray::Array1;
use serde::Serialize;
use std::fmt;

/// Failure reported by a linear backend.
#[derive(Debug, Clone, PartialEq)]
pub enum LinearSolverError {
    /// Matrix is not (numerically) symmetric positive definite.
    NotPositiveDefinite,
    /// Matrix is singular.
    Singular,
    /// `solve` called before a successful `factorize`.
    NotFactorized,
    /// Matrix or vector size differs from the analyzed pattern.
    DimensionMismatch { expected: usize, found: usize },
    /// Matrix is not square.
    NotSquare { rows: usize, cols: usize },
}

impl std::error::Error for LinearSolverError {}

impl fmt::Display for LinearSolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinearSolverError::NotPositiveDefinite => {
                write!(f, "matrix is not positive definite")
            }
            LinearSolverError::Singular => write!(f, "matrix is singular"),
            LinearSolverError::NotFactorized => write!(f, "solve called before factorize"),
            LinearSolverError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            LinearSolverError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square: {rows}x{cols}")
            }
        }
    }
}

/// Lifecycle position of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    Empty,
    Analyzed,
    Factorized,
    Solved,
}

/// Diagnostic record reported after a solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearSolverInfo {
    pub solver: &'static str,
    pub size: usize,
    pub status: SolveStatus,
    pub factorize_seconds: f64,
    pub solve_seconds: f64,
}

/// Dense linear-system backend.
pub trait LinearSolver: fmt::Debug {
    /// Canonical backend name.
    fn name(&self) -> &'static str;

    /// Record the sparsity pattern / size of the upcoming matrix.
    fn analyze_pattern(&mut self, matrix: &Hessian, size: usize) -> Result<(), LinearSolverError>;

    /// Factorize `matrix`. Fails when the matrix cannot be factorized by
    /// this backend (singular, indefinite, ...).
    fn factorize(&mut self, matrix: &Hessian) -> Result<(), LinearSolverError>;

    /// Solve `A · out = rhs` with the last factorization.
    fn solve(&mut self, rhs: &Array1<f64>, out: &mut Array1<f64>) -> Result<(), LinearSolverError>;

    /// Diagnostics of the last factorize/solve cycle.
    fn info(&self) -> LinearSolverInfo;
}
