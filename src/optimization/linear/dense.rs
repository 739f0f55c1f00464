//! linear::dense — dense nalgebra backends.
//!
//! Purpose
//! -------
//! Provide the two dense factorizations the Newton direction solver can
//! use: a Cholesky (`LLᵀ`) backend that only accepts symmetric positive
//! definite matrices, and a partial-pivoting LU backend that accepts any
//! non-singular square matrix.
//!
//! Key behaviors
//! -------------
//! - Matrices arrive as `ndarray` [`Hessian`]s and are copied into a
//!   `nalgebra::DMatrix` via [`fill_dmatrix`] before factorization.
//! - [`DenseCholesky::factorize`] fails with
//!   [`LinearSolverError::NotPositiveDefinite`] when nalgebra cannot take
//!   the square root of a pivot (zero or negative).
//! - [`DenseLu::factorize`] fails with [`LinearSolverError::Singular`] when
//!   `U` has an exactly zero diagonal entry.
//! - Factorization and solve wall times are recorded in seconds and
//!   reported through [`LinearSolver::info`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `analyze_pattern` must be called with the matrix size before
//!   `factorize`; later calls are checked against that size.
//! - A failed `factorize` discards any previous factorization, so a
//!   following `solve` reports [`LinearSolverError::NotFactorized`].
use crate::optimization::{
    linear::traits::{LinearSolver, LinearSolverError, LinearSolverInfo, SolveStatus},
    problem::types::Hessian,
};
use nalgebra::{
    DMatrix, DVector, Dyn,
    linalg::{Cholesky, LU},
};
use ndarray::Array1;
use std::time::Instant;

/// Bookkeeping shared by the dense backends.
#[derive(Debug, Clone, Default)]
struct DenseState {
    size: usize,
    status: Option<SolveStatus>,
    factorize_seconds: f64,
    solve_seconds: f64,
}

impl DenseState {
    fn analyze(&mut self, matrix: &Hessian, size: usize) -> Result<(), LinearSolverError> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(LinearSolverError::NotSquare { rows, cols });
        }
        if rows != size {
            return Err(LinearSolverError::DimensionMismatch { expected: size, found: rows });
        }
        self.size = size;
        self.status = Some(SolveStatus::Analyzed);
        self.factorize_seconds = 0.0;
        self.solve_seconds = 0.0;
        Ok(())
    }

    fn check_matrix(&self, matrix: &Hessian) -> Result<(), LinearSolverError> {
        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(LinearSolverError::NotSquare { rows, cols });
        }
        if rows != self.size {
            return Err(LinearSolverError::DimensionMismatch { expected: self.size, found: rows });
        }
        Ok(())
    }

    fn check_vectors(&self, rhs: &Array1<f64>, out: &Array1<f64>) -> Result<(), LinearSolverError> {
        for len in [rhs.len(), out.len()] {
            if len != self.size {
                return Err(LinearSolverError::DimensionMismatch {
                    expected: self.size,
                    found: len,
                });
            }
        }
        Ok(())
    }

    fn info(&self, solver: &'static str) -> LinearSolverInfo {
        LinearSolverInfo {
            solver,
            size: self.size,
            status: self.status.unwrap_or(SolveStatus::Empty),
            factorize_seconds: self.factorize_seconds,
            solve_seconds: self.solve_seconds,
        }
    }
}

/// Dense `LLᵀ` backend for symmetric positive definite systems.
#[derive(Debug, Clone, Default)]
pub struct DenseCholesky {
    state: DenseState,
    factor: Option<Cholesky<f64, Dyn>>,
}

impl DenseCholesky {
    pub const NAME: &'static str = "Cholesky";

    pub fn new() -> Self {
        Self::default()
    }
}

impl LinearSolver for DenseCholesky {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn analyze_pattern(&mut self, matrix: &Hessian, size: usize) -> Result<(), LinearSolverError> {
        self.factor = None;
        self.state.analyze(matrix, size)
    }

    fn factorize(&mut self, matrix: &Hessian) -> Result<(), LinearSolverError> {
        self.factor = None;
        self.state.check_matrix(matrix)?;
        let mut dense = DMatrix::<f64>::zeros(self.state.size, self.state.size);
        fill_dmatrix(matrix, &mut dense);

        let start = Instant::now();
        let factor = dense.cholesky();
        self.state.factorize_seconds = start.elapsed().as_secs_f64();

        self.factor = Some(factor.ok_or(LinearSolverError::NotPositiveDefinite)?);
        self.state.status = Some(SolveStatus::Factorized);
        Ok(())
    }

    fn solve(&mut self, rhs: &Array1<f64>, out: &mut Array1<f64>) -> Result<(), LinearSolverError> {
        let factor = self.factor.as_ref().ok_or(LinearSolverError::NotFactorized)?;
        self.state.check_vectors(rhs, out)?;

        let start = Instant::now();
        let solution = factor.solve(&DVector::from_iterator(rhs.len(), rhs.iter().copied()));
        self.state.solve_seconds = start.elapsed().as_secs_f64();

        copy_solution(&solution, out);
        self.state.status = Some(SolveStatus::Solved);
        Ok(())
    }

    fn info(&self) -> LinearSolverInfo {
        self.state.info(Self::NAME)
    }
}

/// Dense partial-pivoting LU backend for general non-singular systems.
#[derive(Debug, Clone, Default)]
pub struct DenseLu {
    state: DenseState,
    factor: Option<LU<f64, Dyn, Dyn>>,
}

impl DenseLu {
    pub const NAME: &'static str = "LU";

    pub fn new() -> Self {
        Self::default()
    }
}

impl LinearSolver for DenseLu {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn analyze_pattern(&mut self, matrix: &Hessian, size: usize) -> Result<(), LinearSolverError> {
        self.factor = None;
        self.state.analyze(matrix, size)
    }

    fn factorize(&mut self, matrix: &Hessian) -> Result<(), LinearSolverError> {
        self.factor = None;
        self.state.check_matrix(matrix)?;
        let mut dense = DMatrix::<f64>::zeros(self.state.size, self.state.size);
        fill_dmatrix(matrix, &mut dense);

        let start = Instant::now();
        let factor = dense.lu();
        self.state.factorize_seconds = start.elapsed().as_secs_f64();

        if !factor.is_invertible() {
            return Err(LinearSolverError::Singular);
        }
        self.factor = Some(factor);
        self.state.status = Some(SolveStatus::Factorized);
        Ok(())
    }

    fn solve(&mut self, rhs: &Array1<f64>, out: &mut Array1<f64>) -> Result<(), LinearSolverError> {
        let factor = self.factor.as_ref().ok_or(LinearSolverError::NotFactorized)?;
        self.state.check_vectors(rhs, out)?;

        let start = Instant::now();
        let solution = factor
            .solve(&DVector::from_iterator(rhs.len(), rhs.iter().copied()))
            .ok_or(LinearSolverError::Singular)?;
        self.state.solve_seconds = start.elapsed().as_secs_f64();

        copy_solution(&solution, out);
        self.state.status = Some(SolveStatus::Solved);
        Ok(())
    }

    fn info(&self) -> LinearSolverInfo {
        self.state.info(Self::NAME)
    }
}

// ---- Helper methods ----

/// Copy a square `ndarray` matrix into a preallocated `DMatrix` of the
/// same size, entry by entry.
fn fill_dmatrix(matrix: &Hessian, dense: &mut DMatrix<f64>) {
    let n = matrix.ncols();
    for j in 0..n {
        for i in 0..n {
            dense[(i, j)] = matrix[[i, j]];
        }
    }
}

fn copy_solution(solution: &DVector<f64>, out: &mut Array1<f64>) {
    for (dst, src) in out.iter_mut().zip(solution.iter()) {
        *dst = *src;
    }
}
