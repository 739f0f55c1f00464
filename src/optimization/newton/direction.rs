//! newton::direction — Newton search directions with graceful degradation.
//!
//! Purpose
//! -------
//! Compute `d` solving `(H + w·I) · d = −g` for the current iterate, where
//! `H` is the objective's Hessian and `w` the regularization weight of the
//! current descent strategy, and decide whether the step is usable.
//!
//! Key behaviors
//! -------------
//! - [`NewtonDirectionSolver::solve_linear_system`] times Hessian assembly
//!   and the linear solve separately. When the backend fails, the solver
//!   moves one rung down the descent ladder, logs a warning naming the new
//!   strategy, leaves `direction` untouched and returns
//!   [`LinearSolveOutcome::Degraded`] (whose residual reads as NaN).
//! - [`NewtonDirectionSolver::compute_update_direction`] wraps the solve
//!   with acceptance checks: large residuals and non-descent directions
//!   degrade the strategy once and are reported as
//!   [`DirectionStatus::Rejected`]. Under gradient descent the direction is
//!   simply `−g`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each backend failure triggers exactly one strategy increase and one
//!   warning.
//! - Diagnostics are append-only: one [`LinearSolverInfo`] per successful
//!   solve, in call order.
//! - Invalid objective output (wrong shape, non-finite Hessian) is an
//!   [`OptError`], not a degradation.
//!
//! Downstream usage
//! ----------------
//! - An outer line search calls `compute_update_direction` each iteration,
//!   retries after `Rejected`, and calls `reset` after an accepted step if
//!   it wants to return to plain Newton.
use crate::optimization::{
    errors::{OptError, OptResult},
    linear::{LinearSolver, LinearSolverError, LinearSolverInfo, linear_solver_kind_from_params},
    logging::Logger,
    newton::{
        options::NewtonParams,
        strategy::{DescentLadder, DescentStrategy},
    },
    problem::{
        traits::Problem,
        types::{Grad, Hessian, Theta},
        validation::{validate_characteristic_length, validate_grad, validate_hessian},
    },
};
use argmin_math::ArgminL2Norm;
use ndarray::Array1;
use std::time::{Duration, Instant};

/// Smallest relative residual tolerance, scaled by `‖g‖`.
const RELATIVE_RESIDUAL_FLOOR: f64 = 1e-8;

/// Result of one linear solve.
#[derive(Debug, Clone, PartialEq)]
pub enum LinearSolveOutcome {
    /// The backend succeeded; `residual = ‖H·d + g‖₂` on the regularized `H`.
    Solved { residual: f64 },
    /// The backend failed and the descent strategy moved to `strategy`.
    Degraded { reason: LinearSolverError, strategy: DescentStrategy },
}

impl LinearSolveOutcome {
    /// Residual of the solve, NaN when degraded.
    pub fn residual(&self) -> f64 {
        match self {
            LinearSolveOutcome::Solved { residual } => *residual,
            LinearSolveOutcome::Degraded { .. } => f64::NAN,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, LinearSolveOutcome::Solved { .. })
    }
}

/// Verdict of [`NewtonDirectionSolver::compute_update_direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionStatus {
    Accepted,
    Rejected,
}

/// Accumulated wall time of the two solve phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NewtonTimings {
    pub assembly_time: Duration,
    pub inverting_time: Duration,
}

/// Dense Newton direction solver owning its linear backend.
#[derive(Debug)]
pub struct NewtonDirectionSolver {
    params: NewtonParams,
    ladder: DescentLadder,
    characteristic_length: f64,
    backend: Box<dyn LinearSolver>,
    internal_solver_info: Vec<LinearSolverInfo>,
    timings: NewtonTimings,
    logger: Logger,
}

impl NewtonDirectionSolver {
    /// Build a solver from parameter trees.
    ///
    /// Reads the `"Newton"` section of `solver_params` and the `solver` key
    /// of `linear_solver_params` (default `"Cholesky"`).
    ///
    /// # Errors
    /// - [`OptError::InvalidCharacteristicLength`] unless the length is
    ///   finite and positive.
    /// - [`OptError::InvalidConfiguration`] for a malformed `"Newton"`
    ///   section or a non-string backend name.
    /// - [`OptError::UnrecognizedLinearSolver`] for an unknown backend.
    pub fn new(
        solver_params: &serde_json::Value, linear_solver_params: &serde_json::Value,
        characteristic_length: f64, logger: Logger,
    ) -> OptResult<Self> {
        let backend = linear_solver_kind_from_params(linear_solver_params)?.build();
        Self::with_backend(solver_params, backend, characteristic_length, logger)
    }

    /// Build a solver around an explicit backend.
    ///
    /// # Errors
    /// As [`NewtonDirectionSolver::new`], minus backend resolution.
    pub fn with_backend(
        solver_params: &serde_json::Value, backend: Box<dyn LinearSolver>,
        characteristic_length: f64, logger: Logger,
    ) -> OptResult<Self> {
        validate_characteristic_length(characteristic_length)?;
        let params = NewtonParams::from_params(solver_params)?;
        logger.debug(format_args!(
            "Newton direction solver using linear backend {}",
            backend.name()
        ));
        Ok(Self {
            params,
            ladder: DescentLadder::new(&params),
            characteristic_length,
            backend,
            internal_solver_info: Vec::new(),
            timings: NewtonTimings::default(),
            logger,
        })
    }

    /// Solve `(H + w·I) · d = −g` into `direction`.
    ///
    /// Parameters
    /// ----------
    /// - `problem`: supplies `H = problem.hessian(x)`.
    /// - `x`: current iterate, length `N`.
    /// - `grad`: gradient at `x`, length `N`.
    /// - `direction`: output buffer of length `N`; written only on success.
    ///
    /// Returns
    /// -------
    /// [`LinearSolveOutcome::Solved`] with the residual, or
    /// [`LinearSolveOutcome::Degraded`] after a backend failure.
    ///
    /// # Errors
    /// - Errors from `problem.hessian`.
    /// - [`OptError::GradientDimMismatch`], [`OptError::InvalidGradient`],
    ///   [`OptError::DirectionDimMismatch`] for malformed inputs.
    /// - [`OptError::HessianDimMismatch`], [`OptError::InvalidHessian`] for
    ///   a malformed Hessian.
    pub fn solve_linear_system<P: Problem + ?Sized>(
        &mut self, problem: &P, x: &Theta, grad: &Grad, direction: &mut Array1<f64>,
    ) -> OptResult<LinearSolveOutcome> {
        let n = x.len();
        validate_grad(grad, n)?;
        check_direction(direction, n)?;

        let start = Instant::now();
        let hessian = self.assemble(problem, x)?;
        let elapsed = start.elapsed();
        self.timings.assembly_time += elapsed;
        self.logger.debug(format_args!("assembly time {:.3e}s", elapsed.as_secs_f64()));

        let rhs = grad.mapv(|g| -g);
        let mut solution = Array1::zeros(n);
        let start = Instant::now();
        let result = run_backend(self.backend.as_mut(), &hessian, &rhs, &mut solution);
        let elapsed = start.elapsed();
        self.timings.inverting_time += elapsed;
        self.logger.debug(format_args!("linear solve {:.3e}s", elapsed.as_secs_f64()));

        if let Err(reason) = result {
            let strategy = self.ladder.increase();
            self.logger.warn(format_args!(
                "Unable to factorize Hessian: \"{reason}\"; reverting to {strategy}"
            ));
            return Ok(LinearSolveOutcome::Degraded { reason, strategy });
        }

        let residual = (hessian.dot(&solution) + grad).l2_norm();
        direction.assign(&solution);
        self.internal_solver_info.push(self.backend.info());
        Ok(LinearSolveOutcome::Solved { residual })
    }

    /// Compute the next search direction and decide whether to use it.
    ///
    /// `direction` is overwritten only when the result is
    /// [`DirectionStatus::Accepted`].
    ///
    /// # Errors
    /// As [`NewtonDirectionSolver::solve_linear_system`].
    pub fn compute_update_direction<P: Problem + ?Sized>(
        &mut self, problem: &P, x: &Theta, grad: &Grad, direction: &mut Array1<f64>,
    ) -> OptResult<DirectionStatus> {
        let n = x.len();
        if self.ladder.strategy() == DescentStrategy::GradientDescent {
            validate_grad(grad, n)?;
            check_direction(direction, n)?;
            direction.assign(&grad.mapv(|g| -g));
            return Ok(DirectionStatus::Accepted);
        }

        let mut candidate = Array1::zeros(direction.len());
        let residual = match self.solve_linear_system(problem, x, grad, &mut candidate)? {
            LinearSolveOutcome::Solved { residual } => residual,
            LinearSolveOutcome::Degraded { .. } => return Ok(DirectionStatus::Rejected),
        };

        let tolerance = (RELATIVE_RESIDUAL_FLOOR * grad.l2_norm())
            .max(self.params.residual_tolerance)
            * self.characteristic_length;
        if residual.is_nan() || residual > tolerance {
            let strategy = self.ladder.increase();
            self.logger.warn(format_args!(
                "large (or nan) linear solve residual {residual:.3e} (tolerance {tolerance:.3e}); reverting to {strategy}"
            ));
            return Ok(DirectionStatus::Rejected);
        }

        let slope = candidate.dot(grad);
        if slope >= 0.0 {
            let strategy = self.ladder.increase();
            self.logger.warn(format_args!(
                "direction is not a descent direction (Δx⋅g={slope:.3e} ≥ 0); reverting to {strategy}"
            ));
            return Ok(DirectionStatus::Rejected);
        }

        direction.assign(&candidate);
        Ok(DirectionStatus::Accepted)
    }

    /// Move one rung down the descent ladder.
    pub fn increase_descent_strategy(&mut self) -> DescentStrategy {
        self.ladder.increase()
    }

    /// Return to plain Newton with zero regularization.
    pub fn reset(&mut self) {
        self.ladder.reset();
    }

    pub fn descent_strategy(&self) -> DescentStrategy {
        self.ladder.strategy()
    }

    pub fn reg_weight(&self) -> f64 {
        self.ladder.reg_weight()
    }

    pub fn params(&self) -> &NewtonParams {
        &self.params
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Backend diagnostics, one record per successful solve.
    pub fn internal_solver_info(&self) -> &[LinearSolverInfo] {
        &self.internal_solver_info
    }

    pub fn timings(&self) -> NewtonTimings {
        self.timings
    }

    // ---- Helper methods ----

    fn assemble<P: Problem + ?Sized>(&self, problem: &P, x: &Theta) -> OptResult<Hessian> {
        let mut hessian = problem.hessian(x)?;
        validate_hessian(&hessian, x.len())?;
        let reg_weight = self.ladder.reg_weight();
        if reg_weight > 0.0 {
            hessian.diag_mut().mapv_inplace(|h| h + reg_weight);
        }
        Ok(hessian)
    }
}

fn check_direction(direction: &Array1<f64>, n: usize) -> OptResult<()> {
    if direction.len() != n {
        return Err(OptError::DirectionDimMismatch { expected: n, found: direction.len() });
    }
    Ok(())
}

fn run_backend(
    backend: &mut dyn LinearSolver, hessian: &Hessian, rhs: &Array1<f64>,
    solution: &mut Array1<f64>,
) -> Result<(), LinearSolverError> {
    backend.analyze_pattern(hessian, hessian.nrows())?;
    backend.factorize(hessian)?;
    backend.solve(rhs, solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        linear::{DenseCholesky, SolveStatus},
        logging::RecordingLog,
        problem::types::Cost,
    };
    use approx::assert_abs_diff_eq;
    use log::Level;
    use nalgebra::DMatrix;
    use ndarray::{Array2, array};
    use serde_json::json;
    use std::{cell::RefCell, rc::Rc, sync::Arc};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful solves: direction, residual, diagnostics, timings.
    // - Backend failure: NaN residual, untouched direction, exactly one
    //   degradation and one warning.
    // - Regularization raising the smallest eigenvalue of the solved matrix.
    // - Acceptance checks in `compute_update_direction`, including the
    //   gradient-descent rung.
    // - Input validation errors.
    //
    // They intentionally DO NOT cover:
    // - Backend numerics (see `linear::dense`).
    // -------------------------------------------------------------------------

    /// Quadratic `½ xᵀAx` with a fixed (possibly singular or indefinite) `A`.
    struct Quadratic {
        a: Array2<f64>,
    }

    impl Problem for Quadratic {
        fn value(&self, x: &Theta) -> OptResult<Cost> {
            Ok(0.5 * x.dot(&self.a.dot(x)))
        }

        fn gradient(&self, x: &Theta) -> OptResult<Grad> {
            Ok(self.a.dot(x))
        }

        fn hessian(&self, _x: &Theta) -> OptResult<Hessian> {
            Ok(self.a.clone())
        }
    }

    /// Backend that records every matrix it is asked to factorize and
    /// delegates to dense Cholesky.
    #[derive(Debug)]
    struct Recording {
        inner: DenseCholesky,
        seen: Rc<RefCell<Vec<Hessian>>>,
    }

    impl LinearSolver for Recording {
        fn name(&self) -> &'static str {
            "Recording"
        }

        fn analyze_pattern(
            &mut self, matrix: &Hessian, size: usize,
        ) -> Result<(), LinearSolverError> {
            self.inner.analyze_pattern(matrix, size)
        }

        fn factorize(&mut self, matrix: &Hessian) -> Result<(), LinearSolverError> {
            self.seen.borrow_mut().push(matrix.clone());
            self.inner.factorize(matrix)
        }

        fn solve(
            &mut self, rhs: &Array1<f64>, out: &mut Array1<f64>,
        ) -> Result<(), LinearSolverError> {
            self.inner.solve(rhs, out)
        }

        fn info(&self) -> LinearSolverInfo {
            self.inner.info()
        }
    }

    fn recording_solver() -> (NewtonDirectionSolver, Arc<RecordingLog>) {
        let sink = Arc::new(RecordingLog::new());
        let solver =
            NewtonDirectionSolver::new(&json!({}), &json!({}), 1.0, Logger::new(sink.clone()))
                .expect("default configuration");
        (solver, sink)
    }

    fn min_eigenvalue(matrix: &Hessian) -> f64 {
        let n = matrix.nrows();
        let dense = DMatrix::from_fn(n, n, |i, j| matrix[[i, j]]);
        dense.symmetric_eigen().eigenvalues.iter().copied().fold(f64::INFINITY, f64::min)
    }

    #[test]
    // Purpose
    // -------
    // Verify a plain Newton solve on an SPD quadratic.
    //
    // Given
    // -----
    // - `A = [[4, 1], [1, 3]]`, `x = [1, 1]`, `g = A·x = [5, 4]`.
    //
    // Expect
    // ------
    // - `d = −x`, residual ≈ 0, one diagnostics record from "Cholesky",
    //   strategy still Newton.
    fn newton_solve_on_spd_quadratic() {
        // Arrange
        let problem = Quadratic { a: array![[4.0, 1.0], [1.0, 3.0]] };
        let x = array![1.0, 1.0];
        let grad = problem.gradient(&x).unwrap();
        let (mut solver, sink) = recording_solver();
        let mut direction = Array1::zeros(2);

        // Act
        let outcome = solver.solve_linear_system(&problem, &x, &grad, &mut direction).unwrap();

        // Assert
        assert!(outcome.is_solved());
        assert_abs_diff_eq!(outcome.residual(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(direction[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(direction[1], -1.0, epsilon = 1e-12);
        assert_eq!(solver.internal_solver_info().len(), 1);
        assert_eq!(solver.internal_solver_info()[0].solver, "Cholesky");
        assert_eq!(solver.internal_solver_info()[0].status, SolveStatus::Solved);
        assert_eq!(solver.descent_strategy(), DescentStrategy::Newton);
        assert!(sink.messages_at(Level::Warn).is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a singular Hessian degrades gracefully.
    //
    // Given
    // -----
    // - Singular `A = [[1, 2], [2, 4]]`, a direction buffer preset to
    //   `[7, 7]`, the default Cholesky backend.
    //
    // Expect
    // ------
    // - NaN residual, direction still `[7, 7]`, strategy moved once to
    //   regularized Newton with weight `1e-8`, exactly one warning naming
    //   the new strategy, no diagnostics record.
    fn singular_hessian_degrades_once() {
        // Arrange
        let problem = Quadratic { a: array![[1.0, 2.0], [2.0, 4.0]] };
        let x = array![1.0, 0.0];
        let grad = array![1.0, 2.0];
        let (mut solver, sink) = recording_solver();
        let mut direction = array![7.0, 7.0];

        // Act
        let outcome = solver.solve_linear_system(&problem, &x, &grad, &mut direction).unwrap();

        // Assert
        assert!(outcome.residual().is_nan());
        assert_eq!(
            outcome,
            LinearSolveOutcome::Degraded {
                reason: LinearSolverError::NotPositiveDefinite,
                strategy: DescentStrategy::RegularizedNewton,
            }
        );
        assert_eq!(direction, array![7.0, 7.0]);
        assert_eq!(solver.descent_strategy(), DescentStrategy::RegularizedNewton);
        assert_eq!(solver.reg_weight(), 1e-8);
        let warnings = sink.messages_at(Level::Warn);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("regularized Newton"), "warning was: {}", warnings[0]);
        assert!(solver.internal_solver_info().is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Check that regularization shifts the matrix handed to the backend
    // and that a larger weight never lowers its smallest eigenvalue.
    //
    // Given
    // -----
    // - Indefinite `A = diag(2, −1)` and a recording backend; min = 1,
    //   inc = 10. Weights 0 and 1 fail (eigenvalues −1 and 0), weight 10
    //   succeeds and is kept for the fourth solve.
    //
    // Expect
    // ------
    // - Four factorized matrices whose smallest eigenvalues are
    //   −1, 0, 9, 9 (non-decreasing); two diagnostics records.
    fn regularization_raises_smallest_eigenvalue() {
        // Arrange
        let seen = Rc::new(RefCell::new(Vec::new()));
        let backend = Recording { inner: DenseCholesky::new(), seen: seen.clone() };
        let params =
            json!({"Newton": {"reg_weight_min": 1.0, "reg_weight_inc": 10.0, "reg_weight_max": 1000.0}});
        let mut solver =
            NewtonDirectionSolver::with_backend(&params, Box::new(backend), 1.0, Logger::default())
                .unwrap();
        let problem = Quadratic { a: array![[2.0, 0.0], [0.0, -1.0]] };
        let x = array![1.0, 1.0];
        let grad = array![1.0, 1.0];
        let mut direction = Array1::zeros(2);

        // Act
        for _ in 0..4 {
            solver.solve_linear_system(&problem, &x, &grad, &mut direction).unwrap();
        }

        // Assert
        let minima: Vec<f64> = seen.borrow().iter().map(min_eigenvalue).collect();
        assert_eq!(minima.len(), 4);
        for (got, want) in minima.iter().zip([-1.0, 0.0, 9.0, 9.0]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-10);
        }
        assert!(minima.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(solver.reg_weight(), 10.0);
        assert_eq!(solver.internal_solver_info().len(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `compute_update_direction` accepts a good Newton step and
    // returns `−g` once the ladder reaches gradient descent.
    //
    // Given
    // -----
    // - SPD quadratic; then the ladder forced to gradient descent.
    //
    // Expect
    // ------
    // - `Accepted` with the Newton step; then `Accepted` with `−g`.
    fn update_direction_newton_then_gradient_descent() {
        // Arrange
        let problem = Quadratic { a: array![[2.0, 0.0], [0.0, 4.0]] };
        let x = array![1.0, -1.0];
        let grad = problem.gradient(&x).unwrap();
        let (mut solver, _sink) = recording_solver();
        let mut direction = Array1::zeros(2);

        // Act
        let newton = solver.compute_update_direction(&problem, &x, &grad, &mut direction).unwrap();
        let newton_dir = direction.clone();
        while solver.descent_strategy() != DescentStrategy::GradientDescent {
            solver.increase_descent_strategy();
        }
        let gd = solver.compute_update_direction(&problem, &x, &grad, &mut direction).unwrap();

        // Assert
        assert_eq!(newton, DirectionStatus::Accepted);
        assert_abs_diff_eq!(newton_dir[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(newton_dir[1], 1.0, epsilon = 1e-12);
        assert_eq!(gd, DirectionStatus::Accepted);
        assert_eq!(direction, array![-2.0, 4.0]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-descent Newton step is rejected and degrades once.
    //
    // Given
    // -----
    // - Indefinite `A = diag(1, −1)` with the LU backend, `g = [0, 1]`, so
    //   `d = [0, 1]` and `d·g = 1 > 0`.
    //
    // Expect
    // ------
    // - `Rejected`, direction untouched, regularized Newton, one warning.
    fn non_descent_direction_is_rejected() {
        // Arrange
        let sink = Arc::new(RecordingLog::new());
        let mut solver = NewtonDirectionSolver::new(
            &json!({}),
            &json!({"solver": "LU"}),
            1.0,
            Logger::new(sink.clone()),
        )
        .unwrap();
        let problem = Quadratic { a: array![[1.0, 0.0], [0.0, -1.0]] };
        let x = array![0.0, -1.0];
        let grad = array![0.0, 1.0];
        let mut direction = array![3.0, 3.0];

        // Act
        let status = solver.compute_update_direction(&problem, &x, &grad, &mut direction).unwrap();

        // Assert
        assert_eq!(status, DirectionStatus::Rejected);
        assert_eq!(direction, array![3.0, 3.0]);
        assert_eq!(solver.backend_name(), "LU");
        assert_eq!(solver.descent_strategy(), DescentStrategy::RegularizedNewton);
        assert_eq!(sink.messages_at(Level::Warn).len(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a residual above the scaled tolerance is rejected.
    //
    // Given
    // -----
    // - A backend that "succeeds" with a zero solution, so the residual is
    //   `‖g‖ = 1 > 1e-5`; the direction buffer is preset to `[5, 5]`.
    //
    // Expect
    // ------
    // - `Rejected`, one strategy increase, direction untouched.
    fn large_residual_is_rejected() {
        // Arrange
        #[derive(Debug)]
        struct Zero;
        impl LinearSolver for Zero {
            fn name(&self) -> &'static str {
                "Zero"
            }
            fn analyze_pattern(&mut self, _: &Hessian, _: usize) -> Result<(), LinearSolverError> {
                Ok(())
            }
            fn factorize(&mut self, _: &Hessian) -> Result<(), LinearSolverError> {
                Ok(())
            }
            fn solve(
                &mut self, _: &Array1<f64>, out: &mut Array1<f64>,
            ) -> Result<(), LinearSolverError> {
                out.fill(0.0);
                Ok(())
            }
            fn info(&self) -> LinearSolverInfo {
                LinearSolverInfo {
                    solver: "Zero",
                    size: 0,
                    status: SolveStatus::Solved,
                    factorize_seconds: 0.0,
                    solve_seconds: 0.0,
                }
            }
        }
        let mut solver =
            NewtonDirectionSolver::with_backend(&json!({}), Box::new(Zero), 1.0, Logger::default())
                .unwrap();
        let problem = Quadratic { a: array![[1.0, 0.0], [0.0, 1.0]] };
        let x = array![1.0, 0.0];
        let grad = array![1.0, 0.0];
        let mut direction = array![5.0, 5.0];

        // Act
        let status = solver.compute_update_direction(&problem, &x, &grad, &mut direction).unwrap();

        // Assert
        assert_eq!(status, DirectionStatus::Rejected);
        assert_eq!(solver.descent_strategy(), DescentStrategy::RegularizedNewton);
        assert_eq!(direction, array![5.0, 5.0]);
    }

    #[test]
    // Purpose
    // -------
    // Check diagnostics serialization and timing accumulation.
    //
    // Given
    // -----
    // - Two successful solves.
    //
    // Expect
    // ------
    // - Two records serializing with `"solver": "Cholesky"` and
    //   `"status": "solved"`; timings are non-decreasing between solves.
    fn diagnostics_serialize_and_timings_accumulate() {
        // Arrange
        let problem = Quadratic { a: array![[3.0]] };
        let x = array![1.0];
        let grad = array![3.0];
        let (mut solver, _sink) = recording_solver();
        let mut direction = Array1::zeros(1);

        // Act
        solver.solve_linear_system(&problem, &x, &grad, &mut direction).unwrap();
        let first = solver.timings();
        solver.solve_linear_system(&problem, &x, &grad, &mut direction).unwrap();
        let second = solver.timings();
        let record = serde_json::to_value(&solver.internal_solver_info()[1]).unwrap();

        // Assert
        assert_eq!(solver.internal_solver_info().len(), 2);
        assert_eq!(record["solver"], "Cholesky");
        assert_eq!(record["status"], "solved");
        assert_eq!(record["size"], 1);
        assert!(second.assembly_time >= first.assembly_time);
        assert!(second.inverting_time >= first.inverting_time);
    }

    #[test]
    // Purpose
    // -------
    // Ensure malformed inputs surface as errors and leave the ladder alone.
    //
    // Given
    // -----
    // - A gradient of the wrong length; a direction buffer of the wrong
    //   length; a Hessian with a NaN entry.
    //
    // Expect
    // ------
    // - `GradientDimMismatch`, `DirectionDimMismatch`, `InvalidHessian`;
    //   strategy still Newton.
    fn malformed_inputs_are_errors() {
        // Arrange
        let (mut solver, _sink) = recording_solver();
        let good = Quadratic { a: array![[1.0, 0.0], [0.0, 1.0]] };
        let nan = Quadratic { a: array![[1.0, f64::NAN], [0.0, 1.0]] };
        let x = array![1.0, 1.0];
        let mut direction = Array1::zeros(2);

        // Act / Assert
        assert_eq!(
            solver.solve_linear_system(&good, &x, &array![1.0], &mut direction),
            Err(OptError::GradientDimMismatch { expected: 2, found: 1 })
        );
        assert_eq!(
            solver.solve_linear_system(&good, &x, &array![1.0, 1.0], &mut Array1::zeros(3)),
            Err(OptError::DirectionDimMismatch { expected: 2, found: 3 })
        );
        assert!(matches!(
            solver.solve_linear_system(&nan, &x, &array![1.0, 1.0], &mut direction),
            Err(OptError::InvalidHessian { row: 0, col: 1, .. })
        ));
        assert_eq!(solver.descent_strategy(), DescentStrategy::Newton);
    }

    #[test]
    // Purpose
    // -------
    // Ensure construction validates the characteristic length and backend.
    fn construction_validates_inputs() {
        assert_eq!(
            NewtonDirectionSolver::new(&json!({}), &json!({}), -1.0, Logger::default())
                .unwrap_err(),
            OptError::InvalidCharacteristicLength { value: -1.0 }
        );
        assert_eq!(
            NewtonDirectionSolver::new(&json!({}), &json!({"solver": "QR"}), 1.0, Logger::default())
                .unwrap_err(),
            OptError::UnrecognizedLinearSolver { name: "QR".to_string() }
        );
    }
}
