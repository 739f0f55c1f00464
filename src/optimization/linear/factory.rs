//! linear::factory — backend selection by name.
use crate::optimization::{
    errors::{OptError, OptResult},
    linear::{
        dense::{DenseCholesky, DenseLu},
        traits::LinearSolver,
    },
};
use serde_json::Value;
use std::str::FromStr;

/// Backend used when the linear parameters name none.
pub const DEFAULT_LINEAR_SOLVER: &str = DenseCholesky::NAME;

/// Closed set of linear backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearSolverKind {
    Cholesky,
    Lu,
}

impl LinearSolverKind {
    pub const ALL: [LinearSolverKind; 2] = [LinearSolverKind::Cholesky, LinearSolverKind::Lu];

    pub fn name(self) -> &'static str {
        match self {
            LinearSolverKind::Cholesky => DenseCholesky::NAME,
            LinearSolverKind::Lu => DenseLu::NAME,
        }
    }

    pub fn build(self) -> Box<dyn LinearSolver> {
        match self {
            LinearSolverKind::Cholesky => Box::new(DenseCholesky::new()),
            LinearSolverKind::Lu => Box::new(DenseLu::new()),
        }
    }
}

impl FromStr for LinearSolverKind {
    type Err = OptError;

    /// Case-sensitive; the `Eigen::` spellings are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cholesky" | "LLT" | "Eigen::LLT" => Ok(LinearSolverKind::Cholesky),
            "LU" | "Eigen::PartialPivLU" => Ok(LinearSolverKind::Lu),
            _ => Err(OptError::UnrecognizedLinearSolver { name: s.to_string() }),
        }
    }
}

/// Build the backend registered under `name`.
///
/// # Errors
/// - [`OptError::UnrecognizedLinearSolver`] for an unknown name.
pub fn create_linear_solver(name: &str) -> OptResult<Box<dyn LinearSolver>> {
    Ok(LinearSolverKind::from_str(name)?.build())
}

/// Resolve the backend kind from a linear parameter tree.
///
/// Reads the `solver` key (default [`DEFAULT_LINEAR_SOLVER`]). Other keys,
/// such as `precond`, are ignored by the dense backends.
///
/// # Errors
/// - [`OptError::InvalidConfiguration`] when `solver` is not a string.
/// - [`OptError::UnrecognizedLinearSolver`] for an unknown name.
pub fn linear_solver_kind_from_params(linear_solver_params: &Value) -> OptResult<LinearSolverKind> {
    match linear_solver_params.get("solver") {
        None | Some(Value::Null) => LinearSolverKind::from_str(DEFAULT_LINEAR_SOLVER),
        Some(Value::String(name)) => LinearSolverKind::from_str(name),
        Some(other) => Err(OptError::InvalidConfiguration {
            key: "solver",
            reason: format!("expected a backend name, found {other}"),
        }),
    }
}

/// Canonical backend names for discovery.
pub fn available_linear_solvers() -> Vec<&'static str> {
    LinearSolverKind::ALL.iter().map(|k| k.name()).collect()
}
