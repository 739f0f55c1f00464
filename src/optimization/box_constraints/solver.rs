//! box_constraints::solver — strategy selection and the solver handle.
//!
//! Purpose
//! -------
//! Map strategy names onto a closed set of variants and build the matching
//! solver. Adding a strategy means adding a [`BoxStrategy`] variant, which
//! the compiler then forces through every `match`.
//!
//! Key behaviors
//! -------------
//! - [`BoxStrategy::from_str`] accepts `"LBFGSB"`, `"L-BFGS-B"`, and
//!   `"MMA"` (case-sensitive); anything else is
//!   [`OptError::UnrecognizedSolver`].
//! - [`available_solvers`] lists the canonical names in a fixed order.
//! - [`BoxConstraintSolver::create`] resolves the shared configuration,
//!   then the strategy-specific parameters.
use crate::optimization::{
    box_constraints::{
        strategies::{Lbfgsb, Mma},
        traits::{BoxConstrainedMethod, BoxConstraintCore},
    },
    errors::{OptError, OptResult},
    logging::Logger,
};
use serde_json::Value;
use std::str::FromStr;

/// Closed set of box-constrained strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxStrategy {
    Lbfgsb,
    Mma,
}

impl BoxStrategy {
    /// Every strategy, in discovery order.
    pub const ALL: [BoxStrategy; 2] = [BoxStrategy::Lbfgsb, BoxStrategy::Mma];

    pub fn name(self) -> &'static str {
        match self {
            BoxStrategy::Lbfgsb => "L-BFGS-B",
            BoxStrategy::Mma => "MMA",
        }
    }
}

impl FromStr for BoxStrategy {
    type Err = OptError;

    /// Parse a strategy name (case-sensitive).
    ///
    /// Accepts `"LBFGSB"` and `"L-BFGS-B"` for L-BFGS-B, and `"MMA"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LBFGSB" | "L-BFGS-B" => Ok(BoxStrategy::Lbfgsb),
            "MMA" => Ok(BoxStrategy::Mma),
            _ => Err(OptError::UnrecognizedSolver { name: s.to_string() }),
        }
    }
}

/// Canonical strategy names for discovery and help output.
pub fn available_solvers() -> Vec<&'static str> {
    BoxStrategy::ALL.iter().map(|s| s.name()).collect()
}

/// A configured box-constrained solver.
#[derive(Debug, Clone)]
pub enum BoxConstraintSolver {
    Lbfgsb(Lbfgsb),
    Mma(Mma),
}

impl BoxConstraintSolver {
    /// Build the strategy registered under `name`.
    ///
    /// Parameters
    /// ----------
    /// - `name`: strategy name, see [`BoxStrategy::from_str`].
    /// - `solver_params`: parameter tree holding the `box_constraints`
    ///   section and any strategy-specific section.
    /// - `linear_solver_params`: retained for strategies with a linear
    ///   backend.
    /// - `characteristic_length`: problem length scale; must be positive.
    /// - `logger`: injected logging port.
    ///
    /// # Errors
    /// - [`OptError::UnrecognizedSolver`] for an unknown name (checked before
    ///   any configuration is read).
    /// - Configuration errors from the `box_constraints` section or the
    ///   strategy section.
    pub fn create(
        name: &str, solver_params: &Value, linear_solver_params: &Value,
        characteristic_length: f64, logger: Logger,
    ) -> OptResult<Self> {
        let strategy = BoxStrategy::from_str(name)?;
        let core = BoxConstraintCore::from_params(
            solver_params,
            linear_solver_params,
            characteristic_length,
            logger,
        )?;
        let solver = match strategy {
            BoxStrategy::Lbfgsb => BoxConstraintSolver::Lbfgsb(Lbfgsb::new(solver_params, core)?),
            BoxStrategy::Mma => BoxConstraintSolver::Mma(Mma::new(core)),
        };
        solver.core().logger().debug(format_args!(
            "created box-constrained solver {} (requested as \"{name}\")",
            solver.name()
        ));
        Ok(solver)
    }

    pub fn strategy(&self) -> BoxStrategy {
        match self {
            BoxConstraintSolver::Lbfgsb(_) => BoxStrategy::Lbfgsb,
            BoxConstraintSolver::Mma(_) => BoxStrategy::Mma,
        }
    }
}

impl BoxConstrainedMethod for BoxConstraintSolver {
    fn name(&self) -> &'static str {
        match self {
            BoxConstraintSolver::Lbfgsb(s) => s.name(),
            BoxConstraintSolver::Mma(s) => s.name(),
        }
    }

    fn core(&self) -> &BoxConstraintCore {
        match self {
            BoxConstraintSolver::Lbfgsb(s) => s.core(),
            BoxConstraintSolver::Mma(s) => s.core(),
        }
    }
}
