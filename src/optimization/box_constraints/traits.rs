//! Contract shared by every box-constrained strategy.
//!
//! - [`BoxConstraintCore`]: state every strategy owns (bounds model,
//!   characteristic length, linear-solver parameters, logger).
//! - [`BoxConstrainedMethod`]: the abstract contract. Strategies supply a
//!   name and access to their core; bound queries and the projected-gradient
//!   stationarity measure are provided on top of that.
use crate::optimization::{
    box_constraints::{bounds::BoundsModel, config::BoxConstraintConfig},
    errors::OptResult,
    logging::Logger,
    problem::{
        types::{Grad, Theta},
        validation::validate_characteristic_length,
    },
};
use ndarray::Array1;
use serde_json::Value;

/// State shared by all box-constrained strategies.
#[derive(Debug, Clone)]
pub struct BoxConstraintCore {
    bounds: BoundsModel,
    characteristic_length: f64,
    linear_solver_params: Value,
    logger: Logger,
}

impl BoxConstraintCore {
    /// Resolve the `box_constraints` section of `solver_params`.
    ///
    /// # Errors
    /// - [`crate::optimization::errors::OptError::InvalidCharacteristicLength`]
    ///   unless `characteristic_length` is finite and positive.
    /// - Any configuration error from [`BoxConstraintConfig::from_params`].
    pub fn from_params(
        solver_params: &Value, linear_solver_params: &Value, characteristic_length: f64,
        logger: Logger,
    ) -> OptResult<Self> {
        validate_characteristic_length(characteristic_length)?;
        let bounds = BoxConstraintConfig::from_params(solver_params)?.into_model(logger.clone())?;
        Ok(Self::new(bounds, linear_solver_params.clone(), characteristic_length, logger))
    }

    /// Assemble a core from an already-built bounds model.
    pub fn new(
        bounds: BoundsModel, linear_solver_params: Value, characteristic_length: f64,
        logger: Logger,
    ) -> Self {
        Self { bounds, characteristic_length, linear_solver_params, logger }
    }

    pub fn bounds(&self) -> &BoundsModel {
        &self.bounds
    }

    pub fn characteristic_length(&self) -> f64 {
        self.characteristic_length
    }

    /// Linear-solver parameters retained for strategies that need a backend.
    pub fn linear_solver_params(&self) -> &Value {
        &self.linear_solver_params
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

/// Abstract contract of a box-constrained strategy.
///
/// Concrete iteration logic (limited-memory updates, moving asymptotes)
/// lives outside this crate; what every strategy must offer the outer loop
/// is a name, feasible bounds with and without the step cap, and the
/// projected-gradient convergence measure.
pub trait BoxConstrainedMethod {
    /// Canonical strategy name (as listed by `available_solvers`).
    fn name(&self) -> &'static str;

    fn core(&self) -> &BoxConstraintCore;

    fn compute_grad_norm(&self, x: &Theta, grad: &Grad) -> OptResult<f64> {
        self.core().bounds().compute_grad_norm(x, grad)
    }

    fn lower_bound(&self, x: &Theta, consider_max_change: bool) -> OptResult<Array1<f64>> {
        self.core().bounds().lower_bound(x, consider_max_change)
    }

    fn upper_bound(&self, x: &Theta, consider_max_change: bool) -> OptResult<Array1<f64>> {
        self.core().bounds().upper_bound(x, consider_max_change)
    }

    fn max_change(&self, x: &Theta) -> OptResult<Array1<f64>> {
        self.core().bounds().max_change(x)
    }
}
