//! box_constraints::bounds — feasible-region resolution and step caps.
//!
//! Purpose
//! -------
//! Hold the intrinsic box `[lower, upper]` and the per-step cap ("max
//! change") and resolve both against the current iterate. Separating the
//! intrinsic bounds from the step-limited ones lets an optimizer check true
//! feasibility (for convergence) and step feasibility (for trust-region
//! style line searches) from one structure.
//!
//! Key behaviors
//! -------------
//! - [`BoundsModel::lower_bound`] / [`BoundsModel::upper_bound`] broadcast a
//!   `1 × 2` table to every variable or read an `N × 2` table column-wise,
//!   optionally tightened by one max-step around `x`.
//! - [`BoundsModel::max_change`] resolves a per-variable cap of matching
//!   length, else a positive uniform cap.
//! - [`BoundsModel::compute_grad_norm`] returns the projected-gradient
//!   stationarity measure `‖P(x − g) − x‖₂`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every stored row satisfies `lower ≤ upper` and has no NaN entry;
//!   infinite bounds are allowed.
//! - Stored max-change values are finite and non-negative.
//! - The model is immutable after construction; every query is a pure
//!   function of `x` and the stored configuration.
//!
//! Conventions
//! -----------
//! - Row-count mismatches are detected at query time (the variable count is
//!   only known then) and reported as [`OptError::InvalidBounds`].
//! - Query failures are logged at error level through the injected
//!   [`Logger`] before being returned.
use crate::optimization::{
    errors::{OptError, OptResult},
    logging::Logger,
    problem::{
        types::{BoundsArray, Grad, Theta},
        validation::{validate_grad, validate_theta},
    },
};
use argmin_math::ArgminL2Norm;
use ndarray::{Array1, Zip, array};

/// Per-step cap on how far a single variable may move.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MaxChange {
    /// No cap configured; step-limited queries fail.
    #[default]
    Unset,
    /// Same cap for every variable. Only usable when strictly positive.
    Uniform(f64),
    /// One cap per variable. Only usable when its length matches `N`.
    PerVariable(Array1<f64>),
}

impl MaxChange {
    /// Validated uniform cap.
    ///
    /// # Errors
    /// [`OptError::InvalidMaxChangeEntry`] if `value` is negative or
    /// non-finite.
    pub fn uniform(value: f64) -> OptResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(OptError::InvalidMaxChangeEntry { index: 0, value });
        }
        Ok(MaxChange::Uniform(value))
    }

    /// Validated per-variable cap.
    ///
    /// # Errors
    /// [`OptError::InvalidMaxChangeEntry`] for the first negative or
    /// non-finite entry.
    pub fn per_variable(values: Array1<f64>) -> OptResult<Self> {
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(OptError::InvalidMaxChangeEntry { index, value });
            }
        }
        Ok(MaxChange::PerVariable(values))
    }
}

/// Intrinsic box plus max-change cap.
#[derive(Debug, Clone)]
pub struct BoundsModel {
    bounds: BoundsArray,
    max_change: MaxChange,
    logger: Logger,
}

impl BoundsModel {
    /// Build from an explicit `rows × 2` table.
    ///
    /// A `0 × 2` table is accepted and represents bounds that were never
    /// configured; every bound query against it fails.
    ///
    /// # Errors
    /// - [`OptError::InvalidConfiguration`] if the table does not have two
    ///   columns.
    /// - [`OptError::NonFiniteBound`] for a NaN entry.
    /// - [`OptError::BoundsOrder`] if any row has `lower > upper`.
    pub fn new(bounds: BoundsArray, max_change: MaxChange, logger: Logger) -> OptResult<Self> {
        if bounds.ncols() != 2 {
            return Err(OptError::InvalidConfiguration {
                key: "bounds",
                reason: format!("expected 2 columns, found {}", bounds.ncols()),
            });
        }
        for (index, row) in bounds.outer_iter().enumerate() {
            let (lower, upper) = (row[0], row[1]);
            if lower.is_nan() {
                return Err(OptError::NonFiniteBound { index, value: lower });
            }
            if upper.is_nan() {
                return Err(OptError::NonFiniteBound { index, value: upper });
            }
            if lower > upper {
                return Err(OptError::BoundsOrder { index, lower, upper });
            }
        }
        Ok(Self { bounds, max_change, logger })
    }

    /// Single `[lower, upper]` pair applied to every variable.
    pub fn uniform(
        lower: f64, upper: f64, max_change: MaxChange, logger: Logger,
    ) -> OptResult<Self> {
        Self::new(array![[lower, upper]], max_change, logger)
    }

    /// One `[lower_i, upper_i]` pair per variable.
    ///
    /// # Errors
    /// [`OptError::BoundsLengthMismatch`] if the two arrays differ in length,
    /// plus everything [`BoundsModel::new`] reports.
    pub fn per_variable(
        lower: &Array1<f64>, upper: &Array1<f64>, max_change: MaxChange, logger: Logger,
    ) -> OptResult<Self> {
        if lower.len() != upper.len() {
            return Err(OptError::BoundsLengthMismatch { lower: lower.len(), upper: upper.len() });
        }
        let mut bounds = BoundsArray::zeros((lower.len(), 2));
        bounds.column_mut(0).assign(lower);
        bounds.column_mut(1).assign(upper);
        Self::new(bounds, max_change, logger)
    }

    /// Bounds not configured yet; only the max-change cap is known.
    pub fn unconfigured(max_change: MaxChange, logger: Logger) -> Self {
        Self { bounds: BoundsArray::zeros((0, 2)), max_change, logger }
    }

    pub fn bounds(&self) -> &BoundsArray {
        &self.bounds
    }

    /// Effective lower bound at `x`.
    ///
    /// With `consider_max_change`, the result is `max(lower, x − max_change(x))`
    /// elementwise, so it never exceeds `x` for feasible iterates.
    ///
    /// # Errors
    /// - [`OptError::InvalidBounds`] on a row-count mismatch.
    /// - [`OptError::InvalidMaxChange`] when the cap is requested but unusable.
    pub fn lower_bound(&self, x: &Theta, consider_max_change: bool) -> OptResult<Array1<f64>> {
        let mut min = self.resolve_column(x.len(), 0)?;
        if consider_max_change {
            let step = self.max_change(x)?;
            Zip::from(&mut min).and(x).and(&step).for_each(|lo, &xi, &dx| *lo = (*lo).max(xi - dx));
        }
        Ok(min)
    }

    /// Effective upper bound at `x`; see [`BoundsModel::lower_bound`].
    pub fn upper_bound(&self, x: &Theta, consider_max_change: bool) -> OptResult<Array1<f64>> {
        let mut max = self.resolve_column(x.len(), 1)?;
        if consider_max_change {
            let step = self.max_change(x)?;
            Zip::from(&mut max).and(x).and(&step).for_each(|hi, &xi, &dx| *hi = (*hi).min(xi + dx));
        }
        Ok(max)
    }

    /// Per-variable step cap at `x`.
    ///
    /// # Errors
    /// [`OptError::InvalidMaxChange`] unless a per-variable cap of length
    /// `x.len()` or a strictly positive uniform cap is configured.
    pub fn max_change(&self, x: &Theta) -> OptResult<Array1<f64>> {
        let n = x.len();
        match &self.max_change {
            MaxChange::PerVariable(v) if v.len() == n => Ok(v.clone()),
            MaxChange::Uniform(v) if *v > 0.0 => Ok(Array1::from_elem(n, *v)),
            MaxChange::PerVariable(_) => {
                Err(self.log_error(OptError::InvalidMaxChange {
                    n_vars: n,
                    reason: "per-variable max change length does not match the variable count",
                }))
            }
            MaxChange::Uniform(_) | MaxChange::Unset => Err(self.log_error(OptError::InvalidMaxChange {
                n_vars: n,
                reason: "no positive max change configured",
            })),
        }
    }

    /// Clamp `x` into the intrinsic box.
    pub fn project(&self, x: &Theta) -> OptResult<Theta> {
        let min = self.lower_bound(x, false)?;
        let max = self.upper_bound(x, false)?;
        Ok(clamp(x, &min, &max))
    }

    /// Projected-gradient stationarity measure.
    ///
    /// Projects the gradient step `x − grad` onto the intrinsic box and
    /// returns `‖P(x − grad) − x‖₂`. The value is zero exactly at KKT points
    /// of the bound-constrained problem.
    ///
    /// Non-finite entries in `x` or `grad` are errors, never a norm.
    ///
    /// # Errors
    /// - [`OptError::InvalidThetaInput`] for a non-finite entry of `x`.
    /// - [`OptError::GradientDimMismatch`] if `grad.len() != x.len()`.
    /// - [`OptError::InvalidGradient`] for a non-finite gradient entry.
    /// - Bound resolution errors from [`BoundsModel::lower_bound`].
    pub fn compute_grad_norm(&self, x: &Theta, grad: &Grad) -> OptResult<f64> {
        validate_theta(x).map_err(|err| self.log_error(err))?;
        validate_grad(grad, x.len()).map_err(|err| self.log_error(err))?;
        let min = self.lower_bound(x, false)?;
        let max = self.upper_bound(x, false)?;
        let trial = x - grad;
        let displacement = clamp(&trial, &min, &max) - x;
        Ok(displacement.l2_norm())
    }

    // ---- Helper methods ----

    fn resolve_column(&self, n: usize, col: usize) -> OptResult<Array1<f64>> {
        let rows = self.bounds.nrows();
        if rows == n {
            Ok(self.bounds.column(col).to_owned())
        } else if rows == 1 {
            Ok(Array1::from_elem(n, self.bounds[[0, col]]))
        } else {
            Err(self.log_error(OptError::InvalidBounds { rows, n_vars: n }))
        }
    }

    fn log_error(&self, err: OptError) -> OptError {
        self.logger.error(format_args!("{err}"));
        err
    }
}

fn clamp(x: &Array1<f64>, min: &Array1<f64>, max: &Array1<f64>) -> Array1<f64> {
    Zip::from(x).and(min).and(max).map_collect(|&xi, &lo, &hi| xi.max(lo).min(hi))
}
