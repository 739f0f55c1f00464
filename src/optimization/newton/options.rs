//! newton::options — the `"Newton"` parameter section.
//!
//! Recognized keys (all optional):
//!
//! - `reg_weight_min` (default `1e-8`): first regularization weight used
//!   after plain Newton fails.
//! - `reg_weight_max` (default `1e8`): weight above which regularized
//!   Newton gives up in favor of gradient descent.
//! - `reg_weight_inc` (default `10`): multiplicative growth per failure.
//! - `residual_tolerance` (default `1e-5`): absolute floor of the accepted
//!   linear residual, before scaling by the characteristic length.
//!
//! Unknown keys are ignored so the same section can carry settings for an
//! outer line search.
use crate::optimization::errors::{OptError, OptResult};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_REG_WEIGHT_MIN: f64 = 1e-8;
pub const DEFAULT_REG_WEIGHT_MAX: f64 = 1e8;
pub const DEFAULT_REG_WEIGHT_INC: f64 = 10.0;
pub const DEFAULT_RESIDUAL_TOLERANCE: f64 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewtonParams {
    pub reg_weight_min: f64,
    pub reg_weight_max: f64,
    pub reg_weight_inc: f64,
    pub residual_tolerance: f64,
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self {
            reg_weight_min: DEFAULT_REG_WEIGHT_MIN,
            reg_weight_max: DEFAULT_REG_WEIGHT_MAX,
            reg_weight_inc: DEFAULT_REG_WEIGHT_INC,
            residual_tolerance: DEFAULT_RESIDUAL_TOLERANCE,
        }
    }
}

impl NewtonParams {
    /// Read and validate `solver_params["Newton"]`.
    ///
    /// # Errors
    /// - [`OptError::InvalidConfiguration`] when the section is not an
    ///   object, a value has the wrong type, or the values violate
    ///   `0 < reg_weight_min <= reg_weight_max`, `reg_weight_inc > 1`,
    ///   `residual_tolerance > 0` (all finite).
    pub fn from_params(solver_params: &Value) -> OptResult<Self> {
        let params = match solver_params.get("Newton") {
            None | Some(Value::Null) => Self::default(),
            Some(section @ Value::Object(_)) => Self::deserialize(section).map_err(|err| {
                OptError::InvalidConfiguration { key: "Newton", reason: err.to_string() }
            })?,
            Some(other) => {
                return Err(OptError::InvalidConfiguration {
                    key: "Newton",
                    reason: format!("expected an object, found {other}"),
                });
            }
        };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> OptResult<()> {
        let all_finite = [
            self.reg_weight_min,
            self.reg_weight_max,
            self.reg_weight_inc,
            self.residual_tolerance,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(invalid("all values must be finite", self));
        }
        if self.reg_weight_min <= 0.0 {
            return Err(invalid("reg_weight_min must be > 0", self));
        }
        if self.reg_weight_max < self.reg_weight_min {
            return Err(invalid("reg_weight_max must be >= reg_weight_min", self));
        }
        if self.reg_weight_inc <= 1.0 {
            return Err(invalid("reg_weight_inc must be > 1", self));
        }
        if self.residual_tolerance <= 0.0 {
            return Err(invalid("residual_tolerance must be > 0", self));
        }
        Ok(())
    }
}

fn invalid(reason: &str, params: &NewtonParams) -> OptError {
    OptError::InvalidConfiguration { key: "Newton", reason: format!("{reason} (got {params:?})") }
}
