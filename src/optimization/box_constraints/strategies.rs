//! Concrete strategy shells: L-BFGS-B and MMA.
//!
//! Each shell owns a [`BoxConstraintCore`] and the handful of parameters the
//! strategy reads at construction. The iteration algorithms themselves are
//! supplied by the host application.
use crate::optimization::{
    box_constraints::traits::{BoxConstrainedMethod, BoxConstraintCore},
    errors::{OptError, OptResult},
};
use serde_json::Value;

/// Default L-BFGS-B history size (`m`).
pub const DEFAULT_LBFGSB_HISTORY: usize = 6;

/// Limited-memory bound-constrained quasi-Newton strategy.
#[derive(Debug, Clone)]
pub struct Lbfgsb {
    core: BoxConstraintCore,
    history_size: usize,
}

impl Lbfgsb {
    /// Read `solver_params["L-BFGS-B"]["history_size"]` (default
    /// [`DEFAULT_LBFGSB_HISTORY`]).
    ///
    /// # Errors
    /// [`OptError::InvalidConfiguration`] if the history size is not a
    /// positive integer or does not fit in `usize`.
    pub fn new(solver_params: &Value, core: BoxConstraintCore) -> OptResult<Self> {
        let history_size = match solver_params.get("L-BFGS-B").and_then(|s| s.get("history_size")) {
            None | Some(Value::Null) => DEFAULT_LBFGSB_HISTORY,
            Some(v) => match v.as_u64().filter(|&m| m >= 1).map(usize::try_from) {
                Some(Ok(m)) => m,
                Some(Err(_)) => {
                    return Err(OptError::InvalidConfiguration {
                        key: "L-BFGS-B.history_size",
                        reason: format!("{v} does not fit in usize on this target"),
                    });
                }
                None => {
                    return Err(OptError::InvalidConfiguration {
                        key: "L-BFGS-B.history_size",
                        reason: format!("expected a positive integer, found {v}"),
                    });
                }
            },
        };
        Ok(Self { core, history_size })
    }

    pub fn history_size(&self) -> usize {
        self.history_size
    }
}

impl BoxConstrainedMethod for Lbfgsb {
    fn name(&self) -> &'static str {
        "L-BFGS-B"
    }

    fn core(&self) -> &BoxConstraintCore {
        &self.core
    }
}

/// Method of moving asymptotes.
#[derive(Debug, Clone)]
pub struct Mma {
    core: BoxConstraintCore,
}

impl Mma {
    pub fn new(core: BoxConstraintCore) -> Self {
        Self { core }
    }
}

impl BoxConstrainedMethod for Mma {
    fn name(&self) -> &'static str {
        "MMA"
    }

    fn core(&self) -> &BoxConstraintCore {
        &self.core
    }
}
