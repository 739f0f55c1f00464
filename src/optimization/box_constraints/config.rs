//! box_constraints::config — resolve the `box_constraints` parameter section.
//!
//! Recognized keys (under `solver_params["box_constraints"]`):
//!
//! - `max_change`: a positive number (uniform cap). Zero, negative,
//!   `null`, or a missing key leave the cap unset. An array (per-variable
//!   cap) is rejected as unsupported; build a [`MaxChange::PerVariable`]
//!   directly and use [`BoundsModel`] when per-variable caps are needed.
//! - `bounds`: `[lower, upper]` numbers (broadcast to every variable) or
//!   `[[lower_0, ...], [upper_0, ...]]` equal-length numeric arrays. A
//!   missing key leaves the bounds unconfigured; a string (file path) is
//!   rejected as unsupported since this crate performs no file I/O.
//!
//! A missing `box_constraints` section is treated as empty.
use crate::optimization::{
    box_constraints::bounds::{BoundsModel, MaxChange},
    errors::{OptError, OptResult},
    logging::Logger,
};
use ndarray::Array1;
use serde_json::Value;

/// Parsed, not yet validated against a variable count.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundsSpec {
    Absent,
    Uniform { lower: f64, upper: f64 },
    PerVariable { lower: Array1<f64>, upper: Array1<f64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxConstraintConfig {
    pub bounds: BoundsSpec,
    pub max_change: MaxChange,
}

impl BoxConstraintConfig {
    /// Read the `box_constraints` section of `solver_params`.
    ///
    /// # Errors
    /// - [`OptError::UnsupportedConfiguration`] for file-based bounds.
    /// - [`OptError::UnsupportedConfiguration`] for a per-variable
    ///   `max_change` array.
    /// - [`OptError::InvalidConfiguration`] for values of the wrong shape or
    ///   type.
    pub fn from_params(solver_params: &Value) -> OptResult<Self> {
        let section = match solver_params.get("box_constraints") {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(section @ Value::Object(_)) => section,
            Some(other) => {
                return Err(OptError::InvalidConfiguration {
                    key: "box_constraints",
                    reason: format!("expected an object, found {other}"),
                });
            }
        };
        let max_change = parse_max_change(section.get("max_change"))?;
        let bounds = parse_bounds(section.get("bounds"))?;
        Ok(Self { bounds, max_change })
    }

    /// Build the bounds model this configuration describes.
    pub fn into_model(self, logger: Logger) -> OptResult<BoundsModel> {
        match self.bounds {
            BoundsSpec::Absent => Ok(BoundsModel::unconfigured(self.max_change, logger)),
            BoundsSpec::Uniform { lower, upper } => {
                BoundsModel::uniform(lower, upper, self.max_change, logger)
            }
            BoundsSpec::PerVariable { lower, upper } => {
                BoundsModel::per_variable(&lower, &upper, self.max_change, logger)
            }
        }
    }
}

impl Default for BoxConstraintConfig {
    fn default() -> Self {
        Self { bounds: BoundsSpec::Absent, max_change: MaxChange::Unset }
    }
}

// ---- Helper methods ----

fn parse_max_change(value: Option<&Value>) -> OptResult<MaxChange> {
    match value {
        None | Some(Value::Null) => Ok(MaxChange::Unset),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v > 0.0 => MaxChange::uniform(v),
            _ => Ok(MaxChange::Unset),
        },
        Some(Value::Array(items)) => Err(OptError::UnsupportedConfiguration {
            key: "box_constraints.max_change",
            reason: format!(
                "per-variable max change from configuration ({} entries) is not supported",
                items.len()
            ),
        }),
        Some(other) => Err(OptError::InvalidConfiguration {
            key: "box_constraints.max_change",
            reason: format!("expected a positive number, found {other}"),
        }),
    }
}

fn parse_bounds(value: Option<&Value>) -> OptResult<BoundsSpec> {
    let items = match value {
        None | Some(Value::Null) => return Ok(BoundsSpec::Absent),
        Some(Value::String(path)) => {
            return Err(OptError::UnsupportedConfiguration {
                key: "box_constraints.bounds",
                reason: format!("loading bounds from file '{path}' is not supported"),
            });
        }
        Some(Value::Array(items)) if items.len() == 2 => items,
        Some(other) => {
            return Err(OptError::InvalidConfiguration {
                key: "box_constraints.bounds",
                reason: format!("expected a two-element array, found {other}"),
            });
        }
    };
    match (&items[0], &items[1]) {
        (Value::Number(lo), Value::Number(hi)) => {
            let lower = number(lo, "box_constraints.bounds")?;
            let upper = number(hi, "box_constraints.bounds")?;
            Ok(BoundsSpec::Uniform { lower, upper })
        }
        (Value::Array(lo), Value::Array(hi)) => {
            let lower = numeric_array(lo, "box_constraints.bounds")?;
            let upper = numeric_array(hi, "box_constraints.bounds")?;
            if lower.len() != upper.len() {
                return Err(OptError::BoundsLengthMismatch {
                    lower: lower.len(),
                    upper: upper.len(),
                });
            }
            Ok(BoundsSpec::PerVariable { lower, upper })
        }
        (lo, hi) => Err(OptError::InvalidConfiguration {
            key: "box_constraints.bounds",
            reason: format!("expected two numbers or two numeric arrays, found [{lo}, {hi}]"),
        }),
    }
}

fn number(n: &serde_json::Number, key: &'static str) -> OptResult<f64> {
    n.as_f64().ok_or_else(|| OptError::InvalidConfiguration {
        key,
        reason: format!("{n} is not representable as f64"),
    })
}

fn numeric_array(items: &[Value], key: &'static str) -> OptResult<Array1<f64>> {
    items
        .iter()
        .map(|item| match item {
            Value::Number(n) => number(n, key),
            other => Err(OptError::InvalidConfiguration {
                key,
                reason: format!("expected a number, found {other}"),
            }),
        })
        .collect::<OptResult<Vec<f64>>>()
        .map(Array1::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use serde_json::json;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Every accepted form of `max_change` and `bounds`.
    // - Fail-fast behavior for file-based and malformed bounds.
    // - Conversion into a `BoundsModel`.
    //
    // They intentionally DO NOT cover:
    // - Query-time bound resolution (see `box_constraints::bounds`).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the scalar-pair and array-pair bounds forms with a scalar cap.
    //
    // Given
    // -----
    // - `{"bounds": [-1, 1], "max_change": 0.5}` and
    //   `{"bounds": [[0, 1], [2, 3]]}`.
    //
    // Expect
    // ------
    // - `Uniform { -1, 1 }` with `MaxChange::Uniform(0.5)`.
    // - `PerVariable { [0, 1], [2, 3] }` with the cap unset.
    fn parses_scalar_and_array_bounds() {
        // Arrange
        let scalar = json!({"box_constraints": {"bounds": [-1, 1], "max_change": 0.5}});
        let arrays = json!({"box_constraints": {"bounds": [[0, 1], [2, 3]]}});

        // Act
        let scalar_cfg = BoxConstraintConfig::from_params(&scalar).unwrap();
        let arrays_cfg = BoxConstraintConfig::from_params(&arrays).unwrap();

        // Assert
        assert_eq!(scalar_cfg.bounds, BoundsSpec::Uniform { lower: -1.0, upper: 1.0 });
        assert_eq!(scalar_cfg.max_change, MaxChange::Uniform(0.5));
        assert_eq!(
            arrays_cfg.bounds,
            BoundsSpec::PerVariable { lower: array![0.0, 1.0], upper: array![2.0, 3.0] }
        );
        assert_eq!(arrays_cfg.max_change, MaxChange::Unset);
    }

    #[test]
    // Purpose
    // -------
    // Check the `max_change` resolution rules.
    //
    // Given
    // -----
    // - Zero, negative, array, and string values.
    //
    // Expect
    // ------
    // - Zero/negative → unset; array → `UnsupportedConfiguration` (fail
    //   fast, no silent fallback to an unset cap); string →
    //   `InvalidConfiguration`.
    fn max_change_resolution_rules() {
        let zero = json!({"box_constraints": {"max_change": 0}});
        let negative = json!({"box_constraints": {"max_change": -3.0}});
        let per_var = json!({"box_constraints": {"max_change": [0.1, 0.2]}});
        let text = json!({"box_constraints": {"max_change": "big"}});

        assert_eq!(BoxConstraintConfig::from_params(&zero).unwrap().max_change, MaxChange::Unset);
        assert_eq!(
            BoxConstraintConfig::from_params(&negative).unwrap().max_change,
            MaxChange::Unset
        );
        let per_var_err = BoxConstraintConfig::from_params(&per_var).unwrap_err();
        assert!(matches!(
            per_var_err,
            OptError::UnsupportedConfiguration { key: "box_constraints.max_change", .. }
        ));
        assert!(per_var_err.to_string().contains("2 entries"));
        assert!(matches!(
            BoxConstraintConfig::from_params(&text),
            Err(OptError::InvalidConfiguration { key: "box_constraints.max_change", .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Ensure file-based bounds fail fast instead of leaving an empty table.
    //
    // Given
    // -----
    // - `{"bounds": "bounds.txt"}`.
    //
    // Expect
    // ------
    // - `UnsupportedConfiguration` mentioning the path.
    fn file_bounds_are_unsupported() {
        // Arrange
        let params = json!({"box_constraints": {"bounds": "bounds.txt"}});

        // Act
        let err = BoxConstraintConfig::from_params(&params).unwrap_err();

        // Assert
        assert!(matches!(err, OptError::UnsupportedConfiguration { .. }));
        assert!(err.to_string().contains("bounds.txt"));
    }

    #[test]
    // Purpose
    // -------
    // Check rejection of malformed bounds.
    //
    // Given
    // -----
    // - Three-element array, mixed number/array pair, unequal arrays,
    //   non-numeric entries.
    //
    // Expect
    // ------
    // - `InvalidConfiguration` or `BoundsLengthMismatch`.
    fn malformed_bounds_are_rejected() {
        let three = json!({"box_constraints": {"bounds": [0, 1, 2]}});
        let mixed = json!({"box_constraints": {"bounds": [0, [1, 2]]}});
        let unequal = json!({"box_constraints": {"bounds": [[0, 0], [1]]}});
        let strings = json!({"box_constraints": {"bounds": [["a"], ["b"]]}});

        assert!(matches!(
            BoxConstraintConfig::from_params(&three),
            Err(OptError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            BoxConstraintConfig::from_params(&mixed),
            Err(OptError::InvalidConfiguration { .. })
        ));
        assert_eq!(
            BoxConstraintConfig::from_params(&unequal).unwrap_err(),
            OptError::BoundsLengthMismatch { lower: 2, upper: 1 }
        );
        assert!(matches!(
            BoxConstraintConfig::from_params(&strings),
            Err(OptError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify that absent configuration yields an unconfigured model whose
    // bound queries fail rather than returning empty vectors.
    //
    // Given
    // -----
    // - `{}` solver parameters.
    //
    // Expect
    // ------
    // - Construction succeeds; `lower_bound` fails with `InvalidBounds`.
    fn absent_section_builds_unconfigured_model() {
        // Arrange
        let cfg = BoxConstraintConfig::from_params(&json!({})).unwrap();

        // Act
        let model = cfg.into_model(Logger::default()).unwrap();

        // Assert
        assert_eq!(model.bounds().nrows(), 0);
        assert_eq!(
            model.lower_bound(&array![0.0, 0.0], false),
            Err(OptError::InvalidBounds { rows: 0, n_vars: 2 })
        );
    }
}
