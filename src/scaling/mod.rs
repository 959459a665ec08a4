//! Feature scaling transforms
//!
//! Derives new columns from a sample by applying one or more scaling
//! methods to a set of target columns. Original columns are preserved and
//! derived columns are appended as `<column>_<method>`, method-major then
//! column-major. The transform is a pure function of its inputs: no state
//! survives an invocation, and degenerate statistics (zero variance, zero
//! range, zero norm) resolve to documented fallback values instead of
//! errors.
//!
//! `standard`, `minmax` and `maxabs` scale each column against its own
//! statistics. `l1` and `l2` normalize across a row: the denominator is
//! computed from the row's values in all selected target columns, so those
//! two methods couple columns and do not go through [`crate::stats`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sample::{CellValue, TabularSample};
use crate::stats::column_stats;

/// A scaling method together with its configuration
///
/// Tagged by a `method` field on the wire, so a serialized value reads
/// `{"method": "minmax", "feature_range": [0.0, 1.0], "clip": false}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum ScalingMethod {
    /// Mean-centering and/or variance scaling
    Standard { with_mean: bool, with_std: bool },
    /// Linear remapping of the column's range onto a target interval
    MinMax { feature_range: (f64, f64), clip: bool },
    /// Division by the column's largest absolute value
    MaxAbs,
    /// Row-wise normalization so absolute values sum to 1
    L1,
    /// Row-wise normalization to unit Euclidean norm
    L2,
}

impl ScalingMethod {
    /// Default-configured standardization
    pub fn standard() -> Self {
        ScalingMethod::Standard {
            with_mean: true,
            with_std: true,
        }
    }

    /// Default-configured min-max scaling onto [0, 1]
    pub fn minmax() -> Self {
        ScalingMethod::MinMax {
            feature_range: (0.0, 1.0),
            clip: false,
        }
    }

    /// The lowercase identifier used in derived column names and on the wire
    pub fn identifier(&self) -> &'static str {
        match self {
            ScalingMethod::Standard { .. } => "standard",
            ScalingMethod::MinMax { .. } => "minmax",
            ScalingMethod::MaxAbs => "maxabs",
            ScalingMethod::L1 => "l1",
            ScalingMethod::L2 => "l2",
        }
    }
}

impl fmt::Display for ScalingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for ScalingMethod {
    type Err = Error;

    /// Parse an identifier into the default-configured method
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(ScalingMethod::standard()),
            "minmax" => Ok(ScalingMethod::minmax()),
            "maxabs" => Ok(ScalingMethod::MaxAbs),
            "l1" => Ok(ScalingMethod::L1),
            "l2" => Ok(ScalingMethod::L2),
            other => Err(Error::InvalidValue(format!(
                "unknown scaling method: {}",
                other
            ))),
        }
    }
}

/// Scale factor for rounding derived values to six decimals
const ROUND_SCALE: f64 = 1_000_000.0;

/// Round to six decimals, collapsing negative zero so reruns serialize
/// identically
fn round6(v: f64) -> f64 {
    let r = (v * ROUND_SCALE).round() / ROUND_SCALE;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Finish a derived value: round, and drop anything non-finite (overflow
/// from an extreme ratio) to missing rather than emitting NaN or infinity
fn finish(v: f64) -> Option<f64> {
    if v.is_finite() {
        Some(round6(v))
    } else {
        None
    }
}

/// Apply the given methods to the target columns, appending one derived
/// column per (method, column) pair.
///
/// Missing or non-coercible input cells propagate as `Null` into every
/// derived column for that row. A target column with no numeric values at
/// all yields no derived column for any method; that is logged at debug
/// level and does not fail the batch. `total_rows` is carried through
/// unchanged.
pub fn scale(
    sample: &TabularSample,
    methods: &[ScalingMethod],
    target_columns: &[String],
) -> Result<TabularSample> {
    if methods.is_empty() {
        return Err(Error::InvalidInput(
            "no scaling method selected".to_string(),
        ));
    }
    if target_columns.is_empty() {
        return Err(Error::InvalidInput("no target column selected".to_string()));
    }

    let mut seen = HashSet::new();
    for method in methods {
        if !seen.insert(method.identifier()) {
            return Err(Error::InvalidInput(format!(
                "duplicate scaling method: {}",
                method.identifier()
            )));
        }
        if let ScalingMethod::MinMax {
            feature_range: (lo, hi),
            ..
        } = method
        {
            if !(lo < hi) {
                return Err(Error::InvalidValue(format!(
                    "feature range must satisfy min < max, got ({}, {})",
                    lo, hi
                )));
            }
        }
    }

    let target_indices: Vec<usize> = target_columns
        .iter()
        .map(|name| sample.require_column(name))
        .collect::<Result<_>>()?;

    let mut result = sample.clone();

    for method in methods {
        match method {
            ScalingMethod::Standard { .. } | ScalingMethod::MinMax { .. } | ScalingMethod::MaxAbs => {
                apply_columnwise(sample, &mut result, method, target_columns, &target_indices)?;
            }
            ScalingMethod::L1 | ScalingMethod::L2 => {
                apply_rowwise(sample, &mut result, method, target_columns, &target_indices);
            }
        }
    }

    Ok(result)
}

/// Column-global methods: standard, minmax, maxabs
fn apply_columnwise(
    sample: &TabularSample,
    result: &mut TabularSample,
    method: &ScalingMethod,
    target_columns: &[String],
    target_indices: &[usize],
) -> Result<()> {
    for (name, &idx) in target_columns.iter().zip(target_indices) {
        let stats = match column_stats(sample, name)? {
            Some(stats) => stats,
            None => {
                log::debug!(
                    "column '{}' has no numeric values, skipping {} scaling",
                    name,
                    method.identifier()
                );
                continue;
            }
        };

        let values: Vec<Option<f64>> = sample
            .rows
            .iter()
            .map(|row| {
                let x = row[idx].as_number()?;
                let scaled = match *method {
                    ScalingMethod::Standard { with_mean, with_std } => {
                        let centered = if with_mean { x - stats.mean } else { x };
                        if !with_std {
                            centered
                        } else if stats.std_dev == 0.0 {
                            // zero-variance column: every value maps to 0
                            0.0
                        } else {
                            centered / stats.std_dev
                        }
                    }
                    ScalingMethod::MinMax {
                        feature_range: (lo, hi),
                        clip,
                    } => {
                        let range = stats.max - stats.min;
                        let scaled = if range == 0.0 {
                            // constant column: everything lands on the lower bound
                            lo
                        } else {
                            (x - stats.min) / range * (hi - lo) + lo
                        };
                        // rounding happens first; the clamp is the final
                        // guard so output never leaves the feature range
                        if clip {
                            return finish(scaled).map(|r| r.clamp(lo, hi));
                        }
                        scaled
                    }
                    ScalingMethod::MaxAbs => {
                        if stats.max_abs == 0.0 {
                            0.0
                        } else {
                            x / stats.max_abs
                        }
                    }
                    ScalingMethod::L1 | ScalingMethod::L2 => unreachable!(),
                };
                finish(scaled)
            })
            .collect();

        append_derived(result, name, method, values);
    }
    Ok(())
}

/// Row-wise methods: l1, l2. The denominator is per row, across all
/// selected target columns, with missing cells contributing 0.
fn apply_rowwise(
    sample: &TabularSample,
    result: &mut TabularSample,
    method: &ScalingMethod,
    target_columns: &[String],
    target_indices: &[usize],
) {
    let denominators: Vec<f64> = sample
        .rows
        .iter()
        .map(|row| {
            let acc: f64 = target_indices
                .iter()
                .filter_map(|&idx| row[idx].as_number())
                .map(|x| match method {
                    ScalingMethod::L1 => x.abs(),
                    _ => x * x,
                })
                .sum();
            match method {
                ScalingMethod::L1 => acc,
                _ => acc.sqrt(),
            }
        })
        .collect();

    for (name, &idx) in target_columns.iter().zip(target_indices) {
        let has_numeric = sample
            .rows
            .iter()
            .any(|row| row[idx].as_number().is_some());
        if !has_numeric {
            log::debug!(
                "column '{}' has no numeric values, skipping {} normalization",
                name,
                method.identifier()
            );
            continue;
        }

        let values: Vec<Option<f64>> = sample
            .rows
            .iter()
            .zip(&denominators)
            .map(|(row, &denom)| {
                let x = row[idx].as_number()?;
                if denom == 0.0 {
                    finish(0.0)
                } else {
                    finish(x / denom)
                }
            })
            .collect();

        append_derived(result, name, method, values);
    }
}

/// Append a derived column and its per-row values to the result sample
fn append_derived(
    result: &mut TabularSample,
    source_column: &str,
    method: &ScalingMethod,
    values: Vec<Option<f64>>,
) {
    result
        .columns
        .push(format!("{}_{}", source_column, method.identifier()));
    for (row, value) in result.rows.iter_mut().zip(values) {
        row.push(match value {
            Some(v) => CellValue::Number(v),
            None => CellValue::Null,
        });
    }
}
