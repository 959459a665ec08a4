//! Column statistics
//!
//! Descriptive statistics over a single column of a [`TabularSample`],
//! computed fresh per invocation. These feed the column-global scaling
//! methods; the row-wise L1/L2 normalizers aggregate along the other axis
//! and have their own path in [`crate::scaling`].

use crate::error::Result;
use crate::sample::TabularSample;

/// Descriptive statistics for one column
///
/// Only non-missing numeric values participate. Mean and standard deviation
/// use the population formula (divide by `count`, not `count - 1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Count of non-missing numeric values
    pub count: usize,
    /// Population mean
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Largest absolute value
    pub max_abs: f64,
}

/// Compute statistics for the named column.
///
/// Cells that are null, empty, or fail numeric coercion are excluded from
/// the statistics. Returns `Ok(None)` when no numeric values remain — the
/// caller skips such a column rather than failing the batch. An unknown
/// column name is an error.
pub fn column_stats(sample: &TabularSample, column: &str) -> Result<Option<ColumnStats>> {
    let idx = sample.require_column(column)?;

    let values: Vec<f64> = sample
        .rows
        .iter()
        .filter_map(|row| row.get(idx).and_then(|cell| cell.as_number()))
        .collect();

    Ok(stats_of(&values))
}

/// Statistics over an already-extracted value list
pub(crate) fn stats_of(values: &[f64]) -> Option<ColumnStats> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / count as f64;
    let std_dev = variance.sqrt();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut max_abs = 0.0_f64;
    for &x in values {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
        if x.abs() > max_abs {
            max_abs = x.abs();
        }
    }

    Some(ColumnStats {
        count,
        mean,
        std_dev,
        min,
        max,
        max_abs,
    })
}
