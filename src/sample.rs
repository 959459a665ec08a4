//! Tabular sample data model
//!
//! A sample is a bounded subset of a dataset's rows used for client-side
//! preview computations. Cells are loosely typed: numbers, raw text, or
//! missing. Numeric coercion is lenient by contract — a cell that cannot be
//! read as a number is treated as missing, never as an error.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single cell of a tabular sample
///
/// Serialized untagged, so the wire form is a plain JSON scalar or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric value
    Number(f64),
    /// Raw text, possibly numeric-looking
    Text(String),
    /// Missing value
    Null,
}

impl CellValue {
    /// Coerce the cell to a number, if possible.
    ///
    /// Empty/whitespace-only text and text that does not parse as a float
    /// are missing. Non-finite numbers are also treated as missing so that
    /// statistics never absorb a NaN or infinity.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) if v.is_finite() => Some(*v),
            CellValue::Number(_) => None,
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
            }
            CellValue::Null => None,
        }
    }

    /// Whether the cell is missing for numeric purposes
    pub fn is_missing(&self) -> bool {
        self.as_number().is_none()
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Null
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => CellValue::Number(v),
            None => CellValue::Null,
        }
    }
}

/// An ordered list of named columns and the rows aligned to them
///
/// Invariant: every row has exactly `columns.len()` cells. `total_rows`
/// carries the size of the full dataset the sample was drawn from, which can
/// be larger than `rows.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabularSample {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub total_rows: usize,
}

impl TabularSample {
    /// Create an empty sample with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        TabularSample {
            columns,
            rows: Vec::new(),
            total_rows: 0,
        }
    }

    /// Create a sample from rows, enforcing the shape invariant
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let expected = columns.len();
        for row in &rows {
            if row.len() != expected {
                return Err(Error::InconsistentRowCount {
                    expected,
                    found: row.len(),
                });
            }
        }
        let total_rows = rows.len();
        Ok(TabularSample {
            columns,
            rows,
            total_rows,
        })
    }

    /// Set the full-dataset row count this sample represents
    pub fn with_total_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = total_rows;
        self
    }

    /// Number of rows in the sample (not the full dataset)
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Positional index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Positional index of a column, or an error when absent
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Cell at (row, column), if in bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Append a row, enforcing the shape invariant
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::InconsistentRowCount {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Verify the shape invariant, e.g. after deserialization
    pub fn validate(&self) -> Result<()> {
        let expected = self.columns.len();
        for row in &self.rows {
            if row.len() != expected {
                return Err(Error::InconsistentRowCount {
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(())
    }

    /// Draw a bounded, order-preserving row subsample without replacement.
    ///
    /// Used to cap the number of rows processed client-side. A seed makes
    /// the draw reproducible; without one the generator is seeded from the
    /// OS. `total_rows` is preserved, since the sample still represents the
    /// same dataset.
    pub fn sample_rows(&self, max_rows: usize, seed: Option<u64>) -> TabularSample {
        if self.rows.len() <= max_rows {
            return self.clone();
        }

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        let mut indices: Vec<usize> =
            rand::seq::index::sample(&mut rng, self.rows.len(), max_rows).into_vec();
        indices.sort_unstable();

        let rows = indices.iter().map(|&i| self.rows[i].clone()).collect();
        TabularSample {
            columns: self.columns.clone(),
            rows,
            total_rows: self.total_rows,
        }
    }
}
