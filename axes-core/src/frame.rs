//! In-memory tabular snapshot: cells, numeric series, columns, feature matrices.
//!
//! A `FeatureMatrix` is built fresh per invocation from caller-supplied data.
//! Columns are position-aligned; the last column is the classification target
//! by convention.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::FrameError;

/// One raw tabular value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Numeric coercion: numbers and numeric text become values, everything
    /// else (including NaN/Inf) becomes missing. Never fails.
    pub fn to_number(&self) -> Option<f64> {
        let v = match self {
            Cell::Int(i) => *i as f64,
            Cell::Float(f) => *f,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Null | Cell::Bool(_) => return None,
        };
        v.is_finite().then_some(v)
    }

    /// True for `Int` and `Float` cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }

    pub fn is_null(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Stable string key used to encode class labels.
    pub fn label_key(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Bool(b) => Some(b.to_string()),
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) if f.is_nan() => None,
            Cell::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some((*f as i64).to_string()),
            Cell::Float(f) => Some(f.to_string()),
            Cell::Text(s) => Some(s.clone()),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

/// An ordered sequence of numeric observations; `None` marks a missing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    /// Build from raw floats; non-finite values become missing.
    pub fn from_values(values: &[f64]) -> Self {
        Self {
            values: values
                .iter()
                .map(|v| v.is_finite().then_some(*v))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.values
    }

    /// The present observations, in order.
    pub fn valid(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }

    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// A named column of raw cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Convenience constructor for a fully numeric column.
    pub fn numeric(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().map(|v| Cell::Float(*v)).collect())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A column is numeric when it has at least one non-null cell and every
    /// non-null cell is an `Int` or `Float`.
    pub fn is_numeric(&self) -> bool {
        let mut seen = false;
        for cell in self.cells.iter().filter(|c| !c.is_null()) {
            if !cell.is_numeric() {
                return false;
            }
            seen = true;
        }
        seen
    }

    /// Coerce every cell to a number (invalid entries become missing).
    pub fn to_series(&self) -> Series {
        Series::new(self.cells.iter().map(Cell::to_number).collect())
    }
}

/// A dataset snapshot: equal-length columns with unique names.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    columns: Vec<Column>,
    rows: usize,
}

impl FeatureMatrix {
    /// Build a matrix, rejecting ragged or duplicate columns.
    pub fn new(columns: Vec<Column>) -> Result<Self, FrameError> {
        let rows = columns.first().map(Column::len).ok_or(FrameError::Empty)?;
        let mut names = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.len() != rows {
                return Err(FrameError::RaggedColumns {
                    column: column.name.clone(),
                    expected: rows,
                    actual: column.len(),
                });
            }
            if !names.insert(column.name.as_str()) {
                return Err(FrameError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a column, failing with `MissingColumn`.
    pub fn require(&self, name: &str) -> Result<&Column, FrameError> {
        self.column(name).ok_or_else(|| FrameError::MissingColumn {
            column: name.to_string(),
        })
    }

    /// The conventional target column.
    pub fn last_column(&self) -> &Column {
        // `new` guarantees at least one column.
        &self.columns[self.columns.len() - 1]
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_numeric())
    }
}
