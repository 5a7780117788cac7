//! Lightweight value/column/batch types that flow between operators.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::DataType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    I64(i64),
    F64(f64),
}

impl Scalar {
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::I64(_) => DataType::Int64,
            Scalar::F64(_) => DataType::Float64,
        }
    }

    /// The value widened to a real.
    pub fn as_f64(&self) -> f64 {
        match self {
            Scalar::I64(i) => *i as f64,
            Scalar::F64(f) => *f,
        }
    }
}

/// Integers print bare, reals always carry a fractional part (`4` vs `4.0`).
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::I64(i) => write!(f, "{i}"),
            Scalar::F64(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Scalar>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Scalar>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Data type of the column, taken from its first value.
    /// Empty columns report `fallback`.
    pub fn data_type_or(&self, fallback: DataType) -> DataType {
        self.values
            .first()
            .map(Scalar::data_type)
            .unwrap_or(fallback)
    }
}

/// Renders as a bracketed list: `[1, 4, 9]`, or `[]` when empty.
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

/// A block of equally long columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowBatch {
    pub columns: Vec<Column>,
}

impl RowBatch {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}
