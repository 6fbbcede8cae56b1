//! Core data types for the in-memory dataset
//!
//! - `Value`: a single cell (null, integer, float or text)
//! - `ColumnKind`: the inferred type of a column
//! - `Column`: a named, typed vector of cells
//! - `Dataset`: an immutable column-major table
//! - `Row`: a borrowed view of one row

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value (integers widen to f64)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Loose equality used by filter predicates: `Int(1)` equals `Float(1.0)`.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => match (self, other) {
                (Value::Text(a), Value::Text(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Total ordering: nulls first, then numbers, then text.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        fn rank(v: &Value) -> u8 {
            if v.is_null() {
                0
            } else if v.as_f64().is_some() {
                1
            } else {
                2
            }
        }

        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => match (self, other) {
                (Value::Text(a), Value::Text(b)) => a.cmp(b),
                _ => rank(self).cmp(&rank(other)),
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, ""),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) if v.is_nan() => write!(f, ""),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) if v.is_nan() => serializer.serialize_none(),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Inferred type of a column
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }

    /// Infer the kind of a column from its cells.
    ///
    /// Integer columns containing nulls become float, and an all-null column
    /// is float, mirroring how dataframe libraries type CSV input.
    pub fn infer(values: &[Value]) -> Self {
        let mut has_null = false;
        let mut has_float = false;

        for value in values {
            match value {
                Value::Text(_) => return ColumnKind::Text,
                Value::Float(v) if v.is_nan() => has_null = true,
                Value::Float(_) => has_float = true,
                Value::Null => has_null = true,
                Value::Int(_) => {}
            }
        }

        if has_float || has_null {
            ColumnKind::Float
        } else {
            ColumnKind::Integer
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

/// A named, typed column
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<Value>,
}

impl Column {
    /// Build a column, inferring its kind and normalizing cells to it
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        let kind = ColumnKind::infer(&values);
        let values = match kind {
            ColumnKind::Float => values
                .into_iter()
                .map(|v| match v {
                    Value::Int(i) => Value::Float(i as f64),
                    Value::Float(f) if f.is_nan() => Value::Null,
                    other => other,
                })
                .collect(),
            ColumnKind::Text => values
                .into_iter()
                .map(|v| match v {
                    Value::Text(_) | Value::Null => v,
                    _ if v.is_null() => Value::Null,
                    _ => Value::Text(v.to_string()),
                })
                .collect(),
            ColumnKind::Integer => values,
        };

        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Numeric cells, `None` for nulls
    pub fn numeric_values(&self) -> Vec<Option<f64>> {
        self.values.iter().map(Value::as_f64).collect()
    }
}

/// An immutable in-memory table
///
/// Stored column-major; every column has the same length.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from columns. Shorter columns are padded with nulls.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let row_count = columns.iter().map(|c| c.values.len()).max().unwrap_or(0);
        let columns = columns
            .into_iter()
            .map(|mut c| {
                c.values.resize(row_count, Value::Null);
                c
            })
            .collect();

        Self { columns, row_count }
    }

    /// Build a dataset from column names and row-major records
    pub fn from_rows<S: AsRef<str>>(names: &[S], rows: Vec<Vec<Value>>) -> Self {
        let mut cells: Vec<Vec<Value>> = vec![Vec::with_capacity(rows.len()); names.len()];
        for mut row in rows {
            row.resize(names.len(), Value::Null);
            for (idx, value) in row.into_iter().enumerate() {
                cells[idx].push(value);
            }
        }

        let columns = names
            .iter()
            .zip(cells)
            .map(|(name, values)| Column::new(name.as_ref(), values))
            .collect();

        Self::from_columns(columns)
    }

    /// Column names in file order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Case-sensitive column lookup
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Required columns that are absent, in the order given
    pub fn missing_columns<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|name| !self.has_column(name))
            .collect()
    }

    /// Integer and float columns, in file order
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.kind.is_numeric()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Read-only row views
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.row_count).map(move |index| Row {
            dataset: self,
            index,
        })
    }

    /// Owned row-major copy of every cell
    pub fn records(&self) -> Vec<Vec<Value>> {
        self.rows()
            .map(|row| self.columns.iter().map(|c| c.values[row.index].clone()).collect())
            .collect()
    }
}

/// A borrowed view of a single row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell by column name, `None` when the column does not exist
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.dataset
            .column(column)
            .map(|c| &c.values[self.index])
    }
}
