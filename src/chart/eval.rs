//! Chart Evaluation
//!
//! Applies a [`ChartSpec`] to a dataset and produces the concrete table the
//! chart draws: one row per bar, line point or grid cell.
//!
//! Evaluation order: filter → bin → group by (x, color field) → aggregate.

use super::bin::{Bin, Binning};
use super::error::{ChartError, ChartResult};
use super::spec::{Aggregate, ChartSpec, ColorEncoding, Encoding};
use crate::dataset::{ColumnKind, Dataset, Row, Value};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Position of a row on the x axis
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum AxisKey {
    Value(Value),
    Bin(Bin),
}

/// Value on the y axis
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Measure {
    Aggregate(f64),
    Value(Value),
}

impl Measure {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Measure::Aggregate(v) => Some(*v),
            Measure::Value(v) => v.as_f64(),
        }
    }
}

/// Resolved color of a row
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ColorValue {
    /// Value of the color field
    Field(Value),
    /// Literal color from a conditional encoding
    Literal(String),
}

/// One drawn element
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartRow {
    pub x: AxisKey,
    pub y: Measure,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorValue>,
}

/// The evaluated chart
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChartTable {
    pub rows: Vec<ChartRow>,
}

impl ChartTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct x keys in draw order
    pub fn categories(&self) -> Vec<&AxisKey> {
        let mut keys: Vec<&AxisKey> = Vec::new();
        for row in &self.rows {
            if !keys.contains(&&row.x) {
                keys.push(&row.x);
            }
        }
        keys
    }

    /// Sum of y over every row whose x equals `x`
    pub fn total_for(&self, x: impl Into<Value>) -> f64 {
        let key = AxisKey::Value(x.into());
        self.rows
            .iter()
            .filter(|r| r.x == key)
            .filter_map(|r| r.y.as_f64())
            .sum()
    }
}

/// Total-ordered wrapper used as a grouping key
#[derive(Debug, Clone)]
struct SortValue(Value);

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    count: usize,
    sum: f64,
    numeric: usize,
}

/// Evaluate a chart specification against a dataset
pub fn evaluate(spec: &ChartSpec, dataset: &Dataset) -> ChartResult<ChartTable> {
    spec.validate()?;

    let rows: Vec<Row> = dataset
        .rows()
        .filter(|row| match &spec.filter {
            Some(predicate) => predicate.matches(row.get(&predicate.field)),
            None => true,
        })
        .collect();

    let binning = match spec.x.bin {
        Some(params) => {
            let field = spec.x.field_name().unwrap_or_default();
            require_numeric(dataset, field)?;
            let values: Vec<f64> = rows
                .iter()
                .filter_map(|r| r.get(field).and_then(Value::as_f64))
                .collect();
            Binning::for_values(&values, params.maxbins)
        }
        None => None,
    };

    if spec.is_aggregated() {
        aggregate(spec, dataset, &rows, binning.as_ref())
    } else {
        Ok(raw(spec, &rows, binning.as_ref()))
    }
}

/// One output row per input row
fn raw(spec: &ChartSpec, rows: &[Row], binning: Option<&Binning>) -> ChartTable {
    let rows = rows
        .iter()
        .filter_map(|row| {
            let x = axis_key(&spec.x, row, binning)?;
            let y = cell(&spec.y, row);
            let color = spec.color.as_ref().map(|c| match c {
                ColorEncoding::Field { encoding } => ColorValue::Field(cell(encoding, row)),
                ColorEncoding::Condition {
                    test,
                    value,
                    otherwise,
                } => {
                    if test.matches(row.get(&test.field)) {
                        ColorValue::Literal(value.clone())
                    } else {
                        ColorValue::Literal(otherwise.clone())
                    }
                }
            });
            Some(ChartRow {
                x,
                y: Measure::Value(y),
                color,
            })
        })
        .collect();

    ChartTable { rows }
}

fn aggregate(
    spec: &ChartSpec,
    dataset: &Dataset,
    rows: &[Row],
    binning: Option<&Binning>,
) -> ChartResult<ChartTable> {
    let aggregate = spec.y.aggregate.unwrap_or(Aggregate::Count);
    if aggregate == Aggregate::Mean {
        require_numeric(dataset, spec.y.field_name().unwrap_or_default())?;
    }

    let color_field = match &spec.color {
        Some(ColorEncoding::Field { encoding }) => Some(encoding),
        _ => None,
    };

    let mut groups: BTreeMap<(SortValue, SortValue), Accumulator> = BTreeMap::new();

    for row in rows {
        let x = match axis_key(&spec.x, row, binning) {
            Some(AxisKey::Value(v)) => v,
            Some(AxisKey::Bin(bin)) => Value::Float(bin.start),
            None => continue,
        };
        let color = color_field
            .map(|enc| cell(enc, row))
            .unwrap_or(Value::Null);

        let acc = groups.entry((SortValue(x), SortValue(color))).or_default();
        acc.count += 1;
        if let Some(v) = spec.y.field_name().and_then(|f| row.get(f)).and_then(Value::as_f64) {
            acc.sum += v;
            acc.numeric += 1;
        }
    }

    let mut table = ChartTable::default();
    for ((SortValue(x), SortValue(color)), acc) in groups {
        let y = match aggregate {
            Aggregate::Count => acc.count as f64,
            Aggregate::Mean if acc.numeric == 0 => continue,
            Aggregate::Mean => acc.sum / acc.numeric as f64,
        };

        let x_key = match (binning, x.as_f64()) {
            (Some(b), Some(start)) => AxisKey::Bin(Bin {
                start,
                end: start + b.step,
            }),
            _ => AxisKey::Value(x.clone()),
        };

        let color = match &spec.color {
            Some(ColorEncoding::Field { .. }) => Some(ColorValue::Field(color)),
            Some(ColorEncoding::Condition {
                test,
                value,
                otherwise,
            }) => {
                // The aggregated datum only carries its grouping fields
                let datum = match (binning, spec.x.field_name()) {
                    (None, Some(field)) if field == test.field => Some(&x),
                    _ => None,
                };
                if test.matches(datum) {
                    Some(ColorValue::Literal(value.clone()))
                } else {
                    Some(ColorValue::Literal(otherwise.clone()))
                }
            }
            None => None,
        };

        table.rows.push(ChartRow {
            x: x_key,
            y: Measure::Aggregate(y),
            color,
        });
    }

    Ok(table)
}

fn axis_key(encoding: &Encoding, row: &Row, binning: Option<&Binning>) -> Option<AxisKey> {
    let value = cell(encoding, row);
    if encoding.bin.is_some() {
        let v = value.as_f64()?;
        return binning.map(|b| AxisKey::Bin(b.bin_of(v)));
    }
    Some(AxisKey::Value(value))
}

/// Cell for an encoding; absent fields read as null
fn cell(encoding: &Encoding, row: &Row) -> Value {
    encoding
        .field_name()
        .and_then(|f| row.get(f))
        .cloned()
        .unwrap_or(Value::Null)
}

fn require_numeric(dataset: &Dataset, field: &str) -> ChartResult<()> {
    match dataset.column(field) {
        Some(column) if column.kind == ColumnKind::Text => Err(ChartError::TypeMismatch {
            field: field.to_string(),
            expected: "numeric".to_string(),
        }),
        _ => Ok(()),
    }
}
