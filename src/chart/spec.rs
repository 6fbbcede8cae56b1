//! Chart Specification
//!
//! A library-agnostic, declarative description of one visualization:
//! a mark, x/y encodings, an optional color encoding and an optional
//! filter. Built fresh on every render.

use super::error::{ChartError, ChartResult};
use crate::dataset::Value;
use serde::Serialize;

/// Default upper bound on the number of bins for a binned encoding
pub const DEFAULT_MAX_BINS: usize = 10;

/// Graphical mark
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Bar,
    Line,
    Rect,
}

/// Measurement type of an encoded field
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Nominal,
    Ordinal,
    Quantitative,
}

/// Aggregation applied to an encoding
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    /// Number of records in the group
    Count,
    /// Mean of the non-null numeric values in the group
    Mean,
}

/// Binning parameters
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BinParams {
    pub maxbins: usize,
}

impl Default for BinParams {
    fn default() -> Self {
        Self {
            maxbins: DEFAULT_MAX_BINS,
        }
    }
}

/// A channel encoding (x, y or color)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Encoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<Aggregate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<BinParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Encoding {
    /// Encode a field with an explicit type
    pub fn field(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field: Some(name.into()),
            field_type,
            aggregate: None,
            bin: None,
            title: None,
        }
    }

    pub fn nominal(name: impl Into<String>) -> Self {
        Self::field(name, FieldType::Nominal)
    }

    pub fn ordinal(name: impl Into<String>) -> Self {
        Self::field(name, FieldType::Ordinal)
    }

    pub fn quantitative(name: impl Into<String>) -> Self {
        Self::field(name, FieldType::Quantitative)
    }

    /// Record count (`count()`)
    pub fn count() -> Self {
        Self {
            field: None,
            field_type: FieldType::Quantitative,
            aggregate: Some(Aggregate::Count),
            bin: None,
            title: None,
        }
    }

    /// Mean of a field (`mean(field)`)
    pub fn mean(name: impl Into<String>) -> Self {
        Self {
            aggregate: Some(Aggregate::Mean),
            ..Self::quantitative(name)
        }
    }

    /// Builder method: bin with default parameters
    pub fn binned(mut self) -> Self {
        self.bin = Some(BinParams::default());
        self
    }

    /// Builder method: set the axis/legend title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    fn validate(&self, channel: &str) -> ChartResult<()> {
        match (&self.field, self.aggregate) {
            (None, None) => {
                return Err(ChartError::InvalidSpec(format!(
                    "{} encoding needs a field or an aggregate",
                    channel
                )))
            }
            (None, Some(Aggregate::Mean)) => {
                return Err(ChartError::InvalidSpec(format!(
                    "{} encoding: mean requires a field",
                    channel
                )))
            }
            _ => {}
        }

        if self.bin.is_some() {
            if self.field_type != FieldType::Quantitative {
                return Err(ChartError::InvalidSpec(format!(
                    "{} encoding: binned field must be quantitative",
                    channel
                )));
            }
            if self.aggregate.is_some() {
                return Err(ChartError::InvalidSpec(format!(
                    "{} encoding cannot be both binned and aggregated",
                    channel
                )));
            }
            if self.bin.map(|b| b.maxbins).unwrap_or(0) == 0 {
                return Err(ChartError::InvalidSpec(format!(
                    "{} encoding: maxbins must be positive",
                    channel
                )));
            }
        }

        Ok(())
    }
}

/// Field-equality predicate (`datum.field == value`)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Predicate {
    pub field: String,
    pub equal: Value,
}

impl Predicate {
    pub fn field_equal(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            equal: value.into(),
        }
    }

    /// Evaluate against a cell; absent fields never match
    pub fn matches(&self, value: Option<&Value>) -> bool {
        value.map(|v| v.loosely_equals(&self.equal)).unwrap_or(false)
    }
}

/// Color channel
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorEncoding {
    /// Color by a field
    Field { encoding: Encoding },
    /// Fixed color chosen by a predicate
    Condition {
        test: Predicate,
        value: String,
        otherwise: String,
    },
}

impl ColorEncoding {
    pub fn by(encoding: Encoding) -> Self {
        ColorEncoding::Field { encoding }
    }

    pub fn condition(test: Predicate, value: impl Into<String>, otherwise: impl Into<String>) -> Self {
        ColorEncoding::Condition {
            test,
            value: value.into(),
            otherwise: otherwise.into(),
        }
    }

    /// Field this channel reads from the data, if any
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ColorEncoding::Field { encoding } => encoding.field_name(),
            ColorEncoding::Condition { test, .. } => Some(test.field.as_str()),
        }
    }
}

/// A declarative chart specification
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub mark: Mark,
    pub x: Encoding,
    pub y: Encoding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorEncoding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Predicate>,
    /// Size the chart to the width of its container
    pub use_container_width: bool,
}

impl ChartSpec {
    pub fn new(mark: Mark, x: Encoding, y: Encoding) -> Self {
        Self {
            title: None,
            mark,
            x,
            y,
            color: None,
            filter: None,
            use_container_width: true,
        }
    }

    /// Builder method: set the chart title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method: set the color channel
    pub fn color(mut self, color: ColorEncoding) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder method: keep only records matching the predicate
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filter = Some(predicate);
        self
    }

    /// Whether the y channel aggregates records
    pub fn is_aggregated(&self) -> bool {
        self.y.aggregate.is_some()
    }

    /// Check the structural rules of the specification
    pub fn validate(&self) -> ChartResult<()> {
        self.x.validate("x")?;
        self.y.validate("y")?;

        if self.x.aggregate.is_some() {
            return Err(ChartError::InvalidSpec(
                "x encoding cannot be aggregated".to_string(),
            ));
        }
        if self.y.bin.is_some() {
            return Err(ChartError::InvalidSpec(
                "y encoding cannot be binned".to_string(),
            ));
        }

        if let Some(ColorEncoding::Field { encoding }) = &self.color {
            encoding.validate("color")?;
            if encoding.aggregate.is_some() || encoding.bin.is_some() {
                return Err(ChartError::InvalidSpec(
                    "color encoding must be a plain field".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Every field the chart reads, without duplicates
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        let candidates = [
            self.x.field_name(),
            self.y.field_name(),
            self.color.as_ref().and_then(|c| c.field_name()),
            self.filter.as_ref().map(|p| p.field.as_str()),
        ];

        for field in candidates.into_iter().flatten() {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        fields
    }
}
