//! Charting
//!
//! Declarative chart specifications and everything needed to draw them:
//!
//! - **spec**: `ChartSpec` and its encodings (mark, x, y, color, filter)
//! - **bin**: Equal-width binning with nice step sizes
//! - **eval**: Evaluates a spec against a dataset into a `ChartTable`
//! - **vega**: Vega-Lite projection for the browser surface
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust
//! use stroke_dashboard::chart::{evaluate, ChartSpec, ColorEncoding, Encoding, Mark};
//! use stroke_dashboard::dataset::{Dataset, Value};
//!
//! let ds = Dataset::from_rows(
//!     &["gender"],
//!     vec![vec![Value::from("Male")], vec![Value::from("Female")]],
//! );
//! let spec = ChartSpec::new(Mark::Bar, Encoding::nominal("gender"), Encoding::count())
//!     .color(ColorEncoding::by(Encoding::nominal("gender")));
//!
//! let table = evaluate(&spec, &ds).unwrap();
//! assert_eq!(table.len(), 2);
//! ```

pub mod bin;
pub mod error;
pub mod eval;
pub mod spec;
pub mod vega;

pub use bin::{Bin, Binning};
pub use error::{ChartError, ChartResult};
pub use eval::{evaluate, AxisKey, ChartRow, ChartTable, ColorValue, Measure};
pub use spec::{
    Aggregate, BinParams, ChartSpec, ColorEncoding, Encoding, FieldType, Mark, Predicate,
    DEFAULT_MAX_BINS,
};
pub use vega::{to_vega_lite, VEGA_LITE_SCHEMA};
