//! Equal-width binning with "nice" step sizes.
//!
//! Steps are drawn from {1, 2, 5} x 10^k and chosen as the smallest step
//! that covers the data extent in at most `maxbins` bins.

use serde::Serialize;

/// Absorbs rounding when a value sits exactly on a bin boundary
const EPSILON: f64 = 1e-14;

/// A half-open interval `[start, end)`; the last bin also includes its end
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
}

/// Bin layout computed over a data extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binning {
    pub start: f64,
    pub step: f64,
    pub count: usize,
}

impl Binning {
    /// Compute bins over `[min, max]`
    pub fn nice(min: f64, max: f64, maxbins: usize) -> Self {
        let maxbins = maxbins.max(1);
        let mut span = max - min;
        if span <= 0.0 {
            span = if min != 0.0 { min.abs() } else { 1.0 };
        }

        let min_step = span / maxbins as f64;
        let magnitude = 10f64.powf(min_step.log10().floor());
        let step = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|m| m * magnitude)
            .find(|s| *s >= min_step)
            .unwrap_or(10.0 * magnitude);

        let first = (min / step).floor();
        let mut last = (max / step).ceil();
        if last <= first {
            last = first + 1.0;
        }

        Self {
            start: first * step,
            step,
            count: (last - first).round() as usize,
        }
    }

    /// Bin layout for a set of values.
    ///
    /// `None` when there are no values or the extent cannot be split into
    /// finite bins (a span that overflows, or a step that underflows to zero).
    pub fn for_values(values: &[f64], maxbins: usize) -> Option<Self> {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if values.is_empty() || !min.is_finite() || !max.is_finite() {
            return None;
        }
        if !(max - min).is_finite() {
            return None;
        }

        let binning = Self::nice(min, max, maxbins);
        binning.is_usable().then_some(binning)
    }

    fn is_usable(&self) -> bool {
        self.step.is_finite() && self.step > 0.0 && self.start.is_finite() && self.count > 0
    }

    /// Index of the bin holding `value`
    pub fn index_of(&self, value: f64) -> usize {
        let idx = ((value - self.start) / self.step + EPSILON).floor();
        (idx.max(0.0) as usize).min(self.count.saturating_sub(1))
    }

    pub fn bin(&self, index: usize) -> Bin {
        let first = (self.start / self.step).round();
        Bin {
            start: (first + index as f64) * self.step,
            end: (first + index as f64 + 1.0) * self.step,
        }
    }

    pub fn bin_of(&self, value: f64) -> Bin {
        self.bin(self.index_of(value))
    }
}
