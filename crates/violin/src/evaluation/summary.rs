//! Box-plot summary statistics.
//!
//! ## Purpose
//!
//! This module computes the statistics drawn by the box and quartile-line
//! overlays: the five-number summary, mean, Tukey whiskers and outliers.
//!
//! ## Key concepts
//!
//! * **Quartiles**: Computed with the configured [`QuantileMethod`].
//! * **Whiskers**: The most extreme observations within `whisker * IQR` of
//!   the box; observations beyond them are outliers.
//!
//! ## Invariants
//!
//! * Input must be sorted ascending and non-empty.
//! * `min <= whisker_low <= q1 <= median <= q3 <= whisker_high <= max`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::quantiles::QuantileMethod;

/// Summary statistics of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary<T> {
    /// Number of observations.
    pub n: usize,

    /// Arithmetic mean.
    pub mean: T,

    /// Smallest observation.
    pub min: T,

    /// First quartile.
    pub q1: T,

    /// Median.
    pub median: T,

    /// Third quartile.
    pub q3: T,

    /// Largest observation.
    pub max: T,

    /// Interquartile range.
    pub iqr: T,

    /// Lower whisker end.
    pub whisker_low: T,

    /// Upper whisker end.
    pub whisker_high: T,

    /// Observations beyond the whiskers, ascending.
    pub outliers: Vec<T>,
}

impl<T: Float> BoxSummary<T> {
    /// Summarize a sorted, non-empty sample.
    ///
    /// Returns `None` for an empty sample.
    pub fn compute(sorted: &[T], method: QuantileMethod, whisker: T) -> Option<Self> {
        let n = sorted.len();
        if n == 0 {
            return None;
        }

        let (q1, median, q3) = method.quartiles(sorted);
        let iqr = q3 - q1;
        let fence_low = q1 - whisker * iqr;
        let fence_high = q3 + whisker * iqr;

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= fence_low)
            .unwrap_or(q1)
            .min(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= fence_high)
            .unwrap_or(q3)
            .max(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|&v| v < whisker_low || v > whisker_high)
            .collect();

        let mean = sorted.iter().fold(T::zero(), |acc, &v| acc + v) / T::from(n).unwrap();

        Some(Self {
            n,
            mean,
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[n - 1],
            iqr,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}
