//! Order-statistic quantiles for summary overlays.
//!
//! ## Purpose
//!
//! This module computes medians and quartiles for box and quartile-line
//! overlays and for IQR-based spread estimates.
//!
//! ## Key concepts
//!
//! The quantile at probability `p` of `n` sorted values sits at the fractional
//! position `h = (n - 1) * p`. The methods differ only in how they resolve a
//! non-integer `h`:
//!
//! | Method   | Value at `h = j + g`                    |
//! |----------|-----------------------------------------|
//! | Linear   | `x[j] + g * (x[j+1] - x[j])`            |
//! | Lower    | `x[j]`                                  |
//! | Higher   | `x[j+1]`                                |
//! | Nearest  | `x[round(h)]`, ties to the even index   |
//! | Midpoint | `(x[j] + x[j+1]) / 2`                   |
//!
//! For `[1, 2, 3, 4]` the linear rule gives Q1 = 1.75, median = 2.5 and
//! Q3 = 3.25.
//!
//! ## Invariants
//!
//! * Input must be sorted ascending.
//! * Any non-empty sample yields a value, including samples of size 1 to 3.
//! * Probabilities outside [0, 1] are clamped.

// External dependencies
use num_traits::Float;

/// Interpolation rule between order statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantileMethod {
    /// Linear interpolation between the bracketing order statistics.
    #[default]
    Linear,

    /// The lower bracketing order statistic.
    Lower,

    /// The higher bracketing order statistic.
    Higher,

    /// The nearest order statistic, ties resolved to the even position.
    Nearest,

    /// Mean of the two bracketing order statistics.
    Midpoint,
}

impl QuantileMethod {
    /// Name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Lower => "Lower",
            Self::Higher => "Higher",
            Self::Nearest => "Nearest",
            Self::Midpoint => "Midpoint",
        }
    }

    /// Quantile of `sorted` at probability `p`; NaN for an empty sample.
    pub fn quantile<T: Float>(&self, sorted: &[T], p: T) -> T {
        let n = sorted.len();
        if n == 0 {
            return T::nan();
        }
        if n == 1 {
            return sorted[0];
        }

        let p = p.max(T::zero()).min(T::one());
        let h = T::from(n - 1).unwrap() * p;
        let j = h.floor().to_usize().unwrap_or(0).min(n - 1);
        let k = (j + 1).min(n - 1);
        let g = h - T::from(j).unwrap();

        match self {
            Self::Linear => sorted[j] + g * (sorted[k] - sorted[j]),
            Self::Lower => sorted[j],
            Self::Higher => {
                if g > T::zero() {
                    sorted[k]
                } else {
                    sorted[j]
                }
            }
            Self::Nearest => {
                let half = T::from(0.5).unwrap();
                let pick_upper = if g > half {
                    true
                } else if g < half {
                    false
                } else {
                    j % 2 == 1
                };
                if pick_upper {
                    sorted[k]
                } else {
                    sorted[j]
                }
            }
            Self::Midpoint => {
                if g > T::zero() {
                    (sorted[j] + sorted[k]) / T::from(2.0).unwrap()
                } else {
                    sorted[j]
                }
            }
        }
    }

    /// First quartile, median and third quartile.
    pub fn quartiles<T: Float>(&self, sorted: &[T]) -> (T, T, T) {
        (
            self.quantile(sorted, T::from(0.25).unwrap()),
            self.quantile(sorted, T::from(0.5).unwrap()),
            self.quantile(sorted, T::from(0.75).unwrap()),
        )
    }
}
