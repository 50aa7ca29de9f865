//! Spread (scale) estimation for bandwidth rules.
//!
//! Rule-of-thumb bandwidths multiply a spread estimate by a sample-size
//! factor. The classical choice is the standard deviation; the robust choices
//! resist outliers and heavy tails.
//!
//! All robust estimates are rescaled to be consistent with the standard
//! deviation under normality (MAD × 1.4826, IQR ÷ 1.349).

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::quantiles::QuantileMethod;

/// Consistency constant turning a MAD into a normal standard deviation.
const MAD_TO_SD: f64 = 1.4826;

/// Interquartile range of the standard normal distribution.
const NORMAL_IQR: f64 = 1.349;

// Method for measuring the spread of a sample.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpreadMethod {
    // Sample standard deviation (n - 1 denominator).
    #[default]
    StdDev,

    // Median absolute deviation, scaled to the normal SD.
    MAD,

    // Interquartile range, scaled to the normal SD.
    IQR,

    // `min(StdDev, IQR / 1.349)`, the spread used by Silverman's robust rule.
    Robust,
}

impl SpreadMethod {
    // Compute the spread of sorted values using the selected method.
    pub fn compute<T: Float>(&self, sorted: &[T]) -> T {
        match self {
            Self::StdDev => Self::std_dev(sorted),
            Self::MAD => Self::mad(sorted),
            Self::IQR => Self::scaled_iqr(sorted),
            Self::Robust => {
                let sd = Self::std_dev(sorted);
                let iqr = Self::scaled_iqr(sorted);
                // A zero IQR (heavy ties) would collapse the bandwidth
                if iqr > T::zero() {
                    sd.min(iqr)
                } else {
                    sd
                }
            }
        }
    }

    // Sample standard deviation; zero for fewer than two points.
    pub fn std_dev<T: Float>(vals: &[T]) -> T {
        let n = vals.len();
        if n < 2 {
            return T::zero();
        }
        let nf = T::from(n).unwrap();
        let mean = vals.iter().fold(T::zero(), |acc, &v| acc + v) / nf;
        let ss = vals
            .iter()
            .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean));
        (ss / (nf - T::one())).sqrt()
    }

    #[inline]
    fn scaled_iqr<T: Float>(sorted: &[T]) -> T {
        if sorted.is_empty() {
            return T::zero();
        }
        let q1 = QuantileMethod::Linear.quantile(sorted, T::from(0.25).unwrap());
        let q3 = QuantileMethod::Linear.quantile(sorted, T::from(0.75).unwrap());
        (q3 - q1) / T::from(NORMAL_IQR).unwrap()
    }

    #[inline]
    fn mad<T: Float>(vals: &[T]) -> T {
        if vals.is_empty() {
            return T::zero();
        }

        let mut scratch = vals.to_vec();
        let median = Self::median_inplace(&mut scratch);
        for val in scratch.iter_mut() {
            *val = (*val - median).abs();
        }

        Self::median_inplace(&mut scratch) * T::from(MAD_TO_SD).unwrap()
    }

    // Median in place using quickselect.
    #[inline]
    pub(crate) fn median_inplace<T: Float>(vals: &mut [T]) -> T {
        let n = vals.len();
        if n == 0 {
            return T::zero();
        }

        let mid = n / 2;
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        let upper = vals[mid];

        if n % 2 == 0 {
            // Largest value of the lower half
            let lower = vals[..mid]
                .iter()
                .copied()
                .fold(T::neg_infinity(), T::max);
            (lower + upper) / T::from(2.0).unwrap()
        } else {
            upper
        }
    }
}
