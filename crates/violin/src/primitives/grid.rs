//! Evaluation grids and numerical integration.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

/// `n` evenly spaced points from `lo` to `hi`, both inclusive.
///
/// The last point is set to `hi` exactly so the grid covers the full range
/// regardless of rounding.
pub fn linspace<T: Float>(lo: T, hi: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / T::from(n - 1).unwrap();
            let mut points: Vec<T> = (0..n).map(|i| lo + step * T::from(i).unwrap()).collect();
            points[n - 1] = hi;
            points
        }
    }
}

/// Trapezoidal integral of `y` sampled at (not necessarily uniform) `x`.
pub fn trapezoid<T: Float>(x: &[T], y: &[T]) -> T {
    let half = T::from(0.5).unwrap();
    x.windows(2)
        .zip(y.windows(2))
        .fold(T::zero(), |acc, (xs, ys)| {
            acc + (xs[1] - xs[0]) * (ys[0] + ys[1]) * half
        })
}
