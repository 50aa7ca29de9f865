//! Input validation for violin configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for violin configuration
//! parameters and input columns. It checks requirements such as matching
//! column lengths, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not group, sort, or filter input data.
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ViolinConfig;
use crate::evaluation::cv::CVKind;
use crate::math::bandwidth::BandwidthMethod;
use crate::primitives::errors::ViolinError;

/// Largest accepted grid size.
const MAX_GRIDSIZE: usize = 100_000;

#[inline]
fn as_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for violin configuration and input data.
///
/// All methods return `Result<(), ViolinError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the value column and the lengths of the label columns.
    pub fn validate_inputs<T: Float>(
        values: &[T],
        categories_len: usize,
        hues_len: Option<usize>,
    ) -> Result<(), ViolinError> {
        // Check 1: Non-empty input
        if values.is_empty() {
            return Err(ViolinError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = values.len();
        if categories_len != n {
            return Err(ViolinError::MismatchedInputs {
                values_len: n,
                labels_len: categories_len,
            });
        }
        if let Some(h) = hues_len {
            if h != n {
                return Err(ViolinError::MismatchedInputs {
                    values_len: n,
                    labels_len: h,
                });
            }
        }

        // Check 3: All values finite
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(ViolinError::InvalidNumericValue(format!(
                    "values[{}]={}",
                    i,
                    as_f64(v)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Estimation Parameters
    // ========================================================================

    /// Validate explicit bandwidths and bandwidth factors.
    pub fn validate_bandwidth<T: Float>(method: &BandwidthMethod<T>) -> Result<(), ViolinError> {
        match *method {
            BandwidthMethod::Factor(v) | BandwidthMethod::Fixed(v) => {
                if !v.is_finite() || v <= T::zero() {
                    return Err(ViolinError::InvalidBandwidth(as_f64(v)));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Validate a user-supplied bandwidth floor.
    pub fn validate_floor<T: Float>(floor: T) -> Result<(), ViolinError> {
        if !floor.is_finite() || floor <= T::zero() {
            return Err(ViolinError::InvalidBandwidth(as_f64(floor)));
        }
        Ok(())
    }

    /// Validate the number of grid points.
    pub fn validate_gridsize(gridsize: usize) -> Result<(), ViolinError> {
        if !(2..=MAX_GRIDSIZE).contains(&gridsize) {
            return Err(ViolinError::InvalidGridSize(gridsize));
        }
        Ok(())
    }

    /// Validate the grid extension in bandwidths.
    pub fn validate_cut<T: Float>(cut: T) -> Result<(), ViolinError> {
        if !cut.is_finite() || cut < T::zero() {
            return Err(ViolinError::InvalidCut(as_f64(cut)));
        }
        Ok(())
    }

    /// Validate a clip range.
    pub fn validate_clip<T: Float>(clip: (T, T)) -> Result<(), ViolinError> {
        let (low, high) = clip;
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(ViolinError::InvalidClip {
                low: as_f64(low),
                high: as_f64(high),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Layout and Overlay Parameters
    // ========================================================================

    /// Validate the violin slot width.
    pub fn validate_width<T: Float>(width: T) -> Result<(), ViolinError> {
        if !width.is_finite() || width <= T::zero() {
            return Err(ViolinError::InvalidWidth(as_f64(width)));
        }
        Ok(())
    }

    /// Validate the jitter amount.
    pub fn validate_jitter<T: Float>(amount: T) -> Result<(), ViolinError> {
        if !amount.is_finite() || amount < T::zero() || amount > T::one() {
            return Err(ViolinError::InvalidJitter(as_f64(amount)));
        }
        Ok(())
    }

    /// Validate a strictly positive overlay parameter.
    pub fn validate_positive<T: Float>(value: T, parameter: &'static str) -> Result<(), ViolinError> {
        if !value.is_finite() || value <= T::zero() {
            return Err(ViolinError::InvalidOverlayParameter {
                parameter,
                value: as_f64(value),
            });
        }
        Ok(())
    }

    /// Validate the relative mode height threshold.
    pub fn validate_mode_threshold<T: Float>(threshold: T) -> Result<(), ViolinError> {
        if !threshold.is_finite() || threshold < T::zero() || threshold >= T::one() {
            return Err(ViolinError::InvalidInput(format!(
                "mode_threshold={} (must be in [0, 1))",
                as_f64(threshold)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Cross-Validation
    // ========================================================================

    /// Validate a cross-validation configuration.
    pub fn validate_cv<T: Float>(kind: CVKind, factors: &[T]) -> Result<(), ViolinError> {
        if let CVKind::KFold(k) = kind {
            if k < 2 {
                return Err(ViolinError::InvalidInput(format!(
                    "K-fold cross-validation needs k >= 2, got {}",
                    k
                )));
            }
        }
        if factors.is_empty() {
            return Err(ViolinError::InvalidInput(
                "cross-validation needs at least one candidate factor".into(),
            ));
        }
        for &f in factors {
            if !f.is_finite() || f <= T::zero() {
                return Err(ViolinError::InvalidBandwidth(as_f64(f)));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Full Configuration
    // ========================================================================

    /// Validate every estimation and overlay parameter of a configuration.
    pub fn validate_config<T: Float>(config: &ViolinConfig<T>) -> Result<(), ViolinError> {
        Self::validate_bandwidth(&config.bandwidth)?;
        if let Some(floor) = config.bandwidth_floor {
            Self::validate_floor(floor)?;
        }
        Self::validate_gridsize(config.gridsize)?;
        Self::validate_cut(config.cut)?;
        if let Some(clip) = config.clip {
            Self::validate_clip(clip)?;
        }
        Self::validate_positive(config.whisker, "whisker")?;
        Self::validate_jitter(config.jitter)?;
        if let Some(size) = config.swarm_point_size {
            Self::validate_positive(size, "swarm_point_size")?;
        }
        if let Some(res) = config.swarm_value_resolution {
            Self::validate_positive(res, "swarm_value_resolution")?;
        }
        Self::validate_mode_threshold(config.mode_threshold)?;
        if let (Some(kind), Some(factors)) = (config.cv_kind, config.cv_factors.as_ref()) {
            Self::validate_cv(kind, factors)?;
        }
        Ok(())
    }

    // ========================================================================
    // Builder Misuse
    // ========================================================================

    /// Validate that no parameter was set twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), ViolinError> {
        if let Some(param) = duplicate_param {
            return Err(ViolinError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
