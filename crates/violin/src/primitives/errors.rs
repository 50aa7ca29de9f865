//! Error types for violin density and layout operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while turning raw
//! observations into density curves, silhouettes and overlays: input
//! validation, estimation parameters, layout constraints and builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, labels, levels).
//! * **Deferred**: Builder misconfiguration is stored and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input errors**: Empty input, mismatched columns, non-finite values, empty labels.
//! 2. **Estimation errors**: Empty samples, invalid bandwidths, grids or clip ranges.
//! 3. **Configuration errors**: Split layouts without exactly two hue levels,
//!    unsupported overlay/adapter combinations, duplicated parameters.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Zero-variance samples are not errors; they are handled by the bandwidth floor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for violin operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolinError {
    /// No observations were supplied at all.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// The value column and a label column have different lengths.
    MismatchedInputs {
        /// Number of values.
        values_len: usize,
        /// Number of labels in the mismatched column.
        labels_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// A group has no observations, so its density is undefined.
    EmptySample {
        /// Category label of the group.
        category: String,
        /// Hue label of the group, if any.
        hue: Option<String>,
    },

    /// Bandwidth (or bandwidth factor) must be positive and finite.
    InvalidBandwidth(f64),

    /// The evaluation grid needs at least two points.
    InvalidGridSize(usize),

    /// The support extension must be finite and non-negative.
    InvalidCut(f64),

    /// Clip range must be finite with `low < high`.
    InvalidClip {
        /// Lower clip bound.
        low: f64,
        /// Upper clip bound.
        high: f64,
    },

    /// Violin slot width must be positive and finite.
    InvalidWidth(f64),

    /// Jitter amount must lie in [0, 1].
    InvalidJitter(f64),

    /// Point size, value resolution or whisker factor must be positive and finite.
    InvalidOverlayParameter {
        /// Name of the parameter.
        parameter: &'static str,
        /// The value provided.
        value: f64,
    },

    /// Split layouts draw one half per hue level and need exactly two levels.
    SplitRequiresTwoLevels {
        /// Number of hue levels found.
        got: usize,
    },

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Split").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ViolinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::MismatchedInputs {
                values_len,
                labels_len,
            } => {
                write!(
                    f,
                    "Length mismatch: {values_len} values but {labels_len} labels"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::EmptySample { category, hue } => match hue {
                Some(hue) => write!(f, "Group '{category}' / '{hue}' has no observations"),
                None => write!(f, "Group '{category}' has no observations"),
            },
            Self::InvalidBandwidth(bw) => {
                write!(f, "Invalid bandwidth: {bw} (must be > 0 and finite)")
            }
            Self::InvalidGridSize(n) => {
                write!(f, "Invalid gridsize: {n} (must be at least 2)")
            }
            Self::InvalidCut(cut) => write!(f, "Invalid cut: {cut} (must be >= 0 and finite)"),
            Self::InvalidClip { low, high } => {
                write!(f, "Invalid clip range: [{low}, {high}] (need finite low < high)")
            }
            Self::InvalidWidth(w) => write!(f, "Invalid width: {w} (must be > 0 and finite)"),
            Self::InvalidJitter(j) => write!(f, "Invalid jitter: {j} (must be in [0, 1])"),
            Self::InvalidOverlayParameter { parameter, value } => {
                write!(f, "Invalid {parameter}: {value} (must be > 0 and finite)")
            }
            Self::SplitRequiresTwoLevels { got } => {
                write!(
                    f,
                    "Split violins need exactly 2 hue levels, found {got}"
                )
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ViolinError {}
