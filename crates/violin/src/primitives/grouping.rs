//! Grouping of tidy observations into per-violin samples.
//!
//! ## Purpose
//!
//! Input arrives as flat columns: one value column, one category column and an
//! optional hue (sub-group) column. This module splits those columns into one
//! [`Sample`] per (category, hue) cell, in a stable level order.
//!
//! ## Key concepts
//!
//! * **Levels**: Distinct labels of a column. Without an explicit order, levels
//!   appear in first-seen order.
//! * **Explicit order**: When an order is given, observations with unlisted
//!   labels are dropped and listed labels without observations still produce an
//!   (empty) sample, so the engine can report the missing group.
//!
//! ## Invariants
//!
//! * Samples are ordered category-major, hue-minor.
//! * Every observation lands in at most one sample, preserving input order.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ViolinError;

// ============================================================================
// Data Structures
// ============================================================================

/// Observations belonging to one (category, hue) cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    /// Category label.
    pub category: String,

    /// Hue (sub-group) label, if a hue column was supplied.
    pub hue: Option<String>,

    /// Position of the category among the category levels.
    pub category_index: usize,

    /// Position of the hue among the hue levels.
    pub hue_index: Option<usize>,

    /// Observations in input order.
    pub values: Vec<T>,
}

/// Grouped observations plus the discovered level orders.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<T> {
    /// Category levels in drawing order.
    pub categories: Vec<String>,

    /// Hue levels in drawing order (empty without a hue column).
    pub hues: Vec<String>,

    /// One sample per (category, hue) cell, category-major.
    pub samples: Vec<Sample<T>>,
}

impl<T> Grouping<T> {
    /// Number of hue levels, treating "no hue column" as one level.
    pub fn hue_slots(&self) -> usize {
        self.hues.len().max(1)
    }
}

// ============================================================================
// Grouping Functions
// ============================================================================

/// Split tidy columns into per-cell samples.
pub fn group_observations<T, S>(
    values: &[T],
    categories: &[S],
    hues: Option<&[S]>,
    order: Option<&[String]>,
    hue_order: Option<&[String]>,
) -> Result<Grouping<T>, ViolinError>
where
    T: Float,
    S: AsRef<str>,
{
    if categories.len() != values.len() {
        return Err(ViolinError::MismatchedInputs {
            values_len: values.len(),
            labels_len: categories.len(),
        });
    }
    if let Some(h) = hues {
        if h.len() != values.len() {
            return Err(ViolinError::MismatchedInputs {
                values_len: values.len(),
                labels_len: h.len(),
            });
        }
    }

    let category_levels = resolve_levels(categories, order, "category")?;
    let hue_levels = match hues {
        Some(h) => resolve_levels(h, hue_order, "hue")?,
        None => Vec::new(),
    };

    let hue_slots = hue_levels.len().max(1);
    let mut samples: Vec<Sample<T>> = Vec::with_capacity(category_levels.len() * hue_slots);
    for (ci, category) in category_levels.iter().enumerate() {
        if hue_levels.is_empty() {
            samples.push(Sample {
                category: category.clone(),
                hue: None,
                category_index: ci,
                hue_index: None,
                values: Vec::new(),
            });
        } else {
            for (hi, hue) in hue_levels.iter().enumerate() {
                samples.push(Sample {
                    category: category.clone(),
                    hue: Some(hue.clone()),
                    category_index: ci,
                    hue_index: Some(hi),
                    values: Vec::new(),
                });
            }
        }
    }

    for (i, &value) in values.iter().enumerate() {
        let Some(ci) = level_index(&category_levels, categories[i].as_ref()) else {
            continue;
        };
        let hi = match hues {
            Some(h) => match level_index(&hue_levels, h[i].as_ref()) {
                Some(hi) => hi,
                None => continue,
            },
            None => 0,
        };
        samples[ci * hue_slots + hi].values.push(value);
    }

    Ok(Grouping {
        categories: category_levels,
        hues: hue_levels,
        samples,
    })
}

/// Determine the level order of a label column.
fn resolve_levels<S: AsRef<str>>(
    labels: &[S],
    order: Option<&[String]>,
    column: &str,
) -> Result<Vec<String>, ViolinError> {
    for (row, label) in labels.iter().enumerate() {
        if label.as_ref().trim().is_empty() {
            return Err(ViolinError::InvalidInput(format!(
                "empty {column} label at row {row}"
            )));
        }
    }

    match order {
        Some(order) => {
            let mut levels: Vec<String> = Vec::with_capacity(order.len());
            for level in order {
                if level.trim().is_empty() {
                    return Err(ViolinError::InvalidInput(format!(
                        "empty {column} level in explicit order"
                    )));
                }
                if levels.contains(level) {
                    return Err(ViolinError::InvalidInput(format!(
                        "{column} level '{level}' listed twice in explicit order"
                    )));
                }
                levels.push(level.clone());
            }
            Ok(levels)
        }
        None => {
            let mut levels: Vec<String> = Vec::new();
            for label in labels {
                let label = label.as_ref();
                if level_index(&levels, label).is_none() {
                    levels.push(label.to_string());
                }
            }
            Ok(levels)
        }
    }
}

#[inline]
fn level_index(levels: &[String], label: &str) -> Option<usize> {
    levels.iter().position(|l| l == label)
}
