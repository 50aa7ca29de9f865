#![cfg(feature = "dev")]
//! Tests for grouping, sorting, grids and input validation.
//!
//! ## Test Organization
//!
//! 1. **Grouping** - Level discovery, explicit orders, hue cells
//! 2. **Sorting** - Sorted samples and index restoration
//! 3. **Grids** - Evenly spaced grids, trapezoid rule, interpolation
//! 4. **Validation** - Parameter bounds

use approx::assert_relative_eq;

use violin::internals::algorithms::interpolation::interpolate_linear;
use violin::internals::engine::executor::ViolinConfig;
use violin::internals::engine::validator::Validator;
use violin::internals::primitives::errors::ViolinError;
use violin::internals::primitives::grid::{linspace, trapezoid};
use violin::internals::primitives::grouping::group_observations;
use violin::internals::primitives::sorting::{sort_values, unsort};

// ============================================================================
// Grouping Tests
// ============================================================================

/// Test first-seen level order and input-order samples.
#[test]
fn test_grouping_first_seen_order() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    let cats = ["b", "a", "b", "c", "a"];
    let g = group_observations(&values, &cats, None, None, None).unwrap();

    assert_eq!(g.categories, vec!["b", "a", "c"]);
    assert!(g.hues.is_empty());
    assert_eq!(g.hue_slots(), 1);
    assert_eq!(g.samples[0].values, vec![1.0, 3.0]);
    assert_eq!(g.samples[1].values, vec![2.0, 5.0]);
    assert_eq!(g.samples[2].values, vec![4.0]);
}

/// Test explicit orders drop unlisted levels and keep empty ones.
#[test]
fn test_grouping_explicit_order() {
    let values = [1.0, 2.0, 3.0];
    let cats = ["a", "b", "c"];
    let order = vec!["c".to_string(), "z".to_string(), "a".to_string()];
    let g = group_observations(&values, &cats, None, Some(order.as_slice()), None).unwrap();

    assert_eq!(g.categories, order);
    assert_eq!(g.samples.len(), 3);
    assert_eq!(g.samples[0].values, vec![3.0]);
    assert!(g.samples[1].values.is_empty());
    assert_eq!(g.samples[2].values, vec![1.0]);
}

/// Test that duplicated levels in an explicit order are rejected.
#[test]
fn test_grouping_duplicate_order_rejected() {
    let order = vec!["a".to_string(), "a".to_string()];
    let result = group_observations(&[1.0], &["a"], None, Some(order.as_slice()), None);
    assert!(matches!(result, Err(ViolinError::InvalidInput(_))));
}

/// Test category-major, hue-minor cell layout.
#[test]
fn test_grouping_hue_cells() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let cats = ["a", "a", "b", "b"];
    let hues = ["x", "y", "y", "y"];
    let g = group_observations(&values, &cats, Some(&hues[..]), None, None).unwrap();

    assert_eq!(g.hues, vec!["x", "y"]);
    assert_eq!(g.samples.len(), 4);
    assert_eq!(g.samples[1].hue.as_deref(), Some("y"));
    assert_eq!(g.samples[1].values, vec![2.0]);
    assert!(g.samples[2].values.is_empty());
    assert_eq!(g.samples[3].values, vec![3.0, 4.0]);
    assert_eq!(g.samples[3].hue_index, Some(1));
    assert_eq!(g.samples[3].category_index, 1);
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test that sorting keeps the permutation to restore input order.
#[test]
fn test_sort_and_unsort() {
    let values = [3.0, -1.0, 2.0, 2.0];
    let sorted = sort_values(&values);

    assert_eq!(sorted.values, vec![-1.0, 2.0, 2.0, 3.0]);
    assert_eq!(sorted.extent(), Some((-1.0, 3.0)));
    assert!(!sorted.is_constant());

    let doubled: Vec<f64> = sorted.values.iter().map(|v| v * 2.0).collect();
    assert_eq!(unsort(&doubled, &sorted.indices), vec![6.0, -2.0, 4.0, 4.0]);
}

// ============================================================================
// Grid Tests
// ============================================================================

/// Test evenly spaced grids and the trapezoid rule.
#[test]
fn test_linspace_and_trapezoid() {
    let x = linspace(0.0, 2.0, 5);
    assert_eq!(x, vec![0.0, 0.5, 1.0, 1.5, 2.0]);

    let y: Vec<f64> = x.iter().map(|v| 3.0 * v).collect();
    assert_relative_eq!(trapezoid(&x, &y), 6.0, epsilon = 1e-12);
    assert!(linspace::<f64>(0.0, 1.0, 0).is_empty());
}

/// Test linear interpolation inside and outside the grid.
#[test]
fn test_interpolation() {
    let xs = [0.0, 1.0, 2.0];
    let ys = [0.0, 10.0, 4.0];
    assert_relative_eq!(interpolate_linear(&xs, &ys, 0.5), 5.0);
    assert_relative_eq!(interpolate_linear(&xs, &ys, 1.5), 7.0);
    assert_relative_eq!(interpolate_linear(&xs, &ys, 2.0), 4.0);
    assert_relative_eq!(interpolate_linear(&xs, &ys, -0.1), 0.0);
    assert_relative_eq!(interpolate_linear(&xs, &ys, 2.1), 0.0);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test parameter bounds.
#[test]
fn test_validator_bounds() {
    assert!(Validator::validate_gridsize(2).is_ok());
    assert!(Validator::validate_gridsize(100_001).is_err());
    assert!(Validator::validate_cut(0.0).is_ok());
    assert!(Validator::validate_jitter(0.0).is_ok());
    assert!(Validator::validate_jitter(1.0).is_ok());
    assert!(Validator::validate_jitter(-0.1).is_err());
    assert!(Validator::validate_mode_threshold(1.0).is_err());
    assert!(Validator::validate_clip((0.0, f64::INFINITY)).is_err());
    assert!(Validator::validate_no_duplicates(None).is_ok());
}

/// Test that the default configuration is valid.
#[test]
fn test_default_config_valid() {
    assert!(Validator::validate_config(&ViolinConfig::<f64>::default()).is_ok());
}
