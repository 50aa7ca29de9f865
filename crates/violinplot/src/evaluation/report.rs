//! Logging of fit outcomes.
//!
//! ## Purpose
//!
//! The core crate records every recoverable condition on the result instead
//! of logging it: skipped groups, floored bandwidths, swarm overflow and the
//! split-to-grouped fallback. This module turns those records into `tracing`
//! events after each fit.
//!
//! ## Design notes
//!
//! * `warn!` for conditions that change what is drawn.
//! * `debug!` for per-figure timing and the bandwidth of every violin.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::time::Duration;
use tracing::{debug, warn};

// Export dependencies from violin crate
use violin::internals::engine::output::{Layout, ViolinResult};

/// Emit `tracing` events for a fitted figure.
pub fn report_fit<T: Float + Debug>(result: &ViolinResult<T>, elapsed: Duration) {
    for skipped in &result.skipped {
        warn!(
            category = %skipped.category,
            hue = skipped.hue.as_deref().unwrap_or("-"),
            reason = %skipped.reason,
            "group skipped"
        );
    }

    for shape in result.floored() {
        warn!(
            category = %shape.category,
            hue = shape.hue.as_deref().unwrap_or("-"),
            bandwidth = ?shape.bandwidth(),
            "bandwidth replaced by floor"
        );
    }

    let overflow = result.swarm_overflow();
    if overflow > 0 {
        warn!(points = overflow, "beeswarm points did not fit inside their violins");
    }

    if result.fallback {
        warn!(
            hue_levels = result.hues.len(),
            "split layout needs two hue levels, drew grouped violins instead"
        );
    }

    for shape in &result.violins {
        debug!(
            category = %shape.category,
            hue = shape.hue.as_deref().unwrap_or("-"),
            n = shape.density.n,
            bandwidth = ?shape.bandwidth(),
            "violin fitted"
        );
    }

    debug!(
        layout = match result.layout {
            Layout::Grouped => "grouped",
            Layout::Split => "split",
        },
        violins = result.violins.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "figure fitted"
    );
}
