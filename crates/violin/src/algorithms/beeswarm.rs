//! Beeswarm packing of observations inside a silhouette.
//!
//! ## Purpose
//!
//! This module places every observation of a sample at a lateral offset such
//! that no two point markers overlap, packing outward from the spine and
//! staying inside the silhouette whenever there is room.
//!
//! ## Design notes
//!
//! * **Greedy in value order**: Points are placed one by one in ascending
//!   value order; each takes the first free slot closest to the spine.
//! * **Fixed slots**: Lateral slots are multiples of the point size, so
//!   neighbours in adjacent slots touch but never overlap.
//! * **Ellipse test**: Two points collide when
//!   `(dv / value_resolution)^2 + (dl / point_size)^2 < 1`; the two scales
//!   are the marker's extent along each axis in data units.
//!
//! ## Key concepts
//!
//! * **Stack** (default): Only slots within the local half-width are tried.
//!   If all of them collide, the least-overlapping one is used and the point
//!   is counted as overflowed. On a half silhouette narrower than half a
//!   point, the point is pinned to the edge and counted as overflowed. The
//!   swarm never leaves the silhouette.
//! * **Widen**: Slots keep extending outward past the silhouette until one is
//!   free. Points never overlap; points beyond the half-width are counted.
//!
//! ## Invariants
//!
//! * Input values must be sorted ascending.
//! * With `Widen`, no two placed points collide.
//! * Offsets stay on the silhouette's drawn side.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::silhouette::{Side, Silhouette};

/// Tolerance so that points in touching slots do not register as colliding.
const TOUCH_TOLERANCE: f64 = 1e-9;

// ============================================================================
// Configuration
// ============================================================================

/// Behaviour when the silhouette is too narrow for the points at a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwarmOverflow {
    /// Stay inside the silhouette and accept overlap.
    #[default]
    Stack,

    /// Extend past the silhouette to avoid overlap.
    Widen,
}

impl SwarmOverflow {
    /// Name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stack => "Stack",
            Self::Widen => "Widen",
        }
    }
}

/// Marker geometry and overflow policy for one swarm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmParams<T> {
    /// Marker diameter along the lateral axis.
    pub point_size: T,

    /// Marker diameter along the value axis.
    pub value_resolution: T,

    /// What to do when the silhouette is full.
    pub overflow: SwarmOverflow,
}

/// Packed lateral offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmLayout<T> {
    /// Offset from the spine per point, in the order of the input values.
    pub offsets: Vec<T>,

    /// Number of points that could not be placed within the silhouette
    /// without overlap.
    pub overflowed: usize,
}

// ============================================================================
// Packing
// ============================================================================

/// Pack sorted values into non-overlapping lateral slots.
pub fn beeswarm<T: Float>(
    sorted: &[T],
    silhouette: &Silhouette<T>,
    params: &SwarmParams<T>,
) -> SwarmLayout<T> {
    let n = sorted.len();
    let mut offsets: Vec<T> = Vec::with_capacity(n);
    let mut overflowed = 0usize;
    let mut window_start = 0usize;

    for (i, &v) in sorted.iter().enumerate() {
        // Points more than one resolution below can never collide again
        while window_start < i && v - sorted[window_start] >= params.value_resolution {
            window_start += 1;
        }
        let neighbours: Vec<(T, T)> = (window_start..i).map(|j| (sorted[j], offsets[j])).collect();

        let limit = silhouette.half_width_at(v);
        let (offset, overflow) = match params.overflow {
            SwarmOverflow::Stack => place_within(v, limit, &neighbours, silhouette.side, params),
            SwarmOverflow::Widen => place_widening(v, limit, &neighbours, silhouette.side, params),
        };
        if overflow {
            overflowed += 1;
        }
        offsets.push(offset);
    }

    SwarmLayout {
        offsets,
        overflowed,
    }
}

/// Lateral position of the `k`-th candidate slot.
fn slot_offset<T: Float>(k: usize, side: Side, size: T) -> T {
    let half = T::from(0.5).unwrap();
    match side {
        // 0, +s, -s, +2s, -2s, ...
        Side::Both => {
            let step = T::from(k.div_ceil(2)).unwrap() * size;
            if k % 2 == 1 {
                step
            } else {
                -step
            }
        }
        Side::High => (T::from(k).unwrap() + half) * size,
        Side::Low => -(T::from(k).unwrap() + half) * size,
    }
}

/// Worst overlap of a candidate position with its neighbours (0 = free).
fn overlap<T: Float>(v: T, offset: T, neighbours: &[(T, T)], params: &SwarmParams<T>) -> T {
    let tol = T::from(TOUCH_TOLERANCE).unwrap();
    neighbours.iter().fold(T::zero(), |worst, &(nv, no)| {
        let dv = (v - nv) / params.value_resolution;
        let dl = (offset - no) / params.point_size;
        let gap = T::one() - (dv * dv + dl * dl);
        if gap > tol {
            worst.max(gap)
        } else {
            worst
        }
    })
}

/// Stack policy: best slot within the local half-width.
fn place_within<T: Float>(
    v: T,
    limit: T,
    neighbours: &[(T, T)],
    side: Side,
    params: &SwarmParams<T>,
) -> (T, bool) {
    let mut best = slot_offset(0, side, params.point_size);

    // A half silhouette narrower than half a point: pin to its edge
    if best.abs() > limit {
        return (best.signum() * limit.max(T::zero()), true);
    }

    let mut best_overlap = overlap(v, best, neighbours, params);
    if best_overlap <= T::zero() {
        return (best, false);
    }

    let mut k = 1;
    loop {
        let candidate = slot_offset(k, side, params.point_size);
        // Slots only move outward, so the first one past the limit ends the search
        if candidate.abs() > limit {
            break;
        }
        let o = overlap(v, candidate, neighbours, params);
        if o <= T::zero() {
            return (candidate, false);
        }
        if o < best_overlap {
            best = candidate;
            best_overlap = o;
        }
        k += 1;
    }

    (best, true)
}

/// Widen policy: first free slot, however far out.
fn place_widening<T: Float>(
    v: T,
    limit: T,
    neighbours: &[(T, T)],
    side: Side,
    params: &SwarmParams<T>,
) -> (T, bool) {
    // Each neighbour blocks at most two slots per direction
    let max_slots = 4 * neighbours.len() + 4;
    for k in 0..max_slots {
        let candidate = slot_offset(k, side, params.point_size);
        if overlap(v, candidate, neighbours, params) <= T::zero() {
            return (candidate, candidate.abs() > limit);
        }
    }

    let fallback = slot_offset(max_slots, side, params.point_size);
    (fallback, true)
}
