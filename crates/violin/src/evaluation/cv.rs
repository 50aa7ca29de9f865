//! Likelihood cross-validation for bandwidth selection.
//!
//! ## Purpose
//!
//! This module selects a bandwidth per sample from a list of candidate
//! factors by how well the estimate predicts held-out observations, as an
//! alternative to rule-of-thumb bandwidths.
//!
//! ## Design notes
//!
//! * **Candidates**: Each candidate factor `f` gives the bandwidth
//!   `h = f * spread`, so one candidate list works for samples of any scale.
//! * **Score**: Mean negative log held-out density; lower is better.
//! * **Shuffling**: K-fold assignment uses a seeded `ChaCha8Rng` so fold
//!   membership is reproducible.
//!
//! ## Key concepts
//!
//! * **K-Fold**: Observations are shuffled and dealt into k folds; each fold
//!   is scored against an estimate built from the other k - 1.
//! * **LOOCV**: Every observation is scored against the estimate built from
//!   all others. Computed in closed form from the full-sample sum.
//!
//! ## Invariants
//!
//! * Training and test sets are disjoint in each fold.
//! * Held-out densities are floored at the smallest positive float, so a
//!   point outside a bounded kernel's reach gives a large finite penalty.
//!
//! ## Non-goals
//!
//! * This module does not estimate the final density curve.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Internal dependencies
use crate::algorithms::density::DensityEstimator;

// ============================================================================
// CV Kind
// ============================================================================

/// Cross-validation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CVKind {
    /// K-fold cross-validation with k folds.
    KFold(usize),
    /// Leave-one-out cross-validation.
    #[allow(clippy::upper_case_acronyms)]
    LOOCV,
}

// ============================================================================
// Cross-Validation Configuration
// ============================================================================

/// Cross-validation configuration combining strategy, candidate factors, and seed.
#[derive(Debug, Clone)]
pub struct CVConfig<'a, T> {
    /// The CV strategy kind.
    pub(crate) kind: CVKind,
    /// Candidate bandwidth factors (multiples of the sample spread).
    pub(crate) factors: &'a [T],
    /// Random seed for reproducible fold shuffling (K-Fold only).
    pub(crate) seed: Option<u64>,
}

impl<'a, T> CVConfig<'a, T> {
    /// Set the random seed for reproducible K-Fold cross-validation.
    ///
    /// LOOCV is deterministic and ignores the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the candidate factors.
    pub fn factors(&self) -> &[T] {
        self.factors
    }

    /// Get the CV kind.
    pub fn kind(&self) -> CVKind {
        self.kind
    }

    /// Get the seed.
    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Create a K-fold cross-validation configuration.
#[allow(non_snake_case)]
pub fn KFold<T>(k: usize, factors: &[T]) -> CVConfig<'_, T> {
    CVConfig {
        kind: CVKind::KFold(k),
        factors,
        seed: None,
    }
}

/// Create a leave-one-out cross-validation configuration.
#[allow(non_snake_case)]
pub fn LOOCV<T>(factors: &[T]) -> CVConfig<'_, T> {
    CVConfig {
        kind: CVKind::LOOCV,
        factors,
        seed: None,
    }
}

// ============================================================================
// Cross-Validation Execution
// ============================================================================

/// Outcome of a cross-validated bandwidth search.
#[derive(Debug, Clone, PartialEq)]
pub struct CVSelection<T> {
    /// Winning factor.
    pub factor: T,

    /// Winning bandwidth (`factor * spread`).
    pub bandwidth: T,

    /// Score of every candidate, in candidate order.
    pub scores: Vec<T>,
}

impl CVKind {
    /// Score one candidate bandwidth on a sorted sample.
    pub fn score<T: Float>(
        self,
        sorted: &[T],
        bandwidth: T,
        estimator: &DensityEstimator<T>,
        seed: Option<u64>,
    ) -> T {
        match self {
            CVKind::KFold(k) => Self::kfold_score(sorted, bandwidth, estimator, k, seed),
            CVKind::LOOCV => Self::loo_score(sorted, bandwidth, estimator),
        }
    }

    /// Score every candidate factor serially.
    pub fn scores<T: Float>(
        self,
        sorted: &[T],
        factors: &[T],
        spread: T,
        estimator: &DensityEstimator<T>,
        seed: Option<u64>,
    ) -> Vec<T> {
        factors
            .iter()
            .map(|&f| self.score(sorted, f * spread, estimator, seed))
            .collect()
    }

    /// Pick the lowest-scoring candidate.
    ///
    /// Returns `None` when the sample cannot be cross-validated (fewer than
    /// two observations, zero spread, or no candidates).
    pub fn select<T: Float>(factors: &[T], spread: T, scores: Vec<T>) -> Option<CVSelection<T>> {
        if factors.is_empty() || scores.len() != factors.len() {
            return None;
        }

        let best_idx = scores
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_finite())
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Equal))
            .map(|(i, _)| i)?;

        Some(CVSelection {
            factor: factors[best_idx],
            bandwidth: factors[best_idx] * spread,
            scores,
        })
    }

    /// Returns `true` if a sample of this size and spread can be scored.
    pub fn is_applicable<T: Float>(n: usize, spread: T) -> bool {
        n >= 2 && spread > T::zero() && spread.is_finite()
    }

    // ========================================================================
    // Internal Cross-Validation Implementations
    // ========================================================================

    /// Negative log of a held-out density.
    #[inline]
    fn penalty<T: Float>(density: T) -> T {
        -density.max(T::min_positive_value()).ln()
    }

    /// Leave-one-out score from the full-sample kernel sums.
    fn loo_score<T: Float>(sorted: &[T], bandwidth: T, estimator: &DensityEstimator<T>) -> T {
        let n = sorted.len();
        if n < 2 || bandwidth <= T::zero() {
            return T::infinity();
        }

        let nf = T::from(n).unwrap();
        let scale = bandwidth * T::from(estimator.kernel.canonical_factor()).unwrap();
        let self_term = estimator.kernel.density(T::zero()) / scale;

        let total = sorted.iter().fold(T::zero(), |acc, &xi| {
            let full = estimator.evaluate_at(sorted, bandwidth, xi);
            let held_out = (full * nf - self_term) / (nf - T::one());
            acc + Self::penalty(held_out)
        });

        total / nf
    }

    /// K-fold score with seeded fold assignment.
    fn kfold_score<T: Float>(
        sorted: &[T],
        bandwidth: T,
        estimator: &DensityEstimator<T>,
        k: usize,
        seed: Option<u64>,
    ) -> T {
        let n = sorted.len();
        if n < 2 || bandwidth <= T::zero() {
            return T::infinity();
        }
        let k = k.clamp(2, n);

        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed.unwrap_or(0));
        order.shuffle(&mut rng);

        let mut fold_of = vec![0usize; n];
        for (pos, &idx) in order.iter().enumerate() {
            fold_of[idx] = pos % k;
        }

        let mut train: Vec<T> = Vec::with_capacity(n);
        let mut total = T::zero();
        for fold in 0..k {
            // Filtering a sorted sample keeps it sorted
            train.clear();
            train.extend(
                sorted
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| fold_of[*i] != fold)
                    .map(|(_, &v)| v),
            );

            for (i, &xi) in sorted.iter().enumerate() {
                if fold_of[i] == fold {
                    let held_out = estimator.evaluate_at(&train, bandwidth, xi);
                    total = total + Self::penalty(held_out);
                }
            }
        }

        total / T::from(n).unwrap()
    }
}
