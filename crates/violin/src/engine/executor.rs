//! Execution engine for violin figures.
//!
//! ## Purpose
//!
//! This module provides the pipeline that turns grouped samples into drawn
//! silhouettes: sort, choose a bandwidth (rule or cross-validation), estimate
//! each density, normalize all widths in one pass, then place overlays.
//!
//! ## Design notes
//!
//! * Adapters decide where each silhouette goes ([`Placement`]); the
//!   executor is layout-agnostic.
//! * Width normalization sees every curve of the figure at once.
//! * Density and cross-validation passes are pluggable function pointers so
//!   extension crates can run them in parallel.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Placements are aligned with the grouping's samples.
//! * Empty samples never reach the estimator; they are recorded as skipped.
//! * Jitter and rain offsets depend only on the seed and the sample's index.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by `validator`).
//! * This module does not decide lateral positions (handled by adapters).
//! * This module does not handle parallel execution directly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::beeswarm::{beeswarm, SwarmOverflow, SwarmParams};
use crate::algorithms::density::{DensityCurve, DensityEstimator};
use crate::algorithms::jitter::{band_offsets, group_rng, jitter_offsets};
use crate::algorithms::quantiles::QuantileMethod;
use crate::algorithms::silhouette::{normalize_widths, Orientation, Side, Silhouette, WidthNorm};
use crate::engine::output::{Inner, PointKind, PointLayout, SkippedGroup, ViolinShape};
use crate::evaluation::cv::CVKind;
use crate::evaluation::diagnostics::DensityDiagnostics;
use crate::evaluation::summary::BoxSummary;
use crate::math::bandwidth::{apply_floor, default_floor, BandwidthChoice, BandwidthMethod};
use crate::math::boundary::BoundaryPolicy;
use crate::math::kernel::Kernel;
use crate::math::scaling::SpreadMethod;
use crate::primitives::errors::ViolinError;
use crate::primitives::grouping::Grouping;
use crate::primitives::sorting::{sort_values, unsort, SortedSample};

/// Default beeswarm marker size along the lateral axis.
const DEFAULT_SWARM_POINT_SIZE: f64 = 0.04;

/// Default beeswarm marker size as a fraction of the figure's value range.
const DEFAULT_SWARM_RESOLUTION: f64 = 0.02;

/// Raincloud rain band, as fractions of the maximum half-width below the spine.
const RAIN_BAND: (f64, f64) = (-0.9, -0.3);

// ============================================================================
// Type Definitions
// ============================================================================

/// One density estimate to compute.
#[derive(Debug, Clone, Copy)]
pub struct DensityJob<'a, T> {
    /// Sorted observations.
    pub sorted: &'a [T],

    /// Resolved bandwidth.
    pub choice: BandwidthChoice<T>,
}

/// Signature for custom density pass function
#[doc(hidden)]
pub type DensityPassFn<T> = fn(
    &[DensityJob<'_, T>],  // one job per non-empty sample
    &DensityEstimator<T>, // shared grid and kernel settings
) -> Vec<Result<DensityCurve<T>, ViolinError>>;

/// Signature for custom cross-validation pass function
#[doc(hidden)]
pub type CVPassFn<T> = fn(
    &[T],                 // sorted sample
    &[T],                 // candidate factors
    T,                    // sample spread
    &DensityEstimator<T>, // estimator for held-out densities
    CVKind,               // CV strategy
    Option<u64>,          // fold seed
) -> Vec<T>; // scores

/// Where one sample's silhouette is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<T> {
    /// Lateral position of the spine.
    pub position: T,

    /// Drawn side(s) of the spine.
    pub side: Side,

    /// Widest half-width available.
    pub max_half_width: T,
}

/// Output from violin execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Drawn silhouettes, in sample order.
    pub violins: Vec<ViolinShape<T>>,

    /// Samples that were not drawn.
    pub skipped: Vec<SkippedGroup>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for violin execution.
#[derive(Debug, Clone)]
pub struct ViolinConfig<T> {
    /// Smoothing kernel.
    pub kernel: Kernel,

    /// Bandwidth rule or explicit bandwidth.
    pub bandwidth: BandwidthMethod<T>,

    /// Bandwidth floor (`None` uses `1e-3 * max(1, max|x|)` per sample).
    pub bandwidth_floor: Option<T>,

    /// Spread estimate used by bandwidth rules and CV candidates.
    pub spread_method: SpreadMethod,

    /// Number of grid points per curve.
    pub gridsize: usize,

    /// Grid extension past the data, in bandwidths.
    pub cut: T,

    /// Optional hard value-axis limits.
    pub clip: Option<(T, T)>,

    /// Correction at clip bounds.
    pub boundary_policy: BoundaryPolicy,

    /// Width-normalization rule for the whole figure.
    pub width_norm: WidthNorm,

    /// Value-axis direction.
    pub orientation: Orientation,

    /// Overlay drawn with each silhouette.
    pub inner: Inner,

    /// Quantile interpolation rule.
    pub quantile_method: QuantileMethod,

    /// Whisker reach in IQRs.
    pub whisker: T,

    /// Jitter amount as a fraction of the local half-width.
    pub jitter: T,

    /// Seed for jitter and rain offsets.
    pub seed: u64,

    /// Beeswarm marker size along the lateral axis.
    pub swarm_point_size: Option<T>,

    /// Beeswarm marker size along the value axis.
    pub swarm_value_resolution: Option<T>,

    /// Beeswarm overflow policy.
    pub swarm_overflow: SwarmOverflow,

    /// Candidate factors for cross-validation.
    pub cv_factors: Option<Vec<T>>,

    /// Cross-validation strategy.
    pub cv_kind: Option<CVKind>,

    /// Seed for K-fold shuffling.
    pub cv_seed: Option<u64>,

    /// Whether to compute curve diagnostics.
    pub return_diagnostics: bool,

    /// Relative height a local maximum needs to count as a mode.
    pub mode_threshold: T,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom density pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_density_pass: Option<DensityPassFn<T>>,

    /// Custom cross-validation pass function.
    #[doc(hidden)]
    pub custom_cv_pass: Option<CVPassFn<T>>,

    /// Whether to use parallel execution
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T: Float> Default for ViolinConfig<T> {
    fn default() -> Self {
        Self {
            kernel: Kernel::default(),
            bandwidth: BandwidthMethod::Scott,
            bandwidth_floor: None,
            spread_method: SpreadMethod::default(),
            gridsize: 100,
            cut: T::from(3.0).unwrap(),
            clip: None,
            boundary_policy: BoundaryPolicy::default(),
            width_norm: WidthNorm::default(),
            orientation: Orientation::default(),
            inner: Inner::default(),
            quantile_method: QuantileMethod::default(),
            whisker: T::from(1.5).unwrap(),
            jitter: T::from(0.8).unwrap(),
            seed: 0,
            swarm_point_size: None,
            swarm_value_resolution: None,
            swarm_overflow: SwarmOverflow::default(),
            cv_factors: None,
            cv_kind: None,
            cv_seed: None,
            return_diagnostics: false,
            mode_threshold: T::from(0.1).unwrap(),
            custom_density_pass: None,
            custom_cv_pass: None,
            parallel: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// A non-empty sample ready for estimation.
struct Prepared<T> {
    sample_index: usize,
    sorted: SortedSample<T>,
    choice: BandwidthChoice<T>,
    cv_scores: Option<Vec<T>>,
}

/// Unified executor for violin figures.
#[derive(Debug, Clone)]
pub struct ViolinExecutor<T> {
    /// Full configuration.
    pub config: ViolinConfig<T>,
}

impl<T: Float> ViolinExecutor<T> {
    /// Create an executor from a configuration.
    pub fn from_config(config: ViolinConfig<T>) -> Self {
        Self { config }
    }

    /// Grid and kernel settings shared by every curve.
    pub fn estimator(&self) -> DensityEstimator<T> {
        DensityEstimator {
            kernel: self.config.kernel,
            gridsize: self.config.gridsize,
            cut: self.config.cut,
            clip: self.config.clip,
            boundary: self.config.boundary_policy,
        }
    }

    /// Run the pipeline over grouped samples and their placements.
    pub fn run(
        &self,
        grouping: &Grouping<T>,
        placements: &[Placement<T>],
    ) -> Result<ExecutorOutput<T>, ViolinError> {
        if placements.len() != grouping.samples.len() {
            return Err(ViolinError::InvalidInput(format!(
                "{} placements for {} samples",
                placements.len(),
                grouping.samples.len()
            )));
        }

        let estimator = self.estimator();

        // 1. Sort and choose bandwidths; empty samples are skipped
        let mut skipped = Vec::new();
        let mut prepared: Vec<Prepared<T>> = Vec::with_capacity(grouping.samples.len());
        for (i, sample) in grouping.samples.iter().enumerate() {
            if sample.values.is_empty() {
                skipped.push(SkippedGroup {
                    category: sample.category.clone(),
                    hue: sample.hue.clone(),
                    reason: ViolinError::EmptySample {
                        category: sample.category.clone(),
                        hue: sample.hue.clone(),
                    },
                });
                continue;
            }
            let sorted = sort_values(&sample.values);
            let (choice, cv_scores) = self.choose_bandwidth(&sorted.values, &estimator);
            prepared.push(Prepared {
                sample_index: i,
                sorted,
                choice,
                cv_scores,
            });
        }

        // 2. Density pass
        let curves: Vec<DensityCurve<T>> = {
            let jobs: Vec<DensityJob<'_, T>> = prepared
                .iter()
                .map(|p| DensityJob {
                    sorted: &p.sorted.values,
                    choice: p.choice,
                })
                .collect();
            match self.config.custom_density_pass {
                Some(pass) => pass(&jobs, &estimator),
                None => Self::density_pass(&jobs, &estimator),
            }
        }
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

        // 3. One width-normalization pass over the whole figure
        let refs: Vec<&DensityCurve<T>> = curves.iter().collect();
        let unit_scales = normalize_widths(&refs, self.config.width_norm, T::one());

        // 4. Silhouettes and overlays
        let value_range = Self::figure_value_range(&prepared);
        let mut violins = Vec::with_capacity(prepared.len());
        for ((p, curve), unit_scale) in prepared.into_iter().zip(curves).zip(unit_scales) {
            let sample = &grouping.samples[p.sample_index];
            let placement = placements[p.sample_index];
            let silhouette = Silhouette::from_curve(
                &curve,
                placement.position,
                placement.side,
                unit_scale * placement.max_half_width,
            );

            let summary = if self.config.inner.needs_summary() {
                BoxSummary::compute(&p.sorted.values, self.config.quantile_method, self.config.whisker)
            } else {
                None
            };
            let points = self.place_points(
                &sample.values,
                &p.sorted,
                &silhouette,
                placement.max_half_width,
                value_range,
                p.sample_index,
            );
            let rug = match self.config.inner {
                Inner::Rug => Some(sample.values.clone()),
                _ => None,
            };
            let diagnostics = if self.config.return_diagnostics {
                Some(DensityDiagnostics::compute(&curve, self.config.mode_threshold))
            } else {
                None
            };

            violins.push(ViolinShape {
                category: sample.category.clone(),
                hue: sample.hue.clone(),
                category_index: sample.category_index,
                hue_index: sample.hue_index,
                position: placement.position,
                density: curve,
                silhouette,
                summary,
                points,
                rug,
                diagnostics,
                cv_scores: p.cv_scores,
            });
        }

        Ok(ExecutorOutput { violins, skipped })
    }

    // ========================================================================
    // Bandwidth Selection
    // ========================================================================

    /// Resolve the bandwidth of one sorted sample.
    fn choose_bandwidth(
        &self,
        sorted: &[T],
        estimator: &DensityEstimator<T>,
    ) -> (BandwidthChoice<T>, Option<Vec<T>>) {
        let floor = self
            .config
            .bandwidth_floor
            .unwrap_or_else(|| default_floor(sorted));

        if let (Some(kind), Some(factors)) = (self.config.cv_kind, self.config.cv_factors.as_ref()) {
            let spread = self.config.spread_method.compute(sorted);
            if CVKind::is_applicable(sorted.len(), spread) {
                let scores = match self.config.custom_cv_pass {
                    Some(pass) => pass(sorted, factors, spread, estimator, kind, self.config.cv_seed),
                    None => kind.scores(sorted, factors, spread, estimator, self.config.cv_seed),
                };
                if let Some(selection) = CVKind::select(factors, spread, scores) {
                    return (apply_floor(selection.bandwidth, floor), Some(selection.scores));
                }
            }
        }

        (
            self.config
                .bandwidth
                .select(sorted, self.config.spread_method, floor),
            None,
        )
    }

    /// Serial density pass.
    pub fn density_pass(
        jobs: &[DensityJob<'_, T>],
        estimator: &DensityEstimator<T>,
    ) -> Vec<Result<DensityCurve<T>, ViolinError>> {
        jobs.iter()
            .map(|job| estimator.estimate(job.sorted, job.choice))
            .collect()
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    /// Value range of all observations in the figure (1 if degenerate).
    fn figure_value_range(prepared: &[Prepared<T>]) -> T {
        let extent = prepared
            .iter()
            .filter_map(|p| p.sorted.extent())
            .fold(None, |acc: Option<(T, T)>, (lo, hi)| match acc {
                None => Some((lo, hi)),
                Some((a, b)) => Some((a.min(lo), b.max(hi))),
            });
        match extent {
            Some((lo, hi)) if hi > lo => hi - lo,
            _ => T::one(),
        }
    }

    /// Point overlay for one sample, in input order.
    fn place_points(
        &self,
        values: &[T],
        sorted: &SortedSample<T>,
        silhouette: &Silhouette<T>,
        max_half_width: T,
        value_range: T,
        sample_index: usize,
    ) -> Option<PointLayout<T>> {
        match self.config.inner {
            Inner::Jitter => {
                let mut rng = group_rng(self.config.seed, sample_index);
                let offsets = jitter_offsets(values, silhouette, self.config.jitter, &mut rng);
                Some(PointLayout {
                    kind: PointKind::Jitter,
                    values: values.to_vec(),
                    offsets,
                    overflowed: 0,
                })
            }
            Inner::Beeswarm => {
                let params = SwarmParams {
                    point_size: self
                        .config
                        .swarm_point_size
                        .unwrap_or_else(|| T::from(DEFAULT_SWARM_POINT_SIZE).unwrap()),
                    value_resolution: self.config.swarm_value_resolution.unwrap_or_else(|| {
                        T::from(DEFAULT_SWARM_RESOLUTION).unwrap() * value_range
                    }),
                    overflow: self.config.swarm_overflow,
                };
                let layout = beeswarm(&sorted.values, silhouette, &params);
                Some(PointLayout {
                    kind: PointKind::Swarm,
                    values: values.to_vec(),
                    offsets: unsort(&layout.offsets, &sorted.indices),
                    overflowed: layout.overflowed,
                })
            }
            Inner::Raincloud => {
                let mut rng = group_rng(self.config.seed, sample_index);
                let low = T::from(RAIN_BAND.0).unwrap() * max_half_width;
                let high = T::from(RAIN_BAND.1).unwrap() * max_half_width;
                let (low, high) = match silhouette.side {
                    Side::Low => (-high, -low),
                    _ => (low, high),
                };
                Some(PointLayout {
                    kind: PointKind::Rain,
                    values: values.to_vec(),
                    offsets: band_offsets(values.len(), low, high, &mut rng),
                    overflowed: 0,
                })
            }
            _ => None,
        }
    }
}
