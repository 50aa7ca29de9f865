//! # violin — Kernel Density Estimation and Violin Geometry for Rust
//!
//! Density curves, violin silhouettes and their overlays (box summaries,
//! quartile lines, jittered strips, beeswarms, rugs and rainclouds) computed
//! as plain data, ready to be drawn by any plotting backend.
//!
//! ## What is a violin plot?
//!
//! A violin plot shows the distribution of a numeric sample per category. For
//! every group a kernel density estimate is evaluated on a grid, and the curve
//! is mirrored around a spine to form a silhouette whose width at each value
//! is proportional to the estimated density. Unlike a box plot, the silhouette
//! keeps multi-modality and skew visible.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use violin::prelude::*;
//!
//! let values = vec![1.0, 1.4, 2.1, 2.3, 2.8, 5.0, 5.2, 5.9, 6.1, 6.4];
//! let groups = vec!["a", "a", "a", "a", "a", "b", "b", "b", "b", "b"];
//!
//! // Build the figure
//! let violins = Violin::new()
//!     .bandwidth(Silverman)   // Silverman's rule of thumb
//!     .inner(Inner::Box)      // Box summary inside each silhouette
//!     .adapter(Grouped)
//!     .build()?;
//!
//! // Estimate the densities and lay out the silhouettes
//! let result = violins.fit(&values, &groups)?;
//!
//! assert_eq!(result.violins.len(), 2);
//! println!("{}", result);
//! # Result::<(), ViolinError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use violin::prelude::*;
//!
//! let values = vec![4.1, 4.5, 5.0, 5.2, 6.3, 3.9, 4.4, 4.8, 5.9, 6.8, 7.0, 7.2];
//! let days = vec!["sat", "sat", "sat", "sat", "sat", "sat", "sun", "sun", "sun", "sun", "sun", "sun"];
//! let sex = vec!["f", "m", "f", "m", "f", "m", "f", "m", "f", "m", "f", "m"];
//!
//! let violins = Violin::new()
//!     .kernel(Epanechnikov)                            // Compact kernel
//!     .bandwidth(Scott)                                // Bandwidth rule
//!     .spread_method(Robust)                           // min(sd, IQR / 1.349)
//!     .gridsize(200)                                   // Grid points per curve
//!     .cut(2.0)                                        // Extend 2 bandwidths past the data
//!     .clip(0.0, 10.0)                                 // Hard value-axis limits
//!     .boundary_policy(Reflect)                        // Mass reflected at the clip bounds
//!     .width_norm(Count)                               // Width proportional to sample size
//!     .inner(Inner::Quartiles)                         // Quartile lines
//!     .quantile_method(Linear)                         // Quantile interpolation
//!     .return_diagnostics()                            // Integral, peak and modes
//!     .cross_validate(KFold(3, &[0.5, 1.0, 2.0]).seed(7)) // Bandwidth factor by 3-fold CV
//!     .adapter(Split)                                  // Two halves per violin
//!     .build()?;
//!
//! let result = violins.fit(&values, &days, &sex)?;
//! println!("{}", result);
//! # Result::<(), ViolinError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `fit` methods return a `Result<ViolinResult<T>, ViolinError>`.
//!
//! - **`Ok(ViolinResult<T>)`**: Contains one `ViolinShape` per drawn group,
//!   plus the groups that were skipped and why.
//! - **`Err(ViolinError)`**: Indicates a failure (e.g., mismatched column
//!   lengths, non-finite values, a split layout without two hue levels).
//!
//! ```rust
//! use violin::prelude::*;
//! # let values = vec![1.0, 2.0, 3.0];
//! # let groups = vec!["a", "a", "b"];
//!
//! let violins = Violin::new().adapter(Grouped).build()?;
//!
//! match violins.fit(&values, &groups) {
//!     Ok(result) => {
//!         for shape in &result.violins {
//!             println!("{}: bandwidth {}", shape.category, shape.bandwidth());
//!         }
//!     }
//!     Err(e) => eprintln!("Estimation failed: {}", e),
//! }
//! # Result::<(), ViolinError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! violin = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Silverman, B. W. (1986). "Density Estimation for Statistics and Data Analysis"
//! - Scott, D. W. (1992). "Multivariate Density Estimation"
//! - Hintze, J. L. and Nelson, R. D. (1998). "Violin Plots: A Box Plot-Density Trace Synergism"
//! - Hyndman, R. J. and Fan, Y. (1996). "Sample Quantiles in Statistical Packages"

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - kernels, bandwidth rules and boundary handling.
mod math;

// Layer 3: Algorithms - density estimation, silhouettes and overlays.
mod algorithms;

// Layer 4: Evaluation - summaries, diagnostics and cross-validation.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - layout adapters.
mod adapters;

// High-level fluent API for violin figures.
mod api;

// Standard violin prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Grouped, Split},
        BandwidthMethod,
        BandwidthMethod::Factor,
        BandwidthMethod::Fixed,
        BandwidthMethod::NormalReference,
        BandwidthMethod::Scott,
        BandwidthMethod::Silverman,
        BoundaryPolicy::NoBoundary,
        BoundaryPolicy::Reflect,
        BoundaryPolicy::Renormalize,
        Inner, KFold, Kernel,
        Kernel::Biweight,
        Kernel::Cosine,
        Kernel::Epanechnikov,
        Kernel::Gaussian,
        Kernel::Triangle,
        Kernel::Tricube,
        Kernel::Uniform,
        Orientation::Horizontal,
        Orientation::Vertical,
        QuantileMethod::Higher,
        QuantileMethod::Linear,
        QuantileMethod::Lower,
        QuantileMethod::Midpoint,
        QuantileMethod::Nearest,
        Side, SplitFallback,
        SpreadMethod::Robust,
        SpreadMethod::StdDev,
        SpreadMethod::IQR,
        SpreadMethod::MAD,
        SwarmOverflow::Stack,
        SwarmOverflow::Widen,
        ViolinBuilder as Violin, ViolinError, ViolinResult, ViolinShape,
        WidthNorm::Area,
        WidthNorm::Count,
        WidthNorm::SharedMax,
        LOOCV,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
