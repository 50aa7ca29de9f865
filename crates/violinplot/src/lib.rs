//! # violinplot — Parallel Violin Plots for Rust
//!
//! Grouped and split violin plots with box, quartile, jitter, beeswarm, rug
//! and raincloud overlays, estimated in parallel and rendered to SVG or PNG.
//! Built on the [`violin`] crate, which computes every density curve and
//! silhouette as plain data.
//!
//! ## What is a violin plot?
//!
//! A violin plot shows the distribution of a numeric sample per category. For
//! every group a kernel density estimate is evaluated on a grid, and the curve
//! is mirrored around a spine to form a silhouette whose width at each value
//! is proportional to the estimated density. Two samples with identical box
//! plots can have very different violins.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use violinplot::prelude::*;
//! use ndarray::Array1;
//!
//! let values = Array1::from_vec(vec![1.0, 1.4, 2.1, 2.3, 2.8, 5.0, 5.2, 5.9, 6.1, 6.4]);
//! let groups = vec!["a", "a", "a", "a", "a", "b", "b", "b", "b", "b"];
//!
//! // Groups are estimated in parallel (default)
//! let violins = Violin::new()
//!     .bandwidth(Silverman)   // Silverman's rule of thumb
//!     .inner(Inner::Box)      // Box summary inside each silhouette
//!     .adapter(Grouped)
//!     .build()?;
//!
//! let result = violins.fit(&values, &groups)?;
//!
//! // Draw the figure
//! let svg = render_svg(&result, &FigureStyle::default().with_title("Two groups"))?;
//! assert!(svg.contains("<svg"));
//! # Result::<(), PlotError>::Ok(())
//! ```
//!
//! ### From a CSV Table
//!
//! ```rust
//! use violinplot::prelude::*;
//!
//! let csv = "wait,day,service\n\
//!            12.5,sat,lunch\n14.0,sat,dinner\n11.2,sat,lunch\n15.8,sat,dinner\n\
//!            9.1,sun,lunch\n17.4,sun,dinner\n8.7,sun,lunch\n18.9,sun,dinner\n";
//! let table = DataTable::from_reader(csv.as_bytes(), b',')?;
//!
//! let result = Violin::<f64>::new()
//!     .inner(Inner::Quartiles)
//!     .adapter(Split)
//!     .build()?
//!     .fit_table(&table, "wait", "day", "service")?;
//!
//! assert_eq!(result.violins.len(), 4);
//! # Result::<(), PlotError>::Ok(())
//! ```
//!
//! ### Styling
//!
//! [`FigureStyle`](prelude::FigureStyle) is plain serde data; every field has
//! a default, so a JSON style only lists what it changes:
//!
//! ```rust
//! use violinplot::prelude::*;
//!
//! let style = FigureStyle::from_json_str(r##"{ "width": 640, "palette": ["#1b9e77", "#d95f02"] }"##)?;
//! assert_eq!(style.width, 640);
//! assert_eq!(style.height, 600);
//! # Result::<(), PlotError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Conditions that change what is drawn (skipped groups, floored bandwidths,
//! beeswarm overflow, split fallback, dropped table rows) are logged with
//! `tracing` at `warn` level; timings and bandwidths at `debug` level.
//!
//! ## References
//!
//! - Hintze, J. L. and Nelson, R. D. (1998). "Violin Plots: A Box Plot-Density Trace Synergism"
//! - Allen, M. et al. (2019). "Raincloud plots: a multi-platform tool for robust data visualization"

// Layer 4: Evaluation - parallel cross-validation and fit reports.
mod evaluation;

// Layer 5: Engine - parallel density estimation.
mod engine;

// Layer 6: Adapters - parallel layout adapters.
mod adapters;

// High-level fluent API for violin figures.
mod api;

// Input data handling.
mod input;

// Tabular input.
mod table;

// Figure styling.
mod style;

// Figure rendering.
mod render;

// Error types for tables, styles and rendering.
mod errors;

// Standard violinplot prelude.
pub mod prelude {
    pub use crate::api::{
        render_svg, render_to_path,
        Adapter::{Grouped, Split},
        BandwidthMethod,
        BandwidthMethod::{Factor, Fixed, NormalReference, Scott, Silverman},
        BoundaryPolicy::{NoBoundary, Reflect, Renormalize},
        Color, Columns, DataTable, FigureStyle, Inner, KFold,
        Layout, PointKind, PointLayout,
        Kernel::{Biweight, Cosine, Epanechnikov, Gaussian, Triangle, Tricube, Uniform},
        Orientation::{Horizontal, Vertical},
        PlotError, PlotResult,
        QuantileMethod::{Higher, Linear, Lower, Midpoint, Nearest},
        Side, SkippedGroup, SplitFallback,
        SpreadMethod::{Robust, StdDev, IQR, MAD},
        SwarmOverflow::{Stack, Widen},
        ViolinBuilder as Violin, ViolinError, ViolinResult, ViolinShape,
        WidthNorm::{Area, Count, SharedMax},
        LOOCV,
    };
    pub use crate::input::ViolinInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
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
