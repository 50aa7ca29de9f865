//! Same Box, Different Violins
//!
//! Four samples are built so that their quartiles agree, yet their shapes
//! differ: a normal sample, a bimodal mixture, a right-skewed sample and a
//! flat one. Box plots of the four look alike; the violins do not.
//!
//! Writes `box_vs_violin.svg` and `box_vs_violin.png` to the output
//! directory (first argument, default `target/violinplot-examples`).
//! Set `RUST_LOG=violinplot=debug` to see per-violin bandwidths.

use rand::prelude::*;
use rand_distr::{Exp, Normal, Uniform};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use violinplot::prelude::*;

fn main() -> Result<(), PlotError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out = output_dir()?;
    let (values, groups) = generate(400, 42);

    let violins = Violin::new()
        .inner(Inner::Box)
        .bandwidth(Silverman)
        .mode_threshold(0.1)
        .return_diagnostics()
        .adapter(Grouped)
        .build()?
        .fit(&values, &groups)?;

    println!("{}", "=".repeat(72));
    println!("{:<10} {:>8} {:>8} {:>8} {:>10} {:>6}", "group", "q1", "median", "q3", "bandwidth", "modes");
    println!("{}", "-".repeat(72));
    for shape in &violins.violins {
        let summary = shape.summary.as_ref();
        let modes = shape.diagnostics.as_ref().map_or(0, |d| d.modes.len());
        println!(
            "{:<10} {:>8.3} {:>8.3} {:>8.3} {:>10.4} {:>6}",
            shape.category,
            summary.map_or(f64::NAN, |s| s.q1),
            summary.map_or(f64::NAN, |s| s.median),
            summary.map_or(f64::NAN, |s| s.q3),
            shape.bandwidth(),
            modes,
        );
    }
    println!("{}", "=".repeat(72));

    let style = FigureStyle::default()
        .with_title("Same box, different violins")
        .with_labels("sample", "value");
    render_to_path(&violins, &style, out.join("box_vs_violin.svg"))?;
    render_to_path(&violins, &style, out.join("box_vs_violin.png"))?;

    // The same data with quartile lines instead of a box
    let quartiles = Violin::new()
        .inner(Inner::Quartiles)
        .width_norm(Count)
        .adapter(Grouped)
        .build()?
        .fit(&values, &groups)?;
    render_to_path(&quartiles, &style, out.join("box_vs_violin_quartiles.svg"))?;

    println!("figures written to {}", out.display());
    Ok(())
}

/// Four samples standardized to quartiles (-1, 0, 1).
fn generate(n: usize, seed: u64) -> (Vec<f64>, Vec<&'static str>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let exp = Exp::new(1.0).unwrap();
    let flat = Uniform::new(-1.0, 1.0).unwrap();

    let raw: [(&str, Vec<f64>); 4] = [
        ("normal", (0..n).map(|_| normal.sample(&mut rng)).collect()),
        (
            "bimodal",
            (0..n)
                .map(|i| {
                    let centre = if i % 2 == 0 { -2.0 } else { 2.0 };
                    centre + 0.4 * normal.sample(&mut rng)
                })
                .collect(),
        ),
        ("skewed", (0..n).map(|_| exp.sample(&mut rng)).collect()),
        ("flat", (0..n).map(|_| flat.sample(&mut rng)).collect()),
    ];

    let mut values = Vec::with_capacity(4 * n);
    let mut groups = Vec::with_capacity(4 * n);
    for (name, sample) in raw {
        let (q1, median, q3) = quartiles(&sample);
        let half_iqr = (q3 - q1) / 2.0;
        values.extend(sample.iter().map(|v| (v - median) / half_iqr));
        groups.extend(std::iter::repeat(name).take(sample.len()));
    }
    (values, groups)
}

fn quartiles(sample: &[f64]) -> (f64, f64, f64) {
    let mut s = sample.to_vec();
    s.sort_by(|a, b| a.total_cmp(b));
    let at = |p: f64| s[((s.len() - 1) as f64 * p).round() as usize];
    (at(0.25), at(0.5), at(0.75))
}

fn output_dir() -> Result<PathBuf, PlotError> {
    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/violinplot-examples"));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
