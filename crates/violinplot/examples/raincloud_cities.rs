//! Raincloud Plot of Daily Temperatures
//!
//! One year of simulated daily mean temperatures for four cities, drawn as
//! horizontal rainclouds: a half violin above each spine, a box along it and
//! the raw days scattered in a band below. A beeswarm version of the same
//! data is written alongside.
//!
//! Output directory: first argument, default `target/violinplot-examples`.

use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::f64::consts::PI;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use violinplot::prelude::*;

/// (city, annual mean, seasonal amplitude, day-to-day noise)
const CITIES: [(&str, f64, f64, f64); 4] = [
    ("Reykjavik", 5.0, 6.0, 2.5),
    ("Berlin", 10.0, 9.5, 3.0),
    ("Lisbon", 17.5, 5.0, 2.0),
    ("Singapore", 27.5, 0.8, 0.9),
];

fn main() -> Result<(), PlotError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out = output_dir()?;
    let (temps, cities) = simulate(365, 2024)?;

    let rain = Violin::new()
        .inner(Inner::Raincloud)
        .orientation(Horizontal)
        .width_norm(SharedMax)
        .jitter(0.6)
        .seed(3)
        .adapter(Grouped)
        .width(0.9)
        .build()?
        .fit(&temps, &cities)?;

    let style = FigureStyle::default()
        .with_title("Daily mean temperature")
        .with_labels("city", "°C")
        .with_size(900, 600);
    render_to_path(&rain, &style, out.join("raincloud_cities.svg"))?;
    render_to_path(&rain, &style, out.join("raincloud_cities.png"))?;

    let swarm = Violin::new()
        .inner(Inner::Beeswarm)
        .swarm_overflow(Widen)
        .adapter(Grouped)
        .build()?
        .fit(&temps, &cities)?;
    render_to_path(&swarm, &style.with_title("Daily mean temperature (beeswarm)"), out.join("beeswarm_cities.svg"))?;

    for shape in &rain.violins {
        let s = shape.summary.as_ref();
        println!(
            "{:<10} median {:>6.1}  iqr {:>5.1}  outliers {:>3}",
            shape.category,
            s.map_or(f64::NAN, |s| s.median),
            s.map_or(f64::NAN, |s| s.iqr),
            s.map_or(0, |s| s.outliers.len()),
        );
    }
    if swarm.swarm_overflow() > 0 {
        println!("{} points widened past the silhouettes", swarm.swarm_overflow());
    }

    println!("figures written to {}", out.display());
    Ok(())
}

/// Seasonal cycle plus noise, one value per city and day.
fn simulate(days: usize, seed: u64) -> Result<(Vec<f64>, Vec<&'static str>), PlotError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut temps = Vec::with_capacity(days * CITIES.len());
    let mut cities = Vec::with_capacity(days * CITIES.len());

    for (city, mean, amplitude, noise) in CITIES {
        let normal = Normal::new(0.0, noise)
            .map_err(|e| ViolinError::InvalidInput(e.to_string()))?;
        for day in 0..days {
            let season = (2.0 * PI * (day as f64 - 105.0) / days as f64).sin();
            temps.push(mean + amplitude * season + normal.sample(&mut rng));
            cities.push(city);
        }
    }
    Ok((temps, cities))
}

fn output_dir() -> Result<PathBuf, PlotError> {
    let dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/violinplot-examples"));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
