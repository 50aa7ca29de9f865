//! Violin plot benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 100K observations per figure)
//! - Estimation parameters (kernel, gridsize, cross-validation)
//! - Overlays (box, jitter, beeswarm, raincloud)
//! - Figures with many groups, and rendering
//!
//! For serial execution, use `VIOLINPLOT_BACKEND=serial cargo bench`.
//! For parallel execution (default), use `VIOLINPLOT_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{LogNormal, Normal};
use std::env;
use std::hint::black_box;
use violinplot::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("VIOLINPLOT_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Normal groups with shifted means.
fn generate_groups(size: usize, groups: usize, seed: u64) -> (Vec<f64>, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let labels: Vec<String> = (0..groups).map(|g| format!("g{g:02}")).collect();

    let mut values = Vec::with_capacity(size);
    let mut cats = Vec::with_capacity(size);
    for i in 0..size {
        let g = i % groups;
        values.push(g as f64 * 0.5 + noise.sample(&mut rng));
        cats.push(labels[g].clone());
    }
    (values, cats)
}

/// Right-skewed groups with a two-level hue.
fn generate_skewed_hue(size: usize, seed: u64) -> (Vec<f64>, Vec<&'static str>, Vec<&'static str>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = LogNormal::new(2.0, 0.5).unwrap();
    let days = ["mon", "tue", "wed", "thu"];

    let mut values = Vec::with_capacity(size);
    let mut cats = Vec::with_capacity(size);
    let mut hues = Vec::with_capacity(size);
    for i in 0..size {
        values.push(dist.sample(&mut rng));
        cats.push(days[i % days.len()]);
        hues.push(if (i / days.len()) % 2 == 0 { "a" } else { "b" });
    }
    (values, cats, hues)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (parallel, backend) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{backend}"));
    group.sample_size(20);

    for size in [1_000, 10_000, 100_000] {
        let (values, cats) = generate_groups(size, 4, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let model = Violin::new()
                .inner(Inner::Box)
                .adapter(Grouped)
                .parallel(parallel)
                .build()
                .unwrap();
            b.iter(|| model.fit(black_box(&values), black_box(&cats)).unwrap())
        });
    }
    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    let (parallel, backend) = get_config();
    let mut group = c.benchmark_group(format!("kernels_{backend}"));
    let (values, cats) = generate_groups(10_000, 4, 7);

    for (name, kernel) in [
        ("gaussian", Gaussian),
        ("epanechnikov", Epanechnikov),
        ("tricube", Tricube),
        ("uniform", Uniform),
    ] {
        group.bench_function(name, |b| {
            let model = Violin::new()
                .kernel(kernel)
                .inner(Inner::None)
                .adapter(Grouped)
                .parallel(parallel)
                .build()
                .unwrap();
            b.iter(|| model.fit(black_box(&values), black_box(&cats)).unwrap())
        });
    }
    group.finish();
}

fn bench_gridsize(c: &mut Criterion) {
    let (parallel, backend) = get_config();
    let mut group = c.benchmark_group(format!("gridsize_{backend}"));
    let (values, cats) = generate_groups(5_000, 4, 9);

    for gridsize in [64, 256, 1024] {
        group.bench_with_input(BenchmarkId::from_parameter(gridsize), &gridsize, |b, &gs| {
            let model = Violin::new()
                .gridsize(gs)
                .inner(Inner::None)
                .adapter(Grouped)
                .parallel(parallel)
                .build()
                .unwrap();
            b.iter(|| model.fit(black_box(&values), black_box(&cats)).unwrap())
        });
    }
    group.finish();
}

fn bench_cross_validation(c: &mut Criterion) {
    let (parallel, backend) = get_config();
    let mut group = c.benchmark_group(format!("cross_validation_{backend}"));
    group.sample_size(10);
    let (values, cats) = generate_groups(2_000, 4, 11);
    let factors = [0.1, 0.2, 0.3, 0.5, 0.8];

    group.bench_function("kfold_5", |b| {
        let model = Violin::new()
            .cross_validate(KFold(5, &factors).seed(1))
            .adapter(Grouped)
            .parallel(parallel)
            .build()
            .unwrap();
        b.iter(|| model.fit(black_box(&values), black_box(&cats)).unwrap())
    });
    group.bench_function("loocv", |b| {
        let model = Violin::new()
            .cross_validate(LOOCV(&factors))
            .adapter(Grouped)
            .parallel(parallel)
            .build()
            .unwrap();
        b.iter(|| model.fit(black_box(&values), black_box(&cats)).unwrap())
    });
    group.finish();
}

fn bench_overlays(c: &mut Criterion) {
    let (parallel, backend) = get_config();
    let mut group = c.benchmark_group(format!("overlays_{backend}"));
    let (values, cats, hues) = generate_skewed_hue(4_000, 13);

    for (name, inner) in [
        ("box", Inner::Box),
        ("quartiles", Inner::Quartiles),
        ("jitter", Inner::Jitter),
        ("beeswarm", Inner::Beeswarm),
        ("rug", Inner::Rug),
    ] {
        group.bench_function(name, |b| {
            let model = Violin::new()
                .inner(inner)
                .adapter(Split)
                .parallel(parallel)
                .build()
                .unwrap();
            b.iter(|| model.fit(black_box(&values), black_box(&cats), black_box(&hues)).unwrap())
        });
    }
    group.bench_function("raincloud", |b| {
        let model = Violin::new()
            .inner(Inner::Raincloud)
            .adapter(Grouped)
            .parallel(parallel)
            .build()
            .unwrap();
        b.iter(|| model.fit(black_box(&values), black_box(&cats)).unwrap())
    });
    group.finish();
}

fn bench_many_groups(c: &mut Criterion) {
    let (parallel, backend) = get_config();
    let mut group = c.benchmark_group(format!("many_groups_{backend}"));

    for groups in [8, 32, 128] {
        let (values, cats) = generate_groups(groups * 500, groups, 17);
        group.bench_with_input(BenchmarkId::from_parameter(groups), &groups, |b, _| {
            let model = Violin::new()
                .adapter(Grouped)
                .parallel(parallel)
                .build()
                .unwrap();
            b.iter(|| model.fit(black_box(&values), black_box(&cats)).unwrap())
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let (values, cats, hues) = generate_skewed_hue(4_000, 19);
    let result = Violin::new()
        .inner(Inner::Box)
        .adapter(Split)
        .build()
        .unwrap()
        .fit(&values, &cats, &hues)
        .unwrap();
    let style = FigureStyle::default().with_title("bench");

    group.bench_function("svg", |b| {
        b.iter(|| render_svg(black_box(&result), black_box(&style)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_kernels,
    bench_gridsize,
    bench_cross_validation,
    bench_overlays,
    bench_many_groups,
    bench_render,
);
criterion_main!(benches);
