use approx::assert_abs_diff_eq;
use ndarray::{s, Array1};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use violinplot::prelude::*;

/// Normal samples for a list of (label, mean, sd, n) groups.
fn grouped_sample(groups: &[(&str, f64, f64, usize)], seed: u64) -> (Vec<f64>, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = Vec::new();
    let mut labels = Vec::new();
    for &(label, mean, sd, n) in groups {
        let normal = Normal::new(mean, sd).unwrap();
        for _ in 0..n {
            values.push(normal.sample(&mut rng));
            labels.push(label.to_string());
        }
    }
    (values, labels)
}

fn assert_same_figure(a: &ViolinResult<f64>, b: &ViolinResult<f64>) {
    assert_eq!(a.violins.len(), b.violins.len());
    for (va, vb) in a.violins.iter().zip(b.violins.iter()) {
        assert_eq!(va.category, vb.category);
        assert_eq!(va.hue, vb.hue);
        assert_abs_diff_eq!(va.bandwidth(), vb.bandwidth(), epsilon = 1e-12);
        for (ha, hb) in va.silhouette.half_widths.iter().zip(vb.silhouette.half_widths.iter()) {
            assert_abs_diff_eq!(*ha, *hb, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_grouped_sequential() {
    let (values, labels) = grouped_sample(&[("a", 0.0, 1.0, 40), ("b", 3.0, 0.5, 40)], 1);

    let res = Violin::new()
        .adapter(Grouped)
        .parallel(false)
        .build()
        .unwrap()
        .fit(&values, &labels)
        .unwrap();

    assert_eq!(res.violins.len(), 2);
    assert_eq!(res.categories, vec!["a", "b"]);
}

#[test]
fn test_grouped_parallel_matches_sequential() {
    let (values, labels) = grouped_sample(
        &[("a", 0.0, 1.0, 60), ("b", 3.0, 0.5, 60), ("c", -2.0, 2.0, 60), ("d", 1.0, 0.2, 60)],
        2,
    );

    let fit = |parallel: bool| {
        Violin::new()
            .inner(Inner::Jitter)
            .seed(5)
            .cross_validate(KFold(4, &[0.5, 1.0, 1.5]).seed(3))
            .adapter(Grouped)
            .parallel(parallel)
            .build()
            .unwrap()
            .fit(&values, &labels)
            .unwrap()
    };

    let seq = fit(false);
    let par = fit(true);
    assert_same_figure(&seq, &par);
    for (a, b) in seq.violins.iter().zip(par.violins.iter()) {
        assert_eq!(a.cv_scores, b.cv_scores);
        assert_eq!(a.points, b.points);
    }
}

#[test]
fn test_split_parallel_matches_sequential() {
    let (values, days) = grouped_sample(&[("sat", 20.0, 4.0, 50), ("sun", 24.0, 6.0, 50)], 3);
    let service: Vec<String> = (0..values.len())
        .map(|i| if i % 2 == 0 { "lunch" } else { "dinner" }.to_string())
        .collect();

    let fit = |parallel: bool| {
        Violin::new()
            .cross_validate(LOOCV(&[0.5, 1.0, 2.0]))
            .adapter(Split)
            .parallel(parallel)
            .build()
            .unwrap()
            .fit(&values, &days, &service)
            .unwrap()
    };

    let seq = fit(false);
    let par = fit(true);
    assert_eq!(par.violins.len(), 4);
    assert_same_figure(&seq, &par);
}

#[test]
fn test_ndarray_integration() {
    let values = Array1::from_vec(vec![1.0, 1.5, 2.0, 2.2, 5.0, 5.5, 6.0, 6.1]);
    let labels = vec!["x", "x", "x", "x", "y", "y", "y", "y"];

    let res = Violin::new()
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit(&values, &labels)
        .unwrap();

    assert_eq!(res.violins.len(), 2);
    assert_eq!(res.violins[0].density.n, 4);
}

#[test]
fn test_non_contiguous_ndarray_rejected() {
    let values = Array1::from_vec((0..10).map(|i| i as f64).collect());
    let strided = values.slice(s![..;2]);
    let labels = vec!["a"; 5];

    let err = Violin::new()
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit(&strided, &labels)
        .unwrap_err();

    assert!(matches!(err, ViolinError::InvalidInput(_)));
}

#[test]
fn test_grouped_hue_fit() {
    let values = vec![1.0, 2.0, 3.0, 4.0, 2.0, 3.0, 4.0, 5.0];
    let cats = vec!["a", "a", "b", "b", "a", "a", "b", "b"];
    let hues = vec!["x", "x", "x", "x", "y", "y", "y", "y"];

    let res = Violin::new()
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit_hue(&values, &cats, &hues)
        .unwrap();

    assert_eq!(res.violins.len(), 4);
    assert_eq!(res.hues, vec!["x", "y"]);
}

#[test]
fn test_split_fallback_flagged() {
    let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let cats = vec!["a"; 6];
    let hues = vec!["p", "p", "q", "q", "r", "r"];

    let res = Violin::new()
        .split_fallback(SplitFallback::Grouped)
        .adapter(Split)
        .build()
        .unwrap()
        .fit(&values, &cats, &hues)
        .unwrap();

    assert!(res.fallback);
    assert_eq!(res.violins.len(), 3);
}

#[test]
fn test_build_errors_propagate() {
    let err = Violin::<f64>::new()
        .gridsize(1)
        .adapter(Grouped)
        .build()
        .unwrap_err();
    assert!(matches!(err, ViolinError::InvalidGridSize(1)));

    let err = Violin::<f64>::new()
        .dodge(false)
        .adapter(Split)
        .build()
        .unwrap_err();
    assert!(matches!(err, ViolinError::UnsupportedFeature { .. }));

    let err = Violin::<f64>::new()
        .kernel(Gaussian)
        .kernel(Epanechnikov)
        .adapter(Grouped)
        .build()
        .unwrap_err();
    assert!(matches!(err, ViolinError::DuplicateParameter { .. }));
}

#[test]
fn test_f32_parallel() {
    let values: Vec<f32> = (0..40).map(|i| (i % 10) as f32 * 0.5).collect();
    let labels: Vec<&str> = (0..40).map(|i| if i < 20 { "lo" } else { "hi" }).collect();

    let res = Violin::new()
        .inner(Inner::Beeswarm)
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit(&values, &labels)
        .unwrap();

    assert_eq!(res.violins.len(), 2);
    assert!(res.violins.iter().all(|v| v.points.is_some()));
}

#[test]
fn test_result_metadata_types_from_prelude() {
    let values = vec![1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5];
    let cats = vec!["a", "a", "a", "a", "b", "b", "b", "b"];

    let res = Violin::new()
        .inner(Inner::Beeswarm)
        .order(["a", "b", "c"])
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit(&values, &cats)
        .unwrap();

    assert_eq!(res.layout, Layout::Grouped);

    let skipped: &[SkippedGroup] = &res.skipped;
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].category, "c");

    for shape in &res.violins {
        let points: &PointLayout<f64> = shape.points.as_ref().unwrap();
        assert_eq!(points.kind, PointKind::Swarm);
        assert_eq!(points.values.len(), 4);
    }
}
