//! Tests that the prelude exposes everything a typical figure needs.

use violin::prelude::*;

#[test]
fn test_prelude_full_configuration() {
    let values = vec![4.1, 4.5, 5.0, 5.2, 6.3, 3.9, 4.4, 4.8, 5.9, 6.8, 7.0, 7.2];
    let days = vec!["sat", "sat", "sat", "sat", "sat", "sat", "sun", "sun", "sun", "sun", "sun", "sun"];
    let sex = vec!["f", "m", "f", "m", "f", "m", "f", "m", "f", "m", "f", "m"];

    let result = Violin::new()
        .kernel(Epanechnikov)
        .bandwidth(Factor(0.8))
        .spread_method(MAD)
        .gridsize(64)
        .clip(0.0, 10.0)
        .boundary_policy(Renormalize)
        .width_norm(Count)
        .orientation(Horizontal)
        .inner(Inner::Jitter)
        .quantile_method(Midpoint)
        .jitter(0.5)
        .seed(11)
        .cross_validate(LOOCV(&[0.5, 1.0]))
        .adapter(Split)
        .build()
        .unwrap()
        .fit(&values, &days, &sex)
        .unwrap();

    assert_eq!(result.violins.len(), 4);
    assert_eq!(result.orientation, Horizontal);
    for shape in &result.violins {
        let coords = shape.point_coordinates(result.orientation);
        assert_eq!(coords.len(), 3);
        // Horizontal: the value axis is x
        for (&(x, _), &v) in coords.iter().zip(shape.points.as_ref().unwrap().values.iter()) {
            assert_eq!(x, v);
        }
    }
}

#[test]
fn test_prelude_defaults() {
    let values = vec![1.0_f32, 2.0, 2.5, 3.0, 7.0, 7.5, 8.0];
    let groups = vec!["x", "x", "x", "x", "y", "y", "y"];

    let result = Violin::new()
        .bandwidth(Scott)
        .swarm_overflow(Widen)
        .inner(Inner::Beeswarm)
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit(&values, &groups)
        .unwrap();

    assert_eq!(result.violins.len(), 2);
    assert!(result.violins.iter().all(|v: &ViolinShape<f32>| v.points.is_some()));
}
