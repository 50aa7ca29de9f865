use tempfile::tempdir;
use violinplot::prelude::*;

fn sample() -> (Vec<f64>, Vec<&'static str>, Vec<&'static str>) {
    let values = vec![
        1.0, 1.2, 1.9, 2.4, 2.6, 3.1, 4.0, 4.2, 4.8, 5.5, 5.9, 6.3, 2.2, 2.9, 3.3, 3.8,
    ];
    let cats = vec![
        "low", "low", "low", "low", "low", "low", "high", "high", "high", "high", "high", "high",
        "low", "low", "high", "high",
    ];
    let hues = vec![
        "m", "f", "m", "f", "m", "f", "m", "f", "m", "f", "m", "f", "m", "f", "m", "f",
    ];
    (values, cats, hues)
}

#[test]
fn test_render_svg_grouped() {
    let (values, cats, _) = sample();
    let result = Violin::new()
        .inner(Inner::Box)
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit(&values, &cats)
        .unwrap();

    let style = FigureStyle::default()
        .with_title("Two groups")
        .with_labels("group", "value");
    let svg = render_svg(&result, &style).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polygon"));
    assert!(svg.contains("Two groups"));
}

#[test]
fn test_render_svg_every_overlay() {
    let (values, cats, hues) = sample();
    let overlays = [
        Inner::None,
        Inner::Box,
        Inner::Quartiles,
        Inner::Jitter,
        Inner::Beeswarm,
        Inner::Rug,
    ];

    for inner in overlays {
        let result = Violin::new()
            .inner(inner)
            .adapter(Split)
            .build()
            .unwrap()
            .fit(&values, &cats, &hues)
            .unwrap();
        let svg = render_svg(&result, &FigureStyle::default()).unwrap();
        assert!(svg.contains("<polygon"), "no silhouette for {inner:?}");
    }
}

#[test]
fn test_render_svg_horizontal_raincloud() {
    let (values, cats, _) = sample();
    let result = Violin::new()
        .inner(Inner::Raincloud)
        .orientation(Horizontal)
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit(&values, &cats)
        .unwrap();

    let svg = render_svg(&result, &FigureStyle::default().with_size(400, 300)).unwrap();
    assert!(svg.contains("width=\"400\""));
    assert!(svg.contains("<circle"));
}

#[test]
fn test_render_to_files() {
    let (values, cats, hues) = sample();
    let result = Violin::new()
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit_hue(&values, &cats, &hues)
        .unwrap();

    let dir = tempdir().unwrap();
    let svg = dir.path().join("figure.svg");
    let png = dir.path().join("figure.png");

    let style = FigureStyle::default().with_size(320, 240);
    render_to_path(&result, &style, &svg).unwrap();
    render_to_path(&result, &style, &png).unwrap();

    assert!(std::fs::read_to_string(&svg).unwrap().contains("<svg"));
    let bytes = std::fs::read(&png).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_render_unsupported_format() {
    let (values, cats, _) = sample();
    let result = Violin::new()
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit(&values, &cats)
        .unwrap();

    let dir = tempdir().unwrap();
    let err = render_to_path(&result, &FigureStyle::default(), dir.path().join("figure.pdf")).unwrap_err();
    assert!(matches!(err, PlotError::UnsupportedFormat(_)));
}

#[test]
fn test_style_json_roundtrip() {
    let style = FigureStyle::default().with_title("Waits");
    let json = style.to_json().unwrap();
    assert!(json.contains("\"#4c72b0\""));

    let back = FigureStyle::from_json_str(&json).unwrap();
    assert_eq!(back, style);
}

#[test]
fn test_style_partial_json() {
    let style = FigureStyle::from_json_str(r##"{ "fill_alpha": 3.0, "outline": "AA0011", "grid": false }"##).unwrap();
    assert_eq!(style.outline, Color::rgb(0xaa, 0x00, 0x11));
    assert_eq!(style.alpha(), 1.0);
    assert!(!style.grid);
    assert_eq!(style.palette, FigureStyle::default().palette);
}

#[test]
fn test_style_invalid_color() {
    assert!(matches!(Color::parse("#12345"), Err(PlotError::InvalidColor(_))));
    assert!(matches!(Color::parse("#gg0000"), Err(PlotError::InvalidColor(_))));

    let err = FigureStyle::from_json_str(r#"{ "background": "white" }"#).unwrap_err();
    assert!(matches!(err, PlotError::Json(_)));
}

#[test]
fn test_style_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("style.json");
    std::fs::write(&path, r##"{ "palette": ["#1b9e77"], "legend": false }"##).unwrap();

    let style = FigureStyle::from_json_file(&path).unwrap();
    assert_eq!(style.fill(0), style.fill(3));
    assert!(!style.legend);
}

/// Left edges of every filled rectangle drawn in `fill`.
fn rect_lefts(svg: &str, fill: &str) -> Vec<f64> {
    svg.split("<rect")
        .skip(1)
        .filter_map(|tag| {
            let tag = &tag[..tag.find("/>")?];
            if !tag.contains(&format!("fill=\"{fill}\"")) {
                return None;
            }
            let start = tag.find(" x=\"")? + 4;
            let len = tag[start..].find('"')?;
            tag[start..start + len].parse().ok()
        })
        .collect()
}

#[test]
fn test_render_split_boxes_sit_in_their_own_halves() {
    let values = [1.0, 1.4, 2.2, 2.9, 3.1, 3.6, 4.4, 5.0];
    let cats = ["a"; 8];
    let hues = ["m", "f", "m", "f", "m", "f", "m", "f"];
    let result = Violin::new()
        .inner(Inner::Box)
        .adapter(Split)
        .build()
        .unwrap()
        .fit(&values[..], &cats, &hues)
        .unwrap();
    assert_eq!(result.violins.len(), 2);
    assert_ne!(result.violins[0].side(), result.violins[1].side());

    let mut style = FigureStyle::default();
    style.legend = false;
    let svg = render_svg(&result, &style).unwrap();

    let lefts = rect_lefts(&svg, "#222222");
    assert_eq!(lefts.len(), 2, "expected one box per half");
    assert!((lefts[0] - lefts[1]).abs() >= 1.0, "boxes overlap at {lefts:?}");
}
