use approx::assert_abs_diff_eq;
use tempfile::tempdir;
use violinplot::prelude::*;

const TIPS: &str = "\
total,day,time
16.99,Sun,Dinner
10.34,Sun,Dinner
21.01,Sun,Lunch
23.68,Sun,Lunch
NA,Sat,Dinner
20.65,Sat,Dinner
17.92,Sat,Lunch
,Sat,Lunch
14.78,Sat,Lunch
";

#[test]
fn test_read_and_extract_columns() {
    let table = DataTable::from_reader(TIPS.as_bytes(), b',').unwrap();
    assert_eq!(table.headers(), &["total", "day", "time"]);
    assert_eq!(table.len(), 9);

    let cols = table.columns::<f64>("total", "day", Some("time")).unwrap();
    assert_eq!(cols.dropped, 2);
    assert_eq!(cols.values.len(), 7);
    assert_eq!(cols.categories.len(), 7);
    assert_eq!(cols.hues.as_ref().map(Vec::len), Some(7));
    assert_abs_diff_eq!(cols.values[0], 16.99, epsilon = 1e-12);
    assert_eq!(cols.categories[4], "Sat");
}

#[test]
fn test_missing_column() {
    let table = DataTable::from_reader(TIPS.as_bytes(), b',').unwrap();
    let err = table.columns::<f64>("tip", "day", None).unwrap_err();
    match err {
        PlotError::MissingColumn { name, available } => {
            assert_eq!(name, "tip");
            assert_eq!(available, "total, day, time");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_numeric_cell() {
    let csv = "v,g\n1.0,a\nabc,a\n";
    let table = DataTable::from_reader(csv.as_bytes(), b',').unwrap();
    let err = table.columns::<f64>("v", "g", None).unwrap_err();
    match err {
        PlotError::NonNumericCell { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "v");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_label() {
    let csv = "v,g\n1.0,a\n2.0,\n";
    let table = DataTable::from_reader(csv.as_bytes(), b',').unwrap();
    let err = table.columns::<f64>("v", "g", None).unwrap_err();
    assert!(matches!(err, PlotError::EmptyLabel { row: 2, .. }));
}

#[test]
fn test_push_row_width_checked() {
    let mut table = DataTable::new(["v", "g"]);
    assert!(table.push_row(vec!["1".into(), "a".into()]).is_ok());
    let err = table.push_row(vec!["2".into()]).unwrap_err();
    assert!(matches!(err, PlotError::Violin(ViolinError::InvalidInput(_))));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_from_columns_length_mismatch() {
    let err = DataTable::from_columns("v", &[1.0, 2.0, 3.0], "g", &["a", "b"], None).unwrap_err();
    assert!(matches!(
        err,
        PlotError::Violin(ViolinError::MismatchedInputs {
            values_len: 3,
            labels_len: 2
        })
    ));
}

#[test]
fn test_tsv_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("samples.tsv");

    let values = [1.5, 2.5, 3.5, 4.5];
    let cats = ["a", "a", "b", "b"];
    let hues = ["x", "y", "x", "y"];
    let table = DataTable::from_columns("value", &values, "group", &cats, Some(("side", &hues[..]))).unwrap();
    table.write_csv(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("value\tgroup\tside"));

    let back = DataTable::read_csv(&path).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_fit_table_grouped_and_split() {
    let table = DataTable::from_reader(TIPS.as_bytes(), b',').unwrap();

    let grouped = Violin::<f64>::new()
        .adapter(Grouped)
        .build()
        .unwrap()
        .fit_table(&table, "total", "day", None)
        .unwrap();
    assert_eq!(grouped.categories, vec!["Sun", "Sat"]);
    assert_eq!(grouped.violins.len(), 2);

    let split = Violin::<f64>::new()
        .adapter(Split)
        .build()
        .unwrap()
        .fit_table(&table, "total", "day", "time")
        .unwrap();
    assert_eq!(split.violins.len(), 4);
    assert_eq!(split.hues, vec!["Dinner", "Lunch"]);
}

#[test]
fn test_fit_table_error_wraps_violin_error() {
    let csv = "v,g\n1.0,a\n2.0,a\n";
    let table = DataTable::from_reader(csv.as_bytes(), b',').unwrap();

    let err = Violin::<f64>::new()
        .adapter(Split)
        .build()
        .unwrap()
        .fit_table(&table, "v", "g", "g")
        .unwrap_err();
    assert!(matches!(
        err,
        PlotError::Violin(ViolinError::SplitRequiresTwoLevels { got: 1 })
    ));
}
