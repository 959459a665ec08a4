use tabprep::{CellValue, TabularSample};

#[test]
fn test_json_wire_shape() {
    let sample = TabularSample::from_rows(
        vec!["age".to_string(), "name".to_string()],
        vec![
            vec![30.0.into(), CellValue::Text("ann".to_string())],
            vec![CellValue::Null, CellValue::Text("bob".to_string())],
        ],
    )
    .unwrap()
    .with_total_rows(1200);

    let json = serde_json::to_string(&sample).unwrap();
    // camelCase key, untagged cells: bare scalars and null
    assert!(json.contains("\"totalRows\":1200"));
    assert!(json.contains("[30.0,\"ann\"]"));
    assert!(json.contains("[null,\"bob\"]"));

    let back: TabularSample = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sample);
}

#[test]
fn test_validate_catches_ragged_rows() {
    let json = r#"{"columns":["a","b"],"rows":[[1.0,2.0],[3.0]],"totalRows":2}"#;
    let sample: TabularSample = serde_json::from_str(json).unwrap();
    assert!(sample.validate().is_err());
}

#[test]
fn test_column_lookup() {
    let sample = TabularSample::new(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(sample.column_index("b"), Some(1));
    assert_eq!(sample.column_index("c"), None);
    assert!(sample.require_column("c").is_err());
}

#[test]
fn test_sample_rows_is_bounded_and_order_preserving() {
    let rows = (0..100).map(|i| vec![(i as f64).into()]).collect();
    let sample = TabularSample::from_rows(vec!["i".to_string()], rows)
        .unwrap()
        .with_total_rows(100_000);

    let drawn = sample.sample_rows(10, Some(42));
    assert_eq!(drawn.n_rows(), 10);
    assert_eq!(drawn.total_rows, 100_000);
    assert_eq!(drawn.columns, sample.columns);

    // original order is preserved
    let values: Vec<f64> = drawn
        .rows
        .iter()
        .map(|r| match &r[0] {
            CellValue::Number(v) => *v,
            _ => unreachable!(),
        })
        .collect();
    let mut sorted = values.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(values, sorted);
}

#[test]
fn test_sample_rows_seed_is_reproducible() {
    let rows = (0..50).map(|i| vec![(i as f64).into()]).collect();
    let sample = TabularSample::from_rows(vec!["i".to_string()], rows).unwrap();

    let a = sample.sample_rows(5, Some(7));
    let b = sample.sample_rows(5, Some(7));
    assert_eq!(a, b);
}

#[test]
fn test_sample_rows_noop_when_small_enough() {
    let sample = TabularSample::from_rows(
        vec!["x".to_string()],
        vec![vec![1.0.into()], vec![2.0.into()]],
    )
    .unwrap();

    let drawn = sample.sample_rows(10, None);
    assert_eq!(drawn, sample);
}
