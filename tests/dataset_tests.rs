use aggbench::{AggBenchError, Column, Dataset, Value};

fn sample() -> Dataset {
    Dataset::new()
        .with_column(
            "game_type",
            Column::Categorical(vec!["Poker".into(), "Slots".into(), "Poker".into()]),
        )
        .expect("game_type")
        .with_column("bet_amount", Column::Float(vec![5.0, 2.5, 4.0]))
        .expect("bet_amount")
        .with_column("win_loss", Column::Int(vec![1, -1, -1]))
        .expect("win_loss")
}

#[test]
fn test_shape_counts_rows_and_columns() {
    assert_eq!(sample().shape(), (3, 3));
    assert_eq!(Dataset::new().shape(), (0, 0));
}

#[test]
fn test_length_mismatch_is_rejected() {
    let err = sample()
        .with_column("short", Column::Float(vec![1.0]))
        .unwrap_err();
    assert!(matches!(
        err,
        AggBenchError::LengthMismatch { ref column, expected: 3, actual: 1 } if column == "short"
    ));
}

#[test]
fn test_rows_visit_cells_in_order() {
    let ds = sample();
    let rows: Vec<(String, f64, bool)> = ds
        .rows()
        .map(|row| {
            (
                row.get_str("game_type").expect("type").to_string(),
                row.get_f64("bet_amount").expect("amount"),
                row.get("win_loss").expect("win").is_positive(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Poker".to_string(), 5.0, true),
            ("Slots".to_string(), 2.5, false),
            ("Poker".to_string(), 4.0, false),
        ]
    );
    assert_eq!(ds.rows().len(), 3);
}

#[test]
fn test_row_lookup_errors() {
    let ds = sample();
    let row = ds.rows().next().expect("row");
    assert!(matches!(row.get("missing"), Err(AggBenchError::MissingColumn(_))));
    assert!(matches!(
        row.get_f64("game_type"),
        Err(AggBenchError::TypeMismatch { expected: "numeric", .. })
    ));
    assert_eq!(row.get("win_loss").expect("int"), Value::Int(1));
}

#[test]
fn test_typed_views_check_column_kind() {
    let ds = sample();
    assert!(ds.floats("bet_amount").is_ok());
    assert!(matches!(
        ds.floats("win_loss"),
        Err(AggBenchError::TypeMismatch { expected: "float", .. })
    ));
    assert_eq!(ds.numeric("win_loss").expect("numeric"), vec![1.0, -1.0, -1.0]);
}

#[test]
fn test_derive_float_multiplies_columns() {
    let mut ds = sample();
    ds.derive_float("winnings", "bet_amount", "win_loss", |a, b| a * b)
        .expect("derive");
    assert_eq!(ds.shape(), (3, 4));
    assert_eq!(ds.floats("winnings").expect("winnings"), &[5.0, -2.5, -4.0]);
}

#[test]
fn test_clone_is_deep() {
    let original = sample();
    let mut copy = original.clone();
    copy.floats_mut("bet_amount").expect("floats")[0] = 99.0;
    copy.categories_mut("game_type").expect("labels")[1] = "Bingo".into();
    assert_eq!(original.floats("bet_amount").expect("floats")[0], 5.0);
    assert_eq!(original.categories("game_type").expect("labels")[1], "Slots");
    assert_ne!(original, copy);
}
