//! Tests for the daily statistics functions.

use inflammation_core::{daily_max, daily_mean, daily_min};
use inflammation_model::{ErrorKind, Table, Value};

fn table<const D: usize>(rows: &[[f64; D]]) -> Table {
    Table::from_rows(rows).expect("rectangular table")
}

#[test]
fn daily_mean_of_zeros() {
    let data = table(&[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]]);
    assert_eq!(daily_mean(&data).unwrap(), vec![0.0, 0.0]);
}

#[test]
fn daily_mean_of_integers() {
    let data = table(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    assert_eq!(daily_mean(&data).unwrap(), vec![3.0, 4.0]);
}

#[test]
fn daily_max_of_positive_and_negative() {
    let positive = table(&[[1.0, 1.0, 3.0], [2.0, 3.0, 8.0], [5.0, 1.0, 0.0]]);
    assert_eq!(daily_max(&positive).unwrap(), vec![5.0, 3.0, 8.0]);

    let negative = table(&[[-1.0, -1.0, -3.0], [-2.0, -3.0, -8.0], [-5.0, -1.0, 0.0]]);
    assert_eq!(daily_max(&negative).unwrap(), vec![-1.0, -1.0, 0.0]);
}

#[test]
fn daily_min_of_mixed_tables() {
    let cases: [([[f64; 3]; 3], [f64; 3]); 3] = [
        (
            [[1.0, 1.0, 3.0], [2.0, 3.0, 8.0], [5.0, 1.0, 0.0]],
            [1.0, 1.0, 0.0],
        ),
        (
            [[-1.0, -1.0, -3.0], [-2.0, -3.0, -8.0], [-5.0, -1.0, 0.0]],
            [-5.0, -3.0, -8.0],
        ),
        (
            [[10.0, 1.0, 10.0], [2.0, 20.0, 10.0], [30.0, 30.0, 3.0]],
            [2.0, 1.0, 3.0],
        ),
    ];
    for (rows, expected) in cases {
        assert_eq!(daily_min(&table(&rows)).unwrap(), expected.to_vec());
    }
}

#[test]
fn daily_min_of_text_cells_is_type_mismatch() {
    let words = Value::from(vec![vec!["Hello", "there"], vec!["General", "Kenobi"]]);
    let err = daily_min(&words).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn untyped_numeric_input_is_accepted() {
    let data = Value::from(vec![vec![1, 5], vec![3, 1]]);
    assert_eq!(daily_max(&data).unwrap(), vec![3.0, 5.0]);
    assert_eq!(daily_mean(&data).unwrap(), vec![2.0, 3.0]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn rectangular() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..8, 1usize..12).prop_flat_map(|(patients, days)| {
            prop::collection::vec(prop::collection::vec(-50.0f64..50.0, days), patients)
        })
    }

    proptest! {
        #[test]
        fn aggregates_match_column_definitions(rows in rectangular()) {
            let data = Table::from_rows(&rows).unwrap();
            let mean = daily_mean(&data).unwrap();
            let max = daily_max(&data).unwrap();
            let min = daily_min(&data).unwrap();
            prop_assert_eq!(mean.len(), data.n_days());

            for day in 0..data.n_days() {
                let column: Vec<f64> = rows.iter().map(|row| row[day]).collect();
                let expected_mean = column.iter().sum::<f64>() / column.len() as f64;
                prop_assert!((mean[day] - expected_mean).abs() < 1e-9);
                prop_assert!(column.iter().all(|&v| v <= max[day] && v >= min[day]));
                prop_assert!(column.contains(&max[day]));
                prop_assert!(column.contains(&min[day]));
                prop_assert!(min[day] <= mean[day] + 1e-9 && mean[day] <= max[day] + 1e-9);
            }
        }
    }
}
