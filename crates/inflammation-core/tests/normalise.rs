//! Tests for per-patient normalisation.

use inflammation_core::patient_normalise;
use inflammation_model::{ErrorKind, ModelError, Table, Value};

fn assert_almost_equal(actual: &Table, expected: &[&[f64]], decimals: i32) {
    let tolerance = 1.5 * 10f64.powi(-decimals);
    assert_eq!(actual.n_patients(), expected.len());
    for (row, expected_row) in actual.rows().zip(expected) {
        assert_eq!(row.len(), expected_row.len());
        for (a, e) in row.iter().zip(expected_row.iter()) {
            assert!((a - e).abs() < tolerance, "{a} differs from {e}");
        }
    }
}

#[test]
fn zeros_stay_zero() {
    let data = Value::from(vec![vec![0, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]);
    let normalised = patient_normalise(&data).unwrap();
    assert_almost_equal(
        &normalised,
        &[&[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0], &[0.0, 0.0, 0.0]],
        2,
    );
}

#[test]
fn ones_stay_one() {
    let data = Value::from(vec![vec![1, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]);
    let normalised = patient_normalise(&data).unwrap();
    assert_almost_equal(
        &normalised,
        &[&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]],
        2,
    );
}

#[test]
fn rows_scale_by_their_own_peak() {
    let data = Value::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    let normalised = patient_normalise(&data).unwrap();
    assert_almost_equal(
        &normalised,
        &[&[0.33, 0.67, 1.0], &[0.67, 0.83, 1.0], &[0.78, 0.89, 1.0]],
        2,
    );
}

#[test]
fn negative_reading_is_domain_error() {
    let data = Value::List(vec![
        Value::from(vec![f64::NAN, 1.0, 1.0]),
        Value::from(vec![-1.0, 1.0, 1.0]),
        Value::from(vec![1.0, 1.0, 1.0]),
    ]);
    let err = patient_normalise(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert!(err.to_string().starts_with("inflammation values should not be negative"));
}

#[test]
fn text_and_scalar_input_is_type_mismatch() {
    for input in [Value::from("Hello"), Value::from(3)] {
        let err = patient_normalise(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}

#[test]
fn flat_input_is_shape_error() {
    let err = patient_normalise(&Value::from(vec![0])).unwrap_err();
    assert_eq!(
        err,
        ModelError::Dimension {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn ragged_input_is_shape_error() {
    let data = Value::from(vec![vec![1, 2], vec![3]]);
    let err = patient_normalise(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shape);
}

#[test]
fn input_table_is_left_untouched() {
    let data = Table::from_rows([[2.0, 4.0]]).unwrap();
    let before = data.clone();
    let normalised = patient_normalise(&data).unwrap();
    assert_eq!(data, before);
    assert_eq!(normalised.to_rows(), vec![vec![0.5, 1.0]]);
}

#[test]
fn all_nan_patient_becomes_zeros() {
    let data = Table::from_rows([[f64::NAN, f64::NAN], [1.0, 2.0]]).unwrap();
    let normalised = patient_normalise(&data).unwrap();
    assert_eq!(normalised.to_rows(), vec![vec![0.0, 0.0], vec![0.5, 1.0]]);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn reading() -> impl Strategy<Value = f64> {
        prop_oneof![
            6 => 0.0f64..1000.0,
            1 => Just(0.0),
            1 => Just(f64::NAN),
        ]
    }

    fn non_negative() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (0usize..8, 1usize..12).prop_flat_map(|(patients, days)| {
            prop::collection::vec(prop::collection::vec(reading(), days), patients)
        })
    }

    proptest! {
        #[test]
        fn output_is_same_shape_and_bounded(rows in non_negative()) {
            let data = Table::from_rows(&rows).unwrap();
            let normalised = patient_normalise(&data).unwrap();
            prop_assert_eq!(normalised.shape(), data.shape());
            prop_assert!(normalised.values().iter().all(|v| (0.0..=1.0).contains(v)));
        }

        #[test]
        fn rows_without_positive_peak_are_zero(rows in non_negative()) {
            let data = Table::from_rows(&rows).unwrap();
            let normalised = patient_normalise(&data).unwrap();
            for (input, output) in data.rows().zip(normalised.rows()) {
                let has_positive = input.iter().any(|&v| v > 0.0);
                if !has_positive {
                    prop_assert!(output.iter().all(|&v| v == 0.0));
                } else {
                    prop_assert!(output.contains(&1.0));
                }
            }
        }

        #[test]
        fn any_negative_reading_is_rejected(
            rows in non_negative(),
            negative in -1000.0f64..-0.001,
        ) {
            prop_assume!(!rows.is_empty());
            let mut rows = rows;
            let last = rows.len() - 1;
            rows[last][0] = negative;
            let data = Table::from_rows(&rows).unwrap();
            let err = patient_normalise(&data).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Domain);
        }
    }
}
