//! Tests for attaching names to table rows.

use inflammation_core::{attach_names, records_to_patients};
use inflammation_model::{Named, Table};

#[test]
fn attach_names_pairs_rows_in_order() {
    let data = Table::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let names = vec!["Alice".to_string(), "Bob".to_string()];
    let records = attach_names(&data, &names);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Alice");
    assert_eq!(records[0].data, &[1.0, 2.0, 3.0]);
    assert_eq!(records[1].name, "Bob");
    assert_eq!(records[1].data, &[4.0, 5.0, 6.0]);
}

#[test]
fn named_records_serialize() {
    let data = Table::from_rows([[0.0, 1.5]]).unwrap();
    let records = attach_names(&data, &["Alice"]);
    let json = serde_json::to_string(&records).expect("serialize records");
    assert_eq!(json, r#"[{"name":"Alice","data":[0.0,1.5]}]"#);
}

#[test]
#[should_panic]
fn attach_names_rejects_extra_names() {
    let data = Table::from_rows([[1.0]]).unwrap();
    let _ = attach_names(&data, &["Alice", "Bob"]);
}

#[test]
fn records_become_patients() {
    let data = Table::from_rows([[3.0, 4.0], [5.0, 6.0]]).unwrap();
    let records = attach_names(&data, &["Alice", "Bob"]);
    let patients = records_to_patients(&records).unwrap();
    assert_eq!(patients[1].name(), "Bob");
    let last = patients[1].last_observation().unwrap();
    assert_eq!((last.day(), last.value()), (1, 6.0));
}
