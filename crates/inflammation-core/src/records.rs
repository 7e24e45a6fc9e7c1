//! Pairing table rows with patient names.

use tracing::debug;

use inflammation_model::{NamedRecord, Patient, Result, Table};

/// Pairs row `i` of `data` with `names[i]`.
///
/// # Panics
///
/// Panics if the number of names differs from the number of patients.
pub fn attach_names<'a, S: AsRef<str>>(data: &'a Table, names: &'a [S]) -> Vec<NamedRecord<'a>> {
    assert_eq!(
        data.n_patients(),
        names.len(),
        "every patient row needs exactly one name"
    );
    debug!(patients = names.len(), "attaching names to rows");
    data.rows()
        .zip(names)
        .map(|(row, name)| NamedRecord {
            name: name.as_ref(),
            data: row,
        })
        .collect()
}

/// Turns named records into patients with one observation per day.
pub fn records_to_patients(records: &[NamedRecord<'_>]) -> Result<Vec<Patient>> {
    records
        .iter()
        .map(|record| Patient::from_readings(record.name, record.data))
        .collect()
}
