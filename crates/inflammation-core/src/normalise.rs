//! Per-patient normalisation.
//!
//! Each reading is divided by the highest reading of the same patient, so a
//! patient's peak becomes 1. Validation runs before any division:
//!
//! 1. the input must be a table (not a number or text) — `TypeMismatch`
//! 2. the table must be two-dimensional and rectangular — shape errors
//! 3. no reading may be negative — `NegativeValue`
//!
//! NaN readings are ignored when finding a patient's peak. Quotients that
//! are not finite (NaN readings, or a patient whose peak is 0 or NaN) become 0.

use tracing::{debug, warn};

use inflammation_model::{AsTable, ModelError, Result, Table};

/// Rescales every patient's readings into `[0, 1]` against their own peak.
///
/// Returns a new table of the same shape; the input is never modified.
pub fn patient_normalise<D: AsTable + ?Sized>(data: &D) -> Result<Table> {
    let table = data.as_table()?;
    check_non_negative(&table)?;

    let (patients, days) = table.shape();
    let mut values = Vec::with_capacity(patients * days);
    let mut flattened = 0usize;
    for row in table.rows() {
        let peak = row_peak(row);
        if peak.is_nan() || peak <= 0.0 {
            flattened += 1;
        }
        values.extend(row.iter().map(|&reading| finite_or_zero(reading / peak)));
    }
    if flattened > 0 {
        warn!(flattened, patients, "patients without a positive reading normalised to zero");
    }
    debug!(patients, days, "normalised table");
    Table::from_flat(patients, days, values)
}

/// Highest non-NaN reading, or NaN when the row has none.
fn row_peak(row: &[f64]) -> f64 {
    row.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, f64::max)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn check_non_negative(table: &Table) -> Result<()> {
    for (row, readings) in table.rows().enumerate() {
        if let Some(day) = readings.iter().position(|&v| v < 0.0) {
            return Err(ModelError::NegativeValue {
                row,
                day,
                value: readings[day],
            });
        }
    }
    Ok(())
}
