//! Per-day aggregates across all patients.
//!
//! Each function returns one value per day (column). NaN readings propagate
//! into the aggregate of their day.

use serde::Serialize;
use tracing::debug;

use inflammation_model::{AsTable, ModelError, Result, Table};

/// Arithmetic mean of each day's readings.
pub fn daily_mean<D: AsTable + ?Sized>(data: &D) -> Result<Vec<f64>> {
    let table = data.as_table()?;
    let patients = table.n_patients() as f64;
    per_day(&table, "mean", |column| column.sum::<f64>() / patients)
}

/// Highest reading of each day.
pub fn daily_max<D: AsTable + ?Sized>(data: &D) -> Result<Vec<f64>> {
    let table = data.as_table()?;
    per_day(&table, "max", |column| {
        column.fold(f64::NEG_INFINITY, |acc, v| propagate_nan(acc, v, f64::max))
    })
}

/// Lowest reading of each day.
pub fn daily_min<D: AsTable + ?Sized>(data: &D) -> Result<Vec<f64>> {
    let table = data.as_table()?;
    per_day(&table, "min", |column| {
        column.fold(f64::INFINITY, |acc, v| propagate_nan(acc, v, f64::min))
    })
}

fn propagate_nan(acc: f64, value: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if acc.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        pick(acc, value)
    }
}

fn per_day<F>(table: &Table, statistic: &str, mut reduce: F) -> Result<Vec<f64>>
where
    F: FnMut(&mut dyn Iterator<Item = f64>) -> f64,
{
    if table.is_empty() {
        return Err(ModelError::EmptyTable);
    }
    let (patients, days) = table.shape();
    debug!(statistic, patients, days, "computing daily aggregate");
    Ok((0..days)
        .map(|day| reduce(&mut table.column(day)))
        .collect())
}

/// All three daily aggregates of one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStatistics {
    pub mean: Vec<f64>,
    pub max: Vec<f64>,
    pub min: Vec<f64>,
}

impl DailyStatistics {
    pub fn compute<D: AsTable + ?Sized>(data: &D) -> Result<Self> {
        let table = data.as_table()?;
        Ok(Self {
            mean: daily_mean(&*table)?,
            max: daily_max(&*table)?,
            min: daily_min(&*table)?,
        })
    }

    pub fn n_days(&self) -> usize {
        self.mean.len()
    }
}
