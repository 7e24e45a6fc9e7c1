#![deny(unsafe_code)]

use std::borrow::Cow;

use crate::error::{ModelError, Result};
use crate::value::Value;

/// A rectangular grid of inflammation readings.
///
/// Rows are patients and columns are days. Every row has the same number of
/// days and every reading is either finite or NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    patients: usize,
    days: usize,
    values: Vec<f64>,
}

impl Table {
    /// A table with no patients and a fixed number of days.
    pub fn empty(days: usize) -> Self {
        Self {
            patients: 0,
            days,
            values: Vec::new(),
        }
    }

    /// Builds a table from per-patient rows.
    ///
    /// The first row fixes the number of days; an empty iterator yields an
    /// empty zero-day table.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut days = None;
        let mut patients = 0usize;
        let mut values = Vec::new();
        for (row_idx, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *days.get_or_insert(row.len());
            if row.len() != expected {
                return Err(ModelError::RaggedRow {
                    row: row_idx,
                    expected,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
            patients += 1;
        }
        Self::from_flat(patients, days.unwrap_or(0), values)
    }

    /// Builds a table from row-major values.
    pub fn from_flat(patients: usize, days: usize, values: Vec<f64>) -> Result<Self> {
        if patients.checked_mul(days) != Some(values.len()) {
            let found = if patients == 0 {
                values.len()
            } else {
                values.len() / patients
            };
            return Err(ModelError::RaggedRow {
                row: 0,
                expected: days,
                found,
            });
        }
        if let Some(pos) = values.iter().position(|v| v.is_infinite()) {
            return Err(ModelError::InfiniteValue {
                row: pos / days,
                day: pos % days,
            });
        }
        Ok(Self {
            patients,
            days,
            values,
        })
    }

    pub fn n_patients(&self) -> usize {
        self.patients
    }

    pub fn n_days(&self) -> usize {
        self.days
    }

    pub fn is_empty(&self) -> bool {
        self.patients == 0
    }

    /// (patients, days)
    pub fn shape(&self) -> (usize, usize) {
        (self.patients, self.days)
    }

    pub fn get(&self, patient: usize, day: usize) -> Option<f64> {
        if patient < self.patients && day < self.days {
            Some(self.values[patient * self.days + day])
        } else {
            None
        }
    }

    pub fn row(&self, patient: usize) -> Option<&[f64]> {
        if patient < self.patients {
            let start = patient * self.days;
            Some(&self.values[start..start + self.days])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        (0..self.patients).map(move |patient| {
            let start = patient * self.days;
            &self.values[start..start + self.days]
        })
    }

    /// Readings for one day across all patients, in patient order.
    pub fn column(&self, day: usize) -> impl Iterator<Item = f64> + '_ {
        let step = self.days.max(1);
        let take = if day < self.days { self.patients } else { 0 };
        self.values.iter().skip(day).step_by(step).take(take).copied()
    }

    /// Row-major view of every reading.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<&Value> for Table {
    type Error = ModelError;

    fn try_from(value: &Value) -> Result<Self> {
        let Value::List(rows) = value else {
            return Err(ModelError::TypeMismatch {
                expected: "two-dimensional table",
                found: value.kind_name(),
            });
        };
        let ndim = value.ndim()?;
        if ndim != 2 {
            return Err(ModelError::Dimension {
                expected: 2,
                found: ndim,
            });
        }
        let mut numeric = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let Value::List(cells) = row else {
                return Err(ModelError::InconsistentNesting { index });
            };
            let parsed = cells
                .iter()
                .map(|cell| {
                    cell.as_number().ok_or(ModelError::TypeMismatch {
                        expected: "number",
                        found: cell.kind_name(),
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            numeric.push(parsed);
        }
        Self::from_rows(numeric)
    }
}

impl TryFrom<Value> for Table {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self> {
        Self::try_from(&value)
    }
}

/// Anything that can be viewed as a validated [`Table`].
///
/// Already-validated tables are borrowed; untyped input is checked and
/// converted on demand.
pub trait AsTable {
    fn as_table(&self) -> Result<Cow<'_, Table>>;
}

impl AsTable for Table {
    fn as_table(&self) -> Result<Cow<'_, Table>> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsTable for Value {
    fn as_table(&self) -> Result<Cow<'_, Table>> {
        Table::try_from(self).map(Cow::Owned)
    }
}

impl serde::Serialize for Table {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> serde::Deserialize<'de> for Table {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
