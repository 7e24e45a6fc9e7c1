//! Inflammation analysis core.
//!
//! Pure operations over a validated [`Table`](inflammation_model::Table):
//! - [`statistics`]: per-day mean, max and min across patients
//! - [`normalise`]: per-patient rescaling against each patient's peak
//! - [`records`]: pairing table rows with patient names
//!
//! Every entry point accepts anything implementing
//! [`AsTable`](inflammation_model::AsTable), so untyped [`Value`] input is
//! checked for kind and shape before any arithmetic happens.
//!
//! [`Value`]: inflammation_model::Value

pub mod normalise;
pub mod records;
pub mod statistics;

pub use normalise::patient_normalise;
pub use records::{attach_names, records_to_patients};
pub use statistics::{DailyStatistics, daily_max, daily_mean, daily_min};
