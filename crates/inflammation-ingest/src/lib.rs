//! Loading inflammation tables from delimited text.
//!
//! Each line of an inflammation file holds one patient's readings, one field
//! per day, with no header row.

pub mod csv_table;
pub mod discovery;
pub mod error;

pub use csv_table::{LoadOptions, load_csv, load_csv_with_options, read_table};
pub use discovery::{list_csv_files, resolve_inputs};
pub use error::{IngestError, Result};
