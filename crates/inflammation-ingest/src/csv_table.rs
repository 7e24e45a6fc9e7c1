use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use inflammation_model::Table;

use crate::error::{IngestError, Result};

/// How to read a delimited inflammation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field separator.
    pub delimiter: u8,
    /// Whether the first record is a header to skip.
    pub has_headers: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    fn reader_builder(self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(csv::Trim::All);
        builder
    }
}

/// Loads a comma-separated inflammation file with no header row.
pub fn load_csv(path: &Path) -> Result<Table> {
    load_csv_with_options(path, LoadOptions::default())
}

pub fn load_csv_with_options(path: &Path, options: LoadOptions) -> Result<Table> {
    let source_name = path.display().to_string();
    if !path.is_file() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let reader = options
        .reader_builder()
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            source_name: source_name.clone(),
            source,
        })?;
    let table = parse_records(reader, &source_name)?;
    info!(
        source = %source_name,
        patients = table.n_patients(),
        days = table.n_days(),
        "loaded inflammation table"
    );
    Ok(table)
}

/// Reads a table from any reader; `source_name` labels errors.
pub fn read_table<R: Read>(reader: R, source_name: &str, options: LoadOptions) -> Result<Table> {
    parse_records(options.reader_builder().from_reader(reader), source_name)
}

fn parse_records<R: Read>(mut reader: csv::Reader<R>, source_name: &str) -> Result<Table> {
    let header_offset = u64::from(reader.has_headers());
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Csv {
            source_name: source_name.to_string(),
            source,
        })?;
        let record_number = idx as u64 + 1 + header_offset;
        let row = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                field
                    .parse::<f64>()
                    .map_err(|_| IngestError::InvalidNumber {
                        source_name: source_name.to_string(),
                        record: record_number,
                        column: col + 1,
                        value: field.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    debug!(source = source_name, records = rows.len(), "parsed records");
    Table::from_rows(rows).map_err(|source| IngestError::Table {
        source_name: source_name.to_string(),
        source,
    })
}
