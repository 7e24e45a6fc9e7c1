//! Subcommand bodies.
//!
//! Each command returns the text it would print so the binary stays a thin
//! wrapper around parsing, logging setup and exit codes.

use std::fmt::Write as _;

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span};

use inflammation_core::{DailyStatistics, attach_names, patient_normalise, records_to_patients};
use inflammation_ingest::{load_csv, resolve_inputs};
use inflammation_model::Doctor;

use crate::cli::{NormaliseArgs, RecordsArgs, StatsArgs};
use crate::logging::redact_value;
use crate::render::{stats_table, table_csv};

/// Daily mean/max/min table for every input file.
pub fn run_stats(args: &StatsArgs) -> Result<String> {
    let files = resolve_inputs(&args.inputs).context("resolve inputs")?;
    let mut out = String::new();
    for path in &files {
        let span = info_span!("stats", file = %path.display());
        let _guard = span.enter();
        let table = load_csv(path).with_context(|| format!("load {}", path.display()))?;
        let stats = DailyStatistics::compute(&table)
            .with_context(|| format!("daily statistics for {}", path.display()))?;
        writeln!(out, "{} ({} patients)", path.display(), table.n_patients())?;
        writeln!(out, "{}", stats_table(&stats, args.precision))?;
    }
    info!(files = files.len(), "statistics complete");
    Ok(out)
}

/// Normalised CSV for every input file, headed by the file name when there
/// is more than one.
pub fn run_normalise(args: &NormaliseArgs) -> Result<String> {
    let files = resolve_inputs(&args.inputs).context("resolve inputs")?;
    let with_headings = files.len() > 1;
    let mut out = String::new();
    for path in &files {
        let span = info_span!("normalise", file = %path.display());
        let _guard = span.enter();
        let table = load_csv(path).with_context(|| format!("load {}", path.display()))?;
        let normalised = patient_normalise(&table)
            .with_context(|| format!("normalise {}", path.display()))?;
        if with_headings {
            writeln!(out, "# {}", path.display())?;
        }
        writeln!(out, "{}", table_csv(&normalised, args.precision))?;
    }
    Ok(out)
}

/// Named records as pretty JSON, or the doctor holding them when `--doctor`
/// is given.
pub fn run_records(args: &RecordsArgs) -> Result<String> {
    let path = &args.input;
    let table = load_csv(path).with_context(|| format!("load {}", path.display()))?;
    if args.names.len() != table.n_patients() {
        bail!(
            "{} has {} patients but {} names were given",
            path.display(),
            table.n_patients(),
            args.names.len()
        );
    }
    let records = attach_names(&table, &args.names);
    for record in &records {
        debug!(patient = redact_value(record.name), days = record.data.len(), "record");
    }

    let mut json = match &args.doctor {
        Some(name) => {
            let mut doctor = Doctor::new(name.as_str()).context("doctor name")?;
            for patient in records_to_patients(&records).context("build patients")? {
                doctor.add_patient(patient).context("add patient")?;
            }
            serde_json::to_string_pretty(&doctor)?
        }
        None => serde_json::to_string_pretty(&records)?,
    };
    json.push('\n');
    Ok(json)
}
