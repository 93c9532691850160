//! The transform pipeline.
//!
//! Three stages run in order within a single pass:
//!
//! 1. **Ingest** (`ingest`): read the CSV file, header and records.
//! 2. **Extract-dedup** (`extract`): collect the distinct non-empty values of
//!    one column.
//! 3. **Emit** (`emit`): render the values as an exported JavaScript array
//!    and write the file.
//!
//! The output file is only touched once the whole input has been read and the
//! column found, so a failed run never leaves a partial document behind.

mod emit;
mod extract;
mod ingest;

use std::path::PathBuf;

use anyhow::Result;

pub use emit::{quote, render, write_document};
pub use extract::{CitySet, unique_values};
pub use ingest::{Table, parse_table, read_table};

use crate::config::Settings;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub column: String,
    pub rows_read: usize,
    pub empty_skipped: usize,
    pub duplicates: usize,
    pub city_count: usize,
}

pub fn run(settings: &Settings) -> Result<TransformSummary> {
    let table = read_table(&settings.input)?;
    let cities = unique_values(&table, &settings.column)?;
    let document = render(&cities, &settings.export_name)?;
    write_document(&settings.output, &document)?;

    Ok(TransformSummary {
        input: settings.input.clone(),
        output: settings.output.clone(),
        column: settings.column.clone(),
        rows_read: cities.rows_read,
        empty_skipped: cities.empty_skipped,
        duplicates: cities.duplicates(),
        city_count: cities.len(),
    })
}
