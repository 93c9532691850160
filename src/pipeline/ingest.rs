//! Ingest stage: load a CSV file with a header row into memory.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};

/// Header plus every data record of one CSV file.
#[derive(Debug)]
pub struct Table {
    source: PathBuf,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    /// Position of the column whose header is exactly `name`.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        match self.headers.iter().position(|header| header == name) {
            Some(index) => Ok(index),
            None => {
                let available = self
                    .headers
                    .iter()
                    .map(|header| format!("\"{}\"", header))
                    .collect::<Vec<_>>();
                let available = if available.is_empty() {
                    "none".to_string()
                } else {
                    available.join(", ")
                };
                bail!(
                    "Column \"{}\" not found in {} (available columns: {})",
                    name,
                    self.source.display(),
                    available
                )
            }
        }
    }
}

/// Read the whole CSV file at `path`.
///
/// The file handle is dropped before returning, on success and on error.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    parse_table(file, path)
}

/// Parse CSV from any reader. `source` is only used in diagnostics.
///
/// Rows may have fewer or more fields than the header; a field a short row
/// lacks reads as missing.
pub fn parse_table<R: Read>(reader: R, source: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", source.display()))?
        .clone();

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse CSV: {}", source.display()))?;

    Ok(Table {
        source: source.to_path_buf(),
        headers,
        records,
    })
}
