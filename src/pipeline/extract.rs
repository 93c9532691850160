//! Extract-dedup stage: pull one column out of a table as a set of names.

use std::collections::BTreeSet;

use anyhow::Result;

use super::ingest::Table;

/// Distinct city names from one column, in ascending order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CitySet {
    names: BTreeSet<String>,
    /// Data rows inspected.
    pub rows_read: usize,
    /// Rows whose value was empty or absent and therefore treated as missing.
    pub empty_skipped: usize,
}

impl CitySet {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Rows that repeated a name already seen.
    pub fn duplicates(&self) -> usize {
        self.rows_read - self.empty_skipped - self.names.len()
    }

    fn insert(&mut self, value: Option<&str>) {
        self.rows_read += 1;
        // Only an empty or absent field counts as missing; text like "NA" is a name.
        match value {
            Some(name) if !name.is_empty() => {
                self.names.insert(name.to_string());
            }
            _ => self.empty_skipped += 1,
        }
    }
}

impl<'a> FromIterator<&'a str> for CitySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = CitySet::default();
        for value in iter {
            set.insert(Some(value));
        }
        set
    }
}

/// Collect every non-empty value of `column` in `table`.
///
/// Fails when the column does not exist, so a typo never yields an empty list.
pub fn unique_values(table: &Table, column: &str) -> Result<CitySet> {
    let index = table.column_index(column)?;

    let mut set = CitySet::default();
    for record in table.records() {
        set.insert(record.get(index));
    }
    Ok(set)
}
