//! CSV dataset loading.

use csv::{Reader, StringRecord};
use std::io::Read;
use std::path::Path;

use super::TrainingError;

/// A headed CSV table held in memory.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Dataset {
    pub fn from_path(path: &Path) -> Result<Self, TrainingError> {
        Self::from_csv(Reader::from_path(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TrainingError> {
        Self::from_csv(Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut reader: Reader<R>) -> Result<Self, TrainingError> {
        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the first header matching any of `names`.
    ///
    /// # Errors
    /// Returns `TrainingError::MissingColumn` naming the first candidate.
    pub fn column(&self, names: &[&str]) -> Result<usize, TrainingError> {
        names
            .iter()
            .find_map(|name| self.headers.iter().position(|h| h.trim() == *name))
            .ok_or_else(|| {
                let canonical = names.first().copied().unwrap_or_default();
                TrainingError::MissingColumn(canonical.to_string())
            })
    }

    /// Trimmed cell at `column` of `row`.
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.records
            .get(row)
            .and_then(|record| record.get(column))
            .map(str::trim)
            .unwrap_or_default()
    }

    /// Every trimmed cell of `column`, in row order.
    pub fn values(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.records.len()).map(move |row| self.value(row, column))
    }
}
