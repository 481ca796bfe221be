//! The in-memory player table and the CSV loader that builds it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use super::record::{PlayerRecord, RawRow, RowCheck};
use crate::error::{LoadError, Result};

/// Header of the column holding the player's full name.
pub const NAME_COLUMN: &str = "full_name";
/// Header of the column holding the active-status flag.
pub const STATUS_COLUMN: &str = "is_active";

/// Ordered, read-only collection of valid player records.
#[derive(Debug, Clone, Default)]
pub struct PlayerTable {
    records: Vec<PlayerRecord>,
    columns: Vec<String>,
}

impl PlayerTable {
    /// Build a table directly from records, e.g. for tests or other sources.
    #[must_use]
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        Self {
            records,
            columns: vec![NAME_COLUMN.to_string(), STATUS_COLUMN.to_string()],
        }
    }

    /// Load the table from a CSV file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(e),
        })?;
        info!("Loading player data from {}", path.display());
        Self::from_reader(file)
    }

    /// Load the table from any CSV source with a header row.
    ///
    /// Only `full_name` and `is_active` are kept. Rows where either is absent, or where
    /// the status is not one of the accepted literal forms, are dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns: Vec<String> = headers.iter().map(str::to_string).collect();
        info!("Available columns in player data: {:?}", columns);

        let missing: Vec<&'static str> = [NAME_COLUMN, STATUS_COLUMN]
            .into_iter()
            .filter(|required| !columns.iter().any(|c| c == required))
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns {
                missing,
                found: columns,
            });
        }

        let mut records = Vec::new();
        let mut dropped = 0_usize;
        for (line, row) in csv_reader.records().enumerate() {
            let raw: RawRow = row?.deserialize(Some(&headers))?;
            match raw.check() {
                RowCheck::Keep(record) => records.push(record),
                RowCheck::MissingField => {
                    debug!("Dropping row {}: missing name or status", line + 1);
                    dropped += 1;
                }
                RowCheck::BadStatus(value) => {
                    warn!(
                        "Dropping row {}: unrecognized {} value {:?}",
                        line + 1,
                        STATUS_COLUMN,
                        value
                    );
                    dropped += 1;
                }
            }
        }

        info!("Loaded {} player records ({} dropped)", records.len(), dropped);

        Ok(Self { records, columns })
    }

    /// Case-insensitive exact lookup. The first record in table order wins.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&PlayerRecord> {
        let wanted = name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.name.to_lowercase() == wanted)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|record| record.active).count()
    }

    /// Every header found in the source, including the ones that were not kept.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}
