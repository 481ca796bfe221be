//! Load outcome shared between the loader and the query engine.

use std::path::Path;

use tracing::error;

use crate::error::{LoadError, Result};
use crate::player::PlayerTable;

/// Either a usable table or the reason the system runs degraded.
#[derive(Debug)]
pub enum Dataset {
    Ready(PlayerTable),
    Degraded(LoadError),
}

impl Dataset {
    /// Load the dataset from `path`. Never fails: any load error puts the
    /// dataset into degraded mode and is logged once here.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        Self::from(PlayerTable::from_path(path))
    }

    #[must_use]
    pub const fn table(&self) -> Option<&PlayerTable> {
        match self {
            Self::Ready(table) => Some(table),
            Self::Degraded(_) => None,
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded(_))
    }
}

impl From<Result<PlayerTable>> for Dataset {
    fn from(result: Result<PlayerTable>) -> Self {
        match result {
            Ok(table) => Self::Ready(table),
            Err(e) => {
                error!("Error loading data: {e}");
                Self::Degraded(e)
            }
        }
    }
}

impl From<PlayerTable> for Dataset {
    fn from(table: PlayerTable) -> Self {
        Self::Ready(table)
    }
}
