mod record;
mod table;

pub use record::{PlayerRecord, parse_status};
pub use table::{NAME_COLUMN, PlayerTable, STATUS_COLUMN};
