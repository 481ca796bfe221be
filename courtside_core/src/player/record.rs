use serde::Deserialize;

/// One usable row of the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub active: bool,
}

impl PlayerRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }
}

/// A row as it sits in the CSV, before presence checks.
///
/// Only the two required columns are deserialized; any other column is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRow {
    pub full_name: Option<String>,
    pub is_active: Option<String>,
}

/// Outcome of validating a single [`RawRow`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum RowCheck {
    Keep(PlayerRecord),
    MissingField,
    BadStatus(String),
}

impl RawRow {
    pub fn check(self) -> RowCheck {
        let name = match self.full_name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return RowCheck::MissingField,
        };
        let Some(raw_status) = self.is_active.filter(|s| !s.trim().is_empty()) else {
            return RowCheck::MissingField;
        };
        match parse_status(&raw_status) {
            Some(active) => RowCheck::Keep(PlayerRecord { name, active }),
            None => RowCheck::BadStatus(raw_status),
        }
    }
}

/// Coerce an `is_active` cell into a boolean.
///
/// Accepted forms, ignoring case and surrounding whitespace: `true`, `false`, `1`, `0`.
#[must_use]
pub fn parse_status(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: Option<&str>, status: Option<&str>) -> RawRow {
        RawRow {
            full_name: name.map(str::to_string),
            is_active: status.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_status_accepted_forms() {
        assert_eq!(parse_status("true"), Some(true));
        assert_eq!(parse_status("TRUE"), Some(true));
        assert_eq!(parse_status(" 1 "), Some(true));
        assert_eq!(parse_status("False"), Some(false));
        assert_eq!(parse_status("0"), Some(false));
    }

    #[test]
    fn test_parse_status_rejects_other_values() {
        assert_eq!(parse_status("yes"), None);
        assert_eq!(parse_status("2"), None);
        assert_eq!(parse_status(""), None);
    }

    #[test]
    fn test_check_keeps_complete_row() {
        assert_eq!(
            raw(Some(" Jordan Bell "), Some("1")).check(),
            RowCheck::Keep(PlayerRecord::new("Jordan Bell", true))
        );
    }

    #[test]
    fn test_check_drops_missing_fields() {
        assert_eq!(raw(None, Some("1")).check(), RowCheck::MissingField);
        assert_eq!(raw(Some("   "), Some("1")).check(), RowCheck::MissingField);
        assert_eq!(raw(Some("Jordan Bell"), None).check(), RowCheck::MissingField);
        assert_eq!(raw(Some("Jordan Bell"), Some(" ")).check(), RowCheck::MissingField);
    }

    #[test]
    fn test_check_flags_unknown_status() {
        assert_eq!(
            raw(Some("Jordan Bell"), Some("retired")).check(),
            RowCheck::BadStatus("retired".to_string())
        );
    }
}
