//! Natural-language status questions answered against a [`Dataset`].

mod interactive;
mod pattern;

use std::fmt;

use tracing::debug;

use crate::dataset::Dataset;

pub use pattern::{extract_name, title_case};

/// Shown when a question does not follow the `player [name]` phrasing.
pub const INSTRUCTIONS: &str = "Please specify a player in the format: 'player [name]'.";
/// Sample question used in help text; it must be accepted by [`extract_name`].
pub const EXAMPLE_QUESTION: &str = "is it player Jordan Bell?";
/// Shown for every question while the dataset is degraded.
pub const UNAVAILABLE: &str = "Required player columns not available in dataset.";

/// The answer to one question. `Display` renders the user-facing sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The player was found; `name` is already title-cased.
    Status { name: String, active: bool },
    /// No record matched; `query` is the name exactly as typed.
    NotFound { query: String },
    Instructions,
    Unavailable,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { name, active } => {
                let status = if *active { "active" } else { "inactive" };
                write!(f, "{name} is currently {status} in the league.")
            }
            Self::NotFound { query } => write!(f, "Could not find data for player: {query}"),
            Self::Instructions => f.write_str(INSTRUCTIONS),
            Self::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// Answers questions about whether a player is active.
///
/// Owns the loaded [`Dataset`]; the dataset is never modified after load.
#[derive(Debug)]
pub struct QueryEngine {
    dataset: Dataset,
}

impl QueryEngine {
    #[must_use]
    pub const fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Answer a free-text question. Every failure path maps to an [`Answer`].
    #[must_use]
    pub fn answer(&self, question: &str) -> Answer {
        let Some(table) = self.dataset.table() else {
            return Answer::Unavailable;
        };

        let Some(query) = extract_name(question) else {
            debug!("No player name in question: {:?}", question);
            return Answer::Instructions;
        };

        match table.find(&query) {
            Some(record) => {
                debug!("Matched {:?} to record {:?}", query, record.name);
                Answer::Status {
                    name: title_case(&query),
                    active: record.active,
                }
            }
            None => Answer::NotFound { query },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::player::{PlayerRecord, PlayerTable};
    use std::path::PathBuf;

    fn engine(records: Vec<PlayerRecord>) -> QueryEngine {
        QueryEngine::new(Dataset::from(PlayerTable::from_records(records)))
    }

    fn degraded() -> QueryEngine {
        QueryEngine::new(Dataset::Degraded(LoadError::NotFound(PathBuf::from(
            "data/player.csv",
        ))))
    }

    #[test]
    fn test_active_player() {
        let engine = engine(vec![PlayerRecord::new("Jordan Bell", true)]);
        assert_eq!(
            engine.answer("player Jordan Bell").to_string(),
            "Jordan Bell is currently active in the league."
        );
    }

    #[test]
    fn test_inactive_player_any_case() {
        let engine = engine(vec![PlayerRecord::new("Jordan Bell", false)]);
        assert_eq!(
            engine.answer("PLAYER jordan bell").to_string(),
            "Jordan Bell is currently inactive in the league."
        );
    }

    #[test]
    fn test_not_found_echoes_query_verbatim() {
        let engine = engine(vec![PlayerRecord::new("Jordan Bell", true)]);
        let answer = engine.answer("player jOHN doE");
        assert_eq!(
            answer,
            Answer::NotFound {
                query: "jOHN doE".to_string()
            }
        );
        assert_eq!(answer.to_string(), "Could not find data for player: jOHN doE");
    }

    #[test]
    fn test_instructions_for_unmatched_phrasing() {
        let engine = engine(vec![PlayerRecord::new("Jordan Bell", true)]);
        for question in ["who is the best player", "player LeBron", "", "Jordan Bell"] {
            assert_eq!(engine.answer(question), Answer::Instructions);
            assert_eq!(engine.answer(question).to_string(), INSTRUCTIONS);
        }
    }

    #[test]
    fn test_example_question_gets_status_answer() {
        let engine = engine(vec![PlayerRecord::new("Jordan Bell", false)]);
        assert_eq!(
            engine.answer(EXAMPLE_QUESTION).to_string(),
            "Jordan Bell is currently inactive in the league."
        );
    }

    #[test]
    fn test_only_first_player_is_considered() {
        let engine = engine(vec![
            PlayerRecord::new("Jordan Bell", false),
            PlayerRecord::new("LeBron James", true),
        ]);
        assert_eq!(
            engine.answer("player Jordan Bell or player LeBron James"),
            Answer::Instructions
        );
    }

    #[test]
    fn test_punctuation_is_not_a_surname() {
        let engine = engine(vec![PlayerRecord::new("Jordan Bell", true)]);
        assert_eq!(engine.answer("player Jordan ..."), Answer::Instructions);
    }

    #[test]
    fn test_degraded_short_circuits_everything() {
        let engine = degraded();
        for question in ["player Jordan Bell", "who is the best player", ""] {
            assert_eq!(engine.answer(question).to_string(), UNAVAILABLE);
        }
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let engine = engine(vec![
            PlayerRecord::new("Jordan Bell", false),
            PlayerRecord::new("jordan bell", true),
        ]);
        assert_eq!(
            engine.answer("player jordan bell"),
            Answer::Status {
                name: "Jordan Bell".to_string(),
                active: false
            }
        );
    }
}
