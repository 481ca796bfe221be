use std::sync::OnceLock;

use regex::Regex;

/// The `player` token as a whole word, in any case.
static PLAYER_TOKEN: OnceLock<Regex> = OnceLock::new();
/// Exactly two words running to the end of the question. The second word must
/// contain something other than trailing `?`, `.` or `!`.
static NAME_TAIL: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn player_token() -> &'static Regex {
    PLAYER_TOKEN.get_or_init(|| {
        Regex::new(r"(?i)\bplayer\b").expect("Static regex pattern is guaranteed to be valid")
    })
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn name_tail() -> &'static Regex {
    NAME_TAIL.get_or_init(|| {
        Regex::new(r"^\s+(\S+)\s+([^\s?.!]\S*?)[?.!]*\s*$")
            .expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Pull the candidate full name out of a free-text question.
///
/// Only the first `player` token counts. Returns the two words after it, joined
/// by a single space and in the casing the user typed them.
#[must_use]
pub fn extract_name(question: &str) -> Option<String> {
    let token = player_token().find(question)?;
    let caps = name_tail().captures(&question[token.end()..])?;
    let first = caps.get(1)?.as_str();
    let last = caps.get(2)?.as_str();
    Some(format!("{first} {last}"))
}

/// Upper-case the first letter of every run of letters, lower-case the rest.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
