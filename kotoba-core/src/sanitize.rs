//! Kana reading sanitization.
//!
//! Vocabulary readings in the source sheets carry extra notation that makes
//! them awkward to type as quiz answers:
//!
//! - optional or clarifying text in full-width parentheses: `おかえり（なさい）`
//! - placeholders: `ただの～`, `もう～ない`, `（～は）…といういみだ`
//! - usage notes: `あまり ＋ negative`
//! - alternatives separated by `/`: `なん/なに`
//!
//! `、` is also stripped because the bot treats it as an answer separator.

use serde::{Deserialize, Serialize};

const BRACKET_OPEN: char = '（';
const BRACKET_CLOSE: char = '）';

/// Literal tokens removed from readings before they become answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrippedMarks(Vec<String>);

impl StrippedMarks {
    pub fn new<I, S>(marks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(marks.into_iter().map(Into::into).collect())
    }

    /// Tilde, wave dash and ellipsis only.
    pub fn basic() -> Self {
        Self::new(["～", "〜", "…"])
    }

    /// The basic set plus `！`, `、` and the ` ＋ negative` usage note.
    pub fn extended() -> Self {
        Self::new(["～", "〜", "…", "！", "、", " ＋ negative"])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for StrippedMarks {
    fn default() -> Self {
        Self::extended()
    }
}

/// Remove everything from the first `（` through the last `）`.
fn strip_brackets(reading: &str) -> String {
    let open = reading.find(BRACKET_OPEN);
    let close = reading.rfind(BRACKET_CLOSE);
    match (open, close) {
        (Some(start), Some(end)) if start < end => {
            let mut out = String::with_capacity(reading.len());
            out.push_str(&reading[..start]);
            out.push_str(&reading[end + BRACKET_CLOSE.len_utf8()..]);
            out
        }
        _ => reading.to_string(),
    }
}

/// Turn a raw sheet reading into one or more answer candidates.
///
/// Never returns an empty list: when every candidate sanitizes away, the
/// trimmed raw reading is kept as the only candidate.
///
/// # Examples
///
/// ```
/// use kotoba_core::sanitize::{sanitize_reading, StrippedMarks};
///
/// let marks = StrippedMarks::default();
/// assert_eq!(sanitize_reading("おかえり（なさい）", &marks), vec!["おかえり"]);
/// assert_eq!(sanitize_reading("なん/なに", &marks), vec!["なん", "なに"]);
/// ```
pub fn sanitize_reading(reading: &str, marks: &StrippedMarks) -> Vec<String> {
    let mut cleaned = strip_brackets(reading);
    for mark in marks.as_slice() {
        if !mark.is_empty() {
            cleaned = cleaned.replace(mark.as_str(), "");
        }
    }

    let candidates: Vec<String> = cleaned
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if candidates.is_empty() {
        log::debug!("Reading '{reading}' sanitized to nothing, keeping it as-is");
        vec![reading.trim().to_string()]
    } else {
        candidates
    }
}

#[cfg(test)]
#[path = "tests/sanitize_tests.rs"]
mod tests;
