//! Lesson tag parsing and ordering.
//!
//! Genki lesson tags come in a handful of shapes:
//! ```text
//! 会L12      conversation/grammar lesson 12
//! 会L12(e)   end-of-chapter column of lesson 12
//! 読L12-II   reading/writing lesson 12, exercise II
//! 会G        greetings lesson (sorted before lesson 1)
//! ```
//!
//! Within one lesson number the deck order is plain, then `(e)`, then the
//! reading exercises I, II, III.

use std::cmp::Ordering;
use std::fmt;

/// Composite ordering key derived from a lesson tag.
///
/// Field order matters: the derived `Ord` compares `number` first, then `rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LessonKey {
    /// Lesson number; 0 for the greetings lesson.
    pub number: u32,
    /// 0 plain, 1 end-of-chapter, 2/3/4 reading exercise I/II/III.
    pub rank: u8,
}

impl LessonKey {
    pub fn is_greetings(&self) -> bool {
        self.number == 0
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_greetings() {
            write!(f, "LG")?;
        } else {
            write!(f, "L{}", self.number)?;
        }
        match self.rank {
            0 => Ok(()),
            1 => write!(f, "(e)"),
            n => write!(f, "-{}", "I".repeat(usize::from(n - 1))),
        }
    }
}

/// Value of an ASCII or full-width (`０`-`９`) decimal digit.
pub fn decimal_digit(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        '０'..='９' => Some(c as u32 - '０' as u32),
        _ => None,
    }
}

/// Lesson number of a tag: every decimal digit in the tag, concatenated.
/// Full-width digits count, so `会L１７` is lesson 17.
///
/// Tags without digits denote the greetings lesson and yield 0.
pub fn lesson_number(tag: &str) -> u32 {
    tag.chars()
        .filter_map(decimal_digit)
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
}

/// Rank of a tag within its lesson number.
pub fn lesson_rank(tag: &str) -> u8 {
    if tag.contains('e') {
        1
    } else if tag.contains('I') {
        let count = tag.chars().filter(|&c| c == 'I').count();
        u8::try_from(count).unwrap_or(u8::MAX - 1).saturating_add(1)
    } else {
        0
    }
}

/// Compute the ordering key for a lesson tag.
///
/// # Examples
///
/// ```
/// use kotoba_core::lesson::sort_key;
///
/// assert!(sort_key("会G") < sort_key("会L1"));
/// assert!(sort_key("会L1(e)") < sort_key("読L1-I"));
/// assert!(sort_key("読L1-III") < sort_key("会L2"));
/// ```
pub fn sort_key(tag: &str) -> LessonKey {
    LessonKey {
        number: lesson_number(tag),
        rank: lesson_rank(tag),
    }
}

/// Compare two lesson tags by their sort keys.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Error returned when a kanji lesson code has no numeric part.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid lesson code '{0}': expected a one-character prefix followed by a number")]
pub struct LessonCodeError(pub String);

/// Parse a kanji-sheet lesson code such as `L3`.
///
/// Exactly one leading character is dropped and the remainder must be an
/// integer. This is stricter than [`lesson_number`], which scans the whole tag.
pub fn parse_lesson_code(code: &str) -> Result<u32, LessonCodeError> {
    let mut chars = code.trim().chars();
    if chars.next().is_none() {
        return Err(LessonCodeError(code.to_string()));
    }
    chars
        .as_str()
        .trim()
        .parse()
        .map_err(|_| LessonCodeError(code.to_string()))
}

/// Split a comma-separated lesson list into trimmed, non-empty tags.
pub fn split_lessons(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "tests/lesson_tests.rs"]
mod tests;
