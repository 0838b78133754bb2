//! Checks and reports over generated decks.
//!
//! Decks carry their lesson information only inside the comment column:
//! ```text
//! kanji: (L3) one, one radical (no.1)\nkunyomi: ひと-, ひと.つ\nonyomi: イチ, イツ
//! vocab: (読L9-II, 会L17) [n.] dormitory
//! ```

use crate::lesson::{LessonKey, decimal_digit, lesson_number, sort_key};

/// Error for a deck row whose comment has no lesson.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("row {row}: no lesson found in comment '{comment}'")]
pub struct MissingLesson {
    pub row: usize,
    pub comment: String,
}

/// First lesson number mentioned in a comment's leading `(...)` group.
///
/// Looks for the first run of `G` and decimal digits in the group; a run of
/// digits is the lesson number, anything else is the greetings lesson (0).
/// Comments without a leading group are scanned whole.
pub fn comment_lesson_number(comment: &str) -> Option<u32> {
    let group = match comment.strip_prefix('(') {
        Some(inner) => inner.split(')').next().unwrap_or_default(),
        None => comment,
    };
    let is_token = |c: char| c == 'G' || decimal_digit(c).is_some();
    let start = group.find(is_token)?;
    let rest = &group[start..];
    let end = rest.find(|c: char| !is_token(c)).unwrap_or(rest.len());
    let run = &rest[..end];
    if run.contains('G') {
        Some(0)
    } else {
        Some(lesson_number(run))
    }
}

/// First lesson tag of a vocab comment, e.g. `読L9-II` from
/// `(読L9-II, 会L17) [n.] dormitory`.
///
/// For tags with an `(e)` marker the closing parenthesis is cut off
/// (`会L1(e`), which still carries everything [`sort_key`] looks at.
pub fn comment_first_tag(comment: &str) -> &str {
    let inner = comment.strip_prefix('(').unwrap_or(comment);
    let group = inner.split(')').next().unwrap_or_default();
    group.split(',').next().unwrap_or_default().trim()
}

/// Rows of a deck covered by one lesson. Rows are 1-based and inclusive,
/// counting from the first row after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonRange {
    /// Lesson number, 0 for greetings
    pub lesson: u32,
    pub first: usize,
    pub last: usize,
}

impl LessonRange {
    pub fn label(&self) -> String {
        if self.lesson == 0 {
            "LG".to_string()
        } else {
            format!("L{}", self.lesson)
        }
    }
}

/// Compute per-lesson row ranges of a deck sorted by lesson.
///
/// A new range starts whenever the lesson number increases. Lessons that
/// never appear produce no range.
pub fn lesson_ranges<'a, I>(comments: I) -> Result<Vec<LessonRange>, MissingLesson>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranges = Vec::new();
    let mut current = 0u32;
    let mut first = 1usize;
    let mut count = 0usize;

    for (i, comment) in comments.into_iter().enumerate() {
        let row = i + 1;
        let lesson = comment_lesson_number(comment).ok_or_else(|| MissingLesson {
            row,
            comment: comment.to_string(),
        })?;

        if lesson > current {
            if row > first {
                ranges.push(LessonRange {
                    lesson: current,
                    first,
                    last: row - 1,
                });
            }
            current = lesson;
            first = row;
        }
        count = row;
    }

    if count >= first {
        ranges.push(LessonRange {
            lesson: current,
            first,
            last: count,
        });
    }

    Ok(ranges)
}

/// A deck row whose first lesson sorts before the row above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderViolation {
    /// 1-based row, counting from the first row after the header
    pub row: usize,
    pub comment: String,
    pub previous: LessonKey,
    pub found: LessonKey,
}

/// Verify that a vocab deck is ordered by the sort key of each row's first
/// lesson tag. Returns every row that breaks the order.
pub fn check_lesson_order<'a, I>(comments: I) -> Vec<OrderViolation>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut violations = Vec::new();
    let mut previous = LessonKey::default();

    for (i, comment) in comments.into_iter().enumerate() {
        let found = sort_key(comment_first_tag(comment));
        if found < previous {
            violations.push(OrderViolation {
                row: i + 1,
                comment: comment.to_string(),
                previous,
                found,
            });
        }
        previous = found;
    }

    violations
}

#[cfg(test)]
#[path = "tests/deck_tests.rs"]
mod tests;
