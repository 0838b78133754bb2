//! Core logic for turning textbook word lists into Kotoba quiz decks.
//!
//! Everything here is pure: sheet rows go in, merged and ordered records come
//! out. File formats live in `kotoba-sheet`, the dictionary client in
//! `kotoba-jisho`.

pub mod adjust;
pub mod deck;
pub mod lesson;
pub mod merge;
pub mod sanitize;
pub mod types;

pub use adjust::{AdjustError, AdjustReport, Adjustment, Collision, Directive, apply_adjustments};
pub use deck::{LessonRange, OrderViolation, check_lesson_order, lesson_ranges};
pub use lesson::{LessonKey, parse_lesson_code, sort_key};
pub use merge::{duplicate_per_lesson, merge_kanji_rows, merge_vocab_rows, sort_kanji, sort_vocab};
pub use sanitize::{StrippedMarks, sanitize_reading};
pub use types::*;
