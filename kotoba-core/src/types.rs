//! Row and record types shared by the kanji and vocabulary pipelines.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from head word to its merged record.
///
/// Iteration order is first-seen order, which the stable lesson sort relies on
/// to break ties.
pub type RecordMap<R> = IndexMap<String, R>;

// ── Sheet rows ──────────────────────────────────────────────────────────────

/// One row of the kanji sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanjiRow {
    /// Kanji index number (漢字さくいん 通しNo.)
    pub index: i64,
    /// Position of this reading in the textbook (漢字読み テキスト順)
    pub textbook_order: i64,
    /// Hiragana reading
    pub reading: String,
    /// Kanji head word
    pub kanji: String,
    /// Unique kanji number; shared by rows that are readings of the same kanji
    pub unique_id: i64,
    /// Lesson number parsed from the lesson code
    pub lesson: u32,
}

/// One row of the vocabulary sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabRow {
    /// Word number
    pub index: String,
    /// Reading in kana, possibly with notation (see [`crate::sanitize`])
    pub reading: String,
    /// Kanji notation, absent for kana-only words
    pub kanji: Option<String>,
    /// Part of speech, e.g. `n.`, `u-v.`, `い-adj.`
    pub part_of_speech: String,
    /// English meaning
    pub meaning: String,
    /// Comma-separated lesson tags, e.g. `読L9-II, 会L17`
    pub lessons: String,
}

impl VocabRow {
    /// Head word: the kanji form, or the raw reading for kana-only words.
    pub fn head_word(&self) -> &str {
        match self.kanji.as_deref().map(str::trim) {
            Some(k) if !k.is_empty() => k,
            _ => &self.reading,
        }
    }
}

// ── Merged records ──────────────────────────────────────────────────────────

/// A reading paired with the textbook order it first appeared at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub text: String,
    pub order: i64,
}

/// Merged kanji entry. Readings stay sorted by ascending textbook order so
/// the more common reading, taught earlier, is listed first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanjiRecord {
    pub readings: Vec<Reading>,
    /// Lesson of the first row seen for this kanji
    pub lesson: u32,
}

impl KanjiRecord {
    /// Reading texts in deck order.
    pub fn reading_texts(&self) -> impl Iterator<Item = &str> {
        self.readings.iter().map(|r| r.text.as_str())
    }

    /// Smallest textbook order, used to order the deck.
    pub fn first_order(&self) -> i64 {
        self.readings.first().map_or(i64::MAX, |r| r.order)
    }
}

/// Merged vocabulary entry. Every list is de-duplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabRecord {
    pub readings: Vec<String>,
    pub parts: Vec<String>,
    pub meanings: Vec<String>,
    pub lessons: Vec<String>,
}

impl VocabRecord {
    /// First lesson tag, which decides where the word lands in the deck.
    pub fn first_lesson(&self) -> Option<&str> {
        self.lessons.first().map(String::as_str)
    }
}

// ── Meanings lookup ─────────────────────────────────────────────────────────

/// Placeholder used when the dictionary has no data for a field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Dictionary data for one kanji, as stored in the meanings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningEntry {
    pub kanji: String,
    /// Comma-joined English meanings
    pub meanings: String,
    /// Comma-joined kun'yomi readings
    pub kunyomi: String,
    /// Comma-joined on'yomi readings
    pub onyomi: String,
}

impl MeaningEntry {
    /// Entry for a kanji the dictionary does not know.
    pub fn unavailable(kanji: impl Into<String>) -> Self {
        Self {
            kanji: kanji.into(),
            meanings: NOT_AVAILABLE.to_string(),
            kunyomi: NOT_AVAILABLE.to_string(),
            onyomi: NOT_AVAILABLE.to_string(),
        }
    }
}
