//! Folding sheet rows into merged records.
//!
//! Several rows can describe the same head word: a kanji with multiple
//! readings, or a word introduced in one lesson and revisited in another.
//! The fold functions here collapse those rows into one record per head word
//! and return the map; nothing is shared or mutated outside the call.

use crate::lesson::{sort_key, split_lessons};
use crate::sanitize::{StrippedMarks, sanitize_reading};
use crate::types::{KanjiRecord, KanjiRow, Reading, RecordMap, VocabRecord, VocabRow};

/// Append `value` unless an equal string is already present.
pub fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Index at which a reading with textbook order `order` keeps `readings`
/// ascending. Equal orders insert after the existing ones.
///
/// A linear scan is plenty: no kanji in the sheets has more than six readings.
pub fn insertion_index(readings: &[Reading], order: i64) -> usize {
    readings
        .iter()
        .position(|r| order < r.order)
        .unwrap_or(readings.len())
}

/// Insert a reading into an order-sorted list.
///
/// A reading text that is already present is not duplicated. If it shows up
/// again with an earlier textbook order, it moves to that earlier position.
pub fn insert_reading(readings: &mut Vec<Reading>, text: &str, order: i64) {
    if let Some(pos) = readings.iter().position(|r| r.text == text) {
        if readings[pos].order <= order {
            return;
        }
        readings.remove(pos);
    }
    let idx = insertion_index(readings, order);
    readings.insert(
        idx,
        Reading {
            text: text.to_string(),
            order,
        },
    );
}

/// Merge kanji rows into one record per kanji.
pub fn merge_kanji_rows<I>(rows: I) -> RecordMap<KanjiRecord>
where
    I: IntoIterator<Item = KanjiRow>,
{
    let mut map = RecordMap::new();

    for row in rows {
        let key = if row.kanji.trim().is_empty() {
            row.reading.clone()
        } else {
            row.kanji.clone()
        };

        match map.get_mut(&key) {
            None => {
                map.insert(
                    key,
                    KanjiRecord {
                        readings: vec![Reading {
                            text: row.reading,
                            order: row.textbook_order,
                        }],
                        lesson: row.lesson,
                    },
                );
            }
            Some(record) => {
                log::debug!(
                    "{key}: adding reading {} (order {})",
                    row.reading,
                    row.textbook_order
                );
                insert_reading(&mut record.readings, &row.reading, row.textbook_order);
            }
        }
    }

    map
}

/// Merge vocabulary rows into one record per head word.
///
/// Readings are sanitized with `marks` and each candidate is added on its own.
pub fn merge_vocab_rows<I>(rows: I, marks: &StrippedMarks) -> RecordMap<VocabRecord>
where
    I: IntoIterator<Item = VocabRow>,
{
    let mut map: RecordMap<VocabRecord> = RecordMap::new();

    for row in rows {
        let key = row.head_word().to_string();
        let record = map.entry(key).or_default();

        for candidate in sanitize_reading(&row.reading, marks) {
            push_unique(&mut record.readings, &candidate);
        }
        let part = row.part_of_speech.trim();
        if !part.is_empty() {
            push_unique(&mut record.parts, part);
        }
        push_unique(&mut record.meanings, row.meaning.trim());
        for tag in split_lessons(&row.lessons) {
            push_unique(&mut record.lessons, tag);
        }
    }

    map
}

/// Sort kanji records by their earliest textbook order. Ties keep map order.
pub fn sort_kanji(map: &mut RecordMap<KanjiRecord>) {
    map.sort_by(|_, a, _, b| a.first_order().cmp(&b.first_order()));
}

/// Sort vocabulary records by the key of their first lesson tag. Ties keep
/// map order; records without lessons sort as the greetings lesson.
pub fn sort_vocab(map: &mut RecordMap<VocabRecord>) {
    map.sort_by(|_, a, _, b| {
        let ka = sort_key(a.first_lesson().unwrap_or_default());
        let kb = sort_key(b.first_lesson().unwrap_or_default());
        ka.cmp(&kb)
    });
}

/// Expand records so each appears once per lesson tag.
///
/// Each copy lists its own lesson first, and the result is ordered by that
/// lesson, so lesson ranges taken from the deck include every word the lesson
/// teaches.
pub fn duplicate_per_lesson(map: &RecordMap<VocabRecord>) -> Vec<(String, VocabRecord)> {
    let mut out = Vec::new();

    for (word, record) in map {
        if record.lessons.len() <= 1 {
            out.push((word.clone(), record.clone()));
            continue;
        }
        for (i, tag) in record.lessons.iter().enumerate() {
            let mut copy = record.clone();
            copy.lessons.remove(i);
            copy.lessons.insert(0, tag.clone());
            out.push((word.clone(), copy));
        }
    }

    // Vec::sort_by_key is stable
    out.sort_by_key(|(_, r)| sort_key(r.first_lesson().unwrap_or_default()));
    out
}

#[cfg(test)]
#[path = "tests/merge_tests.rs"]
mod tests;
