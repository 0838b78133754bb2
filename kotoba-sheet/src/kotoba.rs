//! Kotoba deck CSV format.
//!
//! The quiz bot expects exactly these five columns, in this order:
//! ```text
//! Question,Answers,Comment,Instructions,Render as
//! 明日,"あした,あす",Tomorrow,Type the reading!,Image
//! ```

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use kotoba_core::types::{KanjiRecord, MeaningEntry, RecordMap, VocabRecord};

use crate::error::SheetError;
use crate::meanings::MeaningsTable;

pub const HEADER: [&str; 5] = ["Question", "Answers", "Comment", "Instructions", "Render as"];
pub const DEFAULT_INSTRUCTIONS: &str = "Type the reading!";
pub const DEFAULT_RENDER_AS: &str = "Image";

/// One deck row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KotobaRow {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Answers")]
    pub answers: String,
    #[serde(rename = "Comment")]
    pub comment: String,
    #[serde(rename = "Instructions")]
    pub instructions: String,
    #[serde(rename = "Render as")]
    pub render_as: String,
}

/// Fixed per-deck column values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    pub instructions: String,
    pub render_as: String,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            render_as: DEFAULT_RENDER_AS.to_string(),
        }
    }
}

/// Kanji comment: lesson, meanings, then kun/on readings on their own lines.
pub fn kanji_comment(lesson: u32, entry: &MeaningEntry) -> String {
    format!(
        "(L{lesson}) {}\nkunyomi: {}\nonyomi: {}",
        entry.meanings, entry.kunyomi, entry.onyomi
    )
}

/// Vocab comment: `(lessons) [parts] meanings`.
pub fn vocab_comment(record: &VocabRecord) -> String {
    format!(
        "({}) [{}] {}",
        record.lessons.join(", "),
        record.parts.join(", "),
        record.meanings.join("; ")
    )
}

/// Build kanji deck rows. Every kanji must have a meanings entry.
pub fn kanji_deck(
    records: &RecordMap<KanjiRecord>,
    meanings: &MeaningsTable,
    options: &DeckOptions,
) -> Result<Vec<KotobaRow>, SheetError> {
    records
        .iter()
        .map(|(kanji, record)| {
            let entry = meanings
                .get(kanji)
                .ok_or_else(|| SheetError::MissingMeaning(kanji.clone()))?;
            Ok(KotobaRow {
                question: kanji.clone(),
                answers: record.reading_texts().collect::<Vec<_>>().join(","),
                comment: kanji_comment(record.lesson, entry),
                instructions: options.instructions.clone(),
                render_as: options.render_as.clone(),
            })
        })
        .collect()
}

/// Build vocab deck rows, in the order given.
pub fn vocab_deck<'a, I>(records: I, options: &DeckOptions) -> Vec<KotobaRow>
where
    I: IntoIterator<Item = (&'a String, &'a VocabRecord)>,
{
    records
        .into_iter()
        .map(|(word, record)| KotobaRow {
            question: word.clone(),
            answers: record.readings.join(","),
            comment: vocab_comment(record),
            instructions: options.instructions.clone(),
            render_as: options.render_as.clone(),
        })
        .collect()
}

/// Write deck rows, header first.
pub fn write_deck_to<W: Write>(writer: W, rows: &[KotobaRow]) -> Result<(), SheetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        csv_writer.write_record(HEADER)?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a deck file.
pub fn write_deck(path: &Path, rows: &[KotobaRow]) -> Result<(), SheetError> {
    let file = std::fs::File::create(path)?;
    write_deck_to(file, rows)?;
    log::debug!("Wrote {} deck rows to {}", rows.len(), path.display());
    Ok(())
}

/// Read deck rows back.
pub fn read_deck_from<R: Read>(reader: R) -> Result<Vec<KotobaRow>, SheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let rows = csv_reader
        .deserialize()
        .collect::<Result<Vec<KotobaRow>, _>>()?;
    Ok(rows)
}

/// Read a deck file.
pub fn read_deck(path: &Path) -> Result<Vec<KotobaRow>, SheetError> {
    let file = std::fs::File::open(path)?;
    read_deck_from(file)
}

#[cfg(test)]
#[path = "tests/kotoba_tests.rs"]
mod tests;
