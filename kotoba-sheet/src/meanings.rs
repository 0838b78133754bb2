//! Kanji meanings table (`jisho.csv`).
//!
//! ```text
//! kanji,meanings,kunyomi,onyomi
//! 一,"one, one radical (no.1)","ひと-, ひと.つ","イチ, イツ"
//! ```

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;

use kotoba_core::types::MeaningEntry;

use crate::error::SheetError;

/// Meanings keyed by kanji.
#[derive(Debug, Clone, Default)]
pub struct MeaningsTable {
    entries: HashMap<String, MeaningEntry>,
}

impl MeaningsTable {
    pub fn from_entries(entries: impl IntoIterator<Item = MeaningEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.kanji.clone(), e)).collect(),
        }
    }

    pub fn get(&self, kanji: &str) -> Option<&MeaningEntry> {
        self.entries.get(kanji)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a meanings table from CSV.
pub fn parse_meanings<R: Read>(reader: R) -> Result<MeaningsTable, SheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let entries = csv_reader
        .deserialize()
        .collect::<Result<Vec<MeaningEntry>, _>>()?;
    Ok(MeaningsTable::from_entries(entries))
}

/// Load a meanings table file.
pub fn load_meanings(path: &Path) -> Result<MeaningsTable, SheetError> {
    let file = std::fs::File::open(path)?;
    let table = parse_meanings(file)?;
    log::debug!("Loaded {} meanings from {}", table.len(), path.display());
    Ok(table)
}

/// Write meanings entries as CSV, in the order given.
pub fn write_meanings_to<W: Write>(writer: W, entries: &[MeaningEntry]) -> Result<(), SheetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if entries.is_empty() {
        csv_writer.write_record(["kanji", "meanings", "kunyomi", "onyomi"])?;
    }
    for entry in entries {
        csv_writer.serialize(entry)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write a meanings table file.
pub fn write_meanings(path: &Path, entries: &[MeaningEntry]) -> Result<(), SheetError> {
    let file = std::fs::File::create(path)?;
    write_meanings_to(file, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meanings() {
        let csv = "\
kanji,meanings,kunyomi,onyomi
一,\"one, one radical (no.1)\",\"ひと-, ひと.つ\",\"イチ, イツ\"
円,\"circle, yen, round\",\"まる.い, まる\",エン";

        let table = parse_meanings(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        let one = table.get("一").unwrap();
        assert_eq!(one.meanings, "one, one radical (no.1)");
        assert_eq!(one.kunyomi, "ひと-, ひと.つ");
        assert_eq!(table.get("円").unwrap().onyomi, "エン");
        assert!(table.get("二").is_none());
    }

    #[test]
    fn test_write_then_parse() {
        let entries = vec![
            MeaningEntry {
                kanji: "日".to_string(),
                meanings: "day, sun, Japan".to_string(),
                kunyomi: "ひ, -び, -か".to_string(),
                onyomi: "ニチ, ジツ".to_string(),
            },
            MeaningEntry::unavailable("々"),
        ];
        let mut buf = Vec::new();
        write_meanings_to(&mut buf, &entries).unwrap();

        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("kanji,meanings,kunyomi,onyomi\n"));

        let table = parse_meanings(buf.as_slice()).unwrap();
        assert_eq!(table.get("日"), Some(&entries[0]));
        assert_eq!(table.get("々").unwrap().meanings, "N/A");
    }
}
