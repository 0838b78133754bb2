//! Spreadsheet row extraction.
//!
//! The textbook sheets are not self-describing: each starts with a few title
//! and header rows, and column meaning is purely positional.
//!
//! Kanji sheet, from row 4:
//! ```text
//! <kanji #> <textbook order> <reading> <kanji> <unique kanji #> <lesson code>
//! int       int              str       str     int              str (e.g. "L3")
//! ```
//!
//! Vocab sheet, from row 11:
//! ```text
//! <word #> <kana> <kanji notation> <part of speech> <english meaning> <lessons>
//! str      str    str, optional    str              str               str (e.g. "読L9-II, 会L17")
//! ```

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};

use kotoba_core::lesson::parse_lesson_code;
use kotoba_core::types::{KanjiRow, VocabRow};

use crate::error::SheetError;

/// First data row (1-based) of the kanji sheet.
pub const KANJI_FIRST_ROW: u32 = 4;
/// First data row (1-based) of the vocab sheet.
pub const VOCAB_FIRST_ROW: u32 = 11;
/// Number of positional columns in both layouts.
pub const COLUMNS: usize = 6;

/// Load the first worksheet of an `.xlsx` workbook.
pub fn load_first_sheet(path: &Path) -> Result<Range<Data>, SheetError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    match workbook.worksheet_range_at(0) {
        Some(range) => Ok(range?),
        None => Err(SheetError::NoWorksheet(path.display().to_string())),
    }
}

/// Rows of `range` starting at the 1-based sheet row `first_row`, paired with
/// their 1-based sheet row number. Blank rows are skipped.
///
/// The offset is absolute: a range whose used area starts below row 1 is
/// still cut at `first_row`.
pub fn data_rows(range: &Range<Data>, first_row: u32) -> impl Iterator<Item = (u32, &[Data])> {
    let start = range.start().map_or(0, |(row, _)| row);
    let skip = first_row.saturating_sub(1).saturating_sub(start) as usize;
    range
        .rows()
        .enumerate()
        .skip(skip)
        .map(move |(i, cells)| (start + i as u32 + 1, cells))
        .filter(|(_, cells)| !cells.iter().all(|c| matches!(c, Data::Empty)))
}

/// Render a cell as text. Empty cells and empty strings give `None`.
pub fn cell_text(cell: Option<&Data>) -> Option<String> {
    let text = match cell? {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        other => other.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read an integer cell: integers, whole floats, and numeric text are accepted.
pub fn cell_int(cell: Option<&Data>) -> Result<Option<i64>, String> {
    match cell {
        None | Some(Data::Empty) => Ok(None),
        Some(Data::Int(i)) => Ok(Some(*i)),
        Some(Data::Float(f)) if f.fract() == 0.0 => Ok(Some(*f as i64)),
        Some(Data::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Data::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("'{s}' is not an integer")),
        Some(other) => Err(format!("'{other}' is not an integer")),
    }
}

fn check_width(row: u32, cells: &[Data]) -> Result<(), SheetError> {
    if cells.len() < COLUMNS {
        return Err(SheetError::row(
            row,
            format!("expected {COLUMNS} columns, found {}", cells.len()),
        ));
    }
    Ok(())
}

fn required_text(row: u32, cells: &[Data], col: usize, name: &str) -> Result<String, SheetError> {
    cell_text(cells.get(col)).ok_or_else(|| SheetError::row(row, format!("missing {name}")))
}

fn required_int(row: u32, cells: &[Data], col: usize, name: &str) -> Result<i64, SheetError> {
    cell_int(cells.get(col))
        .map_err(|e| SheetError::row(row, format!("{name}: {e}")))?
        .ok_or_else(|| SheetError::row(row, format!("missing {name}")))
}

fn optional_int(row: u32, cells: &[Data], col: usize, name: &str) -> Result<i64, SheetError> {
    Ok(cell_int(cells.get(col))
        .map_err(|e| SheetError::row(row, format!("{name}: {e}")))?
        .unwrap_or(0))
}

/// Extract one kanji-layout row.
pub fn kanji_row(row: u32, cells: &[Data]) -> Result<KanjiRow, SheetError> {
    check_width(row, cells)?;
    let lesson_code = required_text(row, cells, 5, "lesson code")?;
    let lesson =
        parse_lesson_code(&lesson_code).map_err(|e| SheetError::row(row, e.to_string()))?;

    Ok(KanjiRow {
        index: optional_int(row, cells, 0, "kanji number")?,
        textbook_order: required_int(row, cells, 1, "textbook order")?,
        reading: required_text(row, cells, 2, "reading")?,
        // empty head word: the merge keys the row by its reading
        kanji: cell_text(cells.get(3)).unwrap_or_default(),
        unique_id: optional_int(row, cells, 4, "unique kanji number")?,
        lesson,
    })
}

/// Extract one vocab-layout row.
pub fn vocab_row(row: u32, cells: &[Data]) -> Result<VocabRow, SheetError> {
    check_width(row, cells)?;
    Ok(VocabRow {
        index: cell_text(cells.first()).unwrap_or_default(),
        reading: required_text(row, cells, 1, "reading")?,
        kanji: cell_text(cells.get(2)),
        part_of_speech: cell_text(cells.get(3)).unwrap_or_default(),
        meaning: required_text(row, cells, 4, "meaning")?,
        lessons: required_text(row, cells, 5, "lesson list")?,
    })
}

/// Read every kanji row of a sheet.
pub fn read_kanji_rows(path: &Path, first_row: u32) -> Result<Vec<KanjiRow>, SheetError> {
    let range = load_first_sheet(path)?;
    let rows = data_rows(&range, first_row)
        .map(|(row, cells)| kanji_row(row, cells))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Read {} kanji rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read every vocab row of a sheet.
pub fn read_vocab_rows(path: &Path, first_row: u32) -> Result<Vec<VocabRow>, SheetError> {
    let range = load_first_sheet(path)?;
    let rows = data_rows(&range, first_row)
        .map(|(row, cells)| vocab_row(row, cells))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("Read {} vocab rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
#[path = "tests/workbook_tests.rs"]
mod tests;
