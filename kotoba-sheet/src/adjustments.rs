//! Adjustments table (`adjustments.csv`).
//!
//! ```text
//! <deck line>,<original>,<replacement>,<answers>,<comment>,<split>
//! 213,はし,橋,,Wbridge,x
//! 214,はし,箸,,Wchopsticks,
//! ```
//!
//! `answers`, `comment` and `split` may be empty to mean "no change". The
//! comment starts with `A` (append to the last meaning) or `W` (overwrite all
//! meanings). Any non-empty `split` keeps the original record as well.

use std::io::{ErrorKind, Read};
use std::path::Path;

use kotoba_core::adjust::{Adjustment, Directive};

use crate::error::SheetError;

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse adjustments from CSV. The first row is a header.
pub fn parse_adjustments<R: Read>(reader: R) -> Result<Vec<Adjustment>, SheetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut adjustments = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let original = non_empty(record.get(1))
            .ok_or_else(|| SheetError::adjustment(line, "missing original word"))?;
        let replacement = non_empty(record.get(2))
            .ok_or_else(|| SheetError::adjustment(line, "missing replacement word"))?;
        let answers = non_empty(record.get(3))
            .map(|a| a.split(',').map(|s| s.trim().to_string()).collect());
        let directive = non_empty(record.get(4))
            .map(Directive::parse)
            .transpose()
            .map_err(|e| SheetError::adjustment(line, e.to_string()))?;

        adjustments.push(Adjustment {
            line: record.get(0).unwrap_or("").trim().to_string(),
            original: original.to_string(),
            replacement: replacement.to_string(),
            answers,
            directive,
            split: non_empty(record.get(5)).is_some(),
        });
    }

    Ok(adjustments)
}

/// Load an adjustments file. A missing file gives `Ok(None)`.
pub fn load_adjustments(path: &Path) -> Result<Option<Vec<Adjustment>>, SheetError> {
    match std::fs::File::open(path) {
        Ok(file) => parse_adjustments(file).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "line,original,replacement,answers,comment,split\n";

    #[test]
    fn test_parse_full_entry() {
        let csv = format!("{HEADER}213,はし,橋,\"はし, きょう\",Wbridge,x\n");
        let adjustments = parse_adjustments(csv.as_bytes()).unwrap();
        assert_eq!(adjustments.len(), 1);
        let adj = &adjustments[0];
        assert_eq!(adj.line, "213");
        assert_eq!(adj.original, "はし");
        assert_eq!(adj.replacement, "橋");
        assert_eq!(adj.answers, Some(vec!["はし".to_string(), "きょう".to_string()]));
        assert_eq!(adj.directive, Some(Directive::Overwrite("bridge".to_string())));
        assert!(adj.split);
    }

    #[test]
    fn test_parse_empty_fields_mean_no_change() {
        let csv = format!("{HEADER}5,すし,寿司,,,\n");
        let adj = &parse_adjustments(csv.as_bytes()).unwrap()[0];
        assert_eq!(adj.answers, None);
        assert_eq!(adj.directive, None);
        assert!(!adj.split);
    }

    #[test]
    fn test_parse_bad_directive() {
        let csv = format!("{HEADER}5,すし,寿司,,Xoops,\n");
        let err = parse_adjustments(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SheetError::Adjustment { line: 2, .. }));
    }

    #[test]
    fn test_parse_missing_replacement() {
        let csv = format!("{HEADER}5,すし,,,,\n");
        assert!(parse_adjustments(csv.as_bytes()).is_err());
    }
}
