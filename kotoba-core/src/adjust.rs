//! Operator-curated adjustments applied to merged vocabulary records.
//!
//! Some sheet entries are better quizzed differently: a word written in kana
//! that has a common kanji form, a meaning that needs a note, or one kana
//! spelling that stands for two different kanji words (はし → 橋, 箸).
//! Adjustments rename, rewrite, or split those records after merging.

use crate::types::{RecordMap, VocabRecord};

/// How an adjustment rewrites the meaning list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Append text to the last meaning (`A...`).
    Append(String),
    /// Replace all meanings with this text (`W...`).
    Overwrite(String),
}

/// Error returned when a directive string has an unknown prefix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid comment directive '{0}': expected 'A' (append) or 'W' (overwrite) prefix")]
pub struct DirectiveError(pub String);

impl Directive {
    /// Parse `A<text>` or `W<text>`.
    pub fn parse(s: &str) -> Result<Self, DirectiveError> {
        if let Some(rest) = s.strip_prefix('A') {
            Ok(Self::Append(rest.to_string()))
        } else if let Some(rest) = s.strip_prefix('W') {
            Ok(Self::Overwrite(rest.to_string()))
        } else {
            Err(DirectiveError(s.to_string()))
        }
    }

    /// Apply the directive to a meaning list.
    pub fn apply(&self, meanings: &mut Vec<String>) {
        match self {
            Self::Append(text) => match meanings.last_mut() {
                Some(last) => last.push_str(text),
                None => meanings.push(text.clone()),
            },
            Self::Overwrite(text) => {
                meanings.clear();
                meanings.push(text.clone());
            }
        }
    }
}

/// One adjustment entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjustment {
    /// Deck line the entry refers to, for the operator's reference
    pub line: String,
    /// Head word of the record to rewrite
    pub original: String,
    /// Head word to store the rewritten record under
    pub replacement: String,
    /// Replacement answers; `None` keeps the original readings
    pub answers: Option<Vec<String>>,
    pub directive: Option<Directive>,
    /// Keep the original record as well as the rewritten one
    pub split: bool,
}

/// Fatal adjustment failures.
#[derive(Debug, thiserror::Error)]
pub enum AdjustError {
    #[error("adjustment (line {line}): no record for '{key}'")]
    MissingOriginal { line: String, key: String },
}

/// A replacement that landed on an existing head word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub replacement: String,
    /// The record that was overwritten
    pub previous: VocabRecord,
}

/// Summary of an adjustment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjustReport {
    pub applied: usize,
    pub split: usize,
    pub collisions: Vec<Collision>,
}

/// Apply `adjustments` in order.
///
/// A missing original is fatal. A replacement that collides with an existing
/// head word overwrites it (keeping that key's position) and is recorded in
/// the report.
pub fn apply_adjustments(
    map: &mut RecordMap<VocabRecord>,
    adjustments: &[Adjustment],
) -> Result<AdjustReport, AdjustError> {
    let mut report = AdjustReport::default();

    for adj in adjustments {
        let original = map
            .shift_remove(&adj.original)
            .ok_or_else(|| AdjustError::MissingOriginal {
                line: adj.line.clone(),
                key: adj.original.clone(),
            })?;

        let mut updated = original.clone();
        if let Some(answers) = &adj.answers {
            updated.readings = answers.clone();
        }
        if let Some(directive) = &adj.directive {
            directive.apply(&mut updated.meanings);
        }

        if let Some(previous) = map.insert(adj.replacement.clone(), updated) {
            report.collisions.push(Collision {
                replacement: adj.replacement.clone(),
                previous,
            });
        }

        if adj.split {
            map.insert(adj.original.clone(), original);
            report.split += 1;
        }
        report.applied += 1;
    }

    Ok(report)
}

#[cfg(test)]
#[path = "tests/adjust_tests.rs"]
mod tests;
