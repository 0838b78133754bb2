use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use kotoba_core::check_lesson_order;

use crate::error::CliError;

/// Verify that a deck is ordered by lesson. Any out-of-order row is an error.
pub(crate) fn run_check(deck: &Path) -> Result<(), CliError> {
    let rows = kotoba_sheet::read_deck(deck)?;
    let violations = check_lesson_order(rows.iter().map(|r| r.comment.as_str()));

    if violations.is_empty() {
        log::info!(
            "{} All {} rows ordered",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            rows.len(),
        );
        return Ok(());
    }

    for v in &violations {
        log::warn!(
            "{} Row {}: {} after {} in {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            v.row,
            v.found.if_supports_color(Stdout, |t| t.bold()),
            v.previous,
            v.comment,
        );
    }
    Err(CliError::deck(format!(
        "{} rows out of lesson order in {}",
        violations.len(),
        deck.display()
    )))
}
