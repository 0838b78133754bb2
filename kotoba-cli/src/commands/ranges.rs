use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use kotoba_core::lesson_ranges;

use crate::error::CliError;

/// Print the row range of each lesson in a deck.
pub(crate) fn run_ranges(deck: &Path) -> Result<(), CliError> {
    let rows = kotoba_sheet::read_deck(deck)?;
    let ranges = lesson_ranges(rows.iter().map(|r| r.comment.as_str()))
        .map_err(|e| CliError::deck(e.to_string()))?;

    if ranges.is_empty() {
        log::info!(
            "{}",
            "Deck is empty.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for range in &ranges {
        log::info!(
            "{}: {}-{}",
            range.label().if_supports_color(Stdout, |t| t.bold()),
            range.first,
            range.last,
        );
    }
    Ok(())
}
