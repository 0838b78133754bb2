use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use kotoba_core::{
    RecordMap, VocabRecord, apply_adjustments, duplicate_per_lesson, merge_vocab_rows, sort_vocab,
};

use crate::error::CliError;
use crate::settings::Settings;

/// Apply the adjustments file, if there is one.
fn adjust(records: &mut RecordMap<VocabRecord>, path: &Path) -> Result<(), CliError> {
    let Some(adjustments) = kotoba_sheet::load_adjustments(path)? else {
        log::warn!(
            "{} No adjustments file at {}, skipping adjustments",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            path.display(),
        );
        return Ok(());
    };

    let report = apply_adjustments(records, &adjustments)?;
    for collision in &report.collisions {
        log::warn!(
            "{} Adjustment replaced existing entry '{}' ({})",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            collision.replacement.if_supports_color(Stdout, |t| t.bold()),
            collision.previous.readings.join(","),
        );
    }
    log::info!(
        "Applied {} adjustments ({} split)",
        report.applied,
        report.split
    );
    Ok(())
}

/// Convert a vocabulary sheet into a Kotoba deck.
///
/// `adjustments` is `None` when adjustments are disabled.
pub(crate) fn run_vocab(
    settings: &Settings,
    input: &Path,
    output: &Path,
    adjustments: Option<&Path>,
    duplicate: bool,
) -> Result<(), CliError> {
    log::info!(
        "Reading vocabulary from {}",
        input.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let rows = kotoba_sheet::read_vocab_rows(input, settings.vocab.start_row)?;
    let row_count = rows.len();

    let mut records = merge_vocab_rows(rows, &settings.vocab.stripped_marks);
    log::debug!("{row_count} rows merged into {} words", records.len());

    if let Some(path) = adjustments {
        adjust(&mut records, path)?;
    }

    sort_vocab(&mut records);

    let options = settings.deck_options();
    let deck = if duplicate {
        let expanded = duplicate_per_lesson(&records);
        log::debug!(
            "{} words expanded to {} per-lesson entries",
            records.len(),
            expanded.len()
        );
        kotoba_sheet::vocab_deck(expanded.iter().map(|(w, r)| (w, r)), &options)
    } else {
        kotoba_sheet::vocab_deck(&records, &options)
    };
    kotoba_sheet::write_deck(output, &deck)?;

    log::info!(
        "{} Wrote {} words to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        deck.len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
