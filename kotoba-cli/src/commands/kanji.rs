use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use kotoba_core::{merge_kanji_rows, sort_kanji};

use crate::error::CliError;
use crate::settings::Settings;

/// Convert a kanji sheet into a Kotoba deck.
pub(crate) fn run_kanji(
    settings: &Settings,
    input: &Path,
    output: &Path,
    meanings: &Path,
) -> Result<(), CliError> {
    log::info!(
        "Reading kanji from {}",
        input.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let rows = kotoba_sheet::read_kanji_rows(input, settings.kanji.start_row)?;
    let row_count = rows.len();

    let mut records = merge_kanji_rows(rows);
    sort_kanji(&mut records);
    log::debug!("{row_count} rows merged into {} kanji", records.len());

    if !meanings.exists() {
        return Err(CliError::deck(format!(
            "meanings table {} not found (run the lookup command on {} first)",
            meanings.display(),
            input.display()
        )));
    }
    let table = kotoba_sheet::load_meanings(meanings)?;
    log::debug!(
        "Loaded {} meanings from {}",
        table.len(),
        meanings.display()
    );

    let deck = kotoba_sheet::kanji_deck(&records, &table, &settings.deck_options())?;
    kotoba_sheet::write_deck(output, &deck)?;

    log::info!(
        "{} Wrote {} kanji to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        deck.len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
