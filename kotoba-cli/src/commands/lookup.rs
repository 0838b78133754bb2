use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use kotoba_core::{merge_kanji_rows, sort_kanji};
use kotoba_jisho::{KanjiApiClient, build_meanings};

use crate::error::CliError;
use crate::settings::Settings;

fn progress_bar(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

/// Head words to look up, in deck order.
///
/// An `.xlsx` input is read as a kanji sheet and merged the same way the
/// `kanji` command does; anything else is read as a generated kanji deck.
pub(crate) fn head_words(settings: &Settings, input: &Path) -> Result<Vec<String>, CliError> {
    if is_spreadsheet(input) {
        let rows = kotoba_sheet::read_kanji_rows(input, settings.kanji.start_row)?;
        let mut records = merge_kanji_rows(rows);
        sort_kanji(&mut records);
        Ok(records.into_keys().collect())
    } else {
        let rows = kotoba_sheet::read_deck(input)?;
        Ok(rows.into_iter().map(|r| r.question).collect())
    }
}

/// Look up every kanji of a sheet or deck and write the meanings table.
pub(crate) fn run_lookup(
    settings: &Settings,
    input: &Path,
    output: &Path,
    quiet: bool,
) -> Result<(), CliError> {
    let kanjis = head_words(settings, input)?;
    if kanjis.is_empty() {
        return Err(CliError::deck(format!("{} has no kanji", input.display())));
    }

    log::info!(
        "Looking up {} kanji from {}",
        kanjis.len(),
        input.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let mut client = KanjiApiClient::new(settings.client_config())?;
    let pb = progress_bar(kanjis.len(), quiet);
    let summary = build_meanings(&mut client, &kanjis, |kanji| {
        pb.set_message(kanji.to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();
    let summary = summary?;

    kotoba_sheet::write_meanings(output, &summary.entries)?;

    for kanji in &summary.not_found {
        log::warn!(
            "{} No dictionary entry for {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            kanji.if_supports_color(Stdout, |t| t.bold()),
        );
    }
    log::info!(
        "{} Wrote {} meanings to {} ({} not found)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.entries.len(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
        summary.not_found.len(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use kotoba_sheet::{DeckOptions, KotobaRow, write_deck};

    use super::*;

    #[test]
    fn test_spreadsheet_by_extension() {
        assert!(is_spreadsheet(&PathBuf::from("kanji.xlsx")));
        assert!(is_spreadsheet(&PathBuf::from("Kanji.XLSX")));
        assert!(!is_spreadsheet(&PathBuf::from("kotoba_kanji.csv")));
        assert!(!is_spreadsheet(&PathBuf::from("kanji")));
    }

    #[test]
    fn test_head_words_from_deck() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("kotoba_kanji.csv");
        let options = DeckOptions::default();
        let row = |q: &str| KotobaRow {
            question: q.to_string(),
            answers: "x".to_string(),
            comment: "(L1) x".to_string(),
            instructions: options.instructions.clone(),
            render_as: options.render_as.clone(),
        };
        write_deck(&path, &[row("一"), row("明日")]).unwrap();

        let words = head_words(&Settings::default(), &path).unwrap();
        assert_eq!(words, vec!["一", "明日"]);
    }

    #[test]
    fn test_head_words_missing_sheet_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = head_words(&Settings::default(), &tmp.path().join("kanji.xlsx"));
        assert!(result.is_err());
    }
}
