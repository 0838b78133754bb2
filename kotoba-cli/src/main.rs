//! kotoba-sheets CLI
//!
//! Turns Genki kanji and vocabulary spreadsheets into Kotoba quiz decks.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;
use settings::Settings;

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    let settings = Settings::load(config_path)?;

    match cli.command {
        Commands::Kanji {
            input,
            output,
            meanings,
        } => commands::kanji::run_kanji(
            &settings,
            &input.unwrap_or_else(|| settings.kanji.input.clone()),
            &output.unwrap_or_else(|| settings.kanji.output.clone()),
            &meanings.unwrap_or_else(|| settings.kanji.meanings.clone()),
        ),
        Commands::Vocab {
            input,
            output,
            adjustments,
            no_adjustments,
            duplicate,
        } => {
            let adjustments = if no_adjustments {
                None
            } else {
                Some(adjustments.unwrap_or_else(|| settings.vocab.adjustments.clone()))
            };
            commands::vocab::run_vocab(
                &settings,
                &input.unwrap_or_else(|| settings.vocab.input.clone()),
                &output.unwrap_or_else(|| settings.vocab.output.clone()),
                adjustments.as_deref(),
                duplicate,
            )
        }
        Commands::Lookup { input, output } => commands::lookup::run_lookup(
            &settings,
            &input.unwrap_or_else(|| settings.kanji.input.clone()),
            &output.unwrap_or_else(|| settings.kanji.meanings.clone()),
            cli.quiet,
        ),
        Commands::Ranges { deck } => commands::ranges::run_ranges(
            &deck.unwrap_or_else(|| settings.vocab.output.clone()),
        ),
        Commands::Check { deck } => commands::check::run_check(
            &deck.unwrap_or_else(|| settings.vocab.output.clone()),
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings, config_path),
            ConfigAction::Path => {
                commands::config::run_config_path(config_path);
                Ok(())
            }
        },
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Error: could not open log file: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("Error: {e}");
        std::process::exit(1);
    }
}
