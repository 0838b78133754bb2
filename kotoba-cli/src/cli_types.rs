//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kotoba-sheets")]
#[command(about = "Convert Genki kanji and vocabulary sheets into Kotoba quiz decks", long_about = None)]
pub(crate) struct Cli {
    /// Settings file (defaults to ~/.config/kotoba-sheets/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert a kanji sheet into a Kotoba kanji deck
    Kanji {
        /// Kanji spreadsheet (default: kanji.xlsx)
        input: Option<PathBuf>,

        /// Deck to write (default: kotoba_kanji.csv)
        output: Option<PathBuf>,

        /// Meanings table produced by the lookup command (default: jisho.csv)
        #[arg(long)]
        meanings: Option<PathBuf>,
    },

    /// Convert a vocabulary sheet into a Kotoba vocabulary deck
    Vocab {
        /// Vocabulary spreadsheet (default: vocab.xlsx)
        input: Option<PathBuf>,

        /// Deck to write (default: kotoba_vocab.csv)
        output: Option<PathBuf>,

        /// Adjustments table (default: adjustments.csv)
        #[arg(long, conflicts_with = "no_adjustments")]
        adjustments: Option<PathBuf>,

        /// Skip adjustments entirely
        #[arg(long)]
        no_adjustments: bool,

        /// Emit words once per lesson they appear in, instead of only in their first lesson
        #[arg(long)]
        duplicate: bool,
    },

    /// Build the kanji meanings table by looking up every kanji of a sheet or deck
    Lookup {
        /// Kanji spreadsheet (.xlsx) or generated kanji deck to read head words from
        /// (default: kanji.xlsx)
        input: Option<PathBuf>,

        /// Meanings table to write (default: jisho.csv)
        output: Option<PathBuf>,
    },

    /// Print the row range of each lesson in a deck
    Ranges {
        /// Deck to read (default: kotoba_vocab.csv)
        deck: Option<PathBuf>,
    },

    /// Verify that a vocabulary deck is ordered by lesson
    Check {
        /// Deck to read (default: kotoba_vocab.csv)
        deck: Option<PathBuf>,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
