//! User settings (`~/.config/kotoba-sheets/settings.toml`).
//!
//! Every field has a default, so a missing file or a file that only sets a
//! couple of values both work:
//!
//! ```toml
//! [vocab]
//! stripped_marks = ["～", "〜", "…"]
//!
//! [export]
//! instructions = "Type the reading in hiragana!"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use kotoba_core::StrippedMarks;
use kotoba_jisho::ClientConfig;
use kotoba_sheet::DeckOptions;

use crate::error::CliError;

/// Canonical settings file path: `~/.config/kotoba-sheets/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("kotoba-sheets").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct KanjiSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub meanings: PathBuf,
    /// First data row (1-based)
    pub start_row: u32,
}

impl Default for KanjiSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("kanji.xlsx"),
            output: PathBuf::from("kotoba_kanji.csv"),
            meanings: PathBuf::from("jisho.csv"),
            start_row: kotoba_sheet::KANJI_FIRST_ROW,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct VocabSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub adjustments: PathBuf,
    /// First data row (1-based)
    pub start_row: u32,
    /// Tokens removed from readings before they become answers
    pub stripped_marks: StrippedMarks,
}

impl Default for VocabSettings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("vocab.xlsx"),
            output: PathBuf::from("kotoba_vocab.csv"),
            adjustments: PathBuf::from("adjustments.csv"),
            start_row: kotoba_sheet::VOCAB_FIRST_ROW,
            stripped_marks: StrippedMarks::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct ExportSettings {
    pub instructions: String,
    pub render_as: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let options = DeckOptions::default();
        Self {
            instructions: options.instructions,
            render_as: options.render_as,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LookupSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub min_interval_ms: u64,
}

impl Default for LookupSettings {
    fn default() -> Self {
        let config = ClientConfig::default();
        Self {
            base_url: config.base_url,
            timeout_secs: config.timeout.as_secs(),
            min_interval_ms: config.min_interval.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub kanji: KanjiSettings,
    pub vocab: VocabSettings,
    pub export: ExportSettings,
    pub lookup: LookupSettings,
}

impl Settings {
    /// Parse settings from TOML text.
    pub(crate) fn from_toml(contents: &str) -> Result<Self, CliError> {
        toml::from_str(contents).map_err(|e| CliError::config(e.to_string()))
    }

    /// Load settings from `path`, or from the canonical path when `None`.
    ///
    /// A missing canonical file yields defaults; a missing explicit file is an error.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (settings_path(), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                log::debug!("Loading settings from {}", path.display());
                Self::from_toml(&contents)
                    .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
            }
            Err(e) if !explicit && e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(e) => Err(CliError::config(format!("{}: {e}", path.display()))),
        }
    }

    pub(crate) fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::config(e.to_string()))
    }

    pub(crate) fn deck_options(&self) -> DeckOptions {
        DeckOptions {
            instructions: self.export.instructions.clone(),
            render_as: self.export.render_as.clone(),
        }
    }

    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.lookup.base_url.clone(),
            timeout: Duration::from_secs(self.lookup.timeout_secs),
            min_interval: Duration::from_millis(self.lookup.min_interval_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.kanji.start_row, 4);
        assert_eq!(settings.vocab.start_row, 11);
        assert_eq!(settings.export.instructions, "Type the reading!");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
[vocab]
stripped_marks = ["～", "〜", "…"]

[export]
render_as = "Text"
"#,
        )
        .unwrap();
        assert_eq!(settings.vocab.stripped_marks, StrippedMarks::basic());
        assert_eq!(settings.vocab.input, PathBuf::from("vocab.xlsx"));
        assert_eq!(settings.export.render_as, "Text");
        assert_eq!(settings.export.instructions, "Type the reading!");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Settings::from_toml("[vocab\n").unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = Settings::load(Some(&tmp.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[lookup]\nmin_interval_ms = 0\n").unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.client_config().min_interval, Duration::ZERO);
    }
}
