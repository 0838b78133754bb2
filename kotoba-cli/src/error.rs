use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet or deck file error
    #[error(transparent)]
    Sheet(#[from] kotoba_sheet::SheetError),

    /// Adjustment could not be applied
    #[error(transparent)]
    Adjust(#[from] kotoba_core::AdjustError),

    /// Dictionary lookup failed
    #[error("Lookup error: {0}")]
    Lookup(#[from] kotoba_jisho::LookupError),

    /// Deck content problem
    #[error("Deck error: {0}")]
    Deck(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn deck(msg: impl Into<String>) -> Self {
        Self::Deck(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
