/// Errors that can occur while reading sheets or reading/writing decks.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No worksheet found in {0}")]
    NoWorksheet(String),

    #[error("Row {row}: {message}")]
    Row { row: u32, message: String },

    #[error("Adjustments line {line}: {message}")]
    Adjustment { line: u64, message: String },

    #[error("No meanings entry for '{0}' (run the lookup command on the kanji sheet to rebuild the meanings table)")]
    MissingMeaning(String),
}

impl SheetError {
    pub fn row(row: u32, message: impl Into<String>) -> Self {
        Self::Row {
            row,
            message: message.into(),
        }
    }

    pub fn adjustment(line: u64, message: impl Into<String>) -> Self {
        Self::Adjustment {
            line,
            message: message.into(),
        }
    }
}
