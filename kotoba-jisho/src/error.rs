/// Errors that can occur during dictionary lookups.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}) for '{kanji}'")]
    ServerError { status: u16, kanji: String },

    #[error("Failed to parse dictionary response for '{kanji}': {source}")]
    Parse {
        kanji: String,
        source: serde_json::Error,
    },
}
