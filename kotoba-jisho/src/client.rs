use std::thread;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::error::LookupError;

pub const DEFAULT_BASE_URL: &str = "https://kanjiapi.dev/v1/kanji/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(250);

/// Dictionary data for a single kanji.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KanjiInfo {
    #[serde(default)]
    pub meanings: Vec<String>,
    #[serde(default)]
    pub kun_readings: Vec<String>,
    #[serde(default)]
    pub on_readings: Vec<String>,
}

/// Parse a kanji endpoint response body.
pub fn parse_kanji_info(kanji: &str, body: &str) -> Result<KanjiInfo, LookupError> {
    serde_json::from_str(body).map_err(|source| LookupError::Parse {
        kanji: kanji.to_string(),
        source,
    })
}

/// Anything that can answer kanji lookups.
pub trait KanjiSource {
    /// Look up one kanji. `Ok(None)` means the dictionary has no entry.
    fn lookup(&mut self, kanji: &str) -> Result<Option<KanjiInfo>, LookupError>;
}

/// Connection settings for [`KanjiApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub min_interval: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            min_interval: DEFAULT_MIN_INTERVAL,
        }
    }
}

/// Blocking HTTP client for a kanjiapi.dev-style dictionary, with a minimum
/// interval between requests.
pub struct KanjiApiClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
    last_request: Option<Instant>,
}

impl KanjiApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            config,
            last_request: None,
        })
    }

    fn url(&self, kanji: &str) -> String {
        format!("{}{}", self.config.base_url, kanji)
    }

    fn rate_limit(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.config.min_interval {
                thread::sleep(self.config.min_interval - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }
}

impl KanjiSource for KanjiApiClient {
    fn lookup(&mut self, kanji: &str) -> Result<Option<KanjiInfo>, LookupError> {
        self.rate_limit();

        let url = self.url(kanji);
        log::debug!("GET {url}");
        let resp = self.http.get(&url).send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LookupError::ServerError {
                status: status.as_u16(),
                kanji: kanji.to_string(),
            });
        }

        let text = resp.text()?;
        parse_kanji_info(kanji, &text).map(Some)
    }
}
