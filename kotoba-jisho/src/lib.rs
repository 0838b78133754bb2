//! Kanji dictionary lookups for the kanji deck's meanings table.

pub mod client;
pub mod error;
pub mod lookup;

pub use client::{ClientConfig, KanjiApiClient, KanjiInfo, KanjiSource};
pub use error::LookupError;
pub use lookup::{LookupSummary, build_meanings, to_entry};
