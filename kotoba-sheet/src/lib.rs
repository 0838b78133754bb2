//! File formats: textbook spreadsheets in, Kotoba decks out.

pub mod adjustments;
pub mod error;
pub mod kotoba;
pub mod meanings;
pub mod workbook;

pub use adjustments::{load_adjustments, parse_adjustments};
pub use error::SheetError;
pub use kotoba::{DeckOptions, KotobaRow, kanji_deck, read_deck, vocab_deck, write_deck};
pub use meanings::{MeaningsTable, load_meanings, write_meanings};
pub use workbook::{KANJI_FIRST_ROW, VOCAB_FIRST_ROW, read_kanji_rows, read_vocab_rows};
