pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod kanji;
pub(crate) mod lookup;
pub(crate) mod ranges;
pub(crate) mod vocab;
