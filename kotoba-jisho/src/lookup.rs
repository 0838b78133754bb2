//! Building the meanings table from dictionary lookups.

use kotoba_core::types::{MeaningEntry, NOT_AVAILABLE};

use crate::client::{KanjiInfo, KanjiSource};
use crate::error::LookupError;

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join(", ")
    }
}

/// Convert a lookup result into a meanings-table entry. Missing data becomes `N/A`.
pub fn to_entry(kanji: &str, info: Option<&KanjiInfo>) -> MeaningEntry {
    match info {
        Some(info) => MeaningEntry {
            kanji: kanji.to_string(),
            meanings: join_or_na(&info.meanings),
            kunyomi: join_or_na(&info.kun_readings),
            onyomi: join_or_na(&info.on_readings),
        },
        None => MeaningEntry::unavailable(kanji),
    }
}

/// Outcome of a meanings-table build.
#[derive(Debug, Clone, Default)]
pub struct LookupSummary {
    pub entries: Vec<MeaningEntry>,
    /// Kanji the dictionary had no entry for
    pub not_found: Vec<String>,
}

/// Look up every kanji in order. `on_progress` is called after each lookup.
///
/// Unknown kanji get an `N/A` entry; transport and server errors abort.
pub fn build_meanings<S, I, F>(
    source: &mut S,
    kanjis: I,
    mut on_progress: F,
) -> Result<LookupSummary, LookupError>
where
    S: KanjiSource,
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: FnMut(&str),
{
    let mut summary = LookupSummary::default();

    for kanji in kanjis {
        let kanji = kanji.as_ref();
        let info = source.lookup(kanji)?;
        if info.is_none() {
            log::debug!("No dictionary entry for '{kanji}'");
            summary.not_found.push(kanji.to_string());
        }
        summary.entries.push(to_entry(kanji, info.as_ref()));
        on_progress(kanji);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct FakeSource {
        data: HashMap<&'static str, KanjiInfo>,
        calls: Vec<String>,
    }

    impl KanjiSource for FakeSource {
        fn lookup(&mut self, kanji: &str) -> Result<Option<KanjiInfo>, LookupError> {
            self.calls.push(kanji.to_string());
            Ok(self.data.get(kanji).cloned())
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_to_entry_joins_fields() {
        let info = KanjiInfo {
            meanings: strings(&["circle", "yen"]),
            kun_readings: strings(&["まる.い"]),
            on_readings: Vec::new(),
        };
        let entry = to_entry("円", Some(&info));
        assert_eq!(entry.meanings, "circle, yen");
        assert_eq!(entry.kunyomi, "まる.い");
        assert_eq!(entry.onyomi, "N/A");
    }

    #[test]
    fn test_build_meanings_in_order_with_misses() {
        let mut source = FakeSource {
            data: HashMap::from([(
                "一",
                KanjiInfo {
                    meanings: strings(&["one"]),
                    kun_readings: strings(&["ひと.つ"]),
                    on_readings: strings(&["イチ"]),
                },
            )]),
            calls: Vec::new(),
        };

        let mut seen = 0;
        let summary = build_meanings(&mut source, ["明日", "一"], |_| seen += 1).unwrap();

        assert_eq!(seen, 2);
        assert_eq!(source.calls, vec!["明日", "一"]);
        assert_eq!(summary.not_found, vec!["明日"]);
        assert_eq!(summary.entries[0], MeaningEntry::unavailable("明日"));
        assert_eq!(summary.entries[1].onyomi, "イチ");
    }
}
