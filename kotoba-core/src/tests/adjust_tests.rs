use super::*;

fn record(readings: &[&str], meanings: &[&str], lesson: &str) -> VocabRecord {
    VocabRecord {
        readings: readings.iter().map(|s| s.to_string()).collect(),
        parts: vec!["n.".to_string()],
        meanings: meanings.iter().map(|s| s.to_string()).collect(),
        lessons: vec![lesson.to_string()],
    }
}

fn adjustment(original: &str, replacement: &str) -> Adjustment {
    Adjustment {
        line: "1".to_string(),
        original: original.to_string(),
        replacement: replacement.to_string(),
        answers: None,
        directive: None,
        split: false,
    }
}

#[test]
fn test_parse_directive() {
    assert_eq!(Directive::parse("Afoo"), Ok(Directive::Append("foo".into())));
    assert_eq!(Directive::parse("W"), Ok(Directive::Overwrite(String::new())));
    assert!(Directive::parse("Xfoo").is_err());
    assert!(Directive::parse("").is_err());
}

#[test]
fn test_append_to_last_meaning() {
    let mut meanings = vec!["x".to_string(), "bar".to_string()];
    Directive::Append("foo".into()).apply(&mut meanings);
    assert_eq!(meanings, vec!["x", "barfoo"]);
}

#[test]
fn test_append_to_empty_meanings() {
    let mut meanings = Vec::new();
    Directive::Append("foo".into()).apply(&mut meanings);
    assert_eq!(meanings, vec!["foo"]);
}

#[test]
fn test_overwrite_meanings() {
    let mut meanings = vec!["x".to_string(), "y".to_string()];
    Directive::Overwrite("baz".into()).apply(&mut meanings);
    assert_eq!(meanings, vec!["baz"]);
}

#[test]
fn test_rename_keeps_readings_and_lessons() {
    let mut map = RecordMap::new();
    map.insert("すし".to_string(), record(&["すし"], &["sushi"], "会L2"));

    let report = apply_adjustments(&mut map, &[adjustment("すし", "寿司")]).unwrap();
    assert_eq!(report.applied, 1);
    assert!(report.collisions.is_empty());
    assert!(!map.contains_key("すし"));
    assert_eq!(map["寿司"].readings, vec!["すし"]);
    assert_eq!(map["寿司"].lessons, vec!["会L2"]);
}

#[test]
fn test_override_answers_and_directive() {
    let mut map = RecordMap::new();
    map.insert("まど".to_string(), record(&["まど"], &["bar"], "会L4"));
    let mut adj = adjustment("まど", "窓");
    adj.answers = Some(vec!["まど".to_string(), "そう".to_string()]);
    adj.directive = Some(Directive::Append("foo".into()));

    apply_adjustments(&mut map, &[adj]).unwrap();
    assert_eq!(map["窓"].readings, vec!["まど", "そう"]);
    assert_eq!(map["窓"].meanings, vec!["barfoo"]);
}

#[test]
fn test_split_keeps_original() {
    let mut map = RecordMap::new();
    map.insert("はし".to_string(), record(&["はし"], &["bridge; chopsticks"], "会L5"));
    let mut bridge = adjustment("はし", "橋");
    bridge.directive = Some(Directive::Overwrite("bridge".into()));
    bridge.split = true;
    let mut chopsticks = adjustment("はし", "箸");
    chopsticks.directive = Some(Directive::Overwrite("chopsticks".into()));

    let report = apply_adjustments(&mut map, &[bridge, chopsticks]).unwrap();
    assert_eq!(report.applied, 2);
    assert_eq!(report.split, 1);
    assert!(!map.contains_key("はし"));
    assert_eq!(map["橋"].meanings, vec!["bridge"]);
    assert_eq!(map["箸"].meanings, vec!["chopsticks"]);
}

#[test]
fn test_collision_last_write_wins() {
    let mut map = RecordMap::new();
    map.insert("今".to_string(), record(&["いま"], &["now"], "会L1"));
    map.insert("こん".to_string(), record(&["こん"], &["this"], "会L2"));

    let report = apply_adjustments(&mut map, &[adjustment("こん", "今")]).unwrap();
    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.collisions[0].replacement, "今");
    assert_eq!(report.collisions[0].previous.meanings, vec!["now"]);
    assert_eq!(map.len(), 1);
    assert_eq!(map["今"].meanings, vec!["this"]);
}

#[test]
fn test_missing_original_is_fatal() {
    let mut map: RecordMap<VocabRecord> = RecordMap::new();
    let err = apply_adjustments(&mut map, &[adjustment("ない", "無い")]).unwrap_err();
    assert!(matches!(err, AdjustError::MissingOriginal { ref key, .. } if key == "ない"));
}
