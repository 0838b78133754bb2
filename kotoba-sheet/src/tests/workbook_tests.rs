use super::*;

fn s(text: &str) -> Data {
    Data::String(text.to_string())
}

#[test]
fn test_cell_text() {
    assert_eq!(cell_text(Some(&s(" 明日 "))), Some("明日".to_string()));
    assert_eq!(cell_text(Some(&Data::Int(12))), Some("12".to_string()));
    assert_eq!(cell_text(Some(&Data::Float(3.0))), Some("3".to_string()));
    assert_eq!(cell_text(Some(&Data::Float(2.5))), Some("2.5".to_string()));
    assert_eq!(cell_text(Some(&s("   "))), None);
    assert_eq!(cell_text(Some(&Data::Empty)), None);
    assert_eq!(cell_text(None), None);
}

#[test]
fn test_cell_int() {
    assert_eq!(cell_int(Some(&Data::Int(7))), Ok(Some(7)));
    assert_eq!(cell_int(Some(&Data::Float(7.0))), Ok(Some(7)));
    assert_eq!(cell_int(Some(&s(" 42 "))), Ok(Some(42)));
    assert_eq!(cell_int(Some(&Data::Empty)), Ok(None));
    assert!(cell_int(Some(&s("abc"))).is_err());
    assert!(cell_int(Some(&Data::Float(1.5))).is_err());
}

#[test]
fn test_kanji_row() {
    let cells = vec![
        Data::Float(1.0),
        Data::Float(3.0),
        s("あす"),
        s("明日"),
        Data::Float(120.0),
        s("L9"),
    ];
    let row = kanji_row(4, &cells).unwrap();
    assert_eq!(
        row,
        KanjiRow {
            index: 1,
            textbook_order: 3,
            reading: "あす".to_string(),
            kanji: "明日".to_string(),
            unique_id: 120,
            lesson: 9,
        }
    );
}

#[test]
fn test_kanji_row_empty_kanji_cell() {
    let cells = vec![Data::Int(1), Data::Int(3), s("あす"), Data::Empty, Data::Int(1), s("L9")];
    let row = kanji_row(4, &cells).unwrap();
    assert_eq!(row.kanji, "");
    assert_eq!(row.reading, "あす");
    assert_eq!(row.lesson, 9);
}

#[test]
fn test_kanji_row_bad_lesson_code() {
    let cells = vec![Data::Int(1), Data::Int(3), s("あす"), s("明日"), Data::Int(1), s("L")];
    let err = kanji_row(7, &cells).unwrap_err();
    assert!(matches!(err, SheetError::Row { row: 7, .. }));
}

#[test]
fn test_kanji_row_missing_order() {
    let cells = vec![Data::Int(1), Data::Empty, s("あす"), s("明日"), Data::Int(1), s("L9")];
    let err = kanji_row(5, &cells).unwrap_err();
    assert!(err.to_string().contains("textbook order"));
}

#[test]
fn test_vocab_row_without_kanji() {
    let cells = vec![Data::Int(3), s("おはよう"), Data::Empty, s("exp."), s("Good morning."), s("会G")];
    let row = vocab_row(11, &cells).unwrap();
    assert_eq!(row.index, "3");
    assert_eq!(row.kanji, None);
    assert_eq!(row.head_word(), "おはよう");
    assert_eq!(row.lessons, "会G");
}

#[test]
fn test_vocab_row_too_narrow() {
    let cells = vec![Data::Int(3), s("おはよう")];
    let err = vocab_row(12, &cells).unwrap_err();
    assert!(err.to_string().contains("expected 6 columns"));
}

#[test]
fn test_data_rows_absolute_offset() {
    // Used area starts at sheet row 2 (0-based 1); data starts at sheet row 4
    let mut range: Range<Data> = Range::new((1, 0), (5, 5));
    range.set_value((1, 0), s("title"));
    range.set_value((2, 0), s("header"));
    range.set_value((3, 0), s("first"));
    range.set_value((5, 0), s("last"));

    let rows: Vec<(u32, String)> = data_rows(&range, 4)
        .map(|(n, cells)| (n, cell_text(cells.first()).unwrap_or_default()))
        .collect();
    assert_eq!(rows, vec![(4, "first".to_string()), (6, "last".to_string())]);
}
