use quizdeck::models::Flashcard;
use quizdeck::store::CardStore;
use quizdeck::QuizDeckError;
use tempfile::TempDir;

#[test]
fn test_roundtrip_preserves_order_and_fields() {
    let temp_dir = TempDir::new().unwrap();
    let store = CardStore::with_path(temp_dir.path().join("flashcards.csv"));

    let cards = vec![
        Flashcard::new("2+2", "4"),
        Flashcard::new("Capital of France", "Paris"),
        Flashcard::new(" untrimmed ", " kept as-is "),
    ];
    store.save(&cards).unwrap();

    assert_eq!(store.load().unwrap(), cards);
}

#[test]
fn test_header_row_and_column_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = CardStore::with_path(temp_dir.path().join("flashcards.csv"));

    store.save(&[Flashcard::new("q1", "a1")]).unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), "question,answer");
    assert_eq!(lines.next().unwrap(), "q1,a1");
}

#[test]
fn test_missing_file_loads_as_empty_set() {
    let temp_dir = TempDir::new().unwrap();
    let store = CardStore::with_path(temp_dir.path().join("nonexistent.csv"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_every_save_rewrites_the_whole_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = CardStore::with_path(temp_dir.path().join("flashcards.csv"));

    store
        .save(&[Flashcard::new("old", "gone"), Flashcard::new("also", "gone")])
        .unwrap();
    let replacement = vec![Flashcard::new("new", "kept")];
    store.save(&replacement).unwrap();

    assert_eq!(store.load().unwrap(), replacement);
}

#[test]
fn test_embedded_commas_quotes_and_newlines() {
    let temp_dir = TempDir::new().unwrap();
    let store = CardStore::with_path(temp_dir.path().join("flashcards.csv"));

    let cards = vec![
        Flashcard::new("List three colors, comma separated", "red, green, blue"),
        Flashcard::new("Quote \"exactly\"", "\"exactly\""),
        Flashcard::new("First line\nsecond line", "one\ntwo"),
    ];
    store.save(&cards).unwrap();

    assert_eq!(store.load().unwrap(), cards);
}

#[test]
fn test_malformed_content_fails_with_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = CardStore::with_path(temp_dir.path().join("flashcards.csv"));

    std::fs::write(store.path(), "question,answer\nrow-with-one-field\n").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, QuizDeckError::StorageError(_)));
}
