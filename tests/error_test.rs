//! Error-path coverage: fatal conditions abort before anything is written.

use menu_fix_rust::document::MenuDocument;
use menu_fix_rust::error::MenuFixError;
use menu_fix_rust::lexicon;
use menu_fix_rust::pricelist::PriceList;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_load_missing_document() {
    let result = MenuDocument::load(Path::new("/nonexistent/menus.json"));
    assert!(matches!(result, Err(MenuFixError::DocumentNotFound(_))));
}

#[test]
fn test_load_malformed_document() {
    let dir = tempdir().expect("failed to create temp dir");
    let doc_path = dir.path().join("menus.json");
    std::fs::write(&doc_path, "{ not json").unwrap();

    let result = MenuDocument::load(&doc_path);
    assert!(matches!(result, Err(MenuFixError::JsonParse(_))));
}

#[test]
fn test_malformed_document_leaves_file_untouched() {
    let dir = tempdir().expect("failed to create temp dir");
    let doc_path = dir.path().join("menus.json");
    std::fs::write(&doc_path, "{ not json").unwrap();

    // The load is the only fatal step; a failed run must not have rewritten
    // the source.
    let _ = MenuDocument::load(&doc_path);
    assert_eq!(std::fs::read_to_string(&doc_path).unwrap(), "{ not json");
}

#[test]
fn test_load_missing_price_list() {
    let result = PriceList::load(Path::new("/nonexistent/prices.csv"));
    assert!(matches!(result, Err(MenuFixError::PriceListNotFound(_))));
}

#[test]
fn test_load_malformed_price_list() {
    let dir = tempdir().expect("failed to create temp dir");
    let csv_path = dir.path().join("prices.csv");
    // Header present, price column not numeric.
    std::fs::write(
        &csv_path,
        "Ingredient,Category,Unit,Wholesale Price (excl. VAT),VAT (20%),Final Price (incl. VAT),Source\n\
         lamb,Proteins,kg,6.50,1.30,not-a-price,Brakes\n",
    )
    .unwrap();

    let result = PriceList::load(&csv_path);
    assert!(matches!(result, Err(MenuFixError::CsvParse(_))));
}

#[test]
fn test_load_missing_lexicon() {
    let result = lexicon::load_lexicon(Path::new("/nonexistent/lexicon.json"));
    assert!(matches!(result, Err(MenuFixError::LexiconNotFound(_))));
}

#[test]
fn test_error_display_is_never_empty() {
    let errors = vec![
        MenuFixError::Config("missing home".to_string()),
        MenuFixError::DocumentNotFound("menus.json".to_string()),
        MenuFixError::PriceListNotFound("prices.csv".to_string()),
        MenuFixError::InvalidPriceList("no entries".to_string()),
        MenuFixError::LexiconNotFound("lexicon.json".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message for {:?}", err);
    }
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: MenuFixError = io_err.into();

    assert!(matches!(err, MenuFixError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: MenuFixError = json_err.into();

    assert!(matches!(err, MenuFixError::JsonParse(_)));
}
