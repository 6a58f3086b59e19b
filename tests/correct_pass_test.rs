//! End-to-end correction pass over a tempfile-backed document.

use menu_fix_rust::corrector;
use menu_fix_rust::document::MenuDocument;
use menu_fix_rust::pricer;
use menu_fix_rust::report::CorrectionReport;
use menu_fix_rust::rules::Rules;
use tempfile::tempdir;

const DOCUMENT: &str = r#"{
    "izMenu": {
        "items": [
            {
                "name": "House Red 175ml",
                "category": "Red Wines",
                "hasRecipe": false,
                "buyingPrice": 0.5,
                "sellingPrice": 6.5
            },
            {
                "name": "Salmon Fillet",
                "category": "Mains",
                "hasRecipe": false,
                "sellingPrice": 16.0,
                "vatBand": "standard"
            },
            {
                "name": "Jeroboam 3000ml",
                "category": "Sparkling Wines",
                "hasRecipe": false,
                "buyingPrice": 11.0,
                "sellingPrice": 45.0
            },
            {
                "name": "Mystery Juice",
                "category": "Soft Drinks",
                "hasRecipe": false,
                "buyingPrice": 1.0,
                "sellingPrice": 3.0
            },
            {
                "name": "Moussaka",
                "category": "Mains",
                "hasRecipe": true,
                "buyingPrice": 3.2,
                "sellingPrice": 14.0
            }
        ],
        "initialIngredients": {
            "house red 175ml": {
                "cost": 0.004,
                "unit": "ml",
                "category": "Red Wines"
            },
            "jeroboam 3000ml": {
                "cost": 0.004,
                "unit": "ml",
                "category": "Sparkling Wines"
            },
            "salmon": {
                "cost": 5.0,
                "unit": "g",
                "category": "Proteins",
                "supplier": "Brakes"
            },
            "lamb": { "cost": 12.5, "unit": "g", "category": "Proteins" },
            "teaBags": { "unit": "unit", "category": "Hot Drinks" }
        },
        "costMultiplier": 1.1,
        "categories": ["Mains", "Red Wines", "Soft Drinks"]
    }
}"#;

fn run_passes(doc: &mut MenuDocument) -> CorrectionReport {
    let rules = Rules::default();
    let mut report = CorrectionReport::new();
    corrector::correct_document(doc, &rules, &mut report, false);
    pricer::price_document(doc, &rules, &mut report, false);
    report
}

#[test]
fn test_full_pass_corrects_prices_and_reports() {
    let dir = tempdir().expect("failed to create temp dir");
    let doc_path = dir.path().join("menus.json");
    std::fs::write(&doc_path, DOCUMENT).unwrap();

    let mut doc = MenuDocument::load(&doc_path).unwrap();
    let report = run_passes(&mut doc);
    doc.save(&doc_path).unwrap();

    let saved = MenuDocument::load(&doc_path).unwrap();
    let menu = &saved.menus["izMenu"];

    // 0.004/ml over the parsed 175ml serving.
    let house_red = &menu.items[0];
    assert!((house_red.buying_price.unwrap() - 0.70).abs() < 1e-9);

    // Partial match onto "salmon"; 5.0 rescaled to 0.005/g, sold per kg.
    let salmon_fillet = &menu.items[1];
    assert!((salmon_fillet.buying_price.unwrap() - 5.0).abs() < 1e-9);

    // 0.004 * 3000 = 12.0 busts the 10.00 per-serving cap: prior price kept.
    let jeroboam = &menu.items[2];
    assert_eq!(jeroboam.buying_price, Some(11.0));

    // Nothing matched: untouched.
    let mystery = &menu.items[3];
    assert_eq!(mystery.buying_price, Some(1.0));

    // Recipe item: never part of the pricing pass.
    let moussaka = &menu.items[4];
    assert_eq!(moussaka.buying_price, Some(3.2));

    // Uncorrectable ingredients are gone from the saved table.
    assert!(!menu.initial_ingredients.contains_key("lamb"));
    assert!(!menu.initial_ingredients.contains_key("teaBags"));
    assert_eq!(menu.initial_ingredients["salmon"].cost, Some(0.005));

    // The report covers every rejection path once.
    assert_eq!(report.skipped_ingredients.len(), 2);
    assert!(report.skipped_ingredients.contains(&"lamb".to_string()));
    assert!(report.skipped_ingredients.contains(&"teaBags".to_string()));
    assert_eq!(report.corrected_costs.len(), 1);
    assert_eq!(report.corrected_costs[0].ingredient, "salmon");
    assert_eq!(report.mismatched_items, vec!["Mystery Juice".to_string()]);
    assert_eq!(report.uncorrectable_items.len(), 1);
    assert_eq!(report.uncorrectable_items[0].item, "Jeroboam 3000ml");
}

#[test]
fn test_untouched_fields_survive_the_pass() {
    let dir = tempdir().expect("failed to create temp dir");
    let doc_path = dir.path().join("menus.json");
    std::fs::write(&doc_path, DOCUMENT).unwrap();

    let mut doc = MenuDocument::load(&doc_path).unwrap();
    run_passes(&mut doc);
    doc.save(&doc_path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&doc_path).unwrap()).unwrap();

    assert_eq!(value["izMenu"]["costMultiplier"], 1.1);
    assert_eq!(value["izMenu"]["categories"][0], "Mains");
    assert_eq!(value["izMenu"]["items"][1]["vatBand"], "standard");
    assert_eq!(
        value["izMenu"]["initialIngredients"]["salmon"]["supplier"],
        "Brakes"
    );
    // The recipe item kept its selling price untouched.
    assert_eq!(value["izMenu"]["items"][4]["sellingPrice"], 14.0);
}

#[test]
fn test_second_run_is_a_fixed_point() {
    let dir = tempdir().expect("failed to create temp dir");
    let doc_path = dir.path().join("menus.json");
    std::fs::write(&doc_path, DOCUMENT).unwrap();

    let mut doc = MenuDocument::load(&doc_path).unwrap();
    run_passes(&mut doc);
    doc.save(&doc_path).unwrap();

    let first = std::fs::read_to_string(&doc_path).unwrap();

    let mut doc = MenuDocument::load(&doc_path).unwrap();
    let report = run_passes(&mut doc);
    doc.save(&doc_path).unwrap();

    let second = std::fs::read_to_string(&doc_path).unwrap();
    assert_eq!(first, second);

    // Already-corrected costs produce no new before/after pairs.
    assert!(report.corrected_costs.is_empty());
    assert!(report.skipped_ingredients.is_empty());
}
