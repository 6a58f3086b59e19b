//! Dish-description backfill.
//!
//! Copies descriptions onto menu items from a lexicon file: a JSON array of
//! `{name, description}` records. Names on both sides are normalized before
//! comparison — lowercase, trimmed, parenthetical suffixes such as "(V)"
//! stripped.

use crate::document::MenuDocument;
use crate::error::{MenuFixError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

lazy_static! {
    static ref PARENTHETICAL_RE: Regex = Regex::new(r"\s*\([^)]*\)").unwrap();
}

/// One lexicon record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishDescription {
    pub name: String,
    pub description: String,
}

/// Load the lexicon file, rejecting records with empty names up front.
pub fn load_lexicon(path: &Path) -> Result<Vec<DishDescription>> {
    if !path.exists() {
        return Err(MenuFixError::LexiconNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let entries: Vec<DishDescription> = serde_json::from_str(&content)?;
    Ok(entries
        .into_iter()
        .filter(|entry| !entry.name.trim().is_empty() && !entry.description.trim().is_empty())
        .collect())
}

/// Normalize a dish name for comparison.
pub fn normalize_name(name: &str) -> String {
    let stripped = PARENTHETICAL_RE.replace_all(name, "");
    stripped
        .to_lowercase()
        .trim()
        .trim_matches('"')
        .to_string()
}

/// An item that received a description.
#[derive(Debug, Clone, Serialize)]
pub struct DescribedItem {
    pub item: String,
    pub menu: String,
    pub matched_name: String,
}

/// An item no lexicon record matched.
#[derive(Debug, Clone, Serialize)]
pub struct UndescribedItem {
    pub item: String,
    pub menu: String,
}

/// Backfill run report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DescribeReport {
    pub generated_at: String,
    pub described_items: Vec<DescribedItem>,
    pub unmatched_items: Vec<UndescribedItem>,
}

/// Set `description` on every item whose normalized name appears in the
/// lexicon. Items that already match nothing are reported, not failed.
pub fn backfill_descriptions(
    doc: &mut MenuDocument,
    lexicon: &[DishDescription],
    verbose: bool,
) -> DescribeReport {
    let mut report = DescribeReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        ..Default::default()
    };

    let normalized: Vec<(String, &DishDescription)> = lexicon
        .iter()
        .map(|entry| (normalize_name(&entry.name), entry))
        .collect();

    for (menu_name, menu) in doc.menus.iter_mut() {
        for item in menu.items.iter_mut() {
            let item_key = normalize_name(&item.name);
            let matched = normalized
                .iter()
                .find(|(key, _)| *key == item_key)
                .map(|(_, entry)| *entry);

            match matched {
                Some(entry) => {
                    item.description = Some(entry.description.clone());
                    if verbose {
                        println!(
                            "  described '{}' in {} (lexicon: '{}')",
                            item.name, menu_name, entry.name
                        );
                    }
                    report.described_items.push(DescribedItem {
                        item: item.name.clone(),
                        menu: menu_name.clone(),
                        matched_name: entry.name.clone(),
                    });
                }
                None => {
                    if verbose {
                        println!("  no description found for '{}' in {}", item.name, menu_name);
                    }
                    report.unmatched_items.push(UndescribedItem {
                        item: item.name.clone(),
                        menu: menu_name.clone(),
                    });
                }
            }
        }
    }

    report
}
