//! Wholesale price-list refresh.
//!
//! Rewrites ingredient cost/unit/category from a supplier price CSV. The
//! price list and the alias table are injected input files, not data baked
//! into the tool.

use crate::document::MenuDocument;
use crate::error::{MenuFixError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Category assumed when an ingredient carries none during a refresh.
const DEFAULT_CATEGORY: &str = "Miscellaneous";

/// Categories whose bulk buying unit is the liter rather than the kilogram.
const LIQUID_BUYING_CATEGORIES: &[&str] =
    &["Beverages", "Oils and Vinegars", "Condiments", "Sweeteners"];

/// One row of the supplier price CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceEntry {
    #[serde(rename = "Ingredient")]
    pub ingredient: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Unit")]
    pub unit: String,
    #[serde(rename = "Final Price (incl. VAT)")]
    pub price_incl_vat: f64,
}

/// The loaded supplier price list.
#[derive(Debug, Clone, Default)]
pub struct PriceList {
    entries: Vec<PriceEntry>,
}

impl PriceList {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MenuFixError::PriceListNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut entries = Vec::new();
        for record in csv_reader.deserialize() {
            let entry: PriceEntry = record?;
            entries.push(entry);
        }
        if entries.is_empty() {
            return Err(MenuFixError::InvalidPriceList(
                "price list contains no entries".to_string(),
            ));
        }
        Ok(PriceList { entries })
    }

    /// Case-insensitive lookup by supplier ingredient name.
    pub fn find(&self, name: &str) -> Option<&PriceEntry> {
        let lowered = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.ingredient.to_lowercase() == lowered)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Alias table folding duplicate ingredient spellings onto the supplier
/// name that carries the price. Keys match case-insensitively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientAliases {
    #[serde(flatten)]
    aliases: HashMap<String, String>,
}

impl IngredientAliases {
    /// The aliases the menu data has needed so far.
    pub fn builtin() -> Self {
        let mut aliases = HashMap::new();
        for (from, to) in [
            ("kalamari", "calamari"),
            ("cocacola", "coke"),
            ("espressolungo", "espressoCoffee"),
            ("coffeesweet", "sugar"),
            ("freshchilli", "chilli"),
            ("egg", "eggs"),
            ("lemon", "lemons"),
            ("coffee", "coffeeBeans"),
            ("peppercorn", "peppercorns"),
            ("bechamel", "bechamelSauce"),
            ("beef", "beefSirloin"),
        ] {
            aliases.insert(from.to_string(), to.to_string());
        }
        IngredientAliases { aliases }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let loaded: Self = serde_json::from_str(&content)?;
        Ok(loaded)
    }

    /// Merge another table in; its entries win on collision.
    pub fn merge(&mut self, other: &IngredientAliases) {
        for (from, to) in &other.aliases {
            self.aliases.insert(from.to_lowercase(), to.clone());
        }
    }

    /// The supplier name to price `name` under.
    pub fn resolve(&self, name: &str) -> String {
        let lowered = name.to_lowercase();
        self.aliases.get(&lowered).cloned().unwrap_or(lowered)
    }
}

/// The unit a refreshed buying price is quoted in: solids move to kg,
/// liquids to L, serving-sized units stay put.
pub fn determine_buying_unit(old_unit: &str, category: &str) -> String {
    let liquid = LIQUID_BUYING_CATEGORIES.contains(&category);
    if (old_unit == "g" || old_unit == "kg") && !liquid {
        "kg".to_string()
    } else if (old_unit == "ml" || old_unit == "L") && liquid {
        "L".to_string()
    } else {
        // Serving-sized units (bottle, pint, shot, ...) keep their label,
        // as does anything unrecognized.
        old_unit.to_string()
    }
}

/// One refreshed ingredient, before/after.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshedIngredient {
    pub ingredient: String,
    pub menu: String,
    pub old_cost: Option<f64>,
    pub new_cost: f64,
    pub unit: String,
    pub category: String,
}

/// An ingredient the price list had no row for.
#[derive(Debug, Clone, Serialize)]
pub struct UnmatchedIngredient {
    pub ingredient: String,
    pub menu: String,
}

/// Refresh run report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RefreshReport {
    pub generated_at: String,
    pub updated_ingredients: Vec<RefreshedIngredient>,
    pub unmatched_ingredients: Vec<UnmatchedIngredient>,
}

/// Rewrite every menu's ingredient costs from the supplier price list.
pub fn refresh_ingredients(
    doc: &mut MenuDocument,
    prices: &PriceList,
    aliases: &IngredientAliases,
    verbose: bool,
) -> RefreshReport {
    let mut report = RefreshReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        ..Default::default()
    };

    for (menu_name, menu) in doc.menus.iter_mut() {
        for (name, ingredient) in menu.initial_ingredients.iter_mut() {
            if ingredient.category.is_none() {
                ingredient.category = Some(DEFAULT_CATEGORY.to_string());
                if verbose {
                    println!("  set category for '{}' to '{}'", name, DEFAULT_CATEGORY);
                }
            }

            let supplier_name = aliases.resolve(name);
            let Some(entry) = prices.find(&supplier_name) else {
                if verbose {
                    println!("  no price found for '{}'", name);
                }
                report.unmatched_ingredients.push(UnmatchedIngredient {
                    ingredient: name.clone(),
                    menu: menu_name.clone(),
                });
                continue;
            };

            let old_unit = ingredient.unit.as_deref().unwrap_or("unit");
            let new_unit = determine_buying_unit(old_unit, &entry.category);
            let new_cost = (entry.price_incl_vat * 100.0).round() / 100.0;

            report.updated_ingredients.push(RefreshedIngredient {
                ingredient: name.clone(),
                menu: menu_name.clone(),
                old_cost: ingredient.cost,
                new_cost,
                unit: new_unit.clone(),
                category: entry.category.clone(),
            });

            ingredient.cost = Some(new_cost);
            ingredient.unit = Some(new_unit);
            ingredient.category = Some(entry.category.clone());

            if verbose {
                println!(
                    "  refreshed '{}': {} per {} ({})",
                    name, new_cost, ingredient.unit.as_deref().unwrap_or(""), entry.category
                );
            }
        }
    }

    report
}
