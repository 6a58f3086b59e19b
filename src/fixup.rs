//! Document shape repair.
//!
//! Backfills fields older documents are missing and moves bulk-priced
//! ingredients onto base units. Unlike the corrector's label-only unit
//! repair, the kg/L conversion here genuinely rescales the cost.

use crate::document::MenuDocument;
use serde::Serialize;

/// Accepted cost ranges for the repair pass. Wider than the corrector's:
/// premium stock (lamb, truffle oil) is legitimate here.
#[derive(Debug, Clone)]
pub struct FixupRanges {
    pub gram: (f64, f64),
    pub milliliter: (f64, f64),
    pub unit: (f64, f64),
}

impl Default for FixupRanges {
    fn default() -> Self {
        Self {
            gram: (0.001, 0.05),
            milliliter: (0.001, 0.01),
            unit: (0.50, 10.00),
        }
    }
}

impl FixupRanges {
    /// Range for a base unit; unrecognized units are not range-checked.
    fn range_for(&self, unit: &str) -> Option<(f64, f64)> {
        match unit {
            "g" => Some(self.gram),
            "ml" => Some(self.milliliter),
            "unit" => Some(self.unit),
            _ => None,
        }
    }
}

/// A bulk-priced ingredient moved onto its base unit.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedUnit {
    pub ingredient: String,
    pub menu: String,
    pub from_unit: String,
    pub to_unit: String,
    pub old_cost: f64,
    pub new_cost: f64,
}

/// An ingredient dropped by the repair pass.
#[derive(Debug, Clone, Serialize)]
pub struct DroppedIngredient {
    pub ingredient: String,
    pub menu: String,
    pub reason: String,
}

/// Repair run report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FixReport {
    pub generated_at: String,
    pub recipe_flags_set: usize,
    pub default_buying_prices: usize,
    pub converted_units: Vec<ConvertedUnit>,
    pub dropped_ingredients: Vec<DroppedIngredient>,
}

/// Repair the whole document in place.
pub fn fix_document(doc: &mut MenuDocument, ranges: &FixupRanges, verbose: bool) -> FixReport {
    let mut report = FixReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        ..Default::default()
    };

    for (menu_name, menu) in doc.menus.iter_mut() {
        // Items: flag backfill, then a default margin-based buying price for
        // resale items that never had one.
        for item in menu.items.iter_mut() {
            if item.has_recipe.is_none() {
                item.has_recipe = Some(true);
                report.recipe_flags_set += 1;
                if verbose {
                    println!("  set hasRecipe for '{}' in {}", item.name, menu_name);
                }
            }

            if item.has_recipe == Some(false) && item.buying_price.is_none() {
                if let Some(selling_price) = item.selling_price {
                    let default_price = selling_price * 0.7;
                    item.buying_price = Some(default_price);
                    report.default_buying_prices += 1;
                    if verbose {
                        println!(
                            "  defaulted buyingPrice for '{}' in {} to {:.2}",
                            item.name, menu_name, default_price
                        );
                    }
                }
            }
        }

        // Ingredients: bulk-unit conversion, then range validation.
        let mut dropped: Vec<String> = Vec::new();
        for (name, ingredient) in menu.initial_ingredients.iter_mut() {
            let mut unit = ingredient.unit.clone().unwrap_or_else(|| "unit".to_string());
            let mut cost = ingredient.cost.unwrap_or(0.0);

            let converted_from = match unit.as_str() {
                "kg" => Some(("kg", "g")),
                "L" => Some(("L", "ml")),
                _ => None,
            };
            if let Some((from, to)) = converted_from {
                let old_cost = cost;
                cost /= 1000.0;
                unit = to.to_string();
                ingredient.unit = Some(unit.clone());
                ingredient.cost = Some(cost);
                report.converted_units.push(ConvertedUnit {
                    ingredient: name.clone(),
                    menu: menu_name.clone(),
                    from_unit: from.to_string(),
                    to_unit: to.to_string(),
                    old_cost,
                    new_cost: cost,
                });
                if verbose {
                    println!(
                        "  converted '{}' in {} from per {} to per {} ({} -> {})",
                        name, menu_name, from, to, old_cost, cost
                    );
                }
            }

            if let Some((min, max)) = ranges.range_for(&unit) {
                if !(min..=max).contains(&cost) {
                    report.dropped_ingredients.push(DroppedIngredient {
                        ingredient: name.clone(),
                        menu: menu_name.clone(),
                        reason: format!(
                            "Cost {} out of range ({}, {}) for unit {}",
                            cost, min, max, unit
                        ),
                    });
                    dropped.push(name.clone());
                    continue;
                }
            }

            if ingredient.category.is_none() {
                ingredient.category = Some(crate::rules::UNCATEGORIZED.to_string());
            }
        }

        for name in dropped {
            menu.initial_ingredients.shift_remove(&name);
        }
    }

    report
}
