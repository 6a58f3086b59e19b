//! Ingredient data correction.
//!
//! Validates and repairs each ingredient's `(cost, unit, category)` before
//! the pricing pass runs. The cost range is derived from the category, and a
//! cost outside it gets the decimal-shift repair: divide by 1000, then 100,
//! then 10, first in-range quotient wins. Ingredients that cannot be repaired
//! are dropped from the menu and listed in the run report.

use crate::document::Ingredient;
use crate::report::{CorrectedCost, CorrectionReport};
use crate::rules::{CanonicalUnit, Rules, UNCATEGORIZED};
use indexmap::IndexMap;

/// Divisors tried, in order, against an out-of-range cost.
const COST_DIVISORS: [f64; 3] = [1000.0, 100.0, 10.0];

/// What the corrector changed on one ingredient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Correction {
    /// `(from, to)` when the unit label was repaired.
    pub relabeled_unit: Option<(String, String)>,
    /// `(from, to)` when the cost was rescaled.
    pub rescaled_cost: Option<(f64, f64)>,
}

impl Correction {
    pub fn is_unchanged(&self) -> bool {
        self.relabeled_unit.is_none() && self.rescaled_cost.is_none()
    }
}

/// Why an ingredient was dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum DropReason {
    /// `cost` or `unit` absent.
    MissingField,
    /// Cost out of range even after every decimal shift.
    OutOfRange { cost: f64, min: f64, max: f64 },
}

/// Correct a single ingredient in place, or say why it must be dropped.
pub fn correct_ingredient(
    ingredient: &mut Ingredient,
    rules: &Rules,
) -> std::result::Result<Correction, DropReason> {
    let (Some(cost), Some(unit)) = (ingredient.cost, ingredient.unit.clone()) else {
        return Err(DropReason::MissingField);
    };

    if ingredient.category.is_none() {
        ingredient.category = Some(UNCATEGORIZED.to_string());
    }
    let category = ingredient.category.clone().unwrap_or_default();

    let expected_unit = rules.canonical_unit(&category);
    let (min_cost, max_cost) = rules.cost_range(expected_unit);

    let mut correction = Correction::default();

    // Label fix only: a cost entered against the wrong unit is renamed, not
    // rescaled. Long-standing behavior the report makes visible.
    if CanonicalUnit::from_str(&unit).is_none() {
        ingredient.unit = Some(expected_unit.as_str().to_string());
        correction.relabeled_unit = Some((unit, expected_unit.as_str().to_string()));
    }

    if cost < min_cost || cost > max_cost {
        let repaired = COST_DIVISORS
            .iter()
            .map(|divisor| cost / divisor)
            .find(|quotient| (min_cost..=max_cost).contains(quotient));

        match repaired {
            Some(quotient) => {
                ingredient.cost = Some(quotient);
                correction.rescaled_cost = Some((cost, quotient));
            }
            None => {
                return Err(DropReason::OutOfRange {
                    cost,
                    min: min_cost,
                    max: max_cost,
                });
            }
        }
    }

    Ok(correction)
}

/// Summary counts for one corrector run.
#[derive(Debug, Clone, Default)]
pub struct CorrectorStats {
    pub total: usize,
    pub rescaled_costs: usize,
    pub relabeled_units: usize,
    pub dropped: usize,
}

/// Run the corrector over a menu's ingredient table. Dropped ingredients are
/// removed; rescales and drops land in `report`.
pub fn correct_ingredients(
    ingredients: &mut IndexMap<String, Ingredient>,
    rules: &Rules,
    report: &mut CorrectionReport,
    verbose: bool,
) -> CorrectorStats {
    let mut stats = CorrectorStats {
        total: ingredients.len(),
        ..Default::default()
    };

    let names: Vec<String> = ingredients.keys().cloned().collect();
    let mut dropped: Vec<String> = Vec::new();

    for name in names {
        let Some(ingredient) = ingredients.get_mut(&name) else {
            continue;
        };

        match correct_ingredient(ingredient, rules) {
            Ok(correction) => {
                if let Some((from, to)) = &correction.relabeled_unit {
                    stats.relabeled_units += 1;
                    if verbose {
                        println!("  corrected unit for '{}' from '{}' to '{}'", name, from, to);
                    }
                }
                if let Some((from, to)) = correction.rescaled_cost {
                    stats.rescaled_costs += 1;
                    let unit = ingredient.unit.clone().unwrap_or_default();
                    if verbose {
                        println!(
                            "  corrected cost for '{}' from {} to {} per {}",
                            name, from, to, unit
                        );
                    }
                    report.corrected_costs.push(CorrectedCost {
                        ingredient: name.clone(),
                        original_cost: from,
                        corrected_cost: to,
                        unit,
                    });
                }
            }
            Err(reason) => {
                if verbose {
                    match &reason {
                        DropReason::MissingField => {
                            println!("  ingredient '{}' missing cost or unit, dropping", name);
                        }
                        DropReason::OutOfRange { cost, min, max } => {
                            println!(
                                "  cost for '{}' ({}) out of range [{}, {}] even after correction, dropping",
                                name, cost, min, max
                            );
                        }
                    }
                }
                dropped.push(name);
            }
        }
    }

    for name in dropped {
        ingredients.shift_remove(&name);
        report.skipped_ingredients.push(name);
        stats.dropped += 1;
    }

    stats
}

/// Correct every menu's ingredient table in the document.
pub fn correct_document(
    doc: &mut crate::document::MenuDocument,
    rules: &Rules,
    report: &mut CorrectionReport,
    verbose: bool,
) -> CorrectorStats {
    let mut total = CorrectorStats::default();
    for (menu_name, menu) in doc.menus.iter_mut() {
        if verbose {
            println!("  menu '{}': {} ingredients", menu_name, menu.initial_ingredients.len());
        }
        let stats = correct_ingredients(&mut menu.initial_ingredients, rules, report, verbose);
        total.total += stats.total;
        total.rescaled_costs += stats.rescaled_costs;
        total.relabeled_units += stats.relabeled_units;
        total.dropped += stats.dropped;
    }
    total
}
