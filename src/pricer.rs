//! Resale price derivation.
//!
//! Items sold as purchased (`hasRecipe: false`) get their `buyingPrice`
//! derived from the best-matching ingredient: per serving container for
//! beverage-like categories, per kg/L for bulk goods. Implausible results
//! are rejected and the prior price stands.

use crate::document::Menu;
use crate::matcher;
use crate::report::{CorrectionReport, RejectedPrice};
use crate::rules::{CanonicalUnit, Rules};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VOLUME_RE: Regex = Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*ml\b").unwrap();
}

/// Numeric serving size immediately preceding "ml" in an item name.
pub fn parse_volume_ml(name: &str) -> Option<f64> {
    VOLUME_RE
        .captures(name)
        .and_then(|caps| caps[1].parse().ok())
}

/// How one resale item's derivation came out.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceDecision {
    /// New buying price accepted.
    Updated(f64),
    /// Derived price exceeded the cap; the prior price stands.
    OverCap { price: f64, cap: f64 },
}

/// Derive the raw buying price for an item from its matched ingredient,
/// before the sanity cap is applied.
pub fn derive_price(
    item_name: &str,
    category: &str,
    cost: f64,
    unit: &str,
    rules: &Rules,
) -> f64 {
    if rules.is_per_unit(category) {
        if unit == CanonicalUnit::Milliliter.as_str() {
            let volume = parse_volume_ml(item_name).unwrap_or(rules.default_volume_ml);
            cost * volume
        } else {
            // Not priced per ml: the cost is already per serving container.
            cost
        }
    } else if unit == CanonicalUnit::Gram.as_str() || unit == CanonicalUnit::Milliliter.as_str() {
        // Per-gram/ml stock sells per kg/L.
        cost * 1000.0
    } else {
        cost
    }
}

/// Derive and cap-check a buying price.
pub fn price_item(
    item_name: &str,
    category: &str,
    cost: f64,
    unit: &str,
    rules: &Rules,
) -> PriceDecision {
    let price = derive_price(item_name, category, cost, unit, rules);
    let cap = rules.price_cap(category);
    if price > cap {
        PriceDecision::OverCap { price, cap }
    } else {
        PriceDecision::Updated(price)
    }
}

/// Summary counts for one pricing run.
#[derive(Debug, Clone, Default)]
pub struct PricerStats {
    pub resale_items: usize,
    pub updated: usize,
    pub mismatched: usize,
    pub rejected: usize,
}

/// Price every resale item of a menu against its (already corrected)
/// ingredient table. Recipe items are never touched.
pub fn price_resale_items(
    menu: &mut Menu,
    rules: &Rules,
    report: &mut CorrectionReport,
    verbose: bool,
) -> PricerStats {
    let mut stats = PricerStats::default();
    let Menu {
        items,
        initial_ingredients,
        ..
    } = menu;

    for item in items.iter_mut() {
        if !item.is_resale() {
            continue;
        }
        stats.resale_items += 1;

        let matched = matcher::match_ingredient(
            &item.name,
            &item.category,
            initial_ingredients.keys().map(|k| k.as_str()),
            rules,
        );

        let Some(matched) = matched else {
            stats.mismatched += 1;
            report.mismatched_items.push(item.name.clone());
            if verbose {
                println!(
                    "  no ingredient match for '{}' (category: {})",
                    item.name, item.category
                );
            }
            continue;
        };

        // A corrected table always carries cost and unit; a gap reads as
        // no usable match.
        let usable = initial_ingredients
            .get(&matched.ingredient)
            .and_then(|ing| Some((ing.cost?, ing.unit.clone()?)));
        let Some((cost, unit)) = usable else {
            stats.mismatched += 1;
            report.mismatched_items.push(item.name.clone());
            continue;
        };

        if verbose {
            println!(
                "  matched '{}' to ingredient '{}' (score {})",
                item.name, matched.ingredient, matched.score
            );
        }

        match price_item(&item.name, &item.category, cost, &unit, rules) {
            PriceDecision::Updated(price) => {
                item.buying_price = Some(price);
                stats.updated += 1;
                if verbose {
                    println!("  updated '{}' buyingPrice to {:.5}", item.name, price);
                }
            }
            PriceDecision::OverCap { price, cap } => {
                stats.rejected += 1;
                report.uncorrectable_items.push(RejectedPrice {
                    item: item.name.clone(),
                    adjusted_price: price,
                    max_allowed: cap,
                });
                if verbose {
                    println!(
                        "  rejected '{}': derived price {:.5} exceeds cap {:.2}",
                        item.name, price, cap
                    );
                }
            }
        }
    }

    stats
}

/// Price resale items across every menu in the document.
pub fn price_document(
    doc: &mut crate::document::MenuDocument,
    rules: &Rules,
    report: &mut CorrectionReport,
    verbose: bool,
) -> PricerStats {
    let mut total = PricerStats::default();
    for (menu_name, menu) in doc.menus.iter_mut() {
        if verbose {
            println!("  menu '{}': {} items", menu_name, menu.items.len());
        }
        let stats = price_resale_items(menu, rules, report, verbose);
        total.resale_items += stats.resale_items;
        total.updated += stats.updated;
        total.mismatched += stats.mismatched;
        total.rejected += stats.rejected;
    }
    total
}
