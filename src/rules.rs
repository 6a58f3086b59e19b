//! Category tables, cost ranges and price caps for the correction passes.
//!
//! Everything tunable lives in a single [`Rules`] value that the caller passes
//! into the corrector, matcher and pricer explicitly, so tests can substitute
//! alternate tables.

/// Category fallback when an ingredient carries none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The only unit values considered valid after correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalUnit {
    Gram,
    Milliliter,
    /// Priced per item (bottle, egg, ...).
    Unit,
}

impl CanonicalUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalUnit::Gram => "g",
            CanonicalUnit::Milliliter => "ml",
            CanonicalUnit::Unit => "unit",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "g" => Some(CanonicalUnit::Gram),
            "ml" => Some(CanonicalUnit::Milliliter),
            "unit" => Some(CanonicalUnit::Unit),
            _ => None,
        }
    }
}

impl std::fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Correction and pricing rules for one run.
#[derive(Debug, Clone)]
pub struct Rules {
    /// Categories whose canonical unit is the gram.
    pub solid_categories: Vec<String>,
    /// Categories whose canonical unit is the milliliter.
    pub liquid_categories: Vec<String>,
    /// Categories priced per serving container rather than per mass/volume.
    pub per_unit_categories: Vec<String>,

    /// Accepted cost range per gram.
    pub gram_cost_range: (f64, f64),
    /// Accepted cost range per milliliter.
    pub milliliter_cost_range: (f64, f64),
    /// Accepted cost range per item.
    pub unit_cost_range: (f64, f64),

    /// Maximum plausible buying price per serving (per-unit categories).
    pub max_price_per_item: f64,
    /// Maximum plausible buying price per kg/L (bulk categories).
    pub max_price_per_kg_l: f64,

    /// Serving volume assumed when an item name carries no "ml" size.
    pub default_volume_ml: f64,

    /// Full-string match threshold for per-unit categories (0-100).
    pub strict_match_threshold: u32,
    /// Partial match threshold for everything else (0-100).
    pub partial_match_threshold: u32,
}

impl Default for Rules {
    fn default() -> Self {
        let strings = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            solid_categories: strings(&[
                "Proteins",
                "Vegetables",
                "Fruits",
                "Grains",
                "Nuts and Seeds",
                "Baking Supplies",
                "Sweeteners",
            ]),
            liquid_categories: strings(&[
                "Beverages",
                "Soft Drinks",
                "Beers & Ciders",
                "White Wines",
                "Red Wines",
                "Rose Wines",
                "Sparkling Wines",
                "Cocktails",
                "Hot Drinks",
                "Liqueur Coffees",
                "Oils and Vinegars",
            ]),
            per_unit_categories: strings(&[
                "Beverages",
                "Soft Drinks",
                "Beers & Ciders",
                "White Wines",
                "Red Wines",
                "Rose Wines",
                "Sparkling Wines",
                "Cocktails",
                "Hot Drinks",
                "Liqueur Coffees",
            ]),
            // Roughly £1-£10/kg for solids, £1-£5/L for liquids,
            // £0.50-£5 per item.
            gram_cost_range: (0.001, 0.01),
            milliliter_cost_range: (0.001, 0.005),
            unit_cost_range: (0.50, 5.00),
            max_price_per_item: 10.0,
            max_price_per_kg_l: 50.0,
            default_volume_ml: 275.0,
            strict_match_threshold: 95,
            partial_match_threshold: 85,
        }
    }
}

impl Rules {
    /// The unit an ingredient of this category is expected to be priced in.
    /// Unknown categories fall through to per-item pricing.
    pub fn canonical_unit(&self, category: &str) -> CanonicalUnit {
        if self.solid_categories.iter().any(|c| c == category) {
            CanonicalUnit::Gram
        } else if self.liquid_categories.iter().any(|c| c == category) {
            CanonicalUnit::Milliliter
        } else {
            CanonicalUnit::Unit
        }
    }

    /// Accepted `(min, max)` cost range for a canonical unit.
    pub fn cost_range(&self, unit: CanonicalUnit) -> (f64, f64) {
        match unit {
            CanonicalUnit::Gram => self.gram_cost_range,
            CanonicalUnit::Milliliter => self.milliliter_cost_range,
            CanonicalUnit::Unit => self.unit_cost_range,
        }
    }

    /// Whether items of this category are priced per serving container.
    pub fn is_per_unit(&self, category: &str) -> bool {
        self.per_unit_categories.iter().any(|c| c == category)
    }

    /// Similarity threshold the matcher applies for this category.
    pub fn match_threshold(&self, category: &str) -> u32 {
        if self.is_per_unit(category) {
            self.strict_match_threshold
        } else {
            self.partial_match_threshold
        }
    }

    /// Sanity cap for a derived buying price in this category.
    pub fn price_cap(&self, category: &str) -> f64 {
        if self.is_per_unit(category) {
            self.max_price_per_item
        } else {
            self.max_price_per_kg_l
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_unit_by_category() {
        let rules = Rules::default();
        assert_eq!(rules.canonical_unit("Proteins"), CanonicalUnit::Gram);
        assert_eq!(rules.canonical_unit("Red Wines"), CanonicalUnit::Milliliter);
        assert_eq!(rules.canonical_unit("Condiments"), CanonicalUnit::Unit);
        assert_eq!(rules.canonical_unit("Uncategorized"), CanonicalUnit::Unit);
    }

    #[test]
    fn test_oils_are_liquid_but_not_per_unit() {
        let rules = Rules::default();
        assert_eq!(
            rules.canonical_unit("Oils and Vinegars"),
            CanonicalUnit::Milliliter
        );
        assert!(!rules.is_per_unit("Oils and Vinegars"));
        assert!(rules.is_per_unit("Soft Drinks"));
    }

    #[test]
    fn test_threshold_and_cap_follow_category() {
        let rules = Rules::default();
        assert_eq!(rules.match_threshold("Beers & Ciders"), 95);
        assert_eq!(rules.match_threshold("Proteins"), 85);
        assert_eq!(rules.price_cap("Hot Drinks"), 10.0);
        assert_eq!(rules.price_cap("Vegetables"), 50.0);
    }

    #[test]
    fn test_canonical_unit_roundtrip() {
        for unit in [
            CanonicalUnit::Gram,
            CanonicalUnit::Milliliter,
            CanonicalUnit::Unit,
        ] {
            assert_eq!(CanonicalUnit::from_str(unit.as_str()), Some(unit));
        }
        assert_eq!(CanonicalUnit::from_str("kg"), None);
    }
}
