//! End-of-run reports.
//!
//! Every recoverable rejection (missing field, uncorrectable cost, no match,
//! implausible price) surfaces here rather than stopping the batch. A report
//! is created empty at the start of a run and written out once at the end;
//! nothing carries across runs.

use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Before/after pair for a rescaled ingredient cost.
#[derive(Debug, Clone, Serialize)]
pub struct CorrectedCost {
    pub ingredient: String,
    pub original_cost: f64,
    pub corrected_cost: f64,
    pub unit: String,
}

/// A derived price that exceeded the sanity cap; the item kept its prior
/// buying price.
#[derive(Debug, Clone, Serialize)]
pub struct RejectedPrice {
    pub item: String,
    pub adjusted_price: f64,
    pub max_allowed: f64,
}

/// The correction pass report: four disjoint lists. Keys stay snake_case —
/// that is the report file format the operator tooling already reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorrectionReport {
    pub generated_at: String,
    /// Resale items no ingredient name matched.
    pub mismatched_items: Vec<String>,
    /// Ingredients dropped for missing or uncorrectable fields.
    pub skipped_ingredients: Vec<String>,
    /// Costs rescaled by the decimal-shift repair.
    pub corrected_costs: Vec<CorrectedCost>,
    /// Price updates rejected by the sanity cap.
    pub uncorrectable_items: Vec<RejectedPrice>,
}

impl CorrectionReport {
    pub fn new() -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            ..Default::default()
        }
    }

    /// True when the run had nothing to flag.
    pub fn is_clean(&self) -> bool {
        self.mismatched_items.is_empty()
            && self.skipped_ingredients.is_empty()
            && self.corrected_costs.is_empty()
            && self.uncorrectable_items.is_empty()
    }
}

/// Write any report structure pretty-printed to its side file.
pub fn write_report<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;
    std::fs::write(path, content)?;
    Ok(())
}
