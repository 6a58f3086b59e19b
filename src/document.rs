//! The persisted menu document (`menus.json`).
//!
//! The wider restaurant application reads and writes the same file, so every
//! field this tool does not explicitly touch must survive a load/save cycle:
//! unknown siblings are captured through flattened maps and optional fields
//! are only serialized when present.

use crate::error::{MenuFixError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Top-level document: menu name -> menu record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(flatten)]
    pub menus: IndexMap<String, Menu>,
}

/// One menu: a catalog of items plus the ingredient price table they are
/// costed against. `costMultiplier`, `categories` and any other sibling the
/// application stores ride along in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub initial_ingredients: IndexMap<String, Ingredient>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// An ingredient price record. `cost` and `unit` stay optional at the model
/// level: the corrector has to observe their absence to drop the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A catalog entry. Recipe items are composed from ingredients; resale items
/// are sold as purchased and priced directly from a matched ingredient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_recipe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buying_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Item {
    /// The pricing pass reads a missing flag as resale, matching how the
    /// document has always been consumed.
    pub fn is_resale(&self) -> bool {
        !self.has_recipe.unwrap_or(false)
    }
}

impl MenuDocument {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MenuFixError::DocumentNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let doc: MenuDocument = serde_json::from_str(&content)?;
        Ok(doc)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
