//! Catalog data model and loading
//!
//! The catalog is owned by the caller; this crate only ever reads it.
//! Items use the camelCase JSON shape of the storefront export.

use crate::error::{Result, VitrineError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Current price in euros
    pub price: f64,
    /// Pre-discount price, when the item is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    pub category: String,
    /// Available colors, canonical display names
    pub colors: Vec<String>,
    /// Available sizes, letter or numeric
    pub sizes: Vec<String>,
    pub description: String,
    pub in_stock: bool,
    pub fast_delivery: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
}

/// Parse a catalog from a JSON array
pub fn catalog_from_json(json: &str) -> Result<Vec<CatalogItem>> {
    let items: Vec<CatalogItem> = serde_json::from_str(json)?;
    if items.is_empty() {
        return Err(VitrineError::Catalog("catalog is empty".to_string()));
    }
    Ok(items)
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>> {
    let json = std::fs::read_to_string(path)?;
    let items = catalog_from_json(&json)?;
    tracing::info!("Loaded {} catalog items from {}", items.len(), path.display());
    Ok(items)
}
