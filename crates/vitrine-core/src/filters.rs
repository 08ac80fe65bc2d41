//! Filter criteria, partial patches, and manual catalog filtering
//!
//! `FilterCriteria` is the complete filter state of the product list.
//! It only ever changes by merging: a `FilterPatch` (from a refinement
//! chip) overwrites the fields it carries, a parse merges additively.
//! Every field is always present after a merge.

use crate::catalog::CatalogItem;
use crate::query::ParsedQuery;
use crate::DEFAULT_PRICE_CEILING;
use serde::{Deserialize, Serialize};

/// Inclusive price range in euros
///
/// Construction normalizes the bounds so `min <= max` always holds,
/// even for a reversed textual range like "60-30€".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Upper bound only, lower bound zero
    pub fn up_to(max: u32) -> Self {
        Self { min: 0, max }
    }

    /// Inclusive on both bounds
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min as f64 && price <= self.max as f64
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_PRICE_CEILING,
        }
    }
}

/// Complete filter state for a product list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub price_range: PriceRange,
    pub fast_delivery_only: bool,
    pub in_stock_only: bool,
}

/// Partial filter update carried by a refinement chip
///
/// Absent fields leave the corresponding criteria untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fast_delivery_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock_only: Option<bool>,
}

impl FilterCriteria {
    /// Merge a partial patch, overwriting only the fields it carries
    pub fn apply(&mut self, patch: &FilterPatch) {
        if let Some(brands) = &patch.brands {
            self.brands = brands.clone();
        }
        if let Some(colors) = &patch.colors {
            self.colors = colors.clone();
        }
        if let Some(sizes) = &patch.sizes {
            self.sizes = sizes.clone();
        }
        if let Some(range) = patch.price_range {
            self.price_range = range;
        }
        if let Some(fast) = patch.fast_delivery_only {
            self.fast_delivery_only = fast;
        }
        if let Some(in_stock) = patch.in_stock_only {
            self.in_stock_only = in_stock;
        }
    }

    /// Merge a parse into the active criteria additively
    ///
    /// Brand is appended if absent, colors and sizes are unioned, the
    /// price range is intersected, and fast delivery is turned on when
    /// detected. Nothing is ever removed from a set.
    pub fn merge_parsed(&mut self, parsed: &ParsedQuery) {
        if let Some(brand) = &parsed.brand {
            if !self.brands.contains(brand) {
                self.brands.push(brand.clone());
            }
        }

        for color in &parsed.colors {
            if !self.colors.contains(color) {
                self.colors.push(color.clone());
            }
        }

        for size in &parsed.sizes {
            if !self.sizes.contains(size) {
                self.sizes.push(size.clone());
            }
        }

        if let Some(range) = parsed.price_range {
            self.price_range = PriceRange::new(
                self.price_range.min.max(range.min),
                self.price_range.max.min(range.max),
            );
        }

        if parsed.fast_delivery {
            self.fast_delivery_only = true;
        }
    }

    /// Does an item pass every active criterion?
    ///
    /// Empty sets act as "no constraint"; the price range always applies.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if !self.brands.is_empty() && !self.brands.contains(&item.brand) {
            return false;
        }

        if !self.colors.is_empty() && !item.colors.iter().any(|c| self.colors.contains(c)) {
            return false;
        }

        if !self.sizes.is_empty() && !item.sizes.iter().any(|s| self.sizes.contains(s)) {
            return false;
        }

        if !self.price_range.contains(item.price) {
            return false;
        }

        if self.fast_delivery_only && !item.fast_delivery {
            return false;
        }

        if self.in_stock_only && !item.in_stock {
            return false;
        }

        true
    }
}

/// Filter a catalog by complete criteria (the sidebar path)
pub fn filter_catalog(items: &[CatalogItem], criteria: &FilterCriteria) -> Vec<CatalogItem> {
    let filtered: Vec<CatalogItem> = items
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect();

    tracing::debug!(
        "Criteria filter applied: {} → {} items",
        items.len(),
        filtered.len()
    );

    filtered
}
