//! Applying a parsed query to a catalog
//!
//! The only component that touches catalog data. Criteria are combined
//! with AND; anything left undetected is skipped entirely.

use crate::catalog::CatalogItem;
use crate::query::{category_keywords, ParsedQuery};

/// Filter a catalog by the detections of a parse
///
/// Category matches when any of its keywords appears in the lowercased
/// item name or description; brand matches exactly; colors and sizes
/// match on intersection; the price range is inclusive on both bounds.
/// Fast delivery is a refinement concern, not a catalog filter.
pub fn apply_parsed(catalog: &[CatalogItem], result: &ParsedQuery) -> Vec<CatalogItem> {
    let mut filtered: Vec<CatalogItem> = catalog.to_vec();

    if let Some(category) = &result.category {
        let keywords = category_keywords(category);
        filtered.retain(|item| {
            let name = item.name.to_lowercase();
            let description = item.description.to_lowercase();
            keywords
                .iter()
                .any(|k| name.contains(k) || description.contains(k))
        });
    }

    if let Some(brand) = &result.brand {
        filtered.retain(|item| &item.brand == brand);
    }

    if !result.colors.is_empty() {
        filtered.retain(|item| item.colors.iter().any(|c| result.colors.contains(c)));
    }

    if !result.sizes.is_empty() {
        filtered.retain(|item| item.sizes.iter().any(|s| result.sizes.contains(s)));
    }

    if let Some(range) = result.price_range {
        filtered.retain(|item| range.contains(item.price));
    }

    tracing::info!(
        "Applied parse of '{}': {} → {} items",
        result.query,
        catalog.len(),
        filtered.len()
    );

    filtered
}
