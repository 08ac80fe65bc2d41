//! JSON output formatter

use vitrine_core::{CatalogItem, ParseOutcome};

pub fn format_outcome(outcome: &ParseOutcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_items(items: &[CatalogItem]) -> String {
    let output: Vec<serde_json::Value> = items
        .iter()
        .map(|item| {
            serde_json::json!({
                "id": item.id,
                "name": item.name,
                "brand": item.brand,
                "price": item.price,
                "inStock": item.in_stock,
                "fastDelivery": item.fast_delivery,
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string()) + "\n"
}
