//! Confidence scoring and explanation generation
//!
//! Both derive from the same set of detections and are kept together so
//! the weighting and the wording stay in sync.

use super::vocab::category_display_name;
use crate::filters::PriceRange;

/// Weighted confidence over the present detections
///
/// category +0.3, brand +0.2, colors +0.2, sizes +0.2, price +0.1,
/// delivery +0.1, plus a flat +0.1 when at least two detection kinds
/// fired. Clamped to 1.0; all terms are non-negative so no lower clamp.
pub fn score_confidence(
    category: Option<&str>,
    brand: Option<&str>,
    colors: &[String],
    sizes: &[String],
    price_range: Option<PriceRange>,
    fast_delivery: bool,
) -> f64 {
    let mut confidence: f64 = 0.0;

    if category.is_some() {
        confidence += 0.3;
    }
    if brand.is_some() {
        confidence += 0.2;
    }
    if !colors.is_empty() {
        confidence += 0.2;
    }
    if !sizes.is_empty() {
        confidence += 0.2;
    }
    if price_range.is_some() {
        confidence += 0.1;
    }
    if fast_delivery {
        confidence += 0.1;
    }

    let kinds = [
        category.is_some(),
        brand.is_some(),
        !colors.is_empty(),
        !sizes.is_empty(),
        price_range.is_some(),
        fast_delivery,
    ]
    .iter()
    .filter(|&&fired| fired)
    .count();

    if kinds >= 2 {
        confidence += 0.1;
    }

    confidence.min(1.0)
}

/// One French clause per detection, joined with " • "
///
/// Clause order is fixed: category, brand, colors, sizes, price,
/// delivery. Color lists truncate after 2 entries, size lists after 3.
pub fn build_explanation(
    category: Option<&str>,
    brand: Option<&str>,
    colors: &[String],
    sizes: &[String],
    price_range: Option<PriceRange>,
    fast_delivery: bool,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(category) = category {
        parts.push(format!(
            "Recherche dans les {}",
            category_display_name(category)
        ));
    }

    if let Some(brand) = brand {
        parts.push(format!("Marque : {}", brand));
    }

    if !colors.is_empty() {
        if colors.len() == 1 {
            parts.push(format!("Couleur : {}", colors[0]));
        } else {
            let shown = colors[..2].join(", ");
            let suffix = if colors.len() > 2 { "..." } else { "" };
            parts.push(format!("Couleurs : {}{}", shown, suffix));
        }
    }

    if !sizes.is_empty() {
        if sizes.len() == 1 {
            parts.push(format!("Taille : {}", sizes[0]));
        } else {
            let shown = sizes[..sizes.len().min(3)].join(", ");
            let suffix = if sizes.len() > 3 { "..." } else { "" };
            parts.push(format!("Tailles : {}{}", shown, suffix));
        }
    }

    if let Some(range) = price_range {
        if range.min == 0 {
            parts.push(format!("Budget max : {}€", range.max));
        } else {
            parts.push(format!("Budget : {}€ - {}€", range.min, range.max));
        }
    }

    if fast_delivery {
        parts.push("Livraison rapide activée".to_string());
    }

    if parts.is_empty() {
        return "Recherche générale dans le catalogue".to_string();
    }

    parts.join(" • ")
}
