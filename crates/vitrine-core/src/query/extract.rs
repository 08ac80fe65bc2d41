//! Attribute extractors over the normalized query
//!
//! Each extractor is an independent table lookup. Category, brand, color
//! and delivery match by substring containment; sizes match whole word
//! tokens so that single-letter keys do not fire inside unrelated words.

use super::vocab::{
    BRAND_TOKENS, CATEGORY_KEYWORDS, COLOR_TOKENS, DELIVERY_KEYWORDS, SIZE_TOKENS,
};

/// Pick the category whose keyword set matches best
///
/// Score is matched/total keywords; the strictly highest score wins and
/// ties keep the first-seen category (tables iterate in declaration
/// order). Returns `None` when no keyword matches at all.
pub fn extract_category(normalized: &str) -> Option<String> {
    let mut best: Option<&str> = None;
    let mut best_score = 0.0_f64;

    for &(category, keywords) in CATEGORY_KEYWORDS {
        let matched = keywords.iter().filter(|k| normalized.contains(*k)).count();
        if matched == 0 {
            continue;
        }
        let score = matched as f64 / keywords.len() as f64;
        if score > best_score {
            best = Some(category);
            best_score = score;
        }
    }

    best.map(String::from)
}

/// Resolve the first brand token found in the query
///
/// The scan stops at the first hit; declaration order is the tie-break.
pub fn extract_brand(normalized: &str) -> Option<String> {
    BRAND_TOKENS
        .iter()
        .find(|(token, _)| normalized.contains(token))
        .map(|(_, canonical)| canonical.to_string())
}

/// Collect every color family matched in the query, deduplicated
pub fn extract_colors(normalized: &str) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();

    for (token, family) in COLOR_TOKENS {
        if normalized.contains(token) {
            for color in *family {
                if !colors.iter().any(|c| c == color) {
                    colors.push(color.to_string());
                }
            }
        }
    }

    colors
}

/// Collect every size matched in the query, deduplicated
///
/// Size surface forms are compared against whitespace tokens trimmed of
/// surrounding punctuation, never against raw substrings.
pub fn extract_sizes(normalized: &str) -> Vec<String> {
    let tokens: Vec<&str> = normalized
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .collect();

    let mut sizes: Vec<String> = Vec::new();

    for (surface, mapped) in SIZE_TOKENS {
        if tokens.iter().any(|t| t == surface) {
            for size in *mapped {
                if !sizes.iter().any(|s| s == size) {
                    sizes.push(size.to_string());
                }
            }
        }
    }

    sizes
}

/// True when any urgency keyword appears in the query
pub fn extract_delivery(normalized: &str) -> bool {
    DELIVERY_KEYWORDS.iter().any(|k| normalized.contains(k))
}
