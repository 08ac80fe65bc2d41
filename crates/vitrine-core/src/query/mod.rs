//! Query understanding pipeline
//!
//! Turns a free-form French shopping query into structured detections:
//! normalization, off-topic gate, attribute extraction, ambiguity
//! resolution, then confidence, explanation and refinement chips.
//!
//! Each call is pure and stateless; parsing the same query twice yields
//! identical results.

mod extract;
mod price;
mod refine;
mod score;
mod vocab;

pub use extract::{
    extract_brand, extract_category, extract_colors, extract_delivery, extract_sizes,
};
pub use price::extract_price;
pub use refine::{
    build_ambiguity_choices, build_refinement_chips, AmbiguityChoice, ChipKind, RefinementChip,
};
pub use score::{build_explanation, score_confidence};
pub use vocab::{category_display_name, category_keywords};

use crate::filters::PriceRange;
use serde::{Deserialize, Serialize};
use vocab::{GENERIC_TERMS, OFF_TOPIC_KEYWORDS};

/// A successfully parsed query with its detections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// The original query text, untouched
    pub query: String,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub price_range: Option<PriceRange>,
    pub fast_delivery: bool,
    /// Confidence in the parse (0.0 - 1.0)
    pub confidence: f64,
    /// Human-readable summary of the detections
    pub explanation: String,
    /// At most four refinement suggestions, in build order
    pub chips: Vec<RefinementChip>,
}

/// The three possible outcomes of a parse
///
/// Off-topic is a domain signal, not an error: callers must branch on
/// all three variants and present different guidance for each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ParseOutcome {
    /// Normal parse, possibly with zero detections and low confidence
    Parsed(ParsedQuery),
    /// Query too vague to filter: offer coarse presets instead
    Ambiguous(Vec<AmbiguityChoice>),
    /// Query is outside the shopping domain; nothing was extracted
    OffTopic,
}

/// Trim and lower-case the raw query
///
/// All downstream matching operates on this form. No diacritic folding:
/// the vocabulary tables carry accented variants themselves.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn is_off_topic(normalized: &str) -> bool {
    OFF_TOPIC_KEYWORDS.iter().any(|k| normalized.contains(k))
}

fn is_generic(normalized: &str) -> bool {
    GENERIC_TERMS.iter().any(|t| normalized.contains(t))
}

/// Parse a free-form shopping query into structured detections
///
/// The off-topic gate runs before any extraction; an off-topic query
/// produces no partial detections. A query with zero detections that is
/// generic or very short resolves to [`ParseOutcome::Ambiguous`].
pub fn parse_query(query: &str) -> ParseOutcome {
    let normalized = normalize(query);

    if is_off_topic(&normalized) {
        tracing::info!("Query rejected as off-topic: '{}'", query);
        return ParseOutcome::OffTopic;
    }

    let price_range = extract_price(&normalized);
    let category = extract_category(&normalized);
    let brand = extract_brand(&normalized);
    let colors = extract_colors(&normalized);
    let sizes = extract_sizes(&normalized);
    let fast_delivery = extract_delivery(&normalized);

    let nothing_detected = category.is_none()
        && brand.is_none()
        && colors.is_empty()
        && sizes.is_empty()
        && price_range.is_none()
        && !fast_delivery;

    if nothing_detected
        && (is_generic(&normalized) || normalized.split_whitespace().count() <= 2)
    {
        tracing::info!("Query too vague, offering category choices: '{}'", query);
        return ParseOutcome::Ambiguous(build_ambiguity_choices());
    }

    let chips = build_refinement_chips(
        category.as_deref(),
        &colors,
        &sizes,
        price_range,
        fast_delivery,
    );

    let confidence = score_confidence(
        category.as_deref(),
        brand.as_deref(),
        &colors,
        &sizes,
        price_range,
        fast_delivery,
    );

    let explanation = build_explanation(
        category.as_deref(),
        brand.as_deref(),
        &colors,
        &sizes,
        price_range,
        fast_delivery,
    );

    tracing::info!(
        "Parsed query '{}' → category={:?}, brand={:?}, {} colors, {} sizes, price={:?}, \
         delivery={}, confidence={:.2}",
        query,
        category,
        brand,
        colors.len(),
        sizes.len(),
        price_range,
        fast_delivery,
        confidence
    );

    ParseOutcome::Parsed(ParsedQuery {
        query: query.to_string(),
        category,
        brand,
        colors,
        sizes,
        price_range,
        fast_delivery,
        confidence,
        explanation,
        chips,
    })
}
