//! Price extraction from textual patterns

use crate::filters::PriceRange;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Ordered price patterns: the first match wins, later patterns are
    /// not consulted even if they would also match.
    static ref PRICE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"[<≤]\s*(\d+)\s*€?").unwrap(),         // <60€
        Regex::new(r"moins\s+de\s+(\d+)").unwrap(),        // moins de 60
        Regex::new(r"budget\s+(\d+)").unwrap(),            // budget 60
        Regex::new(r"(\d+)\s*€?\s*max").unwrap(),          // 60€ max
        Regex::new(r"max\s+(\d+)").unwrap(),               // max 60
        Regex::new(r"(\d+)\s*[-–]\s*(\d+)\s*€?").unwrap(), // 30-60€
        Regex::new(r"entre\s+(\d+)\s+et\s+(\d+)").unwrap(), // entre 30 et 60
        Regex::new(r"(\d+)\s*€\s*environ").unwrap(),       // 50€ environ
        Regex::new(r"autour\s+de\s+(\d+)").unwrap(),       // autour de 50
        Regex::new(r"pas\s+cher").unwrap(),
        Regex::new(r"bon\s+marché").unwrap(),
    ];
}

/// Budget forced by the vague cheapness phrases
const CHEAP_CEILING: u32 = 50;

/// Extract a price range from the normalized query
///
/// Two captured numbers yield a `[min, max]` range, one yields an upper
/// bound `[0, n]`. The cheapness phrases ("pas cher", "bon marché") are
/// re-checked independently after the pattern loop and force `[0, 50]`
/// regardless of which pattern fired.
pub fn extract_price(normalized: &str) -> Option<PriceRange> {
    let mut detected = None;

    for pattern in PRICE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(normalized) {
            let first = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            let second = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());

            detected = match (first, second) {
                (Some(min), Some(max)) => Some(PriceRange::new(min, max)),
                (Some(max), None) => Some(PriceRange::up_to(max)),
                _ => None,
            };
            break;
        }
    }

    if normalized.contains("pas cher") || normalized.contains("bon marché") {
        detected = Some(PriceRange::up_to(CHEAP_CEILING));
    }

    detected
}
