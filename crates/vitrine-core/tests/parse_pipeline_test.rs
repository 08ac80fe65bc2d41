//! End-to-end tests for the query understanding pipeline
//!
//! Covers the full scenario suite plus the cross-cutting invariants:
//! confidence bounds, price range ordering, deduplication, chip limits,
//! ambiguity gating and statelessness.

use proptest::prelude::*;
use vitrine_core::{
    parse_query, FilterCriteria, FilterPatch, ParseOutcome, PriceRange,
};

fn parsed(query: &str) -> vitrine_core::ParsedQuery {
    match parse_query(query) {
        ParseOutcome::Parsed(p) => p,
        other => panic!("expected parsed outcome for '{}', got {:?}", query, other),
    }
}

#[test]
fn scenario_jean_bleu_t40_livraison_rapide() {
    let p = parsed("jean bleu T40 livraison rapide");

    assert_eq!(p.category.as_deref(), Some("jean"));
    for shade in ["Bleu", "Bleu foncé", "Bleu clair", "Marine"] {
        assert!(p.colors.iter().any(|c| c == shade), "missing {}", shade);
    }
    assert_eq!(p.sizes, vec!["40"]);
    assert!(p.fast_delivery);
    assert!(p.confidence >= 0.8, "confidence was {}", p.confidence);
}

#[test]
fn scenario_chemise_lin_blanche_m_60() {
    let p = parsed("chemise lin blanche M <60€");

    assert_eq!(p.category.as_deref(), Some("chemise"));
    assert_eq!(p.colors, vec!["Blanc"]);
    assert_eq!(p.sizes, vec!["M"]);
    assert_eq!(p.price_range, Some(PriceRange::new(0, 60)));
}

#[test]
fn scenario_mode_is_ambiguous() {
    match parse_query("mode") {
        ParseOutcome::Ambiguous(choices) => {
            let ids: Vec<&str> = choices.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, vec!["femme", "homme", "chaussures"]);
        }
        other => panic!("expected ambiguous outcome, got {:?}", other),
    }
}

#[test]
fn scenario_meteo_is_off_topic() {
    assert_eq!(parse_query("météo demain"), ParseOutcome::OffTopic);
}

#[test]
fn scenario_pas_cher() {
    let p = parsed("pas cher");

    assert_eq!(p.price_range, Some(PriceRange::new(0, 50)));
    assert_eq!(p.category, None);
    assert_eq!(p.brand, None);
    assert!(p.colors.is_empty());
    assert!(p.sizes.is_empty());
    assert!(!p.fast_delivery);
    assert!((p.confidence - 0.1).abs() < 1e-9);
}

#[test]
fn scenario_budget_chip_raises_by_twenty_percent() {
    let mut criteria = FilterCriteria {
        price_range: PriceRange::new(0, 100),
        ..Default::default()
    };
    criteria.apply(&FilterPatch {
        price_range: Some(PriceRange::new(0, 120)),
        ..Default::default()
    });
    assert_eq!(criteria.price_range, PriceRange::new(0, 120));

    // The chip built for a [0,100] detection carries exactly that patch
    let p = parsed("jean budget 100");
    let budget = p.chips.iter().find(|c| c.id == "budget-increase").unwrap();
    assert_eq!(budget.filters.price_range, Some(PriceRange::new(0, 120)));
}

#[test]
fn off_topic_keywords_always_gate() {
    for query in [
        "quel temps fait-il, météo",
        "où est mon colis",
        "remboursement de ma robe",
        "recette de cuisine",
        "actualité politique",
    ] {
        assert_eq!(
            parse_query(query),
            ParseOutcome::OffTopic,
            "'{}' should be off-topic",
            query
        );
    }
}

#[test]
fn ambiguity_requires_zero_detections() {
    // Generic term but a color detected: normal parse
    assert!(matches!(parse_query("mode bleu"), ParseOutcome::Parsed(_)));

    // Two tokens, one is a brand: normal parse
    assert!(matches!(parse_query("castaluna"), ParseOutcome::Parsed(_)));

    // Three undetected tokens without a generic term: normal low-confidence parse
    assert!(matches!(
        parse_query("un truc original"),
        ParseOutcome::Parsed(_)
    ));

    // Two undetected tokens: ambiguous
    assert!(matches!(
        parse_query("truc original"),
        ParseOutcome::Ambiguous(_)
    ));
}

#[test]
fn detections_contain_no_duplicates() {
    let p = parsed("bleu bleue marine noir noire t40 40 taille40");

    let mut colors = p.colors.clone();
    colors.sort();
    colors.dedup();
    assert_eq!(colors.len(), p.colors.len());

    let mut sizes = p.sizes.clone();
    sizes.sort();
    sizes.dedup();
    assert_eq!(sizes.len(), p.sizes.len());
}

#[test]
fn explanation_uses_display_names_and_separator() {
    let p = parsed("jean bleu t40");
    assert!(p.explanation.starts_with("Recherche dans les jeans"));
    assert!(p.explanation.contains(" • "));
}

proptest! {
    #[test]
    fn prop_parse_never_panics(query in ".{0,120}") {
        let _ = parse_query(&query);
    }

    #[test]
    fn prop_confidence_in_unit_interval(query in "[a-zéèà0-9€<≤ -]{0,60}") {
        if let ParseOutcome::Parsed(p) = parse_query(&query) {
            prop_assert!((0.0..=1.0).contains(&p.confidence));
        }
    }

    #[test]
    fn prop_price_range_ordered(query in "[a-zéè0-9€<≤ -]{0,60}") {
        if let ParseOutcome::Parsed(p) = parse_query(&query) {
            if let Some(range) = p.price_range {
                prop_assert!(range.min <= range.max);
            }
        }
    }

    #[test]
    fn prop_at_most_four_chips(query in "[a-zéè0-9€<≤ -]{0,60}") {
        if let ParseOutcome::Parsed(p) = parse_query(&query) {
            prop_assert!(p.chips.len() <= 4);
        }
    }

    #[test]
    fn prop_parse_is_idempotent(query in "[a-zéèà0-9€<≤ -]{0,60}") {
        prop_assert_eq!(parse_query(&query), parse_query(&query));
    }
}
