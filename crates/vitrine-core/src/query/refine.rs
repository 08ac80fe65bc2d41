//! Refinement chips and ambiguity choices

use super::vocab::BLUE_FAMILY;
use crate::filters::{FilterCriteria, FilterPatch, PriceRange};
use crate::MAX_REFINEMENT_CHIPS;
use serde::{Deserialize, Serialize};

/// Which filter a refinement chip touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipKind {
    Budget,
    Color,
    Size,
    Delivery,
    Brand,
}

/// A one-click follow-up action: a label plus a partial filter patch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementChip {
    pub id: String,
    pub label: String,
    pub kind: ChipKind,
    pub filters: FilterPatch,
}

/// A coarse category preset offered when the query carries no signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbiguityChoice {
    pub id: String,
    pub label: String,
    pub description: String,
    pub filters: FilterCriteria,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build up to four refinement chips from what was and was not detected
///
/// Chips are assembled in a fixed order (budget, color, size, delivery,
/// brand) and then truncated, so the brand chip is the first to drop
/// when everything else applies.
pub fn build_refinement_chips(
    category: Option<&str>,
    colors: &[String],
    sizes: &[String],
    price_range: Option<PriceRange>,
    fast_delivery: bool,
) -> Vec<RefinementChip> {
    let mut chips: Vec<RefinementChip> = Vec::new();

    match price_range {
        None => chips.push(RefinementChip {
            id: "budget-50".to_string(),
            label: "Budget -50€".to_string(),
            kind: ChipKind::Budget,
            filters: FilterPatch {
                price_range: Some(PriceRange::up_to(50)),
                ..Default::default()
            },
        }),
        Some(range) => {
            let raised = (range.max as f64 * 1.2).round() as u32;
            chips.push(RefinementChip {
                id: "budget-increase".to_string(),
                label: format!("Budget +20% ({}€)", raised),
                kind: ChipKind::Budget,
                filters: FilterPatch {
                    price_range: Some(PriceRange::new(range.min, raised)),
                    ..Default::default()
                },
            });
        }
    }

    match colors.first() {
        Some(first) if first.contains("Bleu") => chips.push(RefinementChip {
            id: "color-blue-variants".to_string(),
            label: "Tous les bleus".to_string(),
            kind: ChipKind::Color,
            filters: FilterPatch {
                colors: Some(strings(BLUE_FAMILY)),
                ..Default::default()
            },
        }),
        Some(first) if first.as_str() == "Noir" || first.as_str() == "Blanc" => {
            chips.push(RefinementChip {
                id: "color-neutral".to_string(),
                label: "Couleurs neutres".to_string(),
                kind: ChipKind::Color,
                filters: FilterPatch {
                    colors: Some(strings(&["Blanc", "Noir", "Gris", "Beige"])),
                    ..Default::default()
                },
            })
        }
        // A detected non-neutral, non-blue color gets no color chip
        Some(_) => {}
        None => chips.push(RefinementChip {
            id: "color-popular".to_string(),
            label: "Couleurs populaires".to_string(),
            kind: ChipKind::Color,
            filters: FilterPatch {
                colors: Some(strings(&["Noir", "Blanc", "Bleu", "Rouge"])),
                ..Default::default()
            },
        }),
    }

    if !sizes.is_empty() {
        let has_numeric = sizes.iter().any(|s| s.chars().all(|c| c.is_ascii_digit()));
        if has_numeric {
            chips.push(RefinementChip {
                id: "size-range".to_string(),
                label: "Tailles 36-42".to_string(),
                kind: ChipKind::Size,
                filters: FilterPatch {
                    sizes: Some(strings(&["36", "38", "40", "42"])),
                    ..Default::default()
                },
            });
        } else {
            chips.push(RefinementChip {
                id: "size-standard".to_string(),
                label: "Tailles S-L".to_string(),
                kind: ChipKind::Size,
                filters: FilterPatch {
                    sizes: Some(strings(&["S", "M", "L"])),
                    ..Default::default()
                },
            });
        }
    }

    if !fast_delivery {
        chips.push(RefinementChip {
            id: "fast-delivery".to_string(),
            label: "Livraison 24h".to_string(),
            kind: ChipKind::Delivery,
            filters: FilterPatch {
                fast_delivery_only: Some(true),
                ..Default::default()
            },
        });
    }

    if category.is_none() || matches!(category, Some("jean") | Some("robe")) {
        chips.push(RefinementChip {
            id: "popular-brand".to_string(),
            label: "Anne Weyburn".to_string(),
            kind: ChipKind::Brand,
            filters: FilterPatch {
                brands: Some(strings(&["Anne Weyburn"])),
                ..Default::default()
            },
        });
    }

    chips.truncate(MAX_REFINEMENT_CHIPS);
    chips
}

/// The three fixed presets offered for an ambiguous query
///
/// Deliberately independent of the query text: whichever generic term
/// triggered the resolver, the choices are the same.
pub fn build_ambiguity_choices() -> Vec<AmbiguityChoice> {
    vec![
        AmbiguityChoice {
            id: "femme".to_string(),
            label: "Mode Femme".to_string(),
            description: "Vêtements et accessoires pour femme".to_string(),
            filters: FilterCriteria {
                sizes: strings(&["XS", "S", "M", "L", "XL"]),
                ..Default::default()
            },
        },
        AmbiguityChoice {
            id: "homme".to_string(),
            label: "Mode Homme".to_string(),
            description: "Vêtements et accessoires pour homme".to_string(),
            filters: FilterCriteria {
                sizes: strings(&["S", "M", "L", "XL", "XXL"]),
                ..Default::default()
            },
        },
        AmbiguityChoice {
            id: "chaussures".to_string(),
            label: "Chaussures".to_string(),
            description: "Chaussures pour tous".to_string(),
            filters: FilterCriteria {
                sizes: strings(&["36", "37", "38", "39", "40", "41", "42", "43"]),
                ..Default::default()
            },
        },
    ]
}
