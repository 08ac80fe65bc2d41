//! Terminal output formatter

use vitrine_core::{CatalogItem, ParseOutcome, ParsedQuery};

pub fn format_outcome(outcome: &ParseOutcome) -> String {
    match outcome {
        ParseOutcome::Parsed(result) => format_parsed(result),
        ParseOutcome::Ambiguous(choices) => {
            let mut output = String::from("Votre recherche est trop générale. Choisissez :\n");
            for choice in choices {
                output.push_str(&format!(
                    "  [{}] {} — {}\n",
                    choice.id, choice.label, choice.description
                ));
            }
            output
        }
        ParseOutcome::OffTopic => {
            "Cette recherche ne concerne pas le catalogue. Essayez la recherche classique.\n"
                .to_string()
        }
    }
}

fn format_parsed(result: &ParsedQuery) -> String {
    let confidence_pct = (result.confidence * 100.0) as u32;
    let mut output = format!("{:>3}% {}\n", confidence_pct, result.explanation);

    if !result.chips.is_empty() {
        let labels: Vec<&str> = result.chips.iter().map(|c| c.label.as_str()).collect();
        output.push_str(&format!("     Affiner : {}\n", labels.join(" | ")));
    }

    output
}

pub fn format_items(items: &[CatalogItem]) -> String {
    if items.is_empty() {
        return "Aucun article ne correspond.\n".to_string();
    }

    let mut output = String::new();
    for item in items {
        let delivery = if item.fast_delivery { " [24h]" } else { "" };
        let stock = if item.in_stock { "" } else { " (épuisé)" };
        output.push_str(&format!(
            "{:>7.2}€  {} — {}{}{}\n",
            item.price, item.name, item.brand, delivery, stock
        ));
    }
    output
}
