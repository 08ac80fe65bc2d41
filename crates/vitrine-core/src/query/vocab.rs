//! Fixed French vocabulary tables
//!
//! Every table is an ordered slice of pairs: iteration order is part of
//! the contract (first-match wins for brands, first-seen wins ties for
//! categories), so none of these may become an unordered map.
//!
//! Diacritics are matched literally; tables carry accented and gendered
//! variants explicitly.

/// Surface token → canonical brand, first match wins
pub const BRAND_TOKENS: &[(&str, &str)] = &[
    ("levi's", "La Redoute Collections"),
    ("levis", "La Redoute Collections"),
    ("anne", "Anne Weyburn"),
    ("weyburn", "Anne Weyburn"),
    ("castaluna", "Castaluna"),
    ("redoute", "La Redoute Collections"),
    ("collections", "La Redoute Collections"),
];

/// Surface form → canonical color family
///
/// A base color expands to its whole family of shades, not a single value.
pub const COLOR_TOKENS: &[(&str, &[&str])] = &[
    ("blanc", &["Blanc"]),
    ("blanche", &["Blanc"]),
    ("blancs", &["Blanc"]),
    ("blanches", &["Blanc"]),
    ("noir", &["Noir"]),
    ("noire", &["Noir"]),
    ("noirs", &["Noir"]),
    ("noires", &["Noir"]),
    ("rouge", &["Rouge"]),
    ("rouges", &["Rouge"]),
    ("bleu", &["Bleu", "Bleu foncé", "Bleu clair", "Marine"]),
    ("bleue", &["Bleu", "Bleu foncé", "Bleu clair", "Marine"]),
    ("bleus", &["Bleu", "Bleu foncé", "Bleu clair", "Marine"]),
    ("bleues", &["Bleu", "Bleu foncé", "Bleu clair", "Marine"]),
    ("marine", &["Marine", "Bleu foncé"]),
    ("vert", &["Vert"]),
    ("verte", &["Vert"]),
    ("verts", &["Vert"]),
    ("vertes", &["Vert"]),
    ("gris", &["Gris"]),
    ("grise", &["Gris"]),
    ("bordeaux", &["Bordeaux"]),
    ("camel", &["Camel"]),
    ("beige", &["Beige"]),
    ("kaki", &["Kaki"]),
    ("multicolore", &["Multicolore"]),
];

/// The full blue family, reused by the color refinement chip
pub const BLUE_FAMILY: &[&str] = &["Bleu", "Bleu foncé", "Bleu clair", "Marine"];

/// Surface form → canonical sizes
///
/// Matched against whole word tokens, not substrings: single-letter keys
/// like "s" and "m" would otherwise fire inside words such as "chemise".
pub const SIZE_TOKENS: &[(&str, &[&str])] = &[
    ("t34", &["34"]),
    ("t36", &["36"]),
    ("t38", &["38"]),
    ("t40", &["40"]),
    ("t42", &["42"]),
    ("t44", &["44"]),
    ("taille34", &["34"]),
    ("taille36", &["36"]),
    ("taille38", &["38"]),
    ("taille40", &["40"]),
    ("taille42", &["42"]),
    ("taille44", &["44"]),
    ("xs", &["XS"]),
    ("s", &["S"]),
    ("m", &["M"]),
    ("l", &["L"]),
    ("xl", &["XL"]),
    ("xxl", &["XXL"]),
    ("34", &["34"]),
    ("36", &["36"]),
    ("38", &["38"]),
    ("40", &["40"]),
    ("42", &["42"]),
    ("44", &["44"]),
    ("petit", &["XS", "S"]),
    ("petite", &["XS", "S"]),
    ("moyen", &["M"]),
    ("moyenne", &["M"]),
    ("grand", &["L", "XL"]),
    ("grande", &["L", "XL"]),
];

/// Category key → surface keywords, iterated in declaration order
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("jean", &["jean", "jeans", "denim"]),
    ("robe", &["robe", "robes"]),
    ("chemise", &["chemise", "chemises"]),
    ("pull", &["pull", "pulls", "pullover", "pull-over"]),
    (
        "tshirt",
        &["tshirt", "t-shirt", "tee-shirt", "tee shirt", "tee", "shirt"],
    ),
    ("pantalon", &["pantalon", "pantalons"]),
    (
        "chaussure",
        &[
            "chaussure",
            "chaussures",
            "sneaker",
            "sneakers",
            "escarpin",
            "escarpins",
            "sandale",
            "sandales",
            "bottine",
            "bottines",
        ],
    ),
    ("veste", &["veste", "vestes", "blazer", "blazers", "manteau", "manteaux"]),
    ("jupe", &["jupe", "jupes"]),
    ("short", &["short", "shorts"]),
    ("cardigan", &["cardigan", "cardigans"]),
    ("sweat", &["sweat", "sweat-shirt", "sweatshirt", "hoodie", "capuche"]),
    ("combinaison", &["combinaison", "combinaisons"]),
];

/// Category key → plural display name for explanations
pub const CATEGORY_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("jean", "jeans"),
    ("robe", "robes"),
    ("chemise", "chemises"),
    ("pull", "pulls"),
    ("tshirt", "t-shirts"),
    ("pantalon", "pantalons"),
    ("chaussure", "chaussures"),
    ("veste", "vestes"),
    ("jupe", "jupes"),
    ("short", "shorts"),
];

/// Urgency and speed keywords toggling the fast-delivery detection
pub const DELIVERY_KEYWORDS: &[&str] =
    &["rapide", "24h", "express", "livraison rapide", "urgent", "vite"];

/// Non-shopping keywords: any hit aborts extraction entirely
pub const OFF_TOPIC_KEYWORDS: &[&str] = &[
    "météo",
    "weather",
    "température",
    "pluie",
    "soleil",
    "commande",
    "suivi",
    "tracking",
    "colis",
    "retour",
    "remboursement",
    "échange",
    "sav",
    "horaires",
    "magasin",
    "adresse",
    "téléphone",
    "recette",
    "cuisine",
    "restaurant",
    "actualité",
    "news",
    "politique",
];

/// Generic vocabulary that makes a detection-free query ambiguous
pub const GENERIC_TERMS: &[&str] = &["vêtement", "habit", "mode", "style", "tendance"];

/// Lookup the display name for a category key
pub fn category_display_name(key: &str) -> &str {
    CATEGORY_DISPLAY_NAMES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
        .unwrap_or(key)
}

/// Lookup the keyword set for a category key
///
/// Unknown keys fall back to the key itself as the only keyword.
pub fn category_keywords(key: &str) -> Vec<&str> {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, keywords)| keywords.to_vec())
        .unwrap_or_else(|| vec![key])
}
