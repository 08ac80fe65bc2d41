//! Vitrine Core Library
//!
//! Rule-based understanding of free-form French shopping queries.
//!
//! # Features
//! - Attribute extraction (category, brand, colors, sizes, price, delivery)
//! - Off-topic detection with a hard gate before extraction
//! - Ambiguity resolution for queries too vague to filter
//! - Confidence scoring and human-readable explanations
//! - Refinement chips (one-click partial filter patches)
//! - Filter application over an in-memory catalog
//!
//! Every entry point is a pure, synchronous function of its inputs: no
//! shared mutable state, no I/O outside catalog loading, safely reentrant.

pub mod apply;
pub mod catalog;
pub mod error;
pub mod filters;
pub mod query;

pub use apply::apply_parsed;
pub use catalog::{catalog_from_json, load_catalog, CatalogItem};
pub use error::{Error, Result, VitrineError};
pub use filters::{filter_catalog, FilterCriteria, FilterPatch, PriceRange};
pub use query::{
    build_ambiguity_choices, build_refinement_chips, normalize, parse_query, AmbiguityChoice,
    ChipKind, ParseOutcome, ParsedQuery, RefinementChip,
};

/// Upper bound of the default price range, in euros
pub const DEFAULT_PRICE_CEILING: u32 = 1000;

/// Maximum number of refinement chips attached to a parse
pub const MAX_REFINEMENT_CHIPS: usize = 4;
