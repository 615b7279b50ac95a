use super::normalizer::normalize;
use super::similarity::lcs_ratio;
use crate::catalog::{Catalog, Product};
use serde::Serialize;

/// Score for exact equality between a normalized query and a catalog name.
pub const EXACT_SCORE: f64 = 1.0;
/// Score when the normalized query is a non-empty substring of a catalog
/// name. Kept below [`EXACT_SCORE`] so exact hits remain distinguishable.
pub const SUBSTRING_SCORE: f64 = 0.99;
/// Minimum similarity a fuzzy candidate must reach to count as matched.
pub const DEFAULT_THRESHOLD: f64 = 0.55;

/// Outcome of resolving one user query against the catalog. Immutable once
/// created; the owning session appends these across "add item" interactions.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub query: String,
    pub product: Option<Product>,
    pub score: f64,
    pub matched: bool,
}

impl MatchResult {
    fn unmatched(query: &str) -> Self {
        Self {
            query: query.to_string(),
            product: None,
            score: 0.0,
            matched: false,
        }
    }

    fn hit(query: &str, product: &Product, score: f64) -> Self {
        Self {
            query: query.to_string(),
            product: Some(product.clone()),
            score,
            matched: true,
        }
    }
}

/// Resolves a query to the single best catalog product.
///
/// Passes run in order and short-circuit: exact equality (score 1.0) and
/// substring containment (0.99) are checked together per name in catalog
/// load order, so the first product hit wins — load order is the documented
/// tie-break among multiple substring candidates, not an accident. Only when
/// no name contains the query does the similarity pass scan the whole
/// catalog, keeping the first-seen maximum. Below `threshold` (or for an
/// empty query) the result is unmatched with score 0.0. Deterministic for a
/// fixed catalog.
pub fn match_query(query: &str, catalog: &Catalog, threshold: f64) -> MatchResult {
    let needle = normalize(query);
    if needle.is_empty() {
        return MatchResult::unmatched(query);
    }

    for product in catalog.products() {
        for name in product.names() {
            let haystack = normalize(name);
            if haystack == needle {
                return MatchResult::hit(query, product, EXACT_SCORE);
            }
            if haystack.contains(&needle) {
                return MatchResult::hit(query, product, SUBSTRING_SCORE);
            }
        }
    }

    let mut best: Option<(&Product, f64)> = None;
    for product in catalog.products() {
        for name in product.names() {
            let score = lcs_ratio(&needle, &normalize(name));
            // Strictly greater keeps the first-seen product on score ties.
            if score > best.map_or(0.0, |(_, current)| current) {
                best = Some((product, score));
            }
        }
    }

    match best {
        Some((product, score)) if score >= threshold => MatchResult::hit(query, product, score),
        _ => MatchResult::unmatched(query),
    }
}
