use super::aggregate::{aggregate, StoreAggregate};
use super::matcher::{match_query, MatchResult};
use super::tokenizer::tokenize;
use crate::catalog::{Catalog, StoreId};
use std::collections::BTreeMap;

/// Accumulated match results for one comparison session.
///
/// The session is plain data owned by the caller: the core keeps no state
/// between calls, and each "add one more item" interaction appends to the
/// caller's session before totals are recomputed over the full result set.
#[derive(Debug)]
pub struct BasketSession {
    threshold: f64,
    results: Vec<MatchResult>,
}

impl BasketSession {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            results: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Tokenizes raw list text and matches every token, appending to the
    /// session. Returns how many queries were added; zero signals empty
    /// input for the caller to surface as a warning.
    pub fn add_items(&mut self, raw: &str, catalog: &Catalog) -> usize {
        let queries = tokenize(raw);
        let added = queries.len();
        for query in queries {
            self.results.push(match_query(&query, catalog, self.threshold));
        }
        added
    }

    /// Matches a single already-tokenized query and appends it.
    pub fn add_query(&mut self, query: &str, catalog: &Catalog) -> &MatchResult {
        self.results.push(match_query(query, catalog, self.threshold));
        let last = self.results.len() - 1;
        &self.results[last]
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.results.iter().filter(|result| result.matched).count()
    }

    /// Queries that resolved to no product, in entry order. A normal
    /// reportable outcome, not an error.
    pub fn unmatched_queries(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|result| !result.matched)
            .map(|result| result.query.as_str())
            .collect()
    }

    /// Per-store totals over the whole session, recomputed from scratch.
    pub fn aggregate(&self) -> BTreeMap<StoreId, StoreAggregate> {
        aggregate(&self.results)
    }
}
