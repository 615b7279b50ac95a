use super::aggregate::{find_cheapest, StoreAggregate};
use crate::catalog::StoreId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Deterministic, rule-based digest of one comparison.
///
/// This is the fallback narrative: an optional LLM collaborator may rewrite
/// the same structured data into friendlier prose, but the comparison is
/// complete without it.
#[derive(Debug, Clone, Serialize)]
pub struct BasketSummary {
    pub cheapest: Option<StoreId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheapest_label: Option<&'static str>,
    pub lines: Vec<String>,
}

pub fn summarize(
    aggregates: &BTreeMap<StoreId, StoreAggregate>,
    unmatched: &[&str],
) -> BasketSummary {
    let cheapest = find_cheapest(aggregates);
    let mut lines = Vec::new();

    for store in StoreId::ordered() {
        let Some(aggregate) = aggregates.get(&store) else {
            continue;
        };
        if aggregate.line_items.is_empty() {
            lines.push(format!("{}: no matching items", store.label()));
        } else {
            lines.push(format!(
                "{}: {:.2} € for {} item{}",
                store.label(),
                aggregate.total,
                aggregate.item_count(),
                if aggregate.item_count() == 1 { "" } else { "s" }
            ));
        }
    }

    match cheapest {
        Some(store) => {
            let aggregate = &aggregates[&store];
            lines.push(format!(
                "Cheapest overall: {} at {:.2} € ({} matched item{})",
                store.label(),
                aggregate.total,
                aggregate.item_count(),
                if aggregate.item_count() == 1 { "" } else { "s" }
            ));
        }
        None => {
            lines.push("No store matched any item; comparison is not possible.".to_string());
        }
    }

    if !unmatched.is_empty() {
        lines.push(format!("Not found in any store: {}", unmatched.join(", ")));
    }

    BasketSummary {
        cheapest,
        cheapest_label: cheapest.map(StoreId::label),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::{aggregate, MatchResult};
    use crate::catalog::Product;

    fn milch_result() -> MatchResult {
        let product = Product {
            canonical_name: "milch 1l".to_string(),
            alt_names: Vec::new(),
            unit: "1 l".to_string(),
            category: None,
            prices: [
                (StoreId::Kaufland, 1.05),
                (StoreId::Lidl, 0.99),
                (StoreId::Aldi, 1.09),
            ]
            .into_iter()
            .collect(),
        };
        MatchResult {
            query: "milch".to_string(),
            product: Some(product),
            score: 0.99,
            matched: true,
        }
    }

    #[test]
    fn summary_names_the_cheapest_store() {
        let aggregates = aggregate(&[milch_result()]);
        let summary = summarize(&aggregates, &[]);
        assert_eq!(summary.cheapest, Some(StoreId::Lidl));
        assert!(summary
            .lines
            .iter()
            .any(|line| line.contains("Cheapest overall: Lidl at 0.99 €")));
    }

    #[test]
    fn summary_reports_unmatched_items() {
        let aggregates = aggregate(&[milch_result()]);
        let summary = summarize(&aggregates, &["dragonfruit", "unicorn food"]);
        assert!(summary
            .lines
            .iter()
            .any(|line| line.contains("dragonfruit, unicorn food")));
    }

    #[test]
    fn empty_comparison_is_called_out() {
        let aggregates = aggregate(&[]);
        let summary = summarize(&aggregates, &[]);
        assert_eq!(summary.cheapest, None);
        assert!(summary
            .lines
            .iter()
            .any(|line| line.contains("comparison is not possible")));
    }
}
