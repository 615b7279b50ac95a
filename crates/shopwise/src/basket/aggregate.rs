use super::matcher::MatchResult;
use crate::catalog::StoreId;
use serde::Serialize;
use std::collections::BTreeMap;

/// One matched query priced at a particular store, in match order.
#[derive(Debug, Clone, Serialize)]
pub struct LineItem {
    pub query: String,
    pub product_name: String,
    pub price: f64,
}

/// Basket view for a single store: total plus itemized breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct StoreAggregate {
    pub store: StoreId,
    pub store_label: &'static str,
    pub total: f64,
    pub line_items: Vec<LineItem>,
}

impl StoreAggregate {
    pub fn item_count(&self) -> usize {
        self.line_items.len()
    }
}

/// Folds the full result set into per-store totals.
///
/// Always recomputed from scratch; aggregates are never mutated
/// incrementally, so repeated "add item" interactions cannot drift.
/// Unmatched results contribute nothing, and a product without a price entry
/// for a store contributes nothing to that store — "not sold there" is never
/// folded in as zero.
pub fn aggregate(results: &[MatchResult]) -> BTreeMap<StoreId, StoreAggregate> {
    let mut aggregates = BTreeMap::new();

    for store in StoreId::ordered() {
        let mut total = 0.0;
        let mut line_items = Vec::new();

        for result in results {
            let Some(product) = result.product.as_ref().filter(|_| result.matched) else {
                continue;
            };
            let Some(price) = product.price_at(store) else {
                continue;
            };
            total += price;
            line_items.push(LineItem {
                query: result.query.clone(),
                product_name: product.canonical_name.clone(),
                price,
            });
        }

        aggregates.insert(
            store,
            StoreAggregate {
                store,
                store_label: store.label(),
                total,
                line_items,
            },
        );
    }

    aggregates
}

/// Store with the lowest total among stores that priced at least one item.
///
/// Ties resolve to the earliest store in [`StoreId::ordered`], reproducibly.
/// `None` means no store priced anything, i.e. no comparison is possible —
/// callers must not substitute an arbitrary default.
pub fn find_cheapest(aggregates: &BTreeMap<StoreId, StoreAggregate>) -> Option<StoreId> {
    let mut cheapest: Option<(StoreId, f64)> = None;

    for store in StoreId::ordered() {
        let Some(aggregate) = aggregates.get(&store) else {
            continue;
        };
        if aggregate.line_items.is_empty() {
            continue;
        }
        match cheapest {
            Some((_, best_total)) if aggregate.total >= best_total => {}
            _ => cheapest = Some((store, aggregate.total)),
        }
    }

    cheapest.map(|(store, _)| store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn matched(query: &str, prices: &[(StoreId, f64)]) -> MatchResult {
        let product = Product {
            canonical_name: format!("{query} (catalog)"),
            alt_names: Vec::new(),
            unit: String::new(),
            category: None,
            prices: prices.iter().copied().collect(),
        };
        MatchResult {
            query: query.to_string(),
            product: Some(product),
            score: 0.99,
            matched: true,
        }
    }

    fn unmatched(query: &str) -> MatchResult {
        MatchResult {
            query: query.to_string(),
            product: None,
            score: 0.0,
            matched: false,
        }
    }

    #[test]
    fn totals_sum_only_stores_that_price_the_item() {
        let results = vec![
            matched("milk", &[(StoreId::Kaufland, 1.0), (StoreId::Lidl, 2.0)]),
            matched("bread", &[(StoreId::Kaufland, 0.5)]),
        ];
        let aggregates = aggregate(&results);

        let kaufland = &aggregates[&StoreId::Kaufland];
        assert!((kaufland.total - 1.5).abs() < 1e-9);
        assert_eq!(kaufland.item_count(), 2);

        let lidl = &aggregates[&StoreId::Lidl];
        assert!((lidl.total - 2.0).abs() < 1e-9);
        assert_eq!(lidl.item_count(), 1);
        assert_eq!(lidl.line_items[0].query, "milk");
    }

    #[test]
    fn missing_store_price_contributes_nothing() {
        let results = vec![matched("milk", &[(StoreId::Kaufland, 1.0), (StoreId::Lidl, 2.0)])];
        let aggregates = aggregate(&results);

        let aldi = &aggregates[&StoreId::Aldi];
        assert_eq!(aldi.item_count(), 0);
        assert_eq!(aldi.total, 0.0);
        // Absent at Aldi means Aldi cannot win the comparison, which is not
        // the same as Aldi selling the item for free.
        assert_ne!(find_cheapest(&aggregates), Some(StoreId::Aldi));
    }

    #[test]
    fn zero_price_is_a_real_line_item() {
        let results = vec![matched("promo", &[(StoreId::Aldi, 0.0)])];
        let aggregates = aggregate(&results);
        assert_eq!(aggregates[&StoreId::Aldi].item_count(), 1);
        assert_eq!(find_cheapest(&aggregates), Some(StoreId::Aldi));
    }

    #[test]
    fn unmatched_results_are_ignored() {
        let results = vec![unmatched("unicorn food"), matched("brot", &[(StoreId::Lidl, 1.39)])];
        let aggregates = aggregate(&results);
        assert_eq!(aggregates[&StoreId::Lidl].item_count(), 1);
        assert_eq!(aggregates[&StoreId::Kaufland].item_count(), 0);
    }

    #[test]
    fn line_items_preserve_match_order() {
        let results = vec![
            matched("brot", &[(StoreId::Lidl, 1.39)]),
            matched("milch", &[(StoreId::Lidl, 0.99)]),
            matched("brot", &[(StoreId::Lidl, 1.39)]),
        ];
        let queries: Vec<String> = aggregate(&results)[&StoreId::Lidl]
            .line_items
            .iter()
            .map(|item| item.query.clone())
            .collect();
        assert_eq!(queries, vec!["brot", "milch", "brot"]);
    }

    #[test]
    fn cheapest_tie_breaks_on_store_order() {
        let results = vec![matched("milk", &[(StoreId::Lidl, 1.0), (StoreId::Aldi, 1.0)])];
        let aggregates = aggregate(&results);
        for _ in 0..5 {
            assert_eq!(find_cheapest(&aggregates), Some(StoreId::Lidl));
        }
    }

    #[test]
    fn no_line_items_anywhere_means_no_comparison() {
        let aggregates = aggregate(&[unmatched("nothing")]);
        assert_eq!(find_cheapest(&aggregates), None);
    }
}
