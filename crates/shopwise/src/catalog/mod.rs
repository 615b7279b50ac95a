mod loader;
mod staples;

pub use loader::{load_data_dir, CatalogError};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supermarket chains supported by the comparison.
///
/// Declaration order is the canonical store-list order: it drives the
/// tie-break in [`crate::basket::find_cheapest`] and the row order of the
/// CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreId {
    Kaufland,
    Lidl,
    Aldi,
}

impl StoreId {
    pub const fn ordered() -> [Self; 3] {
        [Self::Kaufland, Self::Lidl, Self::Aldi]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Kaufland => "Kaufland",
            Self::Lidl => "Lidl",
            Self::Aldi => "Aldi",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Kaufland => "kaufland",
            Self::Lidl => "lidl",
            Self::Aldi => "aldi",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "kaufland" => Some(Self::Kaufland),
            "lidl" => Some(Self::Lidl),
            "aldi" => Some(Self::Aldi),
            _ => None,
        }
    }
}

/// One sellable item, unified from whatever schema its source used.
///
/// A store absent from `prices` means the product is not sold there; that is
/// different from a literal zero price and the aggregator never treats the
/// two the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub canonical_name: String,
    #[serde(default)]
    pub alt_names: Vec<String>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub prices: BTreeMap<StoreId, f64>,
}

impl Product {
    /// All searchable names, canonical first, then synonyms in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical_name.as_str())
            .chain(self.alt_names.iter().map(String::as_str))
    }

    pub fn price_at(&self, store: StoreId) -> Option<f64> {
        self.prices.get(&store).copied()
    }
}

/// Ordered union of products from every source.
///
/// Load order is a first-class tie-break for the matcher, so the catalog
/// preserves insertion order and performs no de-duplication. Overlapping
/// sources can therefore produce duplicate canonical names; the first-loaded
/// record wins every comparison (known limitation, out of scope to redesign).
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in list of German staple items with per-store prices,
    /// used whenever no user-provided data files are available.
    pub fn staples() -> Self {
        Self {
            products: staples::staple_products(),
        }
    }

    /// Appends the staple items after whatever was loaded so far. User data
    /// loads first and therefore wins matcher tie-breaks.
    pub fn append_staples(&mut self) {
        self.products.extend(staples::staple_products());
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_keys_round_trip() {
        for store in StoreId::ordered() {
            assert_eq!(StoreId::from_key(store.key()), Some(store));
        }
        assert_eq!(StoreId::from_key(" LIDL "), Some(StoreId::Lidl));
        assert_eq!(StoreId::from_key("rewe"), None);
    }

    #[test]
    fn product_names_list_canonical_first() {
        let product = Product {
            canonical_name: "milch 1l".to_string(),
            alt_names: vec!["milk".to_string(), "vollmilch".to_string()],
            unit: "1 l".to_string(),
            category: None,
            prices: BTreeMap::new(),
        };

        let names: Vec<&str> = product.names().collect();
        assert_eq!(names, vec!["milch 1l", "milk", "vollmilch"]);
    }

    #[test]
    fn missing_store_price_is_not_zero() {
        let mut prices = BTreeMap::new();
        prices.insert(StoreId::Lidl, 0.0);
        let product = Product {
            canonical_name: "gurke".to_string(),
            alt_names: Vec::new(),
            unit: "stk".to_string(),
            category: None,
            prices,
        };

        assert_eq!(product.price_at(StoreId::Lidl), Some(0.0));
        assert_eq!(product.price_at(StoreId::Aldi), None);
    }

    #[test]
    fn staples_cover_all_stores() {
        let catalog = Catalog::staples();
        assert_eq!(catalog.len(), 51);
        for product in catalog.products() {
            assert!(!product.canonical_name.is_empty());
            for store in StoreId::ordered() {
                assert!(
                    product.price_at(store).is_some(),
                    "staple {} missing {} price",
                    product.canonical_name,
                    store.key()
                );
            }
        }
    }
}
