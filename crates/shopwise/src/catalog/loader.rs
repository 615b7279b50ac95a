use super::{Catalog, Product, StoreId};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

// Field lookup order for the differently-shaped source exports. First key
// present in a record wins.
const NAME_KEYS: &[&str] = &["canonical_name", "name", "title", "product_name", "article"];
const PRICE_KEYS: &[&str] = &["price_now", "price", "current_price"];
const UNIT_KEYS: &[&str] = &["unit", "weight_or_unit", "packaging", "size"];
const CATEGORY_KEYS: &[&str] = &["category", "department"];
const ALT_NAME_KEYS: &[&str] = &["alt_names", "synonyms"];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog source {path} is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog source {path} must be a JSON array of product objects")]
    NotAnArray { path: String },
}

/// File name each store's scraper export is expected under.
const fn data_file(store: StoreId) -> &'static str {
    match store {
        StoreId::Kaufland => "kaufland.json",
        StoreId::Lidl => "lidl_products.json",
        StoreId::Aldi => "aldi_products.json",
    }
}

/// Loads every per-store JSON export found in `dir` into one catalog, in
/// canonical store order.
///
/// A missing file simply means no user data for that store. An unreadable or
/// malformed file is an error for the caller to surface; the service layer
/// degrades to the built-in staples instead of refusing to start. Records
/// without a usable name and malformed price fields are skipped, never the
/// whole load.
pub fn load_data_dir<P: AsRef<Path>>(dir: P) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();

    for store in StoreId::ordered() {
        let path = dir.as_ref().join(data_file(store));
        if !path.exists() {
            continue;
        }
        let display_path = path.display().to_string();

        let raw = std::fs::read_to_string(&path).map_err(|source| CatalogError::Io {
            path: display_path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
            path: display_path.clone(),
            source,
        })?;
        let records = value
            .as_array()
            .ok_or(CatalogError::NotAnArray { path: display_path.clone() })?;

        let before = catalog.len();
        for record in records {
            match product_from_value(store, record) {
                Some(product) => catalog.push(product),
                None => warn!(store = store.key(), "skipping catalog record without a usable name"),
            }
        }
        debug!(
            store = store.key(),
            path = %display_path,
            records = catalog.len() - before,
            "loaded catalog source"
        );
    }

    Ok(catalog)
}

/// Converts one raw source record into the uniform [`Product`] schema via the
/// fixed field fallback order. Returns `None` when no name field yields a
/// non-empty string.
pub(crate) fn product_from_value(store: StoreId, value: &Value) -> Option<Product> {
    let record = value.as_object()?;
    let canonical_name = first_string(record, NAME_KEYS)?;

    let mut prices = BTreeMap::new();
    if let Some(price) = first_price(record, PRICE_KEYS) {
        prices.insert(store, price);
    }

    Some(Product {
        canonical_name,
        alt_names: alt_names(record),
        unit: first_string(record, UNIT_KEYS).unwrap_or_default(),
        category: first_string(record, CATEGORY_KEYS),
        prices,
    })
}

fn first_string(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(text) = record.get(*key).and_then(as_clean_string) {
            return Some(text);
        }
    }
    None
}

/// First price key that carries a value decides the price; if that value does
/// not parse the price is treated as absent for this store, not as zero.
fn first_price(record: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    for key in keys {
        match record.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(raw)) if raw.trim().is_empty() => continue,
            Some(value) => return parse_price(value),
        }
    }
    None
}

fn parse_price(value: &Value) -> Option<f64> {
    let raw = match value {
        Value::Number(number) => return number.as_f64().filter(|price| price.is_finite() && *price >= 0.0),
        Value::String(raw) => raw,
        _ => return None,
    };

    let cleaned = raw.replace('€', "").replace(',', ".");
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

fn alt_names(record: &Map<String, Value>) -> Vec<String> {
    for key in ALT_NAME_KEYS {
        if let Some(Value::Array(values)) = record.get(*key) {
            return values.iter().filter_map(as_clean_string).collect();
        }
    }
    Vec::new()
}

fn as_clean_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_field_fallback_order_is_respected() {
        let record = json!({ "title": "Bio Eier", "product_name": "ignored", "price_now": "2,49 €" });
        let product = product_from_value(StoreId::Aldi, &record).expect("record converts");
        assert_eq!(product.canonical_name, "Bio Eier");
        assert_eq!(product.price_at(StoreId::Aldi), Some(2.49));
        assert_eq!(product.price_at(StoreId::Lidl), None);
    }

    #[test]
    fn price_strips_currency_and_comma_separator() {
        assert_eq!(parse_price(&json!("1,05 €")), Some(1.05));
        assert_eq!(parse_price(&json!("€0,39")), Some(0.39));
        assert_eq!(parse_price(&json!(2.19)), Some(2.19));
        assert_eq!(parse_price(&json!("free")), None);
        assert_eq!(parse_price(&json!(-1.0)), None);
    }

    #[test]
    fn malformed_price_is_absent_not_zero() {
        let record = json!({ "name": "gurke", "price_now": "n/a", "price": "0,69" });
        let product = product_from_value(StoreId::Lidl, &record).expect("record converts");
        // price_now was present but unparseable, so the record carries no
        // Lidl price at all; later keys are not consulted.
        assert!(product.prices.is_empty());
    }

    #[test]
    fn empty_price_value_falls_through_to_next_key() {
        let record = json!({ "name": "brot", "price_now": "", "price": "1,39" });
        let product = product_from_value(StoreId::Lidl, &record).expect("record converts");
        assert_eq!(product.price_at(StoreId::Lidl), Some(1.39));
    }

    #[test]
    fn nameless_record_is_rejected() {
        assert!(product_from_value(StoreId::Kaufland, &json!({ "price": "1,00" })).is_none());
        assert!(product_from_value(StoreId::Kaufland, &json!({ "name": "  " })).is_none());
        assert!(product_from_value(StoreId::Kaufland, &json!("just a string")).is_none());
    }

    #[test]
    fn alt_names_and_category_are_optional() {
        let record = json!({
            "product_name": "milch 1l",
            "synonyms": ["milk", "", 42],
            "department": "dairy",
            "weight_or_unit": "1 l",
            "current_price": "1.09"
        });
        let product = product_from_value(StoreId::Kaufland, &record).expect("record converts");
        assert_eq!(product.alt_names, vec!["milk".to_string(), "42".to_string()]);
        assert_eq!(product.category.as_deref(), Some("dairy"));
        assert_eq!(product.unit, "1 l");
    }

    #[test]
    fn missing_data_dir_yields_empty_catalog() {
        let catalog = load_data_dir("./does-not-exist").expect("missing files are not an error");
        assert!(catalog.is_empty());
    }
}
