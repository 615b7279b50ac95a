use super::aggregate::StoreAggregate;
use crate::catalog::StoreId;
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize basket rows: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV writer produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Tabular serialization of the aggregates with columns `store,item,price`.
///
/// A pure function of the aggregates: stores appear in canonical order, line
/// items in match order, prices with two decimals. Where the file lands is
/// the caller's business.
pub fn aggregates_to_csv(
    aggregates: &BTreeMap<StoreId, StoreAggregate>,
) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["store", "item", "price"])?;

    for store in StoreId::ordered() {
        let Some(aggregate) = aggregates.get(&store) else {
            continue;
        };
        for item in &aggregate.line_items {
            let price = format!("{:.2}", item.price);
            writer.write_record([store.key(), item.query.as_str(), price.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Csv(csv::Error::from(err.into_error())))?;
    Ok(String::from_utf8(bytes)?)
}
