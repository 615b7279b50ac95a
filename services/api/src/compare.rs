use crate::infra::{load_catalog, CatalogSource};
use clap::Args;
use shopwise::basket::{aggregates_to_csv, summarize, BasketSession, StoreAggregate};
use shopwise::catalog::{Catalog, StoreId};
use shopwise::config::AppConfig;
use shopwise::error::AppError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Sample shopping list used by the demo subcommand.
const DEMO_LIST: &str = "milch, eier, paprika, nutella, waschmittel";

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Shopping list items; quote comma-separated lists ("milch, eier") or
    /// pass one item per argument
    pub(crate) items: Vec<String>,
    /// Directory holding per-store JSON exports (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Similarity threshold override in (0, 1]
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Write the store,item,price CSV export to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print each store's itemized breakdown
    #[arg(long)]
    pub(crate) list_items: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Similarity threshold override in (0, 1]
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Print each store's itemized breakdown
    #[arg(long)]
    pub(crate) list_items: bool,
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let CompareArgs {
        items,
        data_dir,
        threshold,
        csv,
        list_items,
    } = args;

    let config = AppConfig::load()?;
    let threshold = resolve_threshold(threshold, config.matcher.threshold)?;
    let data_dir = data_dir.unwrap_or(config.catalog.data_dir);
    let (catalog, source) = load_catalog(&data_dir);

    let text = items.join(" ");
    compare_and_render(&text, &catalog, source, threshold, list_items, csv.as_deref())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let threshold = resolve_threshold(args.threshold, config.matcher.threshold)?;

    println!("ShopWise demo: comparing \"{DEMO_LIST}\" against the built-in staples\n");
    compare_and_render(
        DEMO_LIST,
        &Catalog::staples(),
        CatalogSource::Staples,
        threshold,
        args.list_items,
        None,
    )
}

fn resolve_threshold(override_value: Option<f64>, configured: f64) -> Result<f64, AppError> {
    match override_value {
        Some(value) if value > 0.0 && value <= 1.0 => Ok(value),
        Some(value) => Err(AppError::InvalidThreshold(value)),
        None => Ok(configured),
    }
}

fn compare_and_render(
    text: &str,
    catalog: &Catalog,
    source: CatalogSource,
    threshold: f64,
    list_items: bool,
    csv_path: Option<&Path>,
) -> Result<(), AppError> {
    let mut session = BasketSession::new(threshold);
    if session.add_items(text, catalog) == 0 {
        return Err(AppError::EmptyBasket);
    }

    let aggregates = session.aggregate();
    let unmatched = session.unmatched_queries();
    let summary = summarize(&aggregates, &unmatched);

    let queries: Vec<&str> = session
        .results()
        .iter()
        .map(|result| result.query.as_str())
        .collect();
    println!("Looking for: {}", queries.join(", "));
    match source {
        CatalogSource::UserFiles => println!("Data source: store exports plus staples"),
        CatalogSource::Staples => println!("Data source: built-in staples (dummy prices)"),
    }

    println!("\nPrice comparison");
    for result in session.results() {
        match &result.product {
            Some(product) => {
                let unit_note = if product.unit.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", product.unit)
                };
                println!(
                    "- {} -> {}{} [score {:.2}]",
                    result.query, product.canonical_name, unit_note, result.score
                );
                for store in StoreId::ordered() {
                    match product.price_at(store) {
                        Some(price) => println!("    {}: {:.2} €", store.label(), price),
                        None => println!("    {}: not available", store.label()),
                    }
                }
            }
            None => println!("- {} -> no match", result.query),
        }
    }

    println!("\nBasket total per store");
    for line in &summary.lines {
        println!("- {line}");
    }

    if list_items {
        render_breakdown(&aggregates);
    }

    if let Some(path) = csv_path {
        let rendered = aggregates_to_csv(&aggregates)?;
        std::fs::write(path, rendered)?;
        println!("\nCSV export written to {}", path.display());
    }

    Ok(())
}

fn render_breakdown(aggregates: &BTreeMap<StoreId, StoreAggregate>) {
    println!("\nItemized breakdown");
    for store in StoreId::ordered() {
        let Some(aggregate) = aggregates.get(&store) else {
            continue;
        };
        if aggregate.line_items.is_empty() {
            println!("- {}: nothing priced", store.label());
            continue;
        }
        println!("- {}", store.label());
        for item in &aggregate.line_items {
            println!("    {} | {} | {:.2} €", item.query, item.product_name, item.price);
        }
    }
}
