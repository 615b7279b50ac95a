use crate::infra::{AppState, CatalogSource};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use shopwise::basket::{
    aggregates_to_csv, summarize, tokenize, BasketSession, LineItem, MatchResult,
};
use shopwise::catalog::{Catalog, StoreId};
use shopwise::error::AppError;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub(crate) struct CompareRequest {
    /// Raw shopping list exactly as the user typed it.
    pub(crate) text: String,
    /// Per-request similarity threshold override, must lie in (0, 1].
    #[serde(default)]
    pub(crate) threshold: Option<f64>,
    /// Include the per-store itemized breakdowns.
    #[serde(default)]
    pub(crate) include_items: bool,
    /// Include the `store,item,price` CSV rendering in the response.
    #[serde(default)]
    pub(crate) include_csv: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompareResponse {
    pub(crate) queries: Vec<String>,
    pub(crate) matches: Vec<MatchView>,
    pub(crate) unmatched: Vec<String>,
    pub(crate) stores: Vec<StoreTotalView>,
    pub(crate) cheapest: Option<StoreId>,
    pub(crate) cheapest_label: Option<&'static str>,
    pub(crate) summary: Vec<String>,
    pub(crate) data_source: CatalogSource,
    pub(crate) threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatchView {
    pub(crate) query: String,
    pub(crate) matched: bool,
    pub(crate) score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) prices: Option<BTreeMap<StoreId, f64>>,
}

impl MatchView {
    fn from_result(result: &MatchResult) -> Self {
        Self {
            query: result.query.clone(),
            matched: result.matched,
            score: result.score,
            product_name: result
                .product
                .as_ref()
                .map(|product| product.canonical_name.clone()),
            unit: result.product.as_ref().and_then(|product| {
                (!product.unit.is_empty()).then(|| product.unit.clone())
            }),
            prices: result.product.as_ref().map(|product| product.prices.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StoreTotalView {
    pub(crate) store: StoreId,
    pub(crate) store_label: &'static str,
    pub(crate) total: f64,
    pub(crate) item_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) line_items: Option<Vec<LineItem>>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/basket/compare", post(compare_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn compare_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    build_compare_response(
        &state.catalog,
        state.catalog_source,
        state.default_threshold,
        payload,
    )
    .map(Json)
}

/// The whole comparison, as a pure function of the loaded catalog and one
/// request. The handler above only unwraps the shared state.
pub(crate) fn build_compare_response(
    catalog: &Catalog,
    data_source: CatalogSource,
    default_threshold: f64,
    request: CompareRequest,
) -> Result<CompareResponse, AppError> {
    let threshold = match request.threshold {
        Some(value) if value > 0.0 && value <= 1.0 => value,
        Some(value) => return Err(AppError::InvalidThreshold(value)),
        None => default_threshold,
    };

    let queries = tokenize(&request.text);
    if queries.is_empty() {
        return Err(AppError::EmptyBasket);
    }

    let mut session = BasketSession::new(threshold);
    session.add_items(&request.text, catalog);

    let aggregates = session.aggregate();
    let unmatched_refs = session.unmatched_queries();
    let summary = summarize(&aggregates, &unmatched_refs);
    let unmatched = unmatched_refs.iter().map(|query| query.to_string()).collect();

    let csv = if request.include_csv {
        Some(aggregates_to_csv(&aggregates)?)
    } else {
        None
    };

    let stores = StoreId::ordered()
        .into_iter()
        .map(|store| {
            let aggregate = &aggregates[&store];
            StoreTotalView {
                store,
                store_label: store.label(),
                total: aggregate.total,
                item_count: aggregate.item_count(),
                line_items: request
                    .include_items
                    .then(|| aggregate.line_items.clone()),
            }
        })
        .collect();

    Ok(CompareResponse {
        queries,
        matches: session.results().iter().map(MatchView::from_result).collect(),
        unmatched,
        stores,
        cheapest: summary.cheapest,
        cheapest_label: summary.cheapest_label,
        summary: summary.lines,
        data_source,
        threshold,
        csv,
    })
}
