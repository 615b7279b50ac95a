use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use shopwise::catalog::{load_data_dir, Catalog};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) catalog_source: CatalogSource,
    pub(crate) default_threshold: f64,
}

/// Where the served catalog came from. Reported back to callers so they can
/// tell dummy staple prices from real store exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CatalogSource {
    UserFiles,
    Staples,
}

/// Loads the catalog once at startup: user exports first (they win matcher
/// tie-breaks), staples appended behind them. An unreadable data directory
/// degrades to staples-only instead of refusing to start — the comparison
/// then runs on dummy prices rather than not at all.
pub(crate) fn load_catalog<P: AsRef<Path>>(data_dir: P) -> (Catalog, CatalogSource) {
    match load_data_dir(&data_dir) {
        Ok(user) if !user.is_empty() => {
            let mut catalog = user;
            let user_records = catalog.len();
            catalog.append_staples();
            info!(
                user_records,
                total = catalog.len(),
                "catalog loaded from user exports plus staples"
            );
            (catalog, CatalogSource::UserFiles)
        }
        Ok(_) => {
            let catalog = Catalog::staples();
            info!(total = catalog.len(), "no user exports found; serving staples");
            (catalog, CatalogSource::Staples)
        }
        Err(err) => {
            warn!(error = %err, "catalog sources unavailable; serving staples");
            (Catalog::staples(), CatalogSource::Staples)
        }
    }
}
