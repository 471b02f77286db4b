use cardmatch::catalog::CatalogError;
use cardmatch::config::AppConfig;
use cardmatch::error::AppError;
use cardmatch::recommend::CardRecommender;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the recommender from the configured dataset. A missing dataset is
/// not fatal: the service stays up and answers recommendation routes with
/// 503 until it is restarted with a valid path. Any other catalog failure
/// (unreadable file, malformed CSV) aborts startup.
pub(crate) fn init_recommender(
    config: &AppConfig,
) -> Result<Option<Arc<CardRecommender>>, AppError> {
    match CardRecommender::from_path(&config.catalog.path) {
        Ok(engine) => Ok(Some(Arc::new(engine))),
        Err(err @ CatalogError::DatasetNotFound { .. }) => {
            warn!(%err, "recommender unavailable");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
