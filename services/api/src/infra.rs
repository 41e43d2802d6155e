use enrollment_dashboard::config::AppConfig;
use enrollment_dashboard::dashboard::{Dataset, DatasetLoader};
use enrollment_dashboard::error::AppError;
use enrollment_dashboard::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One-shot commands: read config, start logging, then load the dataset or fail.
pub(crate) fn load_dataset(override_path: Option<PathBuf>) -> Result<Dataset, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let path = override_path.unwrap_or(config.dataset.path);
    Ok(DatasetLoader::from_path(path)?)
}
