//! Application state shared by all handlers

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::infrastructure::observability::{MetricsConfig, PrometheusMetrics};

/// Read-only state; views keep their own state in the page
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
    pub metrics_config: MetricsConfig,
    /// Installed Prometheus recorder, when metrics are enabled
    pub metrics: Option<PrometheusMetrics>,
}

impl AppState {
    pub fn new(
        site: SiteConfig,
        metrics_config: MetricsConfig,
        metrics: Option<PrometheusMetrics>,
    ) -> Self {
        Self {
            site: Arc::new(site),
            metrics_config,
            metrics,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let metrics_config = MetricsConfig {
            enabled: false,
            ..MetricsConfig::default()
        };

        Self::new(SiteConfig::default(), metrics_config, None)
    }
}
