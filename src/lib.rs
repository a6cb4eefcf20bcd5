//! Signup Portal
//!
//! A signup page with live password-strength feedback and a placeholder
//! dashboard:
//! - Password criteria evaluated on every keystroke
//! - Submit-time validation with per-field messages
//! - Server-rendered views over a stateless view-state API

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::observability::init_metrics;

/// Build the shared application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let metrics_config = config.observability.metrics.clone();
    let metrics = init_metrics(&metrics_config);

    AppState::new(config.site.clone(), metrics_config, metrics)
}
