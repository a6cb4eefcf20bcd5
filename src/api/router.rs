use axum::{middleware, routing::get, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::signup;
use super::state::AppState;
use crate::infrastructure::observability::create_metrics_router;
use crate::ui;

/// Create the full router: views, view-state API, probes and metrics
pub fn create_router(state: AppState) -> Router {
    let metrics_router = state
        .metrics
        .clone()
        .map(|metrics| create_metrics_router(metrics, &state.metrics_config.path));

    let mut router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // View-state API used by the signup page
        .nest("/api/signup", signup::create_signup_router())
        // HTML views
        .merge(ui::create_pages_router())
        .fallback(ui::not_found_page)
        .with_state(state);

    if let Some(metrics_router) = metrics_router {
        router = router.merge(metrics_router);
    }

    router
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
