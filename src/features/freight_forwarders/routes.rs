use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::freight_forwarders::handlers;
use crate::features::freight_forwarders::services::FreightForwarderService;

/// Create routes for the freight forwarders feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<FreightForwarderService>) -> Router {
    Router::new()
        .route(
            "/api/freight-forwarders",
            get(handlers::list_freight_forwarders),
        )
        .route(
            "/api/freight-forwarders/{id}",
            get(handlers::get_freight_forwarder),
        )
        .route("/api/search/suggestions", get(handlers::get_suggestions))
        .with_state(service)
}
