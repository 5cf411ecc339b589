/**
 * Router Configuration
 *
 * Assembles the authentication routes into a single Axum router with
 * request tracing and a 404 fallback.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::auth_routes::configure_auth_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_auth_routes(Router::new());

    router
        .fallback(|| async { "404 Not Found" })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
