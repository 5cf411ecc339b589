/**
 * Authentication Routes
 *
 * Route handlers for the authentication endpoints.
 *
 * # Routes
 *
 * - `POST /api/auth/register` - User registration (public)
 * - `POST /api/auth/login`    - User login (public)
 * - `POST /api/auth/logout`   - Session destruction (requires a session)
 */

use axum::Router;

use crate::auth::{login, logout, register};
use crate::server::state::AppState;

/// Add the `/api/auth` route group to the router.
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
}
