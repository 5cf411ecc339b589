/**
 * Server Initialization
 *
 * Connects to PostgreSQL, runs migrations, builds the shared state, and
 * assembles the router. Any failure here is returned to `main` and aborts
 * startup; there is no degraded mode for an authentication backend.
 *
 * A background task periodically sweeps expired session rows so the
 * sessions table does not accumulate dead state.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::auth::sessions::purge_expired_sessions;
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// How often the session sweeper runs.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Connect to the database and run migrations.
pub async fn connect_database(config: &Config) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .acquire_timeout(config.store_timeout)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

/// Create and configure the Axum application.
///
/// # Initialization Steps
///
/// 1. Connect to PostgreSQL and run migrations (fatal on failure)
/// 2. Build the shared `AppState`
/// 3. Start the expired-session sweeper
/// 4. Assemble the router
pub async fn create_app(config: Config) -> Result<Router, sqlx::Error> {
    let pool = connect_database(&config).await?;
    let state = AppState::new(pool, config);

    spawn_session_sweeper(state.db.clone());

    Ok(create_router(state))
}

/// Periodically delete expired session rows.
fn spawn_session_sweeper(pool: PgPool) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            match purge_expired_sessions(&pool).await {
                Ok(0) => {}
                Ok(purged) => tracing::debug!("Swept {} expired sessions", purged),
                Err(e) => tracing::warn!("Session sweep failed: {}", e),
            }
        }
    });
}
