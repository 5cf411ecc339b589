/**
 * Application State Management
 *
 * `AppState` is the central state container shared across request
 * handlers: the connection pool, the password hasher, and the loaded
 * configuration. Both external collaborators (the pool and the hasher)
 * are concurrency-safe, so the state clones cheaply per request.
 *
 * Every store call funnels through [`AppState::store`], which bounds the
 * operation with the configured deadline so a stalled database surfaces
 * as `PersistenceTimeout` instead of a hung request.
 */

use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;

use crate::auth::PasswordHasher;
use crate::error::AuthError;
use crate::server::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db: PgPool,
    /// bcrypt hasher configured with cost and deadline
    pub hasher: PasswordHasher,
    /// Loaded server configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        let hasher = PasswordHasher::new(config.bcrypt_cost, config.hash_timeout);
        Self {
            db,
            hasher,
            config: Arc::new(config),
        }
    }

    /// Run a store operation under the configured deadline.
    pub async fn store<T, F>(&self, op: F) -> Result<T, AuthError>
    where
        F: Future<Output = Result<T, AuthError>>,
    {
        tokio::time::timeout(self.config.store_timeout, op)
            .await
            .map_err(|_| AuthError::PersistenceTimeout)?
    }
}
