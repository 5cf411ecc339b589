/**
 * Server Configuration
 *
 * Configuration is loaded from environment variables with local-development
 * defaults. Unlike softer services, a broken configuration here aborts
 * startup: an authentication backend must not serve degraded traffic.
 *
 * # Variables
 *
 * - `DATABASE_URL`        - required, PostgreSQL connection string
 * - `SERVER_PORT`         - default 3000
 * - `SESSION_COOKIE_NAME` - default "sid"
 * - `SESSION_TTL_SECS`    - default 60
 * - `BCRYPT_COST`         - default 12
 * - `STORE_TIMEOUT_SECS`  - default 5
 * - `HASH_TIMEOUT_SECS`   - default 5
 */

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::auth::password::DEFAULT_BCRYPT_COST;

/// Configuration loading errors. All of them abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,

    #[error("invalid value {value:?} for {name}")]
    InvalidValue {
        name: &'static str,
        value: String,
    },
}

/// Session-related settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the session cookie
    pub cookie_name: String,
    /// Time-to-live of a session, counted from issuance
    pub ttl: Duration,
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    pub session: SessionConfig,
    pub bcrypt_cost: u32,
    /// Deadline for any single store operation
    pub store_timeout: Duration,
    /// Deadline for any single hash computation
    pub hash_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            server_port: env_or("SERVER_PORT", 3000)?,
            database_url,
            session: SessionConfig {
                cookie_name: std::env::var("SESSION_COOKIE_NAME")
                    .unwrap_or_else(|_| "sid".to_string()),
                ttl: Duration::from_secs(env_or("SESSION_TTL_SECS", 60)?),
            },
            bcrypt_cost: env_or("BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            store_timeout: Duration::from_secs(env_or("STORE_TIMEOUT_SECS", 5)?),
            hash_timeout: Duration::from_secs(env_or("HASH_TIMEOUT_SECS", 5)?),
        })
    }
}

/// Parse an environment variable, falling back to a default when unset.
///
/// A variable that is set but unparsable is an error rather than a silent
/// fallback.
fn env_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_apply_when_unset() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/authd_test");
        for name in [
            "SERVER_PORT",
            "SESSION_COOKIE_NAME",
            "SESSION_TTL_SECS",
            "BCRYPT_COST",
            "STORE_TIMEOUT_SECS",
            "HASH_TIMEOUT_SECS",
        ] {
            std::env::remove_var(name);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.session.cookie_name, "sid");
        assert_eq!(config.session.ttl, Duration::from_secs(60));
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
        assert_eq!(config.store_timeout, Duration::from_secs(5));
    }

    #[test]
    #[serial]
    fn test_missing_database_url_is_an_error() {
        std::env::remove_var("DATABASE_URL");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingDatabaseUrl)
        ));
    }

    #[test]
    #[serial]
    fn test_unparsable_value_is_an_error_not_a_fallback() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/authd_test");
        std::env::set_var("SESSION_TTL_SECS", "soon");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: "SESSION_TTL_SECS",
                ..
            })
        ));

        std::env::remove_var("SESSION_TTL_SECS");
    }

    #[test]
    #[serial]
    fn test_overrides_are_honored() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/authd_test");
        std::env::set_var("SESSION_COOKIE_NAME", "authd_session");
        std::env::set_var("SESSION_TTL_SECS", "300");

        let config = Config::from_env().unwrap();
        assert_eq!(config.session.cookie_name, "authd_session");
        assert_eq!(config.session.ttl, Duration::from_secs(300));

        std::env::remove_var("SESSION_COOKIE_NAME");
        std::env::remove_var("SESSION_TTL_SECS");
    }
}
