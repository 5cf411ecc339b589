/**
 * Password Hashing
 *
 * bcrypt wrapper with a configurable cost factor (default 12). Every hash
 * call salts freshly, so two hashes of the same plaintext differ yet both
 * verify. Verification delegates to bcrypt's own comparison, which does
 * not leak where a mismatch occurs.
 *
 * bcrypt is CPU-bound, so both operations run on the blocking pool and
 * are bounded by a deadline; an overrun reports `HashTimeout` instead of
 * hanging the request.
 */

use std::time::Duration;

use crate::error::AuthError;

/// Default bcrypt work factor.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// bcrypt password hasher with a fixed cost and deadline.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    timeout: Duration,
}

impl PasswordHasher {
    pub fn new(cost: u32, timeout: Duration) -> Self {
        Self { cost, timeout }
    }

    /// Hash a plaintext password with a fresh random salt.
    pub async fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();
        let task = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost));

        let joined = tokio::time::timeout(self.timeout, task)
            .await
            .map_err(|_| AuthError::HashTimeout)?;

        let hashed = joined
            .map_err(|e| AuthError::internal(format!("hash task failed: {e}")))??;
        Ok(hashed)
    }

    /// Verify a plaintext password against a stored hash.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> Result<bool, AuthError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        let task = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash));

        let joined = tokio::time::timeout(self.timeout, task)
            .await
            .map_err(|_| AuthError::HashTimeout)?;

        let valid = joined
            .map_err(|e| AuthError::internal(format!("verify task failed: {e}")))??;
        Ok(valid)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST, Duration::from_secs(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps the tests fast.
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(4, Duration::from_secs(30))
    }

    #[tokio::test]
    async fn test_hash_then_verify_round_trip() {
        let hasher = test_hasher();
        let hash = hasher.hash("Secret1_").await.unwrap();
        assert!(hasher.verify("Secret1_", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_wrong_password_does_not_verify() {
        let hasher = test_hasher();
        let hash = hasher.hash("Secret1_").await.unwrap();
        assert!(!hasher.verify("Wrong1_x", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_salts_differ_across_calls() {
        let hasher = test_hasher();
        let first = hasher.hash("Secret1_").await.unwrap();
        let second = hasher.hash("Secret1_").await.unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify("Secret1_", &first).await.unwrap());
        assert!(hasher.verify("Secret1_", &second).await.unwrap());
    }

    #[tokio::test]
    async fn test_overrunning_hash_reports_timeout() {
        // Full cost takes hundreds of milliseconds; the deadline fires first.
        let hasher = PasswordHasher::new(DEFAULT_BCRYPT_COST, Duration::from_millis(1));
        let result = hasher.hash("Secret1_").await;
        assert!(matches!(result, Err(AuthError::HashTimeout)));
    }

    #[tokio::test]
    async fn test_overrunning_verify_reports_timeout() {
        // Verification cost comes from the hash itself, so a full-cost
        // hash keeps the verify well past the 1ms deadline.
        let full_cost = PasswordHasher::new(DEFAULT_BCRYPT_COST, Duration::from_secs(30));
        let hash = full_cost.hash("Secret1_").await.unwrap();

        let slow = PasswordHasher::new(DEFAULT_BCRYPT_COST, Duration::from_millis(1));
        let result = slow.verify("Secret1_", &hash).await;
        assert!(matches!(result, Err(AuthError::HashTimeout)));
    }

    #[tokio::test]
    async fn test_garbage_hash_is_an_error() {
        let hasher = test_hasher();
        let result = hasher.verify("Secret1_", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(AuthError::Hash(_))));
    }
}
