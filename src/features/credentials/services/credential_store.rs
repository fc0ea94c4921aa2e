use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::credentials::models::UserCredentialHash;

/// Backend lookup of enrolled credential hashes
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// `Ok(None)` when the user has no stored hash
    async fn get_user_hash(&self, user_id: &str)
        -> Result<Option<UserCredentialHash>, sqlx::Error>;
}

/// Reads `user_credentials.credential_hash`
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn get_user_hash(
        &self,
        user_id: &str,
    ) -> Result<Option<UserCredentialHash>, sqlx::Error> {
        let hash: Option<String> = sqlx::query_scalar(
            "SELECT credential_hash FROM user_credentials WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(hash.map(UserCredentialHash::new))
    }
}
