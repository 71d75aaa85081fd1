use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Users are managed elsewhere; the core only checks that one exists.
#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    async fn user_exists(&self, user_id: &str) -> Result<bool, DomainError>;
}
