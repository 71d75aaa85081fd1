use async_trait::async_trait;

use crate::domain::error::DomainError;

/// Likes are keyed by `(user_id, post_id)`; both writes are idempotent.
#[async_trait]
pub(crate) trait LikeRepository: Send + Sync {
    async fn add_like(&self, user_id: &str, post_id: i64) -> Result<(), DomainError>;
    async fn remove_like(&self, user_id: &str, post_id: i64) -> Result<(), DomainError>;
    async fn count_for_post(&self, post_id: i64) -> Result<i64, DomainError>;
}
