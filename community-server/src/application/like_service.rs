use tracing::debug;

use crate::data::like_repository::LikeRepository;
use crate::domain::error::DomainError;

/// Like toggling. Adding an existing like or removing an absent one is a
/// no-op, never an error.
pub(crate) struct LikeService<L: LikeRepository> {
    likes: L,
}

impl<L: LikeRepository> LikeService<L> {
    pub(crate) fn new(likes: L) -> Self {
        Self { likes }
    }

    pub(crate) async fn add_like(&self, user_id: &str, post_id: i64) -> Result<(), DomainError> {
        self.likes.add_like(user_id, post_id).await?;
        debug!(user_id, post_id, "post liked");
        Ok(())
    }

    pub(crate) async fn remove_like(&self, user_id: &str, post_id: i64) -> Result<(), DomainError> {
        self.likes.remove_like(user_id, post_id).await?;
        debug!(user_id, post_id, "post unliked");
        Ok(())
    }

    pub(crate) async fn like_count(&self, post_id: i64) -> Result<i64, DomainError> {
        self.likes.count_for_post(post_id).await
    }
}
