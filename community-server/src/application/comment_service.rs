use chrono::Utc;
use tracing::{info, warn};

use super::assembler;
use crate::data::comment_repository::{CommentRepository, NewComment};
use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::comment::{CommentView, CreateCommentRequest};
use crate::domain::error::{DomainError, Entity};

/// Comment operations with their cross-entity checks.
///
/// Checks and writes are separate round trips. A post deleted between the
/// existence check and the insert surfaces as `NotFound(Post)` through the
/// foreign key; a comment deleted between the ownership check and the delete
/// surfaces as `NotFound(Comment)`.
pub(crate) struct CommentService<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    posts: P,
    comments: C,
    users: U,
}

impl<P, C, U> CommentService<P, C, U>
where
    P: PostRepository,
    C: CommentRepository,
    U: UserRepository,
{
    pub(crate) fn new(posts: P, comments: C, users: U) -> Self {
        Self {
            posts,
            comments,
            users,
        }
    }

    pub(crate) async fn comment_count(&self, post_id: i64) -> Result<i64, DomainError> {
        self.comments.count_for_post(post_id).await
    }

    pub(crate) async fn create_comment(
        &self,
        post_id: i64,
        user_id: &str,
        req: CreateCommentRequest,
    ) -> Result<CommentView, DomainError> {
        let req = req.validate()?;

        if !self.posts.post_exists(post_id).await? {
            return Err(DomainError::NotFound(Entity::Post));
        }
        if !self.users.user_exists(user_id).await? {
            return Err(DomainError::NotFound(Entity::User));
        }

        let record = self
            .comments
            .create_comment(NewComment {
                post_id,
                author_id: user_id.to_string(),
                content: req.content,
            })
            .await?;
        info!(comment_id = record.id, post_id, user_id, "comment created");

        Ok(assembler::comment_view(record, Utc::now()))
    }

    pub(crate) async fn delete_comment(
        &self,
        comment_id: i64,
        requester_id: &str,
    ) -> Result<(), DomainError> {
        let author = self
            .comments
            .find_author(comment_id)
            .await?
            .ok_or(DomainError::NotFound(Entity::Comment))?;

        if author != requester_id {
            warn!(comment_id, requester_id, "comment delete by non-owner rejected");
            return Err(DomainError::Unauthorized);
        }

        let deleted = self.comments.delete_comment(comment_id).await?;
        if !deleted {
            return Err(DomainError::NotFound(Entity::Comment));
        }
        info!(comment_id, "comment deleted");
        Ok(())
    }
}
