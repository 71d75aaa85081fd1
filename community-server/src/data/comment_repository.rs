use async_trait::async_trait;

use crate::domain::error::DomainError;

#[derive(Debug, Clone)]
pub(crate) struct NewComment {
    pub(crate) post_id: i64,
    pub(crate) author_id: String,
    pub(crate) content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommentRecord {
    pub(crate) id: i64,
    pub(crate) author: String,
    pub(crate) content: String,
    pub(crate) created_at: String,
}

#[async_trait]
pub(crate) trait CommentRepository: Send + Sync {
    async fn create_comment(&self, input: NewComment) -> Result<CommentRecord, DomainError>;
    /// Comments of a post, newest first.
    async fn list_for_post(&self, post_id: i64) -> Result<Vec<CommentRecord>, DomainError>;
    async fn count_for_post(&self, post_id: i64) -> Result<i64, DomainError>;
    async fn find_author(&self, comment_id: i64) -> Result<Option<String>, DomainError>;
    async fn delete_comment(&self, comment_id: i64) -> Result<bool, DomainError>;
}
