use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::feed::FeedQuery;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) author_id: String,
    pub(crate) title: String,
    pub(crate) content: String,
}

/// Post row joined with author and counts. `created_at` is the stored text
/// representation, normalized later by the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostSummaryRecord {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) views: i64,
    pub(crate) author: String,
    pub(crate) like_count: i64,
    pub(crate) comment_count: i64,
    pub(crate) created_at: String,
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<PostSummaryRecord, DomainError>;
    async fn list_feed(&self, query: FeedQuery) -> Result<Vec<PostSummaryRecord>, DomainError>;
    async fn get_post_summary(&self, id: i64) -> Result<Option<PostSummaryRecord>, DomainError>;
    async fn post_exists(&self, id: i64) -> Result<bool, DomainError>;
    async fn increment_views(&self, id: i64) -> Result<(), DomainError>;
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
}
