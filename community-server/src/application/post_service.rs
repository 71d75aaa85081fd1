use chrono::Utc;
use tracing::{debug, info};

use super::assembler;
use crate::data::comment_repository::CommentRepository;
use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::{DomainError, Entity};
use crate::domain::feed::FeedQuery;
use crate::domain::post::{CreatePostRequest, PostDetail, PostSummary};

pub(crate) struct PostService<P: PostRepository, C: CommentRepository> {
    posts: P,
    comments: C,
}

impl<P: PostRepository, C: CommentRepository> PostService<P, C> {
    pub(crate) fn new(posts: P, comments: C) -> Self {
        Self { posts, comments }
    }

    pub(crate) async fn list_feed(&self, query: FeedQuery) -> Result<Vec<PostSummary>, DomainError> {
        debug!(?query, "listing feed");
        let records = self.posts.list_feed(query).await?;
        assembler::post_summaries(records, Utc::now())
    }

    /// Fetches a post with its comments and counts the view.
    ///
    /// The returned `views` is the value read before this view was counted.
    pub(crate) async fn get_post_detail(&self, id: i64) -> Result<PostDetail, DomainError> {
        let record = self
            .posts
            .get_post_summary(id)
            .await?
            .ok_or(DomainError::NotFound(Entity::Post))?;
        let comments = self.comments.list_for_post(id).await?;

        let now = Utc::now();
        let post = assembler::post_summary(record, now)?;
        let detail = assembler::post_detail(post, comments, now);

        // only a fetch that produced a response counts as a view
        self.posts.increment_views(id).await?;
        Ok(detail)
    }

    pub(crate) async fn create_post(
        &self,
        author_id: &str,
        req: CreatePostRequest,
    ) -> Result<PostSummary, DomainError> {
        let req = req.validate()?;

        let new_post = NewPost {
            author_id: author_id.to_string(),
            title: req.title,
            content: req.content,
        };
        let record = self.posts.create_post(new_post).await?;
        info!(post_id = record.id, author_id, "post created");

        assembler::post_summary(record, Utc::now())
    }

    pub(crate) async fn delete_post(&self, post_id: i64) -> Result<(), DomainError> {
        let deleted = self.posts.delete_post(post_id).await?;
        if !deleted {
            return Err(DomainError::NotFound(Entity::Post));
        }
        info!(post_id, "post deleted");
        Ok(())
    }
}
