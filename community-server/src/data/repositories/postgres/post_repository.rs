use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use super::feed_query::{feed_sql, summary_by_id_sql};
use super::map_db_error;
use crate::data::post_repository::{NewPost, PostRepository, PostSummaryRecord};
use crate::domain::error::DomainError;
use crate::domain::feed::FeedQuery;

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PostSummaryRow {
    id: i64,
    title: String,
    content: String,
    views: i64,
    author: String,
    like_count: i64,
    comment_count: i64,
    created_at: String,
}

impl From<PostSummaryRow> for PostSummaryRecord {
    fn from(row: PostSummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            views: row.views,
            author: row.author,
            like_count: row.like_count,
            comment_count: row.comment_count,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<PostSummaryRecord, DomainError> {
        let row = sqlx::query_as::<_, PostSummaryRow>(
            r#"
            WITH inserted AS (
                INSERT INTO posts (user_id, title, content)
                VALUES ($1, $2, $3)
                RETURNING id, user_id, title, content, views, created_at
            )
            SELECT
                inserted.id,
                inserted.title,
                inserted.content,
                inserted.views,
                users.username AS author,
                0::BIGINT AS like_count,
                0::BIGINT AS comment_count,
                inserted.created_at::text AS created_at
            FROM inserted
            JOIN users ON users.id = inserted.user_id
            "#,
        )
        .bind(&input.author_id)
        .bind(&input.title)
        .bind(&input.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }

    async fn list_feed(&self, query: FeedQuery) -> Result<Vec<PostSummaryRecord>, DomainError> {
        let sql = feed_sql(&query);
        let rows = sqlx::query_as::<_, PostSummaryRow>(&sql)
            .bind(i64::from(query.limit))
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PostSummaryRecord::from).collect())
    }

    async fn get_post_summary(&self, id: i64) -> Result<Option<PostSummaryRecord>, DomainError> {
        let sql = summary_by_id_sql();
        let row = sqlx::query_as::<_, PostSummaryRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(PostSummaryRecord::from))
    }

    async fn post_exists(&self, id: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM posts WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    async fn increment_views(&self, id: i64) -> Result<(), DomainError> {
        sqlx::query("UPDATE posts SET views = views + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
