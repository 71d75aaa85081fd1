//! SQL for the aggregated post views.
//!
//! Only the ORDER BY clause is built dynamically, and only from the closed
//! [`SortType`] / [`SortDirection`] enums. Everything else is bound.

use crate::domain::feed::{FeedQuery, SortDirection, SortType};

const SUMMARY_SELECT: &str = r#"
SELECT
    posts.id,
    posts.title,
    posts.content,
    posts.views,
    users.username AS author,
    COUNT(DISTINCT likes.user_id) AS like_count,
    COUNT(DISTINCT comments.id) AS comment_count,
    posts.created_at::text AS created_at
FROM posts
JOIN users ON users.id = posts.user_id
LEFT JOIN likes ON likes.post_id = posts.id
LEFT JOIN comments ON comments.post_id = posts.id
"#;

const SUMMARY_GROUP_BY: &str = "GROUP BY posts.id, users.username";

pub(crate) fn order_clause(sort_type: SortType, direction: SortDirection) -> String {
    let key = match sort_type {
        SortType::Trend => "COUNT(DISTINCT likes.user_id)",
        SortType::Latest => "MAX(posts.created_at)",
    };
    let dir = direction.as_sql();
    // id tie-breaker keeps page boundaries stable between requests
    format!("ORDER BY {key} {dir}, posts.id {dir}")
}

/// Feed page. Binds: `$1` limit, `$2` offset.
pub(crate) fn feed_sql(query: &FeedQuery) -> String {
    format!(
        "{SUMMARY_SELECT}{SUMMARY_GROUP_BY}\n{}\nLIMIT $1 OFFSET $2",
        order_clause(query.sort_type, query.direction)
    )
}

/// Single post. Binds: `$1` post id.
pub(crate) fn summary_by_id_sql() -> String {
    format!("{SUMMARY_SELECT}WHERE posts.id = $1\n{SUMMARY_GROUP_BY}")
}
