//! Turns store records into response-ready view models.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::data::comment_repository::CommentRecord;
use crate::data::post_repository::PostSummaryRecord;
use crate::domain::comment::CommentView;
use crate::domain::error::DomainError;
use crate::domain::post::{PostDetail, PostSummary};
use crate::domain::timestamp::normalize;

/// An unparsable post timestamp is fatal: the row is corrupt.
pub(crate) fn post_summary(
    record: PostSummaryRecord,
    now: DateTime<Utc>,
) -> Result<PostSummary, DomainError> {
    let created = normalize(&record.created_at, now).map_err(|err| {
        DomainError::Unexpected(format!("post {} has bad created_at: {err}", record.id))
    })?;

    Ok(PostSummary {
        id: record.id,
        title: record.title,
        content: record.content,
        views: record.views,
        author: record.author,
        like_count: record.like_count,
        comment_count: record.comment_count,
        created_at: created.instant,
        created_ago: created.relative,
    })
}

pub(crate) fn post_summaries(
    records: Vec<PostSummaryRecord>,
    now: DateTime<Utc>,
) -> Result<Vec<PostSummary>, DomainError> {
    records
        .into_iter()
        .map(|record| post_summary(record, now))
        .collect()
}

/// Comment timestamps are display-only; a bad one is logged and left blank.
pub(crate) fn comment_view(record: CommentRecord, now: DateTime<Utc>) -> CommentView {
    let (created_at, created_ago) = match normalize(&record.created_at, now) {
        Ok(created) => (Some(created.instant), created.relative),
        Err(err) => {
            warn!(comment_id = record.id, error = %err, "comment timestamp not displayable");
            (None, String::new())
        }
    };

    CommentView {
        id: record.id,
        author: record.author,
        content: record.content,
        created_at,
        created_ago,
    }
}

/// Comments keep the order the store returned them in (newest first).
pub(crate) fn post_detail(
    post: PostSummary,
    comments: Vec<CommentRecord>,
    now: DateTime<Utc>,
) -> PostDetail {
    PostDetail {
        post,
        comments: comments
            .into_iter()
            .map(|record| comment_view(record, now))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::{comment_view, post_detail, post_summaries, post_summary};
    use crate::data::comment_repository::CommentRecord;
    use crate::data::post_repository::PostSummaryRecord;
    use crate::domain::error::DomainError;

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 17, 12, 0, 0)
            .single()
            .expect("reference instant must be valid")
    }

    fn record(id: i64, created_at: &str) -> PostSummaryRecord {
        PostSummaryRecord {
            id,
            title: "Hi".to_string(),
            content: "Hello".to_string(),
            views: 4,
            author: "alice".to_string(),
            like_count: 2,
            comment_count: 1,
            created_at: created_at.to_string(),
        }
    }

    fn comment(id: i64, created_at: &str) -> CommentRecord {
        CommentRecord {
            id,
            author: "bob".to_string(),
            content: "Nice!".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn post_summary_normalizes_timestamp() {
        let summary = post_summary(record(1, "2024-12-17 09:00:00+00"), now())
            .expect("summary must assemble");

        assert_eq!(summary.id, 1);
        assert_eq!(summary.author, "alice");
        assert_eq!(summary.like_count, 2);
        assert_eq!(summary.created_at, now() - Duration::hours(3));
        assert_eq!(summary.created_ago, "3 hours ago");
    }

    #[test]
    fn bad_post_timestamp_fails_the_whole_page() {
        let records = vec![record(1, "2024-12-17T11:00:00Z"), record(2, "yesterday")];
        let err = post_summaries(records, now()).expect_err("page must fail");
        assert!(matches!(err, DomainError::Unexpected(_)));
    }

    #[test]
    fn bad_comment_timestamp_is_left_blank() {
        let view = comment_view(comment(5, "not a time"), now());
        assert_eq!(view.id, 5);
        assert_eq!(view.created_at, None);
        assert!(view.created_ago.is_empty());
    }

    #[test]
    fn post_detail_keeps_comment_order_and_empty_list() {
        let post = post_summary(record(1, "2024-12-17T11:00:00Z"), now()).expect("summary");

        let detail = post_detail(post.clone(), Vec::new(), now());
        assert!(detail.comments.is_empty());

        let detail = post_detail(
            post,
            vec![
                comment(9, "2024-12-17T11:59:00Z"),
                comment(3, "2024-12-17T10:00:00Z"),
            ],
            now(),
        );
        let ids: Vec<i64> = detail.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![9, 3]);
        assert_eq!(detail.comments[0].created_ago, "about a minute ago");
        assert_eq!(detail.comments[1].created_ago, "2 hours ago");
    }
}
