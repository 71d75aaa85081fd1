use chrono::{DateTime, Utc};

use super::comment::CommentView;
use super::error::DomainError;

pub(crate) const MAX_TITLE_CHARS: usize = 255;

#[derive(Debug, Clone)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            title: normalize_title(&self.title)?,
            content: normalize_content(&self.content)?,
        })
    }
}

/// A post joined with its author and live engagement counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostSummary {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) views: i64,
    pub(crate) author: String,
    pub(crate) like_count: i64,
    pub(crate) comment_count: i64,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) created_ago: String,
}

/// Detail view: the summary plus its comments, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostDetail {
    pub(crate) post: PostSummary,
    pub(crate) comments: Vec<CommentView>,
}

fn normalize_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_CHARS {
        return Err(DomainError::Validation {
            field: "title",
            message: "must be 1..255 chars",
        });
    }
    Ok(title.to_string())
}

pub(crate) fn normalize_content(content: &str) -> Result<String, DomainError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation {
            field: "content",
            message: "must not be empty",
        });
    }
    Ok(content.to_string())
}
