use chrono::{DateTime, Utc};

use super::error::DomainError;
use super::post::normalize_content;

#[derive(Debug, Clone)]
pub(crate) struct CreateCommentRequest {
    pub(crate) content: String,
}

impl CreateCommentRequest {
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        Ok(Self {
            content: normalize_content(&self.content)?,
        })
    }
}

/// A comment ready for display.
///
/// `created_at` is `None` when the stored timestamp could not be parsed; the
/// comment is still shown, just without a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommentView {
    pub(crate) id: i64,
    pub(crate) author: String,
    pub(crate) content: String,
    pub(crate) created_at: Option<DateTime<Utc>>,
    pub(crate) created_ago: String,
}
