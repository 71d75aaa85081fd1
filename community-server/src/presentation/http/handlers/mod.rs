use serde::Serialize;
use utoipa::ToSchema;

use crate::presentation::http::app_error::AppError;

pub(crate) mod comments;
pub(crate) mod health;
pub(crate) mod likes;
pub(crate) mod posts;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct MessageDto {
    pub(crate) message: String,
}

impl MessageDto {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Path ids arrive as text so a malformed id answers 400 with our error body.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid {what} id")))
}
