use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{MessageDto, parse_id};
use crate::domain::comment::{CommentView, CreateCommentRequest};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreateCommentDto {
    #[validate(length(min = 1))]
    pub(crate) content: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CommentDto {
    pub(crate) id: i64,
    pub(crate) author: String,
    pub(crate) content: String,
    /// Absent when the stored timestamp could not be read.
    pub(crate) created_at: Option<DateTime<Utc>>,
    pub(crate) created_ago: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct CommentCountDto {
    pub(crate) comment_count: i64,
}

impl From<CommentView> for CommentDto {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.id,
            author: view.author,
            content: view.content,
            created_at: view.created_at,
            created_ago: view.created_ago,
        }
    }
}

#[utoipa::path(
    get,
    path = "/comments/post/{post_id}",
    tag = "comments",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Number of comments on the post", body = CommentCountDto),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn comment_count(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> AppResult<Json<CommentCountDto>> {
    let post_id = parse_id(&post_id, "post")?;
    let comment_count = state.comment_service.comment_count(post_id).await?;

    Ok(Json(CommentCountDto { comment_count }))
}

#[utoipa::path(
    post,
    path = "/comments/post/{post_id}",
    tag = "comments",
    security(
        ("id_token" = [])
    ),
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Validation error or malformed id"),
        (status = 401, description = "Missing or undecodable id token"),
        (status = 404, description = "Post or user not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_comment(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(post_id): Path<String>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CommentDto>)> {
    let post_id = parse_id(&post_id, "post")?;
    let Json(dto) = payload?;
    dto.validate()?;

    let comment = state
        .comment_service
        .create_comment(
            post_id,
            &auth.user_id,
            CreateCommentRequest {
                content: dto.content,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(CommentDto::from(comment))))
}

#[utoipa::path(
    delete,
    path = "/comments/{id}",
    tag = "comments",
    security(
        ("id_token" = [])
    ),
    params(
        ("id" = i64, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or undecodable id token"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Comment not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageDto>> {
    let id = parse_id(&id, "comment")?;
    state.comment_service.delete_comment(id, &auth.user_id).await?;
    Ok(Json(MessageDto::new("Comment deleted successfully")))
}
