use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use utoipa::ToSchema;

use super::{MessageDto, parse_id};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::middleware::auth::AuthenticatedUser;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct LikeCountDto {
    pub(crate) like_count: i64,
}

#[utoipa::path(
    get,
    path = "/likes/post/{post_id}",
    tag = "likes",
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Number of likes on the post", body = LikeCountDto),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn like_count(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> AppResult<Json<LikeCountDto>> {
    let post_id = parse_id(&post_id, "post")?;
    let like_count = state.like_service.like_count(post_id).await?;

    Ok(Json(LikeCountDto { like_count }))
}

#[utoipa::path(
    post,
    path = "/likes/post/{post_id}",
    tag = "likes",
    security(
        ("id_token" = [])
    ),
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Like recorded; repeating it is a no-op", body = MessageDto),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or undecodable id token"),
        (status = 404, description = "Post or user not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn add_like(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(post_id): Path<String>,
) -> AppResult<Json<MessageDto>> {
    let post_id = parse_id(&post_id, "post")?;
    state.like_service.add_like(&auth.user_id, post_id).await?;
    Ok(Json(MessageDto::new("Like added successfully")))
}

#[utoipa::path(
    delete,
    path = "/likes/post/{post_id}",
    tag = "likes",
    security(
        ("id_token" = [])
    ),
    params(
        ("post_id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Like removed if it existed", body = MessageDto),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or undecodable id token"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn remove_like(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(post_id): Path<String>,
) -> AppResult<Json<MessageDto>> {
    let post_id = parse_id(&post_id, "post")?;
    state.like_service.remove_like(&auth.user_id, post_id).await?;
    Ok(Json(MessageDto::new("Like removed successfully")))
}
