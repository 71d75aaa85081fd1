use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::comments::CommentDto;
use super::{MessageDto, parse_id};
use crate::domain::feed::FeedQuery;
use crate::domain::post::{CreatePostRequest, PostDetail, PostSummary};
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppResult;
use crate::presentation::http::middleware::auth::AuthenticatedUser;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct CreatePostDto {
    #[validate(length(min = 1, max = 255))]
    pub(crate) title: String,
    #[validate(length(min = 1))]
    pub(crate) content: String,
}

/// Feed parameters are taken as text; anything unusable falls back to defaults.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct FeedParams {
    /// Page size, 1..=20, default 10
    pub(crate) limit: Option<String>,
    /// Rows to skip, default 0
    pub(crate) offset: Option<String>,
    /// `trend` (default) or `latest`
    #[serde(rename = "sortType")]
    pub(crate) sort_type: Option<String>,
    /// `desc` (default) or `asc`
    pub(crate) sort: Option<String>,
}

impl From<&FeedParams> for FeedQuery {
    fn from(params: &FeedParams) -> Self {
        FeedQuery::from_params(
            params.limit.as_deref(),
            params.offset.as_deref(),
            params.sort_type.as_deref(),
            params.sort.as_deref(),
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostSummaryDto {
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

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct PostDetailDto {
    #[serde(flatten)]
    pub(crate) post: PostSummaryDto,
    pub(crate) comments: Vec<CommentDto>,
}

impl From<PostSummary> for PostSummaryDto {
    fn from(post: PostSummary) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            views: post.views,
            author: post.author,
            like_count: post.like_count,
            comment_count: post.comment_count,
            created_at: post.created_at,
            created_ago: post.created_ago,
        }
    }
}

impl From<PostDetail> for PostDetailDto {
    fn from(detail: PostDetail) -> Self {
        Self {
            post: PostSummaryDto::from(detail.post),
            comments: detail.comments.into_iter().map(CommentDto::from).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    params(FeedParams),
    responses(
        (status = 200, description = "One page of the feed", body = [PostSummaryDto]),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<Vec<PostSummaryDto>>> {
    let posts = state.post_service.list_feed(FeedQuery::from(&params)).await?;
    Ok(Json(posts.into_iter().map(PostSummaryDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post with comments; counts one view", body = PostDetailDto),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PostDetailDto>> {
    let id = parse_id(&id, "post")?;
    let detail = state.post_service.get_post_detail(id).await?;

    Ok(Json(PostDetailDto::from(detail)))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    security(
        ("id_token" = [])
    ),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostSummaryDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or undecodable id token"),
        (status = 404, description = "Caller has no user record"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    payload: Result<Json<CreatePostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostSummaryDto>)> {
    let Json(dto) = payload?;
    dto.validate()?;
    let req = CreatePostRequest {
        title: dto.title,
        content: dto.content,
    };

    let post = state.post_service.create_post(&auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(PostSummaryDto::from(post))))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    security(
        ("id_token" = [])
    ),
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post and its comments and likes deleted", body = MessageDto),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Missing or undecodable id token"),
        (status = 404, description = "Post not found"),
        (status = 500, description = "Internal error")
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<MessageDto>> {
    let id = parse_id(&id, "post")?;
    state.post_service.delete_post(id).await?;
    Ok(Json(MessageDto::new("Post deleted successfully")))
}
