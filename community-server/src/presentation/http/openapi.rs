use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::handlers::MessageDto;
use super::handlers::comments::{CommentCountDto, CommentDto, CreateCommentDto};
use super::handlers::health::HealthDto;
use super::handlers::likes::LikeCountDto;
use super::handlers::posts::{CreatePostDto, PostDetailDto, PostSummaryDto};
use super::middleware::auth::ID_TOKEN_HEADER;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::health::healthz,
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::get_post,
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::posts::delete_post,
        crate::presentation::http::handlers::comments::comment_count,
        crate::presentation::http::handlers::comments::create_comment,
        crate::presentation::http::handlers::comments::delete_comment,
        crate::presentation::http::handlers::likes::like_count,
        crate::presentation::http::handlers::likes::add_like,
        crate::presentation::http::handlers::likes::remove_like
    ),
    components(
        schemas(
            HealthDto,
            MessageDto,
            CreatePostDto,
            PostSummaryDto,
            PostDetailDto,
            CreateCommentDto,
            CommentDto,
            CommentCountDto,
            LikeCountDto
        )
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "posts", description = "Feed and post endpoints"),
        (name = "comments", description = "Comment endpoints"),
        (name = "likes", description = "Like endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "id_token",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(ID_TOKEN_HEADER))),
        );
        openapi.components = Some(components);
    }
}
