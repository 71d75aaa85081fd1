use std::sync::Arc;

use sqlx::PgPool;

use crate::application::comment_service::CommentService;
use crate::application::like_service::LikeService;
use crate::application::post_service::PostService;
use crate::data::repositories::postgres::comment_repository::PostgresCommentRepository;
use crate::data::repositories::postgres::like_repository::PostgresLikeRepository;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
use crate::infrastructure::id_token::IdTokenDecoder;

pub(crate) mod http;

pub(crate) type PgPostService = PostService<PostgresPostRepository, PostgresCommentRepository>;
pub(crate) type PgCommentService =
    CommentService<PostgresPostRepository, PostgresCommentRepository, PostgresUserRepository>;
pub(crate) type PgLikeService = LikeService<PostgresLikeRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) post_service: Arc<PgPostService>,
    pub(crate) comment_service: Arc<PgCommentService>,
    pub(crate) like_service: Arc<PgLikeService>,
    pub(crate) id_tokens: Arc<IdTokenDecoder>,
}

impl AppState {
    pub(crate) fn new(
        post_service: Arc<PgPostService>,
        comment_service: Arc<PgCommentService>,
        like_service: Arc<PgLikeService>,
        id_tokens: Arc<IdTokenDecoder>,
    ) -> Self {
        Self {
            post_service,
            comment_service,
            like_service,
            id_tokens,
        }
    }

    /// Wires every service to repositories sharing `pool`.
    pub(crate) fn from_pool(pool: PgPool) -> Self {
        let posts = PostgresPostRepository::new(pool.clone());
        let comments = PostgresCommentRepository::new(pool.clone());
        let users = PostgresUserRepository::new(pool.clone());
        let likes = PostgresLikeRepository::new(pool);

        Self::new(
            Arc::new(PostService::new(posts.clone(), comments.clone())),
            Arc::new(CommentService::new(posts, comments, users)),
            Arc::new(LikeService::new(likes)),
            Arc::new(IdTokenDecoder::new()),
        )
    }
}
