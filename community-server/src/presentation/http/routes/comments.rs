use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};

use crate::presentation::AppState;
use crate::presentation::http::handlers::comments::{
    comment_count, create_comment, delete_comment,
};
use crate::presentation::http::middleware::auth::id_token_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/post/{post_id}", get(comment_count));

    let protected = Router::new()
        .route("/post/{post_id}", post(create_comment))
        .route("/{id}", delete(delete_comment))
        .layer(middleware::from_fn_with_state(state, id_token_auth_middleware));

    public.merge(protected)
}
