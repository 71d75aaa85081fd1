use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::http::handlers::likes::{add_like, like_count, remove_like};
use crate::presentation::http::middleware::auth::id_token_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/post/{post_id}", get(like_count));

    let protected = Router::new()
        .route("/post/{post_id}", post(add_like).delete(remove_like))
        .layer(middleware::from_fn_with_state(state, id_token_auth_middleware));

    public.merge(protected)
}
