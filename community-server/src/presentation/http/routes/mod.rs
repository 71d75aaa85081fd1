use axum::Router;
use axum::routing::get;

use super::handlers::health::healthz;
use crate::presentation::AppState;

pub(crate) mod comments;
pub(crate) mod likes;
pub(crate) mod posts;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .nest("/posts", posts::router(state.clone()))
        .nest("/comments", comments::router(state.clone()))
        .nest("/likes", likes::router(state))
}
