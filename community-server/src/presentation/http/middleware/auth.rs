use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::domain::identity::Identity;
use crate::presentation::AppState;
use crate::presentation::http::app_error::AppError;

pub(crate) const ID_TOKEN_HEADER: &str = "id_token";

#[derive(Debug, Clone)]
pub(crate) struct AuthenticatedUser {
    pub(crate) user_id: String,
    pub(crate) display_name: Option<String>,
}

impl From<Identity> for AuthenticatedUser {
    fn from(identity: Identity) -> Self {
        Self {
            user_id: identity.user_id,
            display_name: identity.display_name,
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Picks the raw token from `id_token`, falling back to `Authorization: Bearer`.
fn raw_token(headers: &HeaderMap) -> Option<&str> {
    let id_token = headers
        .get(ID_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if id_token.is_some() {
        return id_token;
    }

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())?;
    let mut parts = authorization.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token)
}

pub(crate) async fn id_token_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = raw_token(request.headers()).ok_or(AppError::Unauthorized)?;

    let identity = state.id_tokens.decode(token).map_err(|err| {
        debug!(error = %err, "rejected id token");
        AppError::Unauthorized
    })?;

    let user = AuthenticatedUser::from(identity);
    debug!(user_id = %user.user_id, display_name = ?user.display_name, "request authenticated");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
