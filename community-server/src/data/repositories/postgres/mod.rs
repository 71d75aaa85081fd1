use crate::domain::error::{DomainError, Entity};

pub(crate) mod comment_repository;
pub(crate) mod feed_query;
pub(crate) mod like_repository;
pub(crate) mod post_repository;
pub(crate) mod user_repository;


const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Maps a driver error to the domain. Foreign-key violations name the
/// missing parent; everything else is an infrastructure failure.
pub(crate) fn map_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION)
    {
        return DomainError::NotFound(missing_entity(db_err.constraint()));
    }
    DomainError::Infrastructure(err.to_string())
}

fn missing_entity(constraint: Option<&str>) -> Entity {
    match constraint {
        Some("comments_post_id_fkey" | "likes_post_id_fkey") => Entity::Post,
        _ => Entity::User,
    }
}
