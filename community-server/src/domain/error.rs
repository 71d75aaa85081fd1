use std::fmt;

use thiserror::Error;

/// Entities the core can report as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entity {
    Post,
    Comment,
    User,
}

impl Entity {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Entity::Post => "post",
            Entity::Comment => "comment",
            Entity::User => "user",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub(crate) enum DomainError {
    #[error("validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error("{0} not found")]
    NotFound(Entity),

    /// The requester is known but does not own the resource.
    #[error("you are not the owner of this resource")]
    Unauthorized,

    #[error("store failure: {0}")]
    Infrastructure(String),

    #[error("unexpected domain error: {0}")]
    Unexpected(String),
}
