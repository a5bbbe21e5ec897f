pub mod post_repository;
pub mod user_repository;

use serde::Serialize;

/// Failure reported by a persistence gateway. Serialized verbatim into the
/// `err` field of 500 responses.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "message", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepoError {
    #[error("db error: {0}")]
    Db(String),

    #[error("constraint violated: {0}")]
    Constraint(String),
}

pub use post_repository::PostRepository;
pub use user_repository::UserRepository;
