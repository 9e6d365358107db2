use thiserror::Error;

#[derive(Debug, Error)]
pub enum FollowError {
    /// Self-follow is a validation error, checked before any lookup so it
    /// never surfaces as a not-found.
    #[error("cannot follow yourself")]
    SelfFollow,

    #[error("already following author {0}")]
    AlreadyFollowing(i64),

    #[error("author {0} not found")]
    AuthorNotFound(i64),

    #[error("not following author {0}")]
    NotFollowing(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
