//! Path-id extraction that keeps rejections inside the JSON error shape.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// A numeric `{id}` path segment. A non-numeric segment is rejected with
/// the same JSON envelope every other error path produces, instead of
/// axum's plain-text default.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) => Err(AppError::InvalidPath(rejection_message(&rejection))),
        }
    }
}

fn rejection_message(rejection: &PathRejection) -> String {
    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => {
            "path id must be a number".to_string()
        }
        other => other.to_string(),
    }
}
