use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use potluck_recipe::RecipeError;
use potluck_shopping::LedgerError;
use potluck_user::FollowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("authentication required")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    InvalidPath(String),

    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Follow(#[from] FollowError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                self.to_string(),
            ),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound", self.to_string()),

            AppError::InvalidPath(_) => {
                (StatusCode::BAD_REQUEST, "ValidationError", self.to_string())
            }

            AppError::Recipe(err) => match err {
                RecipeError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, "ValidationError", err.to_string())
                }
                RecipeError::MissingReference { .. } | RecipeError::NotFound(_) => {
                    (StatusCode::NOT_FOUND, "NotFound", err.to_string())
                }
                RecipeError::PermissionDenied => {
                    (StatusCode::FORBIDDEN, "PermissionDenied", err.to_string())
                }
                RecipeError::Database(e) => return internal("recipe", e),
            },

            AppError::Ledger(err) => match err {
                LedgerError::RecipeNotFound(_) | LedgerError::NotInLedger { .. } => {
                    (StatusCode::NOT_FOUND, "NotFound", err.to_string())
                }
                LedgerError::Duplicate { .. } => {
                    (StatusCode::CONFLICT, "Conflict", err.to_string())
                }
                LedgerError::Database(e) => return internal("ledger", e),
            },

            AppError::Follow(err) => match err {
                FollowError::SelfFollow => {
                    (StatusCode::BAD_REQUEST, "ValidationError", err.to_string())
                }
                FollowError::AlreadyFollowing(_) => {
                    (StatusCode::CONFLICT, "Conflict", err.to_string())
                }
                FollowError::AuthorNotFound(_) | FollowError::NotFollowing(_) => {
                    (StatusCode::NOT_FOUND, "NotFound", err.to_string())
                }
                FollowError::Database(e) => return internal("follow", e),
            },

            AppError::Database(e) => return internal("app", e),
        };

        let body = serde_json::json!({
            "error": kind,
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}

fn internal(scope: &str, err: &sqlx::Error) -> Response {
    tracing::error!(scope, error = ?err, "database error");
    let body = serde_json::json!({
        "error": "InternalServerError",
        "message": "An unexpected error occurred. Please try again later.",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
