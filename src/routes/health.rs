use axum::extract::State;

use crate::error::AppError;
use crate::routes::AppState;

pub async fn health() -> &'static str {
    "OK"
}

/// Readiness check: the database must answer.
pub async fn ready(State(state): State<AppState>) -> Result<&'static str, AppError> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    Ok("READY")
}
