use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use potluck_recipe::RecipePreview;
use potluck_shopping::{Ledger, aggregation, ledger};

use crate::error::AppError;
use crate::middleware::{Auth, IdPath};
use crate::routes::AppState;

pub async fn add(
    State(state): State<AppState>,
    auth: Auth,
    IdPath(recipe_id): IdPath,
) -> Result<(StatusCode, Json<RecipePreview>), AppError> {
    let preview = ledger::add(&state.pool, Ledger::ShoppingCart, auth.user_id, recipe_id).await?;
    Ok((StatusCode::CREATED, Json(preview)))
}

pub async fn remove(
    State(state): State<AppState>,
    auth: Auth,
    IdPath(recipe_id): IdPath,
) -> Result<StatusCode, AppError> {
    ledger::remove(&state.pool, Ledger::ShoppingCart, auth.user_id, recipe_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Aggregate the user's cart into a downloadable plain-text shopping list.
/// An empty cart downloads as an empty document.
pub async fn download(State(state): State<AppState>, auth: Auth) -> Result<Response, AppError> {
    let lines = aggregation::aggregate(&state.pool, auth.user_id).await?;
    let body = aggregation::render(&lines);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"list.txt\"",
            ),
        ],
        body,
    )
        .into_response())
}
