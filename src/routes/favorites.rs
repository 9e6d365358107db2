use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use potluck_recipe::RecipePreview;
use potluck_shopping::{Ledger, ledger};

use crate::error::AppError;
use crate::middleware::{Auth, IdPath};
use crate::routes::AppState;

pub async fn add(
    State(state): State<AppState>,
    auth: Auth,
    IdPath(recipe_id): IdPath,
) -> Result<(StatusCode, Json<RecipePreview>), AppError> {
    let preview = ledger::add(&state.pool, Ledger::Favorites, auth.user_id, recipe_id).await?;
    Ok((StatusCode::CREATED, Json(preview)))
}

pub async fn remove(
    State(state): State<AppState>,
    auth: Auth,
    IdPath(recipe_id): IdPath,
) -> Result<StatusCode, AppError> {
    ledger::remove(&state.pool, Ledger::Favorites, auth.user_id, recipe_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
