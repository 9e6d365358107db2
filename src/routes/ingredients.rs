use axum::Json;
use axum::extract::{Query, State};
use potluck_recipe::{Ingredient, catalog};
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::IdPath;
use crate::routes::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct IngredientFilter {
    /// Name prefix search, matching from the start of the name.
    pub name: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<IngredientFilter>,
) -> Result<Json<Vec<Ingredient>>, AppError> {
    let ingredients = catalog::list_ingredients(&state.pool, filter.name.as_deref()).await?;
    Ok(Json(ingredients))
}

pub async fn retrieve(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Ingredient>, AppError> {
    let ingredient = catalog::get_ingredient(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("ingredient"))?;
    Ok(Json(ingredient))
}
