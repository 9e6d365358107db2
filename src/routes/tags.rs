use axum::Json;
use axum::extract::State;
use potluck_recipe::{Tag, catalog};

use crate::error::AppError;
use crate::middleware::IdPath;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, AppError> {
    let tags = catalog::list_tags(&state.pool).await?;
    Ok(Json(tags))
}

pub async fn retrieve(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Tag>, AppError> {
    let tag = catalog::get_tag(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("tag"))?;
    Ok(Json(tag))
}
