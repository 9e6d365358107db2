use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use potluck_recipe::{RecipeDetail, RecipeFilter, RecipeInput, command, query};

use crate::error::AppError;
use crate::middleware::{Auth, IdPath, OptionalAuth};
use crate::routes::AppState;

/// Build the listing filter from raw query pairs. `tags` may repeat, so
/// the query string is taken as pairs rather than a keyed struct.
fn parse_filter(params: &[(String, String)]) -> RecipeFilter {
    let mut filter = RecipeFilter::default();
    for (key, value) in params {
        match key.as_str() {
            "author" => filter.author = value.parse().ok(),
            "tags" => filter.tags.push(value.clone()),
            "is_favorited" => filter.is_favorited = truthy(value),
            "is_in_shopping_cart" => filter.is_in_shopping_cart = truthy(value),
            _ => {}
        }
    }
    filter
}

fn truthy(value: &str) -> bool {
    matches!(value, "1" | "true" | "True")
}

pub async fn list(
    State(state): State<AppState>,
    OptionalAuth(viewer): OptionalAuth,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<RecipeDetail>>, AppError> {
    let filter = parse_filter(&params);
    let recipes = query::list(&state.pool, viewer, &filter).await?;
    Ok(Json(recipes))
}

pub async fn retrieve(
    State(state): State<AppState>,
    OptionalAuth(viewer): OptionalAuth,
    IdPath(id): IdPath,
) -> Result<Json<RecipeDetail>, AppError> {
    let recipe = query::detail(&state.pool, id, viewer).await?;
    Ok(Json(recipe))
}

pub async fn create(
    State(state): State<AppState>,
    auth: Auth,
    Json(input): Json<RecipeInput>,
) -> Result<(StatusCode, Json<RecipeDetail>), AppError> {
    let recipe = command::create(&state.pool, auth.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn update(
    State(state): State<AppState>,
    auth: Auth,
    IdPath(id): IdPath,
    Json(input): Json<RecipeInput>,
) -> Result<Json<RecipeDetail>, AppError> {
    let recipe = command::update(&state.pool, auth.user_id, id, &input).await?;
    Ok(Json(recipe))
}

pub async fn remove(
    State(state): State<AppState>,
    auth: Auth,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    command::delete(&state.pool, auth.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
