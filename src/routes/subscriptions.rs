use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use potluck_user::{Subscription, follow};
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::{Auth, IdPath};
use crate::routes::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct SubscriptionsQuery {
    /// Kept as a raw string so junk input falls back to the default limit
    /// instead of failing query deserialization.
    pub recipes_limit: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    auth: Auth,
    Query(params): Query<SubscriptionsQuery>,
) -> Result<Json<Vec<Subscription>>, AppError> {
    let limit = follow::parse_recipes_limit(params.recipes_limit.as_deref());
    let subscriptions = follow::list_following(&state.pool, auth.user_id, limit).await?;
    Ok(Json(subscriptions))
}

pub async fn subscribe(
    State(state): State<AppState>,
    auth: Auth,
    IdPath(author_id): IdPath,
) -> Result<(StatusCode, Json<Subscription>), AppError> {
    let subscription = follow::follow(&state.pool, auth.user_id, author_id).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

pub async fn unsubscribe(
    State(state): State<AppState>,
    auth: Auth,
    IdPath(author_id): IdPath,
) -> Result<StatusCode, AppError> {
    follow::unfollow(&state.pool, auth.user_id, author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
