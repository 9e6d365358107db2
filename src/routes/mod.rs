pub mod favorites;
pub mod health;
pub mod ingredients;
pub mod recipes;
pub mod shopping;
pub mod subscriptions;
pub mod tags;

use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_secret: String,
}
