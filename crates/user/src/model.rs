use potluck_recipe::RecipePreview;
use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Subscription listing entry: a followed author with a capped preview of
/// their newest recipes.
#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub recipes: Vec<RecipePreview>,
    pub recipes_count: i64,
    pub is_subscribed: bool,
}
