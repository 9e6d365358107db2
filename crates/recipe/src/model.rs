use serde::{Deserialize, Serialize};
use validator::Validate;

/// Catalog reference data: an ingredient with its measurement unit.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}

/// Catalog reference data: a recipe tag.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub slug: String,
}

/// Raw recipe row as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub author_id: i64,
    pub image: String,
    pub text: String,
    pub cooking_time: i64,
}

/// One (ingredient, amount) pair in the write payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub id: i64,
    pub amount: i64,
}

/// Write payload for recipe create/update. The author is never part of the
/// payload; it is always the acting identity passed to the command.
///
/// Cross-field rules (duplicate ingredient/tag references, per-ingredient
/// amounts) live in [`crate::validate_composition`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 250, message = "must be between 1 and 250 characters"))]
    pub name: String,
    pub text: String,
    pub image: String,
    #[validate(range(min = 1, message = "must be greater than zero"))]
    pub cooking_time: i64,
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<IngredientAmount>,
    #[serde(default)]
    pub tags: Vec<i64>,
}

/// Narrowing criteria for the recipe listing. The default filter matches
/// every recipe. Multiple tag slugs widen the match (any-of); the
/// membership flags are resolved against the viewing identity and are
/// ignored for anonymous viewers.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub author: Option<i64>,
    pub tags: Vec<String>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

/// Expanded author block in the read shape.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
}

/// An ingredient line in the read shape: catalog fields plus the amount
/// from the junction row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct IngredientLine {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i64,
}

/// Full read shape, deliberately asymmetric to [`RecipeInput`]: author and
/// ingredients are expanded, and the membership flags are resolved for the
/// viewing identity (false when anonymous).
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub name: String,
    pub tags: Vec<Tag>,
    pub author: AuthorInfo,
    pub ingredients: Vec<IngredientLine>,
    pub image: String,
    pub text: String,
    pub cooking_time: i64,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

/// Compact recipe shape used by ledger responses and subscription listings.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RecipePreview {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub cooking_time: i64,
}
