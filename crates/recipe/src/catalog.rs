//! Read-only catalog lookups for ingredients and tags.

use sqlx::SqlitePool;

use crate::model::{Ingredient, Tag};

/// List ingredients, optionally filtered by a case-insensitive name prefix.
/// LIKE wildcards in the input are escaped, so `%` and `_` match
/// themselves literally.
pub async fn list_ingredients(
    pool: &SqlitePool,
    name_prefix: Option<&str>,
) -> Result<Vec<Ingredient>, sqlx::Error> {
    match name_prefix {
        Some(prefix) => {
            sqlx::query_as::<_, Ingredient>(
                "SELECT id, name, measurement_unit FROM ingredients
                 WHERE name LIKE ? || '%' ESCAPE '\\' ORDER BY name",
            )
            .bind(escape_like(prefix))
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, Ingredient>(
                "SELECT id, name, measurement_unit FROM ingredients ORDER BY name",
            )
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn get_ingredient(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Ingredient>, sqlx::Error> {
    sqlx::query_as::<_, Ingredient>(
        "SELECT id, name, measurement_unit FROM ingredients WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

pub async fn list_tags(pool: &SqlitePool) -> Result<Vec<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>("SELECT id, name, color, slug FROM tags ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn get_tag(pool: &SqlitePool, id: i64) -> Result<Option<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>("SELECT id, name, color, slug FROM tags WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}
