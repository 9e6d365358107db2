//! Transactional recipe commands. Every mutation validates the full payload
//! first, then commits the recipe row and all of its junction rows in a
//! single transaction, so the composition invariants hold even under
//! partial failure.

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::RecipeError;
use crate::model::{RecipeDetail, RecipeInput};
use crate::query;
use crate::validate::validate_composition;

/// Create a recipe together with its full ingredient/tag composition.
/// The author is the acting identity, never payload data.
pub async fn create(
    pool: &SqlitePool,
    author_id: i64,
    input: &RecipeInput,
) -> Result<RecipeDetail, RecipeError> {
    validate_composition(input)?;

    let mut tx = pool.begin().await?;
    ensure_references(&mut tx, input).await?;

    let recipe_id = sqlx::query(
        "INSERT INTO recipes (name, author_id, image, text, cooking_time)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(author_id)
    .bind(&input.image)
    .bind(&input.text)
    .bind(input.cooking_time)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();

    insert_composition(&mut tx, recipe_id, input).await?;
    tx.commit().await?;

    tracing::info!(recipe_id, author_id, "recipe created");
    query::detail(pool, recipe_id, Some(author_id)).await
}

/// Update a recipe with replace-all composition semantics: all existing
/// junction rows and tag attachments are cleared, then rebuilt from the
/// payload — never merged. Id and author are kept. Owner-only.
pub async fn update(
    pool: &SqlitePool,
    acting_user_id: i64,
    recipe_id: i64,
    input: &RecipeInput,
) -> Result<RecipeDetail, RecipeError> {
    validate_composition(input)?;

    let mut tx = pool.begin().await?;
    let author_id = owned_by(&mut tx, recipe_id, acting_user_id).await?;
    ensure_references(&mut tx, input).await?;

    sqlx::query("UPDATE recipes SET name = ?, image = ?, text = ?, cooking_time = ? WHERE id = ?")
        .bind(&input.name)
        .bind(&input.image)
        .bind(&input.text)
        .bind(input.cooking_time)
        .bind(recipe_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = ?")
        .bind(recipe_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = ?")
        .bind(recipe_id)
        .execute(&mut *tx)
        .await?;

    insert_composition(&mut tx, recipe_id, input).await?;
    tx.commit().await?;

    tracing::info!(recipe_id, author_id, "recipe updated");
    query::detail(pool, recipe_id, Some(acting_user_id)).await
}

/// Delete a recipe; junction rows and ledger entries cascade. Owner-only.
pub async fn delete(
    pool: &SqlitePool,
    acting_user_id: i64,
    recipe_id: i64,
) -> Result<(), RecipeError> {
    let mut tx = pool.begin().await?;
    owned_by(&mut tx, recipe_id, acting_user_id).await?;

    sqlx::query("DELETE FROM recipes WHERE id = ?")
        .bind(recipe_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(recipe_id, user_id = acting_user_id, "recipe deleted");
    Ok(())
}

/// Returns the author id, or NotFound / PermissionDenied.
async fn owned_by(
    tx: &mut Transaction<'_, Sqlite>,
    recipe_id: i64,
    acting_user_id: i64,
) -> Result<i64, RecipeError> {
    let author_id: i64 = sqlx::query_scalar("SELECT author_id FROM recipes WHERE id = ?")
        .bind(recipe_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or(RecipeError::NotFound(recipe_id))?;

    if author_id != acting_user_id {
        return Err(RecipeError::PermissionDenied);
    }
    Ok(author_id)
}

/// Reference integrity: every ingredient and tag id must resolve in the
/// catalog before anything is written.
async fn ensure_references(
    tx: &mut Transaction<'_, Sqlite>,
    input: &RecipeInput,
) -> Result<(), RecipeError> {
    for ingredient in &input.ingredients {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM ingredients WHERE id = ?")
            .bind(ingredient.id)
            .fetch_optional(&mut **tx)
            .await?;
        if found.is_none() {
            return Err(RecipeError::MissingReference {
                entity: "ingredient",
                id: ingredient.id,
            });
        }
    }

    for tag_id in &input.tags {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&mut **tx)
            .await?;
        if found.is_none() {
            return Err(RecipeError::MissingReference {
                entity: "tag",
                id: *tag_id,
            });
        }
    }

    Ok(())
}

async fn insert_composition(
    tx: &mut Transaction<'_, Sqlite>,
    recipe_id: i64,
    input: &RecipeInput,
) -> Result<(), RecipeError> {
    for ingredient in &input.ingredients {
        sqlx::query(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount) VALUES (?, ?, ?)",
        )
        .bind(recipe_id)
        .bind(ingredient.id)
        .bind(ingredient.amount)
        .execute(&mut **tx)
        .await?;
    }

    for tag_id in &input.tags {
        sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id) VALUES (?, ?)")
            .bind(recipe_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await?;
    }

    Ok(())
}
