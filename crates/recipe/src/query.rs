//! Read-shape assembly: expanded recipe representations for API responses.

use sqlx::SqlitePool;

use crate::error::RecipeError;
use crate::model::{
    AuthorInfo, IngredientLine, RecipeDetail, RecipeFilter, RecipePreview, RecipeRow, Tag,
};

/// Fetch the expanded representation of one recipe. Membership flags and
/// `author.is_subscribed` are resolved against `viewer`; all three are
/// false for anonymous callers.
pub async fn detail(
    pool: &SqlitePool,
    recipe_id: i64,
    viewer: Option<i64>,
) -> Result<RecipeDetail, RecipeError> {
    let row = sqlx::query_as::<_, RecipeRow>(
        "SELECT id, name, author_id, image, text, cooking_time FROM recipes WHERE id = ?",
    )
    .bind(recipe_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RecipeError::NotFound(recipe_id))?;

    assemble(pool, row, viewer).await
}

/// Recipes matching `filter`, newest first (id order doubles as creation
/// order). Tag slugs widen the match; the membership criteria narrow to
/// the viewer's ledgers and are ignored for anonymous viewers.
pub async fn list(
    pool: &SqlitePool,
    viewer: Option<i64>,
    filter: &RecipeFilter,
) -> Result<Vec<RecipeDetail>, RecipeError> {
    let mut sql = String::from(
        "SELECT id, name, author_id, image, text, cooking_time FROM recipes WHERE 1 = 1",
    );

    if filter.author.is_some() {
        sql.push_str(" AND author_id = ?");
    }
    if !filter.tags.is_empty() {
        let marks = vec!["?"; filter.tags.len()].join(", ");
        sql.push_str(&format!(
            " AND id IN (SELECT rt.recipe_id FROM recipe_tags rt
                         JOIN tags t ON t.id = rt.tag_id
                         WHERE t.slug IN ({marks}))"
        ));
    }
    if filter.is_favorited && viewer.is_some() {
        sql.push_str(" AND id IN (SELECT recipe_id FROM favorites WHERE user_id = ?)");
    }
    if filter.is_in_shopping_cart && viewer.is_some() {
        sql.push_str(" AND id IN (SELECT recipe_id FROM shopping_cart WHERE user_id = ?)");
    }
    sql.push_str(" ORDER BY id DESC");

    let mut query = sqlx::query_as::<_, RecipeRow>(&sql);
    if let Some(author_id) = filter.author {
        query = query.bind(author_id);
    }
    for slug in &filter.tags {
        query = query.bind(slug);
    }
    if filter.is_favorited && let Some(user_id) = viewer {
        query = query.bind(user_id);
    }
    if filter.is_in_shopping_cart && let Some(user_id) = viewer {
        query = query.bind(user_id);
    }

    let rows = query.fetch_all(pool).await?;

    let mut details = Vec::with_capacity(rows.len());
    for row in rows {
        details.push(assemble(pool, row, viewer).await?);
    }
    Ok(details)
}

async fn assemble(
    pool: &SqlitePool,
    row: RecipeRow,
    viewer: Option<i64>,
) -> Result<RecipeDetail, RecipeError> {
    let ingredients = sqlx::query_as::<_, IngredientLine>(
        "SELECT i.id, i.name, i.measurement_unit, ri.amount
         FROM recipe_ingredients ri
         JOIN ingredients i ON i.id = ri.ingredient_id
         WHERE ri.recipe_id = ?
         ORDER BY ri.id",
    )
    .bind(row.id)
    .fetch_all(pool)
    .await?;

    let tags = sqlx::query_as::<_, Tag>(
        "SELECT t.id, t.name, t.color, t.slug
         FROM recipe_tags rt
         JOIN tags t ON t.id = rt.tag_id
         WHERE rt.recipe_id = ?
         ORDER BY rt.id",
    )
    .bind(row.id)
    .fetch_all(pool)
    .await?;

    let author = author_info(pool, row.author_id, viewer).await?;

    let (is_favorited, is_in_shopping_cart) = match viewer {
        Some(user_id) => (
            membership(pool, "favorites", user_id, row.id).await?,
            membership(pool, "shopping_cart", user_id, row.id).await?,
        ),
        None => (false, false),
    };

    Ok(RecipeDetail {
        id: row.id,
        name: row.name,
        tags,
        author,
        ingredients,
        image: row.image,
        text: row.text,
        cooking_time: row.cooking_time,
        is_favorited,
        is_in_shopping_cart,
    })
}

/// Expanded author block; `is_subscribed` reflects whether `viewer`
/// follows the author.
pub async fn author_info(
    pool: &SqlitePool,
    author_id: i64,
    viewer: Option<i64>,
) -> Result<AuthorInfo, RecipeError> {
    let row = sqlx::query_as::<_, (i64, String, String, String, String)>(
        "SELECT id, username, email, first_name, last_name FROM users WHERE id = ?",
    )
    .bind(author_id)
    .fetch_optional(pool)
    .await?
    .ok_or(RecipeError::MissingReference {
        entity: "user",
        id: author_id,
    })?;

    let is_subscribed = match viewer {
        Some(user_id) => {
            let count: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM follows WHERE user_id = ? AND author_id = ?",
            )
            .bind(user_id)
            .bind(author_id)
            .fetch_one(pool)
            .await?;
            count > 0
        }
        None => false,
    };

    Ok(AuthorInfo {
        id: row.0,
        username: row.1,
        email: row.2,
        first_name: row.3,
        last_name: row.4,
        is_subscribed,
    })
}

async fn membership(
    pool: &SqlitePool,
    table: &str,
    user_id: i64,
    recipe_id: i64,
) -> Result<bool, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {table} WHERE user_id = ? AND recipe_id = ?");
    let count: i64 = sqlx::query_scalar(&sql)
        .bind(user_id)
        .bind(recipe_id)
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

/// Compact shape for one recipe.
pub async fn preview(
    pool: &SqlitePool,
    recipe_id: i64,
) -> Result<Option<RecipePreview>, sqlx::Error> {
    sqlx::query_as::<_, RecipePreview>(
        "SELECT id, name, image, cooking_time FROM recipes WHERE id = ?",
    )
    .bind(recipe_id)
    .fetch_optional(pool)
    .await
}

/// Newest recipes by one author, capped at `limit`.
pub async fn previews_by_author(
    pool: &SqlitePool,
    author_id: i64,
    limit: i64,
) -> Result<Vec<RecipePreview>, sqlx::Error> {
    sqlx::query_as::<_, RecipePreview>(
        "SELECT id, name, image, cooking_time FROM recipes
         WHERE author_id = ? ORDER BY id DESC LIMIT ?",
    )
    .bind(author_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn count_by_author(pool: &SqlitePool, author_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE author_id = ?")
        .bind(author_id)
        .fetch_one(pool)
        .await
}
