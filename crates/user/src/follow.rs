//! Follow graph operations. Edges are directed (follower → author); the
//! UNIQUE (user_id, author_id) constraint rejects duplicate edges, races
//! included.

use potluck_recipe::query as recipe_query;
use sqlx::SqlitePool;

use crate::error::FollowError;
use crate::model::{Subscription, UserRow};

/// Preview cap used when the caller does not specify `recipes_limit`.
pub const DEFAULT_RECIPES_LIMIT: i64 = 10;

/// Parse the `recipes_limit` query parameter. Missing, non-numeric, or
/// non-positive input falls back to the default instead of erroring.
pub fn parse_recipes_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_RECIPES_LIMIT)
}

/// Create a follow edge and return the subscription view of the author.
pub async fn follow(
    pool: &SqlitePool,
    user_id: i64,
    author_id: i64,
) -> Result<Subscription, FollowError> {
    if user_id == author_id {
        return Err(FollowError::SelfFollow);
    }

    let author = get_user(pool, author_id)
        .await?
        .ok_or(FollowError::AuthorNotFound(author_id))?;

    match sqlx::query("INSERT INTO follows (user_id, author_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(author_id)
        .execute(pool)
        .await
    {
        Ok(_) => {}
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            return Err(FollowError::AlreadyFollowing(author_id));
        }
        Err(err) => return Err(err.into()),
    }

    tracing::info!(user_id, author_id, "follow edge created");
    subscription(pool, author, DEFAULT_RECIPES_LIMIT).await
}

/// Remove a follow edge; absence is an error, not a silent success.
pub async fn unfollow(pool: &SqlitePool, user_id: i64, author_id: i64) -> Result<(), FollowError> {
    let result = sqlx::query("DELETE FROM follows WHERE user_id = ? AND author_id = ?")
        .bind(user_id)
        .bind(author_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(FollowError::NotFollowing(author_id));
    }

    tracing::info!(user_id, author_id, "follow edge removed");
    Ok(())
}

/// Authors the user follows, each with up to `recipes_limit` newest recipe
/// previews and their total recipe count.
pub async fn list_following(
    pool: &SqlitePool,
    user_id: i64,
    recipes_limit: i64,
) -> Result<Vec<Subscription>, FollowError> {
    let authors = sqlx::query_as::<_, UserRow>(
        "SELECT u.id, u.username, u.email, u.first_name, u.last_name
         FROM users u
         JOIN follows f ON f.author_id = u.id
         WHERE f.user_id = ?
         ORDER BY u.username",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut subscriptions = Vec::with_capacity(authors.len());
    for author in authors {
        subscriptions.push(subscription(pool, author, recipes_limit).await?);
    }
    Ok(subscriptions)
}

pub async fn get_user(pool: &SqlitePool, user_id: i64) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        "SELECT id, username, email, first_name, last_name FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

async fn subscription(
    pool: &SqlitePool,
    author: UserRow,
    recipes_limit: i64,
) -> Result<Subscription, FollowError> {
    let recipes = recipe_query::previews_by_author(pool, author.id, recipes_limit).await?;
    let recipes_count = recipe_query::count_by_author(pool, author.id).await?;

    Ok(Subscription {
        id: author.id,
        username: author.username,
        email: author.email,
        first_name: author.first_name,
        last_name: author.last_name,
        recipes,
        recipes_count,
        // The listing only ever contains authors the user follows.
        is_subscribed: true,
    })
}
