//! (user, recipe) membership ledgers. Favorites and the shopping cart are
//! structurally identical but fully independent sets; membership in one
//! never implies membership in the other.

use std::fmt;

use potluck_recipe::{RecipePreview, query as recipe_query};
use sqlx::SqlitePool;

use crate::error::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ledger {
    Favorites,
    ShoppingCart,
}

impl Ledger {
    fn table(self) -> &'static str {
        match self {
            Ledger::Favorites => "favorites",
            Ledger::ShoppingCart => "shopping_cart",
        }
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ledger::Favorites => write!(f, "favorites"),
            Ledger::ShoppingCart => write!(f, "the shopping cart"),
        }
    }
}

/// Add a recipe to the user's ledger.
///
/// The UNIQUE (user_id, recipe_id) constraint is the arbiter for
/// concurrent adds: of two simultaneous calls exactly one row is stored,
/// and the loser sees the unique violation mapped to
/// [`LedgerError::Duplicate`].
pub async fn add(
    pool: &SqlitePool,
    ledger: Ledger,
    user_id: i64,
    recipe_id: i64,
) -> Result<RecipePreview, LedgerError> {
    let preview = recipe_query::preview(pool, recipe_id)
        .await?
        .ok_or(LedgerError::RecipeNotFound(recipe_id))?;

    let sql = format!(
        "INSERT INTO {} (user_id, recipe_id) VALUES (?, ?)",
        ledger.table()
    );
    match sqlx::query(&sql).bind(user_id).bind(recipe_id).execute(pool).await {
        Ok(_) => {
            tracing::info!(user_id, recipe_id, %ledger, "ledger entry added");
            Ok(preview)
        }
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
            Err(LedgerError::Duplicate { ledger, recipe_id })
        }
        Err(err) => Err(err.into()),
    }
}

/// Remove a recipe from the user's ledger. Absence is an error, not a
/// silent success.
pub async fn remove(
    pool: &SqlitePool,
    ledger: Ledger,
    user_id: i64,
    recipe_id: i64,
) -> Result<(), LedgerError> {
    let sql = format!(
        "DELETE FROM {} WHERE user_id = ? AND recipe_id = ?",
        ledger.table()
    );
    let result = sqlx::query(&sql)
        .bind(user_id)
        .bind(recipe_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(LedgerError::NotInLedger { ledger, recipe_id });
    }

    tracing::info!(user_id, recipe_id, %ledger, "ledger entry removed");
    Ok(())
}
