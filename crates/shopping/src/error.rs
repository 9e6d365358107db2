use thiserror::Error;

use crate::ledger::Ledger;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("recipe {0} not found")]
    RecipeNotFound(i64),

    /// Duplicate-add policy: adding a (user, recipe) pair that already
    /// exists is rejected, never silently absorbed.
    #[error("recipe {recipe_id} is already in {ledger}")]
    Duplicate { ledger: Ledger, recipe_id: i64 },

    #[error("recipe {recipe_id} is not in {ledger}")]
    NotInLedger { ledger: Ledger, recipe_id: i64 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
