//! Favorite/cart membership ledgers and shopping list aggregation.

pub mod aggregation;
mod error;
pub mod ledger;

pub use aggregation::{ShoppingListLine, aggregate, render, sum_by_name_and_unit};
pub use error::LedgerError;
pub use ledger::{Ledger, add, remove};
