//! Recipe composition: catalog reference data, validation of a recipe's
//! many-to-many ingredient/tag composition, and transactional persistence
//! with replace-all update semantics.

pub mod catalog;
pub mod command;
mod error;
pub mod model;
pub mod query;
mod validate;

pub use error::RecipeError;
pub use model::{
    AuthorInfo, Ingredient, IngredientAmount, IngredientLine, RecipeDetail, RecipeFilter,
    RecipeInput, RecipePreview, RecipeRow, Tag,
};
pub use validate::validate_composition;
