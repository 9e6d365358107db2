use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("validation failed: {0}")]
    Validation(String),

    /// A payload referenced an ingredient, tag, or user that does not exist
    /// in the catalog.
    #[error("{entity} {id} not found")]
    MissingReference { entity: &'static str, id: i64 },

    #[error("recipe {0} not found")]
    NotFound(i64),

    #[error("only the author can modify this recipe")]
    PermissionDenied,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
