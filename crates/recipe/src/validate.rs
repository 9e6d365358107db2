use std::collections::HashSet;

use validator::Validate;

use crate::error::RecipeError;
use crate::model::RecipeInput;

/// Validate a recipe payload before any write happens.
///
/// Field-level rules (name length, positive cooking time, non-empty
/// ingredient list) are declared on [`RecipeInput`] via `validator`; the
/// cross-field rules here cover per-ingredient amounts and duplicate
/// ingredient/tag references. Duplicates are compared by id, never by name.
pub fn validate_composition(input: &RecipeInput) -> Result<(), RecipeError> {
    if let Err(errors) = input.validate() {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                format!("{field}: {message}")
            })
            .collect();
        fields.sort();
        return Err(RecipeError::Validation(fields.join("; ")));
    }

    let mut seen_ingredients = HashSet::new();
    for ingredient in &input.ingredients {
        if ingredient.amount <= 0 {
            return Err(RecipeError::Validation(format!(
                "amount for ingredient {} must be greater than zero",
                ingredient.id
            )));
        }
        if !seen_ingredients.insert(ingredient.id) {
            return Err(RecipeError::Validation(format!(
                "ingredient {} is listed more than once",
                ingredient.id
            )));
        }
    }

    let mut seen_tags = HashSet::new();
    for tag_id in &input.tags {
        if !seen_tags.insert(*tag_id) {
            return Err(RecipeError::Validation(format!(
                "tag {tag_id} is listed more than once"
            )));
        }
    }

    Ok(())
}
