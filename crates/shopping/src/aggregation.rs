//! Shopping list aggregation: every ingredient amount from every recipe in
//! the user's cart, reduced to one total per ingredient.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::SqlitePool;

/// One aggregated output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingListLine {
    pub name: String,
    pub measurement_unit: String,
    pub total: i64,
}

/// Aggregate the ingredient amounts of every recipe in the user's cart.
///
/// Grouping key is (name, measurement_unit), not ingredient id: two
/// distinct catalog rows that share name and unit merge into a single
/// line. That is long-standing behavior of this system and is kept
/// deliberately. An empty cart yields an empty list.
pub async fn aggregate(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<ShoppingListLine>, sqlx::Error> {
    let rows: Vec<(String, String, i64)> = sqlx::query_as(
        "SELECT i.name, i.measurement_unit, ri.amount
         FROM shopping_cart sc
         JOIN recipe_ingredients ri ON ri.recipe_id = sc.recipe_id
         JOIN ingredients i ON i.id = ri.ingredient_id
         WHERE sc.user_id = ?",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(sum_by_name_and_unit(rows))
}

/// Group (name, unit, amount) triples by (name, unit) and sum the amounts.
/// Output is sorted by name, then unit, so it is deterministic.
pub fn sum_by_name_and_unit(
    rows: impl IntoIterator<Item = (String, String, i64)>,
) -> Vec<ShoppingListLine> {
    let mut groups: HashMap<(String, String), i64> = HashMap::new();
    for (name, unit, amount) in rows {
        *groups.entry((name, unit)).or_insert(0) += amount;
    }

    let mut lines: Vec<ShoppingListLine> = groups
        .into_iter()
        .map(|((name, measurement_unit), total)| ShoppingListLine {
            name,
            measurement_unit,
            total,
        })
        .collect();
    lines.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.measurement_unit.cmp(&b.measurement_unit))
    });
    lines
}

/// Render the downloadable plain-text document, one line per ingredient.
pub fn render(lines: &[ShoppingListLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&format!(
            "{}: {} {}\n",
            line.name, line.total, line.measurement_unit
        ));
    }
    out
}
