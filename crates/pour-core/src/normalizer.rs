//! Normalizer — turns decoded [`RawRow`]s into canonical [`Recipe`]s.
//!
//! Normalisation never fails. A row missing every cell still yields a recipe;
//! it just has nothing to show and nothing to match.

use crate::types::{RawRow, Recipe};

/// Normalise one row.
///
/// `id` and `name` are copied as-is. `ingredients` is split on `,`, each piece
/// trimmed, and empty pieces dropped. `method`, `glass` and `garnish` default
/// to an empty string.
pub fn normalize(raw: RawRow) -> Recipe {
    Recipe {
        id: raw.id,
        name: raw.name,
        ingredients: raw.ingredients.as_deref().map(split_ingredients).unwrap_or_default(),
        method: raw.method.unwrap_or_default(),
        glass: raw.glass.unwrap_or_default(),
        garnish: raw.garnish.unwrap_or_default(),
    }
}

/// Normalise a whole fetch, preserving row order.
pub fn normalize_all(rows: Vec<RawRow>) -> Vec<Recipe> {
    rows.into_iter().map(normalize).collect()
}

/// Split a comma-separated ingredient cell.
///
/// Order and duplicates are preserved; whitespace-only pieces are discarded.
pub fn split_ingredients(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
