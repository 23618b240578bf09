//! Test builders — ergonomic constructors for sheet rows and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use pour_core::{Catalog, RawRow};
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// RecipeRowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one sheet row.
///
/// Builds either a typed [`RawRow`] or the JSON object the sheet API would
/// send for it, so the same fixture can feed the normalizer directly or go
/// over the wire.
///
/// # Example
///
/// ```rust
/// let row = RecipeRowBuilder::new("Negroni")
///     .ingredients("Gin, Campari, Sweet vermouth")
///     .glass("Rocks")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeRowBuilder {
    id: Option<String>,
    name: Option<String>,
    ingredients: Option<String>,
    method: Option<String>,
    glass: Option<String>,
    garnish: Option<String>,
}

impl RecipeRowBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    /// A row with no `name` cell at all.
    pub fn nameless() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn glass(mut self, glass: impl Into<String>) -> Self {
        self.glass = Some(glass.into());
        self
    }

    pub fn garnish(mut self, garnish: impl Into<String>) -> Self {
        self.garnish = Some(garnish.into());
        self
    }

    pub fn build(self) -> RawRow {
        RawRow {
            id: self.id,
            name: self.name,
            ingredients: self.ingredients,
            method: self.method,
            glass: self.glass,
            garnish: self.garnish,
        }
    }

    /// The row as a JSON object; absent cells are omitted.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        let cells = [
            ("id", &self.id),
            ("name", &self.name),
            ("ingredients", &self.ingredients),
            ("method", &self.method),
            ("glass", &self.glass),
            ("garnish", &self.garnish),
        ];
        for (key, value) in cells {
            if let Some(v) = value {
                obj.insert(key.to_string(), json!(v));
            }
        }
        Value::Object(obj)
    }
}

/// JSON array body for a list of rows.
pub fn rows_to_json(rows: &[RecipeRowBuilder]) -> Value {
    Value::Array(rows.iter().map(RecipeRowBuilder::to_json).collect())
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// A catalog that has already finished loading `rows`.
pub fn ready_catalog(rows: &[RecipeRowBuilder]) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.finish(Ok(rows.iter().cloned().map(RecipeRowBuilder::build).collect()));
    catalog
}

/// Display names of the recipes currently in view, in order.
pub fn view_names(catalog: &Catalog) -> Vec<String> {
    catalog
        .snapshot()
        .recipes
        .iter()
        .map(|r| r.display_name().to_string())
        .collect()
}
