//! Core types for pour-core.
//!
//! [`RawRow`] mirrors one row of the upstream sheet as the API returns it.
//! [`Recipe`] is the canonical record every other layer works with.

use serde::{Deserialize, Serialize};

/// One row of the recipe sheet, exactly as decoded from the API response.
///
/// Every cell is optional. Unknown columns are ignored so the sheet can grow
/// without breaking decoding. Numeric and boolean cells are accepted and kept
/// as their text form, since spreadsheet APIs are loose about cell types.
/// In the content cells (`ingredients`, `method`, `glass`, `garnish`) a
/// `false` or numeric zero counts as an empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    #[serde(default, deserialize_with = "lenient::cell")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::cell")]
    pub name: Option<String>,
    /// Comma-separated ingredient list in a single cell.
    #[serde(default, deserialize_with = "lenient::truthy_cell")]
    pub ingredients: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy_cell")]
    pub method: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy_cell")]
    pub glass: Option<String>,
    #[serde(default, deserialize_with = "lenient::truthy_cell")]
    pub garnish: Option<String>,
}

/// A normalised recipe.
///
/// `id` and `name` are copied verbatim from the sheet and may be missing on a
/// malformed row. Every other field is always present; absent cells become an
/// empty string or an empty ingredient list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Trimmed, non-empty ingredient entries in sheet order. Duplicates kept.
    pub ingredients: Vec<String>,
    pub method: String,
    pub glass: String,
    pub garnish: String,
}

impl Recipe {
    /// Name to show, empty when the row had none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Key used to tell cards apart: the id, or the name when the id is
    /// missing or empty. Not guaranteed unique across the sheet.
    pub fn key(&self) -> &str {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => self.display_name(),
        }
    }
}

mod lenient {
    use serde::{de, Deserialize, Deserializer};
    use serde_json::Value;

    pub fn cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(Value::Array(_)) => Err(de::Error::custom("expected a text cell, found an array")),
            Some(Value::Object(_)) => {
                Err(de::Error::custom("expected a text cell, found an object"))
            }
        }
    }

    /// Like [`cell`], but `false` and numeric zero are treated as absent.
    pub fn truthy_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Bool(false)) => Ok(None),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
            other => cell(other.unwrap_or(Value::Null)).map_err(de::Error::custom),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
