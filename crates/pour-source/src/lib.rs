//! pour-source — recipe row sources for pour.
//!
//! Each source produces the complete row list in one call through
//! [`pour_core::RowSource`]. [`HttpSource`] talks to the sheet API;
//! [`FileSource`] reads a JSON export of the same shape from disk.

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use pour_core::{RawRow, SourceError};

/// Decode a response body into rows.
///
/// The body must be a JSON array of objects. Anything else, including a JSON
/// object wrapping the array, is a parse failure.
pub fn decode_rows(body: &[u8]) -> Result<Vec<RawRow>, SourceError> {
    let rows: Vec<RawRow> = serde_json::from_slice(body)?;
    Ok(rows)
}
