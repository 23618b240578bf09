//! The seam between the catalog and wherever rows come from.
//!
//! Concrete sources (the sheet API, a local export) live in `pour-source`;
//! tests plug in their own.

use crate::{error::SourceError, types::RawRow};
use std::future::Future;

/// A one-shot provider of raw recipe rows.
pub trait RowSource: Send + Sync {
    /// Short human-readable description for logs (a URL or a path).
    fn describe(&self) -> String;

    /// Fetch the complete row list.
    fn fetch(&self) -> impl Future<Output = Result<Vec<RawRow>, SourceError>> + Send;
}
