//! pour-core — recipe model and query pipeline for pour.
//!
//! This crate holds everything below the presentation layer: the raw and
//! canonical record types, the normalizer, the query matcher and the
//! [`Catalog`] that ties them together around a single fetch.
//!
//! # Architecture
//!
//! ```text
//! RowSource ──► Normalizer ──► Catalog ──► UI / headless output
//!                                 ▲
//!                      set_query ─┘ (Matcher + sort)
//! ```
//!
//! The fetch is the only asynchronous step. Everything after it is a
//! synchronous recomputation over an immutable in-memory collection.

pub mod catalog;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod search;
pub mod source;
pub mod types;

pub use catalog::{Catalog, CatalogView, LoadState};
pub use error::{FailureKind, SourceError};
pub use source::RowSource;
pub use types::{RawRow, Recipe};
