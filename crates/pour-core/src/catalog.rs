//! Catalog — the recipe collection, its load state and the current view.
//!
//! A catalog starts out [`LoadState::Loading`] and moves exactly once, to
//! either [`LoadState::Ready`] or [`LoadState::Failed`]. After that the
//! recipe collection never changes; [`Catalog::set_query`] only rebuilds the
//! view, which is a list of indices into the collection sorted by name.

use crate::{
    error::SourceError,
    normalizer,
    search::{self, compare_names},
    source::RowSource,
    types::{RawRow, Recipe},
};

/// Message shown to the user for any failed load. The underlying cause goes
/// to the log.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch recipes";

/// `1 recipe found`, `3 recipes found`.
pub fn count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} recipe{plural} found")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Terminal. Carries the user-facing message.
    Failed(String),
}

/// Everything the presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    pub recipes: Vec<&'a Recipe>,
    pub loading: bool,
    pub error: Option<&'a str>,
}

impl CatalogView<'_> {
    pub fn count(&self) -> usize {
        self.recipes.len()
    }
}

#[derive(Debug)]
pub struct Catalog {
    state: LoadState,
    recipes: Vec<Recipe>,
    query: String,
    normalized_query: String,
    /// Indices into `recipes`, filtered and sorted.
    view: Vec<usize>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// A catalog waiting for its one load.
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            recipes: Vec::new(),
            query: String::new(),
            normalized_query: String::new(),
            view: Vec::new(),
        }
    }

    /// Fetch from `source` and record the outcome.
    pub async fn load<S: RowSource>(&mut self, source: &S) {
        tracing::debug!(source = %source.describe(), "catalog: fetching rows");
        let outcome = source.fetch().await;
        self.finish(outcome);
    }

    /// Record the outcome of the load.
    ///
    /// Only the first call has any effect; the catalog never reloads.
    pub fn finish(&mut self, outcome: Result<Vec<RawRow>, SourceError>) {
        if self.state != LoadState::Loading {
            tracing::warn!(state = ?self.state, "catalog: load already finished, ignoring outcome");
            return;
        }

        match outcome {
            Ok(rows) => {
                self.recipes = normalizer::normalize_all(rows);
                self.state = LoadState::Ready;
                tracing::info!(recipes = self.recipes.len(), "catalog: ready");
            }
            Err(err) => {
                tracing::error!(error = %err, kind = ?err.kind(), "catalog: load failed");
                self.recipes.clear();
                self.state = LoadState::Failed(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        self.rebuild_view();
    }

    /// Replace the query and recompute the view. Never triggers a fetch.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        let normalized = search::normalize_query(query);
        if normalized != self.normalized_query {
            self.normalized_query = normalized;
            self.rebuild_view();
        }
        tracing::debug!(
            query = %self.query,
            matches = self.view.len(),
            "catalog: query updated"
        );
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// The query as last typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query as used for matching.
    pub fn normalized_query(&self) -> &str {
        &self.normalized_query
    }

    /// Number of recipes in the current view.
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Number of recipes loaded, regardless of the query.
    pub fn total(&self) -> usize {
        self.recipes.len()
    }

    /// The recipe at `position` in the current view.
    pub fn get(&self, position: usize) -> Option<&Recipe> {
        self.view.get(position).map(|&idx| &self.recipes[idx])
    }

    /// Matching recipes in display order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.view.iter().map(|&idx| &self.recipes[idx])
    }

    pub fn snapshot(&self) -> CatalogView<'_> {
        CatalogView {
            recipes: self.recipes().collect(),
            loading: self.is_loading(),
            error: self.error(),
        }
    }

    fn rebuild_view(&mut self) {
        let query = self.normalized_query.as_str();
        let recipes = &self.recipes;
        let mut view: Vec<usize> = recipes
            .iter()
            .enumerate()
            .filter(|(_, recipe)| search::matches(recipe, query))
            .map(|(idx, _)| idx)
            .collect();
        // Stable, so recipes with equal or missing names keep sheet order.
        view.sort_by(|&a, &b| compare_names(recipes[a].name.as_deref(), recipes[b].name.as_deref()));
        self.view = view;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
