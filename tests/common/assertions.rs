//! Domain-specific assertion macros for pour harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! catalog property was violated and what the catalog held at the time.

// ---------------------------------------------------------------------------
// View assertions
// ---------------------------------------------------------------------------

/// Assert the exact ordered list of recipe names in a catalog's view.
///
/// ```rust
/// assert_recipe_names!(catalog, ["Martini", "Mojito"]);
/// ```
#[macro_export]
macro_rules! assert_recipe_names {
    ($catalog:expr, [$($name:expr),* $(,)?]) => {{
        let catalog: &pour_core::Catalog = &$catalog;
        let actual: Vec<String> = catalog
            .snapshot()
            .recipes
            .iter()
            .map(|r| r.display_name().to_string())
            .collect();
        let expected: Vec<String> = vec![$($name.to_string()),*];
        pretty_assertions::assert_eq!(
            actual,
            expected,
            "assert_recipe_names! failed for query {:?}",
            catalog.query()
        );
    }};
}

/// Assert that every recipe in view matches the catalog's current query.
#[macro_export]
macro_rules! assert_view_matches_query {
    ($catalog:expr) => {{
        let catalog: &pour_core::Catalog = &$catalog;
        let query = catalog.normalized_query();
        for recipe in catalog.snapshot().recipes {
            if !pour_core::search::matches(recipe, query) {
                panic!(
                    "assert_view_matches_query! failed: {:?} is in view but does not match {:?}",
                    recipe.display_name(),
                    query
                );
            }
        }
    }};
}

/// Assert that the view is sorted by name with nameless recipes last.
#[macro_export]
macro_rules! assert_sorted_by_name {
    ($catalog:expr) => {{
        let catalog: &pour_core::Catalog = &$catalog;
        let names: Vec<Option<&str>> = catalog
            .snapshot()
            .recipes
            .iter()
            .map(|r| r.name.as_deref())
            .collect();
        for pair in names.windows(2) {
            if pour_core::search::compare_names(pair[0], pair[1]) == std::cmp::Ordering::Greater {
                panic!(
                    "assert_sorted_by_name! failed: {:?} sorted before {:?}\n  full view: {:?}",
                    pair[0], pair[1], names
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Load-state assertions
// ---------------------------------------------------------------------------

/// Assert that a catalog ended in the failed state with an empty view.
#[macro_export]
macro_rules! assert_load_failed {
    ($catalog:expr) => {{
        let catalog: &pour_core::Catalog = &$catalog;
        match catalog.state() {
            pour_core::LoadState::Failed(message) => {
                assert!(!message.is_empty(), "failure message must not be empty");
            }
            other => panic!("assert_load_failed! failed: state is {:?}", other),
        }
        assert!(!catalog.is_loading(), "failed catalog must not be loading");
        assert_eq!(catalog.len(), 0, "failed catalog must show no recipes");
    }};
}
