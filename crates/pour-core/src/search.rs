//! Search layer — query normalisation, record matching and name ordering.
//!
//! Matching is plain case-insensitive substring containment over five fields.
//! Ingredients are tested one entry at a time so a query can never match
//! across the boundary between two ingredients.

use crate::types::Recipe;
use std::cmp::Ordering;
use std::ops::Range;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Lowercase and trim a query as typed by the user.
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Decide whether `recipe` belongs in the results for `normalized_query`.
///
/// An empty query matches everything. Otherwise the query must occur,
/// ignoring case, in the name, glass, garnish or method, or inside a single
/// ingredient entry. Both sides go through the same fold as
/// [`match_ranges`], so every match has something to highlight.
pub fn matches(recipe: &Recipe, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }
    let needle = fold(normalized_query);
    let hit = |field: &str| contains_folded(field, &needle);

    recipe.name.as_deref().is_some_and(hit)
        || hit(&recipe.glass)
        || hit(&recipe.garnish)
        || recipe.ingredients.iter().any(|ingredient| hit(ingredient))
        || hit(&recipe.method)
}

/// Order two optional recipe names the way a reader expects.
///
/// The primary key ignores accents and case, so "Ángel" sorts with the A's
/// and "apple" before "Banana". Ties fall back to the accented fold, then the
/// exact text. A missing name sorts after every present one.
pub fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => collation_key(a)
            .cmp(&collation_key(b))
            .then_with(|| fold(a).cmp(&fold(b)))
            .then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Byte ranges of `text` where `normalized_query` occurs, ignoring case.
///
/// Used for highlighting. Ranges are non-overlapping and always fall on char
/// boundaries of `text`.
pub fn match_ranges(text: &str, normalized_query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = fold(normalized_query).chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        match folded_prefix_len(rest, &needle) {
            Some(len) => {
                ranges.push(pos..pos + len);
                pos += len;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    ranges
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Per-char case fold. Final sigma folds to `σ` so the result does not depend
/// on where a character sits in the word.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|l| if l == 'ς' { 'σ' } else { l })
}

fn fold(text: &str) -> String {
    text.chars().flat_map(fold_char).collect()
}

/// Case-folded text with accents stripped: NFD, then combining marks dropped.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(fold_char)
        .collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    !haystack.is_empty() && fold(haystack).contains(needle)
}

/// Length in bytes of the prefix of `text` whose lowercase form equals
/// `needle`, if there is one.
fn folded_prefix_len(text: &str, needle: &[char]) -> Option<usize> {
    let mut want = needle.iter();
    let mut next = want.next();
    for (idx, c) in text.char_indices() {
        for lower in fold_char(c) {
            match next {
                Some(&w) if w == lower => next = want.next(),
                _ => return None,
            }
        }
        if next.is_none() {
            return Some(idx + c.len_utf8());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
