//! Ratatui widgets for the pour TUI.

pub mod command_bar;
pub mod header;
pub mod help;
pub mod query_bar;
pub mod recipe_card;
pub mod recipe_list;

use pour_core::search::match_ranges;
use ratatui::{style::Style, text::Span};

/// Split `text` into spans, styling the parts that match the query with
/// `highlight` and the rest with `base`.
pub(crate) fn highlight_spans(
    text: &str,
    normalized_query: &str,
    base: Style,
    highlight: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut pos = 0;
    for range in match_ranges(text, normalized_query) {
        if range.start > pos {
            spans.push(Span::styled(text[pos..range.start].to_string(), base));
        }
        spans.push(Span::styled(text[range.clone()].to_string(), highlight));
        pos = range.end;
    }
    if pos < text.len() || spans.is_empty() {
        spans.push(Span::styled(text[pos..].to_string(), base));
    }
    spans
}
