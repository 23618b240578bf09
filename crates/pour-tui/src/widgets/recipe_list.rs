//! Recipe list widget — the scrollable list of matching recipes on the left.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Select previous recipe |
//! | `↓` / `j` | Select next recipe |
//! | `PageUp` / `Ctrl+u` | Move up one page |
//! | `PageDown` / `Ctrl+d` | Move down one page |
//! | `g` / `G` | First / last recipe |
//!
//! # Scroll semantics
//!
//! `cursor` is a position in the catalog's current view (0 = first by name).
//! `offset` is the first visible position. The cursor is always kept inside
//! the visible window; moving it past an edge scrolls.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::highlight_spans;
use pour_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
        Wrap,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct RecipeListState {
    /// Position of the highlighted recipe in the current view.
    pub cursor: usize,
    /// First visible position.
    pub offset: usize,
    /// Cached from the last render so `handle()` can keep the cursor visible.
    last_height: Cell<usize>,
}

impl Default for RecipeListState {
    fn default() -> Self {
        Self { cursor: 0, offset: 0, last_height: Cell::new(20) }
    }
}

impl RecipeListState {
    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Back to the first recipe. Called whenever the view is rebuilt.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    /// Handle a navigation event. `len` is the number of recipes in view.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            return;
        }
        let last = len - 1;

        let target = match event {
            AppEvent::Nav(Direction::Up) => self.cursor.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => (self.cursor + 1).min(last),
            AppEvent::ScrollUp => self.cursor.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => (self.cursor + PAGE_STEP).min(last),
            AppEvent::JumpTop => 0,
            AppEvent::JumpBottom => last,
            _ => return,
        };
        self.cursor = target;
        self.scroll_to_cursor();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "list: cursor moved");
    }

    fn scroll_to_cursor(&mut self) {
        let height = self.height();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct RecipeList<'a> {
    state: &'a RecipeListState,
    catalog: &'a Catalog,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> RecipeList<'a> {
    pub fn new(
        state: &'a RecipeListState,
        catalog: &'a Catalog,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, catalog, focused, theme }
    }
}

impl Widget for RecipeList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Recipes").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);

        if let Some(message) = empty_message(self.catalog, self.theme) {
            Paragraph::new(message).wrap(Wrap { trim: true }).render(inner, buf);
            return;
        }

        let total = self.catalog.len();
        let start = self.state.offset.min(total.saturating_sub(1));
        let end = (start + height).min(total);
        let query = self.catalog.normalized_query();

        let lines: Vec<Line<'static>> = (start..end)
            .filter_map(|pos| self.catalog.get(pos).map(|recipe| (pos, recipe)))
            .map(|(pos, recipe)| {
                let mut spans = highlight_spans(
                    recipe.display_name(),
                    query,
                    self.theme.name,
                    self.theme.search_highlight,
                );
                if !recipe.glass.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", recipe.glass),
                        self.theme.glass_style(&recipe.glass).add_modifier(Modifier::DIM),
                    ));
                }
                let line = Line::from(spans);
                if pos == self.state.cursor {
                    line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    line
                }
            })
            .collect();

        // The strip is inside the block borders so the track height matches
        // the number of visible rows.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect { x: inner.right().saturating_sub(1), width: 1, ..inner };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Empty states
// ---------------------------------------------------------------------------

fn empty_message(catalog: &Catalog, theme: &Theme) -> Option<Line<'static>> {
    if catalog.is_loading() {
        return Some(Line::from(Span::styled(
            "Loading recipes…",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    if let Some(err) = catalog.error() {
        return Some(Line::from(Span::styled(err.to_string(), theme.error)));
    }
    if catalog.is_empty() {
        return Some(Line::from(vec![
            Span::raw("No recipes found for "),
            Span::styled(
                catalog.query().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(". Try another word."),
        ]));
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
