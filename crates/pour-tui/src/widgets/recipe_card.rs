//! Recipe card widget — the detail pane for the selected recipe.
//!
//! Layout, top to bottom: name, `GLASS` (or `—`), `GARNISH` when present,
//! the ingredient list when non-empty, and `METHOD NOTES` when present.
//! Text matching the active query is highlighted in every field.

use crate::theme::Theme;
use crate::widgets::highlight_spans;
use pour_core::Recipe;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct RecipeCard<'a> {
    recipe: Option<&'a Recipe>,
    query: &'a str,
    theme: &'a Theme,
}

impl<'a> RecipeCard<'a> {
    /// `query` is the normalised query used for highlighting.
    pub fn new(recipe: Option<&'a Recipe>, query: &'a str, theme: &'a Theme) -> Self {
        Self { recipe, query, theme }
    }

    fn field(&self, text: &str, base: Style) -> Vec<Span<'static>> {
        highlight_spans(text, self.query, base, self.theme.search_highlight)
    }

    fn lines(&self, recipe: &Recipe) -> Vec<Line<'static>> {
        let theme = self.theme;
        let mut lines = vec![Line::from(self.field(recipe.display_name(), theme.name))];

        let mut glass = vec![Span::styled("GLASS: ", theme.label)];
        if recipe.glass.is_empty() {
            glass.push(Span::styled("—", theme.body));
        } else {
            glass.extend(self.field(&recipe.glass, theme.glass_style(&recipe.glass)));
        }
        lines.push(Line::from(glass));

        if !recipe.garnish.is_empty() {
            let mut garnish = vec![Span::styled("GARNISH: ", theme.label)];
            garnish.extend(self.field(&recipe.garnish, theme.body));
            lines.push(Line::from(garnish));
        }

        if !recipe.ingredients.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("INGREDIENTS", theme.label)));
            for ingredient in &recipe.ingredients {
                let mut item = vec![Span::styled("  • ", theme.body)];
                item.extend(self.field(ingredient, theme.body));
                lines.push(Line::from(item));
            }
        }

        if !recipe.method.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("METHOD NOTES", theme.label)));
            // Line breaks in the sheet cell are kept
            for row in recipe.method.lines() {
                lines.push(Line::from(self.field(row, theme.body)));
            }
        }

        lines
    }
}

impl Widget for RecipeCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Recipe")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.recipe {
            Some(recipe) => self.lines(recipe),
            None => vec![Line::from(Span::styled(
                "No recipe selected",
                Style::default().add_modifier(Modifier::DIM),
            ))],
        };

        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
