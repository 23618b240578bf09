//! Header widget — title on the left, load status and key hints on the right.

use crate::theme::Theme;
use pour_core::{catalog::count_label, Catalog};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const TITLE: &str = " COCKTAIL RECIPE FINDER ";
const HINTS: &str = "  q:quit  ?:help ";

pub struct Header<'a> {
    catalog: &'a Catalog,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(catalog: &'a Catalog, theme: &'a Theme) -> Self {
        Self { catalog, theme }
    }
}

/// Status text for the header: loading, failed, or the pluralised count.
pub fn status_text(catalog: &Catalog) -> String {
    if catalog.is_loading() {
        "Loading recipes...".to_string()
    } else if catalog.error().is_some() {
        "Error loading recipes".to_string()
    } else {
        count_label(catalog.len())
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_line(area.x, area.y, &Line::from(Span::styled(TITLE, self.theme.title)), area.width);

        let status_style = if self.catalog.error().is_some() {
            self.theme.error
        } else {
            self.theme.body
        };
        let right = Line::from(vec![
            Span::styled(status_text(self.catalog), status_style),
            Span::styled(HINTS, Style::default().add_modifier(Modifier::DIM)),
        ]);
        let width = right.width() as u16;
        let x = area.right().saturating_sub(width).max(area.x);
        buf.set_line(x, area.y, &right, area.right().saturating_sub(x));
    }
}
