//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The recipe fetch runs
//! elsewhere; its outcome arrives over a oneshot channel that the loop polls
//! between frames.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        header::Header,
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        recipe_card::RecipeCard,
        recipe_list::{RecipeList, RecipeListState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pour_core::{config::Config, Catalog, RawRow, SourceError};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Outcome of the one fetch, delivered to the UI thread.
pub type LoadResult = Result<Vec<RawRow>, SourceError>;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub catalog: Catalog,
    pub list: RecipeListState,
    pub query: QueryBarState,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    /// Push the query bar text into the catalog and go back to the top.
    pub fn sync_query(&mut self) {
        self.catalog.set_query(&self.query.query);
        self.list.reset();
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    pending: Option<oneshot::Receiver<LoadResult>>,
}

impl App {
    /// `pending` receives the fetch outcome; the catalog stays in its loading
    /// state until it arrives.
    pub fn new(config: Config, theme: Theme, pending: oneshot::Receiver<LoadResult>) -> Self {
        let state = AppState {
            catalog: Catalog::new(),
            list: RecipeListState::default(),
            query: QueryBarState::default(),
            focus: Focus::List,
            prev_focus: Focus::List,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };

        App { state, pending: Some(pending) }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply the fetch outcome if it has arrived. Returns `true` once applied.
    pub fn poll_load(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => {
                Err(SourceError::Transport("fetch task ended without a result".to_string()))
            }
        };
        self.pending = None;
        self.state.catalog.finish(outcome);
        self.state.list.reset();
        true
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.poll_load();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key)
                        if key.kind == crossterm::event::KeyEventKind::Press =>
                    {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the query bar)
            AppEvent::Char('?') if s.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the query bar)
            AppEvent::Char(':') if s.focus != Focus::QueryBar => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from query bar
            AppEvent::Escape => {
                if s.focus == Focus::QueryBar {
                    tracing::debug!("focus: QueryBar -> List");
                    s.focus = Focus::List;
                }
            }

            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::List => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command => Focus::List,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                s.focus = Focus::QueryBar;
            }

            // Enter from the query bar hands the selection over to the list
            AppEvent::Enter => {
                if s.focus == Focus::QueryBar {
                    s.focus = Focus::List;
                }
            }

            // Selection keys reach the list whichever pane has focus
            AppEvent::Nav(Direction::Up | Direction::Down)
            | AppEvent::ScrollUp
            | AppEvent::ScrollDown
            | AppEvent::JumpTop
            | AppEvent::JumpBottom => {
                let len = s.catalog.len();
                s.list.handle(&event, len);
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => {
                if s.focus == Focus::QueryBar && s.query.handle(&other) {
                    s.sync_query();
                }
            }
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line header | body | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Horizontal body split
    let pct = state.config.ui.list_pane_width_pct.min(100);
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[1]);

    let catalog = &state.catalog;

    frame.render_widget(Header::new(catalog, &state.theme), vert[0]);
    frame.render_widget(
        RecipeList::new(&state.list, catalog, state.focus == Focus::List, &state.theme),
        horiz[0],
    );
    frame.render_widget(
        RecipeCard::new(
            catalog.get(state.list.cursor),
            catalog.normalized_query(),
            &state.theme,
        ),
        horiz[1],
    );
    frame.render_widget(
        QueryBar::new(&state.query, state.focus == Focus::QueryBar, &state.theme),
        vert[2],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    // Position the terminal cursor when the query bar is focused
    if state.focus == Focus::QueryBar {
        let qb = QueryBar::new(&state.query, true, &state.theme);
        let (cx, cy) = qb.cursor_position(vert[2]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pour_core::LoadState;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn row(name: &str, ingredients: &str, glass: &str) -> RawRow {
        RawRow {
            name: Some(name.to_string()),
            ingredients: Some(ingredients.to_string()),
            glass: Some(glass.to_string()),
            ..RawRow::default()
        }
    }

    fn app_with(outcome: Option<LoadResult>) -> App {
        let (tx, rx) = oneshot::channel();
        if let Some(outcome) = outcome {
            let _ = tx.send(outcome);
        } else {
            // Keep the sender alive so the app stays loading
            std::mem::forget(tx);
        }
        App::new(Config::defaults(), Theme::load_default(), rx)
    }

    fn loaded_app() -> App {
        let mut app = app_with(Some(Ok(vec![
            row("Mojito", "Rum, Mint, Soda", "Highball"),
            row("Martini", "Gin, Vermouth", "Cocktail"),
            row("Negroni", "Gin, Campari, Vermouth", "Rocks"),
        ])));
        assert!(app.poll_load());
        app
    }

    fn type_query(app: &mut App, text: &str) {
        app.handle(AppEvent::QueryFocus);
        for c in text.chars() {
            app.handle(AppEvent::Char(c));
        }
    }

    fn visible_names(app: &App) -> Vec<String> {
        app.state()
            .catalog
            .snapshot()
            .recipes
            .iter()
            .map(|r| r.display_name().to_string())
            .collect()
    }

    #[test]
    fn starts_loading_until_outcome_arrives() {
        let mut app = app_with(None);
        assert!(!app.poll_load());
        assert!(app.state().catalog.is_loading());
    }

    #[test]
    fn dropped_sender_fails_the_load() {
        let (tx, rx) = oneshot::channel::<LoadResult>();
        drop(tx);
        let mut app = App::new(Config::defaults(), Theme::load_default(), rx);
        assert!(app.poll_load());
        assert!(matches!(app.state().catalog.state(), LoadState::Failed(_)));
        assert!(!app.poll_load(), "outcome applies once");
    }

    #[test]
    fn typing_filters_and_resets_selection() {
        let mut app = loaded_app();
        app.handle(AppEvent::Nav(Direction::Down));
        assert_eq!(app.state().list.cursor, 1);

        type_query(&mut app, "gin");
        assert_eq!(visible_names(&app), vec!["Martini", "Negroni"]);
        assert_eq!(app.state().list.cursor, 0);
    }

    #[test]
    fn query_bar_letters_do_not_trigger_shortcuts() {
        let mut app = loaded_app();
        type_query(&mut app, "q?");
        assert!(!app.state().quit);
        assert!(!app.state().show_help);
        assert_eq!(app.state().query.query, "q?");
    }

    #[test]
    fn arrows_move_selection_while_typing() {
        let mut app = loaded_app();
        type_query(&mut app, "i");
        app.handle(AppEvent::Nav(Direction::Down));
        assert_eq!(app.state().list.cursor, 1);
        assert_eq!(app.state().focus, Focus::QueryBar);
    }

    #[test]
    fn focus_toggles_between_list_and_query() {
        let mut app = loaded_app();
        app.handle(AppEvent::FocusNext);
        assert_eq!(app.state().focus, Focus::QueryBar);
        app.handle(AppEvent::FocusNext);
        assert_eq!(app.state().focus, Focus::List);
        app.handle(AppEvent::QueryFocus);
        app.handle(AppEvent::Escape);
        assert_eq!(app.state().focus, Focus::List);
    }

    #[test]
    fn clear_command_empties_query() {
        let mut app = loaded_app();
        type_query(&mut app, "gin");
        app.handle(AppEvent::Escape);

        app.handle(AppEvent::Char(':'));
        for c in "clear".chars() {
            app.handle(AppEvent::Char(c));
        }
        app.handle(AppEvent::Enter);

        assert_eq!(app.state().focus, Focus::List);
        assert_eq!(app.state().query.query, "");
        assert_eq!(app.state().catalog.len(), 3);
    }

    #[test]
    fn unknown_command_keeps_bar_open() {
        let mut app = loaded_app();
        app.handle(AppEvent::Char(':'));
        app.handle(AppEvent::Char('x'));
        app.handle(AppEvent::Enter);
        assert_eq!(app.state().focus, Focus::Command);
        assert!(app.state().command_bar.error.is_some());
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut app = loaded_app();
        app.handle(AppEvent::Char('?'));
        assert!(app.state().show_help);
        app.handle(AppEvent::Nav(Direction::Down));
        assert_eq!(app.state().list.cursor, 0);
        app.handle(AppEvent::Escape);
        assert!(!app.state().show_help);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = loaded_app();
        app.handle(AppEvent::Quit);
        assert!(app.state().quit);
    }

    #[test]
    fn draw_shows_header_list_and_card() {
        let app = loaded_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app.state())).unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("COCKTAIL RECIPE FINDER"));
        assert!(screen.contains("3 recipes found"));
        // First by name is selected and shown in the card
        assert!(screen.contains("GLASS: Cocktail"));
    }
}
