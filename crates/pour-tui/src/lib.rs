//! pour TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use pour_core::{config::Config, RowSource};
use tokio::sync::oneshot;

/// Start the TUI. The fetch from `source` runs on `runtime` while the UI
/// shows its loading state.
pub fn run<S>(config: Config, source: S, runtime: &tokio::runtime::Handle) -> anyhow::Result<()>
where
    S: RowSource + 'static,
{
    let theme = theme::Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        theme::Theme::load_default()
    });

    let (tx, rx) = oneshot::channel();
    runtime.spawn(async move {
        tracing::debug!(source = %source.describe(), "fetch task started");
        let outcome = source.fetch().await;
        // The receiver is gone only if the UI already exited
        let _ = tx.send(outcome);
    });

    App::new(config, theme, rx).run()
}
