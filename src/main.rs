use clap::{Parser, ValueEnum};
use pour_core::{config::Config, RowSource};
use pour_source::{FileSource, HttpSource};
use std::path::PathBuf;

mod headless;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One card per recipe followed by a count line.
    #[default]
    Text,
    /// A JSON array of recipes.
    Json,
}

#[derive(Parser)]
#[command(name = "pour", about = "pour — terminal cocktail recipe finder")]
struct Cli {
    /// Write debug logs to /tmp/pour-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Recipe sheet endpoint, overriding `source.api_url` from the config.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Read recipes from a local JSON export instead of the sheet API.
    #[arg(long, value_name = "PATH", conflicts_with = "api_url")]
    file: Option<PathBuf>,

    /// Print matching recipes to stdout instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Search text applied before printing (headless only).
    #[arg(long, requires = "headless")]
    query: Option<String>,

    /// Output format for headless mode.
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/pour-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("pour debug log started — tail -f /tmp/pour-debug.log");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    });
    if let Some(url) = cli.api_url.clone() {
        config = config.with_api_url(url);
    }

    let runtime = tokio::runtime::Runtime::new()?;

    match cli.file.clone() {
        Some(path) => launch(&cli, config, FileSource::new(path), &runtime),
        None => {
            let source = HttpSource::from_config(&config.source)?;
            launch(&cli, config, source, &runtime)
        }
    }
}

fn launch<S>(
    cli: &Cli,
    config: Config,
    source: S,
    runtime: &tokio::runtime::Runtime,
) -> anyhow::Result<()>
where
    S: RowSource + 'static,
{
    if cli.headless {
        let query = cli.query.as_deref().unwrap_or("");
        headless::run(&source, query, cli.format, runtime)
    } else {
        pour_tui::run(config, source, runtime.handle())
    }
}
