//! Headless mode: load once, filter, print, exit.

use crate::OutputFormat;
use pour_core::{catalog::count_label, Catalog, Recipe, RowSource};
use std::io::{self, Write};

pub fn run<S: RowSource>(
    source: &S,
    query: &str,
    format: OutputFormat,
    runtime: &tokio::runtime::Runtime,
) -> anyhow::Result<()> {
    let mut catalog = Catalog::new();
    runtime.block_on(catalog.load(source));

    if let Some(message) = catalog.error() {
        anyhow::bail!("{message}");
    }

    catalog.set_query(query);
    let view = catalog.snapshot();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            for recipe in &view.recipes {
                write_card(&mut out, recipe)?;
                writeln!(out)?;
            }
            writeln!(out, "{}", count_label(view.count()))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &view.recipes)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_card(out: &mut impl Write, recipe: &Recipe) -> io::Result<()> {
    writeln!(out, "{}", recipe.display_name())?;
    let glass = if recipe.glass.is_empty() { "—" } else { recipe.glass.as_str() };
    writeln!(out, "  GLASS: {glass}")?;
    if !recipe.garnish.is_empty() {
        writeln!(out, "  GARNISH: {}", recipe.garnish)?;
    }
    if !recipe.ingredients.is_empty() {
        writeln!(out, "  INGREDIENTS:")?;
        for ingredient in &recipe.ingredients {
            writeln!(out, "    • {ingredient}")?;
        }
    }
    if !recipe.method.is_empty() {
        writeln!(out, "  METHOD NOTES:")?;
        for line in recipe.method.lines() {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}
