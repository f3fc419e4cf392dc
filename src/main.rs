// presspanel demo binary
//
// Builds the sample admin page from canned print-job data and writes the
// serialized slot tree to stdout. This is the same tree the host rendering
// engine would receive from the binding layer in a real deployment.

use anyhow::{Context, Result};
use clap::Parser;
use presspanel::cli::Cli;
use presspanel::demo;
use presspanel::services::MessageCatalog;
use presspanel::theme::Theme;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading theme file {}", path.display()))?;
            Theme::from_toml_str(&raw).context("parsing theme file")?
        }
        None => Theme::default(),
    };

    let i18n = MessageCatalog::with_defaults();
    let store = demo::sample_store();

    tracing::info!(locale = %cli.locale, "rendering demo page");
    let page = demo::build_page(&theme, &i18n, &store, &cli.locale)?;

    let output = if cli.compact {
        serde_json::to_string(&page)?
    } else {
        serde_json::to_string_pretty(&page)?
    };
    println!("{output}");
    Ok(())
}
