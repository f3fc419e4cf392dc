// CLI module - argument parsing for the demo binary
//
// The binary renders the demo admin page as the slot tree the host engine
// would consume. Flags select the locale, an optional theme override file
// and the JSON output style.

use clap::Parser;
use std::path::PathBuf;

/// Render the demo admin page as a slot tree
#[derive(Parser)]
#[command(name = "presspanel")]
#[command(version)]
#[command(about = "Render the demo admin page as a slot tree", long_about = None)]
pub struct Cli {
    /// Locale for user-facing labels
    #[arg(long, default_value = "en")]
    pub locale: String,

    /// Path to a TOML theme override file
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}
