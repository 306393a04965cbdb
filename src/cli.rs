//! CLI argument parsing for grocer.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "grocer",
    about = "A flat-file grocery inventory manager with an interactive menu",
    version,
    after_help = "Logs are written to: ~/.local/share/grocer/logs/grocer.log"
)]
pub struct Cli {
    /// Path to the inventory database file (prompted for when omitted)
    pub file: Option<PathBuf>,

    /// Create the database file if it does not exist, without asking
    #[arg(short, long)]
    pub create: bool,
}
