//! grocer CLI - a flat-file grocery inventory manager.

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result, bail};
use grocer::{Session, codec};
use log::info;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grocer")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("grocer.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Resolve the database path: take it from the CLI or prompt for it, and
/// offer to create the file when it does not exist yet.
fn resolve_database(cli: &Cli) -> Result<PathBuf> {
    let path = match &cli.file {
        Some(path) => path.clone(),
        None => {
            print!("Enter the filename containing the database: ");
            io::stdout().flush()?;

            let mut line = String::new();
            let read = io::stdin().lock().read_line(&mut line)?;
            let entered = line.trim();
            if read == 0 || entered.is_empty() {
                bail!("No database filename given");
            }
            PathBuf::from(entered)
        }
    };

    if !path.exists() {
        let create = if cli.create {
            true
        } else {
            print!("File '{}' does not exist. Create it? (y/n): ", path.display());
            io::stdout().flush()?;

            let mut answer = String::new();
            io::stdin().lock().read_line(&mut answer)?;
            let answer = answer.trim();
            answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
        };

        if !create {
            bail!("Database file '{}' does not exist", path.display());
        }

        File::create(&path)
            .with_context(|| format!("Failed to create '{}'", path.display()))?;
        println!("{} Created empty database '{}'.", "✓".green(), path.display());
    }

    Ok(path)
}

fn run(cli: Cli) -> Result<()> {
    let path = resolve_database(&cli)?;

    let mut inventory = codec::load(&path)
        .with_context(|| format!("Failed to load database '{}'", path.display()))?;

    println!(
        "{} File '{}' opened successfully, {} item(s) loaded.",
        "✓".green(),
        path.display(),
        inventory.len()
    );

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), &path);
    session.run(&mut inventory)?;

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
