//! Query Catalog CLI
//!
//! Exports the saved queries embedded in a configuration document as plain
//! text, and imports edited plain text back into the document.

mod cli;
mod commands;
mod config;
mod error;
mod io;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        println!("{} Query Catalog CLI", "qcat".green().bold());
        println!();
        println!("Run {} for available commands.", "qcat --help".cyan());
        return Ok(());
    };

    let settings = config::resolve_settings(
        cli.config.as_deref(),
        cli.label.as_deref(),
        cli.key.as_deref(),
    )?;

    match command {
        Commands::Export { input, output } => commands::run_export(&input, &output, &settings),
        Commands::Import {
            yaml,
            plain,
            output,
            dry_run,
        } => commands::run_import(&yaml, &plain, output.as_deref(), dry_run, &settings),
        Commands::Check { input } => commands::run_check(&input, &settings),
    }
}

/// Logs go to stderr so that stdout stays usable for diffs.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}
