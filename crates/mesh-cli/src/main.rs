//! mesh CLI
//!
//! Command-line access to label generation and dependency manifests.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use mesh_labels::LabelOptions;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ManifestAction};
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
    execute_command(cli.command)
}

/// Log to stderr so stdout stays clean for scripting.
///
/// `--verbose` forces DEBUG; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
    if result.is_ok() {
        tracing::debug!(verbose, "Tracing initialized");
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Label {
            model,
            app,
            prefix,
            suffix,
            max_length,
            separator,
        } => {
            let options = LabelOptions::default()
                .with_prefix(prefix)
                .with_suffix(suffix)
                .with_max_length(max_length)
                .with_separator(separator);
            commands::run_label(&model, &app, &options)
        }
        Commands::Manifest { action } => match action {
            ManifestAction::Show { sources, json } => {
                commands::run_manifest_show(&sources.dependency_manifest, json)
            }
            ManifestAction::Get {
                name,
                sources,
                json,
            } => commands::run_manifest_get(&sources.dependency_manifest, &name, json),
        },
    }
}
