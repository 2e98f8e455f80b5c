//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use mesh_labels::{DEFAULT_MAX_LENGTH, DEFAULT_SEPARATOR};

/// Deployment helpers: bounded labels and layered dependency manifests
#[derive(Parser, Debug)]
#[command(name = "mesh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate a label that fits a length budget
    ///
    /// Names that do not fit are truncated and suffixed with a short hash
    /// of the full names.
    ///
    /// Examples:
    ///   mesh label cos grafana                  # cos-grafana
    ///   mesh label cos grafana --separator=.    # cos.grafana
    ///   mesh label cos grafana --prefix app/    # app/cos-grafana
    Label {
        /// Model name
        model: String,

        /// Application name
        app: String,

        /// Text prepended to the label, never truncated
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        prefix: String,

        /// Text appended to the label, never truncated
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        suffix: String,

        /// Maximum label length in characters
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
        max_length: usize,

        /// Separator between model, application and hash
        #[arg(long, default_value = DEFAULT_SEPARATOR, allow_hyphen_values = true)]
        separator: String,
    },

    /// Inspect dependency manifests
    Manifest {
        #[command(subcommand)]
        action: ManifestAction,
    },
}

/// Manifest subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ManifestAction {
    /// Show every entry of the merged manifest
    Show {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show a single entry of the merged manifest
    Get {
        /// Entry name
        name: String,

        #[command(flatten)]
        sources: SourceArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Ordered manifest sources; later sources override earlier ones per entry.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// Path or URL of a manifest. Repeat to layer several manifests.
    #[arg(
        long = "dependency-manifest",
        value_name = "SOURCE",
        env = "MESH_DEPENDENCY_MANIFEST",
        value_delimiter = ','
    )]
    pub dependency_manifest: Vec<String>,
}
