//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Query Catalog - Edit saved queries embedded in configuration documents
#[derive(Parser, Debug)]
#[command(name = "qcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML configuration file with a [catalog] table
    #[arg(long, global = true, env = "QCAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Label of the block holding the catalog (`<label>: |`)
    #[arg(long, global = true, env = "QCAT_LABEL")]
    pub label: Option<String>,

    /// Key of the category list inside the embedded object
    #[arg(long, global = true, env = "QCAT_KEY")]
    pub key: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write the saved queries of a document as editable plain text
    ///
    /// Examples:
    ///   qcat export -i console.yaml -o queries.txt
    Export {
        /// Document containing the embedded catalog
        #[arg(short, long)]
        input: PathBuf,

        /// Plain-text file to write
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Merge edited plain text back into a document
    ///
    /// Only the embedded block changes; the rest of the document is
    /// copied through byte for byte.
    ///
    /// Examples:
    ///   qcat import -y console.yaml -p queries.txt -o console.new.yaml
    ///   qcat import -y console.yaml -p queries.txt --dry-run
    Import {
        /// Original document containing the embedded catalog
        #[arg(short, long)]
        yaml: PathBuf,

        /// Edited plain-text queries
        #[arg(short, long)]
        plain: PathBuf,

        /// Where to write the updated document
        #[arg(short, long, required_unless_present = "dry_run")]
        output: Option<PathBuf>,

        /// Print a diff of the document instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify that a document's catalog survives a plain-text round trip
    Check {
        /// Document containing the embedded catalog
        #[arg(short, long)]
        input: PathBuf,
    },
}
