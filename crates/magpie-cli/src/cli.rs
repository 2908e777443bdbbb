use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mag")]
#[command(about = "mag - collect Obsidian-style callouts into note frontmatter")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (defaults to ~/.config/magpie/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Vault root directory (overrides config file)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect every callout in the target note's folder into its frontmatter
    Collect {
        /// Target note (vault-relative path or bare note name)
        target: String,

        /// Keep raw multi-line bodies instead of flattening them
        #[arg(long)]
        raw: bool,
    },

    /// Collect callouts of one type into the target note's frontmatter
    Filter {
        /// Target note (vault-relative path or bare note name)
        target: String,

        /// Callout type to keep (prompts over the observed types when omitted)
        #[arg(long = "type", value_name = "TYPE")]
        callout_type: Option<String>,

        /// Keep raw multi-line bodies instead of flattening them
        #[arg(long)]
        raw: bool,
    },

    /// Preview the callouts in a folder without writing anywhere
    List {
        /// Folder to scan, vault-relative (vault root when omitted)
        folder: Option<PathBuf>,

        /// Show only callouts of this type
        #[arg(long = "type", value_name = "TYPE")]
        callout_type: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Keep raw multi-line bodies instead of flattening them
        #[arg(long)]
        raw: bool,
    },
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array of records
    Json,
}
