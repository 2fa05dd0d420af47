use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    Table,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "spoilmap")]
#[command(about = "Spoilage risk scoring and allocation routing for stored produce batches", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score batch snapshots and recommend destination channels
    Evaluate {
        /// JSON file containing an array of batch snapshots
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scoring config file (defaults to the discovered .spoilmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Evaluation timestamp, RFC 3339 (defaults to now)
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Create a .spoilmap.toml configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Parse and validate a scoring config file
    ValidateConfig {
        /// Config file to validate (defaults to the discovered .spoilmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
