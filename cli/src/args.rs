//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (RUST_LOG still takes precedence per target)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new clamped key pair
    Generate,

    /// Derive the public key for an existing private key
    Derive {
        /// Base64-encoded 32-byte private key
        #[arg(
            long,
            env = "CURVEKEY_PRIVATE_KEY",
            hide_env_values = true,
            required_unless_present = "private_key_file"
        )]
        private_key: Option<String>,

        /// File holding the base64-encoded private key (takes precedence over --private-key)
        #[arg(long)]
        private_key_file: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}
