//! Curvekey CLI - X25519 key generation for infrastructure tooling
//!
//! Usage:
//!   curvekey generate
//!   curvekey derive --private-key iM4KhF7Zu6vYcTdamVOQsiNftCdlu0ceBZonXb02KmU=
//!   curvekey derive --private-key-file key.b64 --format text

use anyhow::Result;
use clap::Parser;

mod args;
mod commands;
mod ui;

use args::Args;
use commands::CommandHandler;

fn main() {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    if let Err(e) = run(args) {
        ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let handler = CommandHandler::new(args.format);
    handler.handle_command(args.command)
}
