//! Command handler for CLI

use anyhow::{Context, Result};
use curvekey_core::{KeyRecord, PublicKeyRecord};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::args::{Command, OutputFormat};
use crate::ui;

pub struct CommandHandler {
    format: OutputFormat,
}

impl CommandHandler {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn handle_command(&self, command: Command) -> Result<()> {
        match command {
            Command::Generate => self.cmd_generate(),
            Command::Derive {
                private_key,
                private_key_file,
            } => {
                let encoded = resolve_private_key(private_key, private_key_file.as_deref())?;
                self.cmd_derive(&encoded)
            }
            Command::Version => self.cmd_version(),
        }
    }

    fn cmd_generate(&self) -> Result<()> {
        let record = generate_record()?;

        match self.format {
            OutputFormat::Json => print_json(&record),
            OutputFormat::Text => {
                ui::print_field("id", record.id());
                ui::print_field("private_key", &record.private_key().to_base64());
                ui::print_field("public_key", &record.public_key().to_base64());
                Ok(())
            }
        }
    }

    fn cmd_derive(&self, encoded: &str) -> Result<()> {
        let record = derive_record(encoded)?;

        match self.format {
            OutputFormat::Json => print_json(&record),
            OutputFormat::Text => {
                ui::print_field("id", &record.id);
                ui::print_field("public_key", &record.public_key.to_base64());
                Ok(())
            }
        }
    }

    fn cmd_version(&self) -> Result<()> {
        match self.format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "version": curvekey_core::version::VERSION,
                "build": curvekey_core::version_string(),
            })),
            OutputFormat::Text => {
                ui::print_info(&curvekey_core::version_string());
                Ok(())
            }
        }
    }
}

fn generate_record() -> Result<KeyRecord> {
    info!("Generating the private key");
    let record = curvekey_core::generate().context("Error generating the key pair")?;
    debug!(id = %record.id(), public_key = %record.public_key(), "Derived the public key");
    Ok(record)
}

fn derive_record(encoded: &str) -> Result<PublicKeyRecord> {
    info!("Deriving the public key");
    let record = curvekey_core::derive(encoded).context("Error deriving public key")?;
    debug!(id = %record.id(), public_key = %record.public_key(), "Derived the public key");
    Ok(record.public_record())
}

/// Pick the private key from a file or from the flag/env value.
///
/// An explicit file wins, since the flag may have been filled from
/// `CURVEKEY_PRIVATE_KEY`. File contents are trimmed so a trailing newline
/// does not break decoding.
fn resolve_private_key(private_key: Option<String>, file: Option<&Path>) -> Result<String> {
    match (file, private_key) {
        (Some(path), _) => {
            debug!(path = %path.display(), "Reading private key file");
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read private key file: {}", path.display()))?;
            Ok(contents.trim().to_string())
        }
        (None, Some(key)) => Ok(key),
        (None, None) => anyhow::bail!("No private key supplied"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
