//! Configuration command implementations
//!
//! Commands for creating and showing inigen configuration.

use crate::cli::{Output, highlight};
use crate::config::{DEFAULT_CONFIG, GeneratorConfig, PROJECT_CONFIG};
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use std::fs;
use std::path::Path;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Create inigen.toml with the default settings
    Init {
        /// Overwrite an existing inigen.toml
        #[arg(short, long)]
        force: bool,
    },
    /// Display the effective merged configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Toml,
    Json,
}

/// Execute config commands
pub fn execute(args: ConfigArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Init { force } => init(force, output),
        ConfigCommand::Show { format } => show(format, custom_config),
    }
}

fn init(force: bool, output: &Output) -> Result<()> {
    let path = Path::new(PROJECT_CONFIG);

    if path.exists() && !force {
        output.warning(&format!("{} already exists", PROJECT_CONFIG));
        output.info("Use --force to overwrite it");
        return Ok(());
    }

    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    output.success(&format!("Created {} with default settings", PROJECT_CONFIG));
    Ok(())
}

fn show(format: ShowFormat, custom_config: Option<&str>) -> Result<()> {
    let config = GeneratorConfig::load(custom_config, None::<&()>)?;

    let (rendered, extension) = match format {
        ShowFormat::Toml => (
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?,
            "toml",
        ),
        ShowFormat::Json => (
            serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?,
            "json",
        ),
    };

    match highlight(&rendered, extension) {
        Some(highlighted) => print!("{highlighted}"),
        None => println!("{}", rendered.trim_end()),
    }

    Ok(())
}
