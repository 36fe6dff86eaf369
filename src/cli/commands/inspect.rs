//! Inspect command implementation
//!
//! Runs only the section parser and reports what would be generated.

use super::generate::RoutingArgs;
use crate::cli::Output;
use crate::config::{GeneratorConfig, Layout};
use crate::generator::parser;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// INI file to read [default: config/config.ini]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub routing: RoutingArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = InspectFormat::Text)]
    pub format: InspectFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct InspectOverrides {
    input: Option<PathBuf>,
    layout: Option<Layout>,
    output: Option<PathBuf>,
    outputs: BTreeMap<String, PathBuf>,
}

impl InspectArgs {
    fn overrides(&self) -> InspectOverrides {
        InspectOverrides {
            input: self.input.clone(),
            layout: self.routing.layout(),
            output: self.routing.output.clone(),
            outputs: self.routing.outputs(),
        }
    }
}

/// Execute the inspect command
pub fn execute(args: InspectArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = GeneratorConfig::load(custom_config, Some(args.overrides()))?;

    let descriptors = parser::parse_file(&config.input, &config.routing())
        .with_context(|| format!("Failed to inspect {}", config.input.display()))?;

    if args.format == InspectFormat::Json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    output.header(&format!("🔍 {}", config.input.display()));

    if descriptors.is_empty() {
        output.info("No sections found");
        return Ok(());
    }

    for descriptor in &descriptors {
        output.category(&format!("[{}]", descriptor.name));
        output.key_value("Loader:", &descriptor.loader_name, true);
        output.key_value("Output:", &descriptor.output_path.display().to_string(), false);
        for (field, kind) in &descriptor.fields {
            output.table_row(field, &kind.to_string());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: InspectArgs,
    }

    #[test]
    fn test_routing_flags_reach_overrides() {
        let args = Harness::parse_from(["inspect", "app.ini", "-m", "Server=server.go"]).args;
        let overrides = args.overrides();

        assert_eq!(overrides.input, Some(PathBuf::from("app.ini")));
        assert_eq!(overrides.layout, Some(Layout::PerSection));
        assert_eq!(overrides.outputs["Server"], PathBuf::from("server.go"));
        assert_eq!(args.format, InspectFormat::Text);
    }

    #[test]
    fn test_no_flags_leave_config_alone() {
        let args = Harness::parse_from(["inspect"]).args;
        let value = crate::config::filter_unset(args.overrides()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }
}
