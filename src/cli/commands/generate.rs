//! Generate command implementation
//!
//! Runs the full parse -> render -> write pipeline.

use crate::cli::{Output, highlight};
use crate::config::{GeneratorConfig, Layout};
use crate::generator;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// INI file to read [default: config/config.ini]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub routing: RoutingArgs,

    /// Go package name of the combined layout
    #[arg(long)]
    pub package: Option<String>,

    /// Emit an init() hook that loads the startup config when the program starts
    #[arg(long)]
    pub startup_hook: bool,

    /// File loaded by the startup hook
    #[arg(long, value_name = "FILE")]
    pub startup_config: Option<String>,

    /// Print the generated source instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Where sections are written, shared by `generate` and `inspect`
#[derive(Args, Debug)]
pub struct RoutingArgs {
    /// Write every section into one file, or each section into its own file
    #[arg(long, value_enum)]
    pub layout: Option<Layout>,

    /// Destination of the combined layout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Destination of one section (repeatable, implies --layout per-section)
    #[arg(short, long = "map", value_name = "SECTION=FILE", value_parser = parse_mapping)]
    pub map: Vec<(String, PathBuf)>,
}

impl RoutingArgs {
    /// Layout requested on the command line, if any
    pub fn layout(&self) -> Option<Layout> {
        match self.layout {
            Some(layout) => Some(layout),
            None if !self.map.is_empty() => Some(Layout::PerSection),
            None => None,
        }
    }

    pub fn outputs(&self) -> BTreeMap<String, PathBuf> {
        self.map.iter().cloned().collect()
    }
}

/// Flags that override configuration, unset values are dropped before merging
#[derive(Serialize)]
struct GenerateOverrides {
    input: Option<PathBuf>,
    layout: Option<Layout>,
    output: Option<PathBuf>,
    outputs: BTreeMap<String, PathBuf>,
    package: Option<String>,
    startup_hook: Option<bool>,
    startup_config: Option<String>,
}

impl GenerateArgs {
    fn overrides(&self) -> GenerateOverrides {
        GenerateOverrides {
            input: self.input.clone(),
            layout: self.routing.layout(),
            output: self.routing.output.clone(),
            outputs: self.routing.outputs(),
            package: self.package.clone(),
            startup_hook: self.startup_hook.then_some(true),
            startup_config: self.startup_config.clone(),
        }
    }
}

/// Parse a `SECTION=FILE` mapping
fn parse_mapping(raw: &str) -> Result<(String, PathBuf), String> {
    let (section, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid mapping '{raw}', expected SECTION=FILE"))?;
    let (section, path) = (section.trim(), path.trim());

    if section.is_empty() || path.is_empty() {
        return Err(format!("invalid mapping '{raw}', expected SECTION=FILE"));
    }

    Ok((section.to_string(), PathBuf::from(path)))
}

/// Execute the generate command
pub fn execute(args: GenerateArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = GeneratorConfig::load(custom_config, Some(args.overrides()))?;
    let routing = config.routing();
    let options = config.emit_options();

    tracing::debug!(
        "Generating from {} ({:?} layout, startup hook: {})",
        config.input.display(),
        config.layout,
        config.startup_hook
    );

    if args.dry_run {
        let report = generator::plan(&config.input, &routing, &options)
            .with_context(|| format!("Failed to generate code from {}", config.input.display()))?;

        let multiple = report.files.len() > 1;
        for file in &report.files {
            if multiple {
                println!("// ==> {} <==", file.path.display());
            }
            match highlight(&file.contents, "go") {
                Some(highlighted) => print!("{highlighted}"),
                None => print!("{}", file.contents),
            }
        }
        return Ok(());
    }

    output.header("⚙️  Generating Config Loaders");
    output.verbose(&format!("Layout: {:?}", config.layout));

    let report = generator::generate(&config.input, &routing, &options)
        .with_context(|| format!("Failed to generate code from {}", config.input.display()))?;

    if report.descriptors.is_empty() {
        output.warning(&format!("No sections found in {}", config.input.display()));
    }

    for file in &report.files {
        output.success(&format!("Wrote {}", file.path.display()));
        for section in &file.sections {
            output.list_item(section);
        }
    }

    output.blank_line();
    output.table_row("Input", &config.input.display().to_string());
    output.table_row("Sections", &report.descriptors.len().to_string());
    output.table_row("Fields", &report.field_count().to_string());

    tracing::info!("Config loaders generated from {}", config.input.display());
    Ok(())
}
