//! Configuration management for inigen
//!
//! Settings are layered with figment: embedded defaults, `inigen.toml`,
//! an optional custom file, `INIGEN_*` environment variables and finally
//! command-line flags.

use crate::generator::{EmitOptions, OutputRouting};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

mod core;
mod overrides;

pub use self::core::{DEFAULT_CONFIG, ENV_PREFIX, PROJECT_CONFIG};
pub use overrides::filter_unset;

/// How generated sections are split across output files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Every section in one file
    Combined,
    /// One file per section, from the `outputs` table
    PerSection,
}

/// Effective generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// INI file to read
    pub input: PathBuf,

    /// Output layout
    pub layout: Layout,

    /// Destination of the combined layout
    pub output: PathBuf,

    /// Go package of the combined layout
    pub package: String,

    /// Emit an `init()` hook that loads `startup_config`
    pub startup_hook: bool,

    /// File loaded by the startup hook
    pub startup_config: String,

    /// Section name -> destination, for the per-section layout
    #[serde(default)]
    pub outputs: BTreeMap<String, PathBuf>,
}

impl GeneratorConfig {
    /// Output routing for the configured layout
    pub fn routing(&self) -> OutputRouting {
        match self.layout {
            Layout::Combined => OutputRouting::Combined(self.output.clone()),
            Layout::PerSection => OutputRouting::PerSection(self.outputs.clone()),
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            package: self.package.clone(),
            startup_hook: self.startup_hook,
            startup_config: self.startup_config.clone(),
        }
    }
}
