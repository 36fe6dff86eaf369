use super::GeneratorConfig;
use super::overrides::filter_unset;
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::Serialize;
use std::path::Path;

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Project config picked up from the working directory
pub const PROJECT_CONFIG: &str = "inigen.toml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "INIGEN_";

impl GeneratorConfig {
    /// Load the effective configuration.
    ///
    /// Priority, lowest first: embedded defaults, `inigen.toml`, the custom
    /// config file, `INIGEN_*` variables, CLI overrides.
    pub fn load<T: Serialize>(custom_config: Option<&str>, cli_overrides: Option<T>) -> Result<Self> {
        let figment = Self::figment(custom_config, cli_overrides)?;

        figment
            .extract()
            .context("Invalid inigen configuration")
    }

    /// Build the layered figment without extracting it
    pub fn figment<T: Serialize>(
        custom_config: Option<&str>,
        cli_overrides: Option<T>,
    ) -> Result<Figment> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Toml::file(PROJECT_CONFIG));

        if let Some(path) = custom_config {
            if !Path::new(path).exists() {
                tracing::warn!("Config file {} not found, using defaults", path);
            }
            figment = match Path::new(path).extension().and_then(|ext| ext.to_str()) {
                Some("json") => figment.merge(Json::file_exact(path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file_exact(path)),
                _ => figment.merge(Toml::file_exact(path)),
            };
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        if let Some(cli) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            let overrides = filter_unset(cli).context("Failed to read command-line overrides")?;
            figment = figment.merge(Serialized::defaults(overrides));
        }

        Ok(figment)
    }
}
