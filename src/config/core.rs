use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::combine::{CombineOptions, ExtensionFilter};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClapConfig {
    /// Output file name, resolved under the root path when relative
    pub output: String,

    /// Raw extension tokens; normalized when the filter is built
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Descend into symlinked directories
    #[serde(default)]
    pub follow_links: bool,

    /// Honour .gitignore and .ignore files
    #[serde(default)]
    pub use_gitignore: bool,
}

/// Command-line values layered over the file config
///
/// Unset fields are skipped so they never clobber a lower layer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub follow_links: bool,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub use_gitignore: bool,
}

impl ClapConfig {
    /// Embedded defaults only
    pub fn defaults() -> Result<Self> {
        Self::load(None, &ConfigOverrides::default())
    }

    pub fn load(custom_config: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(path) = custom_config {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("Loading config from {}", path.display());
            figment = Self::merge_file(figment, path);
        }

        figment = figment.merge(Serialized::defaults(overrides.clone()));

        let config: ClapConfig = figment
            .extract()
            .context("Failed to load configuration")?;
        config.validate()?;

        tracing::trace!("CONFIG LOAD: Final config = {:?}", config);
        Ok(config)
    }

    /// Pick the figment format from the file extension, TOML when unknown
    fn merge_file(figment: Figment, path: &Path) -> Figment {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => figment.merge(Toml::file(path)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.trim().is_empty() {
            anyhow::bail!("Output file name cannot be empty");
        }
        Ok(())
    }

    pub fn filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions)
    }

    pub fn combine_options(&self) -> CombineOptions {
        CombineOptions {
            follow_links: self.follow_links,
            use_gitignore: self.use_gitignore,
        }
    }
}
