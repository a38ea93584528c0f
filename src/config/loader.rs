//! Configuration loading and management

use crate::config::types::{Messages, NpmConfig, Styles};
use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_APP_MODULE, DEFAULT_BAR_LENGTH, DEFAULT_REPO, MAX_BAR_LENGTH,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Settings for scaffolding and install progress.
///
/// Every field is optional in the file; missing keys keep their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Template repository cloned by `este new`
    #[serde(default = "get_default_repo")]
    pub repo: String,
    /// Package whose postinstall marks the end of the dependency phase
    #[serde(default = "get_default_app_module")]
    pub app_module: String,
    #[serde(default = "get_default_bar_length")]
    pub bar_length: usize,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub messages: Messages,
    #[serde(default)]
    pub npm: NpmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo: get_default_repo(),
            app_module: get_default_app_module(),
            bar_length: get_default_bar_length(),
            styles: Styles::default(),
            messages: Messages::default(),
            npm: NpmConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.bar_length == 0 {
            return Err(Error::ConfigValidation("bar_length must be at least 1".into()));
        }
        if self.bar_length > MAX_BAR_LENGTH {
            return Err(Error::ConfigValidation(format!(
                "bar_length must be at most {MAX_BAR_LENGTH}, got {}",
                self.bar_length
            )));
        }
        if self.npm.program.trim().is_empty() {
            return Err(Error::ConfigValidation("npm.program must not be empty".into()));
        }
        if self.repo.trim().is_empty() {
            return Err(Error::ConfigValidation("repo must not be empty".into()));
        }
        Ok(())
    }

    /// Loads the configuration from `path`, or from the first of
    /// [`CONFIG_FILENAMES`] found in `dir`, falling back to defaults.
    pub fn load<P: AsRef<Path>>(path: Option<&Path>, dir: P) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let dir = dir.as_ref();
                match CONFIG_FILENAMES.iter().map(|name| dir.join(name)).find(|p| p.exists())
                {
                    Some(found) => Self::from_file(&found)?,
                    None => {
                        log::debug!("No config file in '{}', using defaults", dir.display());
                        Self::default()
                    }
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parses a single file; `.json` files as JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading config from '{}'", path.display());

        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        Ok(config)
    }
}

fn get_default_repo() -> String {
    DEFAULT_REPO.to_string()
}

fn get_default_app_module() -> String {
    DEFAULT_APP_MODULE.to_string()
}

fn get_default_bar_length() -> usize {
    DEFAULT_BAR_LENGTH
}
