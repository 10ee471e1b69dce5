use std::{fs, path::Path};

use indexmap::IndexMap;

use crate::{ConfigError, NetworkConfig};

/// File format of a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Determines the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// The settings object: network profiles keyed by name, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct HardhatConfig {
    #[serde(default)]
    pub networks: IndexMap<String, NetworkConfig>,
}

impl HardhatConfig {
    /// Loads a configuration file, determining its format from the extension.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_str_with_format(&contents, format)?;
        log::debug!(
            "Loaded {} network profile(s) from {}",
            config.networks.len(),
            path.display()
        );

        Ok(config)
    }

    /// Parses a configuration in the provided format.
    pub fn from_str_with_format(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(contents),
            ConfigFormat::Json => Self::from_json_str(contents),
        }
    }

    /// Parses a TOML configuration.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parses a JSON configuration.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Serializes the configuration in the provided format.
    pub fn to_string_with_format(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => self.to_toml_string(),
            ConfigFormat::Json => self.to_json_string(),
        }
    }

    /// Serializes the configuration to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the network profile with the provided name.
    pub fn network(&self, name: &str) -> Result<&NetworkConfig, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_owned()))
    }

    /// Returns a configuration containing only the network profile with the
    /// provided name.
    pub fn select(&self, name: &str) -> Result<Self, ConfigError> {
        let network = self.network(name)?.clone();

        Ok(Self {
            networks: IndexMap::from([(name.to_owned(), network)]),
        })
    }
}
