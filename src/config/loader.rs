use anyhow::{Context, Result};
use dirs::home_dir;
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::builder::ConfigBuilder;
use super::constants::CONFIG_DIR_NAME;
use super::environment::apply_env_overrides;
use super::types::{FileConfig, PersistedConfig};
use super::validation::validate;
use super::Config;

impl Config {
    /// Directory holding both the config file and the saved plan state.
    pub fn config_dir() -> Result<PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(CONFIG_DIR_NAME);
        Ok(path)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config"))
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut builder = ConfigBuilder::new();

        if path.exists() {
            builder = Self::apply_file(builder, &path)?;
        }

        builder = apply_env_overrides(builder)?;
        builder.build()
    }

    pub fn save(&self) -> Result<()> {
        validate(self)?;

        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(file.apply(builder))
    }
}

impl FileConfig {
    pub fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        let builder = match self.api {
            Some(file) => builder.with_api(|api| {
                if let Some(api_key) = file.api_key {
                    api.api_key = api_key;
                }
                if let Some(base_url) = file.base_url {
                    api.base_url = base_url;
                }
                if let Some(model) = file.model {
                    api.model = model;
                }
                if let Some(timeout) = file.timeout_secs {
                    api.timeout_secs = timeout;
                }
                if let Some(user_agent) = file.user_agent {
                    api.user_agent = user_agent;
                }
            }),
            None => builder,
        };

        match self.generation {
            Some(file) => builder.with_generation(|generation| {
                if let Some(temperature) = file.temperature {
                    generation.temperature = temperature;
                }
                if let Some(top_k) = file.top_k {
                    generation.top_k = top_k;
                }
                if let Some(top_p) = file.top_p {
                    generation.top_p = top_p;
                }
                if let Some(max_output_tokens) = file.max_output_tokens {
                    generation.max_output_tokens = max_output_tokens;
                }
            }),
            None => builder,
        }
    }
}
