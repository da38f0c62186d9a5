use anyhow::Result;

use super::types::{ApiSettings, Config, GenerationSettings};
use super::validation::validate;

#[derive(Debug)]
pub struct ConfigBuilder {
    pub(super) api: ApiSettings,
    pub(super) generation: GenerationSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            generation: GenerationSettings::default(),
        }
    }

    pub fn with_api<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut ApiSettings),
    {
        update(&mut self.api);
        self
    }

    pub fn with_generation<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut GenerationSettings),
    {
        update(&mut self.generation);
        self
    }

    pub fn build(self) -> Result<Config> {
        let config = Config {
            api: self.api,
            generation: self.generation,
        };
        validate(&config)?;
        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
