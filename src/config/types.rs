use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiSettings,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ApiSettings {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Sampling parameters forwarded as the request's `generationConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

// File configuration types
#[derive(Debug, Default, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub api: Option<FileApiSettings>,
    #[serde(default)]
    pub generation: Option<FileGenerationSettings>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileApiSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileGenerationSettings {
    pub temperature: Option<f32>,
    pub top_k: Option<u32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

// Serialization helpers
#[derive(Serialize)]
pub(super) struct PersistedConfig<'a> {
    pub api: PersistedApi<'a>,
    pub generation: PersistedGeneration,
}

#[derive(Serialize)]
pub(super) struct PersistedApi<'a> {
    pub api_key: &'a str,
    pub base_url: &'a str,
    pub model: &'a str,
    pub timeout_secs: u64,
    pub user_agent: &'a str,
}

#[derive(Serialize)]
pub(super) struct PersistedGeneration {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl<'a> From<&'a Config> for PersistedConfig<'a> {
    fn from(config: &'a Config) -> Self {
        PersistedConfig {
            api: PersistedApi {
                api_key: &config.api.api_key,
                base_url: &config.api.base_url,
                model: &config.api.model,
                timeout_secs: config.api.timeout_secs,
                user_agent: &config.api.user_agent,
            },
            generation: PersistedGeneration {
                temperature: config.generation.temperature,
                top_k: config.generation.top_k,
                top_p: config.generation.top_p,
                max_output_tokens: config.generation.max_output_tokens,
            },
        }
    }
}
