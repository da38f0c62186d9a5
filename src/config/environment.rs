use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(api_key) = env_string("GEMINI_API_KEY")? {
        builder = builder.with_api(|api| api.api_key = api_key);
    }

    if let Some(base_url) = env_string("FITCOACH_BASE_URL")? {
        builder = builder.with_api(|api| api.base_url = base_url);
    }

    if let Some(model) = env_string("FITCOACH_MODEL")? {
        builder = builder.with_api(|api| api.model = model);
    }

    if let Some(timeout) = env_u64("FITCOACH_TIMEOUT_SECS")? {
        builder = builder.with_api(|api| api.timeout_secs = timeout);
    }

    if let Some(max_tokens) = env_u32("FITCOACH_MAX_OUTPUT_TOKENS")? {
        builder = builder.with_generation(|generation| generation.max_output_tokens = max_tokens);
    }

    if let Some(temperature) = env_f32("FITCOACH_TEMPERATURE")? {
        builder = builder.with_generation(|generation| generation.temperature = temperature);
    }

    Ok(builder)
}

pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_u32(key: &str) -> Result<Option<u32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<u32>()
            .with_context(|| format!("Failed to parse {key} as u32"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_f32(key: &str) -> Result<Option<f32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .parse::<f32>()
            .with_context(|| format!("Failed to parse {key} as a number"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
