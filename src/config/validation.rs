use anyhow::{Result, bail};

use super::types::Config;

/// Range checks only. A missing API key is allowed: generation then falls
/// back to the offline plan.
pub fn validate(config: &Config) -> Result<()> {
    if config.api.timeout_secs == 0 {
        bail!("Timeout must be at least one second");
    }
    if config.api.base_url.trim().is_empty() {
        bail!("API base URL cannot be empty");
    }
    if config.api.model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }

    let generation = &config.generation;
    if !(0.0..=2.0).contains(&generation.temperature) {
        bail!(
            "Temperature must be between 0 and 2 (got {})",
            generation.temperature
        );
    }
    if !(0.0..=1.0).contains(&generation.top_p) {
        bail!("top_p must be between 0 and 1 (got {})", generation.top_p);
    }
    if generation.top_k == 0 {
        bail!("top_k must be greater than zero");
    }
    if generation.max_output_tokens == 0 {
        bail!("max_output_tokens must be greater than zero");
    }
    Ok(())
}
