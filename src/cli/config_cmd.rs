use anyhow::Result;

use crate::config::Config;

use super::args::ConfigArgs;
use super::util::mask_api_key;

pub(crate) fn handle_config(args: &ConfigArgs) -> Result<()> {
    let mut config = Config::load()?;

    if args.has_updates() {
        apply_config_args(args, &mut config);
        config.save()?;
        println!("✅ Configuration saved to {}", Config::config_path()?.display());
    }

    print_config(&config);
    Ok(())
}

pub(crate) fn apply_config_args(args: &ConfigArgs, config: &mut Config) {
    if let Some(api_key) = &args.api_key {
        config.api.api_key = api_key.trim().to_string();
    }
    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.trim().to_string();
    }
    if let Some(model) = &args.model {
        config.api.model = model.trim().to_string();
    }
    if let Some(timeout) = args.timeout {
        config.api.timeout_secs = timeout;
    }
    if let Some(max_output_tokens) = args.max_output_tokens {
        config.generation.max_output_tokens = max_output_tokens;
    }
    if let Some(temperature) = args.temperature {
        config.generation.temperature = temperature;
    }
}

fn print_config(config: &Config) {
    println!("📋 Current configuration:");
    println!("   API Key: {}", mask_api_key(&config.api.api_key));
    println!("   Base URL: {}", config.api.base_url);
    println!("   Model: {}", config.api.model);
    println!("   Timeout: {}s", config.api.timeout_secs);
    println!("   Temperature: {}", config.generation.temperature);
    println!("   Top K: {}", config.generation.top_k);
    println!("   Top P: {}", config.generation.top_p);
    println!("   Max Output Tokens: {}", config.generation.max_output_tokens);
}
