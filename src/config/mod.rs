//! Configuration management for fitcoach.
//!
//! Settings are layered in this order, later layers winning:
//! - built-in defaults
//! - the JSON file at `~/.fitcoach/config`
//! - environment variables (`GEMINI_API_KEY`, `FITCOACH_*`)
//! - command-line flags applied by the CLI

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{ApiSettings, Config, GenerationSettings};

#[cfg(test)]
mod tests;
