use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::config::Config;
use crate::plan::Plan;

use super::{StateStore, StoredState};

const STATE_FILE_NAME: &str = "state.json";

/// JSON file store, `~/.fitcoach/state.json` by default.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

/// Loose view of the file so a corrupt plan does not lose the theme flag.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawState {
    #[serde(default)]
    plan: Option<Value>,
    #[serde(default)]
    dark_mode: bool,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Config::config_dir()?.join(STATE_FILE_NAME)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<StoredState> {
        if !self.path.exists() {
            return Ok(StoredState::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed reading state at {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(StoredState::default());
        }

        let raw: RawState = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing state at {}", self.path.display()))?;

        let plan = match raw.plan {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value::<Plan>(value) {
                Ok(plan) => Some(plan),
                Err(err) => {
                    tracing::warn!(error = %err, path = %self.path.display(), "discarding unreadable saved plan");
                    None
                }
            },
        };

        Ok(StoredState {
            plan,
            dark_mode: raw.dark_mode,
        })
    }

    fn save(&self, state: &StoredState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create state directory {}", parent.display())
            })?;
        }

        let json =
            serde_json::to_string_pretty(state).context("Failed to serialize state to JSON")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write state to {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved state");
        Ok(())
    }
}
