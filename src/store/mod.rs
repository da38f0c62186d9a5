//! Persisted application state: the last generated plan and the theme flag.
//!
//! Storage is reached through [`StateStore`] so callers can swap the file
//! store for an in-memory one.

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStateStore;
#[cfg(test)]
pub use memory::MemoryStateStore;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::plan::Plan;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredState {
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub dark_mode: bool,
}

pub trait StateStore {
    fn load(&self) -> Result<StoredState>;
    fn save(&self, state: &StoredState) -> Result<()>;
}
