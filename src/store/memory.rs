use anyhow::{Result, anyhow};
use std::sync::Mutex;

use super::{StateStore, StoredState};

#[derive(Debug, Default)]
pub struct MemoryStateStore {
    state: Mutex<StoredState>,
}

impl MemoryStateStore {
    pub fn new(state: StoredState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> Result<StoredState> {
        let state = self
            .state
            .lock()
            .map_err(|_| anyhow!("State lock poisoned"))?;
        Ok(state.clone())
    }

    fn save(&self, state: &StoredState) -> Result<()> {
        let mut current = self
            .state
            .lock()
            .map_err(|_| anyhow!("State lock poisoned"))?;
        *current = state.clone();
        Ok(())
    }
}
