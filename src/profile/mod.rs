//! User profile captured before a plan is generated.

mod types;

pub use types::{DietType, FitnessLevel, Gender, Goal, Location, StressLevel, UserProfile};

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

impl UserProfile {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Profile name cannot be empty");
        }
        if self.age == 0 {
            bail!("Profile age must be a positive number");
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            bail!("Profile height must be a positive number of centimetres");
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            bail!("Profile weight must be a positive number of kilograms");
        }
        Ok(())
    }

    /// Medical notes as shown to the model; blank notes read as "None".
    pub fn medical_or_none(&self) -> &str {
        match self.medical_notes.as_deref().map(str::trim) {
            Some(notes) if !notes.is_empty() => notes,
            _ => "None",
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading profile at {}", path.display()))?;
        let profile: UserProfile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON profile at {}", path.display()))?;
        Ok(profile)
    }
}

#[cfg(test)]
pub(crate) mod tests;
