use serde::Deserialize;

use crate::plan::{DietSection, Plan, WorkoutSection};
use crate::profile::UserProfile;

/// Plan body decoded from model output. Any `user` object the model echoes
/// back is ignored; the caller's profile is attached instead.
#[derive(Debug, Deserialize)]
pub(crate) struct PlanPayload {
    pub workout: WorkoutSection,
    pub diet: DietSection,
}

impl PlanPayload {
    pub(crate) fn into_plan(self, profile: &UserProfile) -> Plan {
        Plan {
            user: profile.clone(),
            workout: self.workout,
            diet: self.diet,
        }
    }
}
