use crate::diet::enforce_diet;
use crate::fallback::build_fallback;
use crate::plan::Plan;
use crate::profile::UserProfile;

use super::types::PlanPayload;

/// Remove markdown code-fence markers the model wraps around its JSON.
pub(crate) fn strip_code_fences(input: &str) -> String {
    input
        .trim()
        .replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Turn raw model text into a usable plan.
///
/// Never fails: text that does not decode into a plan, or a plan that is
/// still malformed after dietary repair, yields the fallback plan.
pub fn parse_response(raw_text: &str, profile: &UserProfile) -> Plan {
    let cleaned = strip_code_fences(raw_text);

    let payload: PlanPayload = match serde_json::from_str(&cleaned) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = %err, "could not decode model response, using fallback plan");
            tracing::debug!(raw = %raw_text, "raw model response");
            return build_fallback(profile);
        }
    };

    let plan = enforce_diet(payload.into_plan(profile), profile.diet);

    let violations = plan.shape_violations();
    if !violations.is_empty() {
        for violation in &violations {
            tracing::warn!(%violation, "generated plan is incomplete");
        }
        return build_fallback(profile);
    }

    plan
}
