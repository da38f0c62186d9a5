//! Plan generation: prompt the model once and turn whatever comes back, or
//! the failure to get anything back, into a complete plan.

mod parsing;
mod transport;
mod types;

pub use parsing::parse_response;

use crate::client::DynGenerativeClient;
use crate::config::GenerationSettings;
use crate::fallback::build_fallback;
use crate::plan::Plan;
use crate::profile::UserProfile;
use crate::prompt::build_prompt;

use transport::request_plan_text;

/// Generate a plan for `profile`.
///
/// `client` is `None` when running offline or without an API key; the fallback
/// plan is returned in that case, as it is for any request failure.
pub async fn generate_plan(
    client: Option<&DynGenerativeClient>,
    profile: &UserProfile,
    settings: &GenerationSettings,
) -> Plan {
    let Some(client) = client else {
        tracing::info!("no generative client configured, using fallback plan");
        return build_fallback(profile);
    };

    let prompt = build_prompt(profile);
    match request_plan_text(client, &prompt, settings).await {
        Ok(text) => parse_response(&text, profile),
        Err(err) => {
            let error = format!("{err:#}");
            tracing::warn!(%error, "plan generation failed, using fallback plan");
            build_fallback(profile)
        }
    }
}
