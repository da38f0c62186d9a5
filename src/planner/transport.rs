use anyhow::{Context, Result};

use crate::client::{DynGenerativeClient, GenerateContentRequest};
use crate::config::GenerationSettings;

/// Send `prompt` once and return the first candidate's text.
pub(crate) async fn request_plan_text(
    client: &DynGenerativeClient,
    prompt: &str,
    settings: &GenerationSettings,
) -> Result<String> {
    let request = GenerateContentRequest::from_prompt(prompt, settings);

    let response = client
        .generate_content(request)
        .await
        .context("Gemini plan request failed")?;

    if let Some(reason) = response
        .candidates
        .first()
        .and_then(|candidate| candidate.finish_reason.as_deref())
    {
        tracing::debug!(finish_reason = reason, "plan response received");
    }

    Ok(response.first_text().trim().to_string())
}
