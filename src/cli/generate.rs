use anyhow::Result;
use colored::*;

use crate::client::{DynGenerativeClient, GeminiClient};
use crate::config::{ApiSettings, Config};
use crate::motivation::random_quote;
use crate::plan::Plan;
use crate::planner::generate_plan;
use crate::store::{StateStore, StoredState};

use super::args::GenerateArgs;
use super::util::print_plan;

pub(crate) async fn handle_generate(
    args: &GenerateArgs,
    config: &Config,
    store: &dyn StateStore,
) -> Result<()> {
    let (plan, dark_mode) = generate_and_store(args, config, store).await?;

    if !args.json {
        println!("{}\n", random_quote().italic());
    }
    print_plan(&plan, args.json, dark_mode)
}

pub(crate) async fn generate_and_store(
    args: &GenerateArgs,
    config: &Config,
    store: &dyn StateStore,
) -> Result<(Plan, bool)> {
    let profile = args.profile.resolve()?;

    let mut api = config.api.clone();
    if let Some(model) = &args.model {
        api.model = model.clone();
    }

    let client = build_client(&api, args.offline)?;
    let plan = generate_plan(
        client.as_ref().map(|client| client as &DynGenerativeClient),
        &profile,
        &config.generation,
    )
    .await;

    let state = save_plan(store, &plan)?;
    Ok((plan, state.dark_mode))
}

fn build_client(api: &ApiSettings, offline: bool) -> Result<Option<GeminiClient>> {
    if offline {
        return Ok(None);
    }
    if !api.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set, generating the offline plan");
        return Ok(None);
    }
    Ok(Some(GeminiClient::new(api)?))
}

/// Replace the stored plan, keeping the theme flag.
pub(crate) fn save_plan(store: &dyn StateStore, plan: &Plan) -> Result<StoredState> {
    let mut state = match store.load() {
        Ok(state) => state,
        Err(err) => {
            let error = format!("{err:#}");
            tracing::warn!(%error, "discarding unreadable saved state");
            StoredState::default()
        }
    };

    state.plan = Some(plan.clone());
    store.save(&state)?;
    Ok(state)
}
