use anyhow::{Result, bail};

use crate::config::Config;
use crate::narration::{narrate_diet, narrate_workout};
use crate::plan::Plan;
use crate::planner::parse_response;
use crate::prompt::build_prompt;
use crate::store::{FileStateStore, StateStore};

use super::args::{Cli, Command, ParseArgs, Section, ShowArgs, SpeakArgs, ThemeMode};
use super::config_cmd;
use super::generate;
use super::util::{plan_json, print_plan, read_input};

pub(crate) async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => {
            let config = Config::load()?;
            let store = FileStateStore::default_location()?;
            generate::handle_generate(&args, &config, &store).await?;
            tracing::debug!(path = %store.path().display(), "plan saved");
            Ok(())
        }
        Command::Show(args) => handle_show(&args, &FileStateStore::default_location()?),
        Command::Speak(args) => handle_speak(&args, &FileStateStore::default_location()?),
        Command::Prompt(args) => {
            let profile = args.resolve()?;
            println!("{}", build_prompt(&profile));
            Ok(())
        }
        Command::Parse(args) => handle_parse(&args),
        Command::Theme(args) => {
            let dark_mode = apply_theme(args.mode, &FileStateStore::default_location()?)?;
            println!("🎨 Theme: {}", theme_name(dark_mode));
            Ok(())
        }
        Command::Config(args) => config_cmd::handle_config(&args),
    }
}

fn stored_plan(store: &dyn StateStore) -> Result<(Plan, bool)> {
    let state = store.load()?;
    match state.plan {
        Some(plan) => Ok((plan, state.dark_mode)),
        None => bail!("No saved plan found. Run `fitcoach generate` first."),
    }
}

pub(crate) fn handle_show(args: &ShowArgs, store: &dyn StateStore) -> Result<()> {
    let (plan, dark_mode) = stored_plan(store)?;
    print_plan(&plan, args.json, dark_mode)
}

pub(crate) fn speech_script(section: Section, store: &dyn StateStore) -> Result<String> {
    let (plan, _) = stored_plan(store)?;
    Ok(match section {
        Section::Workout => narrate_workout(&plan),
        Section::Diet => narrate_diet(&plan),
    })
}

fn handle_speak(args: &SpeakArgs, store: &dyn StateStore) -> Result<()> {
    println!("{}", speech_script(args.section, store)?);
    Ok(())
}

fn handle_parse(args: &ParseArgs) -> Result<()> {
    let profile = args.profile.resolve()?;
    let raw = read_input(&args.input)?;
    let plan = parse_response(&raw, &profile);
    println!("{}", plan_json(&plan)?);
    Ok(())
}

/// Apply `mode` to the stored theme flag and return the resulting flag.
pub(crate) fn apply_theme(mode: Option<ThemeMode>, store: &dyn StateStore) -> Result<bool> {
    let mut state = store.load()?;
    let dark_mode = match mode {
        None => return Ok(state.dark_mode),
        Some(ThemeMode::Dark) => true,
        Some(ThemeMode::Light) => false,
        Some(ThemeMode::Toggle) => !state.dark_mode,
    };

    state.dark_mode = dark_mode;
    store.save(&state)?;
    Ok(dark_mode)
}

fn theme_name(dark_mode: bool) -> &'static str {
    if dark_mode { "dark" } else { "light" }
}
