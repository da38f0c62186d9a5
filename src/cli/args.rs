use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::profile::{DietType, FitnessLevel, Gender, Goal, Location, StressLevel, UserProfile};

use super::commands;

/// Entry point for the `fitcoach` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "fitcoach",
    about = "Personalized workout and diet plans from a short profile",
    version,
    long_about = None
)]
pub struct Cli {
    /// Enable debug logging (requests, responses, repairs)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a new plan and save it.
    Generate(GenerateArgs),
    /// Print the saved plan.
    Show(ShowArgs),
    /// Print the narration script for one section of the saved plan.
    Speak(SpeakArgs),
    /// Print the prompt that would be sent to the model.
    Prompt(ProfileArgs),
    /// Run raw model output through the parser and validator.
    Parse(ParseArgs),
    /// Show or change the color theme.
    Theme(ThemeArgs),
    /// Show or update the configuration file.
    Config(ConfigArgs),
}

/// Profile given either as a JSON file or as individual flags.
#[derive(Debug, Clone, Args)]
pub struct ProfileArgs {
    /// JSON file holding the full profile
    #[arg(long)]
    pub profile: Option<PathBuf>,

    #[arg(long, conflicts_with = "profile", required_unless_present = "profile")]
    pub name: Option<String>,

    #[arg(long, conflicts_with = "profile", required_unless_present = "profile")]
    pub age: Option<u32>,

    /// male, female or other [default: male]
    #[arg(long, conflicts_with = "profile")]
    pub gender: Option<Gender>,

    /// Height in centimetres
    #[arg(long, conflicts_with = "profile", required_unless_present = "profile")]
    pub height: Option<f64>,

    /// Weight in kilograms
    #[arg(long, conflicts_with = "profile", required_unless_present = "profile")]
    pub weight: Option<f64>,

    /// weight-loss, muscle-gain, maintenance or endurance [default: weight-loss]
    #[arg(long, conflicts_with = "profile")]
    pub goal: Option<Goal>,

    /// beginner, intermediate or advanced [default: beginner]
    #[arg(long, conflicts_with = "profile")]
    pub level: Option<FitnessLevel>,

    /// gym, home or outdoor [default: gym]
    #[arg(long, conflicts_with = "profile")]
    pub location: Option<Location>,

    /// veg, non-veg, vegan or keto [default: non-veg]
    #[arg(long, conflicts_with = "profile")]
    pub diet: Option<DietType>,

    /// Medical conditions or injuries
    #[arg(long, conflicts_with = "profile")]
    pub medical: Option<String>,

    /// low, moderate or high [default: moderate]
    #[arg(long, conflicts_with = "profile")]
    pub stress: Option<StressLevel>,
}

impl ProfileArgs {
    pub fn resolve(&self) -> Result<UserProfile> {
        let profile = match &self.profile {
            Some(path) => UserProfile::from_json_file(path)?,
            None => UserProfile {
                name: self.name.clone().context("--name is required")?,
                age: self.age.context("--age is required")?,
                gender: self.gender.unwrap_or(Gender::Male),
                height_cm: self.height.context("--height is required")?,
                weight_kg: self.weight.context("--weight is required")?,
                goal: self.goal.unwrap_or(Goal::WeightLoss),
                level: self.level.unwrap_or(FitnessLevel::Beginner),
                location: self.location.unwrap_or(Location::Gym),
                diet: self.diet.unwrap_or_default(),
                medical_notes: self.medical.clone(),
                stress: self.stress.unwrap_or_default(),
            },
        };

        profile.validate()?;
        Ok(profile)
    }
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Skip the API and build the offline plan
    #[arg(long)]
    pub offline: bool,

    /// Override the model for this run
    #[arg(long)]
    pub model: Option<String>,

    /// Print the plan as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Print the plan as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Workout,
    Diet,
}

#[derive(Debug, Args)]
pub struct SpeakArgs {
    pub section: Section,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// File with the raw model output, or `-` for stdin
    pub input: PathBuf,

    #[command(flatten)]
    pub profile: ProfileArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Dark,
    Light,
    Toggle,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Leave empty to print the current theme
    pub mode: Option<ThemeMode>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Set the Gemini API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Set the model name
    #[arg(long)]
    pub model: Option<String>,

    /// Set the request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Set the output token limit
    #[arg(long)]
    pub max_output_tokens: Option<u32>,

    /// Set the sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,
}

impl ConfigArgs {
    pub fn has_updates(&self) -> bool {
        self.api_key.is_some()
            || self.base_url.is_some()
            || self.model.is_some()
            || self.timeout.is_some()
            || self.max_output_tokens.is_some()
            || self.temperature.is_some()
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
