use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::plan::Plan;

use super::render::{Theme, format_plan};

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible: String = key.chars().take(8).collect();
    format!("{visible}***")
}

/// Read raw text from `path`, where `-` means stdin.
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buffer)
            .context("Failed reading model output from stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(path).with_context(|| format!("Failed reading {}", path.display()))
}

pub(crate) fn plan_json(plan: &Plan) -> Result<String> {
    serde_json::to_string_pretty(plan).context("Failed to serialize plan to JSON")
}

pub(crate) fn print_plan(plan: &Plan, json: bool, dark_mode: bool) -> Result<()> {
    if json {
        println!("{}", plan_json(plan)?);
    } else {
        print!("{}", format_plan(plan, Theme::from_dark_mode(dark_mode)));
    }
    Ok(())
}
