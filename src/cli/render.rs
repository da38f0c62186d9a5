use colored::*;

use crate::plan::{Exercise, MealItem, Plan};

/// Terminal palette chosen by the persisted theme flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub(crate) fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Theme::Dark } else { Theme::Light }
    }

    fn heading(self, text: &str) -> ColoredString {
        match self {
            Theme::Dark => text.bold().bright_cyan(),
            Theme::Light => text.bold().blue(),
        }
    }

    fn accent(self, text: &str) -> ColoredString {
        match self {
            Theme::Dark => text.bright_yellow(),
            Theme::Light => text.magenta(),
        }
    }
}

fn exercise_line(exercise: &Exercise) -> String {
    match exercise.rest.as_deref() {
        Some(rest) => format!(
            "{} - {} x {} (rest {})",
            exercise.name, exercise.sets, exercise.reps, rest
        ),
        None => format!("{} - {} x {}", exercise.name, exercise.sets, exercise.reps),
    }
}

fn meal_line(item: &MealItem) -> String {
    format!(
        "{} - {} kcal | P {} | C {} | F {}",
        item.name, item.calories, item.protein, item.carbs, item.fats
    )
}

pub(crate) fn format_plan(plan: &Plan, theme: Theme) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        theme.heading(&format!("🏋️  {}", plan.workout.title))
    ));
    out.push_str(&format!(
        "For {} ({} years, {} cm, {} kg)\n",
        plan.user.name, plan.user.age, plan.user.height_cm, plan.user.weight_kg
    ));

    for day in &plan.workout.schedule {
        out.push_str(&format!(
            "\n{} {}\n",
            theme.accent(&day.day),
            format!("- {}", day.focus).dimmed()
        ));
        if day.exercises.is_empty() {
            out.push_str("  Rest day\n");
        }
        for (idx, exercise) in day.exercises.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", idx + 1, exercise_line(exercise)));
        }
    }

    if !plan.workout.tips.is_empty() {
        out.push_str(&format!("\n{}\n", theme.heading("Tips")));
        for tip in &plan.workout.tips {
            out.push_str(&format!("  • {tip}\n"));
        }
    }

    out.push_str(&format!(
        "\n{}\n",
        theme.heading(&format!("🥗 {}", plan.diet.title))
    ));
    for (slot, items) in &plan.diet.meals {
        out.push_str(&format!("\n{}\n", theme.accent(&capitalize(slot.as_str()))));
        for item in items {
            out.push_str(&format!("  • {}\n", meal_line(item)));
        }
    }

    if !plan.diet.hydration.trim().is_empty() {
        out.push_str(&format!("\n💧 {}\n", plan.diet.hydration.trim()));
    }
    if !plan.diet.supplements.is_empty() {
        out.push_str(&format!(
            "💊 Supplements: {}\n",
            plan.diet.supplements.join(", ")
        ));
    }

    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
