//! Deterministic plan used whenever the generated plan cannot be used.

use crate::diet::replacement_meals;
use crate::plan::{DaySchedule, DietSection, Exercise, MealPlan, MealSlot, Plan, WorkoutSection};
use crate::profile::UserProfile;

const FALLBACK_TIPS: &[&str] = &["Stay consistent", "Eat balanced meals", "Get enough rest"];

fn single_exercise_day(day: &str, focus: &str, name: &str, reps: &str) -> DaySchedule {
    DaySchedule {
        day: day.to_string(),
        focus: focus.to_string(),
        exercises: vec![Exercise {
            name: name.to_string(),
            sets: 3,
            reps: reps.to_string(),
            rest: None,
        }],
    }
}

/// Build the fallback plan for `profile`.
///
/// Only the titles and the breakfast items depend on the profile. Lunch, snack
/// and dinner are left out of the meal plan entirely.
pub fn build_fallback(profile: &UserProfile) -> Plan {
    let mut meals = MealPlan::new();
    meals.insert(
        MealSlot::Breakfast,
        replacement_meals(&MealSlot::Breakfast, profile.diet),
    );

    Plan {
        user: profile.clone(),
        workout: WorkoutSection {
            title: format!("{} Plan (Fallback)", profile.goal),
            schedule: vec![
                single_exercise_day("Monday", "Upper Body", "Pushups", "12"),
                single_exercise_day("Tuesday", "Lower Body", "Squats", "15"),
                single_exercise_day("Wednesday", "Cardio", "Jump Rope", "2 min"),
            ],
            tips: FALLBACK_TIPS.iter().map(|tip| tip.to_string()).collect(),
        },
        diet: DietSection {
            title: format!("{} Meal Plan", profile.diet.as_str().to_uppercase()),
            meals,
            hydration: "Drink 3-4 liters daily".to_string(),
            supplements: vec!["Multivitamin".to_string()],
        },
    }
}
