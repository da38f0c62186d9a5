//! Workout and diet plan model shared by the generator, validator and store.

mod types;

pub use types::{
    DaySchedule, DietSection, Exercise, MealItem, MealPlan, MealSlot, Plan, ShapeViolation,
    WorkoutSection,
};

impl DaySchedule {
    /// A day whose focus names rest or recovery may legitimately have no exercises.
    pub fn is_rest_day(&self) -> bool {
        self.focus
            .split(|ch: char| !ch.is_alphanumeric())
            .any(|word| word.eq_ignore_ascii_case("rest") || word.eq_ignore_ascii_case("recovery"))
    }
}

impl Plan {
    pub fn shape_violations(&self) -> Vec<ShapeViolation> {
        let mut violations = Vec::new();

        for day in &self.workout.schedule {
            if day.exercises.is_empty() && !day.is_rest_day() {
                violations.push(ShapeViolation::EmptyWorkoutDay {
                    day: day.day.clone(),
                });
            }
        }

        for (slot, items) in &self.diet.meals {
            if items.is_empty() {
                violations.push(ShapeViolation::EmptyMealSlot { slot: slot.clone() });
            }
        }

        violations
    }
}
