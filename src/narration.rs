//! Spoken-text scripts for a plan. Speech synthesis itself happens elsewhere.

use crate::plan::Plan;

pub fn narrate_workout(plan: &Plan) -> String {
    let days = plan
        .workout
        .schedule
        .iter()
        .map(|day| {
            let exercises = day
                .exercises
                .iter()
                .map(|exercise| {
                    format!(
                        "{}, {} sets of {} reps",
                        exercise.name, exercise.sets, exercise.reps
                    )
                })
                .collect::<Vec<_>>()
                .join(". ");
            format!("{}: {}. {}", day.day, day.focus, exercises)
        })
        .collect::<Vec<_>>()
        .join(". ");

    format!("Here is your workout plan. {days}")
}

pub fn narrate_diet(plan: &Plan) -> String {
    let meals = plan
        .diet
        .meals
        .iter()
        .map(|(slot, items)| {
            let names = items
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("For {slot}: {names}")
        })
        .collect::<Vec<_>>()
        .join(". ");

    format!("Here is your diet plan. {meals}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::build_fallback;
    use crate::profile::DietType;
    use crate::profile::tests::sample_profile;

    #[test]
    fn workout_narration_lists_days_and_sets() {
        let plan = build_fallback(&sample_profile(DietType::Veg));
        assert_eq!(
            narrate_workout(&plan),
            "Here is your workout plan. Monday: Upper Body. Pushups, 3 sets of 12 reps. \
             Tuesday: Lower Body. Squats, 3 sets of 15 reps. \
             Wednesday: Cardio. Jump Rope, 3 sets of 2 min reps"
        );
    }

    #[test]
    fn diet_narration_lists_slots_in_order() {
        let plan = crate::plan::tests::sample_plan(sample_profile(DietType::NonVeg));
        let script = narrate_diet(&plan);

        assert!(script.starts_with(
            "Here is your diet plan. For breakfast: Oatmeal with Berries, Green Tea. For lunch: "
        ));
        let lunch = script.find("For lunch").unwrap();
        let snack = script.find("For snack").unwrap();
        let dinner = script.find("For dinner").unwrap();
        assert!(lunch < snack && snack < dinner);
        assert!(script.ends_with("For dinner: Grilled Salmon, Steamed Broccoli"));
    }
}
