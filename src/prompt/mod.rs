//! Instruction prompt sent to the generative model.

mod guidelines;

pub use guidelines::{DietGuideline, guideline_for};

use crate::profile::UserProfile;

/// Seven-day skeleton the model is asked to fill in, as (day, focus).
pub const WEEK_SKELETON: [(&str, &str); 7] = [
    ("Monday", "Upper Body"),
    ("Tuesday", "Lower Body"),
    ("Wednesday", "Cardio"),
    ("Thursday", "Core"),
    ("Friday", "Full Body"),
    ("Saturday", "Active Recovery"),
    ("Sunday", "Rest"),
];

fn schedule_template() -> String {
    WEEK_SKELETON
        .iter()
        .map(|(day, focus)| {
            format!(r#"      {{ "day": "{day}", "focus": "{focus}", "exercises": [] }}"#)
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

pub fn build_prompt(profile: &UserProfile) -> String {
    let guideline = guideline_for(profile.diet);
    let goal = profile.goal;
    let diet_title = profile.diet.as_str().to_uppercase();
    let schedule = schedule_template();

    format!(
        r#"You are a certified personal trainer and nutritionist. Create a personalized 7-day workout and diet plan for this user.
IMPORTANT: The plan MUST strictly follow their diet type. Do NOT include forbidden foods.

User Details:
- Name: {name}
- Age: {age}
- Gender: {gender}
- Height: {height} cm
- Weight: {weight} kg
- Goal: {goal}
- Fitness Level: {level}
- Workout Location: {location}
- Diet Type: {description}
- Medical Info: {medical}

Forbidden Foods: {forbidden}
Allowed Foods: {allowed}
Example Foods: {examples}

Each exercise is {{ "name": string, "sets": number, "reps": string, "rest": string }}.
Each meal item is {{ "name": string, "calories": number, "protein": "12g", "carbs": "30g", "fats": "8g" }}.

Response must be ONLY JSON, no markdown, no explanations:
{{
  "workout": {{
    "title": "Personalized {goal} Plan",
    "schedule": [
{schedule}
    ],
    "tips": ["Proper form", "Hydration", "Rest", "Consistency"]
  }},
  "diet": {{
    "title": "{diet_title} Meal Plan",
    "meals": {{
      "breakfast": [],
      "lunch": [],
      "snack": [],
      "dinner": []
    }},
    "hydration": "Drink 3-4 liters water/day",
    "supplements": []
  }}
}}
"#,
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        height = profile.height_cm,
        weight = profile.weight_kg,
        level = profile.level,
        location = profile.location,
        description = guideline.description,
        medical = profile.medical_or_none(),
        forbidden = guideline.forbidden,
        allowed = guideline.allowed,
        examples = guideline.examples,
    )
}
