//! Dietary validation and repair for generated meal plans.
//!
//! Vegetarian and vegan plans have every meal item screened against a fixed
//! list of animal-product words. Slots emptied by the screen are refilled from
//! the replacement catalog so the plan never shows an empty meal.

mod catalog;

pub use catalog::replacement_meals;

use crate::plan::Plan;
use crate::profile::DietType;

/// Matched as case-insensitive substrings, so "Eggplant" trips "egg".
pub const FORBIDDEN_WORDS: &[&str] = &[
    "chicken", "fish", "beef", "pork", "lamb", "mutton", "turkey", "seafood", "shrimp", "crab",
    "bacon", "ham", "sausage", "steak", "meat", "egg", "honey",
];

pub fn is_forbidden(name: &str) -> bool {
    let lower = name.to_lowercase();
    FORBIDDEN_WORDS.iter().any(|word| lower.contains(word))
}

/// Filter forbidden items out of every meal slot, refilling emptied slots.
///
/// Plans for non-veg and keto diets are returned untouched, as is the workout
/// section of every plan.
pub fn enforce_diet(mut plan: Plan, diet: DietType) -> Plan {
    if !diet.is_enforced() {
        return plan;
    }

    for (slot, items) in plan.diet.meals.iter_mut() {
        items.retain(|item| {
            let forbidden = is_forbidden(&item.name);
            if forbidden {
                tracing::warn!(meal = %slot, item = %item.name, diet = %diet, "removed forbidden item");
            }
            !forbidden
        });

        if items.is_empty() {
            tracing::info!(meal = %slot, diet = %diet, "meal slot emptied, using replacement meals");
            *items = replacement_meals(slot, diet);
        }
    }

    plan
}
