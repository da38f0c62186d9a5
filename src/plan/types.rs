use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub user: UserProfile,
    pub workout: WorkoutSection,
    pub diet: DietSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSection {
    pub title: String,
    pub schedule: Vec<DaySchedule>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    /// Free-form: "12", "8-12", "2 min".
    pub reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietSection {
    pub title: String,
    pub meals: MealPlan,
    #[serde(default)]
    pub hydration: String,
    #[serde(default)]
    pub supplements: Vec<String>,
}

/// Meal items keyed by slot; iteration follows breakfast, lunch, snack, dinner,
/// then any other slot names in alphabetical order.
pub type MealPlan = BTreeMap<MealSlot, Vec<MealItem>>;

/// Serialized as the lowercase slot name. Keys the model invents, such as
/// `pre_workout`, are kept verbatim as [`MealSlot::Other`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
    Other(String),
}

impl MealSlot {
    pub fn as_str(&self) -> &str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
            MealSlot::Other(name) => name,
        }
    }
}

impl From<String> for MealSlot {
    fn from(name: String) -> Self {
        match name.as_str() {
            "breakfast" => MealSlot::Breakfast,
            "lunch" => MealSlot::Lunch,
            "snack" => MealSlot::Snack,
            "dinner" => MealSlot::Dinner,
            _ => MealSlot::Other(name),
        }
    }
}

impl From<MealSlot> for String {
    fn from(slot: MealSlot) -> Self {
        match slot {
            MealSlot::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macro values are display strings with a unit suffix, not numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealItem {
    pub name: String,
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
}

impl MealItem {
    pub fn new(name: &str, calories: u32, protein: &str, carbs: &str, fats: &str) -> Self {
        Self {
            name: name.to_string(),
            calories,
            protein: protein.to_string(),
            carbs: carbs.to_string(),
            fats: fats.to_string(),
        }
    }
}

/// A breach of the invariant that rendered plans have no empty days or slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeViolation {
    EmptyWorkoutDay { day: String },
    EmptyMealSlot { slot: MealSlot },
}

impl fmt::Display for ShapeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeViolation::EmptyWorkoutDay { day } => {
                write!(f, "{day} has no exercises but is not a rest day")
            }
            ShapeViolation::EmptyMealSlot { slot } => write!(f, "{slot} has no meal items"),
        }
    }
}
