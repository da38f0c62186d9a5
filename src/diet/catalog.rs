use crate::plan::{MealItem, MealSlot};
use crate::profile::DietType;

type CatalogRow = (&'static str, u32, &'static str, &'static str, &'static str);

const VEGETARIAN_BREAKFAST: &[CatalogRow] = &[
    ("Oatmeal with Fruits & Nuts", 320, "12g", "50g", "8g"),
    ("Paneer Sandwich", 280, "18g", "30g", "10g"),
];
const VEGETARIAN_LUNCH: &[CatalogRow] = &[
    ("Dal Tadka with Brown Rice", 420, "20g", "60g", "8g"),
    ("Vegetable Curry with Roti", 350, "10g", "45g", "7g"),
];
const VEGETARIAN_SNACK: &[CatalogRow] = &[
    ("Mixed Nuts", 200, "6g", "12g", "14g"),
    ("Greek Yogurt with Berries", 150, "8g", "18g", "3g"),
];
const VEGETARIAN_DINNER: &[CatalogRow] = &[
    ("Tofu Stir Fry", 400, "22g", "35g", "12g"),
    ("Lentil Soup with Quinoa", 380, "20g", "55g", "8g"),
];

const VEGAN_BREAKFAST: &[CatalogRow] = &[
    ("Smoothie with Almond Milk", 280, "10g", "40g", "8g"),
    ("Tofu Scramble with Veggies", 300, "20g", "20g", "10g"),
];
const VEGAN_LUNCH: &[CatalogRow] = &[
    ("Chickpea Bowl", 420, "18g", "60g", "10g"),
    ("Veggie Burrito", 400, "16g", "55g", "9g"),
];
const VEGAN_SNACK: &[CatalogRow] = &[
    ("Trail Mix", 200, "8g", "20g", "10g"),
    ("Hummus with Carrot Sticks", 180, "6g", "15g", "8g"),
];
const VEGAN_DINNER: &[CatalogRow] = &[
    ("Lentil Dal with Brown Rice", 420, "20g", "60g", "8g"),
    ("Quinoa with Roasted Veggies", 390, "18g", "55g", "9g"),
];

fn rows_for(slot: &MealSlot, diet: DietType) -> &'static [CatalogRow] {
    match (diet, slot) {
        (DietType::Vegan, MealSlot::Breakfast) => VEGAN_BREAKFAST,
        (DietType::Vegan, MealSlot::Lunch) => VEGAN_LUNCH,
        (DietType::Vegan, MealSlot::Snack) => VEGAN_SNACK,
        (DietType::Vegan, MealSlot::Dinner) => VEGAN_DINNER,
        (_, MealSlot::Breakfast) => VEGETARIAN_BREAKFAST,
        (_, MealSlot::Lunch) => VEGETARIAN_LUNCH,
        (_, MealSlot::Snack) => VEGETARIAN_SNACK,
        (_, MealSlot::Dinner) => VEGETARIAN_DINNER,
        (_, MealSlot::Other(_)) => &[],
    }
}

/// Safe substitutes for a meal slot. Vegan plans draw from the vegan table,
/// every other diet from the vegetarian one. Slots outside the four standard
/// ones have no substitutes.
pub fn replacement_meals(slot: &MealSlot, diet: DietType) -> Vec<MealItem> {
    rows_for(slot, diet)
        .iter()
        .map(|&(name, calories, protein, carbs, fats)| {
            MealItem::new(name, calories, protein, carbs, fats)
        })
        .collect()
}
