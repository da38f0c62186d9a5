use crate::profile::DietType;

/// Allow/forbid guidance given to the model for one diet type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DietGuideline {
    pub description: &'static str,
    pub forbidden: &'static str,
    pub allowed: &'static str,
    pub examples: &'static str,
}

const VEG: DietGuideline = DietGuideline {
    description: "STRICTLY VEGETARIAN",
    forbidden: "ABSOLUTELY NO meat, chicken, beef, pork, lamb, fish, seafood, or any animal flesh",
    allowed: "ONLY: Vegetables, fruits, grains, legumes, beans, lentils, dairy (milk, yogurt, cheese, paneer), eggs, nuts, seeds, tofu, tempeh",
    examples: "Paneer curry, Dal, Vegetable stir-fry, Egg dishes, Greek yogurt, Chickpeas, Tofu scramble, Lentil soup",
};

const NON_VEG: DietGuideline = DietGuideline {
    description: "Non-vegetarian",
    forbidden: "None",
    allowed: "All food types including meat, poultry, fish, seafood, eggs, dairy, and plant-based foods",
    examples: "Chicken breast, Salmon, Eggs, Beef, Turkey, Shrimp",
};

const VEGAN: DietGuideline = DietGuideline {
    description: "STRICTLY VEGAN",
    forbidden: "ABSOLUTELY NO animal products: meat, chicken, fish, seafood, dairy, eggs, honey, or any animal-derived ingredients",
    allowed: "ONLY: Plant-based foods - vegetables, fruits, grains, legumes, beans, lentils, nuts, seeds, tofu, tempeh, plant milk, nutritional yeast",
    examples: "Tofu scramble, Chickpea curry, Lentil soup, Quinoa bowl, Almond milk smoothie, Bean burrito, Vegetable stir-fry with tempeh",
};

const KETO: DietGuideline = DietGuideline {
    description: "KETOGENIC - Very Low Carb",
    forbidden: "NO grains, bread, rice, pasta, potatoes, sugar, most fruits, high-carb vegetables",
    allowed: "Meat, fish, eggs, cheese, butter, oils, nuts, seeds, low-carb vegetables, avocado",
    examples: "Grilled chicken with broccoli, Salmon with asparagus, Egg omelette with cheese, Steak with cauliflower",
};

pub fn guideline_for(diet: DietType) -> &'static DietGuideline {
    match diet {
        DietType::Veg => &VEG,
        DietType::NonVeg => &NON_VEG,
        DietType::Vegan => &VEGAN,
        DietType::Keto => &KETO,
    }
}
