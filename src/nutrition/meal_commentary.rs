use serde::{Deserialize, Serialize};

/// Macronutrient totals (grams) for a quick meal check. Separate from the
/// micronutrient pipeline: this works over a small built-in staple table
/// and needs no loaded reference data.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MacroTotals {
    pub protein_g: f32,
    pub carbohydrate_g: f32,
    pub fat_g: f32,
}

#[derive(Debug, Serialize, Clone)]
pub struct MealAnalysis {
    pub totals: MacroTotals,
    pub commentary: String,
}

// Typical-portion macros (protein, carbohydrate, fat) for common staples.
const STAPLE_MACROS: &[(&str, f32, f32, f32)] = &[
    ("egg", 6.0, 1.0, 5.0),
    ("tomato", 1.0, 3.0, 0.0),
    ("chicken", 27.0, 0.0, 3.0),
    ("rice", 2.0, 28.0, 0.0),
    ("pasta", 5.0, 30.0, 1.0),
    ("olive oil", 0.0, 0.0, 14.0),
    ("cheese", 7.0, 1.0, 6.0),
    ("bread", 3.0, 15.0, 1.0),
    ("yogurt", 4.0, 4.0, 3.0),
    ("potato", 2.0, 17.0, 0.0),
];

const LOW_PROTEIN_G: f32 = 15.0;
const HIGH_CARBOHYDRATE_G: f32 = 40.0;
const HIGH_FAT_G: f32 = 15.0;

/// Sums staple-table macros over the given ingredient names. Lookups are
/// case-insensitive and trimmed; names outside the staple table contribute
/// nothing.
pub fn macro_totals(ingredients: &[String]) -> MacroTotals {
    let mut totals = MacroTotals::default();
    for ingredient in ingredients {
        let name = ingredient.trim().to_lowercase();
        if let Some(&(_, protein, carbohydrate, fat)) =
            STAPLE_MACROS.iter().find(|&&(staple, ..)| staple == name)
        {
            totals.protein_g += protein;
            totals.carbohydrate_g += carbohydrate;
            totals.fat_g += fat;
        }
    }
    totals
}

/// Rule-based commentary on a meal's macro balance. Rules fire in a fixed
/// order; when none fires the meal is called balanced.
pub fn meal_commentary(totals: &MacroTotals) -> String {
    let mut comments: Vec<&str> = Vec::new();
    if totals.protein_g < LOW_PROTEIN_G {
        comments.push("Protein is on the low side; eggs or chicken would round this out.");
    }
    if totals.carbohydrate_g > HIGH_CARBOHYDRATE_G {
        comments.push("Carbohydrates run high; swapping some in for vegetables would balance the meal.");
    }
    if totals.fat_g > HIGH_FAT_G {
        comments.push("Fat content is high; consider easing up on oil and fatty additions.");
    }
    if comments.is_empty() {
        comments.push("The nutritional balance looks good. Enjoy your meal!");
    }
    comments.join(" ")
}

/// Analyzes a comma-separated ingredient list: "egg, rice, cheese".
pub fn analyze_meal(ingredient_list: &str) -> MealAnalysis {
    let ingredients: Vec<String> = ingredient_list
        .split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect();
    let totals = macro_totals(&ingredients);
    let commentary = meal_commentary(&totals);
    MealAnalysis { totals, commentary }
}
