use crate::error::SuggestError;
use crate::recipe::Recipe;

/// Returns a copy of `recipe` rescaled to `target_servings`. Every numeric
/// ingredient quantity is multiplied by `target / original`; free-text
/// quantities (no numeric amount) pass through unchanged. The input recipe
/// is not mutated.
pub fn scale_recipe(recipe: &Recipe, target_servings: u32) -> Result<Recipe, SuggestError> {
    if recipe.servings == 0 || target_servings == 0 {
        return Err(SuggestError::InvalidServings {
            original_servings: recipe.servings,
            target_servings,
        });
    }

    let scaling_factor = target_servings as f32 / recipe.servings as f32;

    let mut adjusted = recipe.clone();
    adjusted.servings = target_servings;
    for ingredient in &mut adjusted.measured_ingredients {
        if let Some(quantity) = ingredient.quantity {
            ingredient.quantity = Some(quantity * scaling_factor);
        }
    }
    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::RecipeIngredient;

    fn pancake_recipe() -> Recipe {
        Recipe {
            id: "pancakes".to_string(),
            ingredients: vec!["200 g flour".to_string(), "2 eggs".to_string()],
            instructions: vec!["Mix.".to_string(), "Fry.".to_string()],
            servings: 2,
            measured_ingredients: vec![
                RecipeIngredient {
                    name: "flour".to_string(),
                    quantity: Some(200.0),
                    unit: "g".to_string(),
                },
                RecipeIngredient {
                    name: "egg".to_string(),
                    quantity: Some(2.0),
                    unit: "large".to_string(),
                },
                RecipeIngredient {
                    name: "salt".to_string(),
                    quantity: None,
                    unit: String::new(), // "to taste"
                },
            ],
        }
    }

    #[test]
    fn test_scale_to_same_servings_is_identity() {
        let recipe = pancake_recipe();
        let scaled = scale_recipe(&recipe, recipe.servings).unwrap();
        assert_eq!(scaled, recipe);
    }

    #[test]
    fn test_scale_to_double_servings_doubles_quantities() {
        let recipe = pancake_recipe();
        let scaled = scale_recipe(&recipe, 4).unwrap();
        assert_eq!(scaled.servings, 4);
        assert_eq!(scaled.measured_ingredients[0].quantity, Some(400.0));
        assert_eq!(scaled.measured_ingredients[1].quantity, Some(4.0));
        // Non-numeric quantity passes through unchanged.
        assert_eq!(scaled.measured_ingredients[2].quantity, None);
        // The original is untouched.
        assert_eq!(recipe.measured_ingredients[0].quantity, Some(200.0));
        assert_eq!(recipe.servings, 2);
    }

    #[test]
    fn test_scale_down_halves_quantities() {
        let recipe = pancake_recipe();
        let scaled = scale_recipe(&recipe, 1).unwrap();
        assert_eq!(scaled.measured_ingredients[0].quantity, Some(100.0));
        assert_eq!(scaled.measured_ingredients[1].quantity, Some(1.0));
    }

    #[test]
    fn test_zero_target_servings_fails() {
        let recipe = pancake_recipe();
        let err = scale_recipe(&recipe, 0).unwrap_err();
        assert_eq!(
            err,
            SuggestError::InvalidServings {
                original_servings: 2,
                target_servings: 0,
            }
        );
    }

    #[test]
    fn test_zero_original_servings_fails() {
        let mut recipe = pancake_recipe();
        recipe.servings = 0;
        let err = scale_recipe(&recipe, 3).unwrap_err();
        assert!(matches!(err, SuggestError::InvalidServings { .. }));
    }
}
