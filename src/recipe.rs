use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_servings() -> u32 {
    1
}

/// One structured ingredient line, used for serving-size rescaling.
/// Free-text quantities ("a pinch", "to taste") carry no numeric amount.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: Option<f32>,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    #[serde(alias = "title")]
    pub id: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Optional per-ingredient quantities; empty when the source only had free text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measured_ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// The text blob the similarity index is built from: every ingredient
    /// line followed by every instruction line.
    pub fn index_text(&self) -> String {
        let mut text = self.ingredients.join(" ");
        text.push(' ');
        text.push_str(&self.instructions.join(" "));
        text
    }
}

/// Parses a recipe corpus from its JSON array text.
pub fn parse_recipe_corpus(json: &str) -> Result<Vec<Recipe>> {
    let recipes: Vec<Recipe> =
        serde_json::from_str(json).with_context(|| "Failed to parse recipe corpus JSON")?;
    Ok(recipes)
}

/// Loads a recipe corpus from a JSON array file.
pub fn load_recipe_corpus(path: &Path) -> Result<Vec<Recipe>> {
    if !path.exists() {
        return Err(anyhow::anyhow!("Recipe corpus file not found at: {:?}", path));
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe corpus file at {:?}", path))?;
    parse_recipe_corpus(&contents)
        .with_context(|| format!("Failed to load recipe corpus from {:?}", path))
}
