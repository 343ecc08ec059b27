use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::nutrition::reference::Nutrient;

/// Per-unit-quantity nutrient amounts for one food. Reference data: built
/// once at load time, read-only afterwards. Amounts are non-negative; the
/// loaders enforce that.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct NutrientProfile {
    amounts: HashMap<Nutrient, f32>,
}

impl NutrientProfile {
    pub fn new() -> NutrientProfile {
        NutrientProfile::default()
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Nutrient, f32)>) -> NutrientProfile {
        NutrientProfile {
            amounts: pairs.into_iter().collect(),
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, amount: f32) {
        self.amounts.insert(nutrient, amount);
    }

    /// Amount of `nutrient` per unit quantity; 0.0 when the profile does
    /// not carry that nutrient.
    pub fn amount(&self, nutrient: Nutrient) -> f32 {
        self.amounts.get(&nutrient).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

/// The loaded food set: food identifier -> nutrient profile. Supplied in
/// bulk by an external loader (see `data_loader`); never mutated after that.
#[derive(Debug, Clone, Default)]
pub struct FoodNutrientTable {
    foods: HashMap<String, NutrientProfile>,
}

impl FoodNutrientTable {
    pub fn new() -> FoodNutrientTable {
        FoodNutrientTable::default()
    }

    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, NutrientProfile)>,
    ) -> FoodNutrientTable {
        FoodNutrientTable {
            foods: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, food_id: String, profile: NutrientProfile) {
        self.foods.insert(food_id, profile);
    }

    pub fn get(&self, food_id: &str) -> Option<&NutrientProfile> {
        self.foods.get(food_id)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
