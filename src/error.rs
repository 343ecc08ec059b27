use std::error::Error;
use std::fmt;

/// Errors from the recipe suggestion pipeline (corpus index, ranker, scaler).
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestError {
    /// `load` was called with zero recipes.
    EmptyCorpus,
    /// A query was attempted before any corpus was loaded.
    IndexNotLoaded,
    /// Serving counts must be positive on both sides of a rescale.
    InvalidServings {
        original_servings: u32,
        target_servings: u32,
    },
}

impl fmt::Display for SuggestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestError::EmptyCorpus => {
                write!(f, "Cannot build a similarity index from an empty recipe corpus")
            }
            SuggestError::IndexNotLoaded => {
                write!(f, "No recipe corpus loaded. Load recipes before querying.")
            }
            SuggestError::InvalidServings {
                original_servings,
                target_servings,
            } => write!(
                f,
                "Serving counts must be positive: original {}, target {}",
                original_servings, target_servings
            ),
        }
    }
}

impl Error for SuggestError {}

/// Errors from the nutrition pipeline (aggregator, trend projector).
#[derive(Debug, Clone, PartialEq)]
pub enum NutritionError {
    /// The food nutrient table was empty at call time.
    NoFoodData,
    /// A projection was requested over an empty consumption history.
    EmptyHistory,
}

impl fmt::Display for NutritionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutritionError::NoFoodData => {
                write!(f, "Food nutrient table not loaded. Load food data first.")
            }
            NutritionError::EmptyHistory => {
                write!(f, "Consumption history is empty, nothing to project from")
            }
        }
    }
}

impl Error for NutritionError {}
