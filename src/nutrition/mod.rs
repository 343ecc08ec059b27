pub mod advice;
pub mod aggregator;
pub mod data_loader;
pub mod food_table;
pub mod meal_commentary;
pub mod reference;
pub mod trend;

pub use advice::generate_recommendations;
pub use aggregator::{analyze_consumption, AnalysisResult, ConsumedFoodRecord, TimeWindow};
pub use data_loader::{load_food_nutrient_table, parse_consumption_log};
pub use food_table::{FoodNutrientTable, NutrientProfile};
pub use meal_commentary::{analyze_meal, macro_totals, meal_commentary, MacroTotals, MealAnalysis};
pub use reference::{Nutrient, DEFICIENCY_THRESHOLD_PERCENT, TRACKED_NUTRIENTS};
pub use trend::{
    daily_intake_history, project_deficiencies, DailyIntakeHistory, DailyNutrientRecord,
    DEFAULT_FORECAST_DAYS,
};
