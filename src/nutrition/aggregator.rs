use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::NutritionError;
use crate::nutrition::food_table::FoodNutrientTable;
use crate::nutrition::reference::{Nutrient, DEFICIENCY_THRESHOLD_PERCENT, TRACKED_NUTRIENTS};

/// One user log entry: a food, how much of it, and when. Immutable once
/// recorded; only ever aggregated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConsumedFoodRecord {
    pub food_id: String,
    pub quantity: f32,
    pub date: NaiveDate,
}

/// Inclusive date range used to restrict an analysis to part of the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> TimeWindow {
        TimeWindow { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Aggregated intake for one analysis call. Every tracked nutrient is
/// present in all three maps, including zero-intake ones. Produced fresh
/// per call; nothing is retained between calls.
#[derive(Debug, Serialize, Clone, Default)]
pub struct AnalysisResult {
    pub nutrient_intake: HashMap<Nutrient, f32>,
    pub nutrient_percentages: HashMap<Nutrient, f32>,
    pub potential_deficiencies: HashMap<Nutrient, bool>,
    /// Food ids that did not resolve in the loaded food table, in first
    /// occurrence order. Partial data is normal, so these are reported
    /// rather than treated as an error.
    pub unresolved_foods: Vec<String>,
}

/// Sums nutrient intake over `records`, computes percentage of the daily
/// recommended value per nutrient, and flags potential deficiencies
/// (below 80% of the recommendation).
///
/// `window` restricts the analysis to records whose date falls inside it;
/// `None` analyzes every provided record.
pub fn analyze_consumption(
    table: &FoodNutrientTable,
    records: &[ConsumedFoodRecord],
    window: Option<TimeWindow>,
) -> Result<AnalysisResult, NutritionError> {
    if table.is_empty() {
        return Err(NutritionError::NoFoodData);
    }

    let mut nutrient_intake: HashMap<Nutrient, f32> =
        TRACKED_NUTRIENTS.iter().map(|&n| (n, 0.0)).collect();
    let mut unresolved_foods: Vec<String> = Vec::new();

    for record in records {
        if let Some(window) = window {
            if !window.contains(record.date) {
                continue;
            }
        }
        match table.get(&record.food_id) {
            Some(profile) => {
                for &nutrient in &TRACKED_NUTRIENTS {
                    let contribution = record.quantity * profile.amount(nutrient);
                    if let Some(total) = nutrient_intake.get_mut(&nutrient) {
                        *total += contribution;
                    }
                }
            }
            None => {
                if !unresolved_foods.contains(&record.food_id) {
                    unresolved_foods.push(record.food_id.clone());
                }
            }
        }
    }

    let mut nutrient_percentages: HashMap<Nutrient, f32> = HashMap::new();
    let mut potential_deficiencies: HashMap<Nutrient, bool> = HashMap::new();
    for &nutrient in &TRACKED_NUTRIENTS {
        let intake = nutrient_intake.get(&nutrient).copied().unwrap_or(0.0);
        // Every tracked nutrient has a recommendation; unwrap_or keeps the
        // arithmetic total even if the table ever grows an entry without one.
        let recommended = nutrient.daily_recommended().unwrap_or(f32::INFINITY);
        let percentage = (intake / recommended) * 100.0;
        nutrient_percentages.insert(nutrient, percentage);
        potential_deficiencies.insert(nutrient, percentage < DEFICIENCY_THRESHOLD_PERCENT);
    }

    Ok(AnalysisResult {
        nutrient_intake,
        nutrient_percentages,
        potential_deficiencies,
        unresolved_foods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::food_table::NutrientProfile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(food_id: &str, quantity: f32, day: u32) -> ConsumedFoodRecord {
        ConsumedFoodRecord {
            food_id: food_id.to_string(),
            quantity,
            date: date(2024, 3, day),
        }
    }

    fn test_table() -> FoodNutrientTable {
        FoodNutrientTable::from_entries([
            (
                "milk".to_string(),
                NutrientProfile::from_pairs([(Nutrient::Calcium, 250.0)]),
            ),
            (
                "spinach".to_string(),
                NutrientProfile::from_pairs([
                    (Nutrient::Calcium, 99.0),
                    (Nutrient::Iron, 2.7),
                ]),
            ),
        ])
    }

    #[test]
    fn test_empty_food_table_fails() {
        let table = FoodNutrientTable::new();
        let result = analyze_consumption(&table, &[record("milk", 1.0, 1)], None);
        assert_eq!(result.unwrap_err(), NutritionError::NoFoodData);
    }

    #[test]
    fn test_intake_sums_quantity_times_profile() {
        let table = test_table();
        let records = vec![record("milk", 2.0, 1), record("spinach", 1.5, 2)];
        let analysis = analyze_consumption(&table, &records, None).unwrap();

        // 2 * 250 + 1.5 * 99 = 648.5
        let calcium = analysis.nutrient_intake[&Nutrient::Calcium];
        assert!((calcium - 648.5).abs() < 1e-4, "calcium was {}", calcium);
        let iron = analysis.nutrient_intake[&Nutrient::Iron];
        assert!((iron - 4.05).abs() < 1e-4);
        assert!(analysis.unresolved_foods.is_empty());
    }

    #[test]
    fn test_percentage_and_deficiency_flag() {
        // Recommended calcium is 1000; an intake of 500 is 50% and deficient.
        let table = FoodNutrientTable::from_entries([(
            "milk".to_string(),
            NutrientProfile::from_pairs([(Nutrient::Calcium, 250.0)]),
        )]);
        let analysis =
            analyze_consumption(&table, &[record("milk", 2.0, 1)], None).unwrap();
        assert_eq!(analysis.nutrient_percentages[&Nutrient::Calcium], 50.0);
        assert!(analysis.potential_deficiencies[&Nutrient::Calcium]);
    }

    #[test]
    fn test_meeting_recommendation_clears_deficiency_flag() {
        let table = FoodNutrientTable::from_entries([
            (
                "food_a".to_string(),
                NutrientProfile::from_pairs([(Nutrient::Iron, 10.0)]),
            ),
            (
                "food_b".to_string(),
                NutrientProfile::from_pairs([(Nutrient::Iron, 5.0)]),
            ),
        ]);
        // Recommended iron is 18: 1 * 10 + 2 * 5 = 20 -> 111.1%, not deficient.
        let records = vec![record("food_a", 1.0, 1), record("food_b", 2.0, 1)];
        let analysis = analyze_consumption(&table, &records, None).unwrap();
        assert!((analysis.nutrient_intake[&Nutrient::Iron] - 20.0).abs() < 1e-5);
        assert!(!analysis.potential_deficiencies[&Nutrient::Iron]);
    }

    #[test]
    fn test_exactly_meeting_recommendation_is_not_deficient() {
        // Calcium recommendation is 1000: an intake of exactly 1000 reads
        // as 100.0% and clears the flag.
        let table = FoodNutrientTable::from_entries([(
            "fortified_milk".to_string(),
            NutrientProfile::from_pairs([(Nutrient::Calcium, 500.0)]),
        )]);
        let analysis =
            analyze_consumption(&table, &[record("fortified_milk", 2.0, 1)], None).unwrap();
        assert_eq!(analysis.nutrient_percentages[&Nutrient::Calcium], 100.0);
        assert!(!analysis.potential_deficiencies[&Nutrient::Calcium]);
    }

    #[test]
    fn test_empty_records_yield_all_zero_and_all_deficient() {
        let table = test_table();
        let analysis = analyze_consumption(&table, &[], None).unwrap();
        assert_eq!(analysis.nutrient_intake.len(), TRACKED_NUTRIENTS.len());
        for &nutrient in &TRACKED_NUTRIENTS {
            assert_eq!(analysis.nutrient_intake[&nutrient], 0.0);
            assert_eq!(analysis.nutrient_percentages[&nutrient], 0.0);
            assert!(analysis.potential_deficiencies[&nutrient]);
        }
    }

    #[test]
    fn test_unresolved_foods_are_reported_not_dropped() {
        let table = test_table();
        let records = vec![
            record("milk", 1.0, 1),
            record("dragonfruit", 1.0, 1),
            record("dragonfruit", 2.0, 2),
            record("ambrosia", 1.0, 3),
        ];
        let analysis = analyze_consumption(&table, &records, None).unwrap();
        assert_eq!(
            analysis.unresolved_foods,
            vec!["dragonfruit".to_string(), "ambrosia".to_string()]
        );
        // The resolved record still contributed.
        assert_eq!(analysis.nutrient_intake[&Nutrient::Calcium], 250.0);
    }

    #[test]
    fn test_time_window_filters_records() {
        let table = test_table();
        let records = vec![
            record("milk", 1.0, 1),
            record("milk", 1.0, 10),
            record("milk", 1.0, 20),
        ];
        let window = TimeWindow::new(date(2024, 3, 5), date(2024, 3, 15));
        let analysis = analyze_consumption(&table, &records, Some(window)).unwrap();
        // Only the March 10 record falls inside the window.
        assert_eq!(analysis.nutrient_intake[&Nutrient::Calcium], 250.0);

        let unwindowed = analyze_consumption(&table, &records, None).unwrap();
        assert_eq!(unwindowed.nutrient_intake[&Nutrient::Calcium], 750.0);
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let table = test_table();
        let records = vec![record("milk", 1.0, 5), record("milk", 1.0, 15)];
        let window = TimeWindow::new(date(2024, 3, 5), date(2024, 3, 15));
        let analysis = analyze_consumption(&table, &records, Some(window)).unwrap();
        assert_eq!(analysis.nutrient_intake[&Nutrient::Calcium], 500.0);
    }
}
