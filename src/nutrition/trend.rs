use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::NutritionError;
use crate::nutrition::aggregator::ConsumedFoodRecord;
use crate::nutrition::food_table::FoodNutrientTable;
use crate::nutrition::reference::{Nutrient, TRACKED_NUTRIENTS};

pub const DEFAULT_FORECAST_DAYS: u32 = 30;

/// One row of consumption history: nutrient amounts attributed to a date.
/// A nutrient absent from `amounts` means "no observation", which is not
/// the same as an explicit 0.0.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyNutrientRecord {
    pub date: NaiveDate,
    pub amounts: HashMap<Nutrient, f32>,
}

/// Consumption log folded into one summed row per date, sorted by date.
#[derive(Debug, Clone, Default)]
pub struct DailyIntakeHistory {
    pub rows: Vec<DailyNutrientRecord>,
    /// Food ids that did not resolve in the food table, first occurrence
    /// order. Their records contribute nothing to the rows.
    pub unresolved_foods: Vec<String>,
}

/// Builds per-date intake rows from raw consumption records, resolving
/// each food through the loaded table. Every tracked nutrient appears in
/// every row (a day you logged food but none of some nutrient is a real
/// zero observation, and should drag the projection down).
pub fn daily_intake_history(
    table: &FoodNutrientTable,
    records: &[ConsumedFoodRecord],
) -> Result<DailyIntakeHistory, NutritionError> {
    if table.is_empty() {
        return Err(NutritionError::NoFoodData);
    }

    let mut per_date: HashMap<NaiveDate, HashMap<Nutrient, f32>> = HashMap::new();
    let mut unresolved_foods: Vec<String> = Vec::new();

    for record in records {
        match table.get(&record.food_id) {
            Some(profile) => {
                let amounts = per_date
                    .entry(record.date)
                    .or_insert_with(|| TRACKED_NUTRIENTS.iter().map(|&n| (n, 0.0)).collect());
                for &nutrient in &TRACKED_NUTRIENTS {
                    if let Some(total) = amounts.get_mut(&nutrient) {
                        *total += record.quantity * profile.amount(nutrient);
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

    let mut rows: Vec<DailyNutrientRecord> = per_date
        .into_iter()
        .map(|(date, amounts)| DailyNutrientRecord { date, amounts })
        .collect();
    rows.sort_by_key(|row| row.date);

    Ok(DailyIntakeHistory {
        rows,
        unresolved_foods,
    })
}

/// Flags nutrients at risk of deficiency over the next `forecast_days`.
///
/// This is deliberately a mean-rate linear extrapolation, not a time-series
/// model: rows are grouped by date, each nutrient is averaged within a date
/// and then across dates, and that daily mean times `forecast_days` is
/// compared against the daily recommended value. A projected level below
/// the recommendation flags the nutrient. It is a coarse early-warning
/// signal, not a forecast.
///
/// Only nutrients observed somewhere in the history appear in the result.
pub fn project_deficiencies(
    history: &[DailyNutrientRecord],
    forecast_days: u32,
) -> Result<HashMap<Nutrient, bool>, NutritionError> {
    if history.is_empty() {
        return Err(NutritionError::EmptyHistory);
    }

    // Mean per nutrient within each date, over the rows carrying it.
    let mut date_groups: HashMap<NaiveDate, Vec<&DailyNutrientRecord>> = HashMap::new();
    for row in history {
        date_groups.entry(row.date).or_default().push(row);
    }

    let mut daily_means: HashMap<Nutrient, Vec<f32>> = HashMap::new();
    for rows in date_groups.values() {
        for &nutrient in &TRACKED_NUTRIENTS {
            let observations: Vec<f32> = rows
                .iter()
                .filter_map(|row| row.amounts.get(&nutrient).copied())
                .collect();
            if !observations.is_empty() {
                let mean = observations.iter().sum::<f32>() / observations.len() as f32;
                daily_means.entry(nutrient).or_default().push(mean);
            }
        }
    }

    let mut projected_deficiencies: HashMap<Nutrient, bool> = HashMap::new();
    for (nutrient, means) in daily_means {
        let recommended = match nutrient.daily_recommended() {
            Some(value) => value,
            None => continue,
        };
        let mean_daily_level = means.iter().sum::<f32>() / means.len() as f32;
        let projected_level = mean_daily_level * forecast_days as f32;
        projected_deficiencies.insert(nutrient, projected_level < recommended);
    }

    Ok(projected_deficiencies)
}
