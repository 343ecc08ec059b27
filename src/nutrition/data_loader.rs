use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;

use crate::nutrition::aggregator::ConsumedFoodRecord;
use crate::nutrition::food_table::{FoodNutrientTable, NutrientProfile};
use crate::nutrition::reference::Nutrient;

const FOOD_ID_COL: &str = "food_id";

/// Parses a consumption log from its JSON array text:
/// `[{"food_id": "milk", "quantity": 2.0, "date": "2024-03-01"}, ...]`.
pub fn parse_consumption_log(json: &str) -> Result<Vec<ConsumedFoodRecord>> {
    let records: Vec<ConsumedFoodRecord> =
        serde_json::from_str(json).with_context(|| "Failed to parse consumption log JSON")?;
    Ok(records)
}

fn parse_optional_f32(s: &str) -> Option<f32> {
    s.trim().parse::<f32>().ok()
}

/// Loads the food nutrient reference table from a CSV file.
///
/// The header must contain a `food_id` column; every other column name must
/// be a known nutrient key ("vitamin_a", "calcium", ...). An unrecognized
/// header is an error so identifier typos surface at load time instead of
/// silently dropping a column. Blank or non-numeric cells mean the nutrient
/// is absent for that food; negative amounts are rejected.
pub fn load_food_nutrient_table(csv_path: &Path) -> Result<FoodNutrientTable> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!(
            "Food nutrient CSV file not found at: {:?}",
            csv_path
        ));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open food nutrient CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let food_id_idx = headers
        .iter()
        .position(|h| h == FOOD_ID_COL)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found", FOOD_ID_COL))?;

    let mut nutrient_columns: Vec<(usize, Nutrient)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        if idx == food_id_idx {
            continue;
        }
        let nutrient = Nutrient::from_key(header.trim())
            .ok_or_else(|| anyhow::anyhow!("Unrecognized nutrient column '{}'", header))?;
        nutrient_columns.push((idx, nutrient));
    }

    let mut table = FoodNutrientTable::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("Failed to read record at row index {}", row_index))?;

        let food_id = record
            .get(food_id_idx)
            .ok_or_else(|| anyhow::anyhow!("Missing food_id at row {}", row_index))?
            .trim()
            .to_string();
        if food_id.is_empty() {
            // Skip rows with an empty identifier.
            continue;
        }

        let mut profile = NutrientProfile::new();
        for &(idx, nutrient) in &nutrient_columns {
            if let Some(amount) = record.get(idx).and_then(parse_optional_f32) {
                if amount < 0.0 {
                    return Err(anyhow::anyhow!(
                        "Negative amount {} for nutrient '{}' in food '{}' (row {})",
                        amount,
                        nutrient,
                        food_id,
                        row_index
                    ));
                }
                profile.set(nutrient, amount);
            }
        }
        table.insert(food_id, profile);
    }

    if table.is_empty() {
        return Err(anyhow::anyhow!(
            "No food nutrient data loaded from {:?}",
            csv_path
        ));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv_file() -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "food_id,calcium,iron,vitamin_c,fiber")?;
        writeln!(file, "milk,120,0.0,0,0")?;
        writeln!(file, "spinach,99,2.7,28.1,2.2")?;
        writeln!(file, "lentils,,6.6,1.5,7.9")?; // Missing calcium
        writeln!(file, ",1,1,1,1")?; // Empty food_id
        writeln!(file, "mystery,text,1.0,2.0,3.0")?; // Non-numeric calcium
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_food_nutrient_table_success() -> Result<()> {
        let file = create_test_csv_file()?;
        let table = load_food_nutrient_table(file.path())?;

        // "milk", "spinach", "lentils", "mystery" (empty food_id row skipped)
        assert_eq!(table.len(), 4);

        let spinach = table.get("spinach").unwrap();
        assert_eq!(spinach.amount(Nutrient::Calcium), 99.0);
        assert_eq!(spinach.amount(Nutrient::Iron), 2.7);
        assert_eq!(spinach.amount(Nutrient::Fiber), 2.2);

        // Missing and non-numeric cells both resolve to "absent", i.e. 0.0.
        let lentils = table.get("lentils").unwrap();
        assert_eq!(lentils.amount(Nutrient::Calcium), 0.0);
        assert_eq!(lentils.amount(Nutrient::Iron), 6.6);

        let mystery = table.get("mystery").unwrap();
        assert_eq!(mystery.amount(Nutrient::Calcium), 0.0);
        assert_eq!(mystery.amount(Nutrient::Iron), 1.0);
        Ok(())
    }

    #[test]
    fn test_load_food_nutrient_table_unrecognized_column() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "food_id,calcium,calcum")?; // Typoed header
        writeln!(file, "milk,120,1")?;
        file.flush()?;

        let result = load_food_nutrient_table(file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unrecognized nutrient column 'calcum'"));
        Ok(())
    }

    #[test]
    fn test_load_food_nutrient_table_missing_food_id_column() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "name,calcium")?;
        writeln!(file, "milk,120")?;
        file.flush()?;

        let result = load_food_nutrient_table(file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Column 'food_id' not found"));
        Ok(())
    }

    #[test]
    fn test_load_food_nutrient_table_negative_amount() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "food_id,calcium")?;
        writeln!(file, "milk,-5")?;
        file.flush()?;

        let result = load_food_nutrient_table(file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Negative amount"));
        Ok(())
    }

    #[test]
    fn test_load_food_nutrient_table_empty_file_with_headers() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "food_id,calcium")?;
        file.flush()?;

        let result = load_food_nutrient_table(file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No food nutrient data loaded"));
        Ok(())
    }

    #[test]
    fn test_parse_consumption_log() -> Result<()> {
        let records = parse_consumption_log(
            r#"[
                {"food_id": "milk", "quantity": 2.0, "date": "2024-03-01"},
                {"food_id": "spinach", "quantity": 1.5, "date": "2024-03-02"}
            ]"#,
        )?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].food_id, "milk");
        assert_eq!(records[0].quantity, 2.0);
        assert_eq!(
            records[1].date,
            chrono::NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_parse_consumption_log_rejects_bad_date() {
        let result = parse_consumption_log(
            r#"[{"food_id": "milk", "quantity": 1.0, "date": "not-a-date"}]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_food_nutrient_table_file_not_found() {
        let path = Path::new("this_file_does_not_exist.csv");
        let result = load_food_nutrient_table(path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Food nutrient CSV file not found"));
    }
}
