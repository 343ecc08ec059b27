use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use tokio::fs;

use pantry_core::cli::{parse_args, Command};
use pantry_core::nutrition::{
    analyze_consumption, analyze_meal, daily_intake_history, generate_recommendations,
    load_food_nutrient_table, parse_consumption_log, project_deficiencies, ConsumedFoodRecord,
    FoodNutrientTable, Nutrient, TimeWindow, TRACKED_NUTRIENTS,
};
use pantry_core::recipe::{parse_recipe_corpus, Recipe};
use pantry_core::suggest::{scale_recipe, suggest_recipes, RecipeCorpusIndex};

async fn read_recipes(recipes_file: &str) -> Result<Vec<Recipe>> {
    println!("Reading recipe corpus from '{}'...", recipes_file);
    let contents = fs::read_to_string(recipes_file)
        .await
        .with_context(|| format!("Failed to read recipe corpus file '{}'", recipes_file))?;
    let recipes = parse_recipe_corpus(&contents)?;
    println!(" > {} recipes loaded.", recipes.len());
    Ok(recipes)
}

async fn read_consumption_log(log_file: &str) -> Result<Vec<ConsumedFoodRecord>> {
    println!("Reading consumption log from '{}'...", log_file);
    let contents = fs::read_to_string(log_file)
        .await
        .with_context(|| format!("Failed to read consumption log file '{}'", log_file))?;
    let records = parse_consumption_log(&contents)?;
    println!(" > {} log entries loaded.", records.len());
    Ok(records)
}

fn read_food_table(foods_file: &str) -> Result<FoodNutrientTable> {
    println!("Loading food nutrient table from '{}'...", foods_file);
    let table = load_food_nutrient_table(Path::new(foods_file))
        .with_context(|| format!("Failed to load food nutrient table from '{}'", foods_file))?;
    println!(" > {} foods loaded.", table.len());
    Ok(table)
}

fn print_analysis_line(nutrient: Nutrient, intake: f32, percentage: f32, deficient: bool) {
    let marker = if deficient { " (low)" } else { "" };
    println!(
        "  {:<12} {:>10.2}  {:>6.1}%{}",
        nutrient.to_string(),
        intake,
        percentage,
        marker
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = parse_args();

    match cli_args.command {
        Command::Suggest {
            recipes_file,
            ingredients,
            num_suggestions,
        } => {
            let recipes = read_recipes(&recipes_file).await?;
            let corpus_index = RecipeCorpusIndex::new();
            corpus_index.load(recipes)?;
            let snapshot = corpus_index.snapshot()?;

            println!("\nTop matches for {:?}:", ingredients);
            let results = suggest_recipes(&snapshot, &ingredients, num_suggestions);
            for (rank, scored) in results.iter().enumerate() {
                println!(
                    "{}. {} (similarity {:.3}, serves {})",
                    rank + 1,
                    scored.recipe.id,
                    scored.score,
                    scored.recipe.servings
                );
            }
        }
        Command::Scale {
            recipes_file,
            recipe_id,
            target_servings,
        } => {
            let recipes = read_recipes(&recipes_file).await?;
            let recipe = recipes
                .iter()
                .find(|recipe| recipe.id == recipe_id)
                .ok_or_else(|| anyhow::anyhow!("Recipe '{}' not found in corpus", recipe_id))?;

            let scaled = scale_recipe(recipe, target_servings)?;
            println!(
                "\n'{}' rescaled from {} to {} servings:",
                scaled.id, recipe.servings, scaled.servings
            );
            for ingredient in &scaled.measured_ingredients {
                match ingredient.quantity {
                    Some(quantity) => {
                        println!("  {:.2} {} {}", quantity, ingredient.unit, ingredient.name)
                    }
                    None => println!("  {} (unquantified)", ingredient.name),
                }
            }
        }
        Command::Analyze {
            foods_file,
            log_file,
            from,
            to,
        } => {
            let table = read_food_table(&foods_file)?;
            let records = read_consumption_log(&log_file).await?;
            let window = match (from, to) {
                (None, None) => None,
                (start, end) => Some(TimeWindow::new(
                    start.unwrap_or(NaiveDate::MIN),
                    end.unwrap_or(NaiveDate::MAX),
                )),
            };

            let analysis = analyze_consumption(&table, &records, window)?;
            println!("\nNutrient intake vs. daily recommended value:");
            for &nutrient in &TRACKED_NUTRIENTS {
                print_analysis_line(
                    nutrient,
                    analysis.nutrient_intake[&nutrient],
                    analysis.nutrient_percentages[&nutrient],
                    analysis.potential_deficiencies[&nutrient],
                );
            }
            if !analysis.unresolved_foods.is_empty() {
                println!(
                    "\nUnresolved food ids (not in the nutrient table): {:?}",
                    analysis.unresolved_foods
                );
            }

            let recommendations = generate_recommendations(&analysis);
            if recommendations.is_empty() {
                println!("\nNo recommendations. Intake looks on track.");
            } else {
                println!("\nRecommendations:");
                for recommendation in &recommendations {
                    println!("  - {}", recommendation);
                }
            }
        }
        Command::Project {
            foods_file,
            log_file,
            forecast_days,
        } => {
            let table = read_food_table(&foods_file)?;
            let records = read_consumption_log(&log_file).await?;

            let history = daily_intake_history(&table, &records)?;
            if !history.unresolved_foods.is_empty() {
                eprintln!(
                    "Warning: skipped unresolved food ids: {:?}",
                    history.unresolved_foods
                );
            }

            let flags = project_deficiencies(&history.rows, forecast_days)?;
            println!(
                "\nNutrients at deficiency risk over the next {} days:",
                forecast_days
            );
            let mut at_risk: Vec<Nutrient> = flags
                .iter()
                .filter(|&(_, &risky)| risky)
                .map(|(&nutrient, _)| nutrient)
                .collect();
            at_risk.sort_by_key(|nutrient| nutrient.key());
            if at_risk.is_empty() {
                println!("  none");
            } else {
                for nutrient in at_risk {
                    println!("  - {}", nutrient.display_name());
                }
            }
        }
        Command::Meal { ingredients } => {
            let analysis = analyze_meal(&ingredients);
            println!(
                "Macros: protein {:.1} g, carbohydrate {:.1} g, fat {:.1} g",
                analysis.totals.protein_g,
                analysis.totals.carbohydrate_g,
                analysis.totals.fat_g
            );
            println!("{}", analysis.commentary);
        }
    }

    Ok(())
}
