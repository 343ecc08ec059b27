use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::nutrition::DEFAULT_FORECAST_DAYS;
use crate::suggest::DEFAULT_NUM_SUGGESTIONS;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank recipes by similarity to the ingredients you have on hand
    Suggest {
        /// Path to the recipe corpus JSON file
        #[arg(short, long)]
        recipes_file: String,
        /// Available ingredients, comma separated
        #[arg(short, long, value_delimiter = ',')]
        ingredients: Vec<String>,
        #[arg(short, long, default_value_t = DEFAULT_NUM_SUGGESTIONS)]
        num_suggestions: usize,
    },
    /// Rescale a recipe's ingredient quantities to a target serving count
    Scale {
        /// Path to the recipe corpus JSON file
        #[arg(short, long)]
        recipes_file: String,
        /// Identifier of the recipe to rescale
        #[arg(long)]
        recipe_id: String,
        #[arg(short, long)]
        target_servings: u32,
    },
    /// Aggregate a consumption log into intake totals, percentages, and advice
    Analyze {
        /// Path to the food nutrient reference CSV file
        #[arg(short, long)]
        foods_file: String,
        /// Path to the consumption log JSON file
        #[arg(short, long)]
        log_file: String,
        /// Restrict the analysis to records on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Restrict the analysis to records on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Project per-day averages forward and flag nutrients at deficiency risk
    Project {
        /// Path to the food nutrient reference CSV file
        #[arg(short, long)]
        foods_file: String,
        /// Path to the consumption log JSON file
        #[arg(short, long)]
        log_file: String,
        #[arg(long, default_value_t = DEFAULT_FORECAST_DAYS)]
        forecast_days: u32,
    },
    /// Quick macro balance check for a comma-separated ingredient list
    Meal {
        /// e.g. "egg, rice, cheese"
        #[arg(short, long)]
        ingredients: String,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
