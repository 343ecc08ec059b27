use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of nutrient identifiers the engine understands. Profiles
/// and loaders are validated against this enum, so a typoed nutrient name
/// is a load-time error rather than a silently ignored map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Thiamin,
    Riboflavin,
    Niacin,
    VitaminB6,
    Folate,
    VitaminB12,
    Calcium,
    Iron,
    Magnesium,
    Phosphorus,
    Potassium,
    Sodium,
    Zinc,
    Fiber,
}

/// Nutrients carrying a daily recommended value, in reference-table order.
/// This order is what makes aggregation output and recommendation text
/// deterministic. Fiber is tracked in profiles but has no recommendation,
/// so it is not listed here.
pub const TRACKED_NUTRIENTS: [Nutrient; 18] = [
    Nutrient::VitaminA,
    Nutrient::VitaminC,
    Nutrient::VitaminD,
    Nutrient::VitaminE,
    Nutrient::VitaminK,
    Nutrient::Thiamin,
    Nutrient::Riboflavin,
    Nutrient::Niacin,
    Nutrient::VitaminB6,
    Nutrient::Folate,
    Nutrient::VitaminB12,
    Nutrient::Calcium,
    Nutrient::Iron,
    Nutrient::Magnesium,
    Nutrient::Phosphorus,
    Nutrient::Potassium,
    Nutrient::Sodium,
    Nutrient::Zinc,
];

/// Intake below this share of the daily recommended value counts as a
/// potential deficiency.
pub const DEFICIENCY_THRESHOLD_PERCENT: f32 = 80.0;

impl Nutrient {
    /// Daily recommended value (in mg unless noted), or `None` for
    /// nutrients without a reference amount.
    pub fn daily_recommended(self) -> Option<f32> {
        match self {
            Nutrient::VitaminA => Some(900.0), // mcg
            Nutrient::VitaminC => Some(90.0),
            Nutrient::VitaminD => Some(15.0), // mcg
            Nutrient::VitaminE => Some(15.0),
            Nutrient::VitaminK => Some(120.0), // mcg
            Nutrient::Thiamin => Some(1.2),
            Nutrient::Riboflavin => Some(1.3),
            Nutrient::Niacin => Some(16.0),
            Nutrient::VitaminB6 => Some(1.7),
            Nutrient::Folate => Some(400.0), // mcg
            Nutrient::VitaminB12 => Some(2.4), // mcg
            Nutrient::Calcium => Some(1000.0),
            Nutrient::Iron => Some(18.0),
            Nutrient::Magnesium => Some(400.0),
            Nutrient::Phosphorus => Some(700.0),
            Nutrient::Potassium => Some(4700.0),
            Nutrient::Sodium => Some(2300.0),
            Nutrient::Zinc => Some(11.0),
            Nutrient::Fiber => None,
        }
    }

    /// The snake_case identifier used in data files ("vitamin_a", "zinc", ...).
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::VitaminA => "vitamin_a",
            Nutrient::VitaminC => "vitamin_c",
            Nutrient::VitaminD => "vitamin_d",
            Nutrient::VitaminE => "vitamin_e",
            Nutrient::VitaminK => "vitamin_k",
            Nutrient::Thiamin => "thiamin",
            Nutrient::Riboflavin => "riboflavin",
            Nutrient::Niacin => "niacin",
            Nutrient::VitaminB6 => "vitamin_b6",
            Nutrient::Folate => "folate",
            Nutrient::VitaminB12 => "vitamin_b12",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Potassium => "potassium",
            Nutrient::Sodium => "sodium",
            Nutrient::Zinc => "zinc",
            Nutrient::Fiber => "fiber",
        }
    }

    pub fn from_key(key: &str) -> Option<Nutrient> {
        TRACKED_NUTRIENTS
            .iter()
            .copied()
            .chain(std::iter::once(Nutrient::Fiber))
            .find(|nutrient| nutrient.key() == key)
    }

    /// Human-readable name for recommendation text ("vitamin_b12" -> "Vitamin B12").
    pub fn display_name(self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
