use crate::nutrition::aggregator::AnalysisResult;
use crate::nutrition::reference::{Nutrient, DEFICIENCY_THRESHOLD_PERCENT, TRACKED_NUTRIENTS};

/// Turns an analysis into ordered, human-readable advice strings.
///
/// Rules, evaluated in this order: one line per deficient nutrient
/// (reference-table order), a sodium warning above 100% of the
/// recommendation, and a fiber suggestion below 80%. Fiber is usually
/// absent from the analysis maps, in which case its percentage reads as
/// 0.0 and the suggestion fires. An empty result means no issues found.
pub fn generate_recommendations(analysis: &AnalysisResult) -> Vec<String> {
    let mut recommendations = Vec::new();

    for &nutrient in &TRACKED_NUTRIENTS {
        let is_deficient = analysis
            .potential_deficiencies
            .get(&nutrient)
            .copied()
            .unwrap_or(false);
        if is_deficient {
            let percentage = analysis
                .nutrient_percentages
                .get(&nutrient)
                .copied()
                .unwrap_or(0.0);
            recommendations.push(format!(
                "Consider increasing intake of {}. Current intake is {:.1}% of recommended daily value.",
                nutrient.display_name(),
                percentage
            ));
        }
    }

    let sodium_percentage = analysis
        .nutrient_percentages
        .get(&Nutrient::Sodium)
        .copied()
        .unwrap_or(0.0);
    if sodium_percentage > 100.0 {
        recommendations.push(
            "Your sodium intake is above recommended levels. \
             Consider reducing processed food consumption."
                .to_string(),
        );
    }

    let fiber_percentage = analysis
        .nutrient_percentages
        .get(&Nutrient::Fiber)
        .copied()
        .unwrap_or(0.0);
    if fiber_percentage < DEFICIENCY_THRESHOLD_PERCENT {
        recommendations.push(
            "Consider adding more whole grains, fruits, and vegetables \
             to increase fiber intake."
                .to_string(),
        );
    }

    recommendations
}
