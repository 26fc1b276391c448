//! Nutrition pie-chart data preparation.
//!
//! Builds the slice list the charting layer renders; the rendition itself
//! lives outside this crate.

use crate::model::NutritionInfo;

/// Fixed palette, one color per nutrient in chart order.
const COLORS: [&str; 4] = ["#FF6B6B", "#4ECDC4", "#FFD166", "#83D483"];

/// One wedge of the nutrition chart.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientSlice {
    /// Nutrient label.
    pub name: &'static str,
    /// Grams contributed.
    pub grams: f64,
    /// Hex color assigned from the fixed palette.
    pub color: &'static str,
}

/// Build chart slices for a nutrition profile.
///
/// Returns an empty list when calories are absent or zero; the chart
/// shows a "no data" placeholder instead. Absent and zero-gram nutrients
/// contribute no slice. Order is fixed: proteins, carbs, fats, fiber.
pub fn chart_data(info: &NutritionInfo) -> Vec<NutrientSlice> {
    if info.calories.unwrap_or(0) == 0 {
        return Vec::new();
    }

    let nutrients = [
        ("Proteins", info.proteins, COLORS[0]),
        ("Carbs", info.carbs, COLORS[1]),
        ("Fats", info.fats, COLORS[2]),
        ("Fiber", info.fiber, COLORS[3]),
    ];

    nutrients
        .into_iter()
        .filter_map(|(name, grams, color)| match grams {
            Some(grams) if grams > 0.0 => Some(NutrientSlice { name, grams, color }),
            _ => None,
        })
        .collect()
}
