use serde::{Deserialize, Serialize};

/// Nutritional profile of a recipe.
///
/// All fields are optional; the chart layer skips whatever is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    /// Calories per serving.
    #[serde(default)]
    pub calories: Option<u32>,
    /// Protein in grams.
    #[serde(default)]
    pub proteins: Option<f64>,
    /// Carbohydrates in grams.
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Fat in grams.
    #[serde(default)]
    pub fats: Option<f64>,
    /// Fiber in grams.
    #[serde(default)]
    pub fiber: Option<f64>,
    /// Free-text note shown under the chart.
    #[serde(default)]
    pub additional_info: Option<String>,
}
