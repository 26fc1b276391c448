//! Embedded demo catalog.
//!
//! The companion ships its demo content compiled in, the same recipes and
//! categories the browsing UI displays, plus cooking flows, nutrition
//! profiles and substitution suggestions.

use crate::{AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use sous_chef_core::{Category, CategoryTable, NutritionInfo, Recipe, Step};
use tracing::{info, instrument};

/// Demo catalog embedded at compile time so the companion works from any
/// install location.
const DEMO_CATALOG: &str = include_str!("../resources/demo-catalog.toml");

/// Substitution options for one ingredient.
#[derive(Debug, Clone, Deserialize)]
pub struct SubstitutionEntry {
    /// Ingredient name as recipes spell it.
    pub ingredient: String,
    /// Replacement options, best first.
    pub substitutes: Vec<sous_chef_core::Substitute>,
}

/// A recipe's cooking flow and nutrition profile.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeDetail {
    /// Catalog id of the recipe this detail belongs to.
    pub recipe_id: u32,
    /// Steps in cooking order.
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Nutrition profile, when recorded.
    #[serde(default)]
    pub nutrition: NutritionInfo,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    recipes: Vec<Recipe>,
    categories: Vec<Category>,
    #[serde(default)]
    details: Vec<RecipeDetail>,
    #[serde(default)]
    substitutions: Vec<SubstitutionEntry>,
}

/// In-memory recipe catalog backing the companion.
pub struct Catalog {
    recipes: Vec<Recipe>,
    categories: CategoryTable,
    details: Vec<RecipeDetail>,
    substitutions: Vec<SubstitutionEntry>,
}

impl Catalog {
    /// Decode the embedded demo catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the embedded TOML does not decode,
    /// which would mean a broken build.
    #[track_caller]
    #[instrument]
    pub fn load_embedded() -> AppResult<Self> {
        Self::from_toml(DEMO_CATALOG)
    }

    /// Decode a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the text does not decode.
    #[track_caller]
    pub fn from_toml(text: &str) -> AppResult<Self> {
        let file: CatalogFile = toml::from_str(text).map_err(|e| AppError::CatalogError {
            reason: format!("Failed to parse catalog: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(
            recipes = file.recipes.len(),
            categories = file.categories.len(),
            "Catalog loaded"
        );

        Ok(Self {
            recipes: file.recipes,
            categories: CategoryTable::new(file.categories),
            details: file.details,
            substitutions: file.substitutions,
        })
    }

    /// Every recipe in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The category table.
    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    /// Look up a recipe by id.
    pub fn recipe(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Cooking steps for a recipe; empty when none are recorded.
    pub fn steps(&self, recipe_id: u32) -> &[Step] {
        self.details
            .iter()
            .find(|d| d.recipe_id == recipe_id)
            .map_or(&[], |d| d.steps.as_slice())
    }

    /// Nutrition profile for a recipe, when recorded.
    pub fn nutrition(&self, recipe_id: u32) -> Option<&NutritionInfo> {
        self.details
            .iter()
            .find(|d| d.recipe_id == recipe_id)
            .map(|d| &d.nutrition)
    }

    /// Substitution suggestions for an ingredient, case-insensitively.
    pub fn substitutes_for(&self, ingredient: &str) -> Option<&SubstitutionEntry> {
        self.substitutions
            .iter()
            .find(|entry| entry.ingredient.eq_ignore_ascii_case(ingredient))
    }
}
