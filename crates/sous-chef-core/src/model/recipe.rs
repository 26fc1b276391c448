use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recipe card in the browsing catalog.
///
/// Query code treats recipes as read-only records; the catalog they come
/// from is immutable for the lifetime of a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Short description shown on the card.
    pub description: String,
    /// Card image URL.
    pub image_url: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    /// Number of servings the recipe yields.
    pub servings: u32,
    /// Calories per serving.
    pub calories: u32,
    /// Difficulty label ("Easy", "Medium", "Hard", case-insensitive).
    ///
    /// Carried as free-form text so unrecognized labels degrade to the
    /// lowest sort rank instead of failing.
    pub difficulty: String,
    /// Ids of the categories this recipe belongs to.
    #[serde(default)]
    pub category_ids: Vec<u32>,
    /// Average star rating in 0-5, when the recipe has been rated.
    #[serde(default)]
    pub rating: Option<f32>,
    /// How many ratings the average is based on.
    #[serde(default)]
    pub rating_count: u32,
    /// When the recipe was added to the catalog.
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Total hands-on time in minutes: preparation plus cooking.
    pub fn total_time(&self) -> u32 {
        self.prep_time + self.cook_time
    }
}

/// Recognized difficulty vocabulary, in ascending order of effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    /// Weeknight-friendly.
    Easy,
    /// Some technique required.
    Medium,
    /// For confident cooks.
    Hard,
}

impl Difficulty {
    /// Parse a difficulty label, case-insensitively.
    ///
    /// Unrecognized labels yield `None` rather than an error; the query
    /// layer sorts them before every recognized difficulty.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Sort rank: Easy=1, Medium=2, Hard=3.
    pub fn rank(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Sort rank for a free-form label; unrecognized labels rank 0.
    pub fn rank_of(label: &str) -> u8 {
        Self::parse(label).map_or(0, Self::rank)
    }
}
