//! Recipe filtering, ordering and limiting.
//!
//! Pure view logic over the in-memory catalog. The caller's slice is never
//! mutated; results come back as a fresh, ordered vector.

use crate::model::{CategoryTable, Difficulty, Recipe};

use tracing::{debug, instrument};

/// Ordering applied by [`filter_and_sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Descending by rating; unrated recipes sort as zero.
    Popular,
    /// Ascending by total time (prep + cook).
    Time,
    /// Ascending by difficulty rank; unrecognized difficulties first.
    Difficulty,
    /// Keep the catalog order.
    #[default]
    Unsorted,
}

impl SortOption {
    /// Parse a sort keyword.
    ///
    /// Recognizes `"popular"`, `"time"` and `"difficulty"`; anything else
    /// (including the empty string) selects [`SortOption::Unsorted`].
    /// Parsing never fails.
    pub fn parse(keyword: &str) -> Self {
        match keyword {
            "popular" => Self::Popular,
            "time" => Self::Time,
            "difficulty" => Self::Difficulty,
            _ => Self::Unsorted,
        }
    }
}

/// Filter, order and truncate a recipe list.
///
/// Filtering keeps a recipe when at least one of its category ids resolves
/// through `categories` to a name present in `filter_names`. An empty
/// filter list, or a list whose sole element is the empty string, keeps
/// everything. Sorting is stable, so equal keys preserve catalog order.
/// The result is truncated to `limit` entries; a limit of zero yields an
/// empty result, and a limit beyond the filtered count returns all of it.
#[instrument(skip(recipes, categories), fields(recipe_count = recipes.len()))]
pub fn filter_and_sort(
    recipes: &[Recipe],
    categories: &CategoryTable,
    filter_names: &[String],
    sort: SortOption,
    limit: usize,
) -> Vec<Recipe> {
    let mut selected: Vec<Recipe> = if is_identity_filter(filter_names) {
        recipes.to_vec()
    } else {
        recipes
            .iter()
            .filter(|recipe| matches_any_category(recipe, categories, filter_names))
            .cloned()
            .collect()
    };

    match sort {
        SortOption::Popular => {
            selected.sort_by(|a, b| rating_of(b).total_cmp(&rating_of(a)));
        }
        SortOption::Time => selected.sort_by_key(Recipe::total_time),
        SortOption::Difficulty => {
            selected.sort_by_key(|recipe| Difficulty::rank_of(&recipe.difficulty));
        }
        SortOption::Unsorted => {}
    }

    selected.truncate(limit);

    debug!(returned = selected.len(), "Recipe query evaluated");

    selected
}

/// An empty filter list, or a lone empty string, means "no filtering".
fn is_identity_filter(filter_names: &[String]) -> bool {
    filter_names.is_empty() || (filter_names.len() == 1 && filter_names[0].is_empty())
}

/// Whether any of the recipe's resolved category names is in the filter
/// list. Unresolvable category ids contribute no name and never match.
fn matches_any_category(
    recipe: &Recipe,
    categories: &CategoryTable,
    filter_names: &[String],
) -> bool {
    recipe
        .category_ids
        .iter()
        .filter_map(|id| categories.name(*id))
        .any(|name| filter_names.iter().any(|filter| filter == name))
}

fn rating_of(recipe: &Recipe) -> f32 {
    recipe.rating.unwrap_or(0.0)
}
