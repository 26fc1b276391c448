use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A recipe category used for name-based filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: u32,
    /// Unique display name ("Healthy", "Quick Meals", ...).
    pub name: String,
    /// Tile image URL.
    pub image_url: String,
    /// How many catalog recipes reference this category.
    #[serde(default)]
    pub recipe_count: u32,
}

/// Immutable id-to-category lookup backing the recipe query.
///
/// Category ids on a recipe that resolve to no entry contribute no name
/// and therefore never satisfy a name filter.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    by_id: HashMap<u32, Category>,
}

impl CategoryTable {
    /// Build a table from a category list.
    ///
    /// A duplicated id keeps the last entry, matching a lookup over a list
    /// scanned back to front.
    pub fn new(categories: Vec<Category>) -> Self {
        let by_id = categories.into_iter().map(|c| (c.id, c)).collect();
        Self { by_id }
    }

    /// Look up a category by id.
    pub fn get(&self, id: u32) -> Option<&Category> {
        self.by_id.get(&id)
    }

    /// Display name for a category id, when the id resolves.
    pub fn name(&self, id: u32) -> Option<&str> {
        self.by_id.get(&id).map(|c| c.name.as_str())
    }

    /// Resolved display names for a recipe's category ids.
    ///
    /// Unresolvable ids contribute nothing.
    pub fn resolve_names(&self, ids: &[u32]) -> Vec<&str> {
        ids.iter().filter_map(|id| self.name(*id)).collect()
    }

    /// Number of categories in the table.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the table has no categories.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Iterate the categories in id order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Category> {
        let mut categories: Vec<&Category> = self.by_id.values().collect();
        categories.sort_by_key(|c| c.id);
        categories.into_iter()
    }
}
