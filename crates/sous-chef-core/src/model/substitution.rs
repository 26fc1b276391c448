use serde::{Deserialize, Serialize};

/// An ingredient replacement option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitute {
    /// Replacement ingredient name.
    pub name: String,
    /// Substitution ratio ("1:1", "3/4 cup per cup", ...).
    pub ratio: String,
    /// What to expect when substituting.
    pub description: String,
}

/// Rotating substitution lookup for one ingredient.
///
/// Models the flip card from the browsing UI: a summary face showing the
/// current substitute and a detail face with its description, plus a
/// "next option" rotation through the alternatives.
#[derive(Debug, Clone)]
pub struct SubstitutionCard {
    ingredient: String,
    substitutes: Vec<Substitute>,
    index: usize,
    flipped: bool,
}

impl SubstitutionCard {
    /// Build a card for `ingredient`.
    ///
    /// Returns `None` when there are no substitutes to show; the UI
    /// renders nothing in that case.
    pub fn new(ingredient: impl Into<String>, substitutes: Vec<Substitute>) -> Option<Self> {
        if substitutes.is_empty() {
            return None;
        }
        Some(Self {
            ingredient: ingredient.into(),
            substitutes,
            index: 0,
            flipped: false,
        })
    }

    /// The ingredient being substituted.
    pub fn ingredient(&self) -> &str {
        &self.ingredient
    }

    /// The substitute currently shown.
    pub fn current(&self) -> &Substitute {
        // Index stays within bounds: new() rejects empty lists and
        // cycle_next wraps modulo the length.
        &self.substitutes[self.index.min(self.substitutes.len() - 1)]
    }

    /// Advance to the next substitute, wrapping at the end of the list.
    pub fn cycle_next(&mut self) -> &Substitute {
        self.index = (self.index + 1) % self.substitutes.len();
        self.current()
    }

    /// Toggle between the summary face and the detail face.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Whether the detail face is showing.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// How many substitution options the card rotates through.
    pub fn option_count(&self) -> usize {
        self.substitutes.len()
    }
}
