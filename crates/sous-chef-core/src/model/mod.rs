mod category;
mod nutrition;
mod recipe;
mod step;
mod substitution;

pub use {
    category::{Category, CategoryTable},
    nutrition::NutritionInfo,
    recipe::{Difficulty, Recipe},
    step::Step,
    substitution::{Substitute, SubstitutionCard},
};
