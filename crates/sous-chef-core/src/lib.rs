//! Sous-Chef Core Library
//!
//! Interaction core for the Sous-Chef recipe companion: the catalog data
//! model, the filter-and-sort recipe query, the step-timer state machine
//! with its async runner, cooking progress tracking, star ratings,
//! ingredient substitutions, and nutrition chart data.
//!
//! # Example
//!
//! ```no_run
//! use sous_chef_core::{CoreResult, StepTimer, TickOutcome};
//!
//! fn main() -> CoreResult<()> {
//!     let mut timer = StepTimer::new("Simmer the sauce", 90)?;
//!     timer.start();
//!
//!     while timer.tick() != TickOutcome::Completed {}
//!     println!("{} is ready!", timer.step_label());
//!
//!     Ok(())
//! }
//! ```

mod chart;
mod error;
mod events;
mod model;
mod progress;
mod query;
mod rating;
mod timer;

pub use {
    chart::{NutrientSlice, chart_data},
    error::{CoreError, Result as CoreResult},
    events::{Achievement, CHEF_MASTER, CULINARY_CRITIC, EventSink, TIME_KEEPER, Toast},
    model::{
        Category, CategoryTable, Difficulty, NutritionInfo, Recipe, Step, Substitute,
        SubstitutionCard,
    },
    progress::{CookingProgress, ProgressUpdate},
    query::{SortOption, filter_and_sort},
    rating::{RatingOutcome, StarRating},
    timer::{CompletionCallback, StepTimer, TickOutcome, TimerPhase, TimerRunner},
};

#[cfg(test)]
mod tests;
