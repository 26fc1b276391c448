//! Step-by-step cooking progress tracking.
//!
//! Tracks which steps of a recipe are done, which one the cook is on, and
//! reports the moment the final open step completes so the host can
//! celebrate exactly once.

use crate::{CoreError, CoreResult};

use std::{collections::BTreeSet, panic::Location};

use error_location::ErrorLocation;
use tracing::{debug, info};

/// Outcome of toggling a step's completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressUpdate {
    /// The step is now complete; other steps remain open.
    StepCompleted {
        /// The toggled step (zero-based).
        index: usize,
        /// Steps completed so far.
        done: usize,
        /// Total steps in the recipe.
        total: usize,
    },
    /// The step was reopened.
    StepReopened {
        /// The toggled step (zero-based).
        index: usize,
        /// Steps completed after reopening.
        done: usize,
        /// Total steps in the recipe.
        total: usize,
    },
    /// This toggle completed the final open step. Reported exactly once
    /// per full completion; reopening any step re-arms it.
    AllComplete,
}

/// Completion tracker for a recipe's cooking flow.
#[derive(Debug, Clone)]
pub struct CookingProgress {
    total: usize,
    completed: BTreeSet<usize>,
    current: usize,
    celebrated: bool,
}

impl CookingProgress {
    /// Track `total` steps, all initially open, with the first selected.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NoSteps`] when `total` is zero.
    #[track_caller]
    pub fn new(total: usize) -> CoreResult<Self> {
        if total == 0 {
            return Err(CoreError::NoSteps {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            total,
            completed: BTreeSet::new(),
            current: 0,
            celebrated: false,
        })
    }

    /// Total steps tracked.
    pub fn total(&self) -> usize {
        self.total
    }

    /// How many steps are complete.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completion percentage in `[0, 100]`.
    pub fn percent_complete(&self) -> f32 {
        self.completed.len() as f32 / self.total as f32 * 100.0
    }

    /// Whether every step is complete.
    pub fn is_complete(&self) -> bool {
        self.completed.len() == self.total
    }

    /// The step currently being worked on (zero-based).
    pub fn current_step(&self) -> usize {
        self.current
    }

    /// Whether a given step is complete. Out-of-range indices are not.
    pub fn is_step_complete(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Select the step being worked on.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::StepOutOfRange`] for an index past the recipe.
    #[track_caller]
    pub fn select_step(&mut self, index: usize) -> CoreResult<()> {
        self.check_index(index)?;
        self.current = index;
        debug!(step = index, "Step selected");
        Ok(())
    }

    /// Flip completion of one step.
    ///
    /// Completing the final open step reports
    /// [`ProgressUpdate::AllComplete`] exactly once; reopening any step
    /// re-arms that report.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::StepOutOfRange`] for an index past the recipe.
    #[track_caller]
    pub fn toggle_step(&mut self, index: usize) -> CoreResult<ProgressUpdate> {
        self.check_index(index)?;

        if self.completed.remove(&index) {
            self.celebrated = false;
            let done = self.completed.len();
            debug!(step = index, done, total = self.total, "Step reopened");
            return Ok(ProgressUpdate::StepReopened {
                index,
                done,
                total: self.total,
            });
        }

        self.completed.insert(index);
        let done = self.completed.len();

        if done == self.total && !self.celebrated {
            self.celebrated = true;
            info!(total = self.total, "All steps complete");
            return Ok(ProgressUpdate::AllComplete);
        }

        debug!(step = index, done, total = self.total, "Step completed");
        Ok(ProgressUpdate::StepCompleted {
            index,
            done,
            total: self.total,
        })
    }

    #[track_caller]
    fn check_index(&self, index: usize) -> CoreResult<()> {
        if index >= self.total {
            return Err(CoreError::StepOutOfRange {
                index,
                total: self.total,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
