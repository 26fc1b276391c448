/// Commands driving the companion.
///
/// Parsed from console lines, except [`AppCommand::TimerFinished`] which
/// is an internal event forwarded from the countdown task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// List recipes, optionally filtered, sorted and limited.
    Browse {
        /// Category display names to match (OR); empty keeps everything.
        filters: Vec<String>,
        /// Sort keyword; the configured default when absent.
        sort: Option<String>,
        /// Result limit; the configured default when absent.
        limit: Option<usize>,
    },
    /// List the category table.
    Categories,
    /// Show one recipe in detail, including its nutrition breakdown.
    Show {
        /// Catalog id of the recipe.
        recipe_id: u32,
    },
    /// Start cooking a recipe step by step.
    Cook {
        /// Catalog id of the recipe.
        recipe_id: u32,
    },
    /// Select the step being worked on (zero-based).
    SelectStep {
        /// Step index.
        step: usize,
    },
    /// Toggle completion of a step (zero-based).
    ToggleStep {
        /// Step index.
        step: usize,
    },
    /// Control the countdown for the selected step.
    Timer(TimerAction),
    /// Mark a timed step done after its countdown finished.
    TimerFinished {
        /// Step index the countdown belonged to.
        step: usize,
    },
    /// Rate the recipe last shown or being cooked.
    Rate {
        /// Stars in 1-5.
        stars: u8,
    },
    /// Look up substitutions for an ingredient.
    Substitute {
        /// Ingredient name.
        ingredient: String,
    },
    /// Rotate the substitution card to its next option.
    NextSubstitute,
    /// Flip the substitution card between summary and detail.
    FlipSubstitute,
    /// Print the command reference.
    Help,
    /// Exit the companion.
    Quit,
}

/// Countdown transitions driven from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Begin or resume the countdown.
    Start,
    /// Freeze the countdown.
    Pause,
    /// Re-arm the countdown at full duration.
    Reset,
}
