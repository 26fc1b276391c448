mod runner;
mod state;

pub use {
    runner::{CompletionCallback, TimerRunner},
    state::{StepTimer, TickOutcome, TimerPhase},
};
