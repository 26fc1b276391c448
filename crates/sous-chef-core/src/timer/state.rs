//! Countdown state machine for a timed cooking step.
//!
//! Pure transition logic with no clock attached; [`TimerRunner`] drives
//! it from the tokio clock. Keeping the machine synchronous makes every
//! transition and edge testable without waiting on wall time.
//!
//! [`TimerRunner`]: crate::timer::TimerRunner

use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info};

/// Activity phase of a [`StepTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Armed at full duration, not counting.
    Idle,
    /// Counting down one second per tick.
    Running,
    /// Frozen mid-countdown.
    Paused,
    /// Reached zero; completion has been reported.
    Completed,
}

/// Result of delivering one tick to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown advanced and is still running.
    Advanced {
        /// Seconds left after this tick.
        remaining: u32,
    },
    /// This tick brought the countdown to zero. Reported exactly once per
    /// Running-to-Completed transition.
    Completed,
    /// The timer is not running; the tick had no effect.
    Ignored,
}

/// Countdown for one timed cooking step.
///
/// Transitions: `start` (Idle/Paused to Running while time remains),
/// `pause` (Running to Paused), `reset` (any phase back to Idle at full
/// duration), and `tick` (one-second decrement while Running). Invalid
/// calls are no-ops, not errors. Invariant: `remaining` stays within
/// `[0, duration]`.
#[derive(Debug, Clone)]
pub struct StepTimer {
    step_label: String,
    duration: u32,
    remaining: u32,
    phase: TimerPhase,
}

impl StepTimer {
    /// Create a timer armed at `duration` seconds for the named step.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDuration`] when `duration` is zero; a
    /// zero-length countdown has no tick to deliver.
    #[track_caller]
    pub fn new(step_label: impl Into<String>, duration: u32) -> CoreResult<Self> {
        if duration == 0 {
            return Err(CoreError::InvalidDuration {
                seconds: duration,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            step_label: step_label.into(),
            duration,
            remaining: duration,
            phase: TimerPhase::Idle,
        })
    }

    /// Begin or resume the countdown.
    ///
    /// Idle and Paused timers with time remaining transition to Running.
    /// Running and Completed timers are left untouched. Returns whether a
    /// transition happened.
    pub fn start(&mut self) -> bool {
        match self.phase {
            TimerPhase::Idle | TimerPhase::Paused if self.remaining > 0 => {
                self.phase = TimerPhase::Running;
                debug!(
                    step = %self.step_label,
                    remaining = self.remaining,
                    "Timer started"
                );
                true
            }
            _ => false,
        }
    }

    /// Freeze a running countdown. No-op in any other phase.
    pub fn pause(&mut self) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }

        self.phase = TimerPhase::Paused;
        debug!(
            step = %self.step_label,
            remaining = self.remaining,
            "Timer paused"
        );

        true
    }

    /// Re-arm at full duration from any phase.
    ///
    /// Clears a pending completion, so a Completed timer can run and
    /// complete again.
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.phase = TimerPhase::Idle;
        debug!(step = %self.step_label, duration = self.duration, "Timer reset");
    }

    /// Deliver one one-second tick.
    ///
    /// Only Running timers advance; ticks in any other phase come back as
    /// [`TickOutcome::Ignored`], so a stale scheduled tick can never move
    /// state that has since paused, reset or completed. Reaching zero
    /// transitions to Completed, reported exactly once.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != TimerPhase::Running {
            return TickOutcome::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.phase = TimerPhase::Completed;
            info!(step = %self.step_label, "Timer completed");
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced {
                remaining: self.remaining,
            }
        }
    }

    /// The step this timer belongs to.
    pub fn step_label(&self) -> &str {
        &self.step_label
    }

    /// Full countdown length in seconds, fixed at creation.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left on the countdown.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Current activity phase.
    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    /// Whether the countdown has reached zero.
    pub fn is_complete(&self) -> bool {
        self.phase == TimerPhase::Completed
    }

    /// Fraction of the countdown already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.duration - self.remaining) as f32 / self.duration as f32
    }

    /// `mm:ss` rendering of the remaining time.
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
