//! Async driver feeding wall-clock ticks to a [`StepTimer`].
//!
//! One tick task per started run. Cancellation is synchronous with the
//! transition that causes it: pause/reset send the cancel signal while the
//! state lock is held, and the tick handler re-checks the phase under that
//! same lock, so a tick already queued when the transition ran is ignored
//! rather than applied to the new state.

use crate::{
    events::{EventSink, TIME_KEEPER, Toast},
    timer::{StepTimer, TickOutcome, TimerPhase},
};

use std::{sync::Arc, time::Duration};

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Wall-clock tick period: the countdown decrements once per second.
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Default display duration for the completion toast.
const COMPLETION_TOAST_MS: u32 = 5_000;

/// Zero-argument callback invoked exactly once when the countdown
/// completes.
pub type CompletionCallback = Arc<dyn Fn() + Send + Sync>;

struct Inner {
    timer: StepTimer,
    cancel: Option<watch::Sender<bool>>,
}

/// Drives one [`StepTimer`] from the tokio clock.
///
/// On completion it invokes the completion callback, then asks the
/// injected [`EventSink`] for an audio cue, a toast, and the Time Keeper
/// achievement. Sink failures are logged and swallowed; the timer's own
/// state machine has already completed by then.
pub struct TimerRunner {
    inner: Arc<Mutex<Inner>>,
    sink: Arc<dyn EventSink>,
    on_complete: CompletionCallback,
    tick_period: Duration,
}

impl TimerRunner {
    /// Create a runner around `timer` with the one-second tick period.
    pub fn new(timer: StepTimer, sink: Arc<dyn EventSink>, on_complete: CompletionCallback) -> Self {
        Self::with_tick_period(timer, sink, on_complete, TICK_PERIOD)
    }

    /// Create a runner with a custom tick period.
    ///
    /// The countdown still decrements one logical second per tick; only
    /// the wall-clock spacing changes. Tests use short periods to run
    /// countdowns quickly.
    pub fn with_tick_period(
        timer: StepTimer,
        sink: Arc<dyn EventSink>,
        on_complete: CompletionCallback,
        tick_period: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                timer,
                cancel: None,
            })),
            sink,
            on_complete,
            tick_period,
        }
    }

    /// Begin or resume the countdown.
    ///
    /// Spawns the tick task when the state machine transitions to Running;
    /// a no-op start (already running, or completed) spawns nothing.
    /// Returns whether this call set the countdown running.
    #[instrument(skip(self))]
    pub async fn start(&self) -> bool {
        let mut inner = self.inner.lock().await;

        if !inner.timer.start() {
            return false;
        }

        let (cancel_tx, cancel_rx) = watch::channel(false);
        inner.cancel = Some(cancel_tx);

        let session_id = Uuid::new_v4();
        info!(
            session_id = %session_id,
            step = %inner.timer.step_label(),
            remaining = inner.timer.remaining(),
            "Countdown running"
        );

        let inner_handle = Arc::clone(&self.inner);
        let sink = Arc::clone(&self.sink);
        let on_complete = Arc::clone(&self.on_complete);
        let tick_period = self.tick_period;

        tokio::spawn(async move {
            Self::run_ticks(
                inner_handle,
                sink,
                on_complete,
                cancel_rx,
                tick_period,
                session_id,
            )
            .await;
        });

        true
    }

    /// Freeze the countdown, cancelling the pending tick before returning.
    ///
    /// Returns whether a running countdown was paused.
    #[instrument(skip(self))]
    pub async fn pause(&self) -> bool {
        let mut inner = self.inner.lock().await;
        let paused = inner.timer.pause();

        if paused {
            Self::cancel_ticks(&mut inner);
        }

        paused
    }

    /// Re-arm at full duration, cancelling the pending tick before
    /// returning. A completed countdown can run again after this.
    #[instrument(skip(self))]
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.timer.reset();
        Self::cancel_ticks(&mut inner);
    }

    /// Snapshot of the countdown for display.
    pub async fn snapshot(&self) -> (TimerPhase, u32, String) {
        let inner = self.inner.lock().await;
        (
            inner.timer.phase(),
            inner.timer.remaining(),
            inner.timer.display(),
        )
    }

    /// The step this runner's countdown belongs to.
    pub async fn step_label(&self) -> String {
        self.inner.lock().await.timer.step_label().to_string()
    }

    /// Cancel the tick subscription.
    ///
    /// Must be called with the state lock held: the signal is then ordered
    /// before any tick that has yet to acquire the lock, and the phase
    /// re-check in the tick handler covers a tick that was already queued.
    fn cancel_ticks(inner: &mut Inner) {
        if let Some(cancel) = inner.cancel.take() {
            let _ = cancel.send(true);
        }
    }

    async fn run_ticks(
        inner: Arc<Mutex<Inner>>,
        sink: Arc<dyn EventSink>,
        on_complete: CompletionCallback,
        mut cancel_rx: watch::Receiver<bool>,
        tick_period: Duration,
        session_id: Uuid,
    ) {
        loop {
            tokio::select! {
                _ = cancel_rx.changed() => {
                    debug!(session_id = %session_id, "Tick subscription cancelled");
                    break;
                }
                () = tokio::time::sleep(tick_period) => {
                    let mut inner = inner.lock().await;
                    // Cancellation is signalled while this lock is held, so
                    // re-checking here catches a cancel that landed after
                    // this tick was already past the select. Without it a
                    // paused-then-resumed timer could be decremented by
                    // both the stale task and its replacement.
                    if *cancel_rx.borrow_and_update() {
                        debug!(session_id = %session_id, "Tick subscription cancelled");
                        break;
                    }
                    match inner.timer.tick() {
                        TickOutcome::Advanced { remaining } => {
                            debug!(session_id = %session_id, remaining, "Tick");
                        }
                        TickOutcome::Completed => {
                            inner.cancel = None;
                            let step_label = inner.timer.step_label().to_string();
                            drop(inner);
                            Self::deliver_completion(
                                sink.as_ref(),
                                &on_complete,
                                &step_label,
                                session_id,
                            );
                            break;
                        }
                        TickOutcome::Ignored => {
                            // A transition won the race; this task is stale.
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Report completion: audio cue, toast, the caller's callback, then
    /// the achievement. Sink failures are logged, never propagated.
    fn deliver_completion(
        sink: &dyn EventSink,
        on_complete: &CompletionCallback,
        step_label: &str,
        session_id: Uuid,
    ) {
        info!(session_id = %session_id, step = %step_label, "Countdown complete");

        if let Err(e) = sink.play_cue("timer-complete") {
            warn!(session_id = %session_id, error = ?e, "Completion cue failed");
        }

        let toast = Toast {
            title: "Timer Complete!".to_string(),
            description: format!("{step_label} is ready!"),
            timeout_ms: Some(COMPLETION_TOAST_MS),
        };
        if let Err(e) = sink.toast(&toast) {
            warn!(session_id = %session_id, error = ?e, "Completion toast failed");
        }

        on_complete();

        if let Err(e) = sink.achievement_unlocked(&TIME_KEEPER) {
            warn!(session_id = %session_id, error = ?e, "Achievement report failed");
        }
    }
}
