use crate::{
    Achievement, CoreError, CoreResult, EventSink, StepTimer, TimerPhase, TimerRunner, Toast,
};

use std::{
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use error_location::ErrorLocation;

/// Tick period short enough to run whole countdowns inside a test.
const TEST_TICK: Duration = Duration::from_millis(10);

/// Sink that records everything it receives.
#[derive(Default)]
struct RecordingSink {
    toasts: Mutex<Vec<Toast>>,
    cues: Mutex<Vec<String>>,
    achievements: Mutex<Vec<&'static str>>,
}

impl EventSink for RecordingSink {
    #[allow(clippy::unwrap_used)]
    fn toast(&self, toast: &Toast) -> CoreResult<()> {
        self.toasts.lock().unwrap().push(toast.clone());
        Ok(())
    }

    #[allow(clippy::unwrap_used)]
    fn play_cue(&self, name: &str) -> CoreResult<()> {
        self.cues.lock().unwrap().push(name.to_string());
        Ok(())
    }

    #[allow(clippy::unwrap_used)]
    fn achievement_unlocked(&self, achievement: &Achievement) -> CoreResult<()> {
        self.achievements.lock().unwrap().push(achievement.title);
        Ok(())
    }
}

/// Sink whose every delivery fails.
struct BrokenSink;

impl EventSink for BrokenSink {
    #[track_caller]
    fn toast(&self, _toast: &Toast) -> CoreResult<()> {
        Err(CoreError::NotificationFailed {
            reason: "toast surface offline".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn play_cue(&self, _name: &str) -> CoreResult<()> {
        Err(CoreError::NotificationFailed {
            reason: "no speaker".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn achievement_unlocked(&self, _achievement: &Achievement) -> CoreResult<()> {
        Err(CoreError::NotificationFailed {
            reason: "achievement pane offline".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

fn counting_callback() -> (Arc<AtomicUsize>, crate::CompletionCallback) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let callback: crate::CompletionCallback = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (count, callback)
}

/// WHAT: Running a countdown to zero reports completion exactly once
/// WHY: The callback, cue, toast and achievement must all fire one time
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_running_countdown_when_reaching_zero_then_one_completion_reported() {
    // Given: A three-second countdown with a fast test tick
    let sink = Arc::new(RecordingSink::default());
    let (completions, callback) = counting_callback();
    let timer = StepTimer::new("Sear the salmon", 3).unwrap();
    let runner = TimerRunner::with_tick_period(timer, Arc::clone(&sink) as Arc<dyn EventSink>, callback, TEST_TICK);

    // When: Starting and waiting past three ticks
    assert!(runner.start().await);
    tokio::time::sleep(TEST_TICK * 12).await;

    // Then: Exactly one completion, with cue, toast and achievement
    let (phase, remaining, _) = runner.snapshot().await;
    assert_eq!(phase, TimerPhase::Completed);
    assert_eq!(remaining, 0);
    assert_eq!(completions.load(Ordering::SeqCst), 1);
    assert_eq!(*sink.cues.lock().unwrap(), ["timer-complete"]);
    let toasts = sink.toasts.lock().unwrap();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Timer Complete!");
    assert_eq!(toasts[0].description, "Sear the salmon is ready!");
    assert_eq!(*sink.achievements.lock().unwrap(), ["Time Keeper"]);

    // And: start after completion is a no-op
    assert!(!runner.start().await);
}

/// WHAT: Pausing cancels the tick subscription before returning
/// WHY: A paused countdown must not advance, even with ticks in flight
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_running_countdown_when_paused_then_remaining_frozen() {
    // Given: A long countdown that has run for a few ticks
    let sink = Arc::new(RecordingSink::default());
    let (completions, callback) = counting_callback();
    let timer = StepTimer::new("Reduce the stock", 600).unwrap();
    let runner = TimerRunner::with_tick_period(timer, Arc::clone(&sink) as Arc<dyn EventSink>, callback, TEST_TICK);
    runner.start().await;
    tokio::time::sleep(TEST_TICK * 4).await;

    // When: Pausing, then waiting several more tick periods
    assert!(runner.pause().await);
    let (_, frozen, _) = runner.snapshot().await;
    tokio::time::sleep(TEST_TICK * 8).await;

    // Then: Remaining time has not moved and nothing completed
    let (phase, remaining, _) = runner.snapshot().await;
    assert_eq!(phase, TimerPhase::Paused);
    assert_eq!(remaining, frozen);
    assert_eq!(completions.load(Ordering::SeqCst), 0);

    // And: Pausing again is a no-op
    assert!(!runner.pause().await);
}

/// WHAT: A paused countdown resumes from its remaining time
/// WHY: start from Paused continues the countdown instead of re-arming
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_paused_countdown_when_started_then_resumes_to_completion() {
    // Given: A short countdown paused mid-run
    let sink = Arc::new(RecordingSink::default());
    let (completions, callback) = counting_callback();
    let timer = StepTimer::new("Steep the tea", 3).unwrap();
    let runner = TimerRunner::with_tick_period(timer, Arc::clone(&sink) as Arc<dyn EventSink>, callback, TEST_TICK);
    runner.start().await;
    tokio::time::sleep(TEST_TICK * 2).await;
    runner.pause().await;

    // When: Resuming and waiting out the rest of the countdown
    assert!(runner.start().await);
    tokio::time::sleep(TEST_TICK * 12).await;

    // Then: The countdown completed once
    let (phase, remaining, _) = runner.snapshot().await;
    assert_eq!(phase, TimerPhase::Completed);
    assert_eq!(remaining, 0);
    assert_eq!(completions.load(Ordering::SeqCst), 1);
}

/// WHAT: reset cancels the run and re-arms the full duration
/// WHY: After reset the countdown must be able to complete again
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_completed_countdown_when_reset_then_runs_again() {
    // Given: A completed two-second countdown
    let sink = Arc::new(RecordingSink::default());
    let (completions, callback) = counting_callback();
    let timer = StepTimer::new("Toast the spices", 2).unwrap();
    let runner = TimerRunner::with_tick_period(timer, Arc::clone(&sink) as Arc<dyn EventSink>, callback, TEST_TICK);
    runner.start().await;
    tokio::time::sleep(TEST_TICK * 10).await;
    assert_eq!(completions.load(Ordering::SeqCst), 1);

    // When: Resetting and running a second time
    runner.reset().await;
    let (phase, remaining, _) = runner.snapshot().await;
    assert_eq!(phase, TimerPhase::Idle);
    assert_eq!(remaining, 2);
    assert!(runner.start().await);
    tokio::time::sleep(TEST_TICK * 10).await;

    // Then: A second completion is reported
    assert_eq!(completions.load(Ordering::SeqCst), 2);
}

/// WHAT: Sink failures never disturb the countdown's own state
/// WHY: Audio or toast outages are logged and swallowed
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_broken_sink_when_completing_then_state_machine_unaffected() {
    // Given: A countdown reporting to a sink whose deliveries all fail
    let (completions, callback) = counting_callback();
    let timer = StepTimer::new("Bloom the gelatin", 1).unwrap();
    let runner = TimerRunner::with_tick_period(timer, Arc::new(BrokenSink) as Arc<dyn EventSink>, callback, TEST_TICK);

    // When: Running to zero
    runner.start().await;
    tokio::time::sleep(TEST_TICK * 8).await;

    // Then: The countdown still completed and the callback still fired
    let (phase, remaining, _) = runner.snapshot().await;
    assert_eq!(phase, TimerPhase::Completed);
    assert_eq!(remaining, 0);
    assert_eq!(completions.load(Ordering::SeqCst), 1);
}
