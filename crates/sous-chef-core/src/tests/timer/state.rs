use crate::{CoreError, StepTimer, TickOutcome, TimerPhase};

/// WHAT: Zero-second durations are rejected at creation
/// WHY: A zero-length countdown has no tick semantics
#[test]
fn given_zero_duration_when_creating_timer_then_invalid_duration_error() {
    // Given: A zero duration

    // When: Creating the timer
    let result = StepTimer::new("Rest the dough", 0);

    // Then: Creation fails with InvalidDuration
    assert!(matches!(result, Err(CoreError::InvalidDuration { .. })));
}

/// WHAT: A started timer completes after exactly `duration` ticks
/// WHY: Completion must be reported exactly once, then ticks are ignored
#[test]
#[allow(clippy::unwrap_used)]
fn given_started_timer_when_ticking_duration_times_then_completes_exactly_once() {
    // Given: A running three-second timer
    let mut timer = StepTimer::new("Sear the salmon", 3).unwrap();
    assert!(timer.start());

    // When: Delivering three ticks
    assert_eq!(timer.tick(), TickOutcome::Advanced { remaining: 2 });
    assert_eq!(timer.tick(), TickOutcome::Advanced { remaining: 1 });
    let third = timer.tick();

    // Then: The third tick completes, later ticks are ignored
    assert_eq!(third, TickOutcome::Completed);
    assert_eq!(timer.phase(), TimerPhase::Completed);
    assert_eq!(timer.remaining(), 0);
    assert_eq!(timer.tick(), TickOutcome::Ignored);
}

/// WHAT: start is a no-op after completion until reset
/// WHY: A finished countdown must not silently restart
#[test]
#[allow(clippy::unwrap_used)]
fn given_completed_timer_when_starting_then_noop_until_reset() {
    // Given: A completed one-second timer
    let mut timer = StepTimer::new("Bloom the gelatin", 1).unwrap();
    timer.start();
    assert_eq!(timer.tick(), TickOutcome::Completed);

    // When: Starting again without reset
    let restarted = timer.start();

    // Then: Nothing happens until the timer is re-armed
    assert!(!restarted);
    assert_eq!(timer.phase(), TimerPhase::Completed);

    timer.reset();
    assert!(timer.start());
    assert_eq!(timer.phase(), TimerPhase::Running);
}

/// WHAT: Paused timers ignore ticks and keep their remaining time
/// WHY: A paused countdown must not advance
#[test]
#[allow(clippy::unwrap_used)]
fn given_paused_timer_when_ticking_then_remaining_unchanged() {
    // Given: A timer paused after two ticks
    let mut timer = StepTimer::new("Reduce the stock", 10).unwrap();
    timer.start();
    timer.tick();
    timer.tick();
    assert!(timer.pause());

    // When: Delivering further ticks while paused
    assert_eq!(timer.tick(), TickOutcome::Ignored);
    assert_eq!(timer.tick(), TickOutcome::Ignored);

    // Then: Remaining time is still duration minus the two real ticks
    assert_eq!(timer.remaining(), 8);
    assert_eq!(timer.phase(), TimerPhase::Paused);
}

/// WHAT: pause only acts on a running timer
/// WHY: Invalid transitions are no-ops, not failures
#[test]
#[allow(clippy::unwrap_used)]
fn given_idle_timer_when_pausing_then_noop() {
    // Given: A freshly created timer
    let mut timer = StepTimer::new("Chill the custard", 5).unwrap();

    // When: Pausing without starting
    let paused = timer.pause();

    // Then: Nothing changes
    assert!(!paused);
    assert_eq!(timer.phase(), TimerPhase::Idle);
    assert_eq!(timer.tick(), TickOutcome::Ignored);
}

/// WHAT: A paused timer resumes from where it stopped
/// WHY: start from Paused must not re-arm the full duration
#[test]
#[allow(clippy::unwrap_used)]
fn given_paused_timer_when_started_then_resumes_from_remaining() {
    // Given: A timer paused with 3 of 5 seconds left
    let mut timer = StepTimer::new("Steep the tea", 5).unwrap();
    timer.start();
    timer.tick();
    timer.tick();
    timer.pause();

    // When: Starting again
    assert!(timer.start());

    // Then: The countdown continues from 3, not 5
    assert_eq!(timer.remaining(), 3);
    assert_eq!(timer.tick(), TickOutcome::Advanced { remaining: 2 });
}

/// WHAT: reset re-arms a completed timer for a second full run
/// WHY: The completion one-shot must fire again after re-arm
#[test]
#[allow(clippy::unwrap_used)]
fn given_completed_timer_when_reset_then_full_cycle_repeats() {
    // Given: A completed two-second timer
    let mut timer = StepTimer::new("Toast the spices", 2).unwrap();
    timer.start();
    timer.tick();
    assert_eq!(timer.tick(), TickOutcome::Completed);

    // When: Resetting and running again
    timer.reset();
    assert_eq!(timer.remaining(), 2);
    assert_eq!(timer.phase(), TimerPhase::Idle);
    timer.start();
    timer.tick();

    // Then: The second run completes again
    assert_eq!(timer.tick(), TickOutcome::Completed);
}

/// WHAT: Remaining time stays within [0, duration] across transitions
/// WHY: The numeric invariant backs the progress display
#[test]
#[allow(clippy::unwrap_used)]
fn given_any_transitions_when_inspecting_then_remaining_within_bounds() {
    // Given: A timer pushed through every transition
    let mut timer = StepTimer::new("Caramelize the onions", 4).unwrap();

    // When/Then: Remaining never leaves [0, duration]
    for _ in 0..3 {
        assert!(timer.remaining() <= timer.duration());
        timer.start();
        timer.tick();
        timer.pause();
        assert!(timer.remaining() <= timer.duration());
        timer.start();
    }
    while timer.tick() != TickOutcome::Completed {
        assert!(timer.remaining() <= timer.duration());
    }
    assert_eq!(timer.remaining(), 0);
    timer.reset();
    assert_eq!(timer.remaining(), timer.duration());
}

/// WHAT: The display renders remaining time as zero-padded mm:ss
/// WHY: The countdown face shows 01:30, not 1:30 or 90
#[test]
#[allow(clippy::unwrap_used)]
fn given_remaining_time_when_displaying_then_zero_padded_mm_ss() {
    // Given: A 90-second timer
    let mut timer = StepTimer::new("Simmer the sauce", 90).unwrap();

    // When/Then: Display is padded before and after a tick
    assert_eq!(timer.display(), "01:30");
    timer.start();
    timer.tick();
    assert_eq!(timer.display(), "01:29");
    assert!(timer.progress() > 0.0 && timer.progress() < 1.0);
}
