//! Desktop event sink: toasts, completion chimes, achievement unlocks.
//!
//! Implements the core's [`EventSink`] over `notify-rust` and the cpal
//! chime. Achievements unlock once per run; repeats are dropped here so
//! the components reporting them stay stateless about history.

use crate::{chime, config::NotificationsConfig};

use std::{
    collections::HashSet,
    panic::Location,
    sync::Mutex,
};

use error_location::ErrorLocation;
use notify_rust::{Notification, Timeout};
use sous_chef_core::{Achievement, CoreError, CoreResult, EventSink, Toast};
use tracing::{debug, error, info};

/// Desktop implementation of the core event sink.
pub struct DesktopNotifier {
    toast_enabled: bool,
    sound_enabled: bool,
    unlocked: Mutex<HashSet<&'static str>>,
}

impl DesktopNotifier {
    /// Build a notifier honoring the notification config toggles.
    pub fn new(config: &NotificationsConfig) -> Self {
        info!(
            toast_enabled = config.toast_enabled,
            sound_enabled = config.sound_enabled,
            "DesktopNotifier initialized"
        );

        Self {
            toast_enabled: config.toast_enabled,
            sound_enabled: config.sound_enabled,
            unlocked: Mutex::new(HashSet::new()),
        }
    }
}

impl EventSink for DesktopNotifier {
    #[track_caller]
    fn toast(&self, toast: &Toast) -> CoreResult<()> {
        if !self.toast_enabled {
            debug!(title = %toast.title, "Toast suppressed by config");
            return Ok(());
        }

        let mut notification = Notification::new();
        notification.summary(&toast.title).body(&toast.description);

        if let Some(ms) = toast.timeout_ms {
            notification.timeout(Timeout::Milliseconds(ms));
        }

        notification
            .show()
            .map(|_| ())
            .map_err(|e| CoreError::NotificationFailed {
                reason: format!("Toast delivery failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(title = %toast.title, "Toast shown");

        Ok(())
    }

    fn play_cue(&self, name: &str) -> CoreResult<()> {
        if !self.sound_enabled {
            debug!(cue = %name, "Cue suppressed by config");
            return Ok(());
        }

        chime::play_detached(name);

        Ok(())
    }

    fn achievement_unlocked(&self, achievement: &Achievement) -> CoreResult<()> {
        // Recover from lock poison rather than losing achievement dedupe.
        // The HashSet is still valid if a previous holder panicked.
        let mut unlocked = self.unlocked.lock().unwrap_or_else(|e| {
            error!("Achievement set lock poisoned, recovering: {}", e);
            e.into_inner()
        });

        if !unlocked.insert(achievement.title) {
            debug!(achievement = achievement.title, "Achievement already unlocked");
            return Ok(());
        }
        drop(unlocked);

        info!(achievement = achievement.title, "Achievement unlocked");

        self.toast(&Toast::new(
            format!("{} {}", achievement.icon, achievement.title),
            achievement.description,
        ))
    }
}
