//! Observer interfaces for application-level notifications.
//!
//! Components report toasts, audio cues and achievement unlocks to an
//! injected [`EventSink`] rather than broadcasting on a process-wide
//! event bus, so the coupling is explicit and testable.

use crate::CoreResult;

/// A short toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Headline.
    pub title: String,
    /// Supporting line.
    pub description: String,
    /// How long the toast stays up, when the sink honors it.
    pub timeout_ms: Option<u32>,
}

impl Toast {
    /// Toast with the sink's default display duration.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            timeout_ms: None,
        }
    }
}

/// An unlockable milestone surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    /// Display title.
    pub title: &'static str,
    /// What the user did to unlock it.
    pub description: &'static str,
    /// Emoji shown next to the title.
    pub icon: &'static str,
}

/// First timed recipe step completed.
pub const TIME_KEEPER: Achievement = Achievement {
    title: "Time Keeper",
    description: "You've completed your first timed recipe step",
    icon: "⏱️",
};

/// First recipe fully cooked.
pub const CHEF_MASTER: Achievement = Achievement {
    title: "Chef Master",
    description: "You've completed your first recipe",
    icon: "👨‍🍳",
};

/// First five-star rating given.
pub const CULINARY_CRITIC: Achievement = Achievement {
    title: "Culinary Critic",
    description: "You've given your first 5-star rating",
    icon: "⭐",
};

/// Receives notifications from the interaction components.
///
/// Implementations deliver to whatever surface the host application has
/// (desktop toasts, speakers, an achievements pane). All methods are
/// fallible; callers log failures and carry on, so a broken surface never
/// disturbs component state.
pub trait EventSink: Send + Sync {
    /// Show a toast notification.
    fn toast(&self, toast: &Toast) -> CoreResult<()>;

    /// Play a named audio cue.
    fn play_cue(&self, name: &str) -> CoreResult<()>;

    /// Report an unlocked achievement.
    fn achievement_unlocked(&self, achievement: &Achievement) -> CoreResult<()>;
}
