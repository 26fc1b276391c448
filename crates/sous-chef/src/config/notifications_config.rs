use crate::config::{default_sound_enabled, default_toast_enabled};

use serde::{Deserialize, Serialize};

/// Notification surface toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Whether to show desktop toasts.
    #[serde(default = "default_toast_enabled")]
    pub toast_enabled: bool,

    /// Whether to play the timer completion chime.
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}
