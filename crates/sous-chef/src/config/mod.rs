mod browse_config;
#[allow(clippy::module_inception)]
mod config;
mod notifications_config;

pub(crate) use {
    browse_config::BrowseConfig, config::Config, notifications_config::NotificationsConfig,
};

pub(crate) const DEFAULT_SORT: &str = "popular";
pub(crate) const DEFAULT_LIMIT: usize = 10;
pub(crate) const DEFAULT_TOAST_ENABLED: bool = true;
pub(crate) const DEFAULT_SOUND_ENABLED: bool = true;

pub(crate) fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

pub(crate) fn default_limit() -> usize {
    DEFAULT_LIMIT
}

pub(crate) fn default_toast_enabled() -> bool {
    DEFAULT_TOAST_ENABLED
}

pub(crate) fn default_sound_enabled() -> bool {
    DEFAULT_SOUND_ENABLED
}
