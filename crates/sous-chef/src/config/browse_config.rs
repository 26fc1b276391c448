use crate::config::{default_limit, default_sort};

use serde::{Deserialize, Serialize};

/// Browsing defaults applied when a command omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Sort keyword used when none is given ("popular", "time",
    /// "difficulty"; anything else keeps catalog order).
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Result limit used when none is given.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}
