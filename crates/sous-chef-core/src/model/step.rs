use serde::{Deserialize, Serialize};

/// One instruction in a recipe's cooking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Optional short title; untitled steps display as "Step N".
    #[serde(default)]
    pub title: Option<String>,
    /// The instruction text.
    pub instructions: String,
    /// Duration in minutes for timed steps; arms an embedded countdown.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl Step {
    /// Countdown duration in seconds, when the step is timed.
    pub fn timer_seconds(&self) -> Option<u32> {
        self.duration_minutes.map(|minutes| minutes * 60)
    }

    /// Display label: the title, or "Step N" for untitled steps.
    ///
    /// `index` is zero-based; the label is one-based.
    pub fn label(&self, index: usize) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Step {}", index + 1))
    }
}
