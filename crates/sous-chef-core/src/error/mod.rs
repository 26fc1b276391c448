use error_location::ErrorLocation;
use thiserror::Error;

/// Domain errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A countdown must be at least one second long.
    #[error("Invalid timer duration: {seconds}s {location}")]
    InvalidDuration {
        /// The rejected duration in seconds.
        seconds: u32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A step index outside the tracked recipe.
    #[error("Step {index} out of range ({total} steps) {location}")]
    StepOutOfRange {
        /// The rejected step index (zero-based).
        index: usize,
        /// How many steps the recipe has.
        total: usize,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A recipe with no steps has nothing to track.
    #[error("Recipe has no steps to track {location}")]
    NoSteps {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A star rating outside the 1-5 range.
    #[error("Invalid rating: {stars} stars (expected 1-5) {location}")]
    InvalidRating {
        /// The rejected star count.
        stars: u8,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A notification surface failed to deliver.
    #[error("Notification failed: {reason} {location}")]
    NotificationFailed {
        /// Description of the delivery failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
