//! Five-star rating widget state.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info};

/// What a rating pick means for the surrounding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingOutcome {
    /// Stars selected.
    pub stars: u8,
    /// High ratings (4 stars and up) merit a celebration effect.
    pub celebration: bool,
    /// Five-star picks unlock the Culinary Critic achievement.
    pub five_star: bool,
}

/// Interactive five-star rating picker.
///
/// Read-only pickers display an existing rating and ignore picks, the
/// same way the rendered widget disables its buttons.
#[derive(Debug, Clone)]
pub struct StarRating {
    selected: Option<u8>,
    has_rated: bool,
    readonly: bool,
}

impl StarRating {
    /// Picker starting at `initial` stars (`None` = unrated). Values past
    /// five are clamped.
    pub fn new(initial: Option<u8>) -> Self {
        Self {
            selected: initial.map(|stars| stars.min(5)),
            has_rated: false,
            readonly: false,
        }
    }

    /// Read-only picker used for display.
    pub fn read_only(initial: Option<u8>) -> Self {
        Self {
            readonly: true,
            ..Self::new(initial)
        }
    }

    /// Stars currently shown.
    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Whether the user has rated during this session.
    pub fn has_rated(&self) -> bool {
        self.has_rated
    }

    /// Pick a star value.
    ///
    /// Read-only pickers ignore the pick and return `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRating`] unless `stars` is in 1-5.
    #[track_caller]
    pub fn rate(&mut self, stars: u8) -> CoreResult<Option<RatingOutcome>> {
        if self.readonly {
            debug!(stars, "Pick ignored on read-only rating");
            return Ok(None);
        }

        if !(1..=5).contains(&stars) {
            return Err(CoreError::InvalidRating {
                stars,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.selected = Some(stars);
        self.has_rated = true;

        info!(stars, "Rating picked");

        Ok(Some(RatingOutcome {
            stars,
            celebration: stars >= 4,
            five_star: stars == 5,
        }))
    }

    /// Feedback line shown after a pick; `None` until the user rates.
    pub fn feedback(&self) -> Option<&'static str> {
        if !self.has_rated {
            return None;
        }

        Some(match self.selected.unwrap_or(0) {
            0..=2 => "Thanks for your feedback!",
            3..=4 => "Great! Thanks for rating!",
            _ => "Amazing! You're awesome!",
        })
    }
}
