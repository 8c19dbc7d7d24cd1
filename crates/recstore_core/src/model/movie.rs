//! Movie domain model.
//!
//! # Responsibility
//! - Define the movie record with its rating history.
//! - Enforce the rating domain at the point of assignment.
//!
//! # Invariants
//! - Every stored rating lies in [0, 10] and is finite.
//! - The average rating is computed on demand, never cached, so it cannot
//!   go stale relative to `ratings`.

use crate::model::record::{RecordId, StoreRecord, ValidationError};
use serde::{Deserialize, Serialize};

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 10.0;

/// One library entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned stable identifier.
    pub id: RecordId,
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Individual ratings in submission order. Mutated only through
    /// [`Movie::add_rating`], which validates the domain.
    #[serde(default)]
    pub ratings: Vec<f64>,
}

impl Movie {
    /// Creates a draft movie with defaulted genres and ratings.
    ///
    /// The `id` starts at 0 and is assigned by the store on create.
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            id: 0,
            title: title.into(),
            year,
            genres: Vec::new(),
            ratings: Vec::new(),
        }
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    /// Appends one rating after validating the [0, 10] domain.
    ///
    /// # Errors
    /// Returns `ValidationError::OutOfRange` for non-finite values or values
    /// outside the closed range; the record is left unchanged on error.
    pub fn add_rating(&mut self, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "rating",
                value,
                min: RATING_MIN,
                max: RATING_MAX,
            });
        }
        self.ratings.push(value);
        Ok(())
    }

    /// Computes the average rating, or `None` when no ratings exist.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: f64 = self.ratings.iter().sum();
        Some(total / self.ratings.len() as f64)
    }
}

/// Partial-field update for [`Movie`].
///
/// Ratings are deliberately absent: they change only through the validated
/// [`Movie::add_rating`] path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genres: Option<Vec<String>>,
}

impl StoreRecord for Movie {
    type Patch = MoviePatch;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn assign_record_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn merge(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(genres) = patch.genres {
            self.genres = genres;
        }
    }
}
