//! Bookmark rating validation

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::ValidationError;

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

/// Validated rating in the closed range 1..=5.
///
/// Fractional ratings are allowed. Integral ratings serialize as JSON
/// integers so `4` round-trips as `4`, not `4.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    /// Create a rating, rejecting NaN and anything outside 1..=5.
    ///
    /// # Example
    /// ```
    /// use bookmarks_server::models::Rating;
    ///
    /// assert!(Rating::new(4.5).is_ok());
    /// assert!(Rating::new(0.0).is_err());
    /// assert!(Rating::new(7.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(ValidationError::InvalidRating);
        }
        Ok(Self(value))
    }

    /// Coerce a raw JSON value into a rating.
    ///
    /// Numbers and numeric strings (`"4"`, `" 2.5 "`) are accepted.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        number
            .ok_or(ValidationError::InvalidRating)
            .and_then(Self::new)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}
