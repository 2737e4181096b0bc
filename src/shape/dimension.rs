use crate::error::{Rejection, ShapeError};
use std::fmt;
use std::ops::Deref;

/// A validated length: finite and not negative. Zero is accepted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dimension(f64);

impl Dimension {
    /// Checks `value` and tags any failure with the shape and parameter it belongs to.
    pub fn new(shape: &'static str, parameter: &'static str, value: f64) -> Result<Self, ShapeError> {
        let rejection = if !value.is_finite() {
            Some(Rejection::NonFinite)
        } else if value < 0.0 {
            Some(Rejection::Negative)
        } else {
            None
        };

        match rejection {
            None => Ok(Dimension(value)),
            Some(reason) => {
                tracing::warn!(shape, parameter, value, %reason, "rejected dimension");
                Err(ShapeError::invalid(shape, parameter, value, reason))
            }
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Deref for Dimension {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
