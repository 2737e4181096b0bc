use super::{Dimension, FlatShape};
use crate::error::ShapeError;
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: Dimension,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        let circle = Circle {
            radius: Dimension::new("Circle", "radius", radius)?,
        };
        tracing::debug!(%circle, "constructed");
        Ok(circle)
    }

    pub fn radius(&self) -> f64 {
        self.radius.get()
    }
}

impl FlatShape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius() * self.radius()
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(r={})", self.radius)
    }
}
