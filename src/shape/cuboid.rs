use super::{Dimension, FlatShape, SolidShape};
use crate::error::ShapeError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    length: Dimension,
    width: Dimension,
    height: Dimension,
}

impl Cuboid {
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, ShapeError> {
        let cuboid = Cuboid {
            length: Dimension::new("Cuboid", "length", length)?,
            width: Dimension::new("Cuboid", "width", width)?,
            height: Dimension::new("Cuboid", "height", height)?,
        };
        tracing::debug!(%cuboid, "constructed");
        Ok(cuboid)
    }

    pub fn length(&self) -> f64 {
        self.length.get()
    }

    pub fn width(&self) -> f64 {
        self.width.get()
    }

    pub fn height(&self) -> f64 {
        self.height.get()
    }
}

impl SolidShape for Cuboid {
    fn volume(&self) -> f64 {
        self.length() * self.width() * self.height()
    }
}

// Surface area.
impl FlatShape for Cuboid {
    fn area(&self) -> f64 {
        let (l, w, h) = (self.length(), self.width(), self.height());
        2.0 * (l * w + w * h + h * l)
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cuboid({}x{}x{})", self.length, self.width, self.height)
    }
}
