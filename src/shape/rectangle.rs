use super::{Dimension, FlatShape, Rectangular};
use crate::error::ShapeError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: Dimension,
    height: Dimension,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        let rectangle = Rectangle {
            width: Dimension::new("Rectangle", "width", width)?,
            height: Dimension::new("Rectangle", "height", height)?,
        };
        tracing::debug!(%rectangle, "constructed");
        Ok(rectangle)
    }
}

impl Rectangular for Rectangle {
    fn width(&self) -> f64 {
        self.width.get()
    }

    fn height(&self) -> f64 {
        self.height.get()
    }
}

impl FlatShape for Rectangle {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle({}x{})", self.width, self.height)
    }
}

/// A rectangle whose width and height are the same side, fixed at construction.
///
/// There is no way to change one edge without the other, so every `Square`
/// behaves exactly like the `Rectangle` it converts into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    side: Dimension,
}

impl Square {
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        let square = Square {
            side: Dimension::new("Square", "side", side)?,
        };
        tracing::debug!(%square, "constructed");
        Ok(square)
    }

    pub fn side(&self) -> f64 {
        self.side.get()
    }

    pub fn as_rectangle(&self) -> Rectangle {
        Rectangle::from(*self)
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Rectangle {
            width: square.side,
            height: square.side,
        }
    }
}

impl Rectangular for Square {
    fn width(&self) -> f64 {
        self.side()
    }

    fn height(&self) -> f64 {
        self.side()
    }
}

impl FlatShape for Square {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.side)
    }
}
