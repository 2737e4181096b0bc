//! Shape variants and the capability traits they implement.
//!
//! Consumers are written against [`FlatShape`] and [`SolidShape`], never
//! against a concrete variant. A variant picks the capabilities that make
//! sense for it: a [`Cuboid`] has both an area and a volume, a [`Circle`]
//! only has an area.

mod circle;
mod cuboid;
mod dimension;
mod rectangle;

pub use circle::Circle;
pub use cuboid::Cuboid;
pub use dimension::Dimension;
pub use rectangle::{Rectangle, Square};

/// Anything with an area. For solids this is the surface area.
pub trait FlatShape {
    fn area(&self) -> f64;
}

/// Anything that encloses a volume.
pub trait SolidShape {
    fn volume(&self) -> f64;
}

/// The rectangle contract: an area equal to `width * height`.
///
/// Both [`Rectangle`] and [`Square`] satisfy it, so a square can be handed to
/// any code that expects a rectangle.
pub trait Rectangular: FlatShape {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(shape: &dyn Rectangular) -> (f64, f64, f64) {
        (shape.width(), shape.height(), shape.area())
    }

    #[test]
    fn test_square_substitutes_for_rectangle() {
        let rectangle = Rectangle::new(4.0, 4.0).unwrap();
        let square = Square::new(4.0).unwrap();

        assert_eq!(describe(&rectangle), describe(&square));
    }

    #[test]
    fn test_cuboid_exposes_both_capabilities() {
        let cuboid = Cuboid::new(2.0, 3.0, 4.0).unwrap();
        let flat: &dyn FlatShape = &cuboid;
        let solid: &dyn SolidShape = &cuboid;

        assert_eq!(flat.area(), 52.0);
        assert_eq!(solid.volume(), 24.0);
    }

    #[test]
    fn test_heterogeneous_flat_shapes() {
        let circle = Circle::new(1.0).unwrap();
        let rectangle = Rectangle::new(2.0, 3.0).unwrap();
        let square = Square::new(2.0).unwrap();
        let shapes: Vec<Box<dyn FlatShape>> =
            vec![Box::new(circle), Box::new(rectangle), Box::new(square)];

        let total: f64 = shapes.iter().map(|shape| shape.area()).sum();
        assert!((total - (std::f64::consts::PI + 10.0)).abs() < 1e-12);
    }
}
