//! The fixed runs behind the two demonstration binaries.

use crate::calculator::{AreaCalculator, CircleCalculator, GeometryUtils};
use crate::error::ShapeError;
use crate::report::Report;
use crate::shape::{Circle, Cuboid, FlatShape, Rectangle, SolidShape, Square};

/// DRY: one shared utility computes every area.
pub fn dry_principle() -> Result<Report, ShapeError> {
    let circle = Circle::new(5.0)?;
    let rectangle = Rectangle::new(4.0, 6.0)?;

    let mut report = Report::new();
    report.record("Circle Area", GeometryUtils::calculate_area(&circle));
    report.record("Rectangle Area", GeometryUtils::calculate_area(&rectangle));
    Ok(report)
}

/// SOLID: one step per principle.
pub fn solid_principles() -> Result<Report, ShapeError> {
    let mut report = Report::new();

    // Single responsibility
    let circle = Circle::new(5.0)?;
    let circle_calculator = CircleCalculator::new();
    report.record("Circle Area", circle_calculator.calculate_area(&circle));

    // Open/closed
    let rectangle = Rectangle::new(4.0, 6.0)?;
    report.record("Rectangle Area", rectangle.area());

    // Liskov substitution
    let square = Square::new(4.0)?;
    report.record("Square Area", square.area());

    // Interface segregation
    let cuboid = Cuboid::new(2.0, 3.0, 4.0)?;
    report.record("Cuboid Volume", cuboid.volume());
    report.record("Cuboid Area", cuboid.area());

    // Dependency inversion
    let area_calculator = AreaCalculator::new();
    report.record("Calculated Area", area_calculator.calculate(&cuboid));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_principle_output() {
        let report = dry_principle().unwrap();
        assert_eq!(
            report.lines(),
            vec!["Circle Area: 78.53981633974483", "Rectangle Area: 24.0"]
        );
    }

    #[test]
    fn test_solid_principles_output() {
        let report = solid_principles().unwrap();
        assert_eq!(
            report.lines(),
            vec![
                "Circle Area: 78.53981633974483",
                "Rectangle Area: 24.0",
                "Square Area: 16.0",
                "Cuboid Volume: 24.0",
                "Cuboid Area: 52.0",
                "Calculated Area: 52.0",
            ]
        );
    }

    #[test]
    fn test_both_programs_agree_on_shared_shapes() {
        let dry = dry_principle().unwrap();
        let solid = solid_principles().unwrap();

        for label in ["Circle Area", "Rectangle Area"] {
            let (a, b) = (dry.get(label).unwrap(), solid.get(label).unwrap());
            assert!((a - b).abs() < 1e-12, "{label}: {a} vs {b}");
        }
    }
}
