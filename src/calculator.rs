//! Stateless collaborators that compute derived quantities from shapes.

use crate::shape::{Circle, FlatShape};
use std::f64::consts::PI;

/// Shared area utility: one place that knows how to ask any shape for its area.
pub struct GeometryUtils;

impl GeometryUtils {
    pub fn calculate_area(shape: &dyn FlatShape) -> f64 {
        let area = shape.area();
        tracing::debug!(area, "GeometryUtils::calculate_area");
        area
    }
}

/// Depends only on the [`FlatShape`] capability, never on a concrete shape.
#[derive(Debug, Default, Clone, Copy)]
pub struct AreaCalculator;

impl AreaCalculator {
    pub fn new() -> Self {
        AreaCalculator
    }

    pub fn calculate(&self, shape: &impl FlatShape) -> f64 {
        let area = shape.area();
        tracing::debug!(area, "AreaCalculator::calculate");
        area
    }

    pub fn total(&self, shapes: &[&dyn FlatShape]) -> f64 {
        shapes.iter().map(|shape| shape.area()).sum()
    }
}

/// Knows one thing: the area of a circle, worked out from its radius.
#[derive(Debug, Default, Clone, Copy)]
pub struct CircleCalculator;

impl CircleCalculator {
    pub fn new() -> Self {
        CircleCalculator
    }

    pub fn calculate_area(&self, circle: &Circle) -> f64 {
        let area = PI * circle.radius().powi(2);
        tracing::debug!(area, %circle, "CircleCalculator::calculate_area");
        area
    }
}
