//! Shapes, capability traits and calculators used by the DRY and SOLID
//! demonstration programs.

pub mod calculator;
pub mod config;
pub mod error;
pub mod report;
pub mod scenario;
pub mod shape;
pub mod telemetry;

pub use calculator::{AreaCalculator, CircleCalculator, GeometryUtils};
pub use error::{ConfigError, Rejection, ShapeError};
pub use report::{Measurement, Report};
pub use shape::{Circle, Cuboid, Dimension, FlatShape, Rectangle, Rectangular, SolidShape, Square};
