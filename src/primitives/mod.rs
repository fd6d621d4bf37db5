//! Floating-point geometric primitives and operations.

mod point2;
mod segment2;

pub use point2::Point2;
pub use segment2::Segment2;
