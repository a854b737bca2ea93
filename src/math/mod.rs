mod bounding_box;
mod segment;

pub use bounding_box::BoundingBox;
pub use segment::Segment;

/// 2D vector used for positions, velocities and directions.
///
/// Screen-space convention: `+x` points right, `+y` points down.
pub type Vector2 = nalgebra::Vector2<f32>;
