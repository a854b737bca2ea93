use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Finite line segment used by raycasts and box edges
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Start point of the segment
    pub start: Vector2,

    /// End point of the segment
    pub end: Vector2,
}

impl Segment {
    /// Creates a segment between two points
    #[inline]
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// Creates the segment from `origin` to `origin + direction * length`.
    ///
    /// The direction is used as given; pass a unit vector if `length` is meant as a distance.
    #[inline]
    pub fn from_ray(origin: Vector2, direction: Vector2, length: f32) -> Self {
        Self::new(origin, origin + direction * length)
    }

    /// Returns the point at parameter `t` (0 = start, 1 = end)
    #[inline]
    pub fn point_at(&self, t: f32) -> Vector2 {
        self.start + (self.end - self.start) * t
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }

    /// Intersects two segments with the parametric line-line test.
    ///
    /// Returns `None` for parallel or degenerate pairs (`d == 0`) and when either
    /// interpolation parameter falls outside `[0, 1]`.
    pub fn intersect(&self, other: &Self) -> Option<Vector2> {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);
        let (x3, y3) = (other.start.x, other.start.y);
        let (x4, y4) = (other.end.x, other.end.y);

        let d = (x4 - x3) * (y2 - y1) - (y4 - y3) * (x2 - x1);
        if d == 0.0 {
            return None;
        }

        let t = ((y3 - y1) * (x4 - x3) - (x3 - x1) * (y4 - y3)) / d;
        let u = ((y3 - y1) * (x2 - x1) - (x3 - x1) * (y2 - y1)) / d;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            Some(self.point_at(t))
        } else {
            None
        }
    }
}
