use crate::math::{Segment, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned bounding box derived from an entity's position, scale and footprint.
///
/// Boxes are never stored on bodies; they are recomputed whenever geometry is needed.
/// `top` is the smaller y coordinate (screen space, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Center of the box
    pub center: Vector2,

    /// Half the width and half the height of the box
    pub half_extents: Vector2,
}

impl BoundingBox {
    /// Creates a box centered at a position with the given half extents
    #[inline]
    pub fn new(center: Vector2, half_extents: Vector2) -> Self {
        Self { center, half_extents }
    }

    /// Creates a box centered at a position with the given full width and height
    #[inline]
    pub fn from_size(center: Vector2, width: f32, height: f32) -> Self {
        Self::new(center, Vector2::new(width * 0.5, height * 0.5))
    }

    /// Creates the box covered by an entity: center = position, half extents = (footprint * scale) / 2
    #[inline]
    pub fn from_geometry(position: Vector2, scale: Vector2, width: f32, height: f32) -> Self {
        Self::from_size(position, width * scale.x, height * scale.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    #[inline]
    pub fn center(&self) -> Vector2 {
        self.center
    }

    pub fn top_left(&self) -> Vector2 {
        Vector2::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Vector2 {
        Vector2::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Vector2 {
        Vector2::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Vector2 {
        Vector2::new(self.right(), self.bottom())
    }

    pub fn mid_top(&self) -> Vector2 {
        Vector2::new(self.center.x, self.top())
    }

    pub fn mid_bottom(&self) -> Vector2 {
        Vector2::new(self.center.x, self.bottom())
    }

    pub fn mid_left(&self) -> Vector2 {
        Vector2::new(self.left(), self.center.y)
    }

    pub fn mid_right(&self) -> Vector2 {
        Vector2::new(self.right(), self.center.y)
    }

    /// Checks if this box overlaps another.
    ///
    /// Inequalities are strict: boxes that only share an edge do not overlap,
    /// and a zero-area box never overlaps anything.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Checks if this box contains a point, edges included
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.left() && point.x <= self.right() &&
        point.y >= self.top() && point.y <= self.bottom()
    }

    /// The four edges, in order: top, right, bottom, left
    pub fn edges(&self) -> [Segment; 4] {
        [
            Segment::new(self.top_left(), self.top_right()),
            Segment::new(self.top_right(), self.bottom_right()),
            Segment::new(self.bottom_left(), self.bottom_right()),
            Segment::new(self.top_left(), self.bottom_left()),
        ]
    }

    /// Center x that puts this box's left edge at `edge`
    #[inline]
    pub fn center_x_for_left(&self, edge: f32) -> f32 {
        edge + self.half_extents.x
    }

    /// Center x that puts this box's right edge at `edge`
    #[inline]
    pub fn center_x_for_right(&self, edge: f32) -> f32 {
        edge - self.half_extents.x
    }

    /// Center y that puts this box's top edge at `edge`
    #[inline]
    pub fn center_y_for_top(&self, edge: f32) -> f32 {
        edge + self.half_extents.y
    }

    /// Center y that puts this box's bottom edge at `edge`
    #[inline]
    pub fn center_y_for_bottom(&self, edge: f32) -> f32 {
        edge - self.half_extents.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoundingBox::from_size(Vector2::new(0.0, 0.0), 10.0, 10.0);
        let b = BoundingBox::from_size(Vector2::new(10.0, 0.0), 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.contains_point(Vector2::new(5.0, 5.0)));
    }

    #[test]
    fn snapping_helpers_place_edges() {
        let b = BoundingBox::from_size(Vector2::new(3.0, 4.0), 4.0, 6.0);
        assert_eq!(b.center_x_for_right(10.0), 8.0);
        assert_eq!(b.center_x_for_left(10.0), 12.0);
        assert_eq!(b.center_y_for_bottom(50.0), 47.0);
        assert_eq!(b.center_y_for_top(50.0), 53.0);
    }
}
