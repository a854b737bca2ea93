use crate::math::{BoundingBox, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Snapshot of a body's box as it was at the end of the previous tick.
///
/// Only used to tell which edge a new overlap came through.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PriorFrameFootprint {
    position: Vector2,
    width: f32,
    height: f32,
}

impl PriorFrameFootprint {
    /// Takes a snapshot of the given box
    pub fn from_box(bounds: &BoundingBox) -> Self {
        Self {
            position: bounds.center,
            width: bounds.width(),
            height: bounds.height(),
        }
    }

    /// Overwrites the snapshot with the given box
    pub fn capture(&mut self, bounds: &BoundingBox) {
        *self = Self::from_box(bounds);
    }

    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    pub fn get_width(&self) -> f32 {
        self.width
    }

    pub fn get_height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.width * 0.5
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.width * 0.5
    }

    pub fn top(&self) -> f32 {
        self.position.y - self.height * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height * 0.5
    }

    /// The captured box
    pub fn to_box(&self) -> BoundingBox {
        BoundingBox::from_size(self.position, self.width, self.height)
    }
}

impl Default for PriorFrameFootprint {
    fn default() -> Self {
        Self {
            position: Vector2::zeros(),
            width: 0.0,
            height: 0.0,
        }
    }
}
