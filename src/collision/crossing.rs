use bitflags::bitflags;

use crate::bodies::PriorFrameFootprint;
use crate::math::{BoundingBox, Vector2};

bitflags! {
    /// Edges of the partner box that a body crossed since the previous tick.
    ///
    /// Named after the side of the moving body that made contact: `RIGHT` means
    /// this body's right edge entered the partner through the partner's left edge.
    /// Iteration order (right, left, bottom, top) is the resolution order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Crossing: u8 {
        const RIGHT  = 0x01;
        const LEFT   = 0x02;
        const BOTTOM = 0x04;
        const TOP    = 0x08;
    }
}

impl Crossing {
    /// Compares last tick's footprints with the current boxes.
    ///
    /// An edge fires when the pair was apart on that side last tick and is
    /// penetrating on it now. Several edges can fire at once on corner hits;
    /// none fire when the pair was already overlapping.
    pub fn detect(
        prior_self: &PriorFrameFootprint,
        prior_other: &PriorFrameFootprint,
        current_self: &BoundingBox,
        current_other: &BoundingBox,
    ) -> Self {
        let mut crossing = Self::empty();

        if prior_self.right() <= prior_other.left() && current_self.right() > current_other.left() {
            crossing |= Self::RIGHT;
        }
        if prior_self.left() >= prior_other.right() && current_self.left() < current_other.right() {
            crossing |= Self::LEFT;
        }
        if prior_self.bottom() <= prior_other.top() && current_self.bottom() > current_other.top() {
            crossing |= Self::BOTTOM;
        }
        if prior_self.top() >= prior_other.bottom() && current_self.top() < current_other.bottom() {
            crossing |= Self::TOP;
        }

        crossing
    }

    /// Contact normal pointing from this body toward the partner.
    ///
    /// For several edges the normals are summed; no edges gives the zero vector.
    pub fn direction(self) -> Vector2 {
        let mut direction = Vector2::zeros();
        if self.contains(Self::RIGHT) {
            direction.x += 1.0;
        }
        if self.contains(Self::LEFT) {
            direction.x -= 1.0;
        }
        if self.contains(Self::BOTTOM) {
            direction.y += 1.0;
        }
        if self.contains(Self::TOP) {
            direction.y -= 1.0;
        }
        direction
    }

    /// The same contact seen from the partner's side
    pub fn mirrored(self) -> Self {
        let mut mirrored = Self::empty();
        if self.contains(Self::RIGHT) {
            mirrored |= Self::LEFT;
        }
        if self.contains(Self::LEFT) {
            mirrored |= Self::RIGHT;
        }
        if self.contains(Self::BOTTOM) {
            mirrored |= Self::TOP;
        }
        if self.contains(Self::TOP) {
            mirrored |= Self::BOTTOM;
        }
        mirrored
    }

    /// Whether the edge is a vertical one (resolved on the x axis)
    #[inline]
    pub fn is_horizontal_axis(self) -> bool {
        self.intersects(Self::RIGHT | Self::LEFT)
    }
}
