use crate::core::{EntityId, PhysicsWorld};
use crate::error::PhysicsError;
use crate::math::{BoundingBox, Segment, Vector2};
use crate::Result;

/// An entity hit by a raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The entity that was hit
    pub entity: EntityId,

    /// Intersection with the box edges closest to the ray origin
    pub point: Vector2,

    /// Distance from the ray origin to `point`
    pub distance: f32,
}

impl PhysicsWorld {
    /// Returns every active entity, other than `exclude`, whose box overlaps `query`.
    ///
    /// With a tag, only entities carrying that tag are considered. Entities without
    /// a footprint have no box and are never returned.
    pub fn box_cast(&self, query: &BoundingBox, exclude: Option<EntityId>, tag: Option<&str>) -> Vec<EntityId> {
        self.entities()
            .filter(|entity| Some(entity.get_id()) != exclude && entity.matches(tag))
            .filter(|entity| {
                entity
                    .bounding_box()
                    .map_or(false, |bounds| query.overlaps(&bounds))
            })
            .map(|entity| entity.get_id())
            .collect()
    }

    /// Box-casts with an entity's own current box; the entity itself is never returned
    pub fn box_cast_from(&self, entity: EntityId, tag: Option<&str>) -> Result<Vec<EntityId>> {
        let owner = self.get_entity(entity)?;
        let query = owner
            .bounding_box()
            .ok_or(PhysicsError::MissingFootprint(entity))?;
        Ok(self.box_cast(&query, Some(entity), tag))
    }

    /// Returns every active entity whose box edges the segment from `origin` to
    /// `origin + direction * length` crosses
    pub fn raycast(&self, origin: Vector2, direction: Vector2, length: f32, tag: Option<&str>) -> Vec<EntityId> {
        self.raycast_hits(origin, direction, length, tag)
            .into_iter()
            .map(|hit| hit.entity)
            .collect()
    }

    /// Like `raycast`, with the nearest edge intersection of each hit entity
    pub fn raycast_hits(&self, origin: Vector2, direction: Vector2, length: f32, tag: Option<&str>) -> Vec<RaycastHit> {
        let ray = Segment::from_ray(origin, direction, length);

        self.entities()
            .filter(|entity| entity.matches(tag))
            .filter_map(|entity| {
                let bounds = entity.bounding_box()?;
                bounds
                    .edges()
                    .iter()
                    .filter_map(|edge| ray.intersect(edge))
                    .map(|point| RaycastHit {
                        entity: entity.get_id(),
                        point,
                        distance: (point - origin).norm(),
                    })
                    .min_by(|a, b| a.distance.total_cmp(&b.distance))
            })
            .collect()
    }
}
