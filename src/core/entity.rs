use std::collections::HashSet;
use std::fmt;

use crate::bodies::RigidBody;
use crate::core::{CollisionListener, EntityId};
use crate::math::{BoundingBox, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Unscaled size of an entity's visual footprint
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
}

impl Footprint {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A game object as far as the physics core is concerned: world placement,
/// footprint, activity, tags, and optionally one rigid body and one listener.
///
/// The entity owns its body; dropping the entity drops the body.
pub struct SimulableEntity {
    id: EntityId,
    pub(crate) position: Vector2,
    scale: Vector2,
    footprint: Option<Footprint>,
    active: bool,
    tags: HashSet<String>,
    pub(crate) body: Option<RigidBody>,
    pub(crate) listener: Option<Box<dyn CollisionListener>>,
}

impl SimulableEntity {
    /// Creates an active entity at `position` with unit scale and no footprint
    pub fn new(position: Vector2) -> Self {
        Self {
            id: EntityId(0),
            position,
            scale: Vector2::new(1.0, 1.0),
            footprint: None,
            active: true,
            tags: HashSet::new(),
            body: None,
            listener: None,
        }
    }

    pub fn with_footprint(mut self, width: f32, height: f32) -> Self {
        self.footprint = Some(Footprint::new(width, height));
        self
    }

    pub fn with_scale(mut self, scale: Vector2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_listener(mut self, listener: impl CollisionListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn get_id(&self) -> EntityId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn get_scale(&self) -> Vector2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vector2) {
        self.scale = scale;
    }

    pub fn get_footprint(&self) -> Option<Footprint> {
        self.footprint
    }

    pub fn set_footprint(&mut self, footprint: Footprint) {
        self.footprint = Some(footprint);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn get_tags(&self) -> &HashSet<String> {
        &self.tags
    }

    /// Returns the attached body
    pub fn get_body(&self) -> Option<&RigidBody> {
        self.body.as_ref()
    }

    /// Returns the attached body mutably
    pub fn get_body_mut(&mut self) -> Option<&mut RigidBody> {
        self.body.as_mut()
    }

    /// Replaces the collision listener
    pub fn set_listener(&mut self, listener: Box<dyn CollisionListener>) {
        self.listener = Some(listener);
    }

    /// Current box, or `None` if the entity has no footprint
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.footprint.map(|footprint| {
            BoundingBox::from_geometry(self.position, self.scale, footprint.width, footprint.height)
        })
    }

    /// Whether the entity takes part in queries filtered by `tag`
    pub(crate) fn matches(&self, tag: Option<&str>) -> bool {
        self.active && tag.map_or(true, |tag| self.has_tag(tag))
    }
}

impl fmt::Debug for SimulableEntity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SimulableEntity")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("scale", &self.scale)
            .field("footprint", &self.footprint)
            .field("active", &self.active)
            .field("tags", &self.tags)
            .field("body", &self.body)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
