use crate::bodies::{BodyFlags, BodyKind, PhysicsMaterial, PriorFrameFootprint};
use crate::collision::{ContactStates, Crossing};
use crate::core::{BodyId, EntityId};
use crate::error::PhysicsError;
use crate::math::{BoundingBox, Vector2};
use crate::Result;

/// An axis-aligned rigid body attached to exactly one simulable entity.
///
/// The body does not own a position: it moves its entity's world position and
/// reads the entity's box when resolving contacts.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// Identity assigned by the world at registration
    id: BodyId,

    /// Entity this body is attached to, once registered
    owner: Option<EntityId>,

    /// Dynamic or static
    kind: BodyKind,

    /// Always strictly positive
    mass: f32,

    /// Contact response coefficients
    material: PhysicsMaterial,

    flags: BodyFlags,

    /// The body's linear velocity, in units per second
    velocity: Vector2,

    /// Acceleration accumulated since the last tick; drained by every tick
    acceleration: Vector2,

    /// Collision flag per partner body
    contacts: ContactStates,

    /// Box at the end of the previous tick
    prior_footprint: PriorFrameFootprint,
}

impl RigidBody {
    /// Creates a new rigid body.
    ///
    /// Every impulse formula divides by mass, so a mass that is not a positive
    /// finite number is rejected here.
    pub fn new(kind: BodyKind, mass: f32) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "body mass must be positive, got {mass}"
            )));
        }

        Ok(Self {
            id: BodyId::UNREGISTERED,
            owner: None,
            kind,
            mass,
            material: PhysicsMaterial::default(),
            flags: BodyFlags::default(),
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
            contacts: ContactStates::new(),
            prior_footprint: PriorFrameFootprint::default(),
        })
    }

    /// Creates a new dynamic body with the given mass
    pub fn new_dynamic(mass: f32) -> Result<Self> {
        Self::new(BodyKind::Dynamic, mass)
    }

    /// Creates a new static body
    pub fn new_static() -> Self {
        Self {
            id: BodyId::UNREGISTERED,
            owner: None,
            kind: BodyKind::Static,
            mass: 1.0,
            material: PhysicsMaterial::default(),
            flags: BodyFlags::default(),
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
            contacts: ContactStates::new(),
            prior_footprint: PriorFrameFootprint::default(),
        }
    }

    /// Creates a dynamic trigger volume: it is pulled by gravity only if asked to,
    /// reports overlaps and never pushes anything
    pub fn new_trigger(mass: f32) -> Result<Self> {
        Ok(Self::new(BodyKind::Dynamic, mass)?
            .with_gravity(false)
            .with_trigger(true))
    }

    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    pub fn with_gravity(mut self, affected: bool) -> Self {
        self.set_affected_by_gravity(affected);
        self
    }

    pub fn with_trigger(mut self, is_trigger: bool) -> Self {
        self.set_trigger(is_trigger);
        self
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Returns the identity assigned at registration
    pub fn get_id(&self) -> BodyId {
        self.id
    }

    /// Returns the entity this body is attached to
    pub fn get_owner(&self) -> Option<EntityId> {
        self.owner
    }

    pub fn get_kind(&self) -> BodyKind {
        self.kind
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    pub fn get_material(&self) -> &PhysicsMaterial {
        &self.material
    }

    pub fn set_material(&mut self, material: PhysicsMaterial) {
        self.material = material;
    }

    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Returns the acceleration accumulated for the next tick
    pub fn get_acceleration(&self) -> Vector2 {
        self.acceleration
    }

    /// Adds an acceleration to be applied on the next tick
    pub fn apply_acceleration(&mut self, acceleration: Vector2) {
        self.acceleration += acceleration;
    }

    /// Adds a force to be applied on the next tick (a = F / m)
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration += force / self.mass;
    }

    /// Returns whether the body is pulled by gravity. Always false for static bodies.
    pub fn is_affected_by_gravity(&self) -> bool {
        self.is_dynamic() && self.flags.contains(BodyFlags::AFFECTED_BY_GRAVITY)
    }

    pub fn set_affected_by_gravity(&mut self, affected: bool) {
        self.flags.set(BodyFlags::AFFECTED_BY_GRAVITY, affected);
    }

    pub fn is_trigger(&self) -> bool {
        self.flags.contains(BodyFlags::TRIGGER)
    }

    pub fn set_trigger(&mut self, is_trigger: bool) {
        self.flags.set(BodyFlags::TRIGGER, is_trigger);
    }

    /// Returns whether the world ticks this body
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(BodyFlags::ENABLED)
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(BodyFlags::ENABLED, enabled);
    }

    pub fn get_flags(&self) -> BodyFlags {
        self.flags
    }

    /// Returns the per-partner collision flags
    pub fn get_contacts(&self) -> &ContactStates {
        &self.contacts
    }

    /// Whether this body currently flags `other` as colliding
    pub fn is_colliding_with(&self, other: BodyId) -> bool {
        self.contacts.is_colliding(other)
    }

    pub fn get_prior_footprint(&self) -> &PriorFrameFootprint {
        &self.prior_footprint
    }

    pub(crate) fn contacts_mut(&mut self) -> &mut ContactStates {
        &mut self.contacts
    }

    /// Binds the body to its identity and owner and takes the first footprint
    pub(crate) fn register(&mut self, id: BodyId, owner: EntityId, bounds: &BoundingBox) {
        self.id = id;
        self.owner = Some(owner);
        self.prior_footprint.capture(bounds);
    }

    pub(crate) fn unregister(&mut self) {
        self.owner = None;
    }

    /// Queues one tick of gravity if the body is affected by it
    pub(crate) fn apply_gravity(&mut self, gravity_scale: f32) {
        if self.is_affected_by_gravity() {
            self.acceleration.y += gravity_scale;
        }
    }

    /// Semi-implicit Euler step; drains the accumulated acceleration
    pub(crate) fn integrate(&mut self, position: &mut Vector2, delta_time: f32) {
        self.velocity += self.acceleration;
        *position += self.velocity * delta_time;
        self.acceleration = Vector2::zeros();
    }

    /// Pushes the body out of `other` through each crossed edge, in crossing order.
    ///
    /// Per edge: snap the position so the edges touch, then replace the normal
    /// velocity with the partner's push-back and damp the tangent velocity by
    /// this body's friction.
    ///
    /// The push-back scales this body's own incoming velocity on the contact axis
    /// by `other_material.reaction_factor / mass`; the partner's velocity is not read.
    pub(crate) fn resolve_crossing(
        &mut self,
        position: &mut Vector2,
        own: &BoundingBox,
        other: &BoundingBox,
        other_material: &PhysicsMaterial,
        crossing: Crossing,
    ) {
        for edge in crossing.iter() {
            if edge == Crossing::RIGHT {
                position.x = own.center_x_for_right(other.left());
            } else if edge == Crossing::LEFT {
                position.x = own.center_x_for_left(other.right());
            } else if edge == Crossing::BOTTOM {
                position.y = own.center_y_for_bottom(other.top());
            } else if edge == Crossing::TOP {
                position.y = own.center_y_for_top(other.bottom());
            }

            let push_back = other_material.reaction_factor / self.mass;
            let grip = self.material.friction * self.mass;

            if edge.is_horizontal_axis() {
                let incoming = self.velocity.x;
                self.acceleration.x = 0.0;
                self.velocity.x = -incoming * push_back;
                self.velocity.y -= self.velocity.y * grip;
            } else {
                let incoming = self.velocity.y;
                self.acceleration.y = 0.0;
                self.velocity.y = -incoming * push_back;
                self.velocity.x -= self.velocity.x * grip;
            }
        }
    }

    /// Overwrites the prior-frame footprint with the current box
    pub(crate) fn capture_footprint(&mut self, bounds: &BoundingBox) {
        self.prior_footprint.capture(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_mass_is_rejected() {
        assert!(RigidBody::new_dynamic(0.0).is_err());
        assert!(RigidBody::new_dynamic(-2.0).is_err());
        assert!(RigidBody::new_dynamic(f32::NAN).is_err());
        assert!(RigidBody::new_dynamic(0.5).is_ok());
    }

    #[test]
    fn integration_drains_acceleration() {
        let mut body = RigidBody::new_dynamic(2.0).unwrap();
        let mut position = Vector2::zeros();

        body.apply_force(Vector2::new(4.0, 0.0));
        body.apply_acceleration(Vector2::new(0.0, 1.0));
        body.integrate(&mut position, 0.5);

        assert_eq!(body.get_velocity(), Vector2::new(2.0, 1.0));
        assert_eq!(position, Vector2::new(1.0, 0.5));
        assert_eq!(body.get_acceleration(), Vector2::zeros());
    }

    #[test]
    fn static_bodies_ignore_gravity() {
        let mut body = RigidBody::new_static().with_gravity(true);
        body.apply_gravity(9.81);
        assert_eq!(body.get_acceleration(), Vector2::zeros());
    }

    #[test]
    fn push_back_uses_partner_reaction_factor() {
        let mut body = RigidBody::new_dynamic(2.0)
            .unwrap()
            .with_velocity(Vector2::new(4.0, 3.0));
        let mut position = Vector2::new(3.0, 0.0);
        let own = BoundingBox::from_size(position, 2.0, 2.0);
        let wall = BoundingBox::from_size(Vector2::new(5.0, 0.0), 2.0, 10.0);
        let bouncy = PhysicsMaterial::new(0.0, 0.5).unwrap();

        body.resolve_crossing(&mut position, &own, &wall, &bouncy, Crossing::RIGHT);

        assert_eq!(position.x, 3.0);
        assert_eq!(body.get_velocity(), Vector2::new(-1.0, 3.0));
    }
}
