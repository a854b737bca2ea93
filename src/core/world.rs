use std::collections::HashMap;

use tracing::{debug, trace};

use crate::bodies::RigidBody;
use crate::collision::{Crossing, Transition};
use crate::core::{
    BodyId, CollisionEvent, CollisionEventType, EntityId, EventQueue, PairProcessing,
    SimulableEntity, SimulationConfig,
};
use crate::error::PhysicsError;
use crate::math::{BoundingBox, Vector2};
use crate::Result;

/// Registry of simulable entities and their rigid bodies, and the per-tick driver.
///
/// Entities are ticked in the order they were added; bodies are scanned in the
/// order they were registered. Both orders are stable and part of the contract:
/// a body resolved earlier in a tick is seen at its new position by later bodies.
pub struct PhysicsWorld {
    /// All entities, in insertion order
    entities: Vec<SimulableEntity>,

    /// Position of each entity in `entities`
    entity_index: HashMap<EntityId, usize>,

    /// Registered bodies and their owners, in registration order
    bodies: Vec<(BodyId, EntityId)>,

    next_entity_id: u32,

    next_body_id: u32,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Collision events of the last tick
    events: EventQueue,

    /// The total elapsed simulation time
    time: f32,
}

impl PhysicsWorld {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            entities: Vec::new(),
            entity_index: HashMap::new(),
            bodies: Vec::new(),
            // Start at 1, so 0 can represent an unregistered handle
            next_entity_id: 1,
            next_body_id: 1,
            config,
            events: EventQueue::new(),
            time: 0.0,
        }
    }

    /// Replaces the gravity scalar
    pub fn setup(&mut self, gravity_scale: f32) {
        self.config.gravity_scale = gravity_scale;
    }

    pub fn get_gravity_scale(&self) -> f32 {
        self.config.gravity_scale
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Returns the collision events recorded during the last tick
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Adds an entity to the world and returns its id
    pub fn add_entity(&mut self, mut entity: SimulableEntity) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;

        entity.set_id(id);

        self.entity_index.insert(id, self.entities.len());
        self.entities.push(entity);
        id
    }

    /// Removes an entity and its body from the world
    pub fn destroy_entity(&mut self, id: EntityId) -> Result<SimulableEntity> {
        let index = self.index_of(id)?;

        if let Some(body_id) = self.entities[index].body.as_ref().map(RigidBody::get_id) {
            self.unregister_body(body_id);
        }

        let entity = self.entities.remove(index);
        self.rebuild_index();
        debug!(entity = %id, "entity destroyed");

        Ok(entity)
    }

    /// Attaches `body` to an entity and registers it, assigning the next identity.
    ///
    /// The entity must exist, must have a footprint and must not own a body yet.
    pub fn register_body(&mut self, entity: EntityId, mut body: RigidBody) -> Result<BodyId> {
        let index = self.index_of(entity)?;
        let owner = &mut self.entities[index];

        if owner.body.is_some() {
            return Err(PhysicsError::InvalidParameter(format!(
                "{entity} already owns a rigid body"
            )));
        }
        let bounds = owner
            .bounding_box()
            .ok_or(PhysicsError::MissingFootprint(entity))?;

        let id = BodyId(self.next_body_id);
        self.next_body_id += 1;

        body.register(id, entity, &bounds);
        owner.body = Some(body);
        self.bodies.push((id, entity));
        debug!(body = %id, entity = %entity, "body registered");

        Ok(id)
    }

    /// Detaches and returns a body. Unknown or already removed bodies are a no-op.
    ///
    /// Other bodies forget their collision state with the removed body without
    /// firing exit events.
    pub fn unregister_body(&mut self, id: BodyId) -> Option<RigidBody> {
        let position = self.bodies.iter().position(|&(body, _)| body == id)?;
        let (_, owner) = self.bodies.remove(position);

        for entity in &mut self.entities {
            if let Some(body) = entity.body.as_mut() {
                body.contacts_mut().forget(id);
            }
        }

        let index = *self.entity_index.get(&owner)?;
        let mut body = self.entities[index].body.take()?;
        body.unregister();
        debug!(body = %id, entity = %owner, "body unregistered");

        Some(body)
    }

    /// Gets an entity by id
    pub fn get_entity(&self, id: EntityId) -> Result<&SimulableEntity> {
        let index = self.index_of(id)?;
        Ok(&self.entities[index])
    }

    /// Gets an entity mutably by id
    pub fn get_entity_mut(&mut self, id: EntityId) -> Result<&mut SimulableEntity> {
        let index = self.index_of(id)?;
        Ok(&mut self.entities[index])
    }

    /// Gets a registered body by id
    pub fn get_body(&self, id: BodyId) -> Result<&RigidBody> {
        let index = self.body_entity_index(id)?;
        self.entities[index]
            .body
            .as_ref()
            .ok_or_else(|| PhysicsError::ResourceNotFound(id.to_string()))
    }

    /// Gets a registered body mutably by id
    pub fn get_body_mut(&mut self, id: BodyId) -> Result<&mut RigidBody> {
        let index = self.body_entity_index(id)?;
        self.entities[index]
            .body
            .as_mut()
            .ok_or_else(|| PhysicsError::ResourceNotFound(id.to_string()))
    }

    /// Gets the entity that owns a registered body
    pub fn get_body_owner(&self, id: BodyId) -> Result<&SimulableEntity> {
        let index = self.body_entity_index(id)?;
        Ok(&self.entities[index])
    }

    /// Iterates over all entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &SimulableEntity> {
        self.entities.iter()
    }

    /// Iterates over all registered bodies in registration order
    pub fn bodies(&self) -> impl Iterator<Item = &RigidBody> + '_ {
        self.bodies.iter().filter_map(|&(_, owner)| {
            self.entity_index
                .get(&owner)
                .and_then(|&index| self.entities[index].body.as_ref())
        })
    }

    /// Returns the number of entities in the world
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns the number of registered bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advances the simulation by the configured fixed time step
    pub fn step(&mut self) {
        self.tick(self.config.time_step);
    }

    /// Advances every active entity's enabled body by one frame.
    ///
    /// Clears the event queue first, so afterwards it holds this tick's events only.
    pub fn tick(&mut self, delta_time: f32) {
        self.events.clear();

        // Unordered pairs are checked on the later body's turn, so every footprint
        // must still hold the start-of-tick box until the whole pass is done
        let deferred = self.config.pair_processing == PairProcessing::Unordered;

        let mut ticked = Vec::new();
        for index in 0..self.entities.len() {
            if self.is_ticked(index) {
                self.tick_body(index, delta_time);
                if deferred {
                    ticked.push(index);
                } else {
                    self.capture_footprint(index);
                }
            }
        }
        for &index in &ticked {
            self.capture_footprint(index);
        }

        self.time += delta_time;
        trace!(time = self.time, "tick complete");
    }

    /// Whether the entity at `index` has a body the tick advances
    fn is_ticked(&self, index: usize) -> bool {
        let entity = &self.entities[index];
        entity.is_active() && entity.body.as_ref().map_or(false, RigidBody::is_enabled)
    }

    /// Gravity, integration and collision scan for one body
    fn tick_body(&mut self, index: usize, delta_time: f32) {
        let gravity_scale = self.config.gravity_scale;
        let entity = &mut self.entities[index];
        let Some(body) = entity.body.as_mut() else {
            return;
        };

        body.apply_gravity(gravity_scale);
        body.integrate(&mut entity.position, delta_time);
        let dynamic = body.is_dynamic();

        if dynamic {
            let unordered = self.config.pair_processing == PairProcessing::Unordered;
            let partners: Vec<usize> = self
                .bodies
                .iter()
                .filter_map(|(_, owner)| self.entity_index.get(owner).copied())
                .collect();

            for other_index in partners {
                if other_index == index || !self.entities[other_index].is_active() {
                    continue;
                }
                let Some(other) = self.entities[other_index].body.as_ref() else {
                    continue;
                };
                // In unordered mode the pair is left to whichever body moves last
                if unordered && other.is_dynamic() && other_index > index && self.is_ticked(other_index) {
                    continue;
                }

                self.check_pair(index, other_index, unordered);
            }
        }
    }

    /// Snapshots the entity's current box as its body's prior-frame footprint
    fn capture_footprint(&mut self, index: usize) {
        let entity = &mut self.entities[index];
        if let (Some(bounds), Some(body)) = (entity.bounding_box(), entity.body.as_mut()) {
            body.capture_footprint(&bounds);
        }
    }

    /// Overlap test, resolution and event delivery for one ordered pair
    fn check_pair(&mut self, index: usize, other_index: usize, symmetric: bool) {
        let (this, other) = pair_mut(&mut self.entities, index, other_index);
        let (Some(this_box), Some(other_box)) = (this.bounding_box(), other.bounding_box()) else {
            return;
        };
        let (Some(this_body), Some(other_body)) = (this.body.as_mut(), other.body.as_mut()) else {
            return;
        };

        let this_id = this_body.get_id();
        let other_id = other_body.get_id();
        let mirror = symmetric && other_body.is_dynamic();

        this_body.contacts_mut().ensure(other_id);
        let overlapping = this_box.overlaps(&other_box);

        let mut direction = Vector2::zeros();
        if overlapping {
            let crossing = Crossing::detect(
                this_body.get_prior_footprint(),
                other_body.get_prior_footprint(),
                &this_box,
                &other_box,
            );
            direction = crossing.direction();

            // A trigger partner never pushes; a trigger is still pushed by solid partners
            if !crossing.is_empty() {
                if !other_body.is_trigger() {
                    let other_material = *other_body.get_material();
                    this_body.resolve_crossing(&mut this.position, &this_box, &other_box, &other_material, crossing);
                }

                if mirror && !this_body.is_trigger() {
                    let this_material = *this_body.get_material();
                    let resolved_box = BoundingBox::new(this.position, this_box.half_extents);
                    other_body.resolve_crossing(
                        &mut other.position,
                        &other_box,
                        &resolved_box,
                        &this_material,
                        crossing.mirrored(),
                    );
                }
            }
        }

        let transition = this_body.contacts_mut().update(other_id, overlapping);
        if mirror {
            other_body.contacts_mut().update(this_id, overlapping);
        }

        let event_type = match transition {
            Transition::Enter => {
                debug!(body = %this_id, other = %other_id, ?direction, "collision enter");
                if let Some(listener) = this.listener.as_mut() {
                    listener.on_collision_enter(other_id, direction);
                }
                if let Some(listener) = other.listener.as_mut() {
                    listener.on_collision_enter(this_id, -direction);
                }
                CollisionEventType::Enter
            }
            Transition::Stay => {
                trace!(body = %this_id, other = %other_id, "collision stay");
                if let Some(listener) = this.listener.as_mut() {
                    listener.on_collision_stay(other_id);
                }
                if let Some(listener) = other.listener.as_mut() {
                    listener.on_collision_stay(this_id);
                }
                CollisionEventType::Stay
            }
            Transition::Exit => {
                debug!(body = %this_id, other = %other_id, "collision exit");
                if let Some(listener) = this.listener.as_mut() {
                    listener.on_collision_exit(other_id);
                }
                if let Some(listener) = other.listener.as_mut() {
                    listener.on_collision_exit(this_id);
                }
                CollisionEventType::Exit
            }
            Transition::Idle => return,
        };

        self.events.add_collision_event(CollisionEvent {
            event_type,
            body: this_id,
            other: other_id,
            entity: this.get_id(),
            other_entity: other.get_id(),
            direction: (event_type == CollisionEventType::Enter).then_some(direction),
        });
    }

    fn index_of(&self, id: EntityId) -> Result<usize> {
        self.entity_index
            .get(&id)
            .copied()
            .ok_or_else(|| PhysicsError::ResourceNotFound(id.to_string()))
    }

    fn body_entity_index(&self, id: BodyId) -> Result<usize> {
        let owner = self
            .bodies
            .iter()
            .find_map(|&(body, owner)| (body == id).then_some(owner))
            .ok_or_else(|| PhysicsError::ResourceNotFound(id.to_string()))?;
        self.index_of(owner)
    }

    fn rebuild_index(&mut self) {
        self.entity_index = self
            .entities
            .iter()
            .enumerate()
            .map(|(index, entity)| (entity.get_id(), index))
            .collect();
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrows two distinct elements of a slice mutably
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
