use crate::core::{BodyId, EntityId};
use crate::math::Vector2;
use std::collections::VecDeque;

/// Collision callbacks implemented by game objects.
///
/// The world calls these on the entity that owns each body of a pair. All methods
/// default to doing nothing, so an implementor only overrides what it needs.
pub trait CollisionListener {
    /// The pair started overlapping. `direction` points from this entity toward `other`
    /// along the crossed edges, or is zero when no edge crossing was detected.
    fn on_collision_enter(&mut self, other: BodyId, direction: Vector2) {
        let _ = (other, direction);
    }

    /// The pair is still overlapping
    fn on_collision_stay(&mut self, other: BodyId) {
        let _ = other;
    }

    /// The pair stopped overlapping
    fn on_collision_exit(&mut self, other: BodyId) {
        let _ = other;
    }
}

/// Types of collision events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEventType {
    /// Bodies have just started colliding
    Enter,

    /// Bodies are still colliding
    Stay,

    /// Bodies have just stopped colliding
    Exit,
}

/// A collision transition, as seen by the body whose scan produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// The type of collision event
    pub event_type: CollisionEventType,

    /// The body whose scan detected the transition
    pub body: BodyId,

    /// The partner body
    pub other: BodyId,

    /// Entity owning `body`
    pub entity: EntityId,

    /// Entity owning `other`
    pub other_entity: EntityId,

    /// Contact direction from `body` toward `other` (Enter events only)
    pub direction: Option<Vector2>,
}

/// Collision events recorded during the last tick
#[derive(Debug, Default)]
pub struct EventQueue {
    collision_events: VecDeque<CollisionEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            collision_events: VecDeque::new(),
        }
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    /// Gets the next collision event from the queue
    pub fn next_collision_event(&mut self) -> Option<CollisionEvent> {
        self.collision_events.pop_front()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.collision_events.len()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
    }

    /// Iterates over the recorded events in the order they fired
    pub fn iter(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    /// Gets all collision events of a specific type
    pub fn get_collision_events_of_type(&self, event_type: CollisionEventType) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all collision events involving a specific body, on either side
    pub fn get_collision_events_for_body(&self, body: BodyId) -> Vec<&CollisionEvent> {
        self.collision_events
            .iter()
            .filter(|e| e.body == body || e.other == body)
            .collect()
    }
}
