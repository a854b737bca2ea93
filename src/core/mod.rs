pub mod world;
pub mod config;
pub mod events;
pub mod entity;
mod query;

pub use self::world::PhysicsWorld;
pub use self::config::{PairProcessing, SimulationConfig};
pub use self::events::{CollisionEvent, CollisionEventType, CollisionListener, EventQueue};
pub use self::entity::{Footprint, SimulableEntity};
pub use self::query::RaycastHit;

use std::fmt;

/// A unique identifier for a body, assigned at registration and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    /// Identity carried by a body that has not been registered yet
    pub const UNREGISTERED: BodyId = BodyId(0);

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// A unique identifier for a simulable entity in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}
