//! Axis-aligned 2D physics core for frame-stepped games.
//!
//! Each tick integrates dynamic bodies, scans every other body for box overlap,
//! pushes bodies out through the edge they crossed since the previous tick and
//! reports enter/stay/exit transitions to the owning entities.

pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;

/// Re-export common types for easier usage
pub use crate::core::{
    BodyId, CollisionListener, EntityId, PairProcessing, PhysicsWorld, SimulableEntity,
    SimulationConfig,
};
pub use crate::bodies::{BodyKind, PhysicsMaterial, RigidBody};
pub use crate::math::{BoundingBox, Vector2};

/// Error types for the physics engine
pub mod error {
    use crate::core::EntityId;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("{0} has no footprint to derive a bounding box from")]
        MissingFootprint(EntityId),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
