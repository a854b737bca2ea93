#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Kind of rigid body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum BodyKind {
    /// Dynamic bodies receive gravity and scan the world for collisions
    Dynamic,

    /// Static bodies are never pulled by gravity and never scan,
    /// but dynamic bodies still collide with them
    Static,
}
