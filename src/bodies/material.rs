use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Contact response coefficients attached to a body
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PhysicsMaterial {
    /// Damps the velocity component tangent to a resolved contact, scaled by the
    /// owning body's mass
    pub friction: f32,

    /// Fraction of the incoming normal velocity turned into push-back on bodies that
    /// hit this one, scaled inversely by their mass
    pub reaction_factor: f32,
}

impl PhysicsMaterial {
    /// Creates a new material, rejecting negative or non-finite coefficients
    pub fn new(friction: f32, reaction_factor: f32) -> Result<Self> {
        if !friction.is_finite() || friction < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "friction must be a non-negative number, got {friction}"
            )));
        }
        if !reaction_factor.is_finite() || reaction_factor < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "reaction factor must be a non-negative number, got {reaction_factor}"
            )));
        }

        Ok(Self { friction, reaction_factor })
    }

    /// Slippery surface with no push-back
    pub fn ice() -> Self {
        Self {
            friction: 0.0,
            reaction_factor: 0.0,
        }
    }

    /// Bouncy surface
    pub fn rubber() -> Self {
        Self {
            friction: 0.1,
            reaction_factor: 0.8,
        }
    }

    /// Solid wall that stops bodies and grips slightly
    pub fn wall() -> Self {
        Self {
            friction: 0.05,
            reaction_factor: 0.0,
        }
    }
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self {
            friction: 0.0,
            reaction_factor: 0.0,
        }
    }
}
