mod rigid_body;
mod material;
mod body_type;
mod footprint;

pub use self::rigid_body::RigidBody;
pub use self::material::PhysicsMaterial;
pub use self::body_type::BodyKind;
pub use self::footprint::PriorFrameFootprint;
pub use self::body_flags::BodyFlags;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    #[cfg(feature = "serialize")]
    use serde::{Serialize, Deserialize};

    bitflags! {
        /// Flags for controlling the behavior of rigid bodies
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
        pub struct BodyFlags: u32 {
            /// Body is simulated by the world tick
            const ENABLED = 0x01;

            /// Body is affected by gravity (ignored for static bodies)
            const AFFECTED_BY_GRAVITY = 0x02;

            /// Body reports overlaps but never pushes the bodies it overlaps
            const TRIGGER = 0x04;
        }
    }

    impl Default for BodyFlags {
        fn default() -> Self {
            Self::ENABLED | Self::AFFECTED_BY_GRAVITY
        }
    }
}
