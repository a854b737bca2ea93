#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How pairs of dynamic bodies are evaluated within one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum PairProcessing {
    /// Every dynamic body checks every other body from its own side.
    ///
    /// A dynamic-dynamic pair is evaluated twice per tick, once per body, each
    /// resolving only itself and each firing its own events on both entities.
    #[default]
    Independent,

    /// A dynamic-dynamic pair is evaluated once, by whichever body is ticked last,
    /// so both bodies have already moved this tick.
    ///
    /// That body resolves both sides (the partner through the mirrored edges) and
    /// every event fires once per entity. Footprints are captured after the whole
    /// pass, so crossings compare start-of-tick boxes with current ones.
    Unordered,
}

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Acceleration added to every gravity-affected dynamic body each tick.
    /// Positive pulls downward in screen space.
    pub gravity_scale: f32,

    /// Frame delta used by `PhysicsWorld::step`
    pub time_step: f32,

    /// Dynamic-dynamic pair evaluation policy
    pub pair_processing: PairProcessing,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_scale: 9.81,
            time_step: 1.0 / 60.0,
            pair_processing: PairProcessing::Independent,
        }
    }
}
