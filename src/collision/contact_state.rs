use std::collections::HashMap;

use crate::core::BodyId;

/// Result of feeding one overlap test into a pair's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The pair started overlapping this tick
    Enter,

    /// The pair was already overlapping and still is
    Stay,

    /// The pair stopped overlapping this tick
    Exit,

    /// The pair was apart and still is
    Idle,
}

/// Per-partner collision flags kept by one body.
///
/// Each body tracks its partners independently, so a dynamic pair has two entries,
/// one on each side. Entries are created lazily on the first overlap check and a
/// missing entry reads as "not colliding".
#[derive(Debug, Clone, Default)]
pub struct ContactStates {
    flags: HashMap<BodyId, bool>,
}

impl ContactStates {
    pub fn new() -> Self {
        Self { flags: HashMap::new() }
    }

    /// Creates a not-colliding entry for `other` if none exists yet
    pub fn ensure(&mut self, other: BodyId) {
        self.flags.entry(other).or_insert(false);
    }

    /// Whether an entry exists for `other`
    pub fn contains(&self, other: BodyId) -> bool {
        self.flags.contains_key(&other)
    }

    /// Whether this body currently considers itself colliding with `other`
    pub fn is_colliding(&self, other: BodyId) -> bool {
        self.flags.get(&other).copied().unwrap_or(false)
    }

    /// Advances the state machine for `other` with this tick's overlap result
    pub fn update(&mut self, other: BodyId, overlapping: bool) -> Transition {
        let flag = self.flags.entry(other).or_insert(false);
        match (*flag, overlapping) {
            (true, true) => Transition::Stay,
            (false, true) => {
                *flag = true;
                Transition::Enter
            }
            (true, false) => {
                *flag = false;
                Transition::Exit
            }
            (false, false) => Transition::Idle,
        }
    }

    /// Drops the entry for a destroyed partner
    pub fn forget(&mut self, other: BodyId) {
        self.flags.remove(&other);
    }

    /// Partners currently flagged as colliding
    pub fn colliding(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.flags
            .iter()
            .filter_map(|(&id, &colliding)| colliding.then_some(id))
    }

    /// Number of partners with an entry
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
