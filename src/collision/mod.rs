mod contact_state;
mod crossing;

pub use self::contact_state::{ContactStates, Transition};
pub use self::crossing::Crossing;
