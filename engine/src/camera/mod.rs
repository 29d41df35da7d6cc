//! Camera Module
//!
//! Mouse-look for the first-person view. Window-system agnostic: it only
//! deals with angles and the rotations derived from them.

pub mod look;

pub use look::{LookController, PITCH_MAX, PITCH_MIN};
