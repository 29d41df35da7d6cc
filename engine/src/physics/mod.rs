//! Physics Module
//!
//! The motor never integrates bodies or detects collisions itself. It talks
//! to the host engine through the capability traits in [`body`] and reads
//! the contacts the engine reports through the types in [`contact`].
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, forces in engine force units.
//! Y is up.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`body`] - `RigidBody` and `ViewRig` host collaborators
//! - [`contact`] - Contact points, manifolds, layer masks and the floor test
//! - [`sim`] - `SimulatedBody`, a small reference integrator for demos and tests

pub mod body;
pub mod contact;
pub mod sim;
pub mod types;

pub use body::{RigidBody, ViewRig};
pub use contact::{ContactManifold, ContactPoint, LayerMask, is_floor, slope_angle};
pub use sim::SimulatedBody;
pub use types::{Quat, Vec2, Vec3};
