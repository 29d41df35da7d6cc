//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the motor, re-exported from the glam library.

pub use glam::{Quat, Vec2, Vec3};
