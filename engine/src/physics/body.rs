//! Host Collaborators
//!
//! Capability traits through which the motor drives the host engine's rigid
//! body and view transforms. Implement these for your engine's handles; the
//! motor only ever borrows them for the duration of one tick.

use glam::{Quat, Vec3};

/// A dynamic rigid body owned and integrated by the host physics engine.
///
/// Forces are additive and world-space; the engine integrates them on its
/// next step. Velocity writes take effect immediately.
pub trait RigidBody {
    /// Current linear velocity in world space.
    fn velocity(&self) -> Vec3;

    /// Overwrite the linear velocity.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Queue a world-space force for the next integration step.
    fn add_force(&mut self, force: Vec3);

    /// World-space position of the body origin.
    fn position(&self) -> Vec3;

    /// Teleport the body origin.
    fn set_position(&mut self, position: Vec3);

    /// Local scale of the body transform.
    fn local_scale(&self) -> Vec3;

    /// Replace the local scale of the body transform.
    fn set_local_scale(&mut self, scale: Vec3);
}

/// The two transforms the look system drives.
///
/// The camera carries pitch and yaw; the body orientation carries yaw only
/// and defines the forward/right basis used for movement.
pub trait ViewRig {
    fn set_camera_rotation(&mut self, rotation: Quat);

    fn set_orientation_rotation(&mut self, rotation: Quat);
}
