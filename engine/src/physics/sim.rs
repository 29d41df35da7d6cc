//! Reference Integrator
//!
//! A minimal rigid body used by the demo binary and the tests in place of a
//! real physics engine. It accumulates forces, integrates them with
//! semi-implicit Euler and resolves a flat floor.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
//! body.add_force(Vec3::new(0.0, 0.0, 90.0));
//! body.integrate(0.02);
//! let contacts = body.ground_contacts(0.0, 0);
//! ```

use glam::Vec3;

use super::body::RigidBody;
use super::contact::{ContactManifold, ContactPoint};

/// Default gravity in m/s² (matches common engine defaults).
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Distance above the floor within which the body still reports contact.
const CONTACT_SLOP: f32 = 0.01;

/// A point-mass rigid body with a flat-floor resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedBody {
    pub position: Vec3,
    pub velocity: Vec3,
    pub scale: Vec3,
    /// Mass in kilograms. Must be positive.
    pub mass: f32,
    pub gravity: Vec3,
    /// Height of the feet below the origin at unit Y scale.
    pub foot_offset: f32,
    accumulated_force: Vec3,
}

impl SimulatedBody {
    /// Create a body at rest with unit scale and default gravity.
    pub fn new(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            scale: Vec3::ONE,
            mass: mass.max(f32::EPSILON),
            gravity: DEFAULT_GRAVITY,
            foot_offset: 1.0,
            accumulated_force: Vec3::ZERO,
        }
    }

    /// Disable gravity (useful for isolating force tests).
    pub fn without_gravity(mut self) -> Self {
        self.gravity = Vec3::ZERO;
        self
    }

    /// Force queued since the last integration.
    #[inline]
    pub fn pending_force(&self) -> Vec3 {
        self.accumulated_force
    }

    /// Y of the body's feet.
    #[inline]
    pub fn feet_height(&self) -> f32 {
        self.position.y - self.foot_offset * self.scale.y
    }

    /// Advance one step: v += (F/m + g)·dt, x += v·dt, then clear the force.
    pub fn integrate(&mut self, dt: f32) {
        let acceleration = self.accumulated_force / self.mass + self.gravity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.accumulated_force = Vec3::ZERO;
    }

    /// Keep the feet above a flat floor at `floor_height`, removing velocity into it.
    ///
    /// Returns `true` if the body was resting on or pushed out of the floor.
    pub fn resolve_floor(&mut self, floor_height: f32) -> bool {
        let penetration = floor_height - self.feet_height();
        if penetration >= 0.0 {
            self.position.y += penetration;
            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
            }
            true
        } else {
            -penetration <= CONTACT_SLOP
        }
    }

    /// The manifold a flat floor at `floor_height` would report this tick.
    ///
    /// Empty when the feet are above the contact slop.
    pub fn ground_contacts(&self, floor_height: f32, layer: u8) -> ContactManifold {
        let gap = self.feet_height() - floor_height;
        if gap > CONTACT_SLOP {
            return ContactManifold::new(layer, Vec::new());
        }
        let point = Vec3::new(self.position.x, floor_height, self.position.z);
        ContactManifold::new(layer, vec![ContactPoint::new(point, Vec3::Y)])
    }
}

impl RigidBody for SimulatedBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn add_force(&mut self, force: Vec3) {
        self.accumulated_force += force;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn local_scale(&self) -> Vec3 {
        self.scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_accumulates_until_integrate() {
        let mut body = SimulatedBody::new(Vec3::ZERO, 2.0).without_gravity();
        body.add_force(Vec3::X * 4.0);
        body.add_force(Vec3::X * 6.0);
        assert_eq!(body.pending_force(), Vec3::X * 10.0);

        body.integrate(0.5);
        // a = 10 / 2 = 5, v = 2.5, x = 1.25
        assert!((body.velocity.x - 2.5).abs() < 1e-6);
        assert!((body.position.x - 1.25).abs() < 1e-6);
        assert_eq!(body.pending_force(), Vec3::ZERO);
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut body = SimulatedBody::new(Vec3::new(0.0, 10.0, 0.0), 1.0);
        body.integrate(0.1);
        assert!(body.velocity.y < 0.0);
        assert!(body.position.y < 10.0);
    }

    #[test]
    fn test_resolve_floor() {
        let mut body = SimulatedBody::new(Vec3::new(0.0, 0.5, 0.0), 1.0);
        body.velocity = Vec3::new(1.0, -3.0, 0.0);
        assert!(body.resolve_floor(0.0));
        assert!((body.feet_height()).abs() < 1e-6);
        assert_eq!(body.velocity, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ground_contacts() {
        let body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        let manifold = body.ground_contacts(0.0, 3);
        assert_eq!(manifold.layer, 3);
        assert_eq!(manifold.points.len(), 1);
        assert_eq!(manifold.points[0].normal, Vec3::Y);

        let airborne = SimulatedBody::new(Vec3::new(0.0, 2.0, 0.0), 1.0);
        assert!(airborne.ground_contacts(0.0, 3).points.is_empty());
    }

    #[test]
    fn test_crouched_feet_height() {
        let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        body.scale = Vec3::new(1.0, 0.5, 1.0);
        body.position.y -= 0.5;
        assert!((body.feet_height() - 0.0).abs() < 1e-6);
    }
}
