//! Player Crouch System
//!
//! Instant crouch driven by the held crouch key. Pressing the key engages the
//! crouch profile, releasing it restores the standing profile.
//!
//! # Stances
//!
//! - Standing: base scale, full speed cap
//! - Crouching: crouch scale, half speed cap
//!
//! Both transitions shift the body vertically by the same offset so the feet
//! stay planted. There is no interpolation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use character_motor::player::{CrouchController, Stance};
//!
//! let mut crouch = CrouchController::new(config.crouch_scale, config.crouch_offset);
//!
//! // Each render tick:
//! crouch.update(input.crouch_held(), &mut body);
//! let max_speed = standing_max_speed * crouch.speed_multiplier();
//! ```

use glam::Vec3;

use crate::input::{ButtonEdge, Edge};
use crate::physics::RigidBody;

/// Speed multiplier when crouching
pub const CROUCH_SPEED_MULTIPLIER: f32 = 0.5;

/// Player stance states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    /// Standing at the base scale
    #[default]
    Standing,
    /// Crouched at the crouch scale
    Crouching,
}

impl Stance {
    /// Get the speed-cap multiplier for this stance.
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Stance::Standing => 1.0,
            Stance::Crouching => CROUCH_SPEED_MULTIPLIER,
        }
    }
}

/// Manages the crouch profile on the body.
#[derive(Debug, Clone)]
pub struct CrouchController {
    stance: Stance,

    /// Scale restored on release. Captured at start, or on first engage
    base_scale: Option<Vec3>,

    crouch_scale: Vec3,

    /// Vertical shift applied on engage and release
    offset: f32,

    /// Key-down / key-up detection
    button: ButtonEdge,
}

impl CrouchController {
    /// Create a standing controller.
    pub fn new(crouch_scale: Vec3, offset: f32) -> Self {
        Self {
            stance: Stance::Standing,
            base_scale: None,
            crouch_scale,
            offset,
            button: ButtonEdge::new(),
        }
    }

    /// Get the current stance.
    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn is_crouched(&self) -> bool {
        self.stance == Stance::Crouching
    }

    /// Get the speed-cap multiplier for the current stance.
    pub fn speed_multiplier(&self) -> f32 {
        self.stance.speed_multiplier()
    }

    /// Scale restored when standing up, once known.
    pub fn base_scale(&self) -> Option<Vec3> {
        self.base_scale
    }

    /// Remember the body's standing scale.
    pub fn capture_base_scale(&mut self, scale: Vec3) {
        self.base_scale = Some(scale);
    }

    /// Feed the held crouch key for this render tick.
    ///
    /// Returns the stance change, if one happened.
    pub fn update<B: RigidBody + ?Sized>(&mut self, crouch_held: bool, body: &mut B) -> Option<Stance> {
        match self.button.update(crouch_held) {
            Edge::Pressed => self.engage(body).then_some(Stance::Crouching),
            Edge::Released => self.release(body).then_some(Stance::Standing),
            Edge::None => None,
        }
    }

    /// Switch to the crouch profile. Returns `false` if already crouched.
    pub fn engage<B: RigidBody + ?Sized>(&mut self, body: &mut B) -> bool {
        if self.stance == Stance::Crouching {
            return false;
        }
        if self.base_scale.is_none() {
            self.base_scale = Some(body.local_scale());
        }

        body.set_local_scale(self.crouch_scale);
        body.set_position(body.position() - Vec3::Y * self.offset);
        self.stance = Stance::Crouching;
        log::debug!("crouch engaged");
        true
    }

    /// Restore the standing profile. Returns `false` if already standing.
    pub fn release<B: RigidBody + ?Sized>(&mut self, body: &mut B) -> bool {
        if self.stance == Stance::Standing {
            return false;
        }
        if let Some(base) = self.base_scale {
            body.set_local_scale(base);
        }
        body.set_position(body.position() + Vec3::Y * self.offset);
        self.stance = Stance::Standing;
        log::debug!("crouch released");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::SimulatedBody;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn controller() -> CrouchController {
        CrouchController::new(Vec3::new(1.0, 0.5, 1.0), 0.5)
    }

    #[test]
    fn test_stance_speed_multipliers() {
        assert!(approx_eq(Stance::Standing.speed_multiplier(), 1.0));
        assert!(approx_eq(Stance::Crouching.speed_multiplier(), 0.5));
    }

    #[test]
    fn test_default_controller() {
        let crouch = controller();
        assert_eq!(crouch.stance(), Stance::Standing);
        assert!(!crouch.is_crouched());
        assert_eq!(crouch.base_scale(), None);
    }

    #[test]
    fn test_press_engages() {
        let mut crouch = controller();
        let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);

        assert_eq!(crouch.update(true, &mut body), Some(Stance::Crouching));
        assert!(crouch.is_crouched());
        assert_eq!(body.scale, Vec3::new(1.0, 0.5, 1.0));
        assert!(approx_eq(body.position.y, 0.5));
        assert!(approx_eq(crouch.speed_multiplier(), 0.5));
    }

    #[test]
    fn test_holding_does_not_retrigger() {
        let mut crouch = controller();
        let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);

        crouch.update(true, &mut body);
        assert_eq!(crouch.update(true, &mut body), None);
        assert!(approx_eq(body.position.y, 0.5));
    }

    #[test]
    fn test_round_trip_is_exact() {
        let mut crouch = controller();
        let mut body = SimulatedBody::new(Vec3::new(3.0, 1.25, -2.0), 1.0);
        body.scale = Vec3::new(1.0, 1.5, 1.0);
        crouch.capture_base_scale(body.scale);

        crouch.update(true, &mut body);
        assert_eq!(crouch.update(false, &mut body), Some(Stance::Standing));

        assert_eq!(body.scale, Vec3::new(1.0, 1.5, 1.0));
        assert_eq!(body.position, Vec3::new(3.0, 1.25, -2.0));
        assert_eq!(crouch.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_base_scale_captured_on_first_engage() {
        let mut crouch = controller();
        let mut body = SimulatedBody::new(Vec3::ZERO, 1.0);
        body.scale = Vec3::splat(2.0);

        crouch.update(true, &mut body);
        assert_eq!(crouch.base_scale(), Some(Vec3::splat(2.0)));
        crouch.update(false, &mut body);
        assert_eq!(body.scale, Vec3::splat(2.0));
    }

    #[test]
    fn test_redundant_transitions_ignored() {
        let mut crouch = controller();
        let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);

        assert!(!crouch.release(&mut body));
        assert!(crouch.engage(&mut body));
        assert!(!crouch.engage(&mut body));
        assert!(approx_eq(body.position.y, 0.5));
    }
}
