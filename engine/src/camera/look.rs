//! First-Person Look
//!
//! Turns pointer motion into camera pitch and body yaw. The camera carries
//! both angles; the body orientation carries yaw only, so looking up or
//! down never tilts the movement basis.
//!
//! Key features:
//! - Pointer delta scaled by sensitivity × fixed step × multiplier
//! - Yaw accumulates without bound
//! - Pitch clamped to ±90 degrees
//! - No smoothing, instant response
//!
//! Angles are in degrees. At yaw 0 the body faces +Z; positive yaw turns
//! toward +X. Positive pitch tilts the camera down, so moving the pointer up
//! (positive `y`) looks up.

use glam::{EulerRot, Quat, Vec2, Vec3};

/// Lowest allowed pitch in degrees (looking straight up).
pub const PITCH_MIN: f32 = -90.0;
/// Highest allowed pitch in degrees (looking straight down).
pub const PITCH_MAX: f32 = 90.0;

/// Camera pitch and body yaw driven by pointer motion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookController {
    /// Body yaw in degrees, unbounded.
    yaw: f32,
    /// Camera pitch in degrees, within [PITCH_MIN, PITCH_MAX].
    pitch: f32,
}

impl LookController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start facing `yaw` degrees.
    pub fn with_yaw(yaw: f32) -> Self {
        Self { yaw, pitch: 0.0 }
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set pitch directly, clamped to the limits.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Apply one render tick of pointer motion.
    ///
    /// `scale` converts raw delta units to degrees, see
    /// [`MotorConfig::look_scale`](crate::config::MotorConfig::look_scale).
    pub fn apply_pointer_delta(&mut self, delta: Vec2, scale: f32) {
        let dx = delta.x * scale;
        let dy = delta.y * scale;
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }

        self.yaw += dx;
        self.pitch = (self.pitch - dy).clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Local rotation for the camera transform: yaw, then pitch, no roll.
    pub fn camera_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }

    /// Local rotation for the body-orientation transform (yaw only).
    pub fn orientation_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
    }

    /// Horizontal forward direction of the body.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.orientation_rotation() * Vec3::Z
    }

    /// Horizontal right direction of the body.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.orientation_rotation() * Vec3::X
    }

    /// Reset to facing +Z, level.
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let look = LookController::new();
        assert_eq!(look.yaw(), 0.0);
        assert_eq!(look.pitch(), 0.0);
    }

    #[test]
    fn test_pointer_right_increases_yaw() {
        let mut look = LookController::new();
        look.apply_pointer_delta(Vec2::new(3.0, 0.0), 1.0);
        assert!((look.yaw() - 3.0).abs() < 1e-6);
        assert_eq!(look.pitch(), 0.0);
    }

    #[test]
    fn test_pointer_up_looks_up() {
        let mut look = LookController::new();
        look.apply_pointer_delta(Vec2::new(0.0, 2.0), 1.5);
        assert!((look.pitch() - (-3.0)).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_clamped_both_ways() {
        let mut look = LookController::new();
        look.apply_pointer_delta(Vec2::new(0.0, 100000.0), 1.0);
        assert_eq!(look.pitch(), PITCH_MIN);

        look.apply_pointer_delta(Vec2::new(0.0, -100000.0), 1.0);
        assert_eq!(look.pitch(), PITCH_MAX);
    }

    #[test]
    fn test_pitch_stays_in_range_under_many_deltas() {
        let mut look = LookController::new();
        for i in 0..500 {
            let dy = ((i * 37) % 101) as f32 - 40.0;
            look.apply_pointer_delta(Vec2::new(1.0, dy), 1.0);
            assert!(look.pitch() >= PITCH_MIN && look.pitch() <= PITCH_MAX);
        }
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut look = LookController::new();
        for _ in 0..10 {
            look.apply_pointer_delta(Vec2::new(100.0, 0.0), 1.0);
        }
        assert!((look.yaw() - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_non_finite_delta_ignored() {
        let mut look = LookController::new();
        look.apply_pointer_delta(Vec2::new(f32::NAN, 1.0), 1.0);
        assert_eq!(look.yaw(), 0.0);
        assert_eq!(look.pitch(), 0.0);
    }

    #[test]
    fn test_basis_at_zero_yaw() {
        let look = LookController::new();
        assert!((look.forward() - Vec3::Z).length() < 1e-6);
        assert!((look.right() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_basis_at_ninety_yaw() {
        let look = LookController::with_yaw(90.0);
        assert!((look.forward() - Vec3::X).length() < 1e-5);
        assert!((look.right() - (-Vec3::Z)).length() < 1e-5);
    }

    #[test]
    fn test_camera_pitch_does_not_tilt_orientation() {
        let mut look = LookController::with_yaw(30.0);
        look.set_pitch(45.0);

        // Orientation forward stays horizontal
        assert!(look.forward().y.abs() < 1e-6);

        // Camera forward tilts down for positive pitch
        let camera_forward = look.camera_rotation() * Vec3::Z;
        assert!(camera_forward.y < -0.5);
        // and shares the heading of the body
        let flat = Vec3::new(camera_forward.x, 0.0, camera_forward.z).normalize();
        assert!((flat - look.forward()).length() < 1e-5);
    }

    #[test]
    fn test_set_pitch_clamped() {
        let mut look = LookController::new();
        look.set_pitch(500.0);
        assert_eq!(look.pitch(), PITCH_MAX);
    }

    #[test]
    fn test_reset() {
        let mut look = LookController::new();
        look.apply_pointer_delta(Vec2::new(5.0, 5.0), 1.0);
        look.reset();
        assert_eq!(look, LookController::new());
    }
}
