//! Jump
//!
//! Two-state jump with a cooldown. A jump pushes up and away from the ground
//! normal, then trims the vertical velocity so repeated triggers before
//! lift-off can't stack.

use glam::Vec3;

use crate::physics::RigidBody;
use crate::timer::Deadline;

/// Vertical speed below which the post-jump trim zeroes it.
pub const TRIM_THRESHOLD: f32 = 0.5;

/// Jump readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    /// A jump can be triggered.
    #[default]
    Ready,
    /// Waiting for the cooldown to expire.
    Cooling,
}

/// Jump state machine with its cooldown timer.
#[derive(Debug, Clone)]
pub struct JumpController {
    state: JumpState,
    cooldown: Deadline,
    jump_force: f32,
    cooldown_secs: f32,
}

impl JumpController {
    pub fn new(jump_force: f32, cooldown_secs: f32) -> Self {
        Self {
            state: JumpState::Ready,
            cooldown: Deadline::new(),
            jump_force,
            cooldown_secs,
        }
    }

    #[inline]
    pub fn state(&self) -> JumpState {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == JumpState::Ready
    }

    /// When the pending cooldown expires, if cooling.
    pub fn ready_at(&self) -> Option<f64> {
        self.cooldown.expires_at()
    }

    /// Try to jump at time `now`.
    ///
    /// Does nothing unless grounded and ready. Returns `true` if the jump
    /// fired.
    pub fn trigger<B: RigidBody + ?Sized>(
        &mut self,
        body: &mut B,
        grounded: bool,
        ground_normal: Vec3,
        now: f64,
    ) -> bool {
        if !grounded || self.state != JumpState::Ready {
            return false;
        }

        self.state = JumpState::Cooling;

        body.add_force(Vec3::Y * (self.jump_force * 1.5));
        body.add_force(ground_normal * (self.jump_force * 0.5));

        let velocity = body.velocity();
        let trimmed = trim_vertical(velocity.y);
        if trimmed != velocity.y {
            body.set_velocity(Vec3::new(velocity.x, trimmed, velocity.z));
        }

        self.cooldown.arm(now, self.cooldown_secs);
        log::debug!("jump at t={now:.3}, ready again at t={:.3}", now + f64::from(self.cooldown_secs));
        true
    }

    /// Fire the cooldown if it is due. Returns `true` on the tick it resets.
    pub fn poll(&mut self, now: f64) -> bool {
        if self.cooldown.poll(now) {
            self.state = JumpState::Ready;
            log::debug!("jump ready at t={now:.3}");
            true
        } else {
            false
        }
    }

    /// Back to ready with no cooldown pending.
    pub fn reset(&mut self) {
        self.state = JumpState::Ready;
        self.cooldown.cancel();
    }
}

/// Post-jump vertical trim: small or falling speeds are zeroed, rising
/// speeds are halved.
pub fn trim_vertical(vy: f32) -> f32 {
    if vy < TRIM_THRESHOLD { 0.0 } else { vy / 2.0 }
}
