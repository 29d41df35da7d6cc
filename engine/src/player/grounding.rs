//! Grounding
//!
//! Decides whether the body stands on walkable floor from the contact
//! manifolds the host reports each physics tick. Losing floor contact does
//! not clear the flag at once: a short decay timer has to run out first, so
//! stepping over a seam doesn't flicker it.

use glam::Vec3;

use crate::physics::{ContactManifold, LayerMask, is_floor};
use crate::timer::Deadline;

/// Grounded flag with decay.
#[derive(Debug, Clone)]
pub struct GroundSensor {
    grounded: bool,
    normal: Vec3,
    /// Set once a decay has been armed; only a floor contact clears it.
    cancelling: bool,
    decay: Deadline,
    max_slope_angle: f32,
    mask: LayerMask,
}

impl GroundSensor {
    pub fn new(max_slope_angle: f32, mask: LayerMask) -> Self {
        Self {
            grounded: false,
            normal: Vec3::Y,
            cancelling: false,
            decay: Deadline::new(),
            max_slope_angle,
            mask,
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Normal of the most recent floor contact (world up until one is seen).
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// When the grounded flag will clear, if a decay is pending.
    pub fn decay_at(&self) -> Option<f64> {
        self.decay.expires_at()
    }

    /// Process one contact manifold at time `now`.
    ///
    /// `decay` is how long grounded survives without another floor contact.
    /// Returns `true` if the manifold carried at least one floor contact.
    pub fn on_contact(&mut self, manifold: &ContactManifold, now: f64, decay: f32) -> bool {
        if !self.mask.contains(manifold.layer) {
            return false;
        }

        let mut found_floor = false;
        for contact in &manifold.points {
            if is_floor(contact.normal, self.max_slope_angle) {
                if !self.grounded {
                    log::debug!("grounded at t={now:.3}");
                }
                self.grounded = true;
                self.cancelling = false;
                self.normal = contact.normal.normalize_or(Vec3::Y);
                self.decay.cancel();
                found_floor = true;
            }
        }

        if !self.cancelling {
            self.cancelling = true;
            self.decay.arm(now, decay);
        }

        found_floor
    }

    /// Clear the grounded flag if the decay is due. Returns `true` when it clears.
    pub fn poll(&mut self, now: f64) -> bool {
        if !self.decay.poll(now) {
            return false;
        }
        let was_grounded = self.grounded;
        self.grounded = false;
        if was_grounded {
            log::debug!("lost ground at t={now:.3}");
        }
        was_grounded
    }
}
