//! Deadline Timer
//!
//! A cancellable one-shot timer expressed as an expiry timestamp on the
//! motor's own clock. The motor polls its deadlines once per physics tick
//! instead of handing callbacks to the host.

/// One-shot expiry timestamp.
///
/// At most one expiry is pending: arming again replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Deadline {
    expires_at: Option<f64>,
}

impl Deadline {
    /// Create an idle deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule expiry `delay` seconds after `now`, replacing any pending expiry.
    pub fn arm(&mut self, now: f64, delay: f32) {
        self.expires_at = Some(now + f64::from(delay.max(0.0)));
    }

    /// Drop the pending expiry, if any.
    pub fn cancel(&mut self) {
        self.expires_at = None;
    }

    /// Whether an expiry is scheduled.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.expires_at.is_some()
    }

    /// Scheduled expiry time, if any.
    #[inline]
    pub fn expires_at(&self) -> Option<f64> {
        self.expires_at
    }

    /// Returns `true` exactly once, on the first poll at or after the expiry.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.expires_at {
            Some(at) if now >= at => {
                self.expires_at = None;
                true
            }
            _ => false,
        }
    }
}
