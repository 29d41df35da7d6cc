//! Cursor Manager Module
//!
//! Tracks whether the cursor should be captured for first-person look and
//! pushes that state to the host's cursor through [`CursorControl`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use character_motor::input::CursorManager;
//!
//! let mut cursor = CursorManager::new();
//!
//! // On start: capture the cursor
//! cursor.capture();
//! cursor.apply(&mut host_cursor);
//! ```

/// How the host should confine the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorLock {
    /// Cursor moves freely.
    None,
    /// Cursor is locked to the window center; only raw deltas are reported.
    Locked,
}

/// Host-side cursor, usually backed by the window.
pub trait CursorControl {
    fn set_lock(&mut self, lock: CursorLock);

    fn set_visible(&mut self, visible: bool);
}

/// Tracks the desired cursor state and applies it when it changes.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether the cursor is captured (locked and hidden)
    captured: bool,
    /// Tracks if state changed and needs to be applied to the host
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Create a manager with a free, visible cursor.
    pub fn new() -> Self {
        Self {
            captured: false,
            state_dirty: false,
        }
    }

    /// Check if the cursor is captured.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Check if the state still has to be applied to the host.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Lock and hide the cursor. Call `apply` afterwards.
    pub fn capture(&mut self) {
        if !self.captured {
            self.captured = true;
            self.state_dirty = true;
        }
    }

    /// Unlock and show the cursor. Call `apply` afterwards.
    pub fn release(&mut self) {
        if self.captured {
            self.captured = false;
            self.state_dirty = true;
        }
    }

    /// Desired lock mode for the current state.
    pub fn lock_mode(&self) -> CursorLock {
        if self.captured {
            CursorLock::Locked
        } else {
            CursorLock::None
        }
    }

    /// Push pending state to the host. Returns `true` if anything was applied.
    pub fn apply(&mut self, cursor: &mut dyn CursorControl) -> bool {
        if !self.state_dirty {
            return false;
        }
        cursor.set_lock(self.lock_mode());
        cursor.set_visible(!self.captured);
        self.state_dirty = false;
        log::debug!("cursor {}", if self.captured { "captured" } else { "released" });
        true
    }
}
