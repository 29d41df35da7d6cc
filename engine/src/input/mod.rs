//! Input Module
//!
//! The motor samples input through the [`InputSource`] capability trait so it
//! never depends on a particular windowing or input backend. [`MotorInput`] is
//! a plain per-frame snapshot that implements the trait, for hosts that push
//! events rather than poll them.
//!
//! # Example
//!
//! ```rust,ignore
//! use character_motor::input::MotorInput;
//!
//! let mut input = MotorInput::new();
//!
//! // In the event loop
//! input.set_movement(0.0, 1.0);
//! input.accumulate_pointer(4.0, -2.0);
//! input.jump = true;
//!
//! // Render tick
//! motor.update(&input, &mut body, &mut rig);
//! input.end_frame();
//! ```

pub mod cursor_manager;
pub mod edge;

pub use cursor_manager::{CursorControl, CursorLock, CursorManager};
pub use edge::{ButtonEdge, Edge};

use glam::Vec2;

/// Source of raw player input, sampled by the motor each tick.
pub trait InputSource {
    /// Raw movement axes in [-1, 1]: `x` = right, `y` = forward. Not smoothed.
    fn movement_axes(&self) -> Vec2;

    /// Pointer motion since the last render tick: `x` = right, `y` = up. Unbounded.
    fn pointer_delta(&self) -> Vec2;

    /// Whether the jump key is held.
    fn jump_held(&self) -> bool;

    /// Whether the crouch key is held. The motor derives edges from this.
    fn crouch_held(&self) -> bool;
}

/// Snapshot of player input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotorInput {
    /// Movement axes, `x` = right, `y` = forward.
    pub movement: Vec2,
    /// Pointer delta accumulated since the last `end_frame`.
    pub pointer: Vec2,
    pub jump: bool,
    pub crouch: bool,
}

impl MotorInput {
    /// Create an input snapshot with nothing pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movement axes, clamping each to [-1, 1].
    pub fn set_movement(&mut self, right: f32, forward: f32) {
        self.movement = Vec2::new(right.clamp(-1.0, 1.0), forward.clamp(-1.0, 1.0));
    }

    /// Add raw pointer motion. Deltas accumulate until `end_frame`.
    #[inline]
    pub fn accumulate_pointer(&mut self, dx: f32, dy: f32) {
        self.pointer += Vec2::new(dx, dy);
    }

    /// Reset per-frame state (the pointer delta). Held keys and axes persist.
    pub fn end_frame(&mut self) {
        self.pointer = Vec2::ZERO;
    }

    /// Release everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl InputSource for MotorInput {
    fn movement_axes(&self) -> Vec2 {
        self.movement
    }

    fn pointer_delta(&self) -> Vec2 {
        self.pointer
    }

    fn jump_held(&self) -> bool {
        self.jump
    }

    fn crouch_held(&self) -> bool {
        self.crouch
    }
}
