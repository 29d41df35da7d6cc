//! Player Module
//!
//! First-person character control on a dynamic rigid body.
//!
//! # Components
//!
//! - [`CharacterMotor`] - Tick orchestrator the host drives each frame
//! - [`Locomotion`] - Look-relative drive forces, counter-movement and speed cap
//! - [`JumpController`] - Ready/cooling jump with slope-biased force
//! - [`CrouchController`] - Instant crouch profile on key edges
//! - [`GroundSensor`] - Slope-aware grounded flag with decay

pub mod crouch;
pub mod grounding;
pub mod jump;
pub mod locomotion;
pub mod motor;

pub use crouch::{CROUCH_SPEED_MULTIPLIER, CrouchController, Stance};
pub use grounding::GroundSensor;
pub use jump::{JumpController, JumpState, trim_vertical};
pub use locomotion::{
    COUNTER_THRESHOLD, INPUT_DEADZONE, Locomotion, LocomotionReport, RelativeVelocity,
    TickContext, cap_horizontal_speed, control_multiplier, delta_angle, relative_velocity,
};
pub use motor::CharacterMotor;
