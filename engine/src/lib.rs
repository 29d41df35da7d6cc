//! Character Motor Library
//!
//! A first-person character controller for a dynamic rigid body: mouse
//! look, look-relative force-based movement, jump, crouch and slope-aware
//! ground detection. The host engine keeps ownership of the physics body,
//! the view transforms, the cursor and input polling; the motor reaches
//! them through small capability traits.
//!
//! # Modules
//!
//! - [`player`] - The [`CharacterMotor`] and its locomotion, jump, crouch and grounding parts
//! - [`camera`] - Pointer look (camera pitch, body yaw)
//! - [`input`] - Input sampling trait, button edges and cursor capture
//! - [`physics`] - Rigid body / view capability traits, contacts and a reference integrator
//! - [`config`] - Tunable parameters, JSON loading and validation
//! - [`timer`] - Expiry-timestamp timers polled on the physics tick
//!
//! # Example
//!
//! ```ignore
//! use character_motor::{CharacterMotor, MotorConfig, MotorInput, SimulatedBody};
//! use glam::Vec3;
//!
//! let mut motor = CharacterMotor::new(MotorConfig::default());
//! let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
//! motor.start(&mut body, &mut cursor);
//!
//! let mut input = MotorInput::new();
//! input.set_movement(0.0, 1.0);
//!
//! // Render tick
//! motor.update(&input, &mut body, &mut rig);
//! input.end_frame();
//!
//! // Physics tick
//! motor.fixed_update(0.02, &input, &mut body);
//! body.integrate(0.02);
//! body.resolve_floor(0.0);
//! motor.on_collision_stay(&body.ground_contacts(0.0, 0));
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod timer;

// Re-export the types a host needs to drive the motor
pub use camera::LookController;
pub use config::{ConfigError, MotorConfig};
pub use input::{CursorControl, CursorLock, InputSource, MotorInput};
pub use physics::{ContactManifold, ContactPoint, LayerMask, RigidBody, SimulatedBody, ViewRig};
pub use player::{CharacterMotor, JumpState, Stance};
pub use timer::Deadline;
