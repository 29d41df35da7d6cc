//! Character Motor
//!
//! The first-person controller that ties look, locomotion, jump, crouch and
//! grounding together. The host drives it from its two callback points:
//!
//! - render tick: [`CharacterMotor::update`]
//! - physics tick: [`CharacterMotor::fixed_update`], followed by one
//!   [`CharacterMotor::on_collision_stay`] per contact manifold
//!
//! The motor never owns the body, the view transforms or the cursor. They
//! are borrowed through the capability traits for the duration of one call.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut motor = CharacterMotor::new(MotorConfig::default());
//! motor.start(&mut body, &mut cursor);
//!
//! loop {
//!     motor.update(&input, &mut body, &mut rig);
//!     motor.fixed_update(dt, &input, &mut body);
//!     physics.step(dt);
//!     for manifold in physics.contacts(player) {
//!         motor.on_collision_stay(&manifold);
//!     }
//! }
//! ```

use glam::Vec3;

use crate::camera::LookController;
use crate::config::MotorConfig;
use crate::input::{CursorControl, CursorManager, InputSource};
use crate::physics::{ContactManifold, RigidBody, ViewRig};
use crate::player::crouch::{CrouchController, Stance};
use crate::player::grounding::GroundSensor;
use crate::player::jump::{JumpController, JumpState};
use crate::player::locomotion::{Locomotion, LocomotionReport, TickContext};

/// First-person character controller.
#[derive(Debug, Clone)]
pub struct CharacterMotor {
    config: MotorConfig,
    look: LookController,
    locomotion: Locomotion,
    jump: JumpController,
    crouch: CrouchController,
    ground: GroundSensor,
    cursor: CursorManager,

    /// Jump key held, sampled on the render tick
    jumping: bool,

    /// Motor clock in seconds, advanced by physics ticks
    clock: f64,
    /// Duration of the latest physics tick
    last_fixed_dt: f32,

    started: bool,
}

impl Default for CharacterMotor {
    fn default() -> Self {
        Self::new(MotorConfig::default())
    }
}

impl CharacterMotor {
    /// Create a motor facing +Z, airborne, with the jump ready.
    pub fn new(config: MotorConfig) -> Self {
        Self {
            look: LookController::new(),
            locomotion: Locomotion::from_config(&config),
            jump: JumpController::new(config.jump_force, config.jump_cooldown),
            crouch: CrouchController::new(config.crouch_scale, config.crouch_offset),
            ground: GroundSensor::new(config.max_slope_angle, config.ground_mask),
            cursor: CursorManager::new(),
            jumping: false,
            clock: 0.0,
            last_fixed_dt: config.fixed_timestep,
            started: false,
            config,
        }
    }

    /// Capture the standing scale and lock the cursor. Runs once.
    pub fn start<B: RigidBody + ?Sized>(&mut self, body: &mut B, cursor: &mut dyn CursorControl) {
        if self.started {
            return;
        }
        self.started = true;

        // A crouch engaged before start already holds the standing scale
        if self.crouch.base_scale().is_none() {
            self.crouch.capture_base_scale(body.local_scale());
        }
        self.cursor.capture();
        self.cursor.apply(cursor);
        log::debug!("motor started, base scale {:?}", body.local_scale());
    }

    /// Render tick: look, jump sampling and crouch edges.
    pub fn update<I, B, R>(&mut self, input: &I, body: &mut B, rig: &mut R)
    where
        I: InputSource + ?Sized,
        B: RigidBody + ?Sized,
        R: ViewRig + ?Sized,
    {
        self.look
            .apply_pointer_delta(input.pointer_delta(), self.config.look_scale());
        rig.set_camera_rotation(self.look.camera_rotation());
        rig.set_orientation_rotation(self.look.orientation_rotation());

        self.jumping = input.jump_held();

        if let Some(stance) = self.crouch.update(input.crouch_held(), body) {
            log::trace!("stance {stance:?}, max speed {}", self.max_speed());
        }
    }

    /// Physics tick: advance the clock, fire due timers, then move and jump.
    ///
    /// Returns what locomotion did, or `None` when airborne.
    pub fn fixed_update<I, B>(&mut self, dt: f32, input: &I, body: &mut B) -> Option<LocomotionReport>
    where
        I: InputSource + ?Sized,
        B: RigidBody + ?Sized,
    {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.clock += f64::from(dt);
        self.last_fixed_dt = dt;

        self.jump.poll(self.clock);
        self.ground.poll(self.clock);

        let report = if self.ground.is_grounded() {
            let ctx = TickContext {
                dt,
                grounded: true,
                jumping: self.jumping,
                max_speed: self.max_speed(),
            };
            Some(
                self.locomotion
                    .step(body, &self.look, input.movement_axes(), ctx),
            )
        } else {
            None
        };

        if self.jumping && self.jump.is_ready() {
            self.jump.trigger(
                body,
                self.ground.is_grounded(),
                self.ground.normal(),
                self.clock,
            );
        }

        report
    }

    /// Feed one contact manifold reported for the latest physics tick.
    pub fn on_collision_stay(&mut self, manifold: &ContactManifold) {
        let decay = self.last_fixed_dt * self.config.ground_decay_steps;
        self.ground.on_contact(manifold, self.clock, decay);
    }

    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    pub fn look(&self) -> &LookController {
        &self.look
    }

    /// Body yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.look.yaw()
    }

    /// Camera pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.look.pitch()
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn ground_normal(&self) -> Vec3 {
        self.ground.normal()
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump.state()
    }

    /// Whether the jump key was held on the last render tick.
    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn stance(&self) -> Stance {
        self.crouch.stance()
    }

    pub fn is_crouched(&self) -> bool {
        self.crouch.is_crouched()
    }

    /// Horizontal speed cap for the current stance.
    pub fn max_speed(&self) -> f32 {
        self.config.max_speed * self.crouch.speed_multiplier()
    }

    /// Motor clock in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn is_cursor_captured(&self) -> bool {
        self.cursor.is_captured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CursorLock, MotorInput};
    use crate::physics::SimulatedBody;
    use glam::Quat;

    #[derive(Default)]
    struct NullRig;

    impl ViewRig for NullRig {
        fn set_camera_rotation(&mut self, _rotation: Quat) {}
        fn set_orientation_rotation(&mut self, _rotation: Quat) {}
    }

    #[derive(Default)]
    struct CountingCursor {
        locks: Vec<CursorLock>,
    }

    impl CursorControl for CountingCursor {
        fn set_lock(&mut self, lock: CursorLock) {
            self.locks.push(lock);
        }
        fn set_visible(&mut self, _visible: bool) {}
    }

    #[test]
    fn test_new_motor_state() {
        let motor = CharacterMotor::default();
        assert!(!motor.is_grounded());
        assert_eq!(motor.jump_state(), JumpState::Ready);
        assert_eq!(motor.stance(), Stance::Standing);
        assert_eq!(motor.max_speed(), 10.0);
        assert_eq!(motor.clock(), 0.0);
        assert!(!motor.is_cursor_captured());
    }

    #[test]
    fn test_start_runs_once() {
        let mut motor = CharacterMotor::default();
        let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        let mut cursor = CountingCursor::default();

        motor.start(&mut body, &mut cursor);
        motor.start(&mut body, &mut cursor);
        assert_eq!(cursor.locks, vec![CursorLock::Locked]);
        assert!(motor.is_cursor_captured());
    }

    #[test]
    fn test_no_locomotion_while_airborne() {
        let mut motor = CharacterMotor::default();
        let mut body = SimulatedBody::new(Vec3::new(0.0, 5.0, 0.0), 1.0);
        let mut input = MotorInput::new();
        input.set_movement(0.0, 1.0);

        assert!(motor.fixed_update(0.02, &input, &mut body).is_none());
        assert_eq!(body.pending_force(), Vec3::ZERO);
    }

    #[test]
    fn test_crouch_halves_max_speed() {
        let mut motor = CharacterMotor::default();
        let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        let mut rig = NullRig;
        let mut input = MotorInput::new();

        input.crouch = true;
        motor.update(&input, &mut body, &mut rig);
        assert_eq!(motor.max_speed(), 5.0);

        input.crouch = false;
        motor.update(&input, &mut body, &mut rig);
        assert_eq!(motor.max_speed(), 10.0);
    }

    #[test]
    fn test_start_keeps_scale_from_early_crouch() {
        let mut motor = CharacterMotor::default();
        let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        body.scale = Vec3::new(1.0, 1.5, 1.0);
        let mut rig = NullRig;
        let mut cursor = CountingCursor::default();
        let mut input = MotorInput::new();

        // Crouch engages before the host calls start
        input.crouch = true;
        motor.update(&input, &mut body, &mut rig);
        motor.start(&mut body, &mut cursor);

        input.crouch = false;
        motor.update(&input, &mut body, &mut rig);
        assert_eq!(body.scale, Vec3::new(1.0, 1.5, 1.0));
        assert!((body.position.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_update_samples_jump_and_look() {
        let mut motor = CharacterMotor::default();
        let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        let mut rig = NullRig;
        let mut input = MotorInput::new();

        input.jump = true;
        input.accumulate_pointer(45.0, 0.0);
        motor.update(&input, &mut body, &mut rig);
        assert!(motor.is_jumping());
        assert!((motor.look().yaw() - 45.0).abs() < 1e-4);
        assert_eq!(motor.look().yaw(), motor.yaw());

        input.jump = false;
        input.end_frame();
        motor.update(&input, &mut body, &mut rig);
        assert!(!motor.is_jumping());
    }

    #[test]
    fn test_clock_ignores_bad_dt() {
        let mut motor = CharacterMotor::default();
        let mut body = SimulatedBody::new(Vec3::ZERO, 1.0);
        let input = MotorInput::new();

        motor.fixed_update(0.5, &input, &mut body);
        motor.fixed_update(f32::NAN, &input, &mut body);
        motor.fixed_update(-1.0, &input, &mut body);
        assert_eq!(motor.clock(), 0.5);
    }
}
