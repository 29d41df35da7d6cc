//! Ground Locomotion
//!
//! Force-based movement relative to the body's facing. Each physics tick the
//! controller:
//!
//! 1. pushes the body down slightly so it hugs slopes,
//! 2. decomposes the current velocity into lateral/forward parts relative to
//!    the body yaw,
//! 3. damps residual velocity on axes the player is not driving,
//! 4. rescales horizontal velocity down to the speed cap (vertical untouched),
//! 5. drops input on an axis already past the cap in that direction,
//! 6. applies the drive forces.
//!
//! Steps 4 and 5 both limit horizontal speed. Step 5 keeps new force from
//! being added past the cap, step 4 corrects whatever the engine integrated
//! anyway (collisions, slopes, the jump impulse).

use glam::{Vec2, Vec3};

use crate::camera::LookController;
use crate::config::MotorConfig;
use crate::physics::RigidBody;

/// Residual relative speed below which no damping is applied.
pub const COUNTER_THRESHOLD: f32 = 0.01;

/// Input magnitude below which an axis counts as released.
pub const INPUT_DEADZONE: f32 = 0.05;

/// Horizontal speed below which the heading is undefined.
const MIN_HEADING_SPEED: f32 = 1.0e-6;

/// Velocity expressed in the body's facing frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelativeVelocity {
    /// Component along the body's right axis.
    pub lateral: f32,
    /// Component along the body's forward axis.
    pub forward: f32,
}

/// Shortest signed difference from `current` to `target` in degrees, in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Decompose `velocity` relative to a body facing `look_yaw` degrees.
///
/// The full speed (vertical included) is projected onto the angle between
/// the facing and the horizontal heading. A body with no horizontal motion
/// has no heading and yields zero on both axes.
pub fn relative_velocity(velocity: Vec3, look_yaw: f32) -> RelativeVelocity {
    let horizontal = Vec2::new(velocity.x, velocity.z).length();
    if !horizontal.is_finite() || horizontal < MIN_HEADING_SPEED {
        return RelativeVelocity::default();
    }

    let move_angle = velocity.x.atan2(velocity.z).to_degrees();
    let u = delta_angle(look_yaw, move_angle);
    let v = 90.0 - u;

    let magnitude = velocity.length();
    RelativeVelocity {
        lateral: magnitude * v.to_radians().cos(),
        forward: magnitude * u.to_radians().cos(),
    }
}

/// Drive-force multiplier: full control on the ground, half in the air.
///
/// The forward axis uses the square of this value, the lateral axis uses it
/// as is.
#[inline]
pub fn control_multiplier(grounded: bool) -> f32 {
    if grounded { 1.0 } else { 0.5 }
}

/// Whether residual velocity `rel` on an axis driven by `input` should be damped.
///
/// True when the axis is idle while still moving, or when input pushes
/// against the current motion.
pub fn needs_counter_movement(input: f32, rel: f32) -> bool {
    (rel.abs() > COUNTER_THRESHOLD && input.abs() < INPUT_DEADZONE)
        || (rel < -COUNTER_THRESHOLD && input > 0.0)
        || (rel > COUNTER_THRESHOLD && input < 0.0)
}

/// Zero an input axis that would push relative speed further past the cap.
pub fn gate_input(input: f32, rel: f32, max_speed: f32) -> f32 {
    if (input > 0.0 && rel > max_speed) || (input < 0.0 && rel < -max_speed) {
        0.0
    } else {
        input
    }
}

/// Rescale the horizontal part of `velocity` to at most `max_speed`.
///
/// Returns `None` when the velocity is already within the cap. The vertical
/// component is never changed.
pub fn cap_horizontal_speed(velocity: Vec3, max_speed: f32) -> Option<Vec3> {
    let horizontal = Vec2::new(velocity.x, velocity.z);
    let speed = horizontal.length();
    if speed.is_nan() || speed <= max_speed {
        return None;
    }
    let scaled = horizontal * (max_speed / speed);
    Some(Vec3::new(scaled.x, velocity.y, scaled.y))
}

/// What one locomotion tick did, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionReport {
    /// Relative velocity measured at the start of the tick.
    pub relative: RelativeVelocity,
    /// Sum of counter-movement forces.
    pub counter_force: Vec3,
    /// Sum of drive forces.
    pub drive_force: Vec3,
    /// Whether the horizontal cap rewrote the velocity.
    pub capped: bool,
    /// Input after gating (`x` = right, `y` = forward).
    pub gated_input: Vec2,
}

/// Per-tick state the locomotion step reads from the motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Physics tick duration in seconds.
    pub dt: f32,
    pub grounded: bool,
    /// Jump key held; suppresses counter-movement.
    pub jumping: bool,
    /// Current horizontal speed cap (halved while crouched).
    pub max_speed: f32,
}

/// Force-based ground movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locomotion {
    move_speed: f32,
    counter_movement: f32,
    down_bias: f32,
}

impl Locomotion {
    pub fn new(move_speed: f32, counter_movement: f32, down_bias: f32) -> Self {
        Self {
            move_speed,
            counter_movement,
            down_bias,
        }
    }

    pub fn from_config(config: &MotorConfig) -> Self {
        Self::new(config.move_speed, config.counter_movement, config.down_bias)
    }

    /// Run one physics tick of movement.
    ///
    /// `input` is the raw movement axes (`x` = right, `y` = forward).
    pub fn step<B: RigidBody + ?Sized>(
        &self,
        body: &mut B,
        look: &LookController,
        input: Vec2,
        ctx: TickContext,
    ) -> LocomotionReport {
        let dt = ctx.dt.max(0.0);
        let forward = look.forward();
        let right = look.right();

        body.add_force(Vec3::NEG_Y * (dt * self.down_bias));

        let relative = relative_velocity(body.velocity(), look.yaw());

        let counter_force = if ctx.grounded && !ctx.jumping {
            self.counter_force(input, relative, forward, right, dt)
        } else {
            Vec3::ZERO
        };
        if counter_force != Vec3::ZERO {
            body.add_force(counter_force);
        }

        let capped = match cap_horizontal_speed(body.velocity(), ctx.max_speed) {
            Some(limited) => {
                body.set_velocity(limited);
                true
            }
            None => false,
        };

        let gated_input = Vec2::new(
            gate_input(input.x, relative.lateral, ctx.max_speed),
            gate_input(input.y, relative.forward, ctx.max_speed),
        );

        let control = control_multiplier(ctx.grounded);
        let forward_force = forward * (gated_input.y * self.move_speed * dt * control * control);
        let right_force = right * (gated_input.x * self.move_speed * dt * control);
        body.add_force(forward_force);
        body.add_force(right_force);

        let report = LocomotionReport {
            relative,
            counter_force,
            drive_force: forward_force + right_force,
            capped,
            gated_input,
        };
        log::trace!("locomotion {report:?}");
        report
    }

    /// Damping forces for the axes that need counter-movement.
    fn counter_force(
        &self,
        input: Vec2,
        relative: RelativeVelocity,
        forward: Vec3,
        right: Vec3,
        dt: f32,
    ) -> Vec3 {
        let mut force = Vec3::ZERO;
        if needs_counter_movement(input.x, relative.lateral) {
            force += right * (self.move_speed * dt * -relative.lateral * self.counter_movement);
        }
        if needs_counter_movement(input.y, relative.forward) {
            force += forward * (self.move_speed * dt * -relative.forward * self.counter_movement);
        }
        force
    }
}
