//! Headless Motor Simulation
//!
//! Run with: `cargo run --bin motor_sim -- [config.json]`
//!
//! Drives a [`CharacterMotor`] on the reference integrator over a flat floor
//! with a scripted input sequence, logging the body state once per simulated
//! second. Set `RUST_LOG=character_motor=debug` to see state transitions.
//!
//! Script:
//! - 0-2 s: walk forward
//! - 2 s: jump
//! - 3-4 s: crouch walk
//! - 4-5 s: turn right while strafing
//! - 5-6 s: let go and slide to a stop

use std::path::Path;
use std::process::ExitCode;

use character_motor::{
    CharacterMotor, CursorControl, CursorLock, MotorConfig, MotorInput, SimulatedBody, ViewRig,
};
use glam::{Quat, Vec3};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Physics tick (50 Hz)
const FIXED_DT: f32 = 0.02;

/// Simulated duration in seconds
const DURATION: f32 = 6.0;

/// Floor height and collision layer
const FLOOR_HEIGHT: f32 = 0.0;
const FLOOR_LAYER: u8 = 0;

/// Body mass in kilograms
const BODY_MASS: f32 = 1.0;

// ============================================================================
// HOST STAND-INS
// ============================================================================

/// Keeps the last rotations the motor pushed, like a scene graph would.
#[derive(Default)]
struct Rig {
    camera: Quat,
    orientation: Quat,
}

impl ViewRig for Rig {
    fn set_camera_rotation(&mut self, rotation: Quat) {
        self.camera = rotation;
    }

    fn set_orientation_rotation(&mut self, rotation: Quat) {
        self.orientation = rotation;
    }
}

/// Logs cursor changes instead of touching a real window.
struct LogCursor;

impl CursorControl for LogCursor {
    fn set_lock(&mut self, lock: CursorLock) {
        log::info!("cursor lock -> {lock:?}");
    }

    fn set_visible(&mut self, visible: bool) {
        log::info!("cursor visible -> {visible}");
    }
}

// ============================================================================
// SCRIPT
// ============================================================================

/// Scripted input for time `t`.
fn scripted_input(t: f32, input: &mut MotorInput) {
    input.set_movement(0.0, 0.0);
    input.jump = false;
    input.crouch = false;

    match t {
        t if t < 2.0 => input.set_movement(0.0, 1.0),
        t if t < 2.1 => {
            input.set_movement(0.0, 1.0);
            input.jump = true;
        }
        t if t < 3.0 => input.set_movement(0.0, 1.0),
        t if t < 4.0 => {
            input.set_movement(0.0, 1.0);
            input.crouch = true;
        }
        t if t < 5.0 => {
            input.set_movement(1.0, 0.0);
            input.accumulate_pointer(2.0, 0.0);
        }
        _ => {}
    }
}

fn load_config() -> Result<MotorConfig, character_motor::ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => MotorConfig::load(Path::new(&path)),
        None => {
            log::info!("no config given, using defaults");
            Ok(MotorConfig::default())
        }
    }
}

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut motor = CharacterMotor::new(config);
    let mut body = SimulatedBody::new(Vec3::new(0.0, 1.0, 0.0), BODY_MASS);
    let mut rig = Rig::default();
    let mut cursor = LogCursor;
    let mut input = MotorInput::new();

    motor.start(&mut body, &mut cursor);

    let steps = (DURATION / FIXED_DT).round() as u32;
    let steps_per_second = (1.0 / FIXED_DT).round() as u32;
    let mut peak_height = body.position.y;
    let mut peak_speed = 0.0f32;

    for step in 0..steps {
        let t = step as f32 * FIXED_DT;

        // Render tick (one per physics tick here)
        scripted_input(t, &mut input);
        motor.update(&input, &mut body, &mut rig);
        input.end_frame();

        // Physics tick
        motor.fixed_update(FIXED_DT, &input, &mut body);
        body.integrate(FIXED_DT);
        body.resolve_floor(FLOOR_HEIGHT);
        motor.on_collision_stay(&body.ground_contacts(FLOOR_HEIGHT, FLOOR_LAYER));

        let horizontal = Vec3::new(body.velocity.x, 0.0, body.velocity.z).length();
        peak_speed = peak_speed.max(horizontal);
        peak_height = peak_height.max(body.position.y);

        if (step + 1) % steps_per_second == 0 {
            log::info!(
                "t={:.2}s pos=({:.2}, {:.2}, {:.2}) speed={:.2} yaw={:.1} grounded={} jump={:?} stance={:?}",
                motor.clock(),
                body.position.x,
                body.position.y,
                body.position.z,
                horizontal,
                motor.yaw(),
                motor.is_grounded(),
                motor.jump_state(),
                motor.stance(),
            );
        }
    }

    let camera_forward = rig.camera * Vec3::Z;
    let body_forward = rig.orientation * Vec3::Z;
    println!("Simulated {:.2}s", motor.clock());
    println!(
        "  final position: ({:.3}, {:.3}, {:.3})",
        body.position.x, body.position.y, body.position.z
    );
    println!("  peak horizontal speed: {peak_speed:.3} (cap {:.1})", config.max_speed);
    println!("  peak height: {peak_height:.3}");
    println!(
        "  camera forward: ({:.3}, {:.3}, {:.3})",
        camera_forward.x, camera_forward.y, camera_forward.z
    );
    println!(
        "  body forward: ({:.3}, {:.3}, {:.3})",
        body_forward.x, body_forward.y, body_forward.z
    );

    ExitCode::SUCCESS
}
