//! Simulation constants and tuning parameters.
//!
//! All velocities and accelerations are in world units per tick at the
//! nominal TICK_RATE. A host running at a different cadence has to
//! rescale them itself; the engine never does.

use crate::types::Rect;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// World width in world units. Pixel-scale, like the reference layout.
pub const WORLD_WIDTH: f32 = 960.0;

/// World height in world units.
pub const WORLD_HEIGHT: f32 = 540.0;

/// Height of the ground line. Everything below it is dirt.
pub const GROUND_Y: f32 = WORLD_HEIGHT - 70.0;

// --- Launcher ---

/// Launcher muzzle x position.
pub const LAUNCH_X: f32 = 90.0;

/// Launcher muzzle y position, slightly above the ground line.
pub const LAUNCH_Y: f32 = GROUND_Y - 8.0;

/// Shots in a full magazine.
pub const INITIAL_SHOTS: u32 = 3;

/// Launch speed is `power / POWER_DIVISOR` world units per tick.
pub const POWER_DIVISOR: f32 = 3.0;

// --- Projectile ---

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f32 = 12.0;

/// Downward acceleration applied to the projectile each tick.
pub const GRAVITY: f32 = 0.28;

// --- Building ---

/// Building footprint width.
pub const BUILDING_WIDTH: f32 = 140.0;

/// Building height above the ground line.
pub const BUILDING_HEIGHT: f32 = 220.0;

/// The building's left edge sits this far in from the right world edge.
pub const BUILDING_RIGHT_OFFSET: f32 = 220.0;

/// Building hit points at full health.
pub const BUILDING_MAX_HP: f32 = 100.0;

/// Shake timer value set on every hit (ticks).
pub const SHAKE_TICKS: u32 = 12;

/// Peak-to-peak shake jitter amplitude, applied by the host renderer
/// while `shake_ticks` is nonzero.
pub const SHAKE_JITTER: f32 = 4.0;

// --- Impact debris ---

/// Particles spawned per impact.
pub const BURST_PARTICLE_COUNT: usize = 25;

/// Downward acceleration applied to debris particles each tick.
pub const PARTICLE_GRAVITY: f32 = 0.18;

/// Horizontal debris velocity range: [-BURST_VX_SPREAD, BURST_VX_SPREAD).
pub const BURST_VX_SPREAD: f32 = 3.0;

/// Vertical debris velocity range: [BURST_VY_MIN, BURST_VY_MAX).
/// Always upward at spawn.
pub const BURST_VY_MIN: f32 = -5.5;

/// Upper bound (exclusive) of the vertical debris velocity range.
pub const BURST_VY_MAX: f32 = -0.5;

/// Debris lifetime range in ticks (inclusive).
pub const PARTICLE_LIFE_MIN: u32 = 24;

/// Upper bound (inclusive) of the debris lifetime range. Also the
/// divisor for the render alpha fade.
pub const PARTICLE_LIFE_MAX: u32 = 42;

/// Minimum render alpha for a fading debris particle.
pub const PARTICLE_ALPHA_FLOOR: f32 = 0.1;

// --- Display ---

/// Status line shown after a reset.
pub const INITIAL_MESSAGE: &str = "Take your first shot!";

/// Last-shot summary before any impact has landed.
pub const LAST_SHOT_NONE: &str = "None yet";

/// Building footprint in world space: standing on the ground line,
/// BUILDING_RIGHT_OFFSET in from the right edge.
pub fn building_rect() -> Rect {
    Rect {
        x: WORLD_WIDTH - BUILDING_RIGHT_OFFSET,
        y: GROUND_Y - BUILDING_HEIGHT,
        w: BUILDING_WIDTH,
        h: BUILDING_HEIGHT,
    }
}
