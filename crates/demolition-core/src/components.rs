//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;

/// A projectile in flight. At most one exists at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Collision radius in world units.
    pub radius: f32,
}

/// A debris particle thrown by an impact. Color comes from the kind's
/// catalog profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub kind: ProjectileKind,
}

/// Remaining lifetime in ticks. The entity despawns when this hits zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining_ticks: u32,
}

/// The target building (singleton).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    /// Shake timer, set on every hit and counted down each tick.
    pub shake_ticks: u32,
}

/// Hit points. `current` may go negative on the killing blow; only the
/// display layer clamps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

/// The launcher (singleton).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Launcher {
    pub shots_left: u32,
}
