//! Game state snapshot: the complete visible state sent to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, ProjectileKind};
use crate::events::GameEvent;
use crate::types::{Rect, SimTime};

/// Complete game state handed to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub world: WorldView,
    pub building: BuildingView,
    pub launcher: LauncherView,
    pub projectile: Option<ProjectileView>,
    pub particles: Vec<ParticleView>,
    /// Current status line.
    pub message: String,
    /// Summary of the most recent landed shot.
    pub last_shot: String,
    /// Events produced by the tick that built this snapshot.
    pub events: Vec<GameEvent>,
}

/// Fixed world geometry, so hosts scale instead of guessing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WorldView {
    pub width: f32,
    pub height: f32,
    pub ground_y: f32,
}

/// Building status for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BuildingView {
    /// Clamped, ceiled hit points for the HUD counter.
    pub hp_display: u32,
    /// Raw-clamped fraction of max hit points, for the HP bar.
    pub hp_fraction: f32,
    /// Remaining shake ticks; nonzero means the renderer jitters the building.
    pub shake_ticks: u32,
    pub rect: Rect,
}

/// Launcher status for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LauncherView {
    pub shots_left: u32,
}

/// The in-flight projectile, if any.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    /// Render color token from the kind's catalog profile.
    pub color: String,
}

/// One debris particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    /// Render alpha, fading with remaining lifetime but floored above zero.
    pub alpha: f32,
    pub color: String,
}

/// Displayed hit points: ceiling of the raw value, floored at zero.
pub fn display_hp(current: f32) -> u32 {
    current.max(0.0).ceil() as u32
}
