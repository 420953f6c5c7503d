//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The three projectile types the launcher can fire. Which one comes out
/// of the barrel is the engine's random pick, not the player's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Reliable mid-range damage.
    ConcreteBreaker,
    /// Wide damage spread.
    SteelSpike,
    /// Boom or bust: the widest spread of the three.
    ShockCapsule,
}

impl ProjectileKind {
    /// All kinds, in catalog order. Launch picks uniformly from this.
    pub const ALL: [ProjectileKind; 3] = [
        ProjectileKind::ConcreteBreaker,
        ProjectileKind::SteelSpike,
        ProjectileKind::ShockCapsule,
    ];
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Shots can be fired (subject to ammo and the one-projectile rule).
    #[default]
    Playing,
    /// Building destroyed. Terminal until reset.
    Won,
    /// Out of shots with the building still standing. Terminal until reset.
    Lost,
}

impl GamePhase {
    /// True in either terminal phase.
    pub fn game_over(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    /// True only for a win.
    pub fn victory(self) -> bool {
        matches!(self, GamePhase::Won)
    }
}
