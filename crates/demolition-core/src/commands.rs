//! Player commands sent from the host to the simulation.
//!
//! Commands are applied synchronously; calling the engine methods
//! directly is equivalent. The enum exists for hosts that ship commands
//! over a channel or the wire.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire a projectile at `angle_degrees` above horizontal.
    /// Ignored while the game is over, while a projectile is in flight,
    /// or when no shots remain.
    Launch { angle_degrees: f32, power: f32 },
    /// Restore the initial state: full building, full magazine.
    Reset,
}
