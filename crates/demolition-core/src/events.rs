//! Events emitted by the simulation for host feedback.
//!
//! Each tick's events are drained into that tick's snapshot. The status
//! and last-shot text the HUD shows derive from these; when several
//! events land in one tick the later one wins the status line, so an
//! out-of-shots defeat overrides the miss or hit text from the same tick.

use serde::{Deserialize, Serialize};

use crate::catalog::kind_profile;
use crate::enums::ProjectileKind;

/// Notable things that happened during a tick (or at launch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile left the barrel.
    Launched { kind: ProjectileKind },
    /// The projectile struck the building.
    Impact { kind: ProjectileKind, damage: u32 },
    /// The projectile left the world without hitting anything.
    Missed,
    /// The building's hit points reached zero. Victory.
    BuildingDestroyed { shots_left: u32 },
    /// Magazine empty with the building still standing. Defeat.
    /// `hp_remaining` is the displayed (ceiled) value.
    OutOfShots { hp_remaining: u32 },
}

impl GameEvent {
    /// Status line for the HUD.
    pub fn status_message(&self) -> String {
        match self {
            GameEvent::Launched { kind } => {
                format!("Launching {}!", kind_profile(*kind).name)
            }
            GameEvent::Impact { damage, .. } => {
                format!("Hit! {damage} damage done.")
            }
            GameEvent::Missed => "Missed! Try another projectile.".to_string(),
            GameEvent::BuildingDestroyed { shots_left } => {
                format!("Building collapsed! You win with {shots_left} shot(s) remaining.")
            }
            GameEvent::OutOfShots { hp_remaining } => {
                format!("Out of projectiles. The building survives with {hp_remaining} HP.")
            }
        }
    }

    /// Last-shot summary line, for events that update it.
    pub fn shot_summary(&self) -> Option<String> {
        match self {
            GameEvent::Impact { kind, damage } => Some(format!(
                "{} dealt {damage} damage",
                kind_profile(*kind).name
            )),
            _ => None,
        }
    }
}
