//! Static projectile catalog: display name, color token, and damage
//! bounds per kind.

use crate::enums::ProjectileKind;

/// Fixed profile for one projectile kind.
#[derive(Debug, Clone, Copy)]
pub struct KindProfile {
    /// Display name used in status messages.
    pub name: &'static str,
    /// Render color token (CSS hex, consumed by the host).
    pub color: &'static str,
    /// Minimum damage per hit (inclusive).
    pub min_damage: u32,
    /// Maximum damage per hit (inclusive).
    pub max_damage: u32,
}

/// Look up the profile for a projectile kind.
pub fn kind_profile(kind: ProjectileKind) -> KindProfile {
    match kind {
        ProjectileKind::ConcreteBreaker => KindProfile {
            name: "Concrete Breaker",
            color: "#f9d66c",
            min_damage: 18,
            max_damage: 35,
        },
        ProjectileKind::SteelSpike => KindProfile {
            name: "Steel Spike",
            color: "#86e2ff",
            min_damage: 10,
            max_damage: 45,
        },
        ProjectileKind::ShockCapsule => KindProfile {
            name: "Shock Capsule",
            color: "#ff9ad4",
            min_damage: 5,
            max_damage: 55,
        },
    }
}
