//! Entity spawn factories for setting up the range world.
//!
//! Creates the building, the launcher, projectiles, and impact debris
//! with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use demolition_core::components::*;
use demolition_core::constants::*;
use demolition_core::enums::ProjectileKind;
use demolition_core::types::{Position, Velocity};

/// Set up the range: one building, one launcher. Returns their handles.
pub fn setup_range(world: &mut World) -> (hecs::Entity, hecs::Entity) {
    let building = spawn_building(world);
    let launcher = spawn_launcher(world);
    (building, launcher)
}

/// Spawn the target building at full health.
pub fn spawn_building(world: &mut World) -> hecs::Entity {
    world.spawn((
        Building { shake_ticks: 0 },
        Health {
            current: BUILDING_MAX_HP,
            max: BUILDING_MAX_HP,
        },
    ))
}

/// Spawn the launcher with a full magazine.
pub fn spawn_launcher(world: &mut World) -> hecs::Entity {
    world.spawn((Launcher {
        shots_left: INITIAL_SHOTS,
    },))
}

/// Spawn a projectile at the launch point with the given velocity.
pub fn spawn_projectile(
    world: &mut World,
    kind: ProjectileKind,
    velocity: Velocity,
) -> hecs::Entity {
    world.spawn((
        Projectile {
            kind,
            radius: PROJECTILE_RADIUS,
        },
        Position::new(LAUNCH_X, LAUNCH_Y),
        velocity,
    ))
}

/// Spawn the debris burst for an impact at `origin`. Particles scatter
/// sideways and pop upward before gravity pulls them down.
pub fn spawn_impact_burst(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    origin: Position,
    kind: ProjectileKind,
) {
    for _ in 0..BURST_PARTICLE_COUNT {
        let vx = rng.gen_range(-BURST_VX_SPREAD..BURST_VX_SPREAD);
        let vy = rng.gen_range(BURST_VY_MIN..BURST_VY_MAX);
        let life = rng.gen_range(PARTICLE_LIFE_MIN..=PARTICLE_LIFE_MAX);
        world.spawn((
            Particle { kind },
            Position::new(origin.x, origin.y),
            Velocity::new(vx, vy),
            Lifetime {
                remaining_ticks: life,
            },
        ));
    }
}
