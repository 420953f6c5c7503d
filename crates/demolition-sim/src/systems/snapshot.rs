//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use demolition_core::catalog::kind_profile;
use demolition_core::components::{Building, Health, Launcher, Lifetime, Particle, Projectile};
use demolition_core::constants::{
    building_rect, GROUND_Y, PARTICLE_ALPHA_FLOOR, PARTICLE_LIFE_MAX, WORLD_HEIGHT, WORLD_WIDTH,
};
use demolition_core::enums::GamePhase;
use demolition_core::events::GameEvent;
use demolition_core::state::*;
use demolition_core::types::{Position, SimTime, Velocity};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    projectile: Option<Entity>,
    message: &str,
    last_shot: &str,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        world: WorldView {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_y: GROUND_Y,
        },
        building: build_building(world),
        launcher: build_launcher(world),
        projectile: projectile.and_then(|entity| build_projectile(world, entity)),
        particles: build_particles(world),
        message: message.to_string(),
        last_shot: last_shot.to_string(),
        events,
    }
}

/// Build BuildingView from the building singleton.
fn build_building(world: &World) -> BuildingView {
    world
        .query::<(&Building, &Health)>()
        .iter()
        .next()
        .map(|(_, (building, health))| BuildingView {
            hp_display: display_hp(health.current),
            hp_fraction: health.current.clamp(0.0, health.max) / health.max,
            shake_ticks: building.shake_ticks,
            rect: building_rect(),
        })
        .unwrap_or_default()
}

/// Build LauncherView from the launcher singleton.
fn build_launcher(world: &World) -> LauncherView {
    world
        .query::<&Launcher>()
        .iter()
        .next()
        .map(|(_, launcher)| LauncherView {
            shots_left: launcher.shots_left,
        })
        .unwrap_or_default()
}

/// Build the in-flight projectile view, if the entity still exists.
fn build_projectile(world: &World, entity: Entity) -> Option<ProjectileView> {
    let mut query = world
        .query_one::<(&Projectile, &Position, &Velocity)>(entity)
        .ok()?;
    let (projectile, pos, vel) = query.get()?;
    Some(ProjectileView {
        kind: projectile.kind,
        x: pos.x,
        y: pos.y,
        vx: vel.vx,
        vy: vel.vy,
        radius: projectile.radius,
        color: kind_profile(projectile.kind).color.to_string(),
    })
}

/// Build particle views, alpha fading with remaining lifetime.
fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Particle, &Position, &Lifetime)>()
        .iter()
        .map(|(_, (particle, pos, lifetime))| ParticleView {
            x: pos.x,
            y: pos.y,
            alpha: (lifetime.remaining_ticks as f32 / PARTICLE_LIFE_MAX as f32)
                .max(PARTICLE_ALPHA_FLOOR),
            color: kind_profile(particle.kind).color.to_string(),
        })
        .collect()
}
