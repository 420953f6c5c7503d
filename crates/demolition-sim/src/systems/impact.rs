//! Impact resolution: hit test, damage roll, debris burst, and the
//! win/lose transition.
//!
//! Runs after the projectile has moved this tick, so the test uses the
//! updated position. The hit test is checked before the out-of-bounds
//! test; a projectile that does both in one tick counts as a hit.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use demolition_core::catalog::kind_profile;
use demolition_core::components::{Building, Health, Launcher, Projectile};
use demolition_core::constants::{
    building_rect, BUILDING_MAX_HP, GROUND_Y, SHAKE_TICKS, WORLD_WIDTH,
};
use demolition_core::enums::GamePhase;
use demolition_core::events::GameEvent;
use demolition_core::state::display_hp;
use demolition_core::types::Position;

use crate::world_setup;

/// Resolve the in-flight projectile against the building and the world
/// bounds. Returns the events produced this tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    projectile: &mut Option<Entity>,
    building: Entity,
    launcher: Entity,
    phase: &mut GamePhase,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let entity = match *projectile {
        Some(entity) => entity,
        None => return events,
    };
    let (pos, radius, kind) = match world.query_one_mut::<(&Position, &Projectile)>(entity) {
        Ok((pos, proj)) => (*pos, proj.radius, proj.kind),
        Err(_) => {
            *projectile = None;
            return events;
        }
    };

    // The building test treats the projectile as an axis-aligned square
    // and ignores the rectangle's bottom edge, so steep arcs dropping in
    // from above always register. The gameplay is tuned around exactly
    // this check.
    let rect = building_rect();
    let hit = pos.x + radius > rect.x && pos.x - radius < rect.right() && pos.y + radius > rect.y;

    if hit {
        let profile = kind_profile(kind);
        let damage = rng.gen_range(profile.min_damage..=profile.max_damage);
        let hp_after = apply_building_damage(world, building, damage);

        world_setup::spawn_impact_burst(world, rng, pos, kind);
        let _ = world.despawn(entity);
        *projectile = None;

        events.push(GameEvent::Impact { kind, damage });

        let shots = shots_left(world, launcher);
        if hp_after <= 0.0 {
            *phase = GamePhase::Won;
            log::info!("building destroyed, {shots} shot(s) in reserve");
            events.push(GameEvent::BuildingDestroyed { shots_left: shots });
        } else if shots == 0 {
            *phase = GamePhase::Lost;
            log::info!("magazine empty, building at {hp_after:.1} hp");
            events.push(GameEvent::OutOfShots {
                hp_remaining: display_hp(hp_after),
            });
        }
    } else if pos.y > GROUND_Y || pos.x > WORLD_WIDTH || pos.x < 0.0 || pos.y < 0.0 {
        let _ = world.despawn(entity);
        *projectile = None;

        events.push(GameEvent::Missed);

        if shots_left(world, launcher) == 0 {
            *phase = GamePhase::Lost;
            let hp = building_hp(world, building);
            log::info!("magazine empty, building at {hp:.1} hp");
            events.push(GameEvent::OutOfShots {
                hp_remaining: display_hp(hp),
            });
        }
    }

    events
}

/// Subtract damage and start the shake timer. Returns the building's hit
/// points after the hit; the killing blow may leave them negative.
fn apply_building_damage(world: &mut World, building: Entity, damage: u32) -> f32 {
    match world.query_one_mut::<(&mut Building, &mut Health)>(building) {
        Ok((bld, health)) => {
            health.current -= damage as f32;
            bld.shake_ticks = SHAKE_TICKS;
            health.current
        }
        Err(_) => BUILDING_MAX_HP,
    }
}

fn shots_left(world: &mut World, launcher: Entity) -> u32 {
    world
        .query_one_mut::<&Launcher>(launcher)
        .map(|l| l.shots_left)
        .unwrap_or(0)
}

fn building_hp(world: &mut World, building: Entity) -> f32 {
    world
        .query_one_mut::<&Health>(building)
        .map(|h| h.current)
        .unwrap_or(0.0)
}
