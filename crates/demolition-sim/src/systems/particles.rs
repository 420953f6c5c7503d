//! Debris particle motion and decay.
//!
//! Particles fall under their own softer gravity and despawn when their
//! lifetime runs out. A particle spawned with lifetime L survives exactly
//! L integration ticks.

use hecs::{Entity, World};

use demolition_core::components::{Lifetime, Particle};
use demolition_core::constants::PARTICLE_GRAVITY;
use demolition_core::types::{Position, Velocity};

/// Integrate particle motion and count down lifetimes.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_particle, pos, vel, lifetime)) in
        world.query_mut::<(&Particle, &mut Position, &mut Velocity, &mut Lifetime)>()
    {
        vel.vy += PARTICLE_GRAVITY;
        pos.x += vel.vx;
        pos.y += vel.vy;
        lifetime.remaining_ticks = lifetime.remaining_ticks.saturating_sub(1);
        if lifetime.remaining_ticks == 0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
