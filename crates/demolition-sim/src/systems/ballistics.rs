//! Ballistic integration for the projectile.
//!
//! Gravity updates velocity first, then the updated velocity moves the
//! position: `vy += GRAVITY; x += vx; y += vy`. Per-tick units, no dt
//! scaling.

use hecs::World;

use demolition_core::components::Projectile;
use demolition_core::constants::GRAVITY;
use demolition_core::types::{Position, Velocity};

/// Apply gravity and integrate motion for every projectile in flight.
pub fn run(world: &mut World) {
    for (_entity, (_projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &mut Velocity)>()
    {
        vel.vy += GRAVITY;
        pos.x += vel.vx;
        pos.y += vel.vy;
    }
}
