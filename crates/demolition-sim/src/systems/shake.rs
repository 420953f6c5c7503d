//! Building shake countdown.

use hecs::World;

use demolition_core::components::Building;

/// Tick down the shake timer set by impacts.
pub fn run(world: &mut World) {
    for (_entity, building) in world.query_mut::<&mut Building>() {
        if building.shake_ticks > 0 {
            building.shake_ticks -= 1;
        }
    }
}
