//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over the hecs world. They own no state;
//! everything lives in components, or on the engine for scalar state.

pub mod ballistics;
pub mod impact;
pub mod particles;
pub mod shake;
pub mod snapshot;
