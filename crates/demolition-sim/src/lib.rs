//! Simulation engine for the demolition range.
//!
//! Owns the hecs ECS world, advances physics one fixed step per tick,
//! and produces GameStateSnapshots for the host to render.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use demolition_core as core;
pub use engine::SimulationEngine;
