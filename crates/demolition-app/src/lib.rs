//! Terminal host for the demolition range.
//!
//! This crate owns no game logic. It reads commands from stdin, runs the
//! simulation engine at the fixed tick rate on a dedicated thread, and
//! prints status changes and snapshots to stdout.

pub mod game_loop;
pub mod input;

pub use demolition_core as core;
