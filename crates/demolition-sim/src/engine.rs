//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely
//! headless (no rendering, no timers), enabling deterministic testing.

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use demolition_core::commands::PlayerCommand;
use demolition_core::components::Launcher;
use demolition_core::constants::{INITIAL_MESSAGE, LAST_SHOT_NONE, POWER_DIVISOR};
use demolition_core::enums::{GamePhase, ProjectileKind};
use demolition_core::events::GameEvent;
use demolition_core::state::GameStateSnapshot;
use demolition_core::types::{SimTime, Velocity};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    building: Entity,
    launcher: Entity,
    /// The single in-flight projectile, if any.
    projectile: Option<Entity>,
    message: String,
    last_shot: String,
    pending_events: Vec<GameEvent>,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let (building, launcher) = world_setup::setup_range(&mut world);
        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            building,
            launcher,
            projectile: None,
            message: INITIAL_MESSAGE.to_string(),
            last_shot: LAST_SHOT_NONE.to_string(),
            pending_events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Restore the initial state: full building, full magazine, no
    /// projectile or particles. The RNG stream is not reseeded; to replay
    /// a seed from the start, create a fresh engine.
    pub fn reset(&mut self) {
        log::debug!("reset");
        self.world.clear();
        let (building, launcher) = world_setup::setup_range(&mut self.world);
        self.building = building;
        self.launcher = launcher;
        self.projectile = None;
        self.phase = GamePhase::Playing;
        self.time = SimTime::default();
        self.pending_events.clear();
        self.message = INITIAL_MESSAGE.to_string();
        self.last_shot = LAST_SHOT_NONE.to_string();
    }

    /// Fire a projectile at `angle_degrees` above horizontal with the
    /// given power. Silently ignored while the game is over, while a
    /// projectile is already in flight, or when no shots remain.
    pub fn launch(&mut self, angle_degrees: f32, power: f32) {
        if self.phase.game_over() || self.projectile.is_some() {
            return;
        }
        let accepted = match self.world.query_one_mut::<&mut Launcher>(self.launcher) {
            Ok(launcher) if launcher.shots_left > 0 => {
                launcher.shots_left -= 1;
                true
            }
            _ => false,
        };
        if !accepted {
            return;
        }

        let kind = ProjectileKind::ALL[self.rng.gen_range(0..ProjectileKind::ALL.len())];
        let speed = power / POWER_DIVISOR;
        let angle = angle_degrees.to_radians();
        let velocity = Velocity::new(angle.cos() * speed, -angle.sin() * speed);
        self.projectile = Some(world_setup::spawn_projectile(&mut self.world, kind, velocity));

        log::debug!("launch: {kind:?} at {angle_degrees} deg, power {power}");
        self.emit(GameEvent::Launched { kind });
    }

    /// Apply a player command. Commands map directly onto the engine's
    /// public operations; hosts that ship commands over a channel get
    /// identical semantics to direct calls.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Launch {
                angle_degrees,
                power,
            } => self.launch(angle_degrees, power),
            PlayerCommand::Reset => self.reset(),
        }
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot, with the events the tick produced.
    ///
    /// Systems keep running after the game ends so leftover debris and
    /// building shake finish playing out; only launches are gated.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.run_systems();
        self.time.advance();

        let events = std::mem::take(&mut self.pending_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.projectile,
            &self.message,
            &self.last_shot,
            events,
        )
    }

    /// Build a snapshot of the current state without advancing the
    /// simulation. Pending events stay queued for the next `tick()`.
    pub fn snapshot(&self) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.projectile,
            &self.message,
            &self.last_shot,
            Vec::new(),
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Set the building's hit points directly (for tests).
    #[cfg(test)]
    pub fn set_building_hp(&mut self, hp: f32) {
        if let Ok(health) = self
            .world
            .query_one_mut::<&mut demolition_core::components::Health>(self.building)
        {
            health.current = hp;
        }
    }

    /// Set the remaining shot count directly (for tests).
    #[cfg(test)]
    pub fn set_shots_left(&mut self, shots: u32) {
        if let Ok(launcher) = self.world.query_one_mut::<&mut Launcher>(self.launcher) {
            launcher.shots_left = shots;
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Projectile ballistics
        systems::ballistics::run(&mut self.world);
        // 2. Debris motion and decay
        systems::particles::run(&mut self.world, &mut self.despawn_buffer);
        // 3. Building shake countdown
        systems::shake::run(&mut self.world);
        // 4. Impact resolution (hit test, damage, miss/out-of-bounds)
        let events = systems::impact::run(
            &mut self.world,
            &mut self.rng,
            &mut self.projectile,
            self.building,
            self.launcher,
            &mut self.phase,
        );
        for event in events {
            self.emit(event);
        }
    }

    /// Record an event and fold it into the HUD text. Later events in the
    /// same tick overwrite the status line; only impacts touch the
    /// last-shot summary.
    fn emit(&mut self, event: GameEvent) {
        self.message = event.status_message();
        if let Some(summary) = event.shot_summary() {
            self.last_shot = summary;
        }
        self.pending_events.push(event);
    }
}
