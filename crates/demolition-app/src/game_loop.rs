//! Game loop thread: runs the simulation engine at 60Hz.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; the HUD line goes to
//! stdout whenever the status text changes.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use demolition_core::commands::PlayerCommand;
use demolition_core::constants::TICK_RATE;
use demolition_sim::engine::{SimConfig, SimulationEngine};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Commands sent from the input loop to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Print the full current state as one line of JSON.
    PrintSnapshot,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input loop plus the join handle.
pub fn spawn_game_loop(config: SimConfig) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("demolition-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(config: SimConfig, cmd_rx: mpsc::Receiver<GameLoopCommand>) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut last_message = String::new();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.apply_command(cmd);
                }
                Ok(GameLoopCommand::PrintSnapshot) => print_snapshot(&engine),
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Print the HUD line whenever the status text changes
        if snapshot.message != last_message {
            println!(
                "[t={}] {} | shots: {} | building: {} HP",
                snapshot.time.tick,
                snapshot.message,
                snapshot.launcher.shots_left,
                snapshot.building.hp_display
            );
            last_message = snapshot.message.clone();
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Dump the full current state as one line of JSON.
fn print_snapshot(engine: &SimulationEngine) {
    match serde_json::to_string(&engine.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
