//! Entry point: stdin input loop plus the 60Hz game loop thread.

use std::io::{self, BufRead};

use demolition_app::game_loop::{self, GameLoopCommand};
use demolition_app::input;
use demolition_sim::engine::SimConfig;

fn main() {
    env_logger::init();

    // Optional RNG seed as the first argument.
    let config = match std::env::args().nth(1).and_then(|arg| arg.parse().ok()) {
        Some(seed) => SimConfig { seed },
        None => SimConfig::default(),
    };

    println!("demolition range | launch <angle> <power> | reset | snapshot | quit");

    let (cmd_tx, loop_handle) = game_loop::spawn_game_loop(config);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        match input::parse_line(&line) {
            Some(GameLoopCommand::Shutdown) => {
                let _ = cmd_tx.send(GameLoopCommand::Shutdown);
                break;
            }
            Some(command) => {
                if cmd_tx.send(command).is_err() {
                    break;
                }
            }
            None => {
                if !line.trim().is_empty() {
                    println!("commands: launch <angle> <power> | reset | snapshot | quit");
                }
            }
        }
    }

    // Stdin closed or quit: stop the loop and wait for it to finish.
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    if loop_handle.join().is_err() {
        log::error!("game loop thread panicked");
    }
}
