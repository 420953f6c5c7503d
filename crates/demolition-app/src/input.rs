//! Line-oriented command parser for the terminal host.

use demolition_core::commands::PlayerCommand;

use crate::game_loop::GameLoopCommand;

/// Parse one line of input. `None` means empty or unrecognized.
///
/// Grammar: `launch <angle_degrees> <power>`, `reset`, `snapshot`,
/// and `quit` (or `exit`).
pub fn parse_line(line: &str) -> Option<GameLoopCommand> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "launch" => {
            let angle_degrees: f32 = parts.next()?.parse().ok()?;
            let power: f32 = parts.next()?.parse().ok()?;
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::Launch {
                angle_degrees,
                power,
            }))
        }
        "reset" => Some(GameLoopCommand::PlayerCommand(PlayerCommand::Reset)),
        "snapshot" => Some(GameLoopCommand::PrintSnapshot),
        "quit" | "exit" => Some(GameLoopCommand::Shutdown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_launch() {
        match parse_line("launch 45 60") {
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::Launch {
                angle_degrees,
                power,
            })) => {
                assert!((angle_degrees - 45.0).abs() < 1e-6);
                assert!((power - 60.0).abs() < 1e-6);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_parse_launch_fractional_with_padding() {
        match parse_line("  launch 37.5 82.25  ") {
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::Launch {
                angle_degrees,
                power,
            })) => {
                assert!((angle_degrees - 37.5).abs() < 1e-6);
                assert!((power - 82.25).abs() < 1e-6);
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_parse_simple_commands() {
        assert!(matches!(
            parse_line("reset"),
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::Reset))
        ));
        assert!(matches!(
            parse_line("snapshot"),
            Some(GameLoopCommand::PrintSnapshot)
        ));
        assert!(matches!(parse_line("quit"), Some(GameLoopCommand::Shutdown)));
        assert!(matches!(parse_line("exit"), Some(GameLoopCommand::Shutdown)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("fire 45 60").is_none());
        assert!(parse_line("launch").is_none());
        assert!(parse_line("launch 45").is_none());
        assert!(parse_line("launch forty five").is_none());
    }
}
