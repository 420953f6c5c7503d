#[cfg(test)]
mod tests {
    use crate::catalog::kind_profile;
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::{GamePhase, ProjectileKind};
    use crate::events::GameEvent;
    use crate::state::{display_hp, GameStateSnapshot};
    use crate::types::{Position, Rect, SimTime, Velocity};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_projectile_kind_serde() {
        for kind in ProjectileKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: ProjectileKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Playing, GamePhase::Won, GamePhase::Lost];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_phase_helpers() {
        assert!(!GamePhase::Playing.game_over());
        assert!(GamePhase::Won.game_over());
        assert!(GamePhase::Lost.game_over());
        assert!(GamePhase::Won.victory());
        assert!(!GamePhase::Lost.victory());
        assert!(!GamePhase::Playing.victory());
        assert_eq!(GamePhase::default(), GamePhase::Playing);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Launch {
                angle_degrees: 45.0,
                power: 60.0,
            },
            PlayerCommand::Reset,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_player_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::Reset).unwrap();
        assert_eq!(json, r#"{"type":"Reset"}"#);
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::Launched {
                kind: ProjectileKind::SteelSpike,
            },
            GameEvent::Impact {
                kind: ProjectileKind::ShockCapsule,
                damage: 31,
            },
            GameEvent::Missed,
            GameEvent::BuildingDestroyed { shots_left: 2 },
            GameEvent::OutOfShots { hp_remaining: 55 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// The HUD strings are load-bearing; check them word for word.
    #[test]
    fn test_event_status_messages() {
        assert_eq!(
            GameEvent::Launched {
                kind: ProjectileKind::ConcreteBreaker
            }
            .status_message(),
            "Launching Concrete Breaker!"
        );
        assert_eq!(
            GameEvent::Impact {
                kind: ProjectileKind::SteelSpike,
                damage: 27
            }
            .status_message(),
            "Hit! 27 damage done."
        );
        assert_eq!(
            GameEvent::Missed.status_message(),
            "Missed! Try another projectile."
        );
        assert_eq!(
            GameEvent::BuildingDestroyed { shots_left: 1 }.status_message(),
            "Building collapsed! You win with 1 shot(s) remaining."
        );
        assert_eq!(
            GameEvent::OutOfShots { hp_remaining: 55 }.status_message(),
            "Out of projectiles. The building survives with 55 HP."
        );
    }

    #[test]
    fn test_event_shot_summary() {
        let impact = GameEvent::Impact {
            kind: ProjectileKind::ShockCapsule,
            damage: 42,
        };
        assert_eq!(
            impact.shot_summary().unwrap(),
            "Shock Capsule dealt 42 damage"
        );
        assert!(GameEvent::Missed.shot_summary().is_none());
        assert!(GameEvent::BuildingDestroyed { shots_left: 0 }
            .shot_summary()
            .is_none());
    }

    /// Verify the catalog is internally consistent.
    #[test]
    fn test_catalog_sanity() {
        for kind in ProjectileKind::ALL {
            let profile = kind_profile(kind);
            assert!(
                profile.min_damage <= profile.max_damage,
                "{}: min {} > max {}",
                profile.name,
                profile.min_damage,
                profile.max_damage
            );
            assert!(!profile.name.is_empty());
            assert!(profile.color.starts_with('#'));
        }
    }

    #[test]
    fn test_catalog_values() {
        let breaker = kind_profile(ProjectileKind::ConcreteBreaker);
        assert_eq!(breaker.name, "Concrete Breaker");
        assert_eq!(breaker.color, "#f9d66c");
        assert_eq!(breaker.min_damage, 18);
        assert_eq!(breaker.max_damage, 35);

        let capsule = kind_profile(ProjectileKind::ShockCapsule);
        assert_eq!(capsule.min_damage, 5);
        assert_eq!(capsule.max_damage, 55);
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify the building footprint derived from the world constants.
    #[test]
    fn test_building_rect() {
        let rect = building_rect();
        assert_eq!(rect.x, WORLD_WIDTH - 220.0);
        assert_eq!(rect.y, GROUND_Y - 220.0);
        assert_eq!(rect.w, 140.0);
        assert_eq!(rect.h, 220.0);
        // The building stands on the ground line.
        assert_eq!(rect.bottom(), GROUND_Y);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect {
            x: 10.0,
            y: 20.0,
            w: 30.0,
            h: 40.0,
        };
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_display_hp_rounding() {
        assert_eq!(display_hp(100.0), 100);
        assert_eq!(display_hp(54.3), 55);
        assert_eq!(display_hp(0.2), 1);
        assert_eq!(display_hp(0.0), 0);
        assert_eq!(display_hp(-12.5), 0);
    }

    /// Verify Velocity calculations.
    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 4.0);
        assert!((v.speed() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_position_new() {
        let p = Position::new(90.0, GROUND_Y - 8.0);
        assert_eq!(p.x, LAUNCH_X);
        assert_eq!(p.y, LAUNCH_Y);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
