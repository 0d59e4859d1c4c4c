//! Platform abstraction layer
//!
//! The game core only needs three things from its host:
//! - an input snapshot per frame
//! - somewhere to present the frame's scene and events
//! - a frame clock (see [`time`])
//!
//! [`run`] ties them together in a single-threaded loop:
//! input → quit check → tick → present → wait.

pub mod headless;
pub mod input;
pub mod time;

pub use headless::HeadlessFrontend;
pub use input::InputSnapshot;
pub use time::{FrameClock, Pacing};

use crate::config::{ConfigError, GameConfig};
use crate::renderer::Scene;
use crate::sim::{GameEvent, World, tick};

/// A window/input host for the game
pub trait Frontend {
    /// Sample input for the coming frame
    fn poll_input(&mut self) -> InputSnapshot;

    /// Show the frame that was just simulated
    fn present(&mut self, scene: &Scene, events: &[GameEvent]);
}

/// Totals gathered over a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub bricks_destroyed: u64,
    pub lives_lost: u64,
    pub stage_clears: u32,
    pub game_overs: u32,
    /// Highest score reached in any round
    pub best_score: u64,
}

impl RunSummary {
    fn record(&mut self, events: &[GameEvent], world: &World) {
        self.frames += 1;
        for event in events {
            match event {
                GameEvent::BrickDestroyed { .. } => self.bricks_destroyed += 1,
                GameEvent::LifeLost { .. } => self.lives_lost += 1,
                GameEvent::StageClear { .. } => self.stage_clears += 1,
                GameEvent::GameOver { .. } => self.game_overs += 1,
                GameEvent::BallLaunched | GameEvent::PaddleHit { .. } | GameEvent::RoundReset => {}
            }
        }
        self.best_score = self.best_score.max(world.score());
    }
}

/// Run the game until the frontend asks to quit
///
/// Fails only if `config` is unplayable, before any frame runs.
pub fn run<F: Frontend>(
    frontend: &mut F,
    config: GameConfig,
    pacing: Pacing,
) -> Result<RunSummary, ConfigError> {
    let mut world = World::new(config)?;
    let mut clock = FrameClock::new(world.config.frame_duration(), pacing);
    let mut summary = RunSummary::default();

    log::info!(
        "Starting frame loop at {} fps ({:?})",
        world.config.fps,
        pacing
    );

    // Initial frame so the frontend has something to show before input
    frontend.present(&Scene::from_world(&world), &[]);

    loop {
        let input = frontend.poll_input();
        if input.should_quit() {
            log::info!("Quit requested after {} frames", summary.frames);
            break;
        }

        let events = tick(&mut world, &input.to_tick_input());
        summary.record(&events, &world);
        frontend.present(&Scene::from_world(&world), &events);

        clock.wait();
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of inputs, then quits
    struct ScriptedFrontend {
        inputs: Vec<InputSnapshot>,
        presented: Vec<Scene>,
        events: Vec<GameEvent>,
    }

    impl Frontend for ScriptedFrontend {
        fn poll_input(&mut self) -> InputSnapshot {
            if self.inputs.is_empty() {
                InputSnapshot {
                    quit_requested: true,
                    ..Default::default()
                }
            } else {
                self.inputs.remove(0)
            }
        }

        fn present(&mut self, scene: &Scene, events: &[GameEvent]) {
            self.presented.push(scene.clone());
            self.events.extend_from_slice(events);
        }
    }

    #[test]
    fn test_run_quits_on_escape_before_tick() {
        let mut frontend = ScriptedFrontend {
            inputs: vec![
                InputSnapshot::default(),
                InputSnapshot {
                    escape_pressed: true,
                    primary_button: true,
                    ..Default::default()
                },
                InputSnapshot {
                    primary_button: true,
                    ..Default::default()
                },
            ],
            presented: Vec::new(),
            events: Vec::new(),
        };
        let summary = run(&mut frontend, GameConfig::default(), Pacing::Unlimited).unwrap();
        assert_eq!(summary.frames, 1);
        // Launch on the escape frame never reached the simulation
        assert!(frontend.events.is_empty());
        // Initial scene plus one simulated frame
        assert_eq!(frontend.presented.len(), 2);
    }

    #[test]
    fn test_run_launch_and_events() {
        let mut frontend = ScriptedFrontend {
            inputs: vec![
                InputSnapshot {
                    primary_button: true,
                    ..Default::default()
                };
                5
            ],
            presented: Vec::new(),
            events: Vec::new(),
        };
        let summary = run(&mut frontend, GameConfig::default(), Pacing::Unlimited).unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(frontend.events, vec![GameEvent::BallLaunched]);
        assert!(frontend.presented.last().unwrap().ball().is_some());
    }

    #[test]
    fn test_run_rejects_bad_config() {
        let mut frontend = ScriptedFrontend {
            inputs: Vec::new(),
            presented: Vec::new(),
            events: Vec::new(),
        };
        let config = GameConfig {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(
            run(&mut frontend, config, Pacing::Unlimited).unwrap_err(),
            ConfigError::ZeroFrameRate
        );
        assert!(frontend.presented.is_empty());
    }
}
