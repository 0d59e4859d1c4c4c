//! End-to-end runs through the public API

use breakout::platform::{Frontend, HeadlessFrontend, InputSnapshot, Pacing, run};
use breakout::renderer::{Scene, SpriteKind};
use breakout::sim::{GameEvent, GamePhase, TickInput, World, tick};
use breakout::{ConfigError, GameConfig};

/// Keeps the paddle under the ball and serves whenever no ball is in play
struct Tracker {
    frames_left: u32,
    last_scene: Option<Scene>,
}

impl Tracker {
    fn new(frames: u32) -> Self {
        Self {
            frames_left: frames,
            last_scene: None,
        }
    }
}

impl Frontend for Tracker {
    fn poll_input(&mut self) -> InputSnapshot {
        if self.frames_left == 0 {
            return InputSnapshot {
                quit_requested: true,
                ..Default::default()
            };
        }
        self.frames_left -= 1;

        match self.last_scene.as_ref().and_then(|scene| scene.ball()) {
            Some(ball) => InputSnapshot {
                mouse_x: Some(ball.rect.center().x),
                ..Default::default()
            },
            None => InputSnapshot {
                primary_button: true,
                ..Default::default()
            },
        }
    }

    fn present(&mut self, scene: &Scene, _events: &[GameEvent]) {
        self.last_scene = Some(scene.clone());
    }
}

#[test]
fn test_tracked_ball_breaks_bricks() {
    let mut frontend = Tracker::new(3000);
    let summary = run(&mut frontend, GameConfig::default(), Pacing::Unlimited).unwrap();
    assert_eq!(summary.frames, 3000);
    assert!(summary.bricks_destroyed > 0);
    assert!(summary.best_score <= summary.bricks_destroyed);
}

#[test]
fn test_replayed_runs_are_deterministic() {
    let mut script = vec![InputSnapshot::default(); 1500];
    for (i, input) in script.iter_mut().enumerate() {
        input.primary_button = i % 200 == 0;
        input.mouse_x = Some((i % 800) as f32);
    }
    let mut a = HeadlessFrontend::new(script.clone());
    let mut b = HeadlessFrontend::new(script);
    let summary_a = run(&mut a, GameConfig::default(), Pacing::Unlimited).unwrap();
    let summary_b = run(&mut b, GameConfig::default(), Pacing::Unlimited).unwrap();
    assert_eq!(summary_a.frames, 1500);
    assert_eq!(summary_a, summary_b);
    assert_eq!(a.hud(), b.hud());
}

#[test]
fn test_zero_columns_is_fatal() {
    let config = GameConfig {
        bricks_per_row: 0,
        ..Default::default()
    };
    let mut frontend = HeadlessFrontend::new(vec![InputSnapshot::default(); 10]);
    assert_eq!(
        run(&mut frontend, config, Pacing::Unlimited).unwrap_err(),
        ConfigError::ZeroColumns
    );
}

/// Never launches; counts what it was shown
struct Spectator {
    frames_left: u32,
    last_scene: Option<Scene>,
}

impl Frontend for Spectator {
    fn poll_input(&mut self) -> InputSnapshot {
        if self.frames_left == 0 {
            return InputSnapshot {
                quit_requested: true,
                ..Default::default()
            };
        }
        self.frames_left -= 1;
        InputSnapshot {
            mouse_x: Some(20.0),
            ..Default::default()
        }
    }

    fn present(&mut self, scene: &Scene, _events: &[GameEvent]) {
        self.last_scene = Some(scene.clone());
    }
}

#[test]
fn test_no_launch_no_ball() {
    let mut frontend = Spectator {
        frames_left: 30,
        last_scene: None,
    };
    let summary = run(&mut frontend, GameConfig::default(), Pacing::Unlimited).unwrap();
    assert_eq!(summary.frames, 30);
    let scene = frontend.last_scene.unwrap();
    assert!(scene.ball().is_none());
    let paddle = scene
        .sprites
        .iter()
        .find(|s| s.kind == SpriteKind::Paddle)
        .unwrap();
    // Clamped against the left wall
    assert_eq!(paddle.rect.pos.x, 0.0);
}

#[test]
fn test_unattended_ball_costs_all_lives() {
    let config = GameConfig {
        end_pause_ms: 100,
        ..Default::default()
    };
    let mut world = World::new(config).unwrap();
    // Paddle parked in the corner, ball launched every time it can be
    let input = TickInput {
        paddle_x: Some(0.0),
        launch: true,
    };

    let mut lives_seen = Vec::new();
    let mut game_over = false;
    for _ in 0..5_000 {
        for event in tick(&mut world, &input) {
            match event {
                GameEvent::LifeLost { lives_remaining } => lives_seen.push(lives_remaining),
                GameEvent::GameOver { .. } => game_over = true,
                _ => {}
            }
        }
        if game_over {
            break;
        }
    }

    assert!(game_over);
    assert_eq!(lives_seen, vec![2, 1, 0]);
    assert!(matches!(world.phase(), GamePhase::GameOver { .. }));
}
