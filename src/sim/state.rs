//! Game state and core simulation types
//!
//! A [`World`] owns everything scoped to the current round: one paddle, at
//! most one ball, the live bricks and the score/lives counters.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Axis, dominant_axis};
use super::rect::Rect;
use crate::color::Rgb;
use crate::config::{ConfigError, GameConfig};
use crate::{direction_to_velocity, normalize_degrees, signed_degrees};

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No ball in play, waiting for launch input
    Idle,
    /// Ball is moving and colliding
    InPlay,
    /// Every brick destroyed; banner shown until the countdown runs out
    LevelClear { ticks_remaining: u32 },
    /// Last life lost; banner shown until the countdown runs out
    GameOver { ticks_remaining: u32 },
}

impl GamePhase {
    /// Banner text for the end-of-round phases
    pub fn banner_text(&self) -> Option<&'static str> {
        match self {
            GamePhase::LevelClear { .. } => Some("STAGE CLEAR"),
            GamePhase::GameOver { .. } => Some("GAME OVER"),
            _ => None,
        }
    }
}

/// Things that happened during a tick, for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BallLaunched,
    /// Ball deflected off the paddle; offset is paddle center x minus ball center x
    PaddleHit { offset: f32 },
    BrickDestroyed { row: u32, col: u32, points: u64 },
    LifeLost { lives_remaining: u32 },
    StageClear { pause: Duration },
    GameOver { pause: Duration },
    /// Fresh round set up after a stage clear or game over
    RoundReset,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub color: Rgb,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.paddle_start_x(),
                config.paddle_y,
                config.paddle_width,
                config.paddle_height,
            ),
            color: config.paddle_color,
        }
    }

    /// Center the paddle on `x`, kept fully inside [0, window_width]
    pub fn set_center_x(&mut self, x: f32, window_width: f32) {
        let max_left = (window_width - self.rect.size.x).max(0.0);
        self.rect.pos.x = (x - self.rect.size.x / 2.0).clamp(0.0, max_left);
    }
}

/// The ball
///
/// Direction is kept as an angle so bounces never change speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the ball's bounding square
    pub pos: Vec2,
    /// Diameter
    pub size: f32,
    /// Degrees, 0 = up, clockwise
    pub direction: f32,
    /// Pixels per frame
    pub speed: f32,
    pub color: Rgb,
    /// Top of the playfield; the ball never ends a frame above it
    pub min_y: f32,
    /// Degrees of skew per pixel of paddle offset
    pub steer_factor: f32,
    /// Steepest deviation from vertical after a bounce (degrees)
    pub max_bounce_angle: f32,
}

impl Ball {
    /// A ball at the configured launch position and direction
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.ball_start,
            size: config.ball_size,
            direction: normalize_degrees(config.ball_start_direction),
            speed: config.ball_speed,
            color: config.ball_color,
            min_y: config.playfield_top(),
            steer_factor: config.paddle_steer_factor,
            max_bounce_angle: config.max_bounce_angle,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Per-frame displacement
    pub fn velocity(&self) -> Vec2 {
        direction_to_velocity(self.direction, self.speed)
    }

    /// Advance one frame, bouncing off the side walls and the playfield top
    ///
    /// Returns true once the ball has dropped below the bottom of the window.
    /// The ball is not removed here; that is up to the caller.
    pub fn update(&mut self, window: Vec2) -> bool {
        self.pos += self.velocity();

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            if self.velocity().x < 0.0 {
                self.v_bounce();
            }
        } else if self.pos.x + self.size > window.x {
            self.pos.x = window.x - self.size;
            if self.velocity().x > 0.0 {
                self.v_bounce();
            }
        }

        if self.pos.y < self.min_y {
            if self.velocity().y < 0.0 {
                self.h_bounce(self.min_y, 0.0);
            } else {
                self.pos.y = self.min_y;
            }
        }

        self.pos.y > window.y
    }

    /// Bounce off a horizontal surface
    ///
    /// Places the ball at `y`, reflects the vertical component and skews the
    /// direction by `offset` (paddle center x minus ball center x): positive
    /// offsets steer left, negative steer right. The result is kept within
    /// `max_bounce_angle` of the vertical axis.
    pub fn h_bounce(&mut self, y: f32, offset: f32) {
        self.pos.y = y;
        self.direction = steer_direction(
            180.0 - self.direction,
            offset * self.steer_factor,
            self.max_bounce_angle,
        );
    }

    /// Bounce off a vertical surface (reflects the horizontal component)
    pub fn v_bounce(&mut self) {
        self.direction = normalize_degrees(360.0 - self.direction);
    }

    /// Reflect off a struck brick along whichever axis the ball crossed
    ///
    /// Exactly one component is reflected per call.
    pub fn handle_brick_collision(&mut self, brick: &Rect) -> Axis {
        let axis = dominant_axis(&self.rect(), brick);
        match axis {
            Axis::Horizontal => self.v_bounce(),
            Axis::Vertical => self.h_bounce(self.pos.y, 0.0),
        }
        axis
    }
}

/// Skew a direction by `skew` degrees (positive turns it toward the left of
/// the screen) and keep it within `max` degrees of straight up or straight
/// down, whichever half it points into
pub fn steer_direction(direction: f32, skew: f32, max: f32) -> f32 {
    let d = signed_degrees(direction);
    if d.abs() <= 90.0 {
        normalize_degrees((d - skew).clamp(-max, max))
    } else {
        // Deviation from straight down; positive is down-left
        let dev = signed_degrees(d - 180.0);
        normalize_degrees(180.0 + (dev + skew).clamp(-max, max))
    }
}

/// A breakable brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Rgb,
    pub row: u32,
    pub col: u32,
}

/// Lay out the full brick grid, row by row from the top
pub fn build_bricks(config: &GameConfig) -> Vec<Brick> {
    let width = config.brick_width();
    let mut bricks = Vec::with_capacity((config.brick_rows * config.bricks_per_row) as usize);

    for (row, &color) in (0..config.brick_rows).zip(config.brick_row_colors.iter()) {
        let y = config.playfield_top()
            + row as f32 * (config.brick_padding_top + config.brick_height)
            + config.brick_padding_top;
        for col in 0..config.bricks_per_row {
            let x = col as f32 * (2.0 * config.brick_padding_x + width) + config.brick_padding_x;
            bricks.push(Brick {
                rect: Rect::new(x, y, width, config.brick_height),
                color,
                row,
                col,
            });
        }
    }

    bricks
}

/// Score and remaining lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub lives: u32,
}

impl ScoreState {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            score: 0,
            lives: starting_lives,
        }
    }

    pub fn add_points(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    /// Remove one life, returning how many are left
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }
}

/// Everything in play for the current round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: GameConfig,
    pub paddle: Paddle,
    /// `None` until the player launches
    pub ball: Option<Ball>,
    /// Live bricks in grid order
    pub bricks: Vec<Brick>,
    pub score: ScoreState,
    pub phase: GamePhase,
    /// Frames processed since the world was created
    pub time_ticks: u64,
}

impl World {
    /// Build a fresh round; fails if the configuration can't be played
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let world = Self {
            paddle: Paddle::new(&config),
            ball: None,
            bricks: build_bricks(&config),
            score: ScoreState::new(config.starting_lives),
            phase: GamePhase::Idle,
            time_ticks: 0,
            config,
        };
        log::debug!(
            "World created: {} bricks, {} lives",
            world.bricks.len(),
            world.score.lives
        );
        Ok(world)
    }

    /// Discard the round and start over with the full grid
    pub fn reset(&mut self) {
        self.paddle = Paddle::new(&self.config);
        self.ball = None;
        self.bricks = build_bricks(&self.config);
        self.score = ScoreState::new(self.config.starting_lives);
        self.phase = GamePhase::Idle;
    }

    /// Put a new ball in play if none is; returns whether one was spawned
    pub fn launch_ball(&mut self) -> bool {
        if self.phase != GamePhase::Idle || self.ball.is_some() {
            return false;
        }
        self.ball = Some(Ball::new(&self.config));
        self.phase = GamePhase::InPlay;
        true
    }

    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.config.window_width, self.config.window_height)
    }

    pub fn score(&self) -> u64 {
        self.score.score
    }

    pub fn lives(&self) -> u32 {
        self.score.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn paddle_rect(&self) -> Rect {
        self.paddle.rect
    }

    pub fn ball_rect(&self) -> Option<Rect> {
        self.ball.as_ref().map(Ball::rect)
    }
}
