//! Game configuration
//!
//! Loaded once at startup from the compiled-in constants. Invalid values are
//! rejected by [`GameConfig::validate`] before a world is ever built.

use std::fmt;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::consts::*;

/// HUD placement (score/lives labels, divider line, end-of-round banner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiLayout {
    pub color: Rgb,
    pub score_pos: Vec2,
    pub lives_pos: Vec2,
    /// Divider line between the HUD and the playfield
    pub line_y: f32,
    pub line_stroke: f32,
    pub banner_center: Vec2,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            color: UI_COLOR,
            score_pos: Vec2::from(UI_SCORE_POS),
            lives_pos: Vec2::from(UI_LIVES_POS),
            line_y: UI_LINE_Y,
            line_stroke: UI_LINE_STROKE,
            banner_center: Vec2::from(LEVEL_END_TEXT_CENTER),
        }
    }
}

/// Everything tunable about a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    pub fps: u32,
    pub background: Rgb,
    /// Length of the stage clear / game over banner pause
    pub end_pause_ms: u64,

    // === Scoring ===
    pub starting_lives: u32,
    pub points_per_brick: u64,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Top edge of the paddle (it starts horizontally centered)
    pub paddle_y: f32,
    pub paddle_color: Rgb,
    /// Degrees of direction skew per pixel between paddle and ball centers
    pub paddle_steer_factor: f32,
    /// Center the paddle on the mouse x every frame
    pub paddle_follows_mouse: bool,

    // === Ball ===
    pub ball_size: f32,
    /// Top-left corner of a freshly launched ball
    pub ball_start: Vec2,
    /// Degrees, 0 = straight up, clockwise
    pub ball_start_direction: f32,
    /// Pixels per frame
    pub ball_speed: f32,
    pub ball_color: Rgb,
    /// Steepest deviation from the vertical axis a bounce may produce (degrees)
    pub max_bounce_angle: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub bricks_per_row: u32,
    pub brick_padding_x: f32,
    pub brick_padding_top: f32,
    pub brick_height: f32,
    /// One color per row, top to bottom
    pub brick_row_colors: Vec<Rgb>,

    // === UI ===
    pub ui: UiLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,
            background: BG_COLOR,
            end_pause_ms: END_PAUSE_MS,

            starting_lives: STARTING_LIVES,
            points_per_brick: POINTS_PER_BRICK,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_Y,
            paddle_color: PADDLE_COLOR,
            paddle_steer_factor: PADDLE_STEER_FACTOR,
            paddle_follows_mouse: true,

            ball_size: BALL_SIZE,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_start_direction: BALL_START_DIRECTION,
            ball_speed: BALL_SPEED,
            ball_color: BALL_COLOR,
            max_bounce_angle: MAX_BOUNCE_ANGLE,

            brick_rows: BRICK_ROWS,
            bricks_per_row: BRICKS_PER_ROW,
            brick_padding_x: BRICK_PADDING_X,
            brick_padding_top: BRICK_PADDING_TOP,
            brick_height: BRICK_HEIGHT,
            brick_row_colors: BRICK_ROW_COLORS.to_vec(),

            ui: UiLayout::default(),
        }
    }
}

impl GameConfig {
    /// Top of the playfield, just below the HUD divider
    pub fn playfield_top(&self) -> f32 {
        self.ui.line_y + self.ui.line_stroke
    }

    /// Brick width derived from the column count and horizontal padding
    pub fn brick_width(&self) -> f32 {
        self.window_width / self.bricks_per_row as f32 - 2.0 * self.brick_padding_x
    }

    /// Bottom edge of the lowest brick row
    pub fn brick_grid_bottom(&self) -> f32 {
        self.playfield_top()
            + self.brick_rows as f32 * (self.brick_padding_top + self.brick_height)
    }

    /// Paddle starting x (horizontally centered)
    pub fn paddle_start_x(&self) -> f32 {
        (self.window_width - self.paddle_width) / 2.0
    }

    /// Banner pause expressed in frames
    ///
    /// Saturates for pauses [`validate`](Self::validate) would reject.
    pub fn end_pause_ticks(&self) -> u32 {
        self.checked_end_pause_ticks().unwrap_or(u32::MAX)
    }

    fn checked_end_pause_ticks(&self) -> Option<u32> {
        let ticks = self.end_pause_ms.checked_mul(u64::from(self.fps))? / 1000;
        u32::try_from(ticks).ok()
    }

    pub fn end_pause(&self) -> Duration {
        Duration::from_millis(self.end_pause_ms)
    }

    /// Wall-clock length of one frame at the target rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::ZeroStartingLives);
        }
        if self.bricks_per_row == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.brick_rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.checked_end_pause_ticks().is_none() {
            return Err(ConfigError::PauseTooLong(self.end_pause_ms));
        }
        let colors = self.brick_row_colors.len();
        if let Some(row) = (0..self.brick_rows).find(|&r| r as usize >= colors) {
            return Err(ConfigError::MissingRowColor { row });
        }
        if self.brick_height <= 0.0 {
            return Err(ConfigError::NonPositiveBrickHeight(self.brick_height));
        }
        if self.brick_width() <= 0.0 {
            return Err(ConfigError::NonPositiveBrickWidth(self.brick_width()));
        }
        if self.ball_size <= 0.0 {
            return Err(ConfigError::NonPositiveBallSize(self.ball_size));
        }
        if self.ball_speed <= 0.0 {
            return Err(ConfigError::NonPositiveBallSpeed(self.ball_speed));
        }
        if self.paddle_height <= 0.0 {
            return Err(ConfigError::NonPositivePaddleHeight(self.paddle_height));
        }
        if self.paddle_width > self.window_width {
            return Err(ConfigError::PaddleWiderThanWindow {
                paddle: self.paddle_width,
                window: self.window_width,
            });
        }
        // The ball gets parked just above the paddle after a hit; that spot
        // has to stay inside the playfield
        if self.paddle_y - self.ball_size - 1.0 < self.playfield_top() {
            return Err(ConfigError::PaddleAbovePlayfield);
        }
        let paddle_bottom = self.paddle_y + self.paddle_height;
        if paddle_bottom > self.window_height {
            return Err(ConfigError::PaddleBelowWindow {
                paddle_bottom,
                window: self.window_height,
            });
        }
        if self.brick_grid_bottom() >= self.paddle_y {
            return Err(ConfigError::BricksOverlapPaddle);
        }
        if !(self.max_bounce_angle > 0.0 && self.max_bounce_angle < 90.0) {
            return Err(ConfigError::InvalidBounceLimit(self.max_bounce_angle));
        }
        Ok(())
    }
}

/// Startup-fatal configuration problems
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroFrameRate,
    ZeroStartingLives,
    /// Pause (ms) too long to count in frames
    PauseTooLong(u64),
    /// Zero columns would divide the window width by zero
    ZeroColumns,
    ZeroRows,
    /// Brick row has no entry in `brick_row_colors`
    MissingRowColor { row: u32 },
    NonPositiveBrickWidth(f32),
    NonPositiveBrickHeight(f32),
    NonPositiveBallSize(f32),
    NonPositiveBallSpeed(f32),
    NonPositivePaddleHeight(f32),
    PaddleWiderThanWindow { paddle: f32, window: f32 },
    PaddleAbovePlayfield,
    PaddleBelowWindow { paddle_bottom: f32, window: f32 },
    BricksOverlapPaddle,
    InvalidBounceLimit(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroFrameRate => write!(f, "frame rate must be at least 1"),
            ConfigError::ZeroStartingLives => write!(f, "starting lives must be at least 1"),
            ConfigError::PauseTooLong(ms) => {
                write!(f, "end-of-round pause of {ms} ms is too long to count in frames")
            }
            ConfigError::ZeroColumns => write!(f, "brick grid needs at least one column"),
            ConfigError::ZeroRows => write!(f, "brick grid needs at least one row"),
            ConfigError::MissingRowColor { row } => write!(f, "no color configured for brick row {row}"),
            ConfigError::NonPositiveBrickWidth(w) => {
                write!(f, "brick width must be positive (got {w}); reduce columns or padding")
            }
            ConfigError::NonPositiveBrickHeight(h) => {
                write!(f, "brick height must be positive (got {h})")
            }
            ConfigError::NonPositiveBallSize(s) => write!(f, "ball size must be positive (got {s})"),
            ConfigError::NonPositivePaddleHeight(h) => {
                write!(f, "paddle height must be positive (got {h})")
            }
            ConfigError::NonPositiveBallSpeed(s) => write!(f, "ball speed must be positive (got {s})"),
            ConfigError::PaddleWiderThanWindow { paddle, window } => {
                write!(f, "paddle width {paddle} exceeds window width {window}")
            }
            ConfigError::PaddleAbovePlayfield => {
                write!(f, "paddle leaves no room for the ball below the playfield top")
            }
            ConfigError::PaddleBelowWindow {
                paddle_bottom,
                window,
            } => write!(f, "paddle bottom {paddle_bottom} is below the window height {window}"),
            ConfigError::BricksOverlapPaddle => write!(f, "brick grid reaches down to the paddle"),
            ConfigError::InvalidBounceLimit(a) => {
                write!(f, "max bounce angle must be between 0 and 90 degrees (got {a})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
