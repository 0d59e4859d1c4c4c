//! Breakout - A single-screen ball-and-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, round state machine)
//! - `renderer`: Drawable scene view handed to an external renderer
//! - `platform`: Input/frame-clock seam and the frame loop
//! - `config`: Compiled-in game configuration and its validation

pub mod color;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use color::Rgb;
pub use config::{ConfigError, GameConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use crate::color::Rgb;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    /// Frame rate target (the simulation advances one step per frame)
    pub const FPS: u32 = 60;
    pub const BG_COLOR: Rgb = Rgb::BLACK;

    /// Pause shown with the end-of-round banner
    pub const END_PAUSE_MS: u64 = 3000;

    pub const STARTING_LIVES: u32 = 3;
    pub const POINTS_PER_BRICK: u64 = 1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_Y: f32 = WINDOW_HEIGHT - 40.0;
    pub const PADDLE_COLOR: Rgb = Rgb::LIGHT_BLUE;
    /// Degrees of direction skew per pixel of paddle-center offset
    pub const PADDLE_STEER_FACTOR: f32 = 1.0;

    /// Ball defaults (speed is pixels per frame, direction in degrees, 0 = up, clockwise)
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_START_X: f32 = (WINDOW_WIDTH - BALL_SIZE) / 2.0;
    pub const BALL_START_Y: f32 = 350.0;
    pub const BALL_START_DIRECTION: f32 = 200.0;
    pub const BALL_SPEED: f32 = 7.0;
    pub const BALL_COLOR: Rgb = Rgb::WHITE;
    /// Steepest allowed deviation from the vertical axis after a bounce
    pub const MAX_BOUNCE_ANGLE: f32 = 75.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICKS_PER_ROW: u32 = 10;
    pub const BRICK_PADDING_X: f32 = 2.0;
    pub const BRICK_PADDING_TOP: f32 = 5.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    /// Colors for each row, top to bottom
    pub const BRICK_ROW_COLORS: [Rgb; 5] = [Rgb::RED, Rgb::ORANGE, Rgb::YELLOW, Rgb::GREEN, Rgb::BLUE];

    /// UI layout
    pub const UI_COLOR: Rgb = Rgb::WHITE;
    pub const UI_SCORE_POS: (f32, f32) = (20.0, 10.0);
    pub const UI_LIVES_POS: (f32, f32) = (650.0, 10.0);
    pub const UI_LINE_Y: f32 = 38.0;
    pub const UI_LINE_STROKE: f32 = 2.0;
    pub const LEVEL_END_TEXT_CENTER: (f32, f32) = (WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0);
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Normalize an angle in degrees to (-180, 180]
#[inline]
pub fn signed_degrees(angle: f32) -> f32 {
    let a = normalize_degrees(angle);
    if a > 180.0 { a - 360.0 } else { a }
}

/// Convert a direction (degrees, 0 = up, clockwise, screen y grows down) and
/// speed into a per-frame velocity
#[inline]
pub fn direction_to_velocity(direction: f32, speed: f32) -> Vec2 {
    let rad = direction.to_radians();
    Vec2::new(rad.sin() * speed, -rad.cos() * speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-20.0) - 340.0).abs() < 1e-4);
        assert!((normalize_degrees(740.0) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_signed_degrees() {
        assert!((signed_degrees(340.0) + 20.0).abs() < 1e-4);
        assert!((signed_degrees(180.0) - 180.0).abs() < 1e-4);
        assert!((signed_degrees(90.0) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_direction_to_velocity() {
        // Straight up in screen space is negative y
        let up = direction_to_velocity(0.0, 5.0);
        assert!(up.x.abs() < 1e-4);
        assert!((up.y + 5.0).abs() < 1e-4);

        // 90 degrees is to the right
        let right = direction_to_velocity(90.0, 5.0);
        assert!((right.x - 5.0).abs() < 1e-4);
        assert!(right.y.abs() < 1e-4);

        // Starting direction heads down and slightly left
        let start = direction_to_velocity(consts::BALL_START_DIRECTION, consts::BALL_SPEED);
        assert!(start.x < 0.0);
        assert!(start.y > 0.0);
        assert!((start.length() - consts::BALL_SPEED).abs() < 1e-4);
    }
}
