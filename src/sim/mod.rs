//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Stable iteration order (bricks in grid order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Axis, ball_rect_collision, dominant_axis, overlapping};
pub use rect::Rect;
pub use state::{
    Ball, Brick, GameEvent, GamePhase, Paddle, ScoreState, World, build_bricks, steer_direction,
};
pub use tick::{TickInput, tick};
