//! Per-frame simulation tick
//!
//! Advances the world by exactly one frame: launch handling, ball motion,
//! paddle/brick collisions and the round state machine.

use super::collision::{ball_rect_collision, overlapping};
use super::state::{GameEvent, GamePhase, World};

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Where to center the paddle (mouse x)
    pub paddle_x: Option<f32>,
    /// Launch a ball (primary mouse button held)
    pub launch: bool,
}

/// Advance the world by one frame, returning what happened
pub fn tick(world: &mut World, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    world.time_ticks += 1;

    // End-of-round banner: everything frozen until the countdown expires
    match world.phase {
        GamePhase::LevelClear { ticks_remaining } | GamePhase::GameOver { ticks_remaining } => {
            let remaining = ticks_remaining.saturating_sub(1);
            if remaining == 0 {
                world.reset();
                log::info!("Round reset");
                events.push(GameEvent::RoundReset);
            } else {
                world.phase = match world.phase {
                    GamePhase::LevelClear { .. } => GamePhase::LevelClear {
                        ticks_remaining: remaining,
                    },
                    _ => GamePhase::GameOver {
                        ticks_remaining: remaining,
                    },
                };
            }
            return events;
        }
        GamePhase::Idle | GamePhase::InPlay => {}
    }

    if world.config.paddle_follows_mouse {
        if let Some(x) = input.paddle_x {
            world.paddle.set_center_x(x, world.config.window_width);
        }
    }

    // The new ball moves on the same frame it is launched
    if input.launch && world.launch_ball() {
        log::debug!("Ball launched ({} lives left)", world.lives());
        events.push(GameEvent::BallLaunched);
    }

    if world.phase == GamePhase::InPlay {
        step_ball(world, &mut events);
    }

    events
}

/// Move the ball, resolve its collisions and apply the round transitions
fn step_ball(world: &mut World, events: &mut Vec<GameEvent>) {
    let window = world.window_size();
    let Some(ball) = world.ball.as_mut() else {
        // InPlay always carries a ball
        log::warn!("In play without a ball, returning to idle");
        world.phase = GamePhase::Idle;
        return;
    };

    let life_lost = ball.update(window);

    // Paddle: precise round-ball test, then park the ball just above it
    let paddle = world.paddle.rect;
    if ball_rect_collision(&ball.rect(), &paddle) {
        let offset = paddle.center().x - ball.rect().center().x;
        ball.h_bounce(paddle.top() - ball.size - 1.0, offset);
        log::trace!("Paddle hit, offset {offset:.1}");
        events.push(GameEvent::PaddleHit { offset });
    }

    // Bricks: every overlapped brick is destroyed and scored, only the first
    // one changes direction
    let hits = overlapping(&ball.rect(), world.bricks.iter().map(|b| &b.rect));
    if let Some(&first) = hits.first() {
        let axis = ball.handle_brick_collision(&world.bricks[first].rect);
        log::trace!("Brick bounce on {axis:?} axis ({} bricks hit)", hits.len());
    }

    if !hits.is_empty() {
        let points = world.config.points_per_brick;
        let mut index = 0;
        world.bricks.retain(|brick| {
            let hit = hits.contains(&index);
            index += 1;
            if hit {
                world.score.add_points(points);
                events.push(GameEvent::BrickDestroyed {
                    row: brick.row,
                    col: brick.col,
                    points,
                });
            }
            !hit
        });
        log::debug!(
            "Destroyed {} brick(s), score {}, {} left",
            hits.len(),
            world.score.score,
            world.bricks.len()
        );
    }

    if world.bricks.is_empty() {
        world.ball = None;
        world.phase = GamePhase::LevelClear {
            ticks_remaining: world.config.end_pause_ticks(),
        };
        log::info!("Stage clear with score {}", world.score.score);
        events.push(GameEvent::StageClear {
            pause: world.config.end_pause(),
        });
        return;
    }

    if life_lost {
        world.ball = None;
        let lives_remaining = world.score.lose_life();
        log::debug!("Ball lost, {lives_remaining} lives left");
        events.push(GameEvent::LifeLost { lives_remaining });

        if lives_remaining == 0 {
            world.phase = GamePhase::GameOver {
                ticks_remaining: world.config.end_pause_ticks(),
            };
            log::info!("Game over with score {}", world.score.score);
            events.push(GameEvent::GameOver {
                pause: world.config.end_pause(),
            });
        } else {
            world.phase = GamePhase::Idle;
        }
    }
}
