//! Scene draw list built from the world each frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::sim::{Rect, World};

/// What a sprite represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Paddle,
    Ball,
    Brick { row: u32, col: u32 },
}

/// A filled shape: rectangles for paddle/bricks, a circle inscribed in
/// `rect` for the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
    pub color: Rgb,
}

/// Where a label's position sits relative to the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Font size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    /// Score/lives labels
    Hud,
    /// End-of-round banner
    Banner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub size: TextSize,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: f32,
    pub color: Rgb,
}

/// Everything to paint for one frame, back to front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub background: Rgb,
    pub divider: Line,
    pub hud: Vec<TextLabel>,
    pub sprites: Vec<Sprite>,
    /// "STAGE CLEAR" / "GAME OVER" during the end-of-round pause
    pub banner: Option<TextLabel>,
}

impl Scene {
    pub fn from_world(world: &World) -> Self {
        let config = &world.config;
        let ui = &config.ui;

        let divider = Line {
            from: Vec2::new(0.0, ui.line_y),
            to: Vec2::new(config.window_width, ui.line_y),
            stroke: ui.line_stroke,
            color: ui.color,
        };

        let hud = vec![
            TextLabel {
                text: format!("Score: {}", world.score()),
                pos: ui.score_pos,
                anchor: Anchor::TopLeft,
                size: TextSize::Hud,
                color: ui.color,
            },
            TextLabel {
                text: format!("Lives: {}", world.lives()),
                pos: ui.lives_pos,
                anchor: Anchor::TopLeft,
                size: TextSize::Hud,
                color: ui.color,
            },
        ];

        let mut sprites = Vec::with_capacity(world.bricks().len() + 2);
        sprites.push(Sprite {
            kind: SpriteKind::Paddle,
            rect: world.paddle_rect(),
            color: world.paddle.color,
        });
        sprites.extend(world.bricks().iter().map(|brick| Sprite {
            kind: SpriteKind::Brick {
                row: brick.row,
                col: brick.col,
            },
            rect: brick.rect,
            color: brick.color,
        }));
        if let Some(ball) = &world.ball {
            sprites.push(Sprite {
                kind: SpriteKind::Ball,
                rect: ball.rect(),
                color: ball.color,
            });
        }

        let banner = world.phase().banner_text().map(|text| TextLabel {
            text: text.to_string(),
            pos: ui.banner_center,
            anchor: Anchor::Center,
            size: TextSize::Banner,
            color: ui.color,
        });

        Self {
            background: config.background,
            divider,
            hud,
            sprites,
            banner,
        }
    }

    /// True while the end-of-round banner is up
    pub fn is_paused(&self) -> bool {
        self.banner.is_some()
    }

    pub fn ball(&self) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.kind == SpriteKind::Ball)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::GamePhase;

    #[test]
    fn test_scene_idle() {
        let world = World::new(GameConfig::default()).unwrap();
        let scene = Scene::from_world(&world);

        assert_eq!(scene.sprites.len(), 51);
        assert_eq!(scene.sprites[0].kind, SpriteKind::Paddle);
        assert!(scene.ball().is_none());
        assert!(!scene.is_paused());
        assert_eq!(scene.hud[0].text, "Score: 0");
        assert_eq!(scene.hud[1].text, "Lives: 3");
        assert_eq!(scene.divider.from.y, 38.0);
    }

    #[test]
    fn test_scene_ball_drawn_last() {
        let mut world = World::new(GameConfig::default()).unwrap();
        world.launch_ball();
        let scene = Scene::from_world(&world);
        assert_eq!(scene.sprites.last().unwrap().kind, SpriteKind::Ball);
        assert_eq!(scene.ball().unwrap().color, Rgb::WHITE);
    }

    #[test]
    fn test_scene_banner() {
        let mut world = World::new(GameConfig::default()).unwrap();
        world.phase = GamePhase::GameOver { ticks_remaining: 10 };
        let scene = Scene::from_world(&world);
        let banner = scene.banner.as_ref().unwrap();
        assert_eq!(banner.text, "GAME OVER");
        assert_eq!(banner.anchor, Anchor::Center);
        assert_eq!(banner.pos, Vec2::new(400.0, 300.0));
        assert!(scene.is_paused());
    }
}
