//! Collision detection between the ball and rectangular geometry
//!
//! Two tests are used:
//! - bounding-box overlap (bricks, like a sprite group hit test)
//! - precise circle-vs-rect overlap (paddle, so the ball's corners don't count)
//!
//! Response is always a reflection of exactly one direction component.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Which velocity component a collision reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Side hit: reflect the horizontal component
    Horizontal,
    /// Top/bottom hit: reflect the vertical component
    Vertical,
}

/// Check a round ball (inscribed in `ball`) against a rectangle
///
/// Equivalent to a per-pixel mask test for a circle sprite against a solid
/// rectangle: only a strictly positive penetration counts as a hit.
pub fn ball_rect_collision(ball: &Rect, target: &Rect) -> bool {
    let center = ball.center();
    let radius = ball.size.x.min(ball.size.y) / 2.0;

    let closest = target.clamp_point(center);
    center.distance(closest) < radius
}

/// Indices of every rect overlapping `ball`, in iteration order
pub fn overlapping<'a, I>(ball: &Rect, targets: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Rect>,
{
    targets
        .into_iter()
        .enumerate()
        .filter(|(_, r)| ball.overlaps(r))
        .map(|(i, _)| i)
        .collect()
}

/// Decide which axis a ball/rect overlap should reflect
///
/// The axis with the shallower penetration is the one that was crossed.
/// Ties go to `Vertical`.
pub fn dominant_axis(ball: &Rect, target: &Rect) -> Axis {
    let depth = ball.overlap_depth(target);
    if depth.x < depth.y {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}
