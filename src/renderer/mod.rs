//! Rendering view
//!
//! The core never draws. It flattens a [`World`](crate::sim::World) into a
//! [`Scene`] draw list that an external renderer paints in order.

pub mod scene;

pub use scene::{Anchor, Line, Scene, Sprite, SpriteKind, TextLabel, TextSize};
