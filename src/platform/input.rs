//! Per-frame input snapshot supplied by the frontend

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Raw input state sampled once per frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSnapshot {
    /// Window close / OS quit
    pub quit_requested: bool,
    pub escape_pressed: bool,
    /// Primary mouse button currently held
    pub primary_button: bool,
    /// Mouse x in window coordinates, if the pointer is over the window
    pub mouse_x: Option<f32>,
}

impl InputSnapshot {
    pub fn should_quit(&self) -> bool {
        self.quit_requested || self.escape_pressed
    }

    /// Gameplay-relevant part of the snapshot
    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            paddle_x: self.mouse_x,
            launch: self.primary_button,
        }
    }
}
