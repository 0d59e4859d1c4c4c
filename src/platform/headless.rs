//! Windowless frontend
//!
//! Replays a recorded sequence of input snapshots, one per frame, and quits
//! when it runs out. Reports through the logger: HUD changes and round
//! events at `info`, the full scene as JSON at `trace`.

use std::collections::VecDeque;

use crate::renderer::Scene;
use crate::sim::GameEvent;

use super::{Frontend, InputSnapshot};

pub struct HeadlessFrontend {
    script: VecDeque<InputSnapshot>,
    frames: u64,
    last_hud: Vec<String>,
}

impl HeadlessFrontend {
    pub fn new(script: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            script: script.into_iter().collect(),
            frames: 0,
            last_hud: Vec::new(),
        }
    }

    /// Load a recording: a JSON array of snapshots, missing fields default
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let script: Vec<InputSnapshot> = serde_json::from_str(json)?;
        Ok(Self::new(script))
    }

    /// Frames replayed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// HUD label texts as last presented
    pub fn hud(&self) -> &[String] {
        &self.last_hud
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_input(&mut self) -> InputSnapshot {
        match self.script.pop_front() {
            Some(input) => {
                self.frames += 1;
                input
            }
            None => InputSnapshot {
                quit_requested: true,
                ..Default::default()
            },
        }
    }

    fn present(&mut self, scene: &Scene, events: &[GameEvent]) {
        let hud: Vec<String> = scene.hud.iter().map(|label| label.text.clone()).collect();
        if hud != self.last_hud {
            log::info!("[frame {}] {}", self.frames, hud.join("  "));
            self.last_hud = hud;
        }

        for event in events {
            match event {
                GameEvent::StageClear { pause } | GameEvent::GameOver { pause } => {
                    if let Some(banner) = &scene.banner {
                        log::info!("[frame {}] {} ({:?})", self.frames, banner.text, pause);
                    }
                }
                GameEvent::LifeLost { lives_remaining } => {
                    log::info!("[frame {}] Ball lost, {} left", self.frames, lives_remaining);
                }
                GameEvent::RoundReset => log::info!("[frame {}] New round", self.frames),
                _ => log::trace!("[frame {}] {:?}", self.frames, event),
            }
        }

        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(scene) {
                Ok(json) => log::trace!("scene {json}"),
                Err(e) => log::warn!("Scene serialization failed: {e}"),
            }
        }
    }
}
