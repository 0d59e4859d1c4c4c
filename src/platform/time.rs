//! Frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// How the frame loop is paced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep until the next frame boundary at the configured rate
    Realtime,
    /// Run frames back to back (tests, headless batch runs)
    Unlimited,
}

/// Frame-rate limiter
///
/// Frame boundaries are scheduled from the previous boundary, not from when
/// `wait` was called, so short frames don't accumulate drift. A frame that
/// overruns by more than one period resynchronises instead of bursting.
#[derive(Debug)]
pub struct FrameClock {
    period: Option<Duration>,
    next_frame: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(period: Duration, pacing: Pacing) -> Self {
        Self {
            period: match pacing {
                Pacing::Realtime => Some(period),
                Pacing::Unlimited => None,
            },
            next_frame: Instant::now() + period,
            frames: 0,
        }
    }

    /// Block until the current frame's slot is over
    pub fn wait(&mut self) {
        self.frames += 1;
        let Some(period) = self.period else {
            return;
        };

        let now = Instant::now();
        if now < self.next_frame {
            thread::sleep(self.next_frame - now);
            self.next_frame += period;
        } else if now - self.next_frame > period {
            log::trace!("Frame {} overran, resyncing clock", self.frames);
            self.next_frame = now + period;
        } else {
            self.next_frame += period;
        }
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
