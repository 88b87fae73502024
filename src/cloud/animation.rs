//! Frame-driven rotation.
//!
//! The driver is *Running* from construction and advances the angle by
//! `BASE_INCREMENT * speed` on every frame. Stopping it is terminal: a
//! stopped driver ignores further frames, which lets the host cancel the
//! loop and lets tests bound it.

use crate::cloud::CloudState;
use crate::config::BASE_INCREMENT;

/// Lifecycle of the animation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Running,
    Stopped,
}

/// Advances a [`CloudState`] once per frame.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    status: DriverStatus,
    frames: u64,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self {
            status: DriverStatus::Running,
            frames: 0,
        }
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == DriverStatus::Running
    }

    /// Number of frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance the angle by one frame.
    ///
    /// Returns false, leaving the state untouched, once the driver is stopped.
    pub fn tick(&mut self, state: &mut CloudState) -> bool {
        if self.status == DriverStatus::Stopped {
            return false;
        }
        state.angle += BASE_INCREMENT * state.speed;
        self.frames += 1;
        true
    }

    /// Stop the loop. Further ticks are ignored.
    pub fn stop(&mut self) {
        if self.status == DriverStatus::Running {
            log::debug!("animation stopped after {} frames", self.frames);
        }
        self.status = DriverStatus::Stopped;
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}
