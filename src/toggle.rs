// Reversible two-state tween: hover pops, menus and the navbar morph.

use crate::easing::Easing;

/// Progress between an "off" and an "on" state that can reverse mid-flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toggle {
    on: bool,
    progress: f32,
    duration: f32,
    easing: Easing,
}

impl Toggle {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Toggle {
            on: false,
            progress: 0.0,
            duration,
            easing,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
    }

    /// Eased position in [0, 1].
    pub fn value(&self) -> f32 {
        self.easing.apply(self.progress)
    }

    /// Move toward the current state by `dt` seconds and return the eased position.
    pub fn step(&mut self, dt: f32) -> f32 {
        let delta = if self.duration <= 0.0 {
            1.0
        } else {
            dt.max(0.0) / self.duration
        };
        self.progress = if self.on {
            (self.progress + delta).min(1.0)
        } else {
            (self.progress - delta).max(0.0)
        };
        self.value()
    }
}
