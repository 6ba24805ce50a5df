// Visibility triggers: has this element entered the viewport?
// Explicit state machine so once-latching is independently testable.

use serde::{Deserialize, Serialize};

use crate::types::{Rect, Viewport};

/// Trigger behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Latch on the first intersection.
    pub once: bool,
    /// Grows (positive) or shrinks (negative) the viewport box on every side, in px.
    pub margin: f32,
}

impl TriggerConfig {
    pub fn once(margin: f32) -> Self {
        TriggerConfig { once: true, margin }
    }

    pub fn repeating(margin: f32) -> Self {
        TriggerConfig {
            once: false,
            margin,
        }
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        TriggerConfig::once(0.0)
    }
}

/// Trigger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerState {
    /// Never intersected (or not measured yet).
    Idle,
    /// Currently intersecting, repeating trigger.
    InView,
    /// Left the viewport after having been in it, repeating trigger.
    OutOfView,
    /// Intersected once under `once`; never reverts.
    Latched,
}

/// Tracks one element's intersection with the viewport.
#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    config: TriggerConfig,
    state: TriggerState,
}

impl VisibilityTrigger {
    pub fn new(config: TriggerConfig) -> Self {
        VisibilityTrigger {
            config,
            state: TriggerState::Idle,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_in_view(&self) -> bool {
        matches!(self.state, TriggerState::InView | TriggerState::Latched)
    }

    /// Update from the element's viewport-relative rect. `None` (not measured) is a no-op.
    pub fn update(&mut self, rect: Option<Rect>, viewport: &Viewport) -> bool {
        if self.state == TriggerState::Latched {
            return true;
        }
        let Some(rect) = rect else {
            return self.is_in_view();
        };

        let root = viewport.bounds().inflate(self.config.margin);
        let intersecting = rect.intersects(&root);

        self.state = match (intersecting, self.config.once) {
            (true, true) => TriggerState::Latched,
            (true, false) => TriggerState::InView,
            (false, _) if self.state == TriggerState::Idle => TriggerState::Idle,
            (false, _) => TriggerState::OutOfView,
        };
        self.is_in_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0, 5000.0)
    }

    #[test]
    fn unmeasured_element_never_fires() {
        let mut trigger = VisibilityTrigger::new(TriggerConfig::once(0.0));
        assert!(!trigger.update(None, &viewport()));
        assert_eq!(trigger.state(), TriggerState::Idle);
    }

    #[test]
    fn negative_margin_delays_trigger() {
        let mut trigger = VisibilityTrigger::new(TriggerConfig::once(-60.0));
        // 30px of the element is visible at the bottom edge: inside the viewport,
        // outside the contracted root box.
        let peeking = Rect::new(0.0, 770.0, 200.0, 200.0);
        assert!(!trigger.update(Some(peeking), &viewport()));
        let further = Rect::new(0.0, 700.0, 200.0, 200.0);
        assert!(trigger.update(Some(further), &viewport()));
    }

    #[test]
    fn positive_margin_fires_early() {
        let mut trigger = VisibilityTrigger::new(TriggerConfig::once(100.0));
        let below = Rect::new(0.0, 850.0, 200.0, 200.0);
        assert!(trigger.update(Some(below), &viewport()));
    }

    #[test]
    fn once_latches() {
        let mut trigger = VisibilityTrigger::new(TriggerConfig::once(0.0));
        assert!(trigger.update(Some(Rect::new(0.0, 100.0, 10.0, 10.0)), &viewport()));
        assert!(trigger.update(Some(Rect::new(0.0, 3000.0, 10.0, 10.0)), &viewport()));
        assert_eq!(trigger.state(), TriggerState::Latched);
    }

    #[test]
    fn repeating_toggles() {
        let mut trigger = VisibilityTrigger::new(TriggerConfig::repeating(0.0));
        assert!(!trigger.update(Some(Rect::new(0.0, 3000.0, 10.0, 10.0)), &viewport()));
        assert_eq!(trigger.state(), TriggerState::Idle);
        assert!(trigger.update(Some(Rect::new(0.0, 100.0, 10.0, 10.0)), &viewport()));
        assert!(!trigger.update(Some(Rect::new(0.0, -300.0, 10.0, 10.0)), &viewport()));
        assert_eq!(trigger.state(), TriggerState::OutOfView);
        assert!(trigger.update(Some(Rect::new(0.0, 400.0, 10.0, 10.0)), &viewport()));
    }

    proptest! {
        /// Once fired under `once`, no later position reverts the trigger.
        #[test]
        fn once_never_reverts(
            margin in -100.0f32..100.0,
            positions in prop::collection::vec((-3000.0f32..3000.0, proptest::bool::ANY), 1..40)
        ) {
            let mut trigger = VisibilityTrigger::new(TriggerConfig::once(margin));
            let mut fired = false;
            for (y, measured) in positions {
                let rect = measured.then(|| Rect::new(10.0, y, 100.0, 100.0));
                let now = trigger.update(rect, &viewport());
                if fired {
                    prop_assert!(now);
                }
                fired |= now;
            }
        }
    }
}
