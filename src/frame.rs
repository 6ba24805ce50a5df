// Per-frame inputs (layout, scroll, time) and the output collector handed to every effect.

use std::collections::HashMap;

use crate::style::MotionStyle;
use crate::types::*;

/// Last known measurement of every reported element, stored document-relative
/// so a measurement stays valid while the page scrolls.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    rects: HashMap<ElementId, Rect>,
}

impl Layout {
    pub fn new() -> Self {
        Layout::default()
    }

    /// Record a viewport-relative rect measured while the page was scrolled to `scroll_y`.
    pub fn record(&mut self, id: ElementId, viewport_rect: Rect, scroll_y: f32) {
        self.rects.insert(id, viewport_rect.translate(0.0, scroll_y));
    }

    pub fn remove(&mut self, id: &ElementId) {
        self.rects.remove(id);
    }

    pub fn document_rect(&self, id: &ElementId) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.rects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Read-only view of the world for one tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub now: Timestamp,
    /// Seconds since the previous tick.
    pub dt: f32,
    pub viewport: Viewport,
    pub scroll_y: f32,
    pub layout: &'a Layout,
}

impl<'a> FrameContext<'a> {
    /// Element rect relative to the current viewport.
    pub fn rect(&self, id: &ElementId) -> Option<Rect> {
        self.layout
            .document_rect(id)
            .map(|r| r.translate(0.0, -self.scroll_y))
    }

    pub fn document_rect(&self, id: &ElementId) -> Option<Rect> {
        self.layout.document_rect(id)
    }
}

/// Anything that turns frame inputs into element updates.
pub trait Effect {
    /// Advance to `ctx.now` and write this effect's updates.
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame);

    /// Handle a pointer event. Returns true when the event targeted this effect.
    fn pointer(&mut self, _event: &PointerEvent, _ctx: &FrameContext, _frame: &mut Frame) -> bool {
        false
    }
}

/// Collects the updates produced during one tick.
#[derive(Debug, Default)]
pub struct Frame {
    output: FrameOutput,
}

impl Frame {
    pub fn new() -> Self {
        Frame::default()
    }

    pub fn style(&mut self, id: &ElementId, css: String) {
        self.output.styles.push(StyleUpdate {
            id: id.clone(),
            css,
        });
    }

    pub fn motion(&mut self, id: &ElementId, style: &MotionStyle) {
        self.style(id, style.to_css());
    }

    pub fn text(&mut self, id: &ElementId, text: String) {
        self.output.texts.push(TextUpdate {
            id: id.clone(),
            text,
        });
    }

    pub fn class(&mut self, id: &ElementId, class: &str, enabled: bool) {
        self.output.classes.push(ClassUpdate {
            id: id.clone(),
            class: class.to_string(),
            enabled,
        });
    }

    pub fn media(&mut self, target: &ElementId, action: MediaAction) {
        self.output.media.push(MediaCommand {
            target: target.clone(),
            action,
        });
    }

    pub fn output(&self) -> &FrameOutput {
        &self.output
    }

    pub fn into_output(self) -> FrameOutput {
        self.output
    }
}

/// Minimal world for unit tests: a viewport, a scroll offset and measured rects.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub struct World {
        pub layout: Layout,
        pub viewport: Viewport,
        pub scroll_y: f32,
        pub now: Timestamp,
        pub dt: f32,
    }

    impl World {
        pub fn new() -> Self {
            World {
                layout: Layout::new(),
                viewport: Viewport::new(1280.0, 800.0, 4000.0),
                scroll_y: 0.0,
                now: Timestamp::from_micros(0),
                dt: 0.0,
            }
        }

        /// Place `id` at document position (x, y).
        pub fn place(&mut self, id: &ElementId, x: f32, y: f32, width: f32, height: f32) {
            self.layout.record(id.clone(), Rect::new(x, y, width, height), 0.0);
        }

        pub fn advance_ms(&mut self, ms: u64) {
            self.now = Timestamp::from_micros(self.now.as_micros() + ms * 1000);
            self.dt = ms as f32 / 1000.0;
        }

        pub fn ctx(&self) -> FrameContext<'_> {
            FrameContext {
                now: self.now,
                dt: self.dt,
                viewport: self.viewport,
                scroll_y: self.scroll_y,
                layout: &self.layout,
            }
        }
    }
}
