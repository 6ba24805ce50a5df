// Scroll progress: raw page offset, normalised page progress, and element-relative
// progress between two (target edge, viewport edge) intersections.

use serde::{Deserialize, Serialize};

use crate::types::{Rect, Viewport};

/// Where a target edge meets a viewport edge. Fractions run 0 = start (top) to 1 = end (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub target: f32,
    pub viewport: f32,
}

impl ScrollOffset {
    /// Target's top meets the viewport's bottom (`"start end"`).
    pub const START_END: ScrollOffset = ScrollOffset {
        target: 0.0,
        viewport: 1.0,
    };
    /// Target's bottom meets the viewport's top (`"end start"`).
    pub const END_START: ScrollOffset = ScrollOffset {
        target: 1.0,
        viewport: 0.0,
    };
    /// Target's top meets the viewport's top (`"start start"`).
    pub const START_START: ScrollOffset = ScrollOffset {
        target: 0.0,
        viewport: 0.0,
    };

    /// Scroll offset at which this intersection happens for a document-relative target.
    fn scroll_position(&self, target: &Rect, viewport: &Viewport) -> f32 {
        target.top() + self.target * target.height - self.viewport * viewport.height
    }
}

/// Element-relative progress range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRange {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollRange {
    /// Whole time the element is on screen: enters at the bottom, leaves at the top.
    pub const THROUGH_VIEWPORT: ScrollRange = ScrollRange {
        start: ScrollOffset::START_END,
        end: ScrollOffset::END_START,
    };
    /// From the element's top at the viewport top until it has scrolled out.
    pub const SCROLL_OUT: ScrollRange = ScrollRange {
        start: ScrollOffset::START_START,
        end: ScrollOffset::END_START,
    };

    /// Progress in [0, 1] for a document-relative target. `None` if unmeasured.
    pub fn progress(&self, target: Option<Rect>, viewport: &Viewport, scroll_y: f32) -> Option<f32> {
        let target = target?;
        let start = self.start.scroll_position(&target, viewport);
        let end = self.end.scroll_position(&target, viewport);
        let span = end - start;
        if span.abs() < f32::EPSILON {
            return Some(if scroll_y >= end { 1.0 } else { 0.0 });
        }
        Some(((scroll_y - start) / span).clamp(0.0, 1.0))
    }
}

/// Whole-page scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageScroll {
    y: f32,
}

impl PageScroll {
    pub fn new() -> Self {
        PageScroll::default()
    }

    pub fn set(&mut self, y: f32) {
        if y.is_finite() {
            self.y = y;
        }
    }

    /// Raw offset in px; may be negative during elastic overscroll.
    pub fn offset(&self) -> f32 {
        self.y
    }

    /// Normalised progress in [0, 1]. Pages that do not scroll report 0.
    pub fn progress(&self, viewport: &Viewport) -> f32 {
        page_progress(self.y, viewport)
    }
}

/// Page progress for a raw offset, clamped to [0, 1].
pub fn page_progress(scroll_y: f32, viewport: &Viewport) -> f32 {
    let max = viewport.max_scroll();
    if max <= 0.0 {
        return 0.0;
    }
    (scroll_y / max).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0, 4000.0)
    }

    #[test]
    fn through_viewport_range() {
        // Target spans document y 1000..1400. Enters at scroll 200, leaves at 1400.
        let target = Some(Rect::new(0.0, 1000.0, 100.0, 400.0));
        let range = ScrollRange::THROUGH_VIEWPORT;
        assert_eq!(range.progress(target, &viewport(), 0.0), Some(0.0));
        assert_eq!(range.progress(target, &viewport(), 200.0), Some(0.0));
        assert_eq!(range.progress(target, &viewport(), 800.0), Some(0.5));
        assert_eq!(range.progress(target, &viewport(), 1400.0), Some(1.0));
        assert_eq!(range.progress(target, &viewport(), 9000.0), Some(1.0));
    }

    #[test]
    fn scroll_out_range() {
        // Hero at the top of the page, 800px tall.
        let target = Some(Rect::new(0.0, 0.0, 1000.0, 800.0));
        let range = ScrollRange::SCROLL_OUT;
        assert_eq!(range.progress(target, &viewport(), 0.0), Some(0.0));
        assert_eq!(range.progress(target, &viewport(), 400.0), Some(0.5));
    }

    #[test]
    fn unmeasured_target_has_no_progress() {
        assert_eq!(ScrollRange::THROUGH_VIEWPORT.progress(None, &viewport(), 10.0), None);
    }

    #[test]
    fn zero_span_is_a_step() {
        let range = ScrollRange {
            start: ScrollOffset::START_START,
            end: ScrollOffset::START_START,
        };
        let target = Some(Rect::new(0.0, 500.0, 10.0, 10.0));
        assert_eq!(range.progress(target, &viewport(), 499.0), Some(0.0));
        assert_eq!(range.progress(target, &viewport(), 500.0), Some(1.0));
    }

    #[test]
    fn page_progress() {
        let mut scroll = PageScroll::new();
        scroll.set(1600.0);
        assert_eq!(scroll.progress(&viewport()), 0.5);
        scroll.set(f32::NAN);
        assert_eq!(scroll.offset(), 1600.0);
        assert_eq!(scroll.progress(&Viewport::new(1000.0, 800.0, 600.0)), 0.0);
    }
}
