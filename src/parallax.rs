// Scroll-linked transforms: element progress through a scroll range mapped
// through curves onto y, scale and opacity, plus the page progress bar.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::MotionError;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::scroll::{page_progress, ScrollRange};
use crate::spring::{SpringConfig, SpringValue};
use crate::style::MotionStyle;
use crate::types::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ParallaxDirection {
    #[default]
    Up,
    Down,
}

/// Styles one element from the scroll progress of another (often itself).
#[derive(Debug, Clone)]
pub struct ScrollLinked {
    source: ElementId,
    target: ElementId,
    range: ScrollRange,
    y: Option<Curve>,
    scale: Option<Curve>,
    opacity: Option<Curve>,
    last_progress: Option<f32>,
}

impl ScrollLinked {
    pub fn new(source: ElementId, target: ElementId, range: ScrollRange) -> Self {
        ScrollLinked {
            source,
            target,
            range,
            y: None,
            scale: None,
            opacity: None,
            last_progress: None,
        }
    }

    /// Vertical drift of `100·speed` px either side of rest while the element crosses the viewport.
    pub fn parallax(id: ElementId, speed: f32, direction: ParallaxDirection) -> Self {
        let factor = match direction {
            ParallaxDirection::Up => -1.0,
            ParallaxDirection::Down => 1.0,
        };
        let travel = factor * 100.0 * speed;
        ScrollLinked::new(id.clone(), id, ScrollRange::THROUGH_VIEWPORT)
            .with_y(Curve::linear(0.0, 1.0, travel, -travel))
    }

    /// Grow in on entry, settle, shrink slightly and fade on exit.
    pub fn scroll_scale(id: ElementId) -> Result<Self, MotionError> {
        Ok(ScrollLinked::new(id.clone(), id, ScrollRange::THROUGH_VIEWPORT)
            .with_scale(Curve::from_slices(&[0.0, 0.3, 0.7, 1.0], &[0.85, 1.0, 1.0, 0.95])?)
            .with_opacity(Curve::from_slices(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.3])?))
    }

    pub fn with_y(mut self, curve: Curve) -> Self {
        self.y = Some(curve);
        self
    }

    pub fn with_scale(mut self, curve: Curve) -> Self {
        self.scale = Some(curve);
        self
    }

    pub fn with_opacity(mut self, curve: Curve) -> Self {
        self.opacity = Some(curve);
        self
    }

    pub fn target(&self) -> &ElementId {
        &self.target
    }

    /// Style at a given progress.
    pub fn style_at(&self, progress: f32) -> MotionStyle {
        let mut style = MotionStyle::IDENTITY;
        if let Some(y) = &self.y {
            style.y = y.sample(progress);
        }
        if let Some(scale) = &self.scale {
            style.scale = scale.sample(progress);
        }
        if let Some(opacity) = &self.opacity {
            style.opacity = opacity.sample(progress).clamp(0.0, 1.0);
        }
        style
    }

    pub fn initial(&self) -> MotionStyle {
        self.style_at(0.0)
    }

    pub fn render(&self, m: &mut Markup, tag: Tag, body: impl FnOnce(&mut Markup)) {
        m.element(tag.motion(&self.target).initial(&self.initial()), body);
    }
}

impl Effect for ScrollLinked {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let progress = self
            .range
            .progress(ctx.document_rect(&self.source), &ctx.viewport, ctx.scroll_y);
        let Some(progress) = progress else {
            return;
        };
        if self.last_progress == Some(progress) {
            return;
        }
        self.last_progress = Some(progress);
        frame.motion(&self.target, &self.style_at(progress));
    }
}

/// Fixed bar across the top of the page whose width follows page progress.
#[derive(Debug, Clone)]
pub struct ScrollProgressLine {
    id: ElementId,
    spring: SpringValue,
}

impl ScrollProgressLine {
    pub fn new(id: ElementId) -> Self {
        ScrollProgressLine {
            id,
            spring: SpringValue::new(
                0.0,
                SpringConfig::new(100.0, 30.0).with_rest_delta(0.001),
            ),
        }
    }

    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    pub fn render(&self, m: &mut Markup) {
        m.element(
            Tag::new("div")
                .motion(&self.id)
                .class("scroll-progress")
                .css("position:fixed;top:0;left:0;right:0;height:3px;z-index:9999;transform-origin:left;background:linear-gradient(90deg, var(--purple), var(--red), var(--yellow), var(--green));")
                .initial(&MotionStyle::IDENTITY.with_scale_x(0.0)),
            |_| {},
        );
    }
}

impl Effect for ScrollProgressLine {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        self.spring.set_target(page_progress(ctx.scroll_y, &ctx.viewport));
        let x = self.spring.step(ctx.dt);
        frame.motion(&self.id, &MotionStyle::IDENTITY.with_scale_x(x));
    }
}
