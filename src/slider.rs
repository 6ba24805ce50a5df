// Endless horizontal marquee. Content is rendered twice so a shift of one
// content width lands exactly where it started.

use serde::{Deserialize, Serialize};

use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::style::MotionStyle;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SlideDirection {
    #[default]
    Left,
    Right,
}

/// Loop phase after `dt` more seconds, for a loop of `period` seconds.
pub fn advance_phase(phase: f32, dt: f32, period: f32) -> f32 {
    if period <= 0.0 || dt <= 0.0 {
        return phase;
    }
    (phase + dt / period).rem_euclid(1.0)
}

/// Track translation in px for a phase in [0, 1).
pub fn track_offset(direction: SlideDirection, phase: f32, content_width: f32) -> f32 {
    match direction {
        SlideDirection::Left => -phase * content_width,
        SlideDirection::Right => -(1.0 - phase) * content_width,
    }
}

#[derive(Debug, Clone)]
pub struct InfiniteSlider {
    id: ElementId,
    speed: f32,
    direction: SlideDirection,
    pause_on_hover: bool,
    hovered: bool,
    phase: f32,
}

impl InfiniteSlider {
    pub fn new(id: ElementId, speed: f32) -> Self {
        InfiniteSlider {
            id,
            speed,
            direction: SlideDirection::Left,
            pause_on_hover: true,
            hovered: false,
            phase: 0.0,
        }
    }

    pub fn with_direction(mut self, direction: SlideDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn without_pause(mut self) -> Self {
        self.pause_on_hover = false;
        self
    }

    pub fn track_id(&self) -> ElementId {
        self.id.child("track")
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.pause_on_hover && self.hovered
    }

    pub fn render(&self, m: &mut Markup, class: &str, content: impl Fn(&mut Markup)) {
        m.element(
            Tag::new("div").motion(&self.id).class(class).css(
                "overflow:hidden;width:100%;mask-image:linear-gradient(to right, transparent, black 10%, black 90%, transparent);",
            ),
            |m| {
                m.element(
                    Tag::new("div")
                        .motion(&self.track_id())
                        .css("display:flex;width:max-content;gap:2rem;"),
                    |m| {
                        content(m);
                        content(m);
                    },
                );
            },
        );
    }
}

impl Effect for InfiniteSlider {
    fn pointer(&mut self, event: &PointerEvent, _ctx: &FrameContext, _frame: &mut Frame) -> bool {
        if !event.target.is_within(&self.id) {
            return false;
        }
        match event.kind {
            PointerKind::Enter(_) | PointerKind::Move(_) => self.hovered = true,
            PointerKind::Leave if event.leaves(&self.id) => self.hovered = false,
            PointerKind::Leave | PointerKind::Click => {}
        }
        true
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let Some(track) = ctx.document_rect(&self.track_id()) else {
            return;
        };
        let content_width = track.width / 2.0;
        if content_width <= 0.0 {
            return;
        }
        if !self.is_paused() {
            self.phase = advance_phase(self.phase, ctx.dt, self.speed);
        }
        let x = track_offset(self.direction, self.phase, content_width);
        frame.motion(&self.track_id(), &MotionStyle::IDENTITY.with_x(x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;
    use proptest::prelude::*;

    #[test]
    fn unmeasured_track_does_nothing() {
        let mut world = World::new();
        let mut slider = InfiniteSlider::new(ElementId::new("proof.clients"), 25.0);
        let mut frame = Frame::new();
        world.advance_ms(1000);
        slider.tick(&world.ctx(), &mut frame);
        assert!(frame.output().is_empty());
        assert_eq!(slider.phase(), 0.0);
    }

    #[test]
    fn moves_and_pauses_on_hover() {
        let mut world = World::new();
        let mut slider = InfiniteSlider::new(ElementId::new("s"), 10.0);
        world.place(&slider.track_id(), 0.0, 0.0, 2000.0, 40.0);
        let mut frame = Frame::new();

        world.advance_ms(2500);
        slider.tick(&world.ctx(), &mut frame);
        assert!((slider.phase() - 0.25).abs() < 1e-5);
        assert!(frame.output().styles[0].css.contains("translate3d(-250px,0px,0)"));

        let enter = PointerEvent {
            target: ElementId::new("s.track"),
            kind: PointerKind::Enter(Vec2::new(5.0, 5.0)),
        };
        assert!(slider.pointer(&enter, &world.ctx(), &mut frame));
        world.advance_ms(3000);
        slider.tick(&world.ctx(), &mut frame);
        assert!((slider.phase() - 0.25).abs() < 1e-5);

        let leave = PointerEvent {
            target: ElementId::new("s"),
            kind: PointerKind::Leave,
        };
        slider.pointer(&leave, &world.ctx(), &mut frame);
        world.advance_ms(1000);
        slider.tick(&world.ctx(), &mut frame);
        assert!((slider.phase() - 0.35).abs() < 1e-5);
    }

    #[test]
    fn leaving_a_logo_keeps_the_strip_paused() {
        let world = World::new();
        let mut slider = InfiniteSlider::new(ElementId::new("s"), 10.0);
        let mut frame = Frame::new();
        let event = |target: &str, kind: PointerKind| PointerEvent {
            target: ElementId::new(target),
            kind,
        };
        slider.pointer(&event("s.track", PointerKind::Enter(Vec2::ZERO)), &world.ctx(), &mut frame);
        slider.pointer(&event("s.track", PointerKind::Leave), &world.ctx(), &mut frame);
        assert!(slider.is_paused());
        slider.pointer(&event("s", PointerKind::Leave), &world.ctx(), &mut frame);
        assert!(!slider.is_paused());
    }

    #[test]
    fn render_duplicates_content() {
        let slider = InfiniteSlider::new(ElementId::new("s"), 10.0);
        let mut m = Markup::new();
        slider.render(&mut m, "slider", |m| m.text("EY"));
        assert_eq!(m.as_str().matches("EY").count(), 2);
    }

    #[test]
    fn right_starts_shifted() {
        assert_eq!(track_offset(SlideDirection::Right, 0.0, 500.0), -500.0);
        assert_eq!(track_offset(SlideDirection::Right, 0.5, 500.0), -250.0);
    }

    proptest! {
        /// Offsets stay within one content width, and a whole period brings
        /// the track back to the same position.
        #[test]
        fn loop_is_seamless(
            start in 0.0f32..1.0,
            dt in 0.0f32..5.0,
            period in 1.0f32..60.0,
            width in 10.0f32..4000.0,
            right in proptest::bool::ANY,
        ) {
            let dir = if right { SlideDirection::Right } else { SlideDirection::Left };
            let phase = advance_phase(start, dt, period);
            prop_assert!((0.0..=1.0).contains(&phase));
            let offset = track_offset(dir, phase, width);
            prop_assert!(offset <= 0.0 && offset >= -width);

            let wrapped = advance_phase(phase, period, period);
            let again = track_offset(dir, wrapped, width);
            let diff = (again - offset).abs();
            prop_assert!(diff < 1e-2 * width || (diff - width).abs() < 1e-2 * width);
        }
    }
}
