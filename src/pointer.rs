// Pointer tracking: cursor position relative to an element, and the hover effects built on it.
// Client coordinates in, offsets out. Missing measurements leave the effect untouched.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::spring::{SpringConfig, SpringValue};
use crate::style::{round, MotionStyle};
use crate::toggle::Toggle;
use crate::types::*;

/// Reference point offsets are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Center,
    TopLeft,
}

/// Converts raw cursor coordinates into an offset from an element's anchor.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    anchor: Anchor,
    strength: f32,
    offset: Vec2,
    hovering: bool,
}

impl PointerTracker {
    pub fn new(anchor: Anchor, strength: f32) -> Self {
        PointerTracker {
            anchor,
            strength,
            offset: Vec2::ZERO,
            hovering: false,
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Cursor moved over the element. `None` if the element has not been measured.
    pub fn on_move(&mut self, cursor: Vec2, rect: Option<Rect>) -> Option<Vec2> {
        let rect = rect?;
        let reference = match self.anchor {
            Anchor::Center => rect.center(),
            Anchor::TopLeft => Vec2::new(rect.left(), rect.top()),
        };
        self.hovering = true;
        self.offset = Vec2::new(cursor.x - reference.x, cursor.y - reference.y).scale(self.strength);
        Some(self.offset)
    }

    /// Cursor left: back to neutral.
    pub fn on_leave(&mut self) {
        self.hovering = false;
        self.offset = Vec2::ZERO;
    }
}

/// Element drifts toward the cursor while hovered and springs back on leave.
#[derive(Debug, Clone)]
pub struct MagneticHover {
    id: ElementId,
    tracker: PointerTracker,
    x: SpringValue,
    y: SpringValue,
}

impl MagneticHover {
    pub const DEFAULT_STRENGTH: f32 = 0.3;

    pub fn new(id: ElementId, strength: f32) -> Self {
        let spring = SpringConfig::new(200.0, 15.0);
        MagneticHover {
            id,
            tracker: PointerTracker::new(Anchor::Center, strength),
            x: SpringValue::new(0.0, spring),
            y: SpringValue::new(0.0, spring),
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn render(&self, m: &mut Markup, body: impl FnOnce(&mut Markup)) {
        m.element(
            Tag::new("div").motion(&self.id).css("display:inline-block;"),
            body,
        );
    }

    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }
}

impl Effect for MagneticHover {
    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, _frame: &mut Frame) -> bool {
        if !event.target.is_within(&self.id) {
            return false;
        }
        match event.kind {
            PointerKind::Move(cursor) | PointerKind::Enter(cursor) => {
                if let Some(offset) = self.tracker.on_move(cursor, ctx.rect(&self.id)) {
                    self.x.set_target(offset.x);
                    self.y.set_target(offset.y);
                }
            }
            PointerKind::Leave if event.leaves(&self.id) => {
                self.tracker.on_leave();
                self.x.set_target(0.0);
                self.y.set_target(0.0);
            }
            PointerKind::Leave | PointerKind::Click => {}
        }
        true
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let x = self.x.step(ctx.dt);
        let y = self.y.step(ctx.dt);
        frame.motion(&self.id, &MotionStyle::IDENTITY.with_x(x).with_y(y));
    }
}

/// 3D card tilt following the cursor, with an optional glare highlight.
#[derive(Debug, Clone)]
pub struct TiltCard {
    id: ElementId,
    tilt: f32,
    hover_scale: f32,
    glare: bool,
    hovered: bool,
    glare_pos: Vec2,
    rotate_x: SpringValue,
    rotate_y: SpringValue,
    scale: SpringValue,
}

impl TiltCard {
    pub fn new(id: ElementId) -> Self {
        let spring = SpringConfig::new(300.0, 20.0);
        TiltCard {
            id,
            tilt: 8.0,
            hover_scale: 1.02,
            glare: true,
            hovered: false,
            glare_pos: Vec2::new(50.0, 50.0),
            rotate_x: SpringValue::new(0.0, spring),
            rotate_y: SpringValue::new(0.0, spring),
            scale: SpringValue::new(1.0, spring),
        }
    }

    pub fn with_tilt(mut self, degrees: f32) -> Self {
        self.tilt = degrees;
        self
    }

    pub fn with_hover_scale(mut self, scale: f32) -> Self {
        self.hover_scale = scale;
        self
    }

    pub fn without_glare(mut self) -> Self {
        self.glare = false;
        self
    }

    fn glare_id(&self) -> ElementId {
        self.id.child("glare")
    }

    pub fn render(&self, m: &mut Markup, body: impl FnOnce(&mut Markup)) {
        let glare = self.glare.then(|| self.glare_id());
        m.element(
            Tag::new("div")
                .motion(&self.id)
                .css("position:relative;transform-style:preserve-3d;perspective:1000px;"),
            |m| {
                body(m);
                if let Some(glare) = glare {
                    m.element(
                        Tag::new("div").motion(&glare).css(
                            "position:absolute;inset:0;border-radius:inherit;pointer-events:none;\
                             opacity:0;transition:opacity 0.3s ease;z-index:2;",
                        ),
                        |_| {},
                    );
                }
            },
        );
    }

    fn track(&mut self, cursor: Vec2, rect: Option<Rect>) {
        let Some(rect) = rect else {
            return;
        };
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let center = rect.center();
        let nx = (cursor.x - center.x) / (rect.width / 2.0);
        let ny = (cursor.y - center.y) / (rect.height / 2.0);
        self.rotate_x.set_target(-ny * self.tilt);
        self.rotate_y.set_target(nx * self.tilt);
        self.glare_pos = Vec2::new(
            (cursor.x - rect.left()) / rect.width * 100.0,
            (cursor.y - rect.top()) / rect.height * 100.0,
        );
    }
}

impl Effect for TiltCard {
    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, _frame: &mut Frame) -> bool {
        if !event.target.is_within(&self.id) {
            return false;
        }
        match event.kind {
            PointerKind::Enter(cursor) => {
                self.hovered = true;
                self.scale.set_target(self.hover_scale);
                self.track(cursor, ctx.rect(&self.id));
            }
            PointerKind::Move(cursor) => self.track(cursor, ctx.rect(&self.id)),
            PointerKind::Leave if event.leaves(&self.id) => {
                self.hovered = false;
                self.rotate_x.set_target(0.0);
                self.rotate_y.set_target(0.0);
                self.scale.set_target(1.0);
            }
            PointerKind::Leave | PointerKind::Click => {}
        }
        true
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let style = MotionStyle::IDENTITY
            .with_rotate_x(self.rotate_x.step(ctx.dt))
            .with_rotate_y(self.rotate_y.step(ctx.dt))
            .with_scale(self.scale.step(ctx.dt));
        frame.motion(&self.id, &style);

        if self.glare {
            frame.style(
                &self.glare_id(),
                format!(
                    "background:radial-gradient(circle at {}% {}%, rgba(255,255,255,0.15), transparent 60%);opacity:{};",
                    round(self.glare_pos.x),
                    round(self.glare_pos.y),
                    if self.hovered { 1 } else { 0 }
                ),
            );
        }
    }
}

/// Radial spotlight that follows the cursor across a card.
#[derive(Debug, Clone)]
pub struct SpotlightCard {
    id: ElementId,
    color: String,
    tracker: PointerTracker,
    position: Vec2,
}

impl SpotlightCard {
    pub const DEFAULT_COLOR: &'static str = "rgba(124, 58, 237, 0.08)";

    pub fn new(id: ElementId, color: impl Into<String>) -> Self {
        SpotlightCard {
            id,
            color: color.into(),
            tracker: PointerTracker::new(Anchor::TopLeft, 1.0),
            position: Vec2::ZERO,
        }
    }

    fn layer_id(&self) -> ElementId {
        self.id.child("spotlight")
    }

    pub fn is_hovered(&self) -> bool {
        self.tracker.is_hovering()
    }

    pub fn render(&self, m: &mut Markup, body: impl FnOnce(&mut Markup)) {
        let layer = self.layer_id();
        m.element(
            Tag::new("div")
                .motion(&self.id)
                .css("position:relative;overflow:hidden;"),
            |m| {
                m.element(
                    Tag::new("div").motion(&layer).css(
                        "position:absolute;inset:0;opacity:0;transition:opacity 0.3s ease;\
                         pointer-events:none;z-index:0;border-radius:inherit;",
                    ),
                    |_| {},
                );
                m.element(Tag::new("div").css("position:relative;z-index:1;"), body);
            },
        );
    }
}

impl Effect for SpotlightCard {
    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, _frame: &mut Frame) -> bool {
        if !event.target.is_within(&self.id) {
            return false;
        }
        match event.kind {
            PointerKind::Move(cursor) | PointerKind::Enter(cursor) => {
                if let Some(offset) = self.tracker.on_move(cursor, ctx.rect(&self.id)) {
                    self.position = offset;
                }
            }
            // Gradient stays where it was; only the layer fades out.
            PointerKind::Leave if event.leaves(&self.id) => self.tracker.on_leave(),
            PointerKind::Leave | PointerKind::Click => {}
        }
        true
    }

    fn tick(&mut self, _ctx: &FrameContext, frame: &mut Frame) {
        frame.style(
            &self.layer_id(),
            format!(
                "background:radial-gradient(350px circle at {}px {}px, {}, transparent 80%);opacity:{};",
                round(self.position.x),
                round(self.position.y),
                self.color,
                if self.tracker.is_hovering() { 1 } else { 0 }
            ),
        );
    }
}

/// Scale and rotate toward a hover pose while the pointer is over the element.
#[derive(Debug, Clone)]
pub struct HoverPop {
    id: ElementId,
    pose: MotionStyle,
    toggle: Toggle,
}

impl HoverPop {
    pub fn new(id: ElementId, scale: f32, rotate: f32) -> Self {
        HoverPop {
            id,
            pose: MotionStyle::IDENTITY.with_scale(scale).with_rotate(rotate),
            toggle: Toggle::new(0.3, Easing::EaseOut),
        }
    }

    pub fn render(&self, m: &mut Markup, tag: Tag, body: impl FnOnce(&mut Markup)) {
        m.element(tag.motion(&self.id), body);
    }

    pub fn is_hovered(&self) -> bool {
        self.toggle.is_on()
    }
}

impl Effect for HoverPop {
    fn pointer(&mut self, event: &PointerEvent, _ctx: &FrameContext, _frame: &mut Frame) -> bool {
        if !event.target.is_within(&self.id) {
            return false;
        }
        match event.kind {
            PointerKind::Enter(_) | PointerKind::Move(_) => self.toggle.set(true),
            PointerKind::Leave if event.leaves(&self.id) => self.toggle.set(false),
            PointerKind::Leave | PointerKind::Click => {}
        }
        true
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let t = self.toggle.step(ctx.dt);
        frame.motion(&self.id, &MotionStyle::IDENTITY.lerp(&self.pose, t));
    }
}
