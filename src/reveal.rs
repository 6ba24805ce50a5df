// Reveal-on-scroll: hidden → revealing → visible, started by a cue.
// Every one-shot entrance on the page is a Reveal; wrappers differ only in styles and timing.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::spring::SpringConfig;
use crate::style::MotionStyle;
use crate::trigger::{TriggerConfig, VisibilityTrigger};
use crate::types::*;

/// How a reveal moves from its hidden to its visible style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transition {
    Tween {
        duration: f32,
        delay: f32,
        easing: Easing,
    },
    Spring {
        config: SpringConfig,
        delay: f32,
    },
}

impl Transition {
    /// Tween with the page's default reveal curve.
    pub fn tween(duration: f32) -> Self {
        Transition::Tween {
            duration,
            delay: 0.0,
            easing: Easing::EXPO_OUT,
        }
    }

    pub fn spring(config: SpringConfig) -> Self {
        Transition::Spring { config, delay: 0.0 }
    }

    pub fn with_delay(mut self, secs: f32) -> Self {
        match &mut self {
            Transition::Tween { delay, .. } | Transition::Spring { delay, .. } => *delay = secs,
        }
        self
    }

    pub fn with_easing(mut self, to: Easing) -> Self {
        if let Transition::Tween { easing, .. } = &mut self {
            *easing = to;
        }
        self
    }

    pub fn delay(&self) -> f32 {
        match self {
            Transition::Tween { delay, .. } | Transition::Spring { delay, .. } => *delay,
        }
    }

    /// Progress `elapsed` seconds after the cue, and whether the transition has finished.
    pub fn progress(&self, elapsed: f32) -> (f32, bool) {
        let t = elapsed - self.delay();
        if t <= 0.0 {
            return (0.0, false);
        }
        match self {
            Transition::Tween {
                duration, easing, ..
            } => {
                if *duration <= 0.0 || t >= *duration {
                    (1.0, true)
                } else {
                    (easing.apply(t / duration), false)
                }
            }
            Transition::Spring { config, .. } => {
                let p = config.progress(t);
                (p, p == 1.0)
            }
        }
    }
}

/// Reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Revealing { since: Timestamp },
    Visible,
}

/// One element's entrance animation.
#[derive(Debug, Clone)]
pub struct Reveal {
    hidden: MotionStyle,
    visible: MotionStyle,
    transition: Transition,
    state: RevealState,
}

impl Reveal {
    pub fn new(hidden: MotionStyle, transition: Transition) -> Self {
        let visible = match hidden.path_length {
            Some(_) => MotionStyle::IDENTITY.with_path_length(1.0),
            None => MotionStyle::IDENTITY,
        };
        Reveal {
            hidden,
            visible,
            transition,
            state: RevealState::Hidden,
        }
    }

    pub fn with_visible(mut self, visible: MotionStyle) -> Self {
        self.visible = visible;
        self
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// First-frame style.
    pub fn initial(&self) -> MotionStyle {
        self.hidden
    }

    /// Start revealing. No effect unless hidden.
    pub fn play(&mut self, now: Timestamp) {
        if self.state == RevealState::Hidden {
            self.state = RevealState::Revealing { since: now };
        }
    }

    /// Snap back to hidden, for repeating cues.
    pub fn reset(&mut self) {
        self.state = RevealState::Hidden;
    }

    /// Style at `now`, finishing the reveal once its transition completes.
    pub fn advance(&mut self, now: Timestamp) -> MotionStyle {
        match self.state {
            RevealState::Hidden => self.hidden,
            RevealState::Visible => self.visible,
            RevealState::Revealing { since } => {
                let (progress, done) = self.transition.progress(now.secs_since(since));
                if done {
                    self.state = RevealState::Visible;
                    self.visible
                } else {
                    self.hidden.lerp(&self.visible, progress)
                }
            }
        }
    }
}

/// What starts a reveal.
#[derive(Debug, Clone)]
pub enum Cue {
    /// First frame after the page is built.
    Mount,
    /// The element itself entering the viewport.
    InView(VisibilityTrigger),
    /// An enclosing section's trigger; the owner calls [`RevealElement::drive`].
    Parent,
}

impl Cue {
    pub fn in_view(margin: f32) -> Self {
        Cue::InView(VisibilityTrigger::new(TriggerConfig::once(margin)))
    }
}

/// Entrance direction presets for whole sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Direction {
    #[default]
    Up,
    Left,
    Right,
    Scale,
    Fade,
}

impl Direction {
    pub fn hidden_style(self) -> MotionStyle {
        let hidden = MotionStyle::hidden();
        match self {
            Direction::Up => hidden.with_y(60.0),
            Direction::Left => hidden.with_x(-60.0),
            Direction::Right => hidden.with_x(60.0),
            Direction::Scale => hidden.with_scale(0.92),
            Direction::Fade => hidden,
        }
    }
}

/// A single element with a reveal and the cue that starts it.
#[derive(Debug, Clone)]
pub struct RevealElement {
    id: ElementId,
    cue: Cue,
    reveal: Reveal,
}

impl RevealElement {
    pub fn new(id: ElementId, cue: Cue, reveal: Reveal) -> Self {
        RevealElement { id, cue, reveal }
    }

    /// Section entrance: slide or scale in from `direction` over 0.85 s.
    pub fn section(id: ElementId, direction: Direction) -> Self {
        RevealElement::new(
            id,
            Cue::in_view(-60.0),
            Reveal::new(direction.hidden_style(), Transition::tween(0.85)),
        )
    }

    /// Blur to sharp while fading up 40 px over 0.7 s.
    pub fn blur_fade(id: ElementId) -> Self {
        RevealElement::new(
            id,
            Cue::in_view(-60.0),
            Reveal::new(
                MotionStyle::hidden().with_y(40.0).with_blur(12.0),
                Transition::tween(0.7),
            ),
        )
    }

    /// Entrance that plays on the first frame.
    pub fn on_mount(id: ElementId, hidden: MotionStyle, transition: Transition) -> Self {
        RevealElement::new(id, Cue::Mount, Reveal::new(hidden, transition))
    }

    /// Entrance driven by an enclosing section's trigger.
    pub fn child(id: ElementId, hidden: MotionStyle, transition: Transition) -> Self {
        RevealElement::new(id, Cue::Parent, Reveal::new(hidden, transition))
    }

    pub fn with_delay(mut self, secs: f32) -> Self {
        self.reveal.transition = self.reveal.transition.with_delay(secs);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.reveal.transition = transition;
        self
    }

    pub fn with_visible(mut self, visible: MotionStyle) -> Self {
        self.reveal = self.reveal.with_visible(visible);
        self
    }

    pub fn with_cue(mut self, cue: Cue) -> Self {
        self.cue = cue;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn state(&self) -> RevealState {
        self.reveal.state()
    }

    /// Back to hidden so the next cue replays the entrance.
    pub fn reset(&mut self) {
        self.reveal.reset();
    }

    pub fn initial(&self) -> MotionStyle {
        self.reveal.initial()
    }

    /// Render `tag` carrying this element's id and first-frame style.
    pub fn render(&self, m: &mut Markup, tag: Tag, body: impl FnOnce(&mut Markup)) {
        m.element(tag.motion(&self.id).initial(&self.reveal.initial()), body);
    }

    /// Apply a cue decided by the owner and write the current style.
    pub fn drive(&mut self, cued: bool, ctx: &FrameContext, frame: &mut Frame) {
        if cued {
            self.reveal.play(ctx.now);
        }
        let style = self.reveal.advance(ctx.now);
        frame.motion(&self.id, &style);
    }
}

impl Effect for RevealElement {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let cued = match &mut self.cue {
            Cue::Mount => true,
            Cue::InView(trigger) => trigger.update(ctx.rect(&self.id), &ctx.viewport),
            Cue::Parent => false,
        };
        self.drive(cued, ctx, frame);
    }
}

/// Several child reveals started together by one element's visibility trigger.
#[derive(Debug, Clone)]
pub struct RevealGroup {
    id: ElementId,
    trigger: VisibilityTrigger,
    children: Vec<RevealElement>,
}

impl RevealGroup {
    pub fn new(id: ElementId, margin: f32) -> Self {
        RevealGroup {
            id,
            trigger: VisibilityTrigger::new(TriggerConfig::once(margin)),
            children: Vec::new(),
        }
    }

    pub fn with(mut self, id: ElementId, hidden: MotionStyle, transition: Transition) -> Self {
        self.children.push(RevealElement::child(id, hidden, transition));
        self
    }

    pub fn push(&mut self, id: ElementId, hidden: MotionStyle, transition: Transition) {
        self.children.push(RevealElement::child(id, hidden, transition));
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn is_in_view(&self) -> bool {
        self.trigger.is_in_view()
    }

    pub fn child(&self, id: &ElementId) -> Option<&RevealElement> {
        self.children.iter().find(|c| c.id() == id)
    }

    /// Render `tag` as child `id`. Unknown ids render without a first-frame style.
    pub fn render(&self, id: &ElementId, m: &mut Markup, tag: Tag, body: impl FnOnce(&mut Markup)) {
        match self.child(id) {
            Some(child) => child.render(m, tag, body),
            None => m.element(tag.motion(id), body),
        }
    }
}

impl Effect for RevealGroup {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let cued = self.trigger.update(ctx.rect(&self.id), &ctx.viewport);
        for child in &mut self.children {
            child.drive(cued, ctx, frame);
        }
    }
}

/// Decorative wave that draws itself when scrolled into view.
#[derive(Debug, Clone)]
pub struct DrawLine {
    id: ElementId,
    width: f32,
    height: f32,
    color: String,
    trigger: VisibilityTrigger,
    reveal: Reveal,
}

impl DrawLine {
    pub fn new(id: ElementId, color: impl Into<String>) -> Self {
        DrawLine {
            id,
            width: 200.0,
            height: 40.0,
            color: color.into(),
            trigger: VisibilityTrigger::new(TriggerConfig::once(-20.0)),
            reveal: Reveal::new(
                MotionStyle::hidden().with_path_length(0.0),
                Transition::tween(1.2),
            ),
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    fn path_id(&self) -> ElementId {
        self.id.child("path")
    }

    /// Quadratic wave across the box: up to the top edge, back through the middle.
    pub fn path_data(&self) -> String {
        let (w, h) = (self.width, self.height);
        format!(
            "M 0 {} Q {} 0, {} {} T {} {}",
            h / 2.0,
            w / 4.0,
            w / 2.0,
            h / 2.0,
            w,
            h / 2.0
        )
    }

    pub fn render(&self, m: &mut Markup) {
        let path_id = self.path_id();
        let path_data = self.path_data();
        let initial = self.reveal.initial();
        m.element(
            Tag::new("svg")
                .motion(&self.id)
                .attr("width", self.width.to_string())
                .attr("height", self.height.to_string())
                .attr("viewBox", format!("0 0 {} {}", self.width, self.height))
                .attr("fill", "none")
                .css("overflow:visible;"),
            |m| {
                m.element(
                    Tag::new("path")
                        .motion(&path_id)
                        .attr("d", path_data)
                        .attr("stroke", self.color.clone())
                        .attr("stroke-width", "2")
                        .attr("stroke-linecap", "round")
                        .attr("pathLength", "1")
                        .initial(&initial),
                    |_| {},
                );
            },
        );
    }

    pub fn state(&self) -> RevealState {
        self.reveal.state()
    }
}

impl Effect for DrawLine {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        if self.trigger.update(ctx.rect(&self.id), &ctx.viewport) {
            self.reveal.play(ctx.now);
        }
        let style = self.reveal.advance(ctx.now);
        frame.motion(&self.path_id(), &style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;

    #[test]
    fn tween_progress_respects_delay() {
        let t = Transition::tween(1.0).with_delay(0.5).with_easing(Easing::Linear);
        assert_eq!(t.progress(0.25), (0.0, false));
        assert_eq!(t.progress(1.0), (0.5, false));
        assert_eq!(t.progress(1.5), (1.0, true));
    }

    #[test]
    fn spring_transition_finishes() {
        let t = Transition::spring(SpringConfig::new(100.0, 20.0)).with_delay(0.1);
        assert_eq!(t.progress(0.05), (0.0, false));
        assert!(!t.progress(0.2).1);
        assert_eq!(t.progress(10.0), (1.0, true));
    }

    #[test]
    fn reveal_state_machine() {
        let mut reveal = Reveal::new(MotionStyle::hidden().with_y(60.0), Transition::tween(0.85));
        let start = Timestamp::from_millis(1000);
        assert_eq!(reveal.advance(start), reveal.initial());

        reveal.play(start);
        assert_eq!(reveal.state(), RevealState::Revealing { since: start });
        let mid = reveal.advance(Timestamp::from_millis(1200));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);

        // Replaying mid-flight does not restart.
        reveal.play(Timestamp::from_millis(1300));
        assert_eq!(reveal.state(), RevealState::Revealing { since: start });

        assert_eq!(reveal.advance(Timestamp::from_millis(2000)), MotionStyle::IDENTITY);
        assert_eq!(reveal.state(), RevealState::Visible);
    }

    #[test]
    fn direction_presets() {
        assert_eq!(Direction::Left.hidden_style().x, -60.0);
        assert_eq!(Direction::Right.hidden_style().x, 60.0);
        assert_eq!(Direction::Up.hidden_style().y, 60.0);
        assert_eq!(Direction::Scale.hidden_style().scale, 0.92);
        assert_eq!(Direction::Fade.hidden_style(), MotionStyle::hidden());
    }

    #[test]
    fn section_waits_for_viewport() {
        let mut world = World::new();
        let id = ElementId::new("features");
        world.place(&id, 0.0, 2000.0, 1280.0, 600.0);
        let mut section = RevealElement::section(id.clone(), Direction::Up);
        let mut frame = Frame::new();

        section.tick(&world.ctx(), &mut frame);
        assert_eq!(section.state(), RevealState::Hidden);
        assert_eq!(frame.output().styles[0].css, Direction::Up.hidden_style().to_css());

        world.scroll_y = 1500.0;
        world.advance_ms(16);
        section.tick(&world.ctx(), &mut frame);
        assert!(matches!(section.state(), RevealState::Revealing { .. }));

        // Scrolling away again does not hide a latched reveal.
        world.scroll_y = 0.0;
        world.advance_ms(1000);
        section.tick(&world.ctx(), &mut frame);
        assert_eq!(section.state(), RevealState::Visible);
    }

    #[test]
    fn unmeasured_section_stays_hidden() {
        let mut world = World::new();
        let mut fade = RevealElement::blur_fade(ElementId::new("cta.heading"));
        let mut frame = Frame::new();
        for _ in 0..10 {
            world.advance_ms(100);
            fade.tick(&world.ctx(), &mut frame);
        }
        assert_eq!(fade.state(), RevealState::Hidden);
    }

    #[test]
    fn mount_cue_plays_immediately() {
        let mut world = World::new();
        let mut title = RevealElement::on_mount(
            ElementId::new("hero.title"),
            MotionStyle::hidden().with_y(20.0).with_blur(8.0),
            Transition::tween(0.8).with_delay(0.3),
        );
        let mut frame = Frame::new();
        title.tick(&world.ctx(), &mut frame);
        assert!(matches!(title.state(), RevealState::Revealing { .. }));
        world.advance_ms(1200);
        title.tick(&world.ctx(), &mut frame);
        assert_eq!(title.state(), RevealState::Visible);
    }

    #[test]
    fn parent_cue_needs_owner() {
        let mut world = World::new();
        let mut heading = RevealElement::child(
            ElementId::new("games.heading"),
            MotionStyle::hidden().with_y(24.0),
            Transition::tween(0.7),
        );
        let mut frame = Frame::new();
        heading.tick(&world.ctx(), &mut frame);
        assert_eq!(heading.state(), RevealState::Hidden);
        heading.drive(true, &world.ctx(), &mut frame);
        world.advance_ms(800);
        heading.tick(&world.ctx(), &mut frame);
        assert_eq!(heading.state(), RevealState::Visible);
    }

    #[test]
    fn draw_line_path_and_render() {
        let line = DrawLine::new(ElementId::new("deco.line"), "var(--purple)");
        assert_eq!(line.path_data(), "M 0 20 Q 50 0, 100 20 T 200 20");
        let mut m = Markup::new();
        line.render(&mut m);
        assert!(m.as_str().contains(r#"pathLength="1""#));
        assert!(m.as_str().contains("stroke-dashoffset:1;"));
    }

    #[test]
    fn draw_line_draws_when_visible() {
        let mut world = World::new();
        let id = ElementId::new("deco.line");
        world.place(&id, 0.0, 300.0, 200.0, 40.0);
        let mut line = DrawLine::new(id.clone(), "var(--purple)");
        let mut frame = Frame::new();
        line.tick(&world.ctx(), &mut frame);
        world.advance_ms(1300);
        line.tick(&world.ctx(), &mut frame);
        assert_eq!(line.state(), RevealState::Visible);
        assert!(frame.output().styles.last().unwrap().css.ends_with("stroke-dashoffset:0;"));
    }

    #[test]
    fn group_reveals_children_together() {
        let mut world = World::new();
        let section = ElementId::new("games");
        world.place(&section, 0.0, 600.0, 1280.0, 900.0);
        let mut group = RevealGroup::new(section.clone(), -80.0)
            .with(
                section.child("heading"),
                MotionStyle::hidden().with_y(24.0),
                Transition::tween(0.7).with_delay(0.1),
            )
            .with(
                section.child("sub"),
                MotionStyle::hidden().with_y(16.0),
                Transition::tween(0.6).with_delay(0.25),
            );
        let mut frame = Frame::new();
        group.tick(&world.ctx(), &mut frame);
        assert!(group.is_in_view());
        // Heading ends at 0.8 s, sub at 0.85 s.
        world.advance_ms(820);
        group.tick(&world.ctx(), &mut frame);
        assert_eq!(
            group.child(&section.child("heading")).map(RevealElement::state),
            Some(RevealState::Visible)
        );
        assert!(matches!(
            group.child(&section.child("sub")).map(RevealElement::state),
            Some(RevealState::Revealing { .. })
        ));
    }
}
