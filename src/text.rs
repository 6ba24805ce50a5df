// Segmented text reveals: words or characters entering one after another.

use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::reveal::{Reveal, RevealState, Transition};
use crate::spring::SpringConfig;
use crate::style::MotionStyle;
use crate::trigger::{TriggerConfig, VisibilityTrigger};
use crate::types::ElementId;

/// How the text is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segmentation {
    Words,
    Characters,
}

impl Segmentation {
    pub fn split(self, text: &str) -> Vec<String> {
        match self {
            Segmentation::Words => text.split_whitespace().map(str::to_string).collect(),
            Segmentation::Characters => text.chars().map(String::from).collect(),
        }
    }
}

/// Text whose segments reveal in sequence once the text scrolls into view.
#[derive(Debug, Clone)]
pub struct SegmentedReveal {
    id: ElementId,
    tag: &'static str,
    class: Option<String>,
    segmentation: Segmentation,
    segments: Vec<String>,
    trigger: Option<VisibilityTrigger>,
    reveals: Vec<Reveal>,
}

impl SegmentedReveal {
    fn build(
        id: ElementId,
        text: &str,
        segmentation: Segmentation,
        margin: f32,
        hidden: MotionStyle,
        transition: impl Fn(usize) -> Transition,
    ) -> Self {
        let segments = segmentation.split(text);
        let reveals = (0..segments.len())
            .map(|i| Reveal::new(hidden, transition(i)))
            .collect();
        SegmentedReveal {
            id,
            tag: "span",
            class: None,
            segmentation,
            segments,
            trigger: Some(VisibilityTrigger::new(TriggerConfig::once(margin))),
            reveals,
        }
    }

    /// Words rise out of a clipped line, 0.04 s apart.
    pub fn text_reveal(id: ElementId, text: &str, delay: f32) -> Self {
        SegmentedReveal::build(
            id,
            text,
            Segmentation::Words,
            -40.0,
            MotionStyle::hidden().with_y_percent(100.0),
            |i| Transition::tween(0.6).with_delay(delay + i as f32 * 0.04),
        )
    }

    /// Characters fade up out of a blur, `step` seconds apart.
    pub fn character_reveal(id: ElementId, text: &str, delay: f32, step: f32) -> Self {
        SegmentedReveal::build(
            id,
            text,
            Segmentation::Characters,
            -20.0,
            MotionStyle::hidden().with_y(40.0).with_blur(8.0),
            |i| Transition::tween(0.5).with_delay(delay + i as f32 * step),
        )
    }

    /// Words swing in from below on a spring, 0.05 s apart.
    pub fn split_text(id: ElementId, text: &str, delay: f32) -> Self {
        let spring = SpringConfig::new(100.0, 20.0);
        SegmentedReveal::build(
            id,
            text,
            Segmentation::Words,
            -40.0,
            MotionStyle::hidden()
                .with_y(80.0)
                .with_rotate_x(50.0)
                .with_blur(8.0),
            |i| Transition::spring(spring).with_delay(delay + i as f32 * 0.05),
        )
    }

    /// Start on the first frame instead of on scroll.
    pub fn on_mount(mut self) -> Self {
        self.trigger = None;
        self
    }

    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn segment_id(&self, i: usize) -> ElementId {
        self.id.index(i)
    }

    /// Seconds after the cue at which segment `i` starts moving.
    pub fn segment_delay(&self, i: usize) -> Option<f32> {
        self.reveals.get(i).map(|r| r.transition().delay())
    }

    pub fn is_complete(&self) -> bool {
        self.reveals.iter().all(|r| r.state() == RevealState::Visible)
    }

    pub fn render(&self, m: &mut Markup) {
        let mut outer = Tag::new(self.tag).motion(&self.id);
        if let Some(class) = &self.class {
            outer = outer.class(class);
        }
        if self.segmentation == Segmentation::Words {
            outer = outer.css("display:flex;flex-wrap:wrap;");
        }
        m.element(outer, |m| {
            for (i, (segment, reveal)) in self.segments.iter().zip(&self.reveals).enumerate() {
                let seg = Tag::new("span")
                    .motion(&self.segment_id(i))
                    .css("display:inline-block;");
                match self.segmentation {
                    Segmentation::Words => {
                        // Each word sits in its own clipping box with a trailing gap.
                        m.element(
                            Tag::new("span").css(
                                "overflow:hidden;display:inline-block;margin-right:0.25em;perspective:600px;",
                            ),
                            |m| {
                                m.text_element(seg.initial(&reveal.initial()), segment);
                            },
                        );
                    }
                    Segmentation::Characters => {
                        let seg = if segment == " " {
                            seg.css("white-space:pre;")
                        } else {
                            seg
                        };
                        m.text_element(seg.initial(&reveal.initial()), segment);
                    }
                }
            }
        });
    }
}

impl Effect for SegmentedReveal {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let cued = match &mut self.trigger {
            Some(trigger) => trigger.update(ctx.rect(&self.id), &ctx.viewport),
            None => true,
        };
        for (i, reveal) in self.reveals.iter_mut().enumerate() {
            if cued {
                reveal.play(ctx.now);
            }
            let style = reveal.advance(ctx.now);
            frame.motion(&self.id.index(i), &style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;

    #[test]
    fn splits_words_and_characters() {
        assert_eq!(
            Segmentation::Words.split("  Of Learning   Games "),
            vec!["Of", "Learning", "Games"]
        );
        assert_eq!(Segmentation::Characters.split("a b").len(), 3);
    }

    #[test]
    fn delays_step_per_segment() {
        let words = SegmentedReveal::text_reveal(ElementId::new("t"), "one two three", 0.2);
        assert_eq!(words.segment_delay(0), Some(0.2));
        assert!((words.segment_delay(2).unwrap() - 0.28).abs() < 1e-6);
        assert_eq!(words.segment_delay(3), None);

        let chars = SegmentedReveal::character_reveal(ElementId::new("c"), "abc", 0.0, 0.02);
        assert!((chars.segment_delay(2).unwrap() - 0.04).abs() < 1e-6);
    }

    #[test]
    fn character_spaces_preserve_whitespace() {
        let chars = SegmentedReveal::character_reveal(ElementId::new("c"), "a b", 0.0, 0.02);
        let mut m = Markup::new();
        chars.render(&mut m);
        assert!(m.as_str().contains("white-space:pre;"));
        assert!(m.as_str().contains(r#"data-motion="c.2""#));
    }

    #[test]
    fn word_reveal_starts_below_line() {
        let words = SegmentedReveal::text_reveal(ElementId::new("t"), "hello", 0.0);
        let mut m = Markup::new();
        words.render(&mut m);
        assert!(m.as_str().contains("translateY(100%)"));
    }

    #[test]
    fn split_text_on_mount_completes() {
        let mut world = World::new();
        let mut split =
            SegmentedReveal::split_text(ElementId::new("hero.split"), "Of Learning Games", 0.45)
                .on_mount();
        let mut frame = Frame::new();
        split.tick(&world.ctx(), &mut frame);
        assert_eq!(frame.output().styles.len(), 3);
        assert!(!split.is_complete());
        world.advance_ms(6000);
        split.tick(&world.ctx(), &mut frame);
        assert!(split.is_complete());
    }

    #[test]
    fn scroll_cued_text_waits_for_view() {
        let mut world = World::new();
        let id = ElementId::new("t");
        world.place(&id, 0.0, 3000.0, 400.0, 40.0);
        let mut words = SegmentedReveal::text_reveal(id, "later on", 0.0);
        let mut frame = Frame::new();
        world.advance_ms(5000);
        words.tick(&world.ctx(), &mut frame);
        assert!(!words.is_complete());
    }
}
