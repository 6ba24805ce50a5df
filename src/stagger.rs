// Staggered group reveal: one trigger on the container, children start in sequence.

use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::reveal::{Reveal, RevealState, Transition};
use crate::style::MotionStyle;
use crate::trigger::{TriggerConfig, VisibilityTrigger};
use crate::types::ElementId;

pub const DEFAULT_STEP: f32 = 0.08;
pub const DEFAULT_DELAY_CHILDREN: f32 = 0.15;

/// Start offset of item `i`.
pub fn item_delay(delay_children: f32, step: f32, i: usize) -> f32 {
    delay_children + i as f32 * step
}

#[derive(Debug, Clone)]
pub struct StaggerContainer {
    id: ElementId,
    trigger: VisibilityTrigger,
    step: f32,
    delay_children: f32,
    items: Vec<Reveal>,
}

impl StaggerContainer {
    pub fn new(id: ElementId, count: usize) -> Self {
        StaggerContainer::with_timing(id, count, DEFAULT_STEP, DEFAULT_DELAY_CHILDREN, -60.0)
    }

    pub fn with_timing(
        id: ElementId,
        count: usize,
        step: f32,
        delay_children: f32,
        margin: f32,
    ) -> Self {
        let hidden = MotionStyle::hidden().with_y(50.0).with_blur(8.0);
        let items = (0..count)
            .map(|i| {
                Reveal::new(
                    hidden,
                    Transition::tween(0.7).with_delay(item_delay(delay_children, step, i)),
                )
            })
            .collect();
        StaggerContainer {
            id,
            trigger: VisibilityTrigger::new(TriggerConfig::once(margin)),
            step,
            delay_children,
            items,
        }
    }

    /// Replace the item entrance, keeping the stagger offsets.
    pub fn with_item_hidden(mut self, hidden: MotionStyle, duration: f32) -> Self {
        let (step, delay_children) = (self.step, self.delay_children);
        for (i, item) in self.items.iter_mut().enumerate() {
            *item = Reveal::new(
                hidden,
                Transition::tween(duration).with_delay(item_delay(delay_children, step, i)),
            );
        }
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_id(&self, i: usize) -> ElementId {
        self.id.index(i)
    }

    pub fn item_state(&self, i: usize) -> Option<RevealState> {
        self.items.get(i).map(Reveal::state)
    }

    /// Render the container and one wrapper per item; `item` writes the item's contents.
    pub fn render(&self, m: &mut Markup, tag: Tag, item: impl Fn(usize, &mut Markup)) {
        m.element(tag.motion(&self.id), |m| {
            for (i, reveal) in self.items.iter().enumerate() {
                m.element(
                    Tag::new("div")
                        .motion(&self.item_id(i))
                        .initial(&reveal.initial()),
                    |m| item(i, m),
                );
            }
        });
    }
}

impl Effect for StaggerContainer {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let cued = self.trigger.update(ctx.rect(&self.id), &ctx.viewport);
        for (i, item) in self.items.iter_mut().enumerate() {
            if cued {
                item.play(ctx.now);
            }
            let style = item.advance(ctx.now);
            frame.motion(&self.id.index(i), &style);
        }
    }
}
