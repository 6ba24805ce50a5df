// Animated counter: springs from zero to its value the first time it is seen.

use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::spring::{SpringConfig, SpringValue};
use crate::trigger::{TriggerConfig, VisibilityTrigger};
use crate::types::ElementId;

#[derive(Debug, Clone)]
pub struct NumberTicker {
    id: ElementId,
    value: f32,
    prefix: String,
    suffix: String,
    trigger: VisibilityTrigger,
    spring: SpringValue,
    displayed: i64,
}

impl NumberTicker {
    pub fn new(id: ElementId, value: f32) -> Self {
        NumberTicker {
            id,
            value,
            prefix: String::new(),
            suffix: String::new(),
            trigger: VisibilityTrigger::new(TriggerConfig::once(0.0)),
            spring: SpringValue::new(0.0, SpringConfig::from_duration(2.0)),
            displayed: 0,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    pub fn with_duration(mut self, secs: f32) -> Self {
        self.spring = SpringValue::new(0.0, SpringConfig::from_duration(secs));
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    fn format(&self, n: i64) -> String {
        format!("{}{}{}", self.prefix, n, self.suffix)
    }

    /// Text currently shown.
    pub fn text(&self) -> String {
        self.format(self.displayed)
    }

    pub fn render(&self, m: &mut Markup, class: &str) {
        m.text_element(Tag::new("span").motion(&self.id).class(class), &self.text());
    }
}

impl Effect for NumberTicker {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let was_in_view = self.trigger.is_in_view();
        if self.trigger.update(ctx.rect(&self.id), &ctx.viewport) && !was_in_view {
            self.spring.set_target(self.value);
        }
        let rounded = self.spring.step(ctx.dt).round() as i64;
        if rounded != self.displayed {
            self.displayed = rounded;
            frame.text(&self.id, self.format(rounded));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;

    fn run(ticker: &mut NumberTicker, world: &mut World, frames: usize) -> Vec<String> {
        let mut texts = Vec::new();
        for _ in 0..frames {
            world.advance_ms(16);
            let mut frame = Frame::new();
            ticker.tick(&world.ctx(), &mut frame);
            texts.extend(frame.into_output().texts.into_iter().map(|t| t.text));
        }
        texts
    }

    #[test]
    fn counts_up_to_value_once_visible() {
        let mut world = World::new();
        let id = ElementId::new("proof.stat.2.value");
        world.place(&id, 0.0, 300.0, 100.0, 40.0);
        let mut ticker = NumberTicker::new(id, 5000.0).with_suffix("+");
        assert_eq!(ticker.text(), "0+");

        let texts = run(&mut ticker, &mut world, 600);
        assert_eq!(texts.last().map(String::as_str), Some("5000+"));
        assert_eq!(ticker.text(), "5000+");
        // No frame repeats the previous text.
        for pair in texts.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn stays_at_zero_off_screen() {
        let mut world = World::new();
        let id = ElementId::new("n");
        world.place(&id, 0.0, 3000.0, 100.0, 40.0);
        let mut ticker = NumberTicker::new(id, 50.0).with_prefix("~");
        assert!(run(&mut ticker, &mut world, 100).is_empty());
        assert_eq!(ticker.text(), "~0");
    }

    #[test]
    fn does_not_retrigger() {
        let mut world = World::new();
        let id = ElementId::new("n");
        world.place(&id, 0.0, 300.0, 100.0, 40.0);
        let mut ticker = NumberTicker::new(id.clone(), 12.0);
        run(&mut ticker, &mut world, 600);
        world.scroll_y = 2000.0;
        run(&mut ticker, &mut world, 10);
        world.scroll_y = 0.0;
        assert!(run(&mut ticker, &mut world, 60).is_empty());
        assert_eq!(ticker.text(), "12");
    }
}
