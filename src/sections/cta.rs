// Closing call to action: a card that rises in with its copy fading up line by line.

use crate::ambient::aurora_background;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::reveal::{RevealElement, RevealGroup, Transition};
use crate::sections::Section;
use crate::style::MotionStyle;
use crate::types::*;

const BUTTON_ARROW: &str = r#"<svg width="16" height="16" viewBox="0 0 16 16" fill="none"><path d="M4 8h8M9 5l3 3-3 3" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

pub struct Cta {
    id: ElementId,
    card: RevealGroup,
    lines: [RevealElement; 4],
    contact_url: String,
}

impl Cta {
    pub fn new(config: &EngineConfig) -> Self {
        let id = ElementId::new("cta");
        let card = RevealGroup::new(id.clone(), -80.0).with(
            id.child("card"),
            MotionStyle::hidden().with_y(40.0),
            Transition::tween(0.7),
        );
        let line = |name: &str, delay: f32| RevealElement::blur_fade(id.child(name)).with_delay(delay);
        Cta {
            lines: [
                line("heading", 0.15),
                line("subtitle", 0.25),
                line("highlight", 0.35),
                line("button", 0.45),
            ],
            card,
            contact_url: config.contact_url.clone(),
            id,
        }
    }
}

impl Section for Cta {
    fn name(&self) -> &'static str {
        "cta"
    }

    fn render(&self, m: &mut Markup) {
        let [heading, subtitle, highlight, button] = &self.lines;
        m.element(
            Tag::new("section")
                .motion(&self.id)
                .class("cta")
                .attr("id", "contact"),
            |m| {
                m.element(Tag::new("div").class("container"), |m| {
                    self.card.render(&self.id.child("card"), m, Tag::new("div").class("cta-card"), |m| {
                        aurora_background(m, "cta-bg-deco", |m| {
                            m.element(Tag::new("div").class("cta-blob-1"), |_| {});
                            m.element(Tag::new("div").class("cta-blob-2"), |_| {});
                        });
                        m.element(Tag::new("div").class("cta-inner"), |m| {
                            heading.render(m, Tag::new("div"), |m| {
                                m.element(Tag::new("h2").class("cta-heading"), |m| {
                                    m.text("Upgrade Your Training ");
                                    m.text_element(Tag::new("span").class("cta-heading-accent"), "Calendar Today");
                                });
                            });
                            subtitle.render(m, Tag::new("div"), |m| {
                                m.text_element(
                                    Tag::new("p").class("cta-subtitle"),
                                    "Be the first to bring these seamless, high-impact tools to your organization.",
                                );
                            });
                            highlight.render(m, Tag::new("div"), |m| {
                                m.text_element(Tag::new("p").class("cta-highlight"), "One kit. Endless impact.");
                            });
                            button.render(m, Tag::new("div"), |m| {
                                m.element(
                                    Tag::new("a").class("cta-btn").external(&self.contact_url),
                                    |m| {
                                        m.element(Tag::new("span").class("cta-btn-shimmer"), |_| {});
                                        m.text("Get a Quote");
                                        m.raw(BUTTON_ARROW);
                                    },
                                );
                            });
                        });
                    });
                });
            },
        );
    }
}

impl Effect for Cta {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        self.card.tick(ctx, frame);
        for line in &mut self.lines {
            line.tick(ctx, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;
    use crate::reveal::RevealState;

    #[test]
    fn copy_lines_follow_in_order() {
        let mut world = World::new();
        world.place(&ElementId::new("cta"), 0.0, 100.0, 1280.0, 600.0);
        for name in ["heading", "subtitle", "highlight", "button"] {
            world.place(&ElementId::new("cta").child(name), 200.0, 300.0, 800.0, 60.0);
        }
        let mut cta = Cta::new(&EngineConfig::default());
        let mut frame = Frame::new();
        cta.tick(&world.ctx(), &mut frame);
        // Heading ends at 0.85 s, button at 1.15 s.
        world.advance_ms(900);
        cta.tick(&world.ctx(), &mut frame);
        assert_eq!(cta.lines[0].state(), RevealState::Visible);
        assert!(matches!(cta.lines[3].state(), RevealState::Revealing { .. }));
        assert!(cta.card.is_in_view());
    }

    #[test]
    fn button_links_to_contact_page() {
        let config = EngineConfig {
            contact_url: "https://example.org/quote".into(),
            ..EngineConfig::default()
        };
        let mut m = Markup::new();
        Cta::new(&config).render(&mut m);
        let html = m.into_string();
        assert!(html.contains(r#"href="https://example.org/quote""#));
        assert!(html.contains("animation:aurora"));
    }
}
