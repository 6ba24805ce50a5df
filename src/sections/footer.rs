// Footer: four columns that stagger up once the footer is in view.

use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::sections::Section;
use crate::stagger::StaggerContainer;
use crate::style::MotionStyle;
use crate::types::*;

const LINKEDIN_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 24 24" fill="none"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z" stroke="currentColor" stroke-width="1.5"/><rect x="2" y="9" width="4" height="12" stroke="currentColor" stroke-width="1.5"/><circle cx="4" cy="4" r="2" stroke="currentColor" stroke-width="1.5"/></svg>"#;

const COMPANY: [(&str, &str); 3] = [
    ("About Us", "https://playkairos.com/about-us/"),
    ("Blog", "https://playkairos.com/blog/"),
    ("Main Site", "https://playkairos.com"),
];

const GAMES: [&str; 4] = ["Team Compass", "Shared Spaces", "Surface Tension", "Cycle Time"];

const CONTACT: [(&str, &str); 3] = [
    ("gomathi@blueskylearning.in", "mailto:gomathi@blueskylearning.in"),
    ("deepak@playkairos.com", "mailto:deepak@playkairos.com"),
    ("+91 72999 48787", "tel:+917299948787"),
];

pub struct Footer {
    grid: StaggerContainer,
}

impl Footer {
    pub fn new() -> Self {
        Footer {
            grid: StaggerContainer::with_timing(ElementId::new("footer.grid"), 4, 0.08, 0.1, -40.0)
                .with_item_hidden(MotionStyle::hidden().with_y(20.0), 0.5),
        }
    }

    fn column(m: &mut Markup, title: &str, links: impl FnOnce(&mut Markup)) {
        m.element(Tag::new("div").class("footer-column"), |m| {
            m.text_element(Tag::new("h4"), title);
            m.element(Tag::new("ul"), links);
        });
    }
}

impl Default for Footer {
    fn default() -> Self {
        Footer::new()
    }
}

impl Section for Footer {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn render(&self, m: &mut Markup) {
        m.element(Tag::new("footer").class("footer"), |m| {
            m.element(Tag::new("div").class("footer-grad-line"), |_| {});
            self.grid.render(m, Tag::new("div").class("container footer-grid"), |i, m| match i {
                0 => m.element(Tag::new("div").class("footer-brand"), |m| {
                    m.element(Tag::new("div").class("footer-brand-row"), |m| {
                        m.void(
                            Tag::new("img")
                                .attr("src", "/kairos-logo.png")
                                .attr("alt", "Kairos")
                                .attr("width", "160")
                                .attr("height", "26"),
                        );
                    });
                    m.text_element(
                        Tag::new("p").class("footer-brand-desc"),
                        "Game-based experiences that build skills, shift behaviours, and spark lasting impact.",
                    );
                }),
                1 => Footer::column(m, "Company", |m| {
                    for (label, href) in COMPANY {
                        m.element(Tag::new("li"), |m| {
                            m.text_element(Tag::new("a").external(href), label);
                        });
                    }
                    m.element(Tag::new("li"), |m| {
                        m.element(
                            Tag::new("a")
                                .class("footer-linkedin")
                                .external("https://www.linkedin.com/company/playkairos/")
                                .attr("aria-label", "LinkedIn"),
                            |m| m.raw(LINKEDIN_ICON),
                        );
                    });
                }),
                2 => Footer::column(m, "Games", |m| {
                    for game in GAMES {
                        m.element(Tag::new("li"), |m| {
                            m.text_element(Tag::new("a").attr("href", "#games"), game);
                        });
                    }
                }),
                _ => Footer::column(m, "Contact", |m| {
                    for (label, href) in CONTACT {
                        m.element(Tag::new("li"), |m| {
                            m.text_element(Tag::new("a").attr("href", href), label);
                        });
                    }
                }),
            });
        });
    }
}

impl Effect for Footer {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        self.grid.tick(ctx, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;
    use crate::reveal::RevealState;

    #[test]
    fn columns_stagger_in() {
        let mut world = World::new();
        world.place(&ElementId::new("footer.grid"), 0.0, 500.0, 1200.0, 200.0);
        let mut footer = Footer::new();
        let mut frame = Frame::new();
        footer.tick(&world.ctx(), &mut frame);
        // Column 0 ends at 0.6 s, column 3 at 0.84 s.
        world.advance_ms(700);
        footer.tick(&world.ctx(), &mut frame);
        assert_eq!(footer.grid.item_state(0), Some(RevealState::Visible));
        assert!(matches!(footer.grid.item_state(3), Some(RevealState::Revealing { .. })));
    }

    #[test]
    fn columns_start_hidden() {
        let mut m = Markup::new();
        Footer::new().render(&mut m);
        let html = m.into_string();
        assert_eq!(html.matches(r#"data-motion="footer.grid."#).count(), 4);
        assert!(html.contains("tel:+917299948787"));
        assert!(html.contains("opacity:0;"));
    }
}
