// "What's different" section: header reveal, drifting background and four
// spotlight cards that enter one after another.

use crate::curve::Curve;
use crate::easing::Easing;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::parallax::ScrollLinked;
use crate::pointer::{HoverPop, SpotlightCard};
use crate::reveal::{RevealGroup, Transition};
use crate::scroll::ScrollRange;
use crate::sections::{tick_all, Accent, Section};
use crate::style::MotionStyle;
use crate::types::*;

struct Feature {
    accent: Accent,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        accent: Accent::Red,
        title: "Logistics Solved",
        description: "Lightweight, portable, and minimal setup -perfect for effortless scaling across multiple office locations.",
        icon: r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" width="28" height="28"><path d="M15 19.128a9.38 9.38 0 0 0 2.625.372 9.337 9.337 0 0 0 4.121-.952 4.125 4.125 0 0 0-7.533-2.493M15 19.128v-.003c0-1.113-.285-2.16-.786-3.07M15 19.128v.106A12.318 12.318 0 0 1 8.624 21c-2.331 0-4.512-.645-6.374-1.766l-.001-.109a6.375 6.375 0 0 1 11.964-3.07M12 6.375a3.375 3.375 0 1 1-6.75 0 3.375 3.375 0 0 1 6.75 0Zm8.25 2.25a2.625 2.625 0 1 1-5.25 0 2.625 2.625 0 0 1 5.25 0Z" stroke-linecap="round" stroke-linejoin="round"/></svg>"#,
    },
    Feature {
        accent: Accent::Purple,
        title: "Seamless Curriculum Integration",
        description: "Includes Customised Faculty Resources to easily map these games to your specific internal competency frameworks.",
        icon: r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" width="28" height="28"><path d="M10.343 3.94c.09-.542.56-.94 1.11-.94h1.093c.55 0 1.02.398 1.11.94l.149.894c.07.424.384.764.78.93.398.164.855.142 1.205-.108l.737-.527a1.125 1.125 0 0 1 1.45.12l.773.774c.39.389.44 1.002.12 1.45l-.527.737c-.25.35-.272.806-.107 1.204.165.397.505.71.93.78l.893.15c.543.09.94.559.94 1.109v1.094c0 .55-.397 1.02-.94 1.11l-.894.149c-.424.07-.764.383-.929.78-.165.398-.143.854.107 1.204l.527.738c.32.447.269 1.06-.12 1.45l-.774.773a1.125 1.125 0 0 1-1.449.12l-.738-.527c-.35-.25-.806-.272-1.203-.107-.398.165-.71.505-.781.929l-.149.894c-.09.542-.56.94-1.11.94h-1.094c-.55 0-1.019-.398-1.11-.94l-.148-.894c-.071-.424-.384-.764-.781-.93-.398-.164-.854-.142-1.204.108l-.738.527c-.447.32-1.06.269-1.45-.12l-.773-.774a1.125 1.125 0 0 1-.12-1.45l.527-.737c.25-.35.272-.806.108-1.204-.165-.397-.506-.71-.93-.78l-.894-.15c-.542-.09-.94-.56-.94-1.109v-1.094c0-.55.398-1.02.94-1.11l.894-.149c.424-.07.765-.383.93-.78.165-.398.143-.854-.108-1.204l-.526-.738a1.125 1.125 0 0 1 .12-1.45l.773-.773a1.125 1.125 0 0 1 1.45-.12l.737.527c.35.25.807.272 1.204.107.397-.165.71-.505.78-.929l.15-.894Z" stroke-linecap="round" stroke-linejoin="round"/><path d="M15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z" stroke-linecap="round" stroke-linejoin="round"/></svg>"#,
    },
    Feature {
        accent: Accent::Green,
        title: "Empowering Your Internal Trainers",
        description: "Features comprehensive facilitation guides and Train-the-Trainer (ToT) support for expert, independent delivery.",
        icon: r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" width="28" height="28"><path d="M4.26 10.147a60.438 60.438 0 0 0-.491 6.347A48.62 48.62 0 0 1 12 20.904a48.62 48.62 0 0 1 8.232-4.41 60.46 60.46 0 0 0-.491-6.347m-15.482 0a50.636 50.636 0 0 0-2.658-.813A59.906 59.906 0 0 1 12 3.493a59.903 59.903 0 0 1 10.399 5.84c-.896.248-1.783.52-2.658.814m-15.482 0A50.717 50.717 0 0 1 12 13.489a50.702 50.702 0 0 1 7.74-3.342M6.75 15a.75.75 0 1 0 0-1.5.75.75 0 0 0 0 1.5Zm0 0v-3.675A55.378 55.378 0 0 1 12 8.443m-7.007 11.55A5.981 5.981 0 0 0 6.75 15.75v-1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#,
    },
    Feature {
        accent: Accent::Yellow,
        title: "Attractive bundling and pricing",
        description: "# of set can be configured as per your needs. Kits Starting at...",
        icon: r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" width="28" height="28"><path d="M9 17.25v1.007a3 3 0 0 1-.879 2.122L7.5 21h9l-.621-.621A3 3 0 0 1 15 18.257V17.25m6-12V15a2.25 2.25 0 0 1-2.25 2.25H5.25A2.25 2.25 0 0 1 3 15V5.25A2.25 2.25 0 0 1 5.25 3h13.5A2.25 2.25 0 0 1 21 5.25Z" stroke-linecap="round" stroke-linejoin="round"/></svg>"#,
    },
];

struct FeatureCard {
    id: ElementId,
    reveal: RevealGroup,
    spotlight: SpotlightCard,
    icon: HoverPop,
}

impl FeatureCard {
    fn new(id: ElementId, index: usize, accent: Accent) -> Self {
        let stagger = index as f32 * 0.1;
        let reveal = RevealGroup::new(id.clone(), -60.0)
            .with(
                id.clone(),
                MotionStyle::hidden().with_y(40.0).with_scale(0.96),
                Transition::tween(0.6).with_delay(stagger),
            )
            .with(
                id.child("accent"),
                MotionStyle::IDENTITY.with_scale_x(0.0),
                Transition::tween(0.7).with_delay(stagger + 0.3),
            );
        FeatureCard {
            spotlight: SpotlightCard::new(id.child("spot"), accent.tint(0.05)),
            icon: HoverPop::new(id.child("icon"), 1.1, 5.0),
            reveal,
            id,
        }
    }
}

pub struct Features {
    id: ElementId,
    header: RevealGroup,
    background: ScrollLinked,
    cards: Vec<FeatureCard>,
}

impl Features {
    pub fn new() -> Self {
        let id = ElementId::new("features");
        let rise = |y: f32| MotionStyle::hidden().with_y(y);
        let header = RevealGroup::new(id.clone(), -80.0)
            .with(id.child("heading"), rise(24.0), Transition::tween(0.7).with_delay(0.1))
            .with(
                id.child("sub"),
                rise(16.0),
                Transition::tween(0.6).with_easing(Easing::EaseOut).with_delay(0.25),
            )
            .with(
                id.child("body"),
                rise(16.0),
                Transition::tween(0.6).with_easing(Easing::EaseOut).with_delay(0.4),
            );
        Features {
            background: ScrollLinked::new(id.clone(), id.child("bg"), ScrollRange::THROUGH_VIEWPORT)
                .with_y(Curve::linear(0.0, 1.0, 40.0, -40.0)),
            cards: FEATURES
                .iter()
                .enumerate()
                .map(|(i, f)| FeatureCard::new(id.child("card").index(i), i, f.accent))
                .collect(),
            header,
            id,
        }
    }

    fn render_card(&self, m: &mut Markup, card: &FeatureCard, feature: &Feature) {
        card.reveal.render(&card.id, m, Tag::new("div").class("feature-card-wrapper"), |m| {
            card.spotlight.render(m, |m| {
                m.element(Tag::new("div").class("feature-card"), |m| {
                    card.reveal.render(
                        &card.id.child("accent"),
                        m,
                        Tag::new("div")
                            .class("feature-accent-line")
                            .css(&format!("background:{};", feature.accent.var())),
                        |_| {},
                    );
                    card.icon.render(
                        m,
                        Tag::new("div").class("feature-icon").css(&format!(
                            "background:{};color:{};",
                            feature.accent.tint(0.07),
                            feature.accent.var()
                        )),
                        |m| m.raw(feature.icon),
                    );
                    m.text_element(Tag::new("h3").class("feature-title"), feature.title);
                    m.text_element(Tag::new("p").class("feature-desc"), feature.description);
                });
            });
        });
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::new()
    }
}

impl Section for Features {
    fn name(&self) -> &'static str {
        "features"
    }

    fn render(&self, m: &mut Markup) {
        m.element(
            Tag::new("section")
                .motion(&self.id)
                .class("features")
                .attr("id", "features"),
            |m| {
                self.background.render(m, Tag::new("div").class("features-bg"), |m| {
                    m.element(Tag::new("div").class("features-bg-circle-1"), |_| {});
                    m.element(Tag::new("div").class("features-bg-circle-2"), |_| {});
                });
                m.element(Tag::new("div").class("container"), |m| {
                    m.element(Tag::new("div").class("features-header"), |m| {
                        self.header.render(
                            &self.id.child("heading"),
                            m,
                            Tag::new("h2").class("features-heading"),
                            |m| {
                                m.text("What’s Different about ");
                                m.text_element(
                                    Tag::new("span").class("heading-gradient"),
                                    "this Collection",
                                );
                                m.text("?");
                            },
                        );
                        self.header.render(
                            &self.id.child("sub"),
                            m,
                            Tag::new("p").class("features-sub"),
                            |m| m.text("Making Game-Based Learning Easier Than Ever Before"),
                        );
                        self.header.render(
                            &self.id.child("body"),
                            m,
                            Tag::new("p").class("features-body"),
                            |m| m.text("We heard you. You need impact, but you also need simplicity. Here is how our new collection upgrades your internal training capability."),
                        );
                    });
                    m.element(Tag::new("div").class("features-grid"), |m| {
                        for (card, feature) in self.cards.iter().zip(&FEATURES) {
                            self.render_card(m, card, feature);
                        }
                    });
                });
            },
        );
    }
}

impl Effect for Features {
    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, frame: &mut Frame) -> bool {
        let Some(card) = self.cards.iter_mut().find(|c| event.target.is_within(&c.id)) else {
            return false;
        };
        // The icon sits inside the spotlight; each sees the events aimed at it.
        let spot = card.spotlight.pointer(event, ctx, frame);
        let icon = card.icon.pointer(event, ctx, frame);
        spot || icon
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        tick_all(&mut [&mut self.header, &mut self.background], ctx, frame);
        for card in &mut self.cards {
            tick_all(&mut [&mut card.reveal, &mut card.spotlight, &mut card.icon], ctx, frame);
        }
    }
}
