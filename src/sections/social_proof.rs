// Impact counters and the scrolling client strip.

use crate::easing::Easing;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::reveal::{RevealElement, RevealGroup, Transition};
use crate::sections::{route_pointer, tick_all, Accent, Section};
use crate::slider::InfiniteSlider;
use crate::style::MotionStyle;
use crate::ticker::NumberTicker;
use crate::types::*;

const CLIENTS: [&str; 9] = [
    "EY",
    "Accenture",
    "KPMG",
    "Deloitte",
    "Cognizant",
    "Wipro",
    "TCS",
    "Infosys",
    "HCL",
];

const STATS: [(f32, &str, Accent); 4] = [
    (50.0, "Organizations", Accent::Purple),
    (200.0, "Workshops Delivered", Accent::Green),
    (5000.0, "Participants", Accent::Red),
    (12.0, "Countries", Accent::Yellow),
];

struct Stat {
    fade: RevealElement,
    ticker: NumberTicker,
}

pub struct SocialProof {
    id: ElementId,
    grid: RevealGroup,
    stats: Vec<Stat>,
    label: RevealElement,
    slider_fade: RevealElement,
    slider: InfiniteSlider,
}

impl SocialProof {
    pub fn new(config: &EngineConfig) -> Self {
        let id = ElementId::new("proof");
        let grid_id = id.child("grid");
        let grid = RevealGroup::new(id.clone(), -40.0).with(
            grid_id,
            MotionStyle::hidden().with_y(40.0),
            Transition::tween(0.7).with_easing(Easing::EaseOut),
        );
        let stats = STATS
            .iter()
            .enumerate()
            .map(|(i, (value, _, _))| {
                let stat = id.child("stat").index(i);
                Stat {
                    ticker: NumberTicker::new(stat.child("value"), *value).with_suffix("+"),
                    fade: RevealElement::blur_fade(stat).with_delay(0.1 + i as f32 * 0.1),
                }
            })
            .collect();
        SocialProof {
            label: RevealElement::blur_fade(id.child("label")).with_delay(0.4),
            slider_fade: RevealElement::blur_fade(id.child("clients")).with_delay(0.5),
            slider: InfiniteSlider::new(id.child("clients").child("slider"), config.slider_speed),
            grid,
            stats,
            id,
        }
    }

    /// Ticker text for stat `i`.
    pub fn stat_text(&self, i: usize) -> Option<String> {
        self.stats.get(i).map(|s| s.ticker.text())
    }
}

impl Section for SocialProof {
    fn name(&self) -> &'static str {
        "social_proof"
    }

    fn render(&self, m: &mut Markup) {
        m.element(
            Tag::new("section")
                .motion(&self.id)
                .class("proof")
                .attr("id", "clients"),
            |m| {
                m.element(Tag::new("div").class("container"), |m| {
                    self.grid.render(
                        &self.id.child("grid"),
                        m,
                        Tag::new("div").class("proof-stats-grid"),
                        |m| {
                            for (stat, (_, label, accent)) in self.stats.iter().zip(&STATS) {
                                stat.fade.render(m, Tag::new("div"), |m| {
                                    m.element(Tag::new("div").class("proof-stat-card"), |m| {
                                        m.element(
                                            Tag::new("span")
                                                .class("proof-stat-value")
                                                .css(&format!("color:{};", accent.var())),
                                            |m| stat.ticker.render(m, "proof-ticker"),
                                        );
                                        m.text_element(Tag::new("span").class("proof-stat-label"), label);
                                    });
                                });
                            }
                        },
                    );
                });
                m.element(Tag::new("div").class("proof-divider"), |_| {});
                m.element(Tag::new("div").class("container"), |m| {
                    self.label.render(m, Tag::new("div"), |m| {
                        m.text_element(
                            Tag::new("p").class("proof-label"),
                            "Trusted by leading organizations worldwide",
                        );
                    });
                });
                self.slider_fade.render(m, Tag::new("div"), |m| {
                    self.slider.render(m, "proof-slider", |m| {
                        for client in CLIENTS {
                            m.text_element(Tag::new("span").class("proof-client"), client);
                        }
                    });
                });
            },
        );
    }
}

impl Effect for SocialProof {
    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, frame: &mut Frame) -> bool {
        route_pointer(&mut [&mut self.slider], event, ctx, frame)
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        tick_all(
            &mut [
                &mut self.grid,
                &mut self.label,
                &mut self.slider_fade,
                &mut self.slider,
            ],
            ctx,
            frame,
        );
        for stat in &mut self.stats {
            tick_all(&mut [&mut stat.fade, &mut stat.ticker], ctx, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;

    #[test]
    fn counters_finish_on_their_values() {
        let mut world = World::new();
        for i in 0..4 {
            let stat = ElementId::new("proof.stat").index(i);
            world.place(&stat.child("value"), i as f32 * 300.0, 300.0, 120.0, 48.0);
        }
        let mut proof = SocialProof::new(&EngineConfig::default());
        for _ in 0..600 {
            world.advance_ms(16);
            proof.tick(&world.ctx(), &mut Frame::new());
        }
        let texts: Vec<_> = (0..4).filter_map(|i| proof.stat_text(i)).collect();
        assert_eq!(texts, ["50+", "200+", "5000+", "12+"]);
    }

    #[test]
    fn hovering_clients_pauses_the_strip() {
        let mut world = World::new();
        let slider = ElementId::new("proof.clients.slider");
        world.place(&slider.child("track"), 0.0, 500.0, 2400.0, 40.0);
        let mut proof = SocialProof::new(&EngineConfig::default());
        let mut frame = Frame::new();

        world.advance_ms(100);
        proof.tick(&world.ctx(), &mut frame);
        let moving = proof.slider.phase();
        assert!(moving > 0.0);

        let enter = PointerEvent {
            target: slider.child("track"),
            kind: PointerKind::Enter(Vec2::new(10.0, 510.0)),
        };
        assert!(proof.pointer(&enter, &world.ctx(), &mut frame));
        world.advance_ms(100);
        proof.tick(&world.ctx(), &mut frame);
        assert_eq!(proof.slider.phase(), moving);
    }

    #[test]
    fn client_list_renders_twice() {
        let proof = SocialProof::new(&EngineConfig::default());
        let mut m = Markup::new();
        proof.render(&mut m);
        let html = m.into_string();
        assert_eq!(html.matches(">Infosys<").count(), 2);
        assert!(html.contains(r#"data-motion="proof.stat.2.value""#));
    }
}
