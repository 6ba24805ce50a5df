// Landing hero: staged mount entrance, scroll-out parallax, ambient orbs and
// particles, and three pills whose colours rotate.

use crate::ambient::{FloatingParticles, GlowingOrb, Keyframes};
use crate::curve::Curve;
use crate::easing::Easing;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::parallax::ScrollLinked;
use crate::pointer::MagneticHover;
use crate::reveal::{RevealElement, Transition};
use crate::scroll::ScrollRange;
use crate::sections::{route_pointer, tick_all, Section, ARROW_ICON};
use crate::style::{MotionStyle, Rgba};
use crate::text::SegmentedReveal;
use crate::types::*;

const PILLS: [(&str, &str); 3] = [
    ("Lighter", "#EF4060"),
    ("Faster", "#7C3AED"),
    ("Smarter", "#059669"),
];

const ORBS: [(&str, f32, &str); 3] = [
    ("rgba(124, 58, 237, 0.06)", 500.0, "top:-15%;left:-10%;"),
    ("rgba(239, 64, 96, 0.05)", 400.0, "bottom:-10%;right:-10%;"),
    ("rgba(5, 150, 105, 0.04)", 350.0, "top:40%;right:5%;"),
];

/// Rotating palette: pill `i` shows colour `(i + k) mod n` during period `k`,
/// cross-fading from the previous colour at the start of each period.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    colors: Vec<Rgba>,
    period: f32,
    fade: f32,
}

impl ColorCycle {
    pub fn new(colors: Vec<Rgba>, period: f32, fade: f32) -> Self {
        ColorCycle {
            colors,
            period,
            fade,
        }
    }

    /// Number of completed rotations after `elapsed` seconds.
    pub fn step_at(&self, elapsed: f32) -> usize {
        if self.period <= 0.0 || elapsed <= 0.0 {
            return 0;
        }
        (elapsed / self.period).floor() as usize
    }

    pub fn index(&self, pill: usize, step: usize) -> usize {
        (pill + step) % self.colors.len().max(1)
    }

    pub fn color(&self, pill: usize, elapsed: f32) -> Rgba {
        let Some(first) = self.colors.first() else {
            return Rgba::new(0.0, 0.0, 0.0, 0.0);
        };
        let step = self.step_at(elapsed);
        let current = self.colors.get(self.index(pill, step)).unwrap_or(first);
        if step == 0 {
            return *current;
        }
        let previous = self.colors.get(self.index(pill, step - 1)).unwrap_or(first);
        let since = elapsed - step as f32 * self.period;
        let t = if self.fade > 0.0 {
            Easing::EaseInOut.apply(since / self.fade)
        } else {
            1.0
        };
        previous.lerp(current, t)
    }
}

pub struct Hero {
    id: ElementId,
    contact_url: String,
    background: ScrollLinked,
    title_parallax: ScrollLinked,
    orbs: Vec<GlowingOrb>,
    particles: FloatingParticles,
    title: RevealElement,
    split: SegmentedReveal,
    pills: RevealElement,
    pill_colors: ColorCycle,
    pill_pulses: Vec<Keyframes>,
    subtitle: RevealElement,
    buttons: RevealElement,
    cta: MagneticHover,
    image: RevealElement,
    started: Option<Timestamp>,
}

impl Hero {
    pub fn new(config: &EngineConfig) -> Self {
        let id = ElementId::new("hero");
        let bg = id.child("bg");
        let rise = MotionStyle::hidden().with_y(20.0);
        let colors = PILLS
            .iter()
            .filter_map(|(_, hex)| Rgba::from_hex(hex))
            .collect();

        Hero {
            background: ScrollLinked::new(id.clone(), bg.clone(), ScrollRange::SCROLL_OUT)
                .with_opacity(Curve::linear(0.0, 0.8, 1.0, 0.0))
                .with_scale(Curve::linear(0.0, 1.0, 1.0, 1.15)),
            title_parallax: ScrollLinked::new(id.clone(), id.child("title"), ScrollRange::SCROLL_OUT)
                .with_y(Curve::linear(0.0, 1.0, 0.0, -80.0)),
            orbs: ORBS
                .iter()
                .enumerate()
                .map(|(i, (color, size, placement))| {
                    GlowingOrb::new(bg.child("orb").index(i), color, *size, placement)
                })
                .collect(),
            particles: FloatingParticles::new(
                id.child("particles"),
                config.particle_count,
                config.particle_seed,
            ),
            title: RevealElement::on_mount(
                id.child("title").child("lead"),
                rise.with_blur(8.0),
                Transition::tween(0.8).with_delay(0.3),
            ),
            split: SegmentedReveal::split_text(id.child("title").child("split"), "Of Learning Games", 0.45)
                .on_mount()
                .with_class("hero-title-inner"),
            pills: RevealElement::on_mount(
                id.child("pills"),
                rise,
                Transition::tween(0.6).with_easing(Easing::EaseOut).with_delay(0.6),
            ),
            pill_colors: ColorCycle::new(colors, config.pill_cycle_ms as f32 / 1000.0, 0.8),
            pill_pulses: (0..PILLS.len())
                .map(|i| {
                    Keyframes::looping(&[1.0, 1.04, 1.0], 2.0)
                        .with_repeat_delay(4.0)
                        .with_delay(i as f32 * 0.6)
                })
                .collect(),
            subtitle: RevealElement::on_mount(
                id.child("subtitle"),
                rise,
                Transition::tween(0.7).with_easing(Easing::EaseOut).with_delay(0.8),
            ),
            buttons: RevealElement::on_mount(
                id.child("buttons"),
                rise,
                Transition::tween(0.7).with_easing(Easing::EaseOut).with_delay(1.0),
            ),
            cta: MagneticHover::new(id.child("cta"), 0.15),
            image: RevealElement::on_mount(
                id.child("image"),
                MotionStyle::hidden().with_x(60.0).with_scale(0.95),
                Transition::tween(0.9).with_delay(0.4),
            ),
            contact_url: config.contact_url.clone(),
            started: None,
            id,
        }
    }

    pub fn pill_colors(&self) -> &ColorCycle {
        &self.pill_colors
    }

    fn pill_css(&self, pill: usize, elapsed: f32) -> String {
        let scale = self.pill_pulses.get(pill).map_or(1.0, |k| k.sample(elapsed));
        format!(
            "background-color:{};{}",
            self.pill_colors.color(pill, elapsed).to_css(),
            MotionStyle::IDENTITY.with_scale(scale).to_css()
        )
    }

    fn render_text_side(&self, m: &mut Markup) {
        m.element(Tag::new("div").class("hero-text"), |m| {
            self.title_parallax.render(m, Tag::new("div"), |m| {
                m.element(Tag::new("h1").class("hero-title"), |m| {
                    self.title.render(m, Tag::new("span").class("hero-title-gradient"), |m| {
                        m.text("The New Era")
                    });
                    m.void(Tag::new("br"));
                    self.split.render(m);
                });
            });

            self.pills.render(m, Tag::new("div").class("hero-pills"), |m| {
                for (i, (word, _)) in PILLS.iter().enumerate() {
                    m.text_element(
                        Tag::new("span")
                            .motion(&self.id.child("pill").index(i))
                            .class("hero-pill")
                            .css(&self.pill_css(i, 0.0)),
                        word,
                    );
                }
            });

            self.subtitle.render(m, Tag::new("p").class("hero-subtitle"), |m| {
                m.text("Discover ");
                m.text_element(Tag::new("strong"), "4 new tabletop learning games");
                m.text(" designed for seamless integration and zero logistical stress.");
            });

            self.buttons.render(m, Tag::new("div").class("hero-buttons"), |m| {
                self.cta.render(m, |m| {
                    m.element(
                        Tag::new("a")
                            .external(&self.contact_url)
                            .class("btn btn-secondary btn-large hero-cta"),
                        |m| {
                            m.text("Get a Quote");
                            m.raw(ARROW_ICON);
                        },
                    );
                });
            });
        });
    }
}

impl Section for Hero {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn render(&self, m: &mut Markup) {
        m.element(
            Tag::new("section")
                .motion(&self.id)
                .class("hero")
                .attr("id", "hero"),
            |m| {
                self.background.render(m, Tag::new("div").class("hero-aurora"), |m| {
                    for orb in &self.orbs {
                        orb.render(m);
                    }
                });
                self.particles.render(m);
                m.element(Tag::new("div").class("hero-content"), |m| {
                    self.render_text_side(m);
                    self.image.render(m, Tag::new("div").class("hero-image"), |m| {
                        m.element(Tag::new("div").class("hero-image-frame"), |m| {
                            m.void(
                                Tag::new("img")
                                    .attr("src", "/hero-boxes.jpg")
                                    .attr(
                                        "alt",
                                        "Kairos game boxes: Surface Tension, Team Compass, Shared Spaces",
                                    )
                                    .attr("width", "1237")
                                    .attr("height", "927")
                                    .class("hero-image-img"),
                            );
                        });
                    });
                });
            },
        );
    }
}

impl Effect for Hero {
    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, frame: &mut Frame) -> bool {
        route_pointer(&mut [&mut self.cta], event, ctx, frame)
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        tick_all(
            &mut [
                &mut self.background,
                &mut self.title_parallax,
                &mut self.particles,
                &mut self.title,
                &mut self.split,
                &mut self.pills,
                &mut self.subtitle,
                &mut self.buttons,
                &mut self.cta,
                &mut self.image,
            ],
            ctx,
            frame,
        );
        for orb in &mut self.orbs {
            orb.tick(ctx, frame);
        }

        let started = *self.started.get_or_insert(ctx.now);
        let elapsed = ctx.now.secs_since(started);
        for i in 0..PILLS.len() {
            let css = self.pill_css(i, elapsed);
            frame.style(&self.id.child("pill").index(i), css);
        }
    }
}
