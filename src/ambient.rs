// Ambient decoration: looping keyframe tracks (orbs, particles, pulses) and the
// CSS-only aurora and gradient-border wrappers.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::curve::lerp;
use crate::easing::Easing;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::style::MotionStyle;
use crate::types::*;

/// Stylesheet shared by the CSS-driven wrappers.
pub const BASE_CSS: &str = "@keyframes aurora {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}
[data-motion] { will-change: transform, opacity; }
";

/// A value track with evenly spaced stops, eased in and out between stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    values: Vec<f32>,
    duration: f32,
    delay: f32,
    repeat: bool,
    repeat_delay: f32,
    easing: Easing,
}

impl Keyframes {
    /// Infinitely repeating track over `duration` seconds.
    pub fn looping(values: &[f32], duration: f32) -> Self {
        Keyframes {
            values: values.to_vec(),
            duration,
            delay: 0.0,
            repeat: true,
            repeat_delay: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_repeat_delay(mut self, repeat_delay: f32) -> Self {
        self.repeat_delay = repeat_delay;
        self
    }

    pub fn once(mut self) -> Self {
        self.repeat = false;
        self
    }

    pub fn first(&self) -> f32 {
        self.values.first().copied().unwrap_or(0.0)
    }

    fn last(&self) -> f32 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Value `elapsed` seconds after the track started.
    pub fn sample(&self, elapsed: f32) -> f32 {
        let t = elapsed - self.delay;
        if t <= 0.0 || self.values.len() < 2 || self.duration <= 0.0 {
            return self.first();
        }
        if !self.repeat && t >= self.duration {
            return self.last();
        }
        let local = t.rem_euclid(self.duration + self.repeat_delay);
        if local >= self.duration {
            return self.last();
        }
        let segments = (self.values.len() - 1) as f32;
        let pos = local / self.duration * segments;
        let index = (pos.floor() as usize).min(self.values.len() - 2);
        let frac = self.easing.apply(pos - index as f32);
        lerp(self.values[index], self.values[index + 1], frac)
    }
}

/// Large blurred radial gradient drifting in a 15 s loop.
#[derive(Debug, Clone)]
pub struct GlowingOrb {
    id: ElementId,
    color: String,
    size: f32,
    placement: String,
    scale: Keyframes,
    x: Keyframes,
    y: Keyframes,
    started: Option<Timestamp>,
}

impl GlowingOrb {
    pub fn new(id: ElementId, color: &str, size: f32, placement: &str) -> Self {
        GlowingOrb {
            id,
            color: color.to_string(),
            size,
            placement: placement.to_string(),
            scale: Keyframes::looping(&[1.0, 1.1, 0.95, 1.05, 1.0], 15.0),
            x: Keyframes::looping(&[0.0, 30.0, -20.0, 15.0, 0.0], 15.0),
            y: Keyframes::looping(&[0.0, -25.0, 15.0, -10.0, 0.0], 15.0),
            started: None,
        }
    }

    pub fn style_at(&self, elapsed: f32) -> MotionStyle {
        MotionStyle::IDENTITY
            .with_scale(self.scale.sample(elapsed))
            .with_x(self.x.sample(elapsed))
            .with_y(self.y.sample(elapsed))
    }

    pub fn render(&self, m: &mut Markup) {
        let css = format!(
            "position:absolute;width:{size}px;height:{size}px;border-radius:50%;background:radial-gradient(circle, {color}, transparent 70%);pointer-events:none;{placement}",
            size = self.size,
            color = self.color,
            placement = self.placement,
        );
        // The orb's own blur is static, so it lives on a wrapper outside the animated filter.
        m.element(Tag::new("div").css("filter:blur(60px);"), |m| {
            m.element(
                Tag::new("div")
                    .motion(&self.id)
                    .class("glowing-orb")
                    .css(&css)
                    .initial(&self.style_at(0.0)),
                |_| {},
            );
        });
    }
}

impl Effect for GlowingOrb {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let started = *self.started.get_or_insert(ctx.now);
        frame.motion(&self.id, &self.style_at(ctx.now.secs_since(started)));
    }
}

/// One floating dot.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size: f32,
    pub left: f32,
    pub top: f32,
    pub duration: f32,
    pub delay: f32,
    pub color: &'static str,
}

impl Particle {
    fn tracks(&self) -> [Keyframes; 3] {
        let track = |values: &[f32]| Keyframes::looping(values, self.duration).with_delay(self.delay);
        [
            track(&[0.0, -30.0, 10.0, -20.0, 0.0]),
            track(&[0.0, 15.0, -10.0, 5.0, 0.0]),
            track(&[0.15, 0.3, 0.15, 0.25, 0.15]),
        ]
    }

    pub fn style_at(&self, elapsed: f32) -> MotionStyle {
        let [y, x, opacity] = self.tracks();
        MotionStyle::IDENTITY
            .with_y(y.sample(elapsed))
            .with_x(x.sample(elapsed))
            .with_opacity(opacity.sample(elapsed))
    }
}

pub const PARTICLE_COLORS: [&str; 4] = [
    "var(--purple)",
    "var(--red)",
    "var(--green)",
    "var(--yellow)",
];

/// Field of small dots with seeded random placement and timing.
#[derive(Debug, Clone)]
pub struct FloatingParticles {
    id: ElementId,
    particles: Vec<Particle>,
    started: Option<Timestamp>,
}

impl FloatingParticles {
    pub fn new(id: ElementId, count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|i| Particle {
                size: rng.gen_range(2.0..6.0),
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                duration: rng.gen_range(15.0..25.0),
                delay: rng.gen_range(0.0..5.0),
                color: PARTICLE_COLORS[i % PARTICLE_COLORS.len()],
            })
            .collect();
        FloatingParticles {
            id,
            particles,
            started: None,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn render(&self, m: &mut Markup) {
        m.element(
            Tag::new("div")
                .motion(&self.id)
                .css("position:absolute;inset:0;overflow:hidden;pointer-events:none;"),
            |m| {
                for (i, p) in self.particles.iter().enumerate() {
                    let css = format!(
                        "position:absolute;width:{:.2}px;height:{:.2}px;border-radius:50%;background:{};left:{:.2}%;top:{:.2}%;",
                        p.size, p.size, p.color, p.left, p.top
                    );
                    m.element(
                        Tag::new("div")
                            .motion(&self.id.index(i))
                            .css(&css)
                            .initial(&p.style_at(0.0)),
                        |_| {},
                    );
                }
            },
        );
    }
}

impl Effect for FloatingParticles {
    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        let started = *self.started.get_or_insert(ctx.now);
        let elapsed = ctx.now.secs_since(started);
        for (i, p) in self.particles.iter().enumerate() {
            frame.motion(&self.id.index(i), &p.style_at(elapsed));
        }
    }
}

/// Soft multi-colour gradient wash behind `body`, animated by the `aurora` keyframes.
pub fn aurora_background(m: &mut Markup, class: &str, body: impl FnOnce(&mut Markup)) {
    m.element(
        Tag::new("div")
            .class(class)
            .css("position:relative;overflow:hidden;"),
        |m| {
            m.element(
                Tag::new("div").css(
                    "position:absolute;inset:-50%;\
                     background:radial-gradient(ellipse 80% 60% at 20% 30%, rgba(124, 58, 237, 0.12), transparent),\
                     radial-gradient(ellipse 60% 80% at 80% 20%, rgba(239, 64, 96, 0.08), transparent),\
                     radial-gradient(ellipse 70% 50% at 60% 80%, rgba(5, 150, 105, 0.08), transparent),\
                     radial-gradient(ellipse 50% 70% at 30% 70%, rgba(217, 119, 6, 0.06), transparent);\
                     background-size:200% 200%;animation:aurora 20s ease-in-out infinite;pointer-events:none;",
                ),
                |_| {},
            );
            body(m);
        },
    );
}

/// Rotating rainbow border of `width` px around `body`.
pub fn animated_gradient_border(
    m: &mut Markup,
    class: &str,
    width: f32,
    radius: f32,
    body: impl FnOnce(&mut Markup),
) {
    let outer = format!("position:relative;border-radius:{radius}px;padding:{width}px;");
    let ring = format!(
        "position:absolute;inset:0;border-radius:{radius}px;padding:{width}px;\
         background:linear-gradient(135deg, var(--purple), var(--red), var(--yellow), var(--green), var(--purple));\
         background-size:300% 300%;animation:aurora 4s ease-in-out infinite;\
         -webkit-mask:linear-gradient(#fff 0 0) content-box, linear-gradient(#fff 0 0);\
         mask:linear-gradient(#fff 0 0) content-box, linear-gradient(#fff 0 0);\
         -webkit-mask-composite:xor;mask-composite:exclude;"
    );
    let inner = format!("position:relative;border-radius:{}px;", radius - width);
    m.element(Tag::new("div").class(class).css(&outer), |m| {
        m.element(Tag::new("div").css(&ring), |_| {});
        m.element(Tag::new("div").css(&inner), body);
    });
}
