// Game line-up: one card per game with staged entrance and a video panel
// shared through a single showcase so only one video plays with sound.

use crate::curve::Curve;
use crate::easing::Easing;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::media::VideoShowcase;
use crate::parallax::ScrollLinked;
use crate::reveal::{RevealGroup, Transition};
use crate::scroll::ScrollRange;
use crate::sections::{tick_all, Accent, Section};
use crate::spring::SpringConfig;
use crate::style::MotionStyle;
use crate::types::*;

struct Game {
    name: &'static str,
    tagline: &'static str,
    accent: Accent,
    format: &'static str,
    duration: &'static str,
    premise: &'static str,
    skills: [&'static str; 4],
    logo: &'static str,
    video: &'static str,
}

const GAMES: [Game; 4] = [
    Game {
        name: "Team Compass",
        tagline: "The Reflection & Awareness Builder",
        accent: Accent::Purple,
        format: "1 Team (5–10 Players)",
        duration: "30–45 Mins",
        premise: "A reflective card-based challenge where teams explore key dimensions of human development. Players must build a stable tower using cards that represent balanced growth, fostering dialogue and collective awareness.",
        skills: ["Self Mastery", "People Mastery", "Growth Mindset", "Situational Awareness"],
        logo: "/logo-team-compass.png",
        video: "/videos/team-compass.mp4",
    },
    Game {
        name: "Shared Spaces",
        tagline: "The Psychological Safety Architect",
        accent: Accent::Green,
        format: "1 Team (6–12 Players)",
        duration: "30–45 Mins",
        premise: "A card activity designed to help teams pause and connect. Participants respond to thoughtful prompts and build a shared tower, where each card represents a story, moment, or value that signifies the team's collective trust.",
        skills: ["Psychological Safety", "Building Trust", "Inclusivity", "Active Listening"],
        logo: "/logo-shared-spaces.png",
        video: "/videos/shared-spaces.mp4",
    },
    Game {
        name: "Surface Tension",
        tagline: "The Collaboration & Execution Challenge",
        accent: Accent::Red,
        format: "Up to 4 Teams (30–35 People)",
        duration: "30–45 Mins",
        premise: "A tabletop construction challenge where teams must recreate a specific structure using 30 blocks. The catch? They only have partial visual view cards, forcing them to break down information silos to succeed.",
        skills: ["Problem Solving", "Empathy", "Communication", "Execution Excellence"],
        logo: "/logo-surface-tension.png",
        video: "/videos/surface-tension.mp4",
    },
    Game {
        name: "Cycle Time",
        tagline: "The Agility & Pressure Simulator",
        accent: Accent::Yellow,
        format: "Up to 5 Teams (30–40 People)",
        duration: "30–45 Mins",
        premise: "A fast-paced construction game using colored rods that mirrors the pressure of ambiguity. Teams must build accurately and quickly without direct visual access, relying on situational leadership to win.",
        skills: ["Situational Leadership", "Agile Thinking", "Execution Excellence", "Empathy"],
        logo: "/logo-cycle-time.png",
        video: "/videos/cycle-time.mp4",
    },
];

const PERSON_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 14 14" fill="none"><path d="M7 1.5a3.5 3.5 0 1 1 0 7 3.5 3.5 0 0 1 0-7zM2 12.5c0-2 2.24-3.5 5-3.5s5 1.5 5 3.5" stroke="currentColor" stroke-width="1.3" stroke-linecap="round"/></svg>"#;
const CLOCK_ICON: &str = r#"<svg width="16" height="16" viewBox="0 0 14 14" fill="none"><circle cx="7" cy="7" r="5.5" stroke="currentColor" stroke-width="1.3"/><path d="M7 4v3l2 1.5" stroke="currentColor" stroke-width="1.3" stroke-linecap="round"/></svg>"#;
const SMALL_ARROW: &str = r#"<svg width="14" height="14" viewBox="0 0 14 14" fill="none"><path d="M3 7h8M8 4l3 3-3 3" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Element ids of one game card.
struct CardIds {
    root: ElementId,
    accent: ElementId,
    badge: ElementId,
    button: ElementId,
    video_side: ElementId,
    media: ElementId,
}

impl CardIds {
    fn new(root: ElementId) -> Self {
        CardIds {
            accent: root.child("accent"),
            badge: root.child("badge"),
            button: root.child("button"),
            video_side: root.child("video-side"),
            media: root.child("media"),
            root,
        }
    }

    fn skill(&self, j: usize) -> ElementId {
        self.root.child("skill").index(j)
    }
}

fn card_reveal(ids: &CardIds, skills: usize) -> RevealGroup {
    let rise = |y: f32| MotionStyle::hidden().with_y(y);
    let mut group = RevealGroup::new(ids.root.clone(), -80.0)
        .with(ids.root.clone(), rise(40.0), Transition::tween(0.7).with_delay(0.15))
        .with(
            ids.accent.clone(),
            MotionStyle::IDENTITY.with_scale_x(0.0),
            Transition::tween(0.6).with_delay(0.3),
        )
        .with(
            ids.badge.clone(),
            MotionStyle::IDENTITY.with_scale(0.0),
            Transition::spring(SpringConfig::from_duration(0.4)).with_delay(0.2),
        )
        .with(
            ids.button.clone(),
            rise(10.0),
            Transition::tween(0.5).with_easing(Easing::EaseOut).with_delay(0.6),
        )
        .with(
            ids.video_side.clone(),
            MotionStyle::hidden().with_scale(0.92),
            Transition::tween(0.7).with_delay(0.3),
        );
    for j in 0..skills {
        group.push(
            ids.skill(j),
            rise(10.0),
            Transition::tween(0.4)
                .with_easing(Easing::EaseOut)
                .with_delay(0.4 + j as f32 * 0.08),
        );
    }
    group
}

pub struct Games {
    id: ElementId,
    header: RevealGroup,
    background: ScrollLinked,
    cards: Vec<(CardIds, RevealGroup)>,
    videos: VideoShowcase,
    contact_url: String,
}

impl Games {
    pub fn new(config: &EngineConfig) -> Self {
        let id = ElementId::new("games");
        let header = RevealGroup::new(id.clone(), -80.0)
            .with(
                id.child("heading"),
                MotionStyle::hidden().with_y(24.0),
                Transition::tween(0.7).with_delay(0.1),
            )
            .with(
                id.child("sub"),
                MotionStyle::hidden().with_y(16.0),
                Transition::tween(0.6).with_easing(Easing::EaseOut).with_delay(0.25),
            );

        let mut videos = VideoShowcase::new();
        let cards = GAMES
            .iter()
            .enumerate()
            .map(|(i, game)| {
                let ids = CardIds::new(id.child("card").index(i));
                videos.add_card(game.name, ids.media.clone(), game.video, game.accent.var());
                let reveal = card_reveal(&ids, game.skills.len());
                (ids, reveal)
            })
            .collect();

        Games {
            background: ScrollLinked::new(id.clone(), id.child("bg"), ScrollRange::THROUGH_VIEWPORT)
                .with_y(Curve::linear(0.0, 1.0, 30.0, -30.0)),
            header,
            cards,
            videos,
            contact_url: config.contact_url.clone(),
            id,
        }
    }

    /// Name of the game whose video is playing with sound.
    pub fn active_video(&self) -> Option<&str> {
        self.videos.active()
    }

    fn render_card(&self, m: &mut Markup, index: usize) {
        let (ids, reveal) = &self.cards[index];
        let game = &GAMES[index];
        let accent = game.accent.var();
        let badge_css = format!("color:{};background:{};", accent, game.accent.tint(0.1));

        reveal.render(&ids.root, m, Tag::new("div"), |m| {
            m.element(Tag::new("div").class("game-card"), |m| {
                reveal.render(
                    &ids.accent,
                    m,
                    Tag::new("div")
                        .class("game-accent-bar")
                        .css(&format!("background:{};", accent)),
                    |_| {},
                );
                m.element(Tag::new("div").class("game-logo-section"), |m| {
                    m.element(Tag::new("div").class("game-badge-row"), |m| {
                        reveal.render(
                            &ids.badge,
                            m,
                            Tag::new("span").class("game-index-badge").css(&badge_css),
                            |m| m.text(&format!("{:02}", index + 1)),
                        );
                        m.text_element(
                            Tag::new("p")
                                .class("game-tagline")
                                .css(&format!("color:{};", accent)),
                            game.tagline,
                        );
                    });
                    m.element(Tag::new("div").class("game-logo-container"), |m| {
                        m.void(
                            Tag::new("img")
                                .class("game-logo")
                                .attr("src", game.logo)
                                .attr("alt", game.name)
                                .attr("width", "400")
                                .attr("height", "120"),
                        );
                    });
                });

                let inner = if index % 2 == 0 {
                    "game-card-inner"
                } else {
                    "game-card-inner game-card-reversed"
                };
                m.element(Tag::new("div").class(inner), |m| {
                    m.element(Tag::new("div").class("game-desc-side"), |m| {
                        m.text_element(Tag::new("h3").class("game-name"), game.name);
                        m.text_element(Tag::new("p").class("game-premise"), game.premise);
                        m.element(Tag::new("div").class("game-meta"), |m| {
                            for (icon, label) in [(PERSON_ICON, game.format), (CLOCK_ICON, game.duration)] {
                                m.element(Tag::new("div").class("game-meta-box"), |m| {
                                    m.raw(icon);
                                    m.text_element(Tag::new("span"), label);
                                });
                            }
                        });
                        m.element(Tag::new("div").class("game-skills"), |m| {
                            for (j, skill) in game.skills.iter().enumerate() {
                                reveal.render(
                                    &ids.skill(j),
                                    m,
                                    Tag::new("span").class("game-skill-pill").css(&badge_css),
                                    |m| m.text(skill),
                                );
                            }
                        });
                        reveal.render(&ids.button, m, Tag::new("div"), |m| {
                            let text_color = if game.accent == Accent::Yellow {
                                "var(--text-primary)"
                            } else {
                                "#fff"
                            };
                            m.element(
                                Tag::new("a")
                                    .class("game-btn")
                                    .external(&self.contact_url)
                                    .css(&format!("background:{};color:{};", accent, text_color)),
                                |m| {
                                    m.text(&format!("Get {}", game.name));
                                    m.raw(SMALL_ARROW);
                                },
                            );
                        });
                    });
                    reveal.render(
                        &ids.video_side,
                        m,
                        Tag::new("div").class("game-video-side"),
                        |m| self.videos.render(m, index),
                    );
                });
            });
        });
    }
}

impl Section for Games {
    fn name(&self) -> &'static str {
        "games"
    }

    fn render(&self, m: &mut Markup) {
        m.element(
            Tag::new("section")
                .motion(&self.id)
                .class("games")
                .attr("id", "games"),
            |m| {
                self.background.render(m, Tag::new("div").class("games-bg-deco"), |m| {
                    m.element(Tag::new("div").class("games-bg-circle"), |_| {});
                });
                m.element(Tag::new("div").class("container"), |m| {
                    m.element(Tag::new("div").class("games-header"), |m| {
                        self.header.render(
                            &self.id.child("heading"),
                            m,
                            Tag::new("h2").class("games-heading"),
                            |m| {
                                m.text("The New ");
                                m.text_element(Tag::new("span").class("heading-gradient"), "Line‑Up");
                            },
                        );
                        self.header.render(
                            &self.id.child("sub"),
                            m,
                            Tag::new("p").class("games-sub"),
                            |m| {
                                m.text("Four world-class tabletop games designed to ");
                                m.text_element(Tag::new("strong"), "transform team dynamics");
                                m.text(".");
                            },
                        );
                    });
                    m.element(Tag::new("div").class("games-list"), |m| {
                        for i in 0..self.cards.len() {
                            self.render_card(m, i);
                        }
                    });
                });
            },
        );
    }
}

impl Effect for Games {
    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, frame: &mut Frame) -> bool {
        self.videos.pointer(event, ctx, frame)
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        tick_all(&mut [&mut self.header, &mut self.background], ctx, frame);
        for (_, reveal) in &mut self.cards {
            reveal.tick(ctx, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;
    use crate::media::VideoState;
    use crate::reveal::RevealState;

    fn click(target: &str) -> PointerEvent {
        PointerEvent {
            target: ElementId::new(target),
            kind: PointerKind::Click,
        }
    }

    fn measured_world() -> World {
        let mut world = World::new();
        for i in 0..4 {
            let card = ElementId::new("games.card").index(i);
            world.place(&card, 0.0, i as f32 * 700.0, 1100.0, 600.0);
            world.place(&card.child("media").child("video"), 600.0, i as f32 * 700.0 + 120.0, 480.0, 270.0);
        }
        world
    }

    #[test]
    fn click_switches_active_video() {
        let world = measured_world();
        let mut games = Games::new(&EngineConfig::default());
        let mut frame = Frame::new();

        assert!(games.pointer(&click("games.card.0.media"), &world.ctx(), &mut frame));
        assert_eq!(games.active_video(), Some("Team Compass"));

        games.pointer(&click("games.card.2.media.overlay"), &world.ctx(), &mut frame);
        assert_eq!(games.active_video(), Some("Surface Tension"));
        assert_eq!(games.videos.state(0), Some(VideoState::Idle));
        assert!(frame.output().media.contains(&MediaCommand {
            target: ElementId::new("games.card.0.media.video"),
            action: MediaAction::Pause,
        }));

        games.pointer(&click("games.card.2.media"), &world.ctx(), &mut frame);
        assert_eq!(games.active_video(), None);
    }

    #[test]
    fn pointer_outside_media_is_not_claimed() {
        let world = measured_world();
        let mut games = Games::new(&EngineConfig::default());
        assert!(!games.pointer(&click("games.card.1.button"), &world.ctx(), &mut Frame::new()));
    }

    #[test]
    fn skills_enter_after_the_card() {
        let mut world = measured_world();
        let mut games = Games::new(&EngineConfig::default());
        let mut frame = Frame::new();
        games.tick(&world.ctx(), &mut frame);
        // 0.5 s: card still rising (0.15 + 0.7), last skill not yet started (0.64).
        world.advance_ms(500);
        games.tick(&world.ctx(), &mut frame);
        let (ids, reveal) = &games.cards[0];
        assert!(matches!(reveal.child(&ids.root).map(|c| c.state()), Some(RevealState::Revealing { .. })));
        let last = frame
            .output()
            .styles
            .iter()
            .rev()
            .find(|s| s.id == ids.skill(3))
            .map(|s| s.css.clone());
        assert_eq!(last, Some(MotionStyle::hidden().with_y(10.0).to_css()));

        world.advance_ms(1500);
        games.tick(&world.ctx(), &mut frame);
        let (ids, reveal) = &games.cards[0];
        for j in 0..4 {
            assert_eq!(reveal.child(&ids.skill(j)).map(|c| c.state()), Some(RevealState::Visible));
        }
    }

    #[test]
    fn alternate_cards_are_reversed() {
        let games = Games::new(&EngineConfig::default());
        let mut m = Markup::new();
        games.render(&mut m);
        let html = m.into_string();
        assert_eq!(html.matches("game-card-reversed").count(), 2);
        assert!(html.contains("Get Cycle Time"));
        assert!(html.contains(r#"data-motion="games.card.3.media.video""#));
        assert!(html.contains("https://playkairos.com/contact/"));
    }
}
