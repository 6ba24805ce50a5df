// Fixed header: slides in on mount, collapses into a compact pill once the page
// scrolls, hover dropdown for games, hamburger menu on small screens.

use crate::curve::lerp;
use crate::easing::Easing;
use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::pointer::MagneticHover;
use crate::reveal::{RevealElement, Transition};
use crate::sections::{route_pointer, tick_all, Section, ARROW_ICON};
use crate::style::{round, MotionStyle, Rgba};
use crate::toggle::Toggle;
use crate::types::*;

struct NavLink {
    label: &'static str,
    href: &'static str,
    external: bool,
    dropdown: bool,
}

const LINKS: [NavLink; 5] = [
    NavLink {
        label: "About",
        href: "https://playkairos.com/about-us/",
        external: true,
        dropdown: false,
    },
    NavLink {
        label: "Games",
        href: "#games",
        external: false,
        dropdown: true,
    },
    NavLink {
        label: "Blog",
        href: "https://playkairos.com/blog/",
        external: true,
        dropdown: false,
    },
    NavLink {
        label: "Gamewise",
        href: "https://playkairos.com/gamewise/",
        external: true,
        dropdown: false,
    },
    NavLink {
        label: "Login",
        href: "https://playkairos.com/contact/",
        external: true,
        dropdown: false,
    },
];

const GAMES_MENU: [(&str, &str); 2] = [
    ("Digital Games", "https://playkairos.com/digital-games/"),
    ("Physical Games", "https://playkairos.com/physical-games/"),
];

const CLEAR: Rgba = Rgba::new(255.0, 255.0, 255.0, 0.0);
const GLASS: Rgba = Rgba::new(255.0, 255.0, 255.0, 0.85);
const GLASS_BORDER: Rgba = Rgba::new(226.0, 232.0, 240.0, 0.7);

/// Pill geometry and colours for a morph position.
fn pill_css(layout: f32, colors: f32, scrolled: bool) -> String {
    let (backdrop, shadow) = if scrolled {
        (
            "blur(24px) saturate(180%)",
            "0 4px 30px rgba(0,0,0,0.06), 0 1px 4px rgba(0,0,0,0.03)",
        )
    } else {
        ("none", "none")
    };
    format!(
        "max-width:{}px;padding:{}px {}px;border-radius:{}px;margin-top:{}px;background-color:{};border-color:{};backdrop-filter:{};-webkit-backdrop-filter:{};box-shadow:{};",
        round(lerp(1200.0, 680.0, layout)),
        round(lerp(14.0, 6.0, layout)),
        round(lerp(28.0, 14.0, layout)),
        round(lerp(24.0, 9999.0, layout)),
        round(lerp(0.0, 10.0, layout)),
        CLEAR.lerp(&GLASS, colors).to_css(),
        CLEAR.lerp(&GLASS_BORDER, colors).to_css(),
        backdrop,
        backdrop,
        shadow,
    )
}

pub struct Navbar {
    id: ElementId,
    contact_url: String,
    scroll_threshold: f32,
    header: RevealElement,
    layout: Toggle,
    colors: Toggle,
    dropdown: Toggle,
    burger: Toggle,
    menu_links: Vec<RevealElement>,
    cta: MagneticHover,
}

impl Navbar {
    pub fn new(config: &EngineConfig) -> Self {
        let id = ElementId::new("nav");
        let menu = id.child("menu");
        let link_hidden = MotionStyle::hidden().with_x(-20.0);
        let link = |i: usize, delay: f32| {
            RevealElement::child(
                menu.child("link").index(i),
                link_hidden,
                Transition::tween(0.3).with_easing(Easing::EaseOut).with_delay(delay),
            )
        };

        // Flattened mobile list: dropdown entries follow their heading 0.04 s later.
        let mut menu_links = Vec::new();
        for (i, l) in LINKS.iter().enumerate() {
            let delay = i as f32 * 0.08;
            menu_links.push(link(menu_links.len(), delay));
            if l.dropdown {
                for _ in GAMES_MENU {
                    menu_links.push(link(menu_links.len(), delay + 0.04));
                }
            }
        }
        menu_links.push(RevealElement::child(
            menu.child("cta"),
            MotionStyle::hidden().with_y(10.0),
            Transition::tween(0.3).with_easing(Easing::EaseOut).with_delay(0.3),
        ));

        Navbar {
            header: RevealElement::on_mount(
                id.clone(),
                MotionStyle::hidden().with_y(-80.0),
                Transition::tween(0.5).with_easing(Easing::STANDARD),
            ),
            cta: MagneticHover::new(id.child("cta"), 0.1),
            id,
            contact_url: config.contact_url.clone(),
            scroll_threshold: config.nav_scroll_threshold,
            layout: Toggle::new(0.45, Easing::EASE),
            colors: Toggle::new(0.3, Easing::EASE),
            dropdown: Toggle::new(0.2, Easing::EXPO_OUT),
            burger: Toggle::new(0.35, Easing::EXPO_OUT),
            menu_links,
        }
    }

    fn pill_id(&self) -> ElementId {
        self.id.child("pill")
    }

    fn games_id(&self) -> ElementId {
        self.id.child("games")
    }

    fn burger_id(&self) -> ElementId {
        self.id.child("burger")
    }

    fn menu_id(&self) -> ElementId {
        self.id.child("menu")
    }

    fn overlay_id(&self) -> ElementId {
        self.id.child("overlay")
    }

    pub fn is_scrolled(&self) -> bool {
        self.layout.is_on()
    }

    pub fn is_menu_open(&self) -> bool {
        self.burger.is_on()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown.is_on()
    }

    fn set_menu(&mut self, open: bool, frame: &mut Frame) {
        if self.burger.is_on() == open {
            return;
        }
        self.burger.set(open);
        frame.class(&self.burger_id(), "active", open);
        frame.class(&self.menu_id(), "open", open);
        frame.class(&self.overlay_id(), "open", open);
        if !open {
            for link in &mut self.menu_links {
                link.reset();
            }
        }
    }

    fn render_links(&self, m: &mut Markup) {
        m.element(Tag::new("div").class("nav-links"), |m| {
            for link in &LINKS {
                if link.dropdown {
                    m.element(
                        Tag::new("div").motion(&self.games_id()).class("nav-dropdown"),
                        |m| {
                            m.element(Tag::new("a").attr("href", link.href).class("nav-link"), |m| {
                                m.text(link.label);
                                m.raw(r#"<svg width="10" height="10" viewBox="0 0 10 10" fill="none" style="margin-left:3px"><path d="M2 4l3 3 3-3" stroke="currentColor" stroke-width="1.3" stroke-linecap="round" stroke-linejoin="round"/></svg>"#);
                            });
                            m.element(
                                Tag::new("div")
                                    .motion(&self.games_id().child("menu"))
                                    .class("nav-dropdown-menu")
                                    .css("pointer-events:none;")
                                    .initial(&MotionStyle::hidden().with_y(8.0).with_scale(0.96)),
                                |m| {
                                    for (label, href) in GAMES_MENU {
                                        m.text_element(
                                            Tag::new("a").external(href).class("nav-dropdown-item"),
                                            label,
                                        );
                                    }
                                },
                            );
                        },
                    );
                } else {
                    let tag = if link.external {
                        Tag::new("a").external(link.href)
                    } else {
                        Tag::new("a").attr("href", link.href)
                    };
                    m.text_element(tag.class("nav-link"), link.label);
                }
            }
        });
    }

    fn render_mobile(&self, m: &mut Markup) {
        m.element(Tag::new("div").motion(&self.menu_id()).class("nav-mobile-menu"), |m| {
            let mut reveals = self.menu_links.iter();
            for link in &LINKS {
                let Some(reveal) = reveals.next() else {
                    return;
                };
                if link.dropdown {
                    m.element(Tag::new("div"), |m| {
                        reveal.render(
                            m,
                            Tag::new("span").class("nav-mobile-link").css("cursor:default;display:block;"),
                            |m| m.text(link.label),
                        );
                        for (label, href) in GAMES_MENU {
                            if let Some(sub) = reveals.next() {
                                sub.render(
                                    m,
                                    Tag::new("a")
                                        .external(href)
                                        .class("nav-mobile-link")
                                        .css("padding-left:24px;font-size:14px;"),
                                    |m| m.text(&format!("↳ {}", label)),
                                );
                            }
                        }
                    });
                } else {
                    let tag = if link.external {
                        Tag::new("a").external(link.href)
                    } else {
                        Tag::new("a").attr("href", link.href)
                    };
                    reveal.render(m, tag.class("nav-mobile-link"), |m| m.text(link.label));
                }
            }
            if let Some(cta) = reveals.next() {
                cta.render(
                    m,
                    Tag::new("a").external(&self.contact_url).class("nav-mobile-cta"),
                    |m| m.text("Contact Us →"),
                );
            }
        });
        m.element(Tag::new("div").motion(&self.overlay_id()).class("nav-overlay"), |_| {});
    }
}

impl Section for Navbar {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn render(&self, m: &mut Markup) {
        self.header.render(m, Tag::new("header").class("nav-header"), |m| {
            m.element(
                Tag::new("nav")
                    .motion(&self.pill_id())
                    .class("nav-pill")
                    .css(&pill_css(0.0, 0.0, false)),
                |m| {
                    m.element(
                        Tag::new("a").external("https://playkairos.com/").class("nav-logo"),
                        |m| {
                            m.void(
                                Tag::new("img")
                                    .attr("src", "/kairos-logo.png")
                                    .attr("alt", "Kairos")
                                    .attr("width", "160")
                                    .attr("height", "22"),
                            );
                        },
                    );
                    self.render_links(m);
                    self.cta.render(m, |m| {
                        m.element(
                            Tag::new("a").external(&self.contact_url).class("nav-cta"),
                            |m| {
                                m.text("Contact Us");
                                m.raw(ARROW_ICON);
                            },
                        );
                    });
                    m.element(
                        Tag::new("button")
                            .motion(&self.burger_id())
                            .class("nav-hamburger")
                            .attr("aria-label", "toggle menu"),
                        |m| {
                            for i in 0..3 {
                                m.element(Tag::new("span").motion(&self.burger_id().index(i)), |_| {});
                            }
                        },
                    );
                },
            );
            self.render_mobile(m);
        });
    }
}

impl Effect for Navbar {
    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, frame: &mut Frame) -> bool {
        let target = &event.target;
        if target.is_within(&self.games_id()) {
            match event.kind {
                PointerKind::Enter(_) | PointerKind::Move(_) => self.dropdown.set(true),
                PointerKind::Leave if event.leaves(&self.games_id()) => self.dropdown.set(false),
                PointerKind::Leave | PointerKind::Click => {}
            }
            return true;
        }
        if target.is_within(&self.burger_id()) {
            if event.kind == PointerKind::Click {
                let open = !self.burger.is_on();
                self.set_menu(open, frame);
            }
            return true;
        }
        if target.is_within(&self.menu_id().child("link"))
            || target.is_within(&self.menu_id().child("cta"))
            || target.is_within(&self.overlay_id())
        {
            if event.kind == PointerKind::Click {
                self.set_menu(false, frame);
            }
            return true;
        }
        route_pointer(&mut [&mut self.cta], event, ctx, frame) || target.is_within(&self.id)
    }

    fn tick(&mut self, ctx: &FrameContext, frame: &mut Frame) {
        tick_all(&mut [&mut self.header, &mut self.cta], ctx, frame);

        let scrolled = ctx.scroll_y > self.scroll_threshold;
        self.layout.set(scrolled);
        self.colors.set(scrolled);
        let layout = self.layout.step(ctx.dt);
        let colors = self.colors.step(ctx.dt);
        frame.style(&self.pill_id(), pill_css(layout, colors, scrolled));

        let open = self.dropdown.step(ctx.dt);
        let closed = MotionStyle::hidden().with_y(8.0).with_scale(0.96);
        let mut css = closed.lerp(&MotionStyle::IDENTITY, open).to_css();
        css.push_str(if self.dropdown.is_on() {
            "pointer-events:auto;"
        } else {
            "pointer-events:none;"
        });
        frame.style(&self.games_id().child("menu"), css);

        let t = self.burger.step(ctx.dt);
        let lines = [
            MotionStyle::IDENTITY.with_rotate(45.0 * t).with_y(7.0 * t),
            MotionStyle::IDENTITY
                .with_opacity(1.0 - t)
                .with_scale_x(1.0 - t),
            MotionStyle::IDENTITY.with_rotate(-45.0 * t).with_y(-7.0 * t),
        ];
        for (i, line) in lines.iter().enumerate() {
            frame.motion(&self.burger_id().index(i), line);
        }
        frame.style(&self.menu_id(), format!("opacity:{};", round(t)));

        let menu_open = self.burger.is_on();
        for link in &mut self.menu_links {
            link.drive(menu_open, ctx, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::testing::World;
    use crate::reveal::RevealState;

    fn css_for(frame: &Frame, id: &str) -> Option<String> {
        frame
            .output()
            .styles
            .iter()
            .rev()
            .find(|s| s.id.as_str() == id)
            .map(|s| s.css.clone())
    }

    #[test]
    fn collapses_after_threshold() {
        let mut world = World::new();
        let mut nav = Navbar::new(&EngineConfig::default());
        let mut frame = Frame::new();
        world.scroll_y = 40.0;
        nav.tick(&world.ctx(), &mut frame);
        assert!(!nav.is_scrolled());

        world.scroll_y = 41.0;
        world.advance_ms(500);
        nav.tick(&world.ctx(), &mut frame);
        assert!(nav.is_scrolled());
        let css = css_for(&frame, "nav.pill").unwrap();
        assert!(css.starts_with("max-width:680px;padding:6px 14px;border-radius:9999px;"));
        assert!(css.contains("background-color:rgba(255, 255, 255, 0.85)"));
    }

    #[test]
    fn header_slides_in_on_mount() {
        let mut world = World::new();
        let mut nav = Navbar::new(&EngineConfig::default());
        let mut frame = Frame::new();
        nav.tick(&world.ctx(), &mut frame);
        assert!(css_for(&frame, "nav").unwrap().contains("translate3d(0px,-80px,0)"));
        world.advance_ms(600);
        nav.tick(&world.ctx(), &mut frame);
        assert_eq!(css_for(&frame, "nav").unwrap(), MotionStyle::IDENTITY.to_css());
    }

    #[test]
    fn dropdown_follows_hover() {
        let mut world = World::new();
        let mut nav = Navbar::new(&EngineConfig::default());
        let mut frame = Frame::new();
        let enter = PointerEvent {
            target: ElementId::new("nav.games"),
            kind: PointerKind::Enter(Vec2::new(0.0, 0.0)),
        };
        assert!(nav.pointer(&enter, &world.ctx(), &mut frame));
        world.advance_ms(250);
        nav.tick(&world.ctx(), &mut frame);
        assert!(nav.is_dropdown_open());
        assert!(css_for(&frame, "nav.games.menu").unwrap().ends_with("pointer-events:auto;"));

        let leave = PointerEvent {
            target: ElementId::new("nav.games"),
            kind: PointerKind::Leave,
        };
        nav.pointer(&leave, &world.ctx(), &mut frame);
        assert!(!nav.is_dropdown_open());
    }

    #[test]
    fn dropdown_stays_open_while_moving_between_children() {
        let world = World::new();
        let mut nav = Navbar::new(&EngineConfig::default());
        let mut frame = Frame::new();
        let event = |target: &str, kind: PointerKind| PointerEvent {
            target: ElementId::new(target),
            kind,
        };
        nav.pointer(&event("nav.games", PointerKind::Enter(Vec2::new(0.0, 0.0))), &world.ctx(), &mut frame);
        nav.pointer(&event("nav.games.menu", PointerKind::Enter(Vec2::new(0.0, 40.0))), &world.ctx(), &mut frame);
        nav.pointer(&event("nav.games.menu", PointerKind::Leave), &world.ctx(), &mut frame);
        assert!(nav.is_dropdown_open());

        nav.pointer(&event("nav.games", PointerKind::Leave), &world.ctx(), &mut frame);
        assert!(!nav.is_dropdown_open());
    }

    #[test]
    fn hamburger_opens_and_link_closes() {
        let mut world = World::new();
        let mut nav = Navbar::new(&EngineConfig::default());
        let mut frame = Frame::new();
        let click = |target: &str| PointerEvent {
            target: ElementId::new(target),
            kind: PointerKind::Click,
        };
        nav.pointer(&click("nav.burger.1"), &world.ctx(), &mut frame);
        assert!(nav.is_menu_open());
        nav.tick(&world.ctx(), &mut frame);
        world.advance_ms(1000);
        nav.tick(&world.ctx(), &mut frame);
        assert!(nav.menu_links.iter().all(|l| l.state() == RevealState::Visible));
        assert_eq!(nav.menu_links.len(), LINKS.len() + GAMES_MENU.len() + 1);

        nav.pointer(&click("nav.menu.link.3"), &world.ctx(), &mut frame);
        assert!(!nav.is_menu_open());
        assert!(nav.menu_links.iter().all(|l| l.state() == RevealState::Hidden));
        assert!(frame
            .output()
            .classes
            .iter()
            .any(|c| c.id.as_str() == "nav.overlay" && !c.enabled));
    }

    #[test]
    fn renders_external_links_safely() {
        let nav = Navbar::new(&EngineConfig::default());
        let mut m = Markup::new();
        nav.render(&mut m);
        let html = m.into_string();
        assert!(html.contains(r#"href="https://playkairos.com/blog/" target="_blank" rel="noopener noreferrer""#));
        assert!(html.contains(r##"href="#games""##));
        assert!(html.contains(r#"data-motion="nav.cta""#));
    }
}
