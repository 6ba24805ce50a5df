// The whole landing page: owns every section and the shared frame inputs,
// applies event batches and keeps the last CSS sent for each element.

use std::collections::HashMap;

use crate::ambient::BASE_CSS;
use crate::error::MotionError;
use crate::frame::{Effect, Frame, FrameContext, Layout};
use crate::markup::Markup;
use crate::parallax::ScrollProgressLine;
use crate::scroll::PageScroll;
use crate::sections::{route_pointer, Cta, Features, Footer, Games, Hero, Navbar, Section, SocialProof};
use crate::types::*;

pub struct Page {
    progress: ScrollProgressLine,
    navbar: Navbar,
    hero: Hero,
    features: Features,
    games: Games,
    social_proof: SocialProof,
    cta: Cta,
    footer: Footer,
    layout: Layout,
    scroll: PageScroll,
    viewport: Viewport,
    last_tick: Option<Timestamp>,
    emitted: HashMap<ElementId, String>,
}

impl Page {
    pub fn new(config: &EngineConfig) -> Self {
        Page {
            progress: ScrollProgressLine::new(ElementId::new("progress")),
            navbar: Navbar::new(config),
            hero: Hero::new(config),
            features: Features::new(),
            games: Games::new(config),
            social_proof: SocialProof::new(config),
            cta: Cta::new(config),
            footer: Footer::new(),
            layout: Layout::new(),
            scroll: PageScroll::new(),
            viewport: Viewport::default(),
            last_tick: None,
            emitted: HashMap::new(),
        }
    }

    /// Sections in document order.
    pub fn sections(&self) -> [&dyn Section; 7] {
        [
            &self.navbar,
            &self.hero,
            &self.features,
            &self.games,
            &self.social_proof,
            &self.cta,
            &self.footer,
        ]
    }

    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections().iter().map(|s| s.name()).collect()
    }

    pub fn base_css(&self) -> &'static str {
        BASE_CSS
    }

    /// Full page markup with first-frame styles inline.
    pub fn render_html(&self) -> String {
        let mut m = Markup::new();
        self.progress.render(&mut m);
        for section in self.sections() {
            section.render(&mut m);
        }
        m.into_string()
    }

    pub fn render_section(&self, name: &str) -> Result<String, MotionError> {
        let Some(section) = self.sections().into_iter().find(|s| s.name() == name) else {
            log::warn!("render_section: unknown section {:?}", name);
            return Err(MotionError::UnknownSection(name.to_string()));
        };
        let mut m = Markup::new();
        section.render(&mut m);
        Ok(m.into_string())
    }

    pub fn active_video(&self) -> Option<&str> {
        self.games.active_video()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Apply a batch in order, then tick every effect once at the latest timestamp.
    pub fn process(&mut self, batch: EventBatch) -> FrameOutput {
        let mut frame = Frame::new();
        let mut now = self.last_tick.unwrap_or_default();
        if let Some(ts) = batch.now {
            now = now.max(ts);
        }
        for event in batch.events {
            now = now.max(event.timestamp);
            self.apply(event, &mut frame);
        }

        let dt = self.last_tick.map_or(0.0, |last| now.secs_since(last));
        self.last_tick = Some(now);
        let ctx = FrameContext {
            now,
            dt,
            viewport: self.viewport,
            scroll_y: self.scroll.offset(),
            layout: &self.layout,
        };
        let effects: [&mut dyn Effect; 8] = [
            &mut self.progress,
            &mut self.navbar,
            &mut self.hero,
            &mut self.features,
            &mut self.games,
            &mut self.social_proof,
            &mut self.cta,
            &mut self.footer,
        ];
        for effect in effects {
            effect.tick(&ctx, &mut frame);
        }

        let mut output = frame.into_output();
        let emitted = &mut self.emitted;
        output.styles.retain(|update| {
            if emitted.get(&update.id) == Some(&update.css) {
                return false;
            }
            emitted.insert(update.id.clone(), update.css.clone());
            true
        });
        output
    }

    fn apply(&mut self, event: InputEvent, frame: &mut Frame) {
        let pointer = match event.event_type {
            EventType::Resize {
                width,
                height,
                document_height,
            } => {
                self.viewport = Viewport::new(width, height, document_height);
                return;
            }
            EventType::Scroll { y } => {
                self.scroll.set(y);
                return;
            }
            EventType::Layout { rects } => {
                let scroll_y = self.scroll.offset();
                for ElementRect { id, rect } in rects {
                    self.layout.record(id, rect, scroll_y);
                }
                return;
            }
            EventType::Detach { id } => {
                self.layout.remove(&id);
                self.emitted.remove(&id);
                return;
            }
            EventType::PointerMove { target, x, y } => PointerEvent {
                target,
                kind: PointerKind::Move(Vec2::new(x, y)),
            },
            EventType::PointerEnter { target, x, y } => PointerEvent {
                target,
                kind: PointerKind::Enter(Vec2::new(x, y)),
            },
            EventType::PointerLeave { target } => PointerEvent {
                target,
                kind: PointerKind::Leave,
            },
            EventType::Click { target } => PointerEvent {
                target,
                kind: PointerKind::Click,
            },
        };

        let ctx = FrameContext {
            now: event.timestamp,
            dt: 0.0,
            viewport: self.viewport,
            scroll_y: self.scroll.offset(),
            layout: &self.layout,
        };
        let handled = route_pointer(
            &mut [
                &mut self.navbar,
                &mut self.hero,
                &mut self.features,
                &mut self.games,
                &mut self.social_proof,
                &mut self.cta,
                &mut self.footer,
            ],
            &pointer,
            &ctx,
            frame,
        );
        if !handled {
            log::debug!("pointer event on unhandled target {}", pointer.target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(ms: u64, event_type: EventType) -> InputEvent {
        InputEvent {
            timestamp: Timestamp::from_millis(ms),
            event_type,
        }
    }

    fn batch(events: Vec<InputEvent>) -> EventBatch {
        EventBatch { now: None, events }
    }

    fn css_for(output: &FrameOutput, id: &str) -> Option<String> {
        output
            .styles
            .iter()
            .rev()
            .find(|s| s.id.as_str() == id)
            .map(|s| s.css.clone())
    }

    #[test]
    fn render_html_lists_sections_in_order() {
        let page = Page::new(&EngineConfig::default());
        let html = page.render_html();
        let order = ["\"progress\"", "\"nav\"", "\"hero\"", "\"features\"", "\"games\"", "\"proof\"", "\"cta\"", "footer-grid"];
        let positions: Vec<usize> = order.iter().filter_map(|needle| html.find(needle)).collect();
        assert_eq!(positions.len(), order.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unknown_section_is_an_error() {
        let page = Page::new(&EngineConfig::default());
        assert!(page.render_section("hero").is_ok());
        assert!(matches!(
            page.render_section("pricing"),
            Err(MotionError::UnknownSection(name)) if name == "pricing"
        ));
    }

    #[test]
    fn header_slides_in_on_mount() {
        let mut page = Page::new(&EngineConfig::default());
        let first = page.process(batch(vec![event(0, EventType::Scroll { y: 0.0 })]));
        let hidden = css_for(&first, "nav").unwrap();
        assert!(hidden.contains("opacity:0;"));

        let later = page.process(EventBatch {
            now: Some(Timestamp::from_millis(2000)),
            events: Vec::new(),
        });
        let shown = css_for(&later, "nav").unwrap();
        assert!(shown.starts_with("opacity:1;"));
    }

    #[test]
    fn styles_are_sent_once() {
        let mut page = Page::new(&EngineConfig::default());
        page.process(batch(vec![event(0, EventType::Scroll { y: 0.0 })]));
        page.process(batch(vec![event(3000, EventType::Scroll { y: 0.0 })]));
        let settled = page.process(batch(vec![event(3016, EventType::Scroll { y: 0.0 })]));
        assert_eq!(css_for(&settled, "nav"), None);
        assert_eq!(css_for(&settled, "hero.title.lead"), None);

        // Detaching forgets the element, so it is re-sent when it returns.
        let again = page.process(batch(vec![event(
            3032,
            EventType::Detach {
                id: ElementId::new("nav"),
            },
        )]));
        assert!(css_for(&again, "nav").is_some());
    }

    #[test]
    fn layout_is_stored_relative_to_the_document() {
        let mut page = Page::new(&EngineConfig::default());
        page.process(batch(vec![
            event(0, EventType::Scroll { y: 500.0 }),
            event(
                0,
                EventType::Layout {
                    rects: vec![ElementRect {
                        id: ElementId::new("features"),
                        rect: Rect::new(0.0, 100.0, 1280.0, 900.0),
                    }],
                },
            ),
        ]));
        assert_eq!(
            page.layout.document_rect(&ElementId::new("features")),
            Some(Rect::new(0.0, 600.0, 1280.0, 900.0))
        );
        assert_eq!(page.scroll_offset(), 500.0);
    }

    #[test]
    fn clicks_reach_the_game_videos() {
        let mut page = Page::new(&EngineConfig::default());
        let video = ElementId::new("games.card.1.media.video");
        let out = page.process(batch(vec![
            event(
                0,
                EventType::Layout {
                    rects: vec![ElementRect {
                        id: video.clone(),
                        rect: Rect::new(600.0, 200.0, 480.0, 270.0),
                    }],
                },
            ),
            event(
                10,
                EventType::Click {
                    target: ElementId::new("games.card.1.media"),
                },
            ),
        ]));
        assert_eq!(page.active_video(), Some("Shared Spaces"));
        assert!(out.media.contains(&MediaCommand {
            target: video,
            action: MediaAction::Unmute,
        }));
    }

    #[test]
    fn time_never_runs_backwards() {
        let mut page = Page::new(&EngineConfig::default());
        page.process(batch(vec![event(500, EventType::Scroll { y: 0.0 })]));
        page.process(batch(vec![event(100, EventType::Scroll { y: 0.0 })]));
        assert_eq!(page.last_tick, Some(Timestamp::from_millis(500)));
    }
}
