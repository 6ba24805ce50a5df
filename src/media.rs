// Game video cards: hover previews muted, click plays with sound, and at most
// one card plays with sound at a time.

use serde::{Deserialize, Serialize};

use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::{Markup, Tag};
use crate::types::*;

/// Playback state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoState {
    Idle,
    /// Hovered and not active: muted preview, overlay hidden.
    Previewing,
    /// Playing with sound after a click.
    Active,
}

#[derive(Debug, Clone)]
struct VideoCard {
    name: String,
    wrapper: ElementId,
    src: String,
    accent: String,
    state: VideoState,
    hovered: bool,
}

impl VideoCard {
    fn video(&self) -> ElementId {
        self.wrapper.child("video")
    }
}

/// All video cards on the page and the single active selection.
#[derive(Debug, Clone, Default)]
pub struct VideoShowcase {
    cards: Vec<VideoCard>,
    active: Option<usize>,
}

impl VideoShowcase {
    pub fn new() -> Self {
        VideoShowcase::default()
    }

    /// Register a card; returns its index.
    pub fn add_card(&mut self, name: &str, wrapper: ElementId, src: &str, accent: &str) -> usize {
        self.cards.push(VideoCard {
            name: name.to_string(),
            wrapper,
            src: src.to_string(),
            accent: accent.to_string(),
            state: VideoState::Idle,
            hovered: false,
        });
        self.cards.len() - 1
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn state(&self, card: usize) -> Option<VideoState> {
        self.cards.get(card).map(|c| c.state)
    }

    /// Name of the card playing with sound.
    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.cards[i].name.as_str())
    }

    fn has_media(&self, card: usize, ctx: &FrameContext) -> bool {
        let video = self.cards[card].video();
        if ctx.layout.contains(&video) {
            true
        } else {
            log::debug!("no media element for {}", video);
            false
        }
    }

    fn set_state(&mut self, card: usize, state: VideoState, frame: &mut Frame) {
        let c = &mut self.cards[card];
        c.state = state;
        frame.class(
            &c.wrapper.child("overlay"),
            "hidden",
            state != VideoState::Idle,
        );
        frame.class(&c.wrapper, "active", state == VideoState::Active);
        frame.class(&c.wrapper.child("hint"), "visible", state == VideoState::Active);
        let border = if state == VideoState::Active {
            c.accent.as_str()
        } else {
            "transparent"
        };
        frame.style(&c.wrapper, format!("border-color:{};", border));
    }

    pub fn hover(&mut self, card: usize, ctx: &FrameContext, frame: &mut Frame) {
        let Some(c) = self.cards.get_mut(card) else {
            return;
        };
        c.hovered = true;
        if c.state != VideoState::Idle || !self.has_media(card, ctx) {
            return;
        }
        let video = self.cards[card].video();
        frame.media(&video, MediaAction::Mute);
        frame.media(&video, MediaAction::Play);
        self.set_state(card, VideoState::Previewing, frame);
    }

    /// Stops and rewinds any card that is not active.
    pub fn leave(&mut self, card: usize, ctx: &FrameContext, frame: &mut Frame) {
        let Some(c) = self.cards.get_mut(card) else {
            return;
        };
        c.hovered = false;
        if c.state == VideoState::Active || !self.has_media(card, ctx) {
            return;
        }
        let video = self.cards[card].video();
        frame.media(&video, MediaAction::Pause);
        frame.media(&video, MediaAction::Rewind);
        self.set_state(card, VideoState::Idle, frame);
    }

    /// Toggle sound playback for `card`, silencing every other card.
    pub fn click(&mut self, card: usize, ctx: &FrameContext, frame: &mut Frame) {
        if card >= self.cards.len() || !self.has_media(card, ctx) {
            return;
        }
        let video = self.cards[card].video();
        if self.cards[card].state == VideoState::Active {
            frame.media(&video, MediaAction::Pause);
            frame.media(&video, MediaAction::Mute);
            let state = self.resting_state(card);
            self.set_state(card, state, frame);
            self.active = None;
            return;
        }

        for other in 0..self.cards.len() {
            if other != card && self.cards[other].state != VideoState::Idle {
                let other_video = self.cards[other].video();
                frame.media(&other_video, MediaAction::Pause);
                frame.media(&other_video, MediaAction::Mute);
                let state = self.resting_state(other);
                self.set_state(other, state, frame);
            }
        }
        frame.media(&video, MediaAction::Unmute);
        frame.media(&video, MediaAction::Play);
        self.set_state(card, VideoState::Active, frame);
        self.active = Some(card);
    }

    /// State a card falls back to when it stops playing with sound.
    fn resting_state(&self, card: usize) -> VideoState {
        if self.cards[card].hovered {
            VideoState::Previewing
        } else {
            VideoState::Idle
        }
    }

    fn card_for(&self, target: &ElementId) -> Option<usize> {
        self.cards.iter().position(|c| target.is_within(&c.wrapper))
    }

    /// Video panel for `card`: wrapper, muted looping video, overlay and pause hint.
    pub fn render(&self, m: &mut Markup, card: usize) {
        let Some(c) = self.cards.get(card) else {
            return;
        };
        m.element(
            Tag::new("div")
                .motion(&c.wrapper)
                .class("video-wrapper")
                .css("border-color:transparent;"),
            |m| {
                m.void(
                    Tag::new("video")
                        .motion(&c.video())
                        .class("video-player")
                        .attr("src", c.src.clone())
                        .attr("muted", "")
                        .attr("loop", "")
                        .attr("playsinline", ""),
                );
                m.element(
                    Tag::new("div").motion(&c.wrapper.child("overlay")).class("video-overlay"),
                    |m| {
                        m.element(
                            Tag::new("div")
                                .class("play-btn")
                                .css(&format!("background:{};", c.accent)),
                            |m| {
                                m.raw(r##"<svg width="22" height="22" viewBox="0 0 24 24" fill="#fff"><path d="M8 5v14l11-7L8 5z"/></svg>"##);
                            },
                        );
                        m.text_element(Tag::new("span").class("video-label"), "Tap or hover to preview");
                    },
                );
                m.element(
                    Tag::new("div").motion(&c.wrapper.child("hint")).class("pause-hint"),
                    |m| {
                        m.raw(r##"<svg width="16" height="16" viewBox="0 0 24 24" fill="#fff"><rect x="6" y="4" width="4" height="16"/><rect x="14" y="4" width="4" height="16"/></svg>"##);
                        m.text("Click to pause");
                    },
                );
            },
        );
    }
}

impl Effect for VideoShowcase {
    fn tick(&mut self, _ctx: &FrameContext, _frame: &mut Frame) {}

    fn pointer(&mut self, event: &PointerEvent, ctx: &FrameContext, frame: &mut Frame) -> bool {
        let Some(card) = self.card_for(&event.target) else {
            return false;
        };
        match event.kind {
            PointerKind::Enter(_) => self.hover(card, ctx, frame),
            PointerKind::Move(_) => {}
            PointerKind::Leave if event.leaves(&self.cards[card].wrapper) => {
                self.leave(card, ctx, frame)
            }
            PointerKind::Leave => {}
            PointerKind::Click => self.click(card, ctx, frame),
        }
        true
    }
}
