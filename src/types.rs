// Strong typing over strings. Newtypes for timestamps, element ids and pixel geometry.
// Everything that crosses the JS boundary is defined here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Timestamp in microseconds. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_micros(us: u64) -> Self {
        Timestamp(us)
    }

    pub fn from_millis(ms: u64) -> Self {
        Timestamp(ms * 1000)
    }

    pub fn from_secs_f32(secs: f32) -> Self {
        Timestamp((secs.max(0.0) as f64 * 1_000_000.0).round() as u64)
    }

    pub fn as_micros(&self) -> u64 {
        self.0
    }

    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    pub fn as_secs(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Seconds elapsed since `earlier`, zero if `earlier` is in the future.
    pub fn secs_since(&self, earlier: Timestamp) -> f32 {
        (self.0.saturating_sub(earlier.0) as f64 / 1_000_000.0) as f32
    }
}

/// Identifier of a rendered element, written to the `data-motion` attribute.
/// Dotted paths: `games.card.2.video`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        ElementId(id.into())
    }

    pub fn child(&self, name: &str) -> Self {
        ElementId(format!("{}.{}", self.0, name))
    }

    pub fn index(&self, i: usize) -> Self {
        ElementId(format!("{}.{}", self.0, i))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `self` is `other` or nested below it.
    pub fn is_within(&self, other: &ElementId) -> bool {
        self.0 == other.0
            || (self.0.starts_with(&other.0) && self.0.as_bytes().get(other.0.len()) == Some(&b'.'))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        ElementId::new(s)
    }
}

/// 2D vector in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    pub fn scale(self, factor: f32) -> Self {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

/// Axis-aligned rectangle in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Grow by `margin` on every side; negative margins shrink.
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Inclusive overlap test: touching edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}

/// Browser viewport and document extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub document_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, document_height: f32) -> Self {
        Viewport {
            width,
            height,
            document_height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Maximum scroll offset; zero for pages that fit the viewport.
    pub fn max_scroll(&self) -> f32 {
        (self.document_height - self.height).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(1280.0, 800.0, 800.0)
    }
}

/// Engine configuration passed from JS. `{}` is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_contact_url")]
    pub contact_url: String,
    /// Scroll offset (px) after which the navbar collapses into its pill.
    #[serde(default = "default_nav_scroll_threshold")]
    pub nav_scroll_threshold: f32,
    /// Period of the hero pill colour rotation.
    #[serde(default = "default_pill_cycle_ms")]
    pub pill_cycle_ms: u64,
    #[serde(default = "default_particle_count")]
    pub particle_count: usize,
    #[serde(default = "default_particle_seed")]
    pub particle_seed: u64,
    /// Seconds per loop of the client-logo slider.
    #[serde(default = "default_slider_speed")]
    pub slider_speed: f32,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            contact_url: default_contact_url(),
            nav_scroll_threshold: default_nav_scroll_threshold(),
            pill_cycle_ms: default_pill_cycle_ms(),
            particle_count: default_particle_count(),
            particle_seed: default_particle_seed(),
            slider_speed: default_slider_speed(),
            log_level: LogLevel::default(),
        }
    }
}

fn default_contact_url() -> String {
    "https://playkairos.com/contact/".to_string()
}

fn default_nav_scroll_threshold() -> f32 {
    40.0
}

fn default_pill_cycle_ms() -> u64 {
    1500
}

fn default_particle_count() -> usize {
    8
}

fn default_particle_seed() -> u64 {
    7
}

fn default_slider_speed() -> f32 {
    25.0
}

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Batch of events collected by JS during one animation frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    /// Frame time. Lets the host advance animations in frames without events.
    #[serde(default)]
    pub now: Option<Timestamp>,
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// Single browser event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputEvent {
    pub timestamp: Timestamp,
    pub event_type: EventType,
}

/// Type of browser event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventType {
    /// Window resized or document height changed.
    Resize {
        width: f32,
        height: f32,
        document_height: f32,
    },
    /// Window scrolled to `y`.
    Scroll { y: f32 },
    /// Element measurements, relative to the viewport at the time of the report.
    Layout { rects: Vec<ElementRect> },
    /// Element removed from the document.
    Detach { id: ElementId },
    PointerMove { target: ElementId, x: f32, y: f32 },
    PointerEnter { target: ElementId, x: f32, y: f32 },
    PointerLeave { target: ElementId },
    Click { target: ElementId },
}

/// Measured bounding box of one element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRect {
    pub id: ElementId,
    pub rect: Rect,
}

/// Pointer interaction routed to a section.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub target: ElementId,
    pub kind: PointerKind,
}

impl PointerEvent {
    /// True only for a leave of `id` itself. Leaving a descendant keeps the
    /// pointer inside `id`.
    pub fn leaves(&self, id: &ElementId) -> bool {
        self.kind == PointerKind::Leave && self.target == *id
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    Move(Vec2),
    Enter(Vec2),
    Leave,
    Click,
}

/// Inline CSS to apply to one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleUpdate {
    pub id: ElementId,
    pub css: String,
}

/// Text content to replace on one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextUpdate {
    pub id: ElementId,
    pub text: String,
}

/// Class to add or remove on one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassUpdate {
    pub id: ElementId,
    pub class: String,
    pub enabled: bool,
}

/// Playback command for a `<video>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCommand {
    pub target: ElementId,
    pub action: MediaAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaAction {
    Play,
    Pause,
    Mute,
    Unmute,
    /// Seek back to the first frame.
    Rewind,
}

/// Everything the host must apply after one batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    pub styles: Vec<StyleUpdate>,
    pub texts: Vec<TextUpdate>,
    pub classes: Vec<ClassUpdate>,
    pub media: Vec<MediaCommand>,
}

impl FrameOutput {
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
            && self.texts.is_empty()
            && self.classes.is_empty()
            && self.media.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_conversions() {
        let ts = Timestamp::from_micros(1_500_000);
        assert_eq!(ts.as_micros(), 1_500_000);
        assert!((ts.as_secs() - 1.5).abs() < 0.0001);
        assert_eq!(Timestamp::from_millis(2).as_micros(), 2000);
        assert_eq!(Timestamp::from_secs_f32(0.25).as_micros(), 250_000);
    }

    #[test]
    fn secs_since_saturates() {
        let early = Timestamp::from_millis(100);
        let late = Timestamp::from_millis(600);
        assert!((late.secs_since(early) - 0.5).abs() < 1e-6);
        assert_eq!(early.secs_since(late), 0.0);
    }

    #[test]
    fn element_id_nesting() {
        let card = ElementId::new("games.card").index(2);
        assert_eq!(card.as_str(), "games.card.2");
        assert!(card.child("video").is_within(&card));
        assert!(card.is_within(&ElementId::new("games")));
        assert!(!ElementId::new("games.card.20").is_within(&card));
    }

    #[test]
    fn rect_intersection_is_inclusive() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let touching = Rect::new(100.0, 0.0, 50.0, 50.0);
        let apart = Rect::new(101.0, 0.0, 50.0, 50.0);
        assert!(a.intersects(&touching));
        assert!(!a.intersects(&apart));
        assert_eq!(a.inflate(-10.0), Rect::new(10.0, 10.0, 80.0, 80.0));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.nav_scroll_threshold, 40.0);
        assert_eq!(config.pill_cycle_ms, 1500);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn event_batch_parses_tagged_events() {
        let json = r#"{"events":[
            {"timestamp":1000,"event_type":{"type":"Scroll","y":120.5}},
            {"timestamp":2000,"event_type":{"type":"Click","target":"games.card.0.video"}}
        ]}"#;
        let batch: EventBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.events.len(), 2);
        assert!(matches!(batch.events[0].event_type, EventType::Scroll { y } if y == 120.5));
    }
}
