// Page sections. Each owns the effects for its elements and renders its own markup.

pub mod cta;
pub mod features;
pub mod footer;
pub mod games;
pub mod hero;
pub mod navbar;
pub mod social_proof;

use crate::frame::{Effect, Frame, FrameContext};
use crate::markup::Markup;
use crate::types::PointerEvent;

pub use cta::Cta;
pub use features::Features;
pub use footer::Footer;
pub use games::Games;
pub use hero::Hero;
pub use navbar::Navbar;
pub use social_proof::SocialProof;

/// A top-level block of the page.
pub trait Section: Effect {
    /// Stable name used by `render_section`.
    fn name(&self) -> &'static str;

    fn render(&self, m: &mut Markup);
}

/// Offer a pointer event to each effect in turn until one claims it.
pub(crate) fn route_pointer(
    effects: &mut [&mut dyn Effect],
    event: &PointerEvent,
    ctx: &FrameContext,
    frame: &mut Frame,
) -> bool {
    effects.iter_mut().any(|e| e.pointer(event, ctx, frame))
}

/// Tick every effect.
pub(crate) fn tick_all(effects: &mut [&mut dyn Effect], ctx: &FrameContext, frame: &mut Frame) {
    for effect in effects.iter_mut() {
        effect.tick(ctx, frame);
    }
}

/// Right-pointing arrow used on call-to-action buttons.
pub(crate) const ARROW_ICON: &str = r#"<svg width="14" height="14" viewBox="0 0 16 16" fill="none"><path d="M3 8h10M9 4l4 4-4 4" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Brand accent palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Green,
    Red,
    Yellow,
}

impl Accent {
    pub fn var(self) -> &'static str {
        match self {
            Accent::Purple => "var(--purple)",
            Accent::Green => "var(--green)",
            Accent::Red => "var(--red)",
            Accent::Yellow => "var(--yellow)",
        }
    }

    fn rgb(self) -> &'static str {
        match self {
            Accent::Purple => "124, 58, 237",
            Accent::Green => "5, 150, 105",
            Accent::Red => "239, 64, 96",
            Accent::Yellow => "217, 119, 6",
        }
    }

    /// Accent at `alpha` opacity.
    pub fn tint(self, alpha: f32) -> String {
        format!("rgba({}, {})", self.rgb(), alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_tints() {
        assert_eq!(Accent::Red.tint(0.05), "rgba(239, 64, 96, 0.05)");
        assert_eq!(Accent::Yellow.var(), "var(--yellow)");
    }
}
