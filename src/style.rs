// Animated style values and their CSS serialisation.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::curve::lerp;

/// The animatable subset of an element's style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionStyle {
    pub opacity: f32,
    /// Horizontal translation in px.
    pub x: f32,
    /// Vertical translation in px.
    pub y: f32,
    /// Vertical translation as a percentage of the element's own height.
    pub y_percent: f32,
    pub scale: f32,
    pub scale_x: f32,
    /// Degrees.
    pub rotate: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
    /// Gaussian blur radius in px.
    pub blur: f32,
    /// Fraction of an SVG path that is drawn, when the element is a path.
    pub path_length: Option<f32>,
}

impl Default for MotionStyle {
    fn default() -> Self {
        MotionStyle::IDENTITY
    }
}

impl MotionStyle {
    /// Fully visible, untransformed.
    pub const IDENTITY: MotionStyle = MotionStyle {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        y_percent: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        blur: 0.0,
        path_length: None,
    };

    pub fn hidden() -> Self {
        MotionStyle {
            opacity: 0.0,
            ..MotionStyle::IDENTITY
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_y_percent(mut self, y_percent: f32) -> Self {
        self.y_percent = y_percent;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_scale_x(mut self, scale_x: f32) -> Self {
        self.scale_x = scale_x;
        self
    }

    pub fn with_rotate(mut self, rotate: f32) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn with_rotate_x(mut self, rotate_x: f32) -> Self {
        self.rotate_x = rotate_x;
        self
    }

    pub fn with_rotate_y(mut self, rotate_y: f32) -> Self {
        self.rotate_y = rotate_y;
        self
    }

    pub fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    pub fn with_path_length(mut self, path_length: f32) -> Self {
        self.path_length = Some(path_length);
        self
    }

    /// Component-wise interpolation. Progress may overshoot [0, 1] for springs.
    pub fn lerp(&self, to: &MotionStyle, t: f32) -> MotionStyle {
        MotionStyle {
            opacity: lerp(self.opacity, to.opacity, t).clamp(0.0, 1.0),
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            y_percent: lerp(self.y_percent, to.y_percent, t),
            scale: lerp(self.scale, to.scale, t),
            scale_x: lerp(self.scale_x, to.scale_x, t),
            rotate: lerp(self.rotate, to.rotate, t),
            rotate_x: lerp(self.rotate_x, to.rotate_x, t),
            rotate_y: lerp(self.rotate_y, to.rotate_y, t),
            blur: lerp(self.blur, to.blur, t).max(0.0),
            path_length: match (self.path_length, to.path_length) {
                (Some(a), Some(b)) => Some(lerp(a, b, t).clamp(0.0, 1.0)),
                (a, b) => b.or(a),
            },
        }
    }

    /// Inline CSS declarations. Always writes opacity, transform and filter so
    /// that a later update fully replaces an earlier one.
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(96);
        let _ = write!(css, "opacity:{};", round(self.opacity));

        let mut transform = String::new();
        if self.x != 0.0 || self.y != 0.0 {
            let _ = write!(
                transform,
                "translate3d({}px,{}px,0) ",
                round(self.x),
                round(self.y)
            );
        }
        if self.y_percent != 0.0 {
            let _ = write!(transform, "translateY({}%) ", round(self.y_percent));
        }
        if self.scale != 1.0 {
            let _ = write!(transform, "scale({}) ", round(self.scale));
        }
        if self.scale_x != 1.0 {
            let _ = write!(transform, "scaleX({}) ", round(self.scale_x));
        }
        if self.rotate != 0.0 {
            let _ = write!(transform, "rotate({}deg) ", round(self.rotate));
        }
        if self.rotate_x != 0.0 {
            let _ = write!(transform, "rotateX({}deg) ", round(self.rotate_x));
        }
        if self.rotate_y != 0.0 {
            let _ = write!(transform, "rotateY({}deg) ", round(self.rotate_y));
        }
        let transform = transform.trim_end();
        if transform.is_empty() {
            css.push_str("transform:none;");
        } else {
            let _ = write!(css, "transform:{};", transform);
        }

        if self.blur > 0.0 {
            let _ = write!(css, "filter:blur({}px);", round(self.blur));
        } else {
            css.push_str("filter:none;");
        }

        if let Some(length) = self.path_length {
            // Paths are rendered with pathLength="1", so the offset is the undrawn fraction.
            let _ = write!(
                css,
                "stroke-dasharray:1;stroke-dashoffset:{};",
                round(1.0 - length)
            );
        }
        css
    }
}

/// Round to 3 decimals so identical frames produce identical CSS.
pub fn round(v: f32) -> f32 {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Colour with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        Some(Rgba::new(
            channel(0)? as f32,
            channel(2)? as f32,
            channel(4)? as f32,
            1.0,
        ))
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    pub fn lerp(&self, to: &Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba::new(
            lerp(self.r, to.r, t),
            lerp(self.g, to.g, t),
            lerp(self.b, to.b, t),
            lerp(self.a, to.a, t),
        )
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            round(self.a)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_css() {
        assert_eq!(
            MotionStyle::IDENTITY.to_css(),
            "opacity:1;transform:none;filter:none;"
        );
    }

    #[test]
    fn hidden_reveal_css() {
        let style = MotionStyle::hidden().with_y(40.0).with_blur(12.0);
        assert_eq!(
            style.to_css(),
            "opacity:0;transform:translate3d(0px,40px,0);filter:blur(12px);"
        );
    }

    #[test]
    fn lerp_halfway() {
        let from = MotionStyle::hidden().with_y(60.0).with_scale(0.9);
        let mid = from.lerp(&MotionStyle::IDENTITY, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 30.0);
        assert!((mid.scale - 0.95).abs() < 1e-6);
    }

    #[test]
    fn overshoot_keeps_opacity_and_blur_valid() {
        let from = MotionStyle::hidden().with_blur(8.0);
        let past = from.lerp(&MotionStyle::IDENTITY, 1.2);
        assert_eq!(past.opacity, 1.0);
        assert_eq!(past.blur, 0.0);
    }

    #[test]
    fn path_length_css() {
        let style = MotionStyle::hidden().with_path_length(0.25);
        assert!(style.to_css().ends_with("stroke-dasharray:1;stroke-dashoffset:0.75;"));
    }

    #[test]
    fn hex_colours() {
        let red = Rgba::from_hex("#EF4060").unwrap();
        assert_eq!(red, Rgba::new(239.0, 64.0, 96.0, 1.0));
        assert!(Rgba::from_hex("EF4060").is_none());
        assert!(Rgba::from_hex("#EF40").is_none());
        assert_eq!(red.to_css(), "rgba(239, 64, 96, 1)");
    }

    #[test]
    fn colour_lerp() {
        let black = Rgba::new(0.0, 0.0, 0.0, 0.0);
        let white = Rgba::new(255.0, 255.0, 255.0, 1.0);
        assert_eq!(black.lerp(&white, 0.5).to_css(), "rgba(128, 128, 128, 0.5)");
    }
}
