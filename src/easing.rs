// Easing curves for tweened transitions.
// Pure math: normalized time in, eased progress out.

use serde::{Deserialize, Serialize};

/// Easing function for tweened transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Fast start, long settle. Used by nearly every reveal on the page.
    pub const EXPO_OUT: Easing = Easing::CubicBezier(0.16, 1.0, 0.3, 1.0);
    /// Material "standard" curve, used by the navbar entrance.
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
    /// CSS `ease`.
    pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);

    /// Apply the easing to `t`, clamped to [0, 1].
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

}

/// Evaluate a CSS cubic-bezier timing function at `t`.
/// Solves x(s) = t for the curve parameter with Newton steps, falling back to bisection.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    if x1 == y1 && x2 == y2 {
        return t;
    }

    let s = solve_curve_x(x1, x2, t);
    bezier_component(y1, y2, s)
}

fn bezier_component(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn solve_curve_x(x1: f32, x2: f32, t: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = t;
    for _ in 0..8 {
        let err = bezier_component(x1, x2, s) - t;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..40 {
        let x = bezier_component(x1, x2, s);
        if (x - t).abs() < EPSILON {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EXPO_OUT,
        Easing::STANDARD,
        Easing::EASE,
    ];

    #[test]
    fn easing_bounds() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} should start at 0", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?} should end at 1", easing);
        }
    }

    #[test]
    fn easing_is_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= prev - 1e-4, "{:?} decreased at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn expo_out_front_loads_progress() {
        // Most of the motion happens early.
        assert!(Easing::EXPO_OUT.apply(0.25) > 0.7);
        assert!(Easing::EaseIn.apply(0.25) < 0.25);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.apply(0.3);
        let b = Easing::EaseInOut.apply(0.7);
        assert!((a + b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn clamps_input() {
        assert_eq!(Easing::EaseOut.apply(-1.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(2.0), 1.0);
    }
}
