// Piecewise-linear curves: the one numeric mapping every scroll-bound effect uses.
// Inputs must be strictly increasing; that is checked on construction, not on every sample.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// One control point of a [`Curve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub input: f32,
    pub output: f32,
}

/// Ordered list of `(input, output)` control points.
///
/// Sampling interpolates linearly between neighbouring points, returns the exact
/// output at a breakpoint and clamps to the end outputs outside the input range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    pub fn new(points: Vec<CurvePoint>) -> Result<Self, MotionError> {
        if points.is_empty() {
            return Err(MotionError::InvalidCurve {
                index: 0,
                reason: "curve needs at least one point".to_string(),
            });
        }
        for (i, p) in points.iter().enumerate() {
            if !p.input.is_finite() || !p.output.is_finite() {
                return Err(MotionError::InvalidCurve {
                    index: i,
                    reason: "values must be finite".to_string(),
                });
            }
            if i > 0 && p.input <= points[i - 1].input {
                return Err(MotionError::InvalidCurve {
                    index: i,
                    reason: "inputs must be strictly increasing".to_string(),
                });
            }
        }
        Ok(Curve { points })
    }

    /// Build from parallel input and output slices, as animation code usually writes them.
    pub fn from_slices(inputs: &[f32], outputs: &[f32]) -> Result<Self, MotionError> {
        if inputs.len() != outputs.len() {
            return Err(MotionError::InvalidCurve {
                index: inputs.len().min(outputs.len()),
                reason: format!(
                    "{} inputs but {} outputs",
                    inputs.len(),
                    outputs.len()
                ),
            });
        }
        Curve::new(
            inputs
                .iter()
                .zip(outputs)
                .map(|(&input, &output)| CurvePoint { input, output })
                .collect(),
        )
    }

    /// Two-point curve. Falls back to a constant curve when `from_in == to_in`.
    pub fn linear(from_in: f32, to_in: f32, from_out: f32, to_out: f32) -> Self {
        Curve::from_slices(&[from_in, to_in], &[from_out, to_out]).unwrap_or_else(|_| Curve {
            points: vec![CurvePoint {
                input: from_in,
                output: from_out,
            }],
        })
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn sample(&self, x: f32) -> f32 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        if x.is_nan() || x <= first.input {
            return first.output;
        }
        if x >= last.input {
            return last.output;
        }

        // First point whose input is >= x. Guaranteed to be in 1..len.
        let upper = self.points.partition_point(|p| p.input < x);
        let hi = self.points[upper];
        if hi.input == x {
            return hi.output;
        }
        let lo = self.points[upper - 1];
        let t = (x - lo.input) / (hi.input - lo.input);
        lerp(lo.output, hi.output, t)
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
