// Damped harmonic oscillator, solved analytically so any frame delta is stable.
// Springs smooth pointer offsets, drive counters and give some reveals their overshoot.

use serde::{Deserialize, Serialize};

/// Spring parameters. Mass-spring-damper with rest thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target under which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        SpringConfig {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        SpringConfig {
            stiffness,
            damping,
            ..Default::default()
        }
    }

    /// Critically damped spring that covers ~98% of its travel in `duration` seconds.
    pub fn from_duration(duration: f32) -> Self {
        let omega = 6.0 / duration.max(0.01);
        SpringConfig {
            stiffness: omega * omega,
            damping: 2.0 * omega,
            ..Default::default()
        }
    }

    pub fn with_rest_delta(mut self, rest_delta: f32) -> Self {
        self.rest_delta = rest_delta;
        self
    }

    fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Displacement and velocity after `t` seconds, starting `x0` away from the
    /// target with velocity `v0`.
    pub fn solve(&self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-4 {
            // Critically damped.
            let c2 = v0 + w0 * x0;
            let decay = (-w0 * t).exp();
            let x = (x0 + c2 * t) * decay;
            let v = (c2 - w0 * (x0 + c2 * t)) * decay;
            (x, v)
        } else if zeta < 1.0 {
            // Underdamped: oscillates around the target.
            let a = zeta * w0;
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let s = (v0 + a * x0) / wd;
            let decay = (-a * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let x = decay * (x0 * cos + s * sin);
            let v = decay * ((-a * x0 + wd * s) * cos + (-a * s - wd * x0) * sin);
            (x, v)
        } else {
            // Overdamped: two real decay rates.
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let a = (v0 - r2 * x0) / (r1 - r2);
            let b = x0 - a;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (a * e1 + b * e2, r1 * a * e1 + r2 * b * e2)
        }
    }

    /// Progress of a 0 → 1 transition from rest, `t` seconds in.
    pub fn progress(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        let (x, v) = self.solve(-1.0, 0.0, t);
        if x.abs() < self.rest_delta && v.abs() < self.rest_speed {
            1.0
        } else {
            1.0 + x
        }
    }
}

/// A value that follows its target through a spring.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringValue {
    config: SpringConfig,
    current: f32,
    velocity: f32,
    target: f32,
}

impl SpringValue {
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        SpringValue {
            config,
            current: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with no motion.
    pub fn snap(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Returns the new value.
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.is_at_rest() || dt <= 0.0 {
            return self.current;
        }
        let (x, v) = self
            .config
            .solve(self.current - self.target, self.velocity, dt);
        if x.abs() < self.config.rest_delta && v.abs() < self.config.rest_speed {
            self.current = self.target;
            self.velocity = 0.0;
        } else {
            self.current = self.target + x;
            self.velocity = v;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut SpringValue, dt: f32, steps: usize) {
        for _ in 0..steps {
            spring.step(dt);
        }
    }

    #[test]
    fn settles_exactly_on_target() {
        for config in [
            SpringConfig::default(),
            SpringConfig::new(200.0, 15.0),
            SpringConfig::from_duration(2.0),
            SpringConfig::new(100.0, 60.0),
        ] {
            let mut spring = SpringValue::new(0.0, config);
            spring.set_target(5000.0);
            settle(&mut spring, 1.0 / 60.0, 60 * 30);
            assert_eq!(spring.value(), 5000.0, "{:?} did not settle", config);
            assert!(spring.is_at_rest());
        }
    }

    #[test]
    fn underdamped_overshoots() {
        let config = SpringConfig::new(100.0, 5.0);
        let peak = (1..200)
            .map(|i| config.progress(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn critically_damped_never_overshoots() {
        let config = SpringConfig::from_duration(1.0);
        for i in 0..300 {
            assert!(config.progress(i as f32 / 100.0) <= 1.0 + 1e-5);
        }
        assert!(config.progress(1.0) > 0.95);
    }

    #[test]
    fn progress_starts_at_zero() {
        assert_eq!(SpringConfig::default().progress(0.0), 0.0);
        assert_eq!(SpringConfig::default().progress(-1.0), 0.0);
    }

    #[test]
    fn large_steps_stay_stable() {
        let mut spring = SpringValue::new(0.0, SpringConfig::new(300.0, 20.0));
        spring.set_target(10.0);
        spring.step(5.0);
        assert_eq!(spring.value(), 10.0);
    }

    #[test]
    fn snap_stops_motion() {
        let mut spring = SpringValue::new(0.0, SpringConfig::default());
        spring.set_target(1.0);
        spring.step(0.05);
        spring.snap(3.0);
        assert!(spring.is_at_rest());
        assert_eq!(spring.step(0.1), 3.0);
    }
}
