//! Timing curves.

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Symmetric quadratic ease in/out; the curve settle transitions use.
    EaseInOutQuad,
    Bezier(CubicBezier),
}

impl Easing {
    pub const EASE_IN: Easing = Easing::Bezier(CubicBezier::new(0.42, 0.0, 1.0, 1.0));
    pub const EASE_OUT: Easing = Easing::Bezier(CubicBezier::new(0.0, 0.0, 0.58, 1.0));
    pub const EASE_IN_OUT: Easing = Easing::Bezier(CubicBezier::new(0.42, 0.0, 0.58, 1.0));
    /// Fast out, slow in.
    pub const STANDARD: Easing = Easing::Bezier(CubicBezier::new(0.4, 0.0, 0.2, 1.0));

    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let remaining = 2.0 - 2.0 * t;
                    1.0 - remaining * remaining / 2.0
                }
            }
            Easing::Bezier(curve) => curve.solve(t),
        }
    }
}

/// CSS-style cubic bezier with fixed end points (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// Polynomial coefficients for one axis: `((a*t + b)*t + c)*t`.
#[derive(Clone, Copy)]
struct Axis {
    a: f32,
    b: f32,
    c: f32,
}

impl Axis {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self {
            a: 1.0 - c - b,
            b,
            c,
        }
    }

    fn sample(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(&self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

const SOLVE_EPSILON: f32 = 1e-6;

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x`.
    pub fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let x_axis = Axis::new(self.x1, self.x2);
        let y_axis = Axis::new(self.y1, self.y2);
        y_axis.sample(Self::parameter_for(x_axis, x))
    }

    /// Finds `t` with `x_axis(t) == x`: Newton first, bisection if the slope
    /// flattens out.
    fn parameter_for(x_axis: Axis, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let error = x_axis.sample(t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = x_axis.slope(t);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        for _ in 0..16 {
            let error = x_axis.sample(t) - x;
            if error.abs() < SOLVE_EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
