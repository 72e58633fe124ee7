use std::time::Duration;

use crate::transition::Delta;

/// How long a row takes to slide back into place.
pub const SLIDE_DURATION: Duration = Duration::from_millis(500);

/// Strong ease-out used for row slides.
pub const SLIDE_EASING: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const EPSILON: f64 = 1e-7;

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    pub fn ease(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.solve_t(x);
        bezier(t, self.y1, self.y2)
    }

    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = bezier(t, self.x1, self.x2) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let slope = bezier_slope(t, self.x1, self.x2);
            if slope.abs() < EPSILON {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = bezier(t, self.x1, self.x2);
            if (value - x).abs() < EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

// One axis of a bezier with endpoints fixed at 0 and 1.
fn bezier(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// A row sliding from `delta` back to its resting position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub delta: Delta,
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl Animation {
    pub fn slide(delta: Delta) -> Self {
        Self {
            delta,
            duration: SLIDE_DURATION,
            easing: SLIDE_EASING,
        }
    }

    /// Offset to apply to the row `elapsed` after the animation started.
    pub fn offset_at(&self, elapsed: Duration) -> Delta {
        let remaining = 1.0 - self.easing.ease(self.progress(elapsed));
        Delta::new(self.delta.dx * remaining, self.delta.dy * remaining)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}
