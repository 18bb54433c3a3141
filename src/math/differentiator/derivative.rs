use log::trace;

use crate::math::curve::curve::Curve;

/// Smallest half-width tried before giving up on convergence.
pub const DEFAULT_MIN_STEP: f64 = 1e-3;

const INITIAL_STEP: f64 = 1e3;
const TOLERANCE: f64 = 1e-3;

/// Centered difference with adaptive step-halving.
///
/// Starts at h = 1000 and halves h until two consecutive estimates differ by
/// less than 1e-3 or h reaches `min_step`. Each round costs two evaluations
/// of `f`. When the loop runs out of steps the last estimate is returned as
/// is; only accuracy degrades.
pub fn central_difference<F>(f: F, x: f64, min_step: f64) -> f64 where
    F: Fn(f64) -> f64 {
    let mut h = INITIAL_STEP;
    let mut d = f64::INFINITY;
    loop {
        let d_old = d;
        d = (f(x + h) - f(x - h)) / (2.0 * h);
        if (d - d_old).abs() < TOLERANCE {
            return d;
        }
        h /= 2.0;
        if h <= min_step {
            trace!("derivative at {} did not settle, last step {}, estimate {}", x, h * 2.0, d);
            return d;
        }
    }
}

/// Rate of change of `curve`, multiplied by `scale` (e.g. 3600 for per-hour
/// rates from a curve over seconds).
#[derive(Debug, Clone)]
pub struct Derivative<C> {
    curve: C,
    scale: f64,
    min_step: f64,
}

impl<C> Derivative<C> where
    C: Curve {
    pub fn new(curve: C, scale: f64) -> Derivative<C> {
        Derivative { curve, scale, min_step: DEFAULT_MIN_STEP }
    }

    pub fn with_min_step(mut self, min_step: f64) -> Derivative<C> {
        self.min_step = min_step;
        self
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_step(&self) -> f64 {
        self.min_step
    }
}

impl<C> Curve for Derivative<C> where
    C: Curve {
    fn value(&self, x: f64) -> f64 {
        self.scale * central_difference(|t| self.curve.value(t), x, self.min_step)
    }
}

pub fn derivative<C>(curve: C, scale: f64, min_step: f64) -> Derivative<C> where
    C: Curve {
    Derivative::new(curve, scale).with_min_step(min_step)
}
