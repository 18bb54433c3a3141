use std::f64::consts::PI;

use crate::math::kernel::impulseresponse::{
    ImpulseResponse,
    UNBOUNDED
};
use crate::math::specialfunction::{
    si,
    sinc
};

/// Ideal low-pass filter with angular cut-off `1 / period`.
///
///   H(t) = Si(t/period) / π
///   h(t) = H'(t) = 1/(period·π) · sinc(t/period)
///
/// The area over the whole line is 1, so constant signals pass unchanged.
/// `h` is `sinc(t/period)`, not `sinc(2t/period)`: only the former is the
/// derivative of `H`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brickwall {
    period: f64,
}

impl Brickwall {
    pub fn new(period: f64) -> Brickwall {
        Brickwall { period }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Settled to exactly ±1/2 from `±UNBOUNDED` outward.
    pub fn antiderivative(&self, t: f64) -> f64 {
        if t.abs() >= UNBOUNDED {
            0.5 * t.signum()
        } else {
            si(t / self.period) / PI
        }
    }
}

impl ImpulseResponse for Brickwall {
    fn value(&self, t: f64) -> f64 {
        1.0 / (self.period * PI) * sinc(t / self.period)
    }

    fn integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}
