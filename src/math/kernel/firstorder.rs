use crate::math::kernel::impulseresponse::ImpulseResponse;

/// Causal single-pole low-pass:
///
///   h(t) = gain · e^(-t/τ)   for t ≥ 0
///   h(t) = 0                 otherwise
///
/// Its area is `τ · gain`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrder {
    tau: f64,
    gain: f64,
}

impl FirstOrder {
    pub fn new(tau: f64) -> FirstOrder {
        FirstOrder::with_gain(tau, 1.0)
    }

    pub fn with_gain(tau: f64, gain: f64) -> FirstOrder {
        FirstOrder { tau, gain }
    }

    /// Gain `1 / (2τ)`, so the forward-backward reflection integrates to 1.
    pub fn normalized(tau: f64) -> FirstOrder {
        FirstOrder::with_gain(tau, 0.5 / tau)
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    #[inline]
    fn decay(&self, t: f64) -> f64 {
        (-t.max(0.0) / self.tau).exp()
    }
}

impl ImpulseResponse for FirstOrder {
    fn value(&self, t: f64) -> f64 {
        if t < 0.0 {
            0.0
        } else {
            self.gain * (-t / self.tau).exp()
        }
    }

    fn integral(&self, a: f64, b: f64) -> f64 {
        -self.tau * self.gain * (self.decay(b) - self.decay(a))
    }
}
