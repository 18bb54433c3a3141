use crate::math::kernel::impulseresponse::ImpulseResponse;

/// Even reflection of a causal kernel: the response of running the filter
/// forward and then backward in time, which removes its phase lag.
///
/// With F(x) = sign(x) · kernel.integral(0, |x|), `integral(a, b) = F(b) - F(a)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardBackward<K> {
    kernel: K,
}

impl<K> ForwardBackward<K> where
    K: ImpulseResponse {
    pub fn new(kernel: K) -> ForwardBackward<K> {
        ForwardBackward { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    fn signed_area(&self, x: f64) -> f64 {
        if x < 0.0 {
            -self.kernel.integral(0.0, -x)
        } else {
            self.kernel.integral(0.0, x)
        }
    }
}

impl<K> ImpulseResponse for ForwardBackward<K> where
    K: ImpulseResponse {
    fn value(&self, t: f64) -> f64 {
        if t > 0.0 {
            self.kernel.value(t)
        } else {
            self.kernel.value(-t)
        }
    }

    fn integral(&self, a: f64, b: f64) -> f64 {
        self.signed_area(b) - self.signed_area(a)
    }
}
